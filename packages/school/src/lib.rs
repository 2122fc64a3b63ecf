//! Platform-independent state for the piano school front-end.
//!
//! Nothing in here touches the DOM or the network. The `ui` crate wires these
//! types into Dioxus signals and the `api` crate ships them across the
//! server-function boundary.

pub mod action;
pub mod cache;
pub mod config;
pub mod dialog;
pub mod forms;
pub mod models;
pub mod paging;
pub mod picker;
pub mod progress;
pub mod survey;

pub use action::{ActionResult, ApiError};
pub use cache::{QueryKey, QueryVersions};
pub use config::SchoolConfig;
pub use dialog::{
    ConfirmDialog, DialogPhase, FetcherState, LoadingDialog, LoadingOutcome, SubmitOutcome,
};
pub use forms::{AccountForm, EntranceTestForm, LoginForm, RoomForm};
pub use models::{
    format_amount, split_iso_datetime, Account, AccountStatus, Class, ClassStatus, EntranceTest,
    Level, Notification, Role, Room, RoomStatus, Transaction, TransactionStatus, Tuition,
};
pub use paging::{normalize_page, Page, PageMeta, PageQuery};
pub use picker::{
    Badge, Debouncer, MultiSelection, PagedList, PickerOption, PickerRequest, Pickable,
    SingleSelection,
};
pub use progress::{JobProgress, ProgressTracker};
pub use survey::{EntranceSurvey, SurveyStep, SurveyWizard};
