mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod search_box;
pub use search_box::SearchBox;

mod dashboard;
pub use dashboard::{DashboardShell, Section};

mod login;
pub use login::LoginView;

mod rooms;
pub use rooms::{RoomFormDialog, RoomsView};

mod accounts;
pub use accounts::AccountsView;

mod classes;
pub use classes::{ClassFilters, ClassesView};

mod entrance_tests;
pub use entrance_tests::EntranceTestsView;

mod finance;
pub use finance::{TransactionsView, TuitionsView};

mod notifications;
pub use notifications::NotificationsView;

mod survey;
pub use survey::EntranceSurveyView;
