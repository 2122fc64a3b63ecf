//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/styling/app.css");

mod timer;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, RoleGate};

mod config;
pub use config::{use_school_config, ConfigProvider};

pub mod toast;
pub use toast::{show_toast, use_toasts, ToastLevel, ToastProvider};

mod query;
pub use query::{use_query_client, QueryClient, QueryProvider};

pub mod picker;
pub use picker::{use_paged_picker, Combobox, MultiSelect, PickerSource};

pub mod data_table;
pub use data_table::{Column, DataTable, RemoteDataTable};

pub mod dialogs;
pub use dialogs::{use_confirmation_dialog, use_loading_dialog};

mod progress;
pub use progress::{use_job_progress, JobPoller, ProgressBar};

/// Every context provider the pages rely on, outermost first.
#[component]
pub fn AppProviders(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: APP_CSS }
        ConfigProvider {
            QueryProvider {
                ToastProvider {
                    AuthProvider {
                        {children}
                    }
                }
            }
        }
    }
}
