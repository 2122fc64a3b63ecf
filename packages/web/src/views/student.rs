use dioxus::prelude::*;
use ui::views::{NotificationsView, TransactionsView, TuitionsView};

use crate::Route;

/// Redirect `/account` to the student's tuition.
#[component]
pub fn StudentHome() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::StudentTuitions { page: 1 });
    });
    rsx! {}
}

#[component]
pub fn StudentTransactions(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        TransactionsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::StudentTransactions { page });
            },
        }
    }
}

#[component]
pub fn StudentTuitions(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        TuitionsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::StudentTuitions { page });
            },
        }
    }
}

#[component]
pub fn StudentNotifications(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        NotificationsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::StudentNotifications { page });
            },
        }
    }
}
