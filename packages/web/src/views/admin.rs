use dioxus::prelude::*;
use ui::views::{
    AccountsView, ClassFilters, ClassesView, EntranceTestsView, NotificationsView, RoomsView, TransactionsView,
    TuitionsView,
};

use super::class_filters;
use crate::Route;

/// Redirect `/admin` to the rooms table.
#[component]
pub fn AdminHome() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::AdminRooms {
            page: 1,
            keyword: String::new(),
        });
    });
    rsx! {}
}

#[component]
pub fn AdminRooms(page: u32, keyword: String) -> Element {
    let nav = use_navigator();
    rsx! {
        RoomsView {
            page,
            keyword,
            on_params: move |(page, keyword): (u32, String)| {
                nav.push(Route::AdminRooms { page, keyword });
            },
        }
    }
}

#[component]
pub fn AdminAccounts(page: u32, keyword: String, role: String) -> Element {
    let nav = use_navigator();
    rsx! {
        AccountsView {
            page,
            keyword,
            role,
            on_params: move |(page, keyword, role): (u32, String, String)| {
                nav.push(Route::AdminAccounts { page, keyword, role });
            },
        }
    }
}

#[component]
pub fn AdminClasses(page: u32, level: String, teachers: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ClassesView {
            page,
            filters: class_filters(&level, &teachers),
            can_arrange: true,
            on_params: move |(page, filters): (u32, ClassFilters)| {
                nav.push(Route::AdminClasses {
                    page,
                    level: filters.level_id,
                    teachers: filters.teacher_ids.join(","),
                });
            },
        }
    }
}

#[component]
pub fn AdminEntranceTests(page: u32, keyword: String) -> Element {
    let nav = use_navigator();
    rsx! {
        EntranceTestsView {
            page,
            keyword,
            on_params: move |(page, keyword): (u32, String)| {
                nav.push(Route::AdminEntranceTests { page, keyword });
            },
        }
    }
}

#[component]
pub fn AdminTransactions(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        TransactionsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::AdminTransactions { page });
            },
        }
    }
}

#[component]
pub fn AdminTuitions(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        TuitionsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::AdminTuitions { page });
            },
        }
    }
}

#[component]
pub fn AdminNotifications(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        NotificationsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::AdminNotifications { page });
            },
        }
    }
}
