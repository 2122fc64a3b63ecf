use dioxus::prelude::*;
use ui::views::{ClassFilters, ClassesView, EntranceTestsView, NotificationsView, RoomsView};

use super::class_filters;
use crate::Route;

/// Redirect `/staff` to the classes table.
#[component]
pub fn StaffHome() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::StaffClasses {
            page: 1,
            level: String::new(),
            teachers: String::new(),
        });
    });
    rsx! {}
}

#[component]
pub fn StaffRooms(page: u32, keyword: String) -> Element {
    let nav = use_navigator();
    rsx! {
        RoomsView {
            page,
            keyword,
            on_params: move |(page, keyword): (u32, String)| {
                nav.push(Route::StaffRooms { page, keyword });
            },
        }
    }
}

#[component]
pub fn StaffClasses(page: u32, level: String, teachers: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ClassesView {
            page,
            filters: class_filters(&level, &teachers),
            can_arrange: true,
            on_params: move |(page, filters): (u32, ClassFilters)| {
                nav.push(Route::StaffClasses {
                    page,
                    level: filters.level_id,
                    teachers: filters.teacher_ids.join(","),
                });
            },
        }
    }
}

#[component]
pub fn StaffEntranceTests(page: u32, keyword: String) -> Element {
    let nav = use_navigator();
    rsx! {
        EntranceTestsView {
            page,
            keyword,
            on_params: move |(page, keyword): (u32, String)| {
                nav.push(Route::StaffEntranceTests { page, keyword });
            },
        }
    }
}

#[component]
pub fn StaffNotifications(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        NotificationsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::StaffNotifications { page });
            },
        }
    }
}
