use dioxus::prelude::*;
use ui::views::{ClassFilters, ClassesView, NotificationsView};

use super::class_filters;
use crate::Route;

/// Redirect `/teacher` to the teacher's classes.
#[component]
pub fn TeacherHome() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::TeacherClasses {
            page: 1,
            level: String::new(),
            teachers: String::new(),
        });
    });
    rsx! {}
}

/// Classes are scoped to the signed-in teacher by the backend; teachers
/// cannot start auto-arrange.
#[component]
pub fn TeacherClasses(page: u32, level: String, teachers: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ClassesView {
            page,
            filters: class_filters(&level, &teachers),
            on_params: move |(page, filters): (u32, ClassFilters)| {
                nav.push(Route::TeacherClasses {
                    page,
                    level: filters.level_id,
                    teachers: filters.teacher_ids.join(","),
                });
            },
        }
    }
}

#[component]
pub fn TeacherNotifications(page: u32) -> Element {
    let nav = use_navigator();
    rsx! {
        NotificationsView {
            page,
            on_page_change: move |page: u32| {
                nav.push(Route::TeacherNotifications { page });
            },
        }
    }
}
