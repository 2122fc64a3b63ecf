use dioxus::prelude::*;
use ui::views::{EntranceSurveyView, LoginView};
use ui::RoleGate;

use crate::Route;

/// Landing page with the two public entry points.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "landing",
            h1 { "Piano School" }
            p { "Lessons for every level, from first notes to concert pieces." }
            div {
                class: "flex gap-2",
                Link { class: "btn btn-primary", to: Route::Survey {}, "Take the entrance survey" }
                Link { class: "btn btn-outline", to: Route::Login {}, "Sign in" }
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        RoleGate {
            path: "/login".to_string(),
            LoginView {}
        }
    }
}

#[component]
pub fn Survey() -> Element {
    let nav = use_navigator();
    rsx! {
        EntranceSurveyView {
            on_submitted: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "landing",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "btn btn-outline", to: Route::Home {}, "Back home" }
        }
    }
}
