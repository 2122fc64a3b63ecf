//! Toast queue shown in a corner of every page.
//!
//! Actions report their outcome here: a success after a mutation, a warning
//! when the backend refused it, an error when the request never completed.
//! Each toast dismisses itself after [`TOAST_TIMEOUT`].

use std::time::Duration;

use dioxus::prelude::*;
use school::SubmitOutcome;

use crate::timer::sleep;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

pub const TOAST_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

impl From<&SubmitOutcome> for ToastLevel {
    fn from(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Saved(_) => ToastLevel::Success,
            SubmitOutcome::Refused(_) => ToastLevel::Warning,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Queue a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            level,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Queue a toast and schedule its dismissal.
pub fn show_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    match level {
        ToastLevel::Error => tracing::error!("{}", message),
        ToastLevel::Warning => tracing::warn!("{}", message),
        _ => tracing::debug!("{}", message),
    }
    let id = toasts.write().push(level, message);
    let mut toasts = *toasts;
    spawn(async move {
        sleep(TOAST_TIMEOUT).await;
        toasts.write().dismiss(id);
    });
}

/// Toast a form submit outcome. Returns whether the form should close.
pub fn announce(toasts: &mut Signal<Toasts>, outcome: &SubmitOutcome) -> bool {
    show_toast(toasts, outcome.into(), outcome.message());
    outcome.closes()
}

/// Provides the toast queue to its children and renders the open toasts.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let entries = toasts().entries.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        {children}

        div {
            class: "toast-viewport",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.level.class()}",
                    role: "status",
                    span { "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Success, "Room created");
        let second = toasts.push(ToastLevel::Warning, "Room name already exists");
        assert!(second > first);
        assert_eq!(toasts.entries.len(), 2);
        assert_eq!(toasts.entries[1].level, ToastLevel::Warning);
    }

    #[test]
    fn test_dismiss_only_matching() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastLevel::Info, "a");
        toasts.push(ToastLevel::Info, "b");
        toasts.dismiss(first);
        toasts.dismiss(99);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].message, "b");
    }

    #[test]
    fn test_room_create_outcomes() {
        let created = SubmitOutcome::of(
            &school::ActionResult::<school::Room>::completed(None),
            "Room created",
            "Could not save room",
        );
        assert_eq!(ToastLevel::from(&created), ToastLevel::Success);

        let refused = SubmitOutcome::of(
            &school::ActionResult::<school::Room>::failure(school::ApiError::new(400, "Capacity exceeded")),
            "Room created",
            "Could not save room",
        );
        assert_eq!(ToastLevel::from(&refused), ToastLevel::Warning);
        assert_eq!(refused.message(), "Capacity exceeded");
    }
}
