//! Confirmation and loading dialogs wrapped around mutating actions.

use std::future::Future;

use dioxus::prelude::*;
use school::{ActionResult, ApiError, ConfirmDialog, FetcherState, LoadingDialog, LoadingOutcome};

use crate::components::{Button, ButtonVariant};
use crate::views::ModalOverlay;

/// State of one action submission.
pub type Fetcher<T> = Signal<FetcherState<ActionResult<T>>>;

pub fn use_fetcher<T: 'static>() -> Fetcher<T> {
    use_signal(FetcherState::default)
}

/// Run an action through `fetcher`, folding a transport failure into a
/// failed [`ActionResult`].
pub async fn submit<T, F>(mut fetcher: Fetcher<T>, action: F) -> ActionResult<T>
where
    T: Clone + 'static,
    F: Future<Output = Result<ActionResult<T>, ServerFnError>>,
{
    fetcher.set(FetcherState::Submitting);
    let result = match action.await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Action failed: {}", e);
            ActionResult::failure(ApiError::new(500, e.to_string()))
        }
    };
    fetcher.set(FetcherState::Done(result.clone()));
    result
}

/// Handle returned by [`use_confirmation_dialog`].
#[derive(Clone, Copy, PartialEq)]
pub struct Confirmation {
    state: Signal<ConfirmDialog>,
    title: Signal<String>,
    description: Signal<String>,
    on_confirm: Callback<()>,
}

impl Confirmation {
    pub fn open(&self) {
        let mut state = self.state;
        state.write().open();
    }

    pub fn dialog(&self) -> Element {
        rsx! {
            ConfirmationDialog {
                state: self.state,
                title: self.title.read().clone(),
                description: self.description.read().clone(),
                on_confirm: self.on_confirm,
            }
        }
    }
}

/// A dialog asking the user to confirm before `on_confirm` runs.
pub fn use_confirmation_dialog(
    title: impl Into<String>,
    description: impl Into<String>,
    on_confirm: impl FnMut(()) + 'static,
) -> Confirmation {
    let title = title.into();
    let description = description.into();
    let state = use_signal(ConfirmDialog::default);
    let title = use_signal(move || title);
    let description = use_signal(move || description);
    let on_confirm = use_callback(on_confirm);
    Confirmation {
        state,
        title,
        description,
        on_confirm,
    }
}

#[component]
fn ConfirmationDialog(
    mut state: Signal<ConfirmDialog>,
    title: String,
    description: String,
    on_confirm: Callback<()>,
) -> Element {
    if !state.read().is_open() {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            on_close: move |_| state.write().cancel(),
            div {
                class: "p-6",
                role: "alertdialog",
                h2 { class: "m-0 mb-2 text-lg font-semibold text-neutral-800", "{title}" }
                p { class: "m-0 text-sm text-neutral-600", "{description}" }
                div {
                    class: "flex justify-end gap-2 mt-5",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| state.write().cancel(),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| {
                            if state.write().confirm() {
                                on_confirm.call(());
                            }
                        },
                        "Confirm"
                    }
                }
            }
        }
    }
}

/// Handle returned by [`use_loading_dialog`].
pub struct Loading<T: 'static> {
    state: Signal<LoadingDialog>,
    fetcher: Fetcher<T>,
}

impl<T: 'static> Clone for Loading<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Loading<T> {}

impl<T: Clone + PartialEq + 'static> Loading<T> {
    pub fn dialog(&self) -> Element {
        let fetcher = self.fetcher.read();
        let error = fetcher
            .result()
            .and_then(|result| result.error_message())
            .map(str::to_string);
        rsx! {
            LoadingDialogView {
                state: self.state,
                submitting: fetcher.is_submitting(),
                error,
            }
        }
    }
}

/// A busy dialog that follows `fetcher`. It opens when the fetcher starts
/// submitting and stays open until a result is present; `action` runs once
/// when that result is a success.
pub fn use_loading_dialog<T: Clone + PartialEq + 'static>(
    fetcher: Fetcher<T>,
    action: impl FnMut(ActionResult<T>) + 'static,
) -> Loading<T> {
    let mut state = use_signal(LoadingDialog::default);
    let action = use_callback(action);

    use_effect(move || {
        let current = fetcher.read().clone();
        let outcome = state.write().observe(&current, |result| result.success);
        if outcome == LoadingOutcome::RunAction {
            if let FetcherState::Done(result) = current {
                action.call(result);
            }
        }
    });

    Loading { state, fetcher }
}

#[component]
fn LoadingDialogView(mut state: Signal<LoadingDialog>, submitting: bool, error: Option<String>) -> Element {
    if !state.read().is_open() {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !submitting {
                    state.write().close();
                }
            },
            div {
                class: "p-6",
                role: "status",
                if submitting {
                    div { class: "flex items-center gap-3", span { class: "spinner" } "Processing..." }
                } else {
                    {match error {
                        Some(message) => rsx! {
                            p { class: "m-0 text-sm text-red-600", "{message}" }
                        },
                        None => rsx! {
                            p { class: "m-0 text-sm text-green-700", "Done." }
                        },
                    }}
                    div {
                        class: "flex justify-end mt-5",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| state.write().close(),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
