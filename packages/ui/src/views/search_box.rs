use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};

/// Keyword box above a table. Submitting reports the keyword; the route
/// resets to page 1.
#[component]
pub fn SearchBox(
    keyword: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(|| keyword.clone());

    rsx! {
        form {
            class: "flex gap-2",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_search.call(draft().trim().to_string());
            },
            Input {
                class: "w-64",
                placeholder: placeholder,
                value: draft(),
                oninput: move |evt: FormEvent| draft.set(evt.value()),
            }
            Button { variant: ButtonVariant::Outline, r#type: "submit", "Search" }
        }
    }
}
