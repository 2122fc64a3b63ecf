use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-neutral-700",
            r#for: "{html_for}",
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] invalid: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: if invalid { "input input-invalid {class}" } else { "input {class}" },
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// A native select over `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default)] id: String,
    #[props(default)] class: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt.value()),
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}

/// Field-scoped validation message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "mt-1 text-xs text-red-600", "{message}" }
        },
        None => rsx! {},
    }
}
