use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PillTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

/// Compact status label used in table cells and picker badges.
#[component]
pub fn Pill(
    #[props(default)] tone: PillTone,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let tone_class = match tone {
        PillTone::Neutral => "pill",
        PillTone::Success => "pill pill-success",
        PillTone::Warning => "pill pill-warning",
        PillTone::Danger => "pill pill-danger",
    };
    rsx! {
        span {
            class: "{tone_class}",
            {children}
            if let Some(on_dismiss) = on_dismiss {
                button {
                    class: "pill-dismiss",
                    r#type: "button",
                    title: "Remove",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_dismiss.call(());
                    },
                    "×"
                }
            }
        }
    }
}
