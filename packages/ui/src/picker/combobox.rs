use dioxus::prelude::*;
use school::{PickerOption, SingleSelection};

use super::{use_paged_picker, OptionList, PickerSource};

/// Single-choice picker with a searchable popover.
///
/// `chosen` lets the trigger show a label before the list has loaded the
/// selected item.
#[component]
pub fn Combobox<S: PickerSource>(
    source: S,
    #[props(default)] id: String,
    #[props(default = "Select...".to_string())] placeholder: String,
    #[props(default)] chosen: Option<PickerOption>,
    #[props(default)] clearable: bool,
    on_change: EventHandler<Option<PickerOption>>,
) -> Element {
    let picker = use_paged_picker(source);
    let mut selection = use_signal(move || match chosen {
        Some(option) => SingleSelection::with_chosen(option),
        None => SingleSelection::default(),
    });
    let mut open = use_signal(|| false);
    let mut search = use_signal(String::new);

    let list = picker.list();
    let options = picker.options();
    let label = selection
        .read()
        .label(&options)
        .map(str::to_string)
        .unwrap_or_else(|| placeholder.clone());
    let selected: Vec<String> = selection.read().value().map(str::to_string).into_iter().collect();
    let has_value = !selected.is_empty();

    rsx! {
        div {
            class: "picker",
            button {
                id: "{id}",
                class: if has_value { "picker-trigger" } else { "picker-trigger placeholder" },
                r#type: "button",
                onclick: move |_| open.toggle(),
                span { "{label}" }
                if clearable && has_value {
                    span {
                        class: "picker-clear",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            selection.write().clear();
                            on_change.call(None);
                        },
                        "×"
                    }
                }
            }
            if open() {
                div {
                    class: "picker-popover",
                    input {
                        class: "input picker-search",
                        placeholder: "Search...",
                        value: "{search}",
                        oninput: move |evt: FormEvent| {
                            search.set(evt.value());
                            picker.set_keyword(evt.value());
                        },
                    }
                    OptionList {
                        options: options.clone(),
                        selected: selected.clone(),
                        loading: list.read().is_loading(),
                        error: list.read().error().map(str::to_string),
                        on_pick: move |option: PickerOption| {
                            selection.write().select(option.clone());
                            open.set(false);
                            on_change.call(Some(option));
                        },
                        on_near_bottom: move |_| picker.load_more(),
                    }
                }
            }
        }
    }
}
