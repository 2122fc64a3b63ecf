use dioxus::prelude::*;
use school::{Badge, MultiSelection, PickerOption};

use super::{use_paged_picker, OptionList, PickerSource};
use crate::components::Pill;
use crate::config::use_school_config;

/// Multi-choice picker. Selected values render as dismissible badges; past
/// `badge_cap` the rest collapse into one "+N more" badge, and dismissing
/// that badge trims the selection down to the cap.
#[component]
pub fn MultiSelect<S: PickerSource>(
    source: S,
    #[props(default)] id: String,
    #[props(default = "Select...".to_string())] placeholder: String,
    #[props(default)] chosen: Vec<PickerOption>,
    #[props(default)] badge_cap: Option<usize>,
    on_change: EventHandler<Vec<String>>,
) -> Element {
    let config = use_school_config();
    let picker = use_paged_picker(source);
    let mut selection = use_signal(move || MultiSelection::with_options(chosen));
    let mut open = use_signal(|| false);
    let mut search = use_signal(String::new);

    let cap = badge_cap.unwrap_or(config.read().picker.badge_cap);
    let list = picker.list();
    let options = picker.options();
    let badges = selection.read().badges(cap, &options);
    let selected = selection.read().values().to_vec();
    let all_selected = selection.read().all_selected(&options);

    let mut update = move |change: &dyn Fn(&mut MultiSelection)| {
        change(&mut *selection.write());
        on_change.call(selection.peek().values().to_vec());
    };

    rsx! {
        div {
            class: "picker",
            div {
                id: "{id}",
                class: "picker-trigger multi",
                onclick: move |_| open.toggle(),
                if badges.is_empty() {
                    span { class: "placeholder", "{placeholder}" }
                }
                for badge in badges {
                    {match badge {
                        Badge::Item(option) => rsx! {
                            Pill {
                                key: "{option.value}",
                                on_dismiss: {
                                    let value = option.value.clone();
                                    move |_| update(&|s: &mut MultiSelection| s.remove(&value))
                                },
                                "{option.label}"
                            }
                        },
                        Badge::Overflow(hidden) => {
                            let overflow_key = "overflow";
                            rsx! {
                                Pill {
                                    key: "{overflow_key}",
                                    on_dismiss: move |_| update(&|s: &mut MultiSelection| s.clear_overflow(cap)),
                                    "+{hidden} more"
                                }
                            }
                        }
                    }}
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
                    div {
                        class: "picker-actions",
                        button {
                            r#type: "button",
                            disabled: options.is_empty(),
                            onclick: {
                                let loaded = options.clone();
                                move |_| update(&|s: &mut MultiSelection| s.toggle_all(&loaded))
                            },
                            if all_selected { "Clear all" } else { "Select all" }
                        }
                        button {
                            r#type: "button",
                            disabled: selected.is_empty(),
                            onclick: move |_| update(&|s: &mut MultiSelection| s.clear()),
                            "Clear"
                        }
                    }
                    OptionList {
                        options: options.clone(),
                        selected: selected.clone(),
                        loading: list.read().is_loading(),
                        error: list.read().error().map(str::to_string),
                        on_pick: move |option: PickerOption| update(&|s: &mut MultiSelection| s.toggle(&option)),
                        on_near_bottom: move |_| picker.load_more(),
                    }
                }
            }
        }
    }
}
