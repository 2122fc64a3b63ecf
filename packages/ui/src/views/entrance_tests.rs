//! Entrance tests screen: table of sessions and the scheduling dialog.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use school::forms::{check, EntranceTestForm};
use school::{normalize_page, split_iso_datetime, EntranceTest, PageQuery, PickerOption, QueryKey, Role};

use super::{ModalOverlay, SearchBox};
use crate::components::{Button, ButtonVariant, FieldError, Input, Label, Pill, PillTone};
use crate::config::use_school_config;
use crate::data_table::{Column, RemoteDataTable};
use crate::dialogs::{submit, use_fetcher, use_loading_dialog};
use crate::picker::{AccountSource, Combobox, RoomSource};
use crate::query::use_query_client;

#[component]
pub fn EntranceTestsView(page: u32, keyword: String, on_params: EventHandler<(u32, String)>) -> Element {
    let queries = use_query_client();
    let config = use_school_config();
    let mut creating = use_signal(|| false);
    let page = normalize_page(page);

    let tests = use_resource(use_reactive((&page, &keyword), move |(page, keyword)| {
        let key = QueryKey::new(["entrance-tests"]).with(format!("page={page}")).with(format!("keyword={keyword}"));
        let _version = queries.version(&key);
        let query = PageQuery::new(keyword, page, config.read().table.page_size);
        async move { api::entrance_tests::list_entrance_tests(query).await }
    }));

    let columns = vec![
        Column::new("Name", |test: &EntranceTest| rsx! { span { class: "font-medium", "{test.name}" } }),
        Column::new("Date", |test: &EntranceTest| {
            let (date, _) = split_iso_datetime(&test.date);
            rsx! { "{date}" }
        }),
        Column::new("Shift", |test: &EntranceTest| rsx! { "{test.shift}" }),
        Column::new("Room", |test: &EntranceTest| rsx! { "{test.room_name.clone().unwrap_or_default()}" }),
        Column::new("Instructor", |test: &EntranceTest| {
            let instructor = test.instructor_name.as_deref().unwrap_or("Not assigned");
            rsx! { "{instructor}" }
        }),
        Column::new("Seats", |test: &EntranceTest| {
            let tone = if test.is_full() { PillTone::Danger } else { PillTone::Success };
            rsx! { Pill { tone, "{test.registered}/{test.capacity}" } }
        }),
    ];

    let search_keyword = keyword.clone();
    let header = rsx! {
        div {
            class: "flex items-center justify-between",
            SearchBox {
                keyword: search_keyword,
                placeholder: "Search entrance tests...",
                on_search: move |keyword: String| on_params.call((1, keyword)),
            }
            Button { onclick: move |_| creating.set(true), "Schedule test" }
        }
    };

    rsx! {
        div {
            class: "p-6",
            h1 { class: "mb-4 text-xl font-semibold", "Entrance tests" }
            RemoteDataTable {
                columns,
                source: tests,
                loading_text: "Loading entrance tests...",
                empty_text: "No entrance tests scheduled.",
                header,
                on_page_change: move |page: u32| on_params.call((page, keyword.clone())),
            }
        }

        if creating() {
            ModalOverlay {
                wide: true,
                on_close: move |_| creating.set(false),
                EntranceTestFormDialog {
                    on_saved: move |_| {
                        creating.set(false);
                        queries.invalidate("entrance-tests");
                    },
                    on_cancel: move |_| creating.set(false),
                }
            }
        }
    }
}

/// Scheduling form with a room combobox and an instructor combobox.
#[component]
fn EntranceTestFormDialog(on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut form = use_signal(|| EntranceTestForm {
        name: String::new(),
        date: Utc::now().date_naive(),
        shift: 1,
        room_id: 0,
        instructor_id: None,
        capacity: 20,
    });
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let fetcher = use_fetcher::<EntranceTest>();
    let loading = use_loading_dialog(fetcher, move |_| on_saved.call(()));

    let handle_submit = move |_| {
        let payload = form();
        if let Err(field_errors) = check(&payload) {
            errors.set(field_errors);
            return;
        }
        errors.set(BTreeMap::new());
        spawn(async move {
            submit(fetcher, api::entrance_tests::create_entrance_test(payload)).await;
        });
    };

    let current = form();

    rsx! {
        div {
            class: "p-6",
            h2 { class: "m-0 mb-5 text-lg font-semibold text-neutral-800", "Schedule entrance test" }

            div {
                class: "mb-4",
                Label { html_for: "test-name", "Name" }
                Input {
                    id: "test-name",
                    class: "w-full mt-1.5",
                    value: current.name.clone(),
                    invalid: errors.read().contains_key("name"),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                FieldError { message: errors.read().get("name").cloned() }
            }

            div {
                class: "grid grid-cols-3 gap-3 mb-4",
                div {
                    Label { html_for: "test-date", "Date" }
                    Input {
                        id: "test-date",
                        class: "w-full mt-1.5",
                        r#type: "date",
                        value: current.date.format("%Y-%m-%d").to_string(),
                        oninput: move |evt: FormEvent| {
                            if let Ok(date) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") {
                                form.write().date = date;
                            }
                        },
                    }
                }
                div {
                    Label { html_for: "test-shift", "Shift" }
                    Input {
                        id: "test-shift",
                        class: "w-full mt-1.5",
                        r#type: "number",
                        value: current.shift.to_string(),
                        invalid: errors.read().contains_key("shift"),
                        oninput: move |evt: FormEvent| form.write().shift = evt.value().trim().parse().unwrap_or(0),
                    }
                    FieldError { message: errors.read().get("shift").cloned() }
                }
                div {
                    Label { html_for: "test-capacity", "Capacity" }
                    Input {
                        id: "test-capacity",
                        class: "w-full mt-1.5",
                        r#type: "number",
                        value: current.capacity.to_string(),
                        invalid: errors.read().contains_key("capacity"),
                        oninput: move |evt: FormEvent| form.write().capacity = evt.value().trim().parse().unwrap_or(0),
                    }
                    FieldError { message: errors.read().get("capacity").cloned() }
                }
            }

            div {
                class: "mb-4",
                Label { html_for: "test-room", "Room" }
                Combobox {
                    id: "test-room",
                    source: RoomSource,
                    placeholder: "Choose a room",
                    on_change: move |option: Option<PickerOption>| {
                        form.write().room_id = option.and_then(|o| o.value.parse().ok()).unwrap_or(0);
                    },
                }
                FieldError { message: errors.read().get("room_id").cloned() }
            }

            div {
                class: "mb-4",
                Label { html_for: "test-instructor", "Instructor" }
                Combobox {
                    id: "test-instructor",
                    source: AccountSource::with_roles(&[Role::Teacher]),
                    placeholder: "No instructor",
                    clearable: true,
                    on_change: move |option: Option<PickerOption>| {
                        form.write().instructor_id = option.map(|o| o.value);
                    },
                }
            }

            div {
                class: "flex gap-2 mt-5",
                Button { onclick: handle_submit, "Schedule" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
        {loading.dialog()}
    }
}
