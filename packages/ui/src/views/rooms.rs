//! Rooms screen: searchable table, create/edit dialog, delete with confirmation.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use school::forms::{check, RoomForm};
use school::{normalize_page, FetcherState, PageQuery, QueryKey, Room, RoomStatus, SubmitOutcome};

use super::{ModalOverlay, SearchBox};
use crate::components::{Button, ButtonVariant, FieldError, Input, Label, Pill, PillTone, Select};
use crate::config::use_school_config;
use crate::data_table::{Column, RemoteDataTable};
use crate::dialogs::{submit, use_confirmation_dialog, use_fetcher};
use crate::query::use_query_client;
use crate::toast::{announce, show_toast, use_toasts, ToastLevel};

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Create,
    Edit(Room),
}

#[component]
pub fn RoomsView(page: u32, keyword: String, on_params: EventHandler<(u32, String)>) -> Element {
    let queries = use_query_client();
    let config = use_school_config();
    let mut toasts = use_toasts();
    let mut editor = use_signal(|| Option::<Editor>::None);
    let mut pending_delete = use_signal(|| Option::<Room>::None);
    let page = normalize_page(page);

    let rooms = use_resource(use_reactive((&page, &keyword), move |(page, keyword)| {
        let key = QueryKey::new(["rooms"]).with(format!("page={page}")).with(format!("keyword={keyword}"));
        let _version = queries.version(&key);
        let query = PageQuery::new(keyword, page, config.read().table.page_size);
        async move { api::rooms::list_rooms(query).await }
    }));

    let delete = use_confirmation_dialog(
        "Delete room",
        "The room will be removed permanently.",
        move |_| {
            let Some(room) = pending_delete.take() else {
                return;
            };
            spawn(async move {
                match api::rooms::delete_room(room.id).await {
                    Ok(result) if result.success => {
                        show_toast(&mut toasts, ToastLevel::Success, &format!("Deleted {}", room.name));
                        queries.invalidate("rooms");
                    }
                    Ok(result) => {
                        let message = result.error_message().unwrap_or("Could not delete room").to_string();
                        show_toast(&mut toasts, ToastLevel::Warning, &message);
                    }
                    Err(e) => show_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
                }
            });
        },
    );

    let columns = vec![
        Column::new("Name", |room: &Room| rsx! { span { class: "font-medium", "{room.name}" } }),
        Column::new("Capacity", |room: &Room| rsx! { "{room.capacity}" }),
        Column::new("Status", |room: &Room| {
            let tone = match room.status {
                RoomStatus::Opened => PillTone::Success,
                RoomStatus::Closed => PillTone::Neutral,
            };
            rsx! { Pill { tone, "{room.status.label()}" } }
        }),
        Column::new("", move |room: &Room| {
            let edit_room = room.clone();
            let delete_room = room.clone();
            rsx! {
                div {
                    class: "flex justify-end gap-1",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| editor.set(Some(Editor::Edit(edit_room.clone()))),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            pending_delete.set(Some(delete_room.clone()));
                            delete.open();
                        },
                        "Delete"
                    }
                }
            }
        }),
    ];

    let search_keyword = keyword.clone();
    let header = rsx! {
        div {
            class: "flex items-center justify-between",
            SearchBox {
                keyword: search_keyword,
                placeholder: "Search rooms...",
                on_search: move |keyword: String| on_params.call((1, keyword)),
            }
            Button { onclick: move |_| editor.set(Some(Editor::Create)), "New room" }
        }
    };

    rsx! {
        div {
            class: "p-6",
            h1 { class: "mb-4 text-xl font-semibold", "Rooms" }
            RemoteDataTable {
                columns,
                source: rooms,
                loading_text: "Loading rooms...",
                empty_text: "No rooms found.",
                header,
                on_page_change: move |page: u32| on_params.call((page, keyword.clone())),
            }
        }

        if let Some(current) = editor() {
            ModalOverlay {
                on_close: move |_| editor.set(None),
                RoomFormDialog {
                    room: match current {
                        Editor::Create => None,
                        Editor::Edit(room) => Some(room),
                    },
                    on_saved: move |_| {
                        editor.set(None);
                        queries.invalidate("rooms");
                    },
                    on_cancel: move |_| editor.set(None),
                }
            }
        }

        {delete.dialog()}
    }
}

/// Create or edit one room.
///
/// A successful save calls `on_saved`, whether or not the backend echoed the
/// room. When the backend refuses, a warning toast is shown and the dialog
/// keeps its values.
#[component]
pub fn RoomFormDialog(
    room: Option<Room>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut toasts = use_toasts();
    let room_id = room.as_ref().map(|room| room.id);
    let mut form = use_signal(|| room.as_ref().map(RoomForm::from).unwrap_or_default());
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let mut fetcher = use_fetcher::<Room>();

    let handle_submit = move |_| {
        if fetcher.read().is_submitting() {
            return;
        }
        let payload = form();
        if let Err(field_errors) = check(&payload) {
            errors.set(field_errors);
            return;
        }
        errors.set(BTreeMap::new());
        fetcher.set(FetcherState::Submitting);
        spawn(async move {
            let result = match room_id {
                Some(id) => submit(fetcher, api::rooms::update_room(id, payload)).await,
                None => submit(fetcher, api::rooms::create_room(payload)).await,
            };
            let saved = if room_id.is_some() { "Room updated" } else { "Room created" };
            if announce(&mut toasts, &SubmitOutcome::of(&result, saved, "Could not save room")) {
                on_saved.call(());
            }
        });
    };

    let saving = fetcher.read().is_submitting();
    let current = form();
    let status_options = [RoomStatus::Opened, RoomStatus::Closed]
        .iter()
        .map(|status| (format!("{status:?}"), status.label().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "p-6",
            h2 {
                class: "m-0 mb-5 text-lg font-semibold text-neutral-800",
                if room_id.is_some() { "Edit room" } else { "New room" }
            }

            div {
                class: "mb-4",
                Label { html_for: "room-name", "Name" }
                Input {
                    id: "room-name",
                    class: "w-full mt-1.5",
                    value: current.name.clone(),
                    invalid: errors.read().contains_key("name"),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                FieldError { message: errors.read().get("name").cloned() }
            }

            div {
                class: "mb-4",
                Label { html_for: "room-capacity", "Capacity" }
                Input {
                    id: "room-capacity",
                    class: "w-full mt-1.5",
                    r#type: "number",
                    value: current.capacity.to_string(),
                    invalid: errors.read().contains_key("capacity"),
                    oninput: move |evt: FormEvent| form.write().capacity = evt.value().trim().parse().unwrap_or(0),
                }
                FieldError { message: errors.read().get("capacity").cloned() }
            }

            div {
                class: "mb-4",
                Label { html_for: "room-status", "Status" }
                Select {
                    id: "room-status",
                    class: "w-full mt-1.5",
                    value: format!("{:?}", current.status),
                    options: status_options,
                    onchange: move |value: String| {
                        form.write().status = if value == "Closed" { RoomStatus::Closed } else { RoomStatus::Opened };
                    },
                }
            }

            div {
                class: "flex gap-2 mt-5",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving,
                    onclick: handle_submit,
                    if saving { "Saving..." } else { "Save" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
