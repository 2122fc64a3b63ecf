use dioxus::prelude::*;
use school::{normalize_page, split_iso_datetime, Notification, PageQuery, QueryKey};

use crate::components::{Button, ButtonVariant};
use crate::config::use_school_config;
use crate::data_table::{Column, RemoteDataTable};
use crate::query::use_query_client;
use crate::toast::{show_toast, use_toasts, ToastLevel};

/// Notifications of the signed-in account, newest first.
#[component]
pub fn NotificationsView(page: u32, on_page_change: EventHandler<u32>) -> Element {
    let queries = use_query_client();
    let config = use_school_config();
    let mut toasts = use_toasts();
    let mut marking = use_signal(|| false);
    let page = normalize_page(page);

    let notifications = use_resource(use_reactive(&page, move |page| {
        let _version = queries.version(&QueryKey::new(["notifications"]).with(format!("page={page}")));
        let query = PageQuery::new("", page, config.read().table.page_size);
        async move { api::notifications::list_notifications(query).await }
    }));

    let mark_all_read = move |_| {
        marking.set(true);
        spawn(async move {
            match api::notifications::mark_notifications_read(Vec::new()).await {
                Ok(result) if result.success => queries.invalidate("notifications"),
                Ok(result) => {
                    let message = result.error_message().unwrap_or("Could not update notifications").to_string();
                    show_toast(&mut toasts, ToastLevel::Warning, &message);
                }
                Err(e) => show_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
            marking.set(false);
        });
    };

    let columns = vec![
        Column::new("", |n: &Notification| {
            rsx! {
                if !n.is_read {
                    span { class: "unread-dot", title: "Unread" }
                }
            }
        }),
        Column::new("Notification", |n: &Notification| {
            rsx! {
                div {
                    p { class: if n.is_read { "m-0" } else { "m-0 font-semibold" }, "{n.title}" }
                    p { class: "m-0 text-sm text-neutral-600", "{n.message}" }
                }
            }
        }),
        Column::new("Received", |n: &Notification| {
            let (date, time) = split_iso_datetime(&n.created_at);
            rsx! { span { class: "text-sm text-neutral-500", "{date} {time}" } }
        }),
    ];

    let header = rsx! {
        div {
            class: "flex justify-end",
            Button {
                variant: ButtonVariant::Outline,
                disabled: marking(),
                onclick: mark_all_read,
                "Mark all as read"
            }
        }
    };

    rsx! {
        div {
            class: "p-6",
            h1 { class: "mb-4 text-xl font-semibold", "Notifications" }
            RemoteDataTable {
                columns,
                source: notifications,
                loading_text: "Loading notifications...",
                empty_text: "You're all caught up.",
                header,
                on_page_change,
            }
        }
    }
}
