//! Read-only transaction and tuition tables.

use dioxus::prelude::*;
use school::{
    format_amount, normalize_page, split_iso_datetime, PageQuery, QueryKey, Transaction,
    TransactionStatus, Tuition,
};

use crate::components::{Pill, PillTone};
use crate::config::use_school_config;
use crate::data_table::{Column, RemoteDataTable};
use crate::query::use_query_client;

fn status_pill(status: TransactionStatus) -> Element {
    let tone = match status {
        TransactionStatus::Succeed => PillTone::Success,
        TransactionStatus::Pending => PillTone::Warning,
        TransactionStatus::Failed => PillTone::Danger,
        TransactionStatus::Refunded => PillTone::Neutral,
    };
    rsx! { Pill { tone, "{status:?}" } }
}

#[component]
pub fn TransactionsView(page: u32, on_page_change: EventHandler<u32>) -> Element {
    let queries = use_query_client();
    let config = use_school_config();
    let page = normalize_page(page);

    let transactions = use_resource(use_reactive(&page, move |page| {
        let _version = queries.version(&QueryKey::new(["transactions"]).with(format!("page={page}")));
        let query = PageQuery::new("", page, config.read().table.page_size);
        async move { api::finance::list_transactions(query).await }
    }));

    let columns = vec![
        Column::new("Date", |tx: &Transaction| {
            let (date, time) = split_iso_datetime(&tx.created_at);
            rsx! { "{date} {time}" }
        }),
        Column::new("Account", |tx: &Transaction| rsx! { "{tx.account_name.clone().unwrap_or_default()}" }),
        Column::new("Method", |tx: &Transaction| rsx! { "{tx.method}" }),
        Column::new("Amount", |tx: &Transaction| rsx! { span { class: "tabular-nums", "{format_amount(tx.amount)}" } }),
        Column::new("Status", |tx: &Transaction| status_pill(tx.status)),
    ];

    rsx! {
        div {
            class: "p-6",
            h1 { class: "mb-4 text-xl font-semibold", "Transactions" }
            RemoteDataTable {
                columns,
                source: transactions,
                loading_text: "Loading transactions...",
                empty_text: "No transactions yet.",
                on_page_change,
            }
        }
    }
}

#[component]
pub fn TuitionsView(page: u32, on_page_change: EventHandler<u32>) -> Element {
    let queries = use_query_client();
    let config = use_school_config();
    let page = normalize_page(page);

    let tuitions = use_resource(use_reactive(&page, move |page| {
        let _version = queries.version(&QueryKey::new(["tuitions"]).with(format!("page={page}")));
        let query = PageQuery::new("", page, config.read().table.page_size);
        async move { api::finance::list_tuitions(query).await }
    }));

    let columns = vec![
        Column::new("Student", |t: &Tuition| rsx! { "{t.student_name.clone().unwrap_or_default()}" }),
        Column::new("Class", |t: &Tuition| rsx! { "{t.class_name.clone().unwrap_or_default()}" }),
        Column::new("Period", |t: &Tuition| {
            let (start, _) = split_iso_datetime(&t.start_date);
            let (end, _) = split_iso_datetime(&t.end_date);
            rsx! { "{start} → {end}" }
        }),
        Column::new("Amount", |t: &Tuition| rsx! { span { class: "tabular-nums", "{format_amount(t.amount)}" } }),
        Column::new("Status", |t: &Tuition| status_pill(t.status)),
    ];

    rsx! {
        div {
            class: "p-6",
            h1 { class: "mb-4 text-xl font-semibold", "Tuition" }
            RemoteDataTable {
                columns,
                source: tuitions,
                loading_text: "Loading tuition...",
                empty_text: "No tuition records.",
                on_page_change,
            }
        }
    }
}
