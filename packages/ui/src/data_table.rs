//! Server-driven table: one page of rows plus a pager.
//!
//! The table never sorts, filters or slices on its own. The route owns the
//! `page` query parameter; the pager only reports the page the user asked for
//! through `on_page_change`, and the route refetches.
//!
//! [`DataTable`] renders rows that are already resolved. [`RemoteDataTable`]
//! takes the list loader itself and renders its loading and error states.

use std::rc::Rc;

use dioxus::prelude::*;
use school::{Page, PageMeta};

const PAGER_WIDTH: u32 = 5;

/// One column: a header and a cell renderer.
pub struct Column<T> {
    pub header: String,
    pub cell: Rc<dyn Fn(&T) -> Element>,
}

impl<T> Column<T> {
    pub fn new(header: impl Into<String>, cell: impl Fn(&T) -> Element + 'static) -> Self {
        Self {
            header: header.into(),
            cell: Rc::new(cell),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && Rc::ptr_eq(&self.cell, &other.cell)
    }
}

/// Snapshot of a list loader for rendering: `None` while loading, the error
/// text when the loader failed.
fn loader_state<T: Clone>(
    resource: &Resource<Result<Page<T>, ServerFnError>>,
) -> Option<Result<Page<T>, String>> {
    resource
        .read()
        .as_ref()
        .map(|result| result.as_ref().map(Clone::clone).map_err(|e| e.to_string()))
}

#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    meta: PageMeta,
    #[props(default = "No results.".to_string())] empty_text: String,
    #[props(default)] header: Option<Element>,
    on_page_change: EventHandler<u32>,
) -> Element {
    let column_count = columns.len();
    let empty = shows_empty_state(&meta, rows.len());

    rsx! {
        div {
            class: "data-table",
            if let Some(header) = header {
                div { class: "data-table-header", {header} }
            }
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column.header}", "{column.header}" }
                        }
                    }
                }
                tbody {
                    if empty {
                        tr {
                            td {
                                class: "data-table-empty",
                                colspan: "{column_count}",
                                "{empty_text}"
                            }
                        }
                    }
                    for (index, row) in rows.iter().enumerate() {
                        tr {
                            key: "{index}",
                            for column in columns.iter() {
                                td { {(column.cell)(row)} }
                            }
                        }
                    }
                }
            }
            Pager { meta, on_page_change }
        }
    }
}

/// Whether the body shows the empty-state row instead of data rows.
fn shows_empty_state(meta: &PageMeta, row_count: usize) -> bool {
    meta.is_empty() || row_count == 0
}

/// [`DataTable`] over a list loader.
#[component]
pub fn RemoteDataTable<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    source: Resource<Result<Page<T>, ServerFnError>>,
    #[props(default = "Loading...".to_string())] loading_text: String,
    #[props(default = "No results.".to_string())] empty_text: String,
    #[props(default)] header: Option<Element>,
    on_page_change: EventHandler<u32>,
) -> Element {
    match loader_state(&source) {
        None => rsx! { p { class: "text-sm text-neutral-500", "{loading_text}" } },
        Some(Err(message)) => rsx! { LoaderError { message } },
        Some(Ok(data)) => {
            let meta = data.meta();
            rsx! {
                DataTable {
                    columns,
                    rows: data.items,
                    meta,
                    empty_text,
                    header,
                    on_page_change,
                }
            }
        }
    }
}

#[component]
fn Pager(meta: PageMeta, on_page_change: EventHandler<u32>) -> Element {
    if meta.total_pages <= 1 {
        return rsx! {
            div { class: "pager", span { class: "pager-summary", "{meta.total_count} rows" } }
        };
    }

    let first = meta.first_row();
    let last = meta.last_row();
    let current = meta.page;

    rsx! {
        div {
            class: "pager",
            span { class: "pager-summary", "{first}-{last} of {meta.total_count}" }
            button {
                disabled: !meta.has_previous(),
                onclick: move |_| on_page_change.call(current - 1),
                "Previous"
            }
            for number in meta.window(PAGER_WIDTH) {
                button {
                    key: "{number}",
                    class: if number == current { "pager-page active" } else { "pager-page" },
                    onclick: move |_| on_page_change.call(number),
                    "{number}"
                }
            }
            button {
                disabled: !meta.has_next(),
                onclick: move |_| on_page_change.call(current + 1),
                "Next"
            }
        }
    }
}

/// Error view rendered in place of a table whose loader failed.
#[component]
pub fn LoaderError(message: String) -> Element {
    rsx! {
        div {
            class: "loader-error",
            p { class: "font-semibold", "Something went wrong" }
            p { class: "text-sm", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u32, total_count: u64) -> PageMeta {
        PageMeta {
            page,
            page_size: 10,
            total_pages: total_count.div_ceil(10) as u32,
            total_count,
        }
    }

    #[test]
    fn test_empty_collection_shows_empty_text() {
        assert!(shows_empty_state(&meta(1, 0), 0));
        assert!(!shows_empty_state(&meta(1, 3), 3));
        // page past the end of a shrunk collection
        assert!(shows_empty_state(&meta(4, 25), 0));
    }

    #[test]
    fn test_rows_shown_for_requested_page() {
        let third = meta(3, 45);
        assert_eq!(third.first_row(), 21);
        assert_eq!(third.last_row(), 30);
        assert!(third.window(PAGER_WIDTH).contains(&3));
        assert!(third.has_previous() && third.has_next());
    }
}
