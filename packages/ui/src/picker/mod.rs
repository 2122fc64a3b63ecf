//! # Paged pickers over remote collections
//!
//! A picker never holds the whole collection. It asks a [`PickerSource`] for
//! one page at a time and appends pages as the user scrolls, restarting at
//! page 1 whenever the search keyword changes.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`PickerSource`] | Fetches one page for a [`PageQuery`]. One implementation per backend list. |
//! | [`use_paged_picker`] | Debounced search, next-page loading, stale-response dropping. |
//! | [`Combobox`] | Single choice. Selecting closes the popover. |
//! | [`MultiSelect`] | Many choices shown as dismissible badges with a "+N more" overflow. |

use std::future::Future;

use dioxus::prelude::*;
use school::{Debouncer, Page, PageQuery, PagedList, Pickable, PickerOption, PickerRequest};

use crate::config::use_school_config;
use crate::timer::sleep;

mod combobox;
pub use combobox::Combobox;

mod multi_select;
pub use multi_select::MultiSelect;

mod sources;
pub use sources::{AccountSource, LevelSource, RoomSource};

/// Where a picker gets its pages from.
pub trait PickerSource: Clone + PartialEq + 'static {
    type Item: Pickable + Clone + PartialEq + 'static;

    fn fetch(
        &self,
        query: PageQuery,
    ) -> impl Future<Output = Result<Page<Self::Item>, ServerFnError>> + 'static;
}

/// Handle returned by [`use_paged_picker`].
pub struct PagedPicker<S: PickerSource> {
    list: Signal<PagedList<S::Item>>,
    debouncer: Signal<Debouncer>,
    source: Signal<S>,
}

impl<S: PickerSource> Clone for PagedPicker<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: PickerSource> Copy for PagedPicker<S> {}

impl<S: PickerSource> PagedPicker<S> {
    pub fn list(&self) -> Signal<PagedList<S::Item>> {
        self.list
    }

    /// Options of every loaded item, in arrival order.
    pub fn options(&self) -> Vec<PickerOption> {
        self.list.read().options()
    }

    /// Search for `keyword` once typing settles.
    pub fn set_keyword(&self, keyword: String) {
        let this = *self;
        let mut debouncer = self.debouncer;
        let (generation, delay) = debouncer.write().schedule();
        spawn(async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            if !this.debouncer.peek().is_current(generation) {
                return;
            }
            let mut list = this.list;
            let request = list.write().search(&keyword);
            this.fetch(request);
        });
    }

    /// Request the page after the last loaded one, if any remains and
    /// nothing is in flight.
    pub fn load_more(&self) {
        let next = self.list.peek().next_query();
        if let Some(request) = next {
            self.fetch(request);
        }
    }

    fn fetch(&self, request: PickerRequest) {
        let mut list = self.list;
        let source = self.source.peek().clone();
        list.write().begin(&request);
        spawn(async move {
            match source.fetch(request.query.clone()).await {
                Ok(loaded) => {
                    if !list.write().receive(&request, loaded) {
                        tracing::debug!(
                            "Dropped stale page {} for {:?}",
                            request.query.page,
                            request.query.keyword
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!("Picker fetch failed: {}", e);
                    list.write().fail(&request, e.to_string());
                }
            }
        });
    }
}

/// State and loaders of a paged picker. The first page for an empty keyword
/// is requested on mount, without debounce. A changed `source` searches the
/// current keyword again.
pub fn use_paged_picker<S: PickerSource>(source: S) -> PagedPicker<S> {
    let config = use_school_config();
    let list = use_signal(|| PagedList::new(config.peek().picker.page_size));
    let debouncer = use_signal(|| Debouncer::new(config.peek().picker.debounce()));
    let mut source_signal = use_signal(|| source.clone());

    let picker = PagedPicker {
        list,
        debouncer,
        source: source_signal,
    };
    use_hook(move || picker.set_keyword(String::new()));
    use_effect(use_reactive((&source,), move |(source,)| {
        if source_changed(&*source_signal.peek(), &source) {
            source_signal.set(source);
            let keyword = list.peek().keyword().to_string();
            picker.set_keyword(keyword);
        }
    }));
    picker
}

/// Whether a picker must restart its search for a new source.
pub(crate) fn source_changed<S: PartialEq>(current: &S, next: &S) -> bool {
    current != next
}

/// Whether a scroll position is close enough to the bottom to load more.
pub(crate) fn near_bottom(scroll_top: f64, client_height: f64, scroll_height: f64) -> bool {
    scroll_top + client_height >= scroll_height - 24.0
}

/// Scrollable option list shared by both pickers.
#[component]
fn OptionList(
    options: Vec<PickerOption>,
    selected: Vec<String>,
    loading: bool,
    error: Option<String>,
    on_pick: EventHandler<PickerOption>,
    on_near_bottom: EventHandler<()>,
) -> Element {
    if let Some(error) = error {
        return rsx! {
            div { class: "picker-error", "Could not load options: {error}" }
        };
    }

    rsx! {
        ul {
            class: "picker-list",
            role: "listbox",
            onscroll: move |evt: Event<ScrollData>| {
                let data = evt.data();
                if near_bottom(
                    data.scroll_top() as f64,
                    data.client_height() as f64,
                    data.scroll_height() as f64,
                ) {
                    on_near_bottom.call(());
                }
            },
            if options.is_empty() && !loading {
                li { class: "picker-empty", "No results." }
            }
            for option in options {
                li {
                    key: "{option.value}",
                    class: if selected.contains(&option.value) { "picker-option selected" } else { "picker-option" },
                    role: "option",
                    onclick: {
                        let option = option.clone();
                        move |_| on_pick.call(option.clone())
                    },
                    "{option.label}"
                }
            }
            if loading {
                li { class: "picker-loading", "Loading..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_source_role_change_restarts() {
        let teachers = AccountSource::with_roles(&[school::Role::Teacher]);
        let students = AccountSource::with_roles(&[school::Role::Student]);
        assert!(source_changed(&teachers, &students));
        assert!(!source_changed(&teachers, &teachers.clone()));
    }

    #[test]
    fn test_near_bottom_threshold() {
        assert!(near_bottom(276.0, 200.0, 500.0));
        assert!(near_bottom(300.0, 200.0, 500.0));
        assert!(!near_bottom(100.0, 200.0, 500.0));
    }
}
