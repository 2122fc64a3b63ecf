//! # Paged remote-collection picker state
//!
//! State behind the searchable combobox and multi-select controls. The UI
//! crate owns rendering and timers; everything that decides *what* to fetch
//! and *what* is selected lives here so it can be tested without a DOM.
//!
//! ## Fetch sequence
//!
//! [`PagedList`] tracks one keyword at a time. [`PagedList::search`] starts a
//! fresh sequence at page 1 and returns the query to send.
//! [`PagedList::next_query`] yields the following page only when the last
//! page reported more pages and no request is in flight. Responses are
//! appended in arrival order. Each search opens a new sequence and every
//! [`PickerRequest`] carries the sequence it was issued under, so a response
//! from an earlier search is dropped even when the keyword is typed again.
//!
//! Items are not deduplicated. The [`PickerOption::value`] produced by
//! [`Pickable::to_option`] is the identity used by selections, so the backing
//! collection must have unique identifiers.
//!
//! ## Keystroke debounce
//!
//! [`Debouncer`] hands out a generation number per keystroke together with
//! the delay to wait. After sleeping, the caller asks
//! [`Debouncer::is_current`]; a newer keystroke invalidates older ones. The
//! very first schedule after mount carries no delay.
//!
//! ## Selections
//!
//! - [`SingleSelection`] — one value plus an optional pre-chosen option used
//!   for the label before the list has loaded that item.
//! - [`MultiSelection`] — an ordered set of values with toggle, select-all
//!   over loaded options, and a badge layout capped at a display limit.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{Account, Class, Level, Room};
use crate::paging::{Page, PageQuery};

/// Label/value pair rendered by the picker controls.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickerOption {
    pub label: String,
    pub value: String,
}

impl PickerOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Maps a backend record to the option a picker displays.
pub trait Pickable {
    fn to_option(&self) -> PickerOption;
}

impl Pickable for Room {
    fn to_option(&self) -> PickerOption {
        PickerOption::new(format!("{} ({} seats)", self.name, self.capacity), self.id.to_string())
    }
}

impl Pickable for Account {
    fn to_option(&self) -> PickerOption {
        PickerOption::new(self.display_name(), self.id.clone())
    }
}

impl Pickable for Level {
    fn to_option(&self) -> PickerOption {
        PickerOption::new(self.name.clone(), self.id.clone())
    }
}

impl Pickable for Class {
    fn to_option(&self) -> PickerOption {
        PickerOption::new(self.name.clone(), self.id.to_string())
    }
}

/// A page request tagged with the search sequence it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerRequest {
    pub sequence: u64,
    pub query: PageQuery,
}

/// Accumulated pages for the current keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedList<T> {
    keyword: String,
    sequence: u64,
    page_size: u32,
    pages: Vec<Page<T>>,
    in_flight: Option<u32>,
    error: Option<String>,
}

impl<T> PagedList<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            keyword: String::new(),
            sequence: 0,
            page_size: page_size.max(1),
            pages: Vec::new(),
            in_flight: None,
            error: None,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Start a fresh sequence for `keyword`, discarding loaded pages. Every
    /// call opens a new sequence, even for an unchanged keyword.
    pub fn search(&mut self, keyword: &str) -> PickerRequest {
        self.keyword = keyword.to_string();
        self.sequence += 1;
        self.pages.clear();
        self.error = None;
        self.in_flight = Some(1);
        PickerRequest {
            sequence: self.sequence,
            query: PageQuery::new(keyword, 1, self.page_size),
        }
    }

    /// Request for the page after the last loaded one, if there is one and
    /// nothing is in flight.
    pub fn next_query(&self) -> Option<PickerRequest> {
        if self.in_flight.is_some() || self.error.is_some() {
            return None;
        }
        let last = self.pages.last()?;
        if !last.has_next() {
            return None;
        }
        Some(PickerRequest {
            sequence: self.sequence,
            query: PageQuery::new(self.keyword.clone(), last.page + 1, self.page_size),
        })
    }

    /// Mark `request` as sent.
    pub fn begin(&mut self, request: &PickerRequest) {
        if request.sequence == self.sequence {
            self.in_flight = Some(request.query.page);
        }
    }

    fn is_awaited(&self, request: &PickerRequest) -> bool {
        request.sequence == self.sequence && self.in_flight == Some(request.query.page)
    }

    /// Append the page answering `request`. Returns `false` when the
    /// response is stale or unexpected and was dropped.
    pub fn receive(&mut self, request: &PickerRequest, page: Page<T>) -> bool {
        if !self.is_awaited(request) {
            return false;
        }
        self.in_flight = None;
        self.error = None;
        self.pages.push(page);
        true
    }

    /// Record a failed `request`. No automatic retry follows.
    pub fn fail(&mut self, request: &PickerRequest, message: impl Into<String>) -> bool {
        if !self.is_awaited(request) {
            return false;
        }
        self.in_flight = None;
        self.error = Some(message.into());
        true
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_next_page(&self) -> bool {
        self.pages.last().is_some_and(|page| page.has_next())
    }

    /// Every loaded item: pages in arrival order, then in-page order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|page| page.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total size of the remote collection as last reported.
    pub fn total_count(&self) -> u64 {
        self.pages.last().map(|page| page.total_count).unwrap_or(0)
    }
}

impl<T: Pickable> PagedList<T> {
    pub fn options(&self) -> Vec<PickerOption> {
        self.items().map(Pickable::to_option).collect()
    }
}

/// Keystroke debounce bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    /// Register a new input. Returns its generation and the delay to wait
    /// before acting on it; the first input is not delayed.
    pub fn schedule(&mut self) -> (u64, Duration) {
        let delay = if self.generation == 0 {
            Duration::ZERO
        } else {
            self.delay
        };
        self.generation += 1;
        (self.generation, delay)
    }

    /// Whether `generation` is still the latest input.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Value of a single-choice picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SingleSelection {
    value: Option<String>,
    chosen: Option<PickerOption>,
}

impl SingleSelection {
    /// Selection seeded with a pre-chosen option so its label renders before
    /// the list has loaded it.
    pub fn with_chosen(chosen: PickerOption) -> Self {
        Self {
            value: Some(chosen.value.clone()),
            chosen: Some(chosen),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the current value.
    pub fn select(&mut self, option: PickerOption) {
        self.value = Some(option.value.clone());
        self.chosen = Some(option);
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.chosen = None;
    }

    /// Label of the current value, looked up in `loaded` first, then the
    /// remembered option.
    pub fn label<'a>(&'a self, loaded: &'a [PickerOption]) -> Option<&'a str> {
        let value = self.value.as_deref()?;
        loaded
            .iter()
            .find(|option| option.value == value)
            .or(self.chosen.as_ref().filter(|option| option.value == value))
            .map(|option| option.label.as_str())
    }
}

/// One badge in a multi-select trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Badge {
    Item(PickerOption),
    /// Aggregate badge for selected values past the display cap.
    Overflow(usize),
}

/// Value of a multi-choice picker, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiSelection {
    values: Vec<String>,
    known: Vec<PickerOption>,
}

impl MultiSelection {
    pub fn new(values: Vec<String>) -> Self {
        let mut selection = Self::default();
        for value in values {
            if !selection.contains(&value) {
                selection.values.push(value);
            }
        }
        selection
    }

    /// Selection seeded with pre-chosen options whose labels are remembered.
    pub fn with_options(options: Vec<PickerOption>) -> Self {
        let mut selection = Self::new(options.iter().map(|o| o.value.clone()).collect());
        selection.known = options;
        selection
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Add an unselected option, remove a selected one.
    pub fn toggle(&mut self, option: &PickerOption) {
        if self.contains(&option.value) {
            self.remove(&option.value);
        } else {
            self.remember(option);
            self.values.push(option.value.clone());
        }
    }

    pub fn remove(&mut self, value: &str) {
        self.values.retain(|v| v != value);
    }

    /// Whether every loaded option is selected.
    pub fn all_selected(&self, loaded: &[PickerOption]) -> bool {
        !loaded.is_empty() && loaded.iter().all(|option| self.contains(&option.value))
    }

    /// Select every loaded option, or clear them all if they already are.
    /// Values selected outside the loaded set are untouched.
    pub fn toggle_all(&mut self, loaded: &[PickerOption]) {
        if self.all_selected(loaded) {
            self.values
                .retain(|value| !loaded.iter().any(|option| &option.value == value));
        } else {
            for option in loaded {
                if !self.contains(&option.value) {
                    self.remember(option);
                    self.values.push(option.value.clone());
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Drop the values hidden behind the overflow badge.
    pub fn clear_overflow(&mut self, cap: usize) {
        self.values.truncate(cap);
    }

    /// Badges to render: up to `cap` item badges, then one overflow badge.
    pub fn badges(&self, cap: usize, loaded: &[PickerOption]) -> Vec<Badge> {
        let mut badges: Vec<Badge> = self
            .values
            .iter()
            .take(cap)
            .map(|value| Badge::Item(self.option_for(value, loaded)))
            .collect();
        if self.values.len() > cap {
            badges.push(Badge::Overflow(self.values.len() - cap));
        }
        badges
    }

    fn option_for(&self, value: &str, loaded: &[PickerOption]) -> PickerOption {
        loaded
            .iter()
            .chain(self.known.iter())
            .find(|option| option.value == value)
            .cloned()
            .unwrap_or_else(|| PickerOption::new(value, value))
    }

    fn remember(&mut self, option: &PickerOption) {
        if !self.known.iter().any(|known| known.value == option.value) {
            self.known.push(option.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<&str>, page: u32, total_pages: u32) -> Page<PickerOption> {
        Page {
            items: items.into_iter().map(|v| PickerOption::new(v.to_uppercase(), v)).collect(),
            page,
            page_size: 2,
            total_pages,
            total_count: total_pages as u64 * 2,
        }
    }

    fn opt(v: &str) -> PickerOption {
        PickerOption::new(v.to_uppercase(), v)
    }

    impl Pickable for PickerOption {
        fn to_option(&self) -> PickerOption {
            self.clone()
        }
    }

    #[test]
    fn test_search_starts_at_first_page() {
        let mut list: PagedList<PickerOption> = PagedList::new(2);
        let request = list.search("ro");
        assert_eq!(request.query.page, 1);
        assert_eq!(request.query.keyword, "ro");
        assert!(list.is_loading());
        assert!(list.next_query().is_none());
    }

    #[test]
    fn test_pages_append_in_arrival_order() {
        let mut list = PagedList::new(2);
        let first = list.search("");
        assert!(list.receive(&first, page(vec!["a", "b"], 1, 2)));

        let next = list.next_query().unwrap();
        assert_eq!(next.query.page, 2);
        list.begin(&next);
        assert!(list.next_query().is_none());
        assert!(list.receive(&next, page(vec!["c", "a"], 2, 2)));

        let values: Vec<&str> = list.items().map(|o| o.value.as_str()).collect();
        // duplicates are kept, callers own identity
        assert_eq!(values, vec!["a", "b", "c", "a"]);
        assert!(!list.has_next_page());
        assert!(list.next_query().is_none());
    }

    #[test]
    fn test_new_keyword_replaces_results() {
        let mut list = PagedList::new(2);
        let a = list.search("a");
        list.receive(&a, page(vec!["a1", "a2"], 1, 3));
        let b = list.search("b");
        assert!(list.is_empty());
        list.receive(&b, page(vec!["b1"], 1, 1));
        assert_eq!(list.options(), vec![opt("b1")]);
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut list = PagedList::new(2);
        let old = list.search("pi");
        list.search("pia");
        assert!(!list.receive(&old, page(vec!["old"], 1, 1)));
        assert!(list.is_empty());
        assert!(list.is_loading());
        assert!(!list.fail(&old, "timeout"));
        assert!(list.error().is_none());
    }

    #[test]
    fn test_retyped_keyword_ignores_earlier_request() {
        let mut list = PagedList::new(2);
        let first = list.search("a");
        list.search("ab");
        let latest = list.search("a");

        assert!(!list.receive(&first, page(vec!["x", "y"], 1, 1)));
        assert!(list.receive(&latest, page(vec!["x", "y"], 1, 1)));
        // a duplicate delivery of the same answer is not appended again
        assert!(!list.receive(&latest, page(vec!["x", "y"], 1, 1)));

        let values: Vec<&str> = list.items().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["x", "y"]);
    }

    #[test]
    fn test_unexpected_page_number_dropped() {
        let mut list = PagedList::new(2);
        let first = list.search("");
        list.receive(&first, page(vec!["a", "b"], 1, 3));
        let next = list.next_query().unwrap();
        list.begin(&next);

        let skipped = PickerRequest {
            sequence: next.sequence,
            query: PageQuery::new("", 3, 2),
        };
        assert!(!list.receive(&skipped, page(vec!["e", "f"], 3, 3)));
        assert!(list.is_loading());
        assert!(list.receive(&next, page(vec!["c", "d"], 2, 3)));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_error_stops_paging() {
        let mut list = PagedList::new(2);
        let first = list.search("");
        list.receive(&first, page(vec!["a", "b"], 1, 3));
        let next = list.next_query().unwrap();
        list.begin(&next);
        assert!(list.fail(&next, "Failed to load"));
        assert_eq!(list.error(), Some("Failed to load"));
        assert!(!list.is_loading());
        assert!(list.next_query().is_none());
        // loaded items survive
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_debounce_skips_first_input() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let (first, delay) = debouncer.schedule();
        assert_eq!(delay, Duration::ZERO);
        assert!(debouncer.is_current(first));

        let (second, delay) = debouncer.schedule();
        assert_eq!(delay, Duration::from_millis(300));
        let (third, _) = debouncer.schedule();
        assert!(!debouncer.is_current(second));
        assert!(debouncer.is_current(third));
    }

    #[tokio::test]
    async fn test_debounce_only_latest_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(5));
        debouncer.schedule();
        let mut fired = Vec::new();
        let generations: Vec<(u64, Duration)> = (0..3).map(|_| debouncer.schedule()).collect();
        for (generation, delay) in generations {
            tokio::time::sleep(delay).await;
            if debouncer.is_current(generation) {
                fired.push(generation);
            }
        }
        assert_eq!(fired, vec![4]);
    }

    #[test]
    fn test_single_selection_label_from_chosen() {
        let mut selection = SingleSelection::with_chosen(opt("r7"));
        assert_eq!(selection.label(&[]), Some("R7"));
        assert_eq!(selection.label(&[PickerOption::new("Room 7", "r7")]), Some("Room 7"));

        selection.select(opt("r2"));
        assert_eq!(selection.value(), Some("r2"));
        assert_eq!(selection.label(&[]), Some("R2"));

        selection.clear();
        assert_eq!(selection.label(&[opt("r2")]), None);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = MultiSelection::default();
        selection.toggle(&opt("a"));
        assert!(selection.contains("a"));
        selection.toggle(&opt("b"));
        selection.toggle(&opt("a"));
        assert_eq!(selection.values(), &["b".to_string()]);
    }

    #[test]
    fn test_toggle_all_only_touches_loaded() {
        let loaded = vec![opt("a"), opt("b")];
        let mut selection = MultiSelection::new(vec!["z".to_string()]);
        selection.toggle_all(&loaded);
        assert_eq!(selection.len(), 3);
        assert!(selection.all_selected(&loaded));

        selection.toggle_all(&loaded);
        assert_eq!(selection.values(), &["z".to_string()]);
        assert!(!selection.all_selected(&[]));
    }

    #[test]
    fn test_badges_cap_and_overflow() {
        let loaded: Vec<PickerOption> = ["a", "b", "c", "d", "e"].iter().map(|v| opt(v)).collect();
        let mut selection = MultiSelection::default();
        selection.toggle_all(&loaded);

        let badges = selection.badges(3, &loaded);
        assert_eq!(badges.len(), 4);
        assert_eq!(badges[0], Badge::Item(opt("a")));
        assert_eq!(badges[3], Badge::Overflow(2));

        for cap in 0..7 {
            assert!(selection.badges(cap, &loaded).len() <= cap + 1);
        }

        selection.clear_overflow(3);
        assert_eq!(selection.len(), 3);
        assert!(selection.badges(3, &loaded).iter().all(|b| matches!(b, Badge::Item(_))));
    }

    #[test]
    fn test_badge_labels_survive_new_search() {
        let mut selection = MultiSelection::with_options(vec![PickerOption::new("Mr. Binh", "t1")]);
        selection.toggle(&PickerOption::new("Ms. Lan", "t2"));
        // list now shows results for another keyword
        let badges = selection.badges(5, &[opt("x")]);
        assert_eq!(
            badges,
            vec![
                Badge::Item(PickerOption::new("Mr. Binh", "t1")),
                Badge::Item(PickerOption::new("Ms. Lan", "t2")),
            ]
        );
        assert_eq!(
            MultiSelection::new(vec!["q".into()]).badges(1, &[]),
            vec![Badge::Item(PickerOption::new("q", "q"))]
        );
    }
}
