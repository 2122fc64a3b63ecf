//! Paging envelope shared by every list endpoint, and the query that asks for one page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One page of a remote collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

impl<T> Page<T> {
    /// A page with no rows, as shown before the first response.
    pub fn empty(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total_pages: 0,
            total_count: 0,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Pagination metadata without the rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

impl PageMeta {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first row on this page, 0 when empty.
    pub fn first_row(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        (self.page.saturating_sub(1) as u64) * self.page_size as u64 + 1
    }

    /// 1-based index of the last row on this page.
    pub fn last_row(&self) -> u64 {
        (self.page as u64 * self.page_size as u64).min(self.total_count)
    }

    /// Page numbers to render in a pager: a window of `width` pages around the current one.
    pub fn window(&self, width: u32) -> Vec<u32> {
        if self.total_pages == 0 {
            return Vec::new();
        }
        let width = width.max(1).min(self.total_pages);
        let half = width / 2;
        let start = self
            .page
            .saturating_sub(half)
            .max(1)
            .min(self.total_pages - width + 1);
        (start..start + width).collect()
    }
}

/// Parameters of a single page request.
///
/// `filters` carries sort and filter parameters that are forwarded verbatim
/// and resolved by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default)]
    pub keyword: String,
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

impl PageQuery {
    pub fn new(keyword: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            keyword: keyword.into(),
            page: normalize_page(page),
            page_size: page_size.max(1),
            filters: BTreeMap::new(),
        }
    }

    /// Builder method to add a filter parameter.
    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.filters.insert(name.into(), value);
        }
        self
    }

    /// Query-string pairs as sent to the backend. An empty keyword is omitted.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3 + self.filters.len());
        if !self.keyword.trim().is_empty() {
            pairs.push(("keyword".to_string(), self.keyword.trim().to_string()));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("pageSize".to_string(), self.page_size.to_string()));
        for (name, value) in &self.filters {
            pairs.push((name.clone(), value.clone()));
        }
        pairs
    }
}

/// Clamp a page number taken from a URL to the first page when missing or zero.
pub fn normalize_page(page: u32) -> u32 {
    page.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u32, total_pages: u32, total_count: u64) -> PageMeta {
        PageMeta {
            page,
            page_size: 10,
            total_pages,
            total_count,
        }
    }

    #[test]
    fn test_page_deserializes_backend_envelope() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"items":[1,2,3],"page":1,"pageSize":3,"totalPages":4,"totalCount":11}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.has_next());
        assert_eq!(page.meta().total_count, 11);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"page":1,"pageSize":10,"totalPages":0,"totalCount":0}"#)
                .unwrap();
        assert!(page.items.is_empty());
        assert!(page.meta().is_empty());
    }

    #[test]
    fn test_row_range() {
        assert_eq!(meta(1, 3, 25).first_row(), 1);
        assert_eq!(meta(3, 3, 25).first_row(), 21);
        assert_eq!(meta(3, 3, 25).last_row(), 25);
        assert_eq!(meta(1, 0, 0).first_row(), 0);
    }

    #[test]
    fn test_window_stays_inside_bounds() {
        assert_eq!(meta(1, 10, 100).window(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(meta(6, 10, 100).window(5), vec![4, 5, 6, 7, 8]);
        assert_eq!(meta(10, 10, 100).window(5), vec![6, 7, 8, 9, 10]);
        assert_eq!(meta(2, 3, 30).window(5), vec![1, 2, 3]);
        assert!(meta(1, 0, 0).window(5).is_empty());
    }

    #[test]
    fn test_query_pairs() {
        let query = PageQuery::new("  grand ", 0, 10).with_filter("status", "Opened");
        assert_eq!(query.page, 1);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("keyword".to_string(), "grand".to_string()),
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
                ("status".to_string(), "Opened".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filter_is_dropped() {
        let query = PageQuery::new("", 2, 10).with_filter("role", "");
        assert!(query.filters.is_empty());
        assert_eq!(query.to_pairs().len(), 2);
    }
}
