//! Query keys and invalidation counters for the client-side query cache.
//!
//! Each query is identified by a path-like [`QueryKey`] such as
//! `["rooms", "page=2"]`. Reactive queries read the version of their key;
//! a mutation invalidates a prefix (`["rooms"]`), which bumps the version of
//! every key under it and makes those queries refetch.

use std::collections::HashMap;
use std::fmt;

/// Path-like identifier of a cached query.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Builder method to append a segment.
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Whether `prefix` names this key or one of its ancestors.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl From<&str> for QueryKey {
    fn from(value: &str) -> Self {
        QueryKey::new(value.split('/').filter(|s| !s.is_empty()))
    }
}

/// Version counters per query key.
///
/// Invalidating a prefix that no query has registered yet is remembered, so
/// a query registered afterwards under that prefix still observes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryVersions {
    invalidated: HashMap<QueryKey, u64>,
}

impl QueryVersions {
    /// Current version of `key`: the bumps of every invalidated prefix of it.
    pub fn version(&self, key: &QueryKey) -> u64 {
        self.invalidated
            .iter()
            .filter(|(prefix, _)| key.starts_with(prefix))
            .map(|(_, count)| *count)
            .sum()
    }

    /// Invalidate `prefix` and everything under it.
    pub fn invalidate(&mut self, prefix: &QueryKey) {
        *self.invalidated.entry(prefix.clone()).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        let key = QueryKey::new(["rooms", "page=2"]);
        assert!(key.starts_with(&QueryKey::from("rooms")));
        assert!(key.starts_with(&key));
        assert!(!key.starts_with(&QueryKey::from("room")));
        assert!(!QueryKey::from("rooms").starts_with(&key));
        assert_eq!(key.to_string(), "rooms/page=2");
    }

    #[test]
    fn test_invalidate_prefix_bumps_descendants() {
        let mut versions = QueryVersions::default();
        let page_one = QueryKey::from("rooms").with("page=1");
        let page_two = QueryKey::from("rooms").with("page=2");
        let notifications = QueryKey::from("notifications");

        assert_eq!(versions.version(&page_one), 0);
        versions.invalidate(&QueryKey::from("rooms"));
        assert_eq!(versions.version(&page_one), 1);
        assert_eq!(versions.version(&page_two), 1);
        assert_eq!(versions.version(&notifications), 0);

        versions.invalidate(&notifications);
        assert_eq!(versions.version(&notifications), 1);
        assert_eq!(versions.version(&page_one), 1);
    }
}
