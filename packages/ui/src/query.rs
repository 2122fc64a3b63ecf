//! Client-side query invalidation.
//!
//! Loaders read [`QueryClient::version`] for their key inside `use_resource`,
//! so invalidating a prefix after a mutation makes every matching loader
//! refetch.

use dioxus::prelude::*;
use school::{QueryKey, QueryVersions};

#[derive(Clone, Copy, PartialEq)]
pub struct QueryClient {
    versions: Signal<QueryVersions>,
}

impl QueryClient {
    /// Current version of `key`. Subscribes the calling scope.
    pub fn version(&self, key: &QueryKey) -> u64 {
        self.versions.read().version(key)
    }

    /// Refetch every query under `prefix`.
    pub fn invalidate(&self, prefix: impl Into<QueryKey>) {
        let prefix = prefix.into();
        tracing::debug!("Invalidating queries under {}", prefix);
        let mut versions = self.versions;
        versions.write().invalidate(&prefix);
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

#[component]
pub fn QueryProvider(children: Element) -> Element {
    let versions = use_signal(QueryVersions::default);
    use_context_provider(|| QueryClient { versions });

    rsx! {
        {children}
    }
}
