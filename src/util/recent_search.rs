//! Recently searched terms shown as suggestions under the navbar search box.
//!
//! Persisted as JSON in `localStorage`; newest first, de-duplicated,
//! capped at [`MAX_RECENT_SEARCHES`].

#[cfg(test)]
#[path = "recent_search_test.rs"]
mod recent_search_test;

use serde::{Deserialize, Serialize};

use super::storage;

pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub term: String,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches {
    pub data: Vec<RecentSearch>,
}

impl RecentSearches {
    /// Record `term` as the most recent search.
    ///
    /// Blank terms are ignored. A repeated term moves to the front with the
    /// new timestamp. Returns `true` when the list changed.
    pub fn add(&mut self, term: &str, now_ms: i64) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.data.retain(|s| s.term != term);
        self.data.insert(0, RecentSearch { term: term.to_owned(), timestamp: now_ms });
        self.data.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|s| s.term.as_str())
    }

    /// Load from storage. Missing or corrupt data yields an empty list.
    pub fn load() -> Self {
        storage::read(storage::RECENT_SEARCH_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(raw) => storage::write(storage::RECENT_SEARCH_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "recent searches not saved"),
        }
    }
}

/// Load, add `term`, and persist when it changed.
pub fn add_to_recent_searched(term: &str, now_ms: i64) {
    let mut recent = RecentSearches::load();
    if recent.add(term, now_ms) {
        recent.save();
    }
}
