//! Novelty detection across polling cycles.
//!
//! [`NoveltyTracker`] owns the set of announcement keys already surfaced in
//! this process. The set only grows: once an announcement has been reported
//! it is never reported again until the process restarts.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Announcement, AnnouncementKey};

/// Keys of every announcement surfaced so far. No eviction.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    keys: HashSet<AnnouncementKey>,
}

impl SeenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &AnnouncementKey) -> bool {
        self.keys.contains(key)
    }

    /// Record a key. Returns `true` if it was not present before.
    pub fn insert(&mut self, key: AnnouncementKey) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<AnnouncementKey> for SeenSet {
    fn from_iter<I: IntoIterator<Item = AnnouncementKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Delta produced by one [`NoveltyTracker::filter`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Novelty {
    /// Newly seen announcements, in input order.
    pub items: Vec<Announcement>,
    /// True iff `items` is non-empty.
    pub has_new: bool,
}

/// Filters consolidated snapshots down to announcements not seen before.
#[derive(Debug, Default)]
pub struct NoveltyTracker {
    seen: SeenSet,
}

impl NoveltyTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of keys.
    pub fn with_seen(seen: impl IntoIterator<Item = AnnouncementKey>) -> Self {
        Self {
            seen: seen.into_iter().collect(),
        }
    }

    /// Return the announcements whose keys are new and record those keys.
    ///
    /// Output order follows input order. A key repeated inside `snapshot`
    /// is reported once, at its first position.
    pub fn filter(&mut self, snapshot: impl IntoIterator<Item = Announcement>) -> Novelty {
        let items: Vec<Announcement> = snapshot
            .into_iter()
            .filter(|ann| self.seen.insert(ann.key()))
            .collect();

        debug!(new = items.len(), seen = self.seen.len(), "Novelty filtered");

        Novelty {
            has_new: !items.is_empty(),
            items,
        }
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }
}
