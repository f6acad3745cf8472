//! Result deduplication by normalised title.
//!
//! The normalised title (case-folded, trimmed) is the only identity a
//! podcast has across directories. The first record seen for a title wins;
//! records with a blank title are dropped outright.

use std::collections::HashSet;

use crate::types::PodcastRecord;

/// Deduplicate records by [`PodcastRecord::title_key`].
///
/// Keeps the first occurrence of each key in input order and drops later
/// duplicates. Records whose key is empty are never kept.
pub fn deduplicate(records: Vec<PodcastRecord>) -> Vec<PodcastRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let before = records.len();

    let unique: Vec<PodcastRecord> = records
        .into_iter()
        .filter(|record| {
            let key = record.title_key();
            !key.is_empty() && seen.insert(key)
        })
        .collect();

    tracing::trace!(before, after = unique.len(), "deduplicated by title");
    unique
}
