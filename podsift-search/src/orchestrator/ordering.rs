//! Ordering policies applied to deduplicated results.
//!
//! Every sort here is stable: records that compare equal keep their
//! deduplicated (arrival) order.

use crate::intent::OrderMode;
use crate::types::{PodcastRecord, PodcastSource};

/// Reorder `records` according to `mode`.
pub fn order(mut records: Vec<PodcastRecord>, mode: OrderMode) -> Vec<PodcastRecord> {
    match mode {
        OrderMode::Mixed => interleave_by_source(records),
        OrderMode::BySource => {
            records.sort_by_cached_key(|r| (r.source, r.title.to_lowercase()));
            records
        }
        OrderMode::ByTitle => {
            records.sort_by_cached_key(|r| r.title.to_lowercase());
            records
        }
        OrderMode::ByHost => {
            records.sort_by_cached_key(|r| r.host.to_lowercase());
            records
        }
        OrderMode::Unsorted => records,
    }
}

/// Round-robin across sources in [`PodcastSource::all`] order.
///
/// Arrival order is kept within each source. Once a source runs out the
/// remaining records of the others follow as-is.
pub fn interleave_by_source(records: Vec<PodcastRecord>) -> Vec<PodcastRecord> {
    let total = records.len();
    let mut partitions: [Vec<PodcastRecord>; 2] = [Vec::new(), Vec::new()];
    for record in records {
        let slot = match record.source {
            PodcastSource::ListenNotes => 0,
            PodcastSource::Podscan => 1,
        };
        partitions[slot].push(record);
    }

    let mut lanes: Vec<_> = partitions.into_iter().map(Vec::into_iter).collect();
    let mut mixed = Vec::with_capacity(total);
    while mixed.len() < total {
        for lane in lanes.iter_mut() {
            if let Some(record) = lane.next() {
                mixed.push(record);
            }
        }
    }
    mixed
}
