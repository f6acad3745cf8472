//! Multi-source result fusion: dedup, order, truncate.

use crate::intent::OrderMode;
use crate::types::PodcastRecord;

use super::dedup::deduplicate;
use super::ordering::order;

/// Fuse combined provider output into the list shown to the user.
///
/// 1. Deduplicate by normalised title (first occurrence wins, blank titles dropped)
/// 2. Order per `mode`
/// 3. Keep at most `display_limit` records
///
/// Pure; an empty input yields an empty output.
pub fn fuse(records: Vec<PodcastRecord>, mode: OrderMode, display_limit: usize) -> Vec<PodcastRecord> {
    let mut fused = order(deduplicate(records), mode);
    fused.truncate(display_limit);
    fused
}
