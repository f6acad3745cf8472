//! Podcast directory clients.
//!
//! Each module provides a struct implementing [`crate::provider::PodcastProvider`]
//! for one directory's JSON search API.

pub mod listen_notes;
pub mod podscan;

pub use listen_notes::ListenNotesClient;
pub use podscan::PodscanClient;

/// Host shown when a directory omits the publisher.
pub(crate) const UNKNOWN_HOST: &str = "Unknown Host";

/// `Some(s)` only when `s` holds non-whitespace text.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
