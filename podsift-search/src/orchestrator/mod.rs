//! Search orchestrator: concurrent provider fan-out and result fusion.
//!
//! This module sends one query to every podcast directory concurrently,
//! deduplicates the combined results by normalised title, orders them per
//! the requested [`OrderMode`](crate::intent::OrderMode) and truncates to
//! the display limit.

pub mod dedup;
pub mod fusion;
pub mod ordering;
pub mod search;

pub use fusion::fuse;
pub use search::{PodcastSearch, SearchReport};
