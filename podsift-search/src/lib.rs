//! # podsift-search
//!
//! Natural-language podcast search across two directories.
//!
//! Free text is interpreted into a refined search string and an ordering
//! mode, sent to Listen Notes and Podscan concurrently, and the combined
//! results are fused into one list.
//!
//! ## Design
//!
//! - Heuristic interpretation from ordered phrase and topic tables
//! - Concurrent provider queries, each bounded by a timeout
//! - Deduplication by normalised title, first occurrence wins
//! - Five ordering policies (mixed, source, title, host, none)
//! - Graceful degradation: a disabled, failing or slow directory contributes
//!   nothing instead of failing the search
//!
//! ## Security
//!
//! - API keys are wrapped in [`ApiKey`], which never prints its value
//! - Search queries are logged only at trace level

pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod intent;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod types;

pub use config::{ProviderSettings, SearchConfig};
pub use error::{Result, SearchError};
pub use format::format_description;
pub use intent::{OrderMode, QueryIntent, QueryInterpreter, Topic, interpret};
pub use orchestrator::{PodcastSearch, SearchReport, fuse};
pub use provider::PodcastProvider;
pub use types::{ApiKey, PodcastRecord, PodcastSource};

/// Search both directories with default configuration.
///
/// Convenience wrapper around [`PodcastSearch::from_settings`] using the
/// production endpoints and the given credentials.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if an HTTP client cannot be built.
/// Provider failures never surface here; they yield fewer results.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> podsift_search::Result<()> {
/// let key = podsift_search::ApiKey::new("my-listen-notes-key");
/// let report = podsift_search::search("find me rust podcasts", key, None).await?;
/// for record in &report.results {
///     println!("{} ({})", record.title, record.source);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    listen_notes_key: Option<ApiKey>,
    podscan_key: Option<ApiKey>,
) -> Result<SearchReport> {
    let search = PodcastSearch::from_settings(
        ProviderSettings::new(listen_notes_key, providers::listen_notes::LISTEN_NOTES_BASE_URL),
        ProviderSettings::new(podscan_key, providers::podscan::PODSCAN_BASE_URL),
        SearchConfig::default(),
    )?;
    Ok(search.run(query).await)
}
