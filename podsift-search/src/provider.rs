//! Trait definition for pluggable podcast directory backends.
//!
//! Each directory (Listen Notes, Podscan) implements [`PodcastProvider`] to
//! turn a query string and a count into normalized [`PodcastRecord`]s.

use std::future::Future;

use crate::error::SearchError;
use crate::types::{PodcastRecord, PodcastSource};

/// Largest page size either directory accepts.
pub const MAX_PAGE_SIZE: usize = 50;

/// A pluggable podcast directory backend.
///
/// Implementors only need [`fetch`](Self::fetch), which may fail. Callers
/// use [`search`](Self::search), which never fails: a disabled provider,
/// a non-success status, a transport error or an undecodable body all
/// come back as an empty list.
///
/// All implementations must be `Send + Sync` for concurrent queries.
pub trait PodcastProvider: Send + Sync {
    /// Query the directory for up to `limit` podcasts.
    ///
    /// `limit` has already been capped at [`max_page_size`](Self::max_page_size).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the status is not a
    /// success, or the body cannot be decoded.
    fn fetch(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<PodcastRecord>, SearchError>> + Send;

    /// Which directory this implementation represents.
    fn source(&self) -> PodcastSource;

    /// Whether a credential is configured. Disabled providers never touch
    /// the network.
    fn is_enabled(&self) -> bool;

    /// The directory's documented page-size maximum.
    fn max_page_size(&self) -> usize {
        MAX_PAGE_SIZE
    }

    /// Query the directory, absorbing every failure into an empty list.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Vec<PodcastRecord>> + Send {
        async move {
            let source = self.source();
            if !self.is_enabled() {
                tracing::debug!(%source, "provider has no API key, skipping");
                return Vec::new();
            }

            let limit = limit.min(self.max_page_size());
            match self.fetch(query, limit).await {
                Ok(records) => {
                    tracing::debug!(%source, count = records.len(), "provider returned results");
                    records
                }
                Err(err) => {
                    tracing::warn!(%source, error = %err, "provider query failed");
                    Vec::new()
                }
            }
        }
    }
}
