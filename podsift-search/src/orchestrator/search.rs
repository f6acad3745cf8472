//! Core search orchestrator: interpret, concurrent provider fan-out, fuse.
//!
//! Both directories receive the same refined query at the same time. Each
//! call is bounded by the configured timeout; a slow or failing directory
//! contributes nothing rather than failing the request.

use std::time::Duration;

use serde::Serialize;

use crate::config::{ProviderSettings, SearchConfig};
use crate::error::SearchError;
use crate::intent::{OrderMode, QueryIntent, QueryInterpreter};
use crate::provider::PodcastProvider;
use crate::providers::{ListenNotesClient, PodscanClient};
use crate::types::{PodcastRecord, PodcastSource};

use super::fusion::fuse;

/// Outcome of one search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// How the raw input was interpreted.
    pub intent: QueryIntent,
    /// Fused results, at most `display_limit` long.
    pub results: Vec<PodcastRecord>,
    /// Records received from all providers before fusion.
    pub fetched: usize,
}

impl SearchReport {
    /// Number of final results that came from `source`.
    pub fn count_for(&self, source: PodcastSource) -> usize {
        self.results.iter().filter(|r| r.source == source).count()
    }

    /// One-line summary of what is shown, with a per-source breakdown.
    pub fn summary(&self) -> String {
        let breakdown = PodcastSource::all()
            .iter()
            .map(|source| format!("{} from {source}", self.count_for(*source)))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Search completed. Showing top {} unique podcast(s) ({breakdown}).",
            self.results.len()
        )
    }
}

/// Runs natural-language podcast searches against both directories.
///
/// The provider types default to the real HTTP clients; tests substitute
/// their own [`PodcastProvider`] implementations.
pub struct PodcastSearch<L = ListenNotesClient, P = PodscanClient> {
    interpreter: QueryInterpreter,
    listen_notes: L,
    podscan: P,
    config: SearchConfig,
}

impl PodcastSearch {
    /// Build a search over the real Listen Notes and Podscan clients.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` or either provider's
    /// settings are invalid, or [`SearchError::Http`] if an HTTP client
    /// cannot be built. Missing API keys are not errors.
    pub fn from_settings(
        listen_notes: ProviderSettings,
        podscan: ProviderSettings,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        let listen_notes = ListenNotesClient::new(listen_notes, &config)?;
        let podscan = PodscanClient::new(podscan, &config)?;
        Ok(Self::with_providers(listen_notes, podscan, config))
    }
}

impl<L: PodcastProvider, P: PodcastProvider> PodcastSearch<L, P> {
    /// Build a search over arbitrary providers with the built-in topic table.
    pub fn with_providers(listen_notes: L, podscan: P, config: SearchConfig) -> Self {
        Self {
            interpreter: QueryInterpreter::default(),
            listen_notes,
            podscan,
            config,
        }
    }

    /// Replace the query interpreter (e.g. with a configured topic table).
    pub fn with_interpreter(mut self, interpreter: QueryInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// The interpreter used by [`run`](Self::run).
    pub fn interpreter(&self) -> &QueryInterpreter {
        &self.interpreter
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Sources whose provider has a credential, in interleave order.
    pub fn active_sources(&self) -> Vec<PodcastSource> {
        let mut active = Vec::new();
        if self.listen_notes.is_enabled() {
            active.push(self.listen_notes.source());
        }
        if self.podscan.is_enabled() {
            active.push(self.podscan.source());
        }
        active
    }

    /// Interpret `raw` and run the full pipeline. Never fails.
    pub async fn run(&self, raw: &str) -> SearchReport {
        let intent = self.interpreter.interpret(raw);
        self.execute(intent).await
    }

    /// Like [`run`](Self::run) but with the ordering forced to `mode`.
    pub async fn run_with_order(&self, raw: &str, mode: OrderMode) -> SearchReport {
        let mut intent = self.interpreter.interpret(raw);
        intent.order_mode = mode;
        self.execute(intent).await
    }

    /// Query both providers for `intent` and fuse their results.
    ///
    /// Listen Notes records precede Podscan records in the combined list,
    /// which is what "arrival order" means for deduplication.
    pub async fn execute(&self, intent: QueryIntent) -> SearchReport {
        let timeout = self.config.timeout();
        let terms = intent.search_terms.as_str();
        let limit = intent.per_source_limit;

        tracing::debug!(terms, limit, mode = %intent.order_mode, "querying providers");

        let (mut combined, podscan) = tokio::join!(
            bounded_search(&self.listen_notes, terms, limit, timeout),
            bounded_search(&self.podscan, terms, limit, timeout),
        );
        combined.extend(podscan);

        let fetched = combined.len();
        let results = fuse(combined, intent.order_mode, self.config.display_limit);

        tracing::debug!(fetched, shown = results.len(), "search complete");

        SearchReport {
            intent,
            results,
            fetched,
        }
    }
}

/// Run one provider's search under `timeout`; a timeout yields no records.
async fn bounded_search<T: PodcastProvider>(
    provider: &T,
    query: &str,
    limit: usize,
    timeout: Duration,
) -> Vec<PodcastRecord> {
    match tokio::time::timeout(timeout, provider.search(query, limit)).await {
        Ok(records) => records,
        Err(_) => {
            let err = SearchError::Timeout(format!(
                "{} exceeded {}s",
                provider.source(),
                timeout.as_secs()
            ));
            tracing::warn!(source = %provider.source(), error = %err, "provider timed out");
            Vec::new()
        }
    }
}
