//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls timeouts and how many fused results are kept.
//! [`ProviderSettings`] carries one directory's credential and endpoint.

use std::time::Duration;

use url::Url;

use crate::error::SearchError;
use crate::types::ApiKey;

/// Default number of fused results shown to the user.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Default per-provider time budget in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for a podcast search operation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results kept after deduplication and ordering.
    pub display_limit: usize,
    /// Per-provider timeout in seconds. Applies to the HTTP client and to the
    /// orchestrator's wait on each provider.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, `podsift/<version>` is sent.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// The per-provider timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validates this configuration, returning an error if any field is invalid.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.display_limit == 0 {
            return Err(SearchError::Config(
                "display_limit must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Credential and endpoint for a single podcast directory.
///
/// A provider without an API key is disabled: it returns no results and
/// makes no network calls.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// The directory's API key, if one was configured.
    pub api_key: Option<ApiKey>,
    /// API root, without a trailing slash.
    pub base_url: String,
}

impl ProviderSettings {
    /// Settings for `base_url` with an optional credential.
    pub fn new(api_key: Option<ApiKey>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Whether a credential is present.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), SearchError> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("invalid base_url '{}': {e}", self.base_url)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SearchError::Config(format!(
                "base_url scheme must be http or https, got '{other}'"
            ))),
        }
    }
}
