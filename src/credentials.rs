//! API key resolution.
//!
//! Each directory's key comes from its environment variable first and the
//! config file second. A directory with no key is disabled.

use podsift_search::providers::listen_notes::LISTEN_NOTES_KEY_ENV;
use podsift_search::providers::podscan::PODSCAN_KEY_ENV;
use podsift_search::ApiKey;

use crate::config::PodsiftConfig;

/// Resolved directory credentials.
///
/// [`ApiKey`] redacts itself, so the derived `Debug` never shows a key.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Listen Notes key, if any.
    pub listen_notes: Option<ApiKey>,
    /// Podscan key, if any.
    pub podscan: Option<ApiKey>,
}

impl Credentials {
    /// Resolve keys from the process environment and `config`.
    pub fn resolve(config: &PodsiftConfig) -> Self {
        Self::resolve_with(config, |var| std::env::var(var).ok())
    }

    /// Resolve keys using `lookup` in place of the process environment.
    pub fn resolve_with(config: &PodsiftConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve_one = |var: &str, configured: Option<&String>| {
            if let Some(key) = lookup(var).and_then(ApiKey::new) {
                tracing::debug!(var, "API key taken from environment");
                return Some(key);
            }
            configured.cloned().and_then(ApiKey::new)
        };

        Self {
            listen_notes: resolve_one(LISTEN_NOTES_KEY_ENV, config.listen_notes.api_key.as_ref()),
            podscan: resolve_one(PODSCAN_KEY_ENV, config.podscan.api_key.as_ref()),
        }
    }

    /// Which directories will be queried.
    pub fn status(&self) -> BackendStatus {
        match (self.listen_notes.is_some(), self.podscan.is_some()) {
            (true, true) => BackendStatus::Both,
            (true, false) => BackendStatus::ListenNotesOnly,
            (false, true) => BackendStatus::PodscanOnly,
            (false, false) => BackendStatus::Neither,
        }
    }
}

/// The set of directories that have credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// Both directories are queried.
    Both,
    /// Only Listen Notes is queried.
    ListenNotesOnly,
    /// Only Podscan is queried.
    PodscanOnly,
    /// No directory has a key; every search returns nothing.
    Neither,
}

impl BackendStatus {
    /// Startup notice describing which APIs are in use.
    pub fn message(self) -> String {
        match self {
            Self::Both => "Using both Listen Notes and Podscan APIs.".to_owned(),
            Self::ListenNotesOnly => "Using Listen Notes API only.".to_owned(),
            Self::PodscanOnly => "Using Podscan API only.".to_owned(),
            Self::Neither => format!(
                "Warning: No API keys found.\n\
                 Create a .env file with {LISTEN_NOTES_KEY_ENV} and/or {PODSCAN_KEY_ENV}.\n\
                 You can still run the tool, but searches will return no results."
            ),
        }
    }
}
