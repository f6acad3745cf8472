//! Configuration types for podsift.
//!
//! Loaded from `~/.config/podsift/config.toml` (or `$XDG_CONFIG_HOME`). Every
//! section is optional; a missing section takes its defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use podsift_search::config::{DEFAULT_DISPLAY_LIMIT, DEFAULT_TIMEOUT_SECONDS};
use podsift_search::format::DEFAULT_MAX_SENTENCES;
use podsift_search::providers::listen_notes::LISTEN_NOTES_BASE_URL;
use podsift_search::providers::podscan::PODSCAN_BASE_URL;
use podsift_search::{ProviderSettings, QueryInterpreter, SearchConfig, Topic};
use serde::{Deserialize, Serialize};

use crate::error::{PodsiftError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PodsiftConfig {
    /// Timeout and result-count settings.
    pub search: SearchSection,
    /// Listen Notes credential and endpoint.
    pub listen_notes: ProviderSection,
    /// Podscan credential and endpoint.
    pub podscan: ProviderSection,
    /// Output settings.
    pub presentation: PresentationConfig,
    /// Topic table. When non-empty it replaces the built-in table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<Topic>,
}

/// `[search]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Per-directory request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum number of fused results shown.
    pub display_limit: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

/// `[listen_notes]` / `[podscan]` sections.
///
/// Unset fields fall back to the environment (for the key) and to the
/// directory's production endpoint (for the URL).
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// API key. The environment variable wins when both are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API root override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl fmt::Debug for ProviderSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSection")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// `[presentation]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Sentences kept from each description.
    pub max_sentences: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

impl PodsiftConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PodsiftError::Config(format!("{}: {e}", path.display())))
    }

    /// Returns the default config file path: `~/.config/podsift/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("podsift").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("podsift")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/podsift-config/config.toml")
        }
    }

    /// Load and validate the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is read
    /// if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every section for values the search pipeline would reject.
    ///
    /// # Errors
    ///
    /// Returns [`PodsiftError::Search`] for invalid search or endpoint
    /// settings and [`PodsiftError::Config`] for malformed topics.
    pub fn validate(&self) -> Result<()> {
        self.search_config().validate()?;
        ProviderSettings::new(None, self.listen_notes_base_url()).validate()?;
        ProviderSettings::new(None, self.podscan_base_url()).validate()?;
        for topic in &self.topics {
            if topic.name.trim().is_empty() {
                return Err(PodsiftError::Config("topic name must not be empty".into()));
            }
            if topic.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(PodsiftError::Config(format!(
                    "topic '{}' has no keywords",
                    topic.name
                )));
            }
        }
        Ok(())
    }

    /// Settings for the search orchestrator.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            display_limit: self.search.display_limit,
            timeout_seconds: self.search.timeout_seconds,
            ..SearchConfig::default()
        }
    }

    /// Listen Notes API root, configured or production.
    pub fn listen_notes_base_url(&self) -> &str {
        self.listen_notes
            .base_url
            .as_deref()
            .unwrap_or(LISTEN_NOTES_BASE_URL)
    }

    /// Podscan API root, configured or production.
    pub fn podscan_base_url(&self) -> &str {
        self.podscan.base_url.as_deref().unwrap_or(PODSCAN_BASE_URL)
    }

    /// Interpreter over the configured topics, or the built-in table when none are set.
    pub fn interpreter(&self) -> QueryInterpreter {
        if self.topics.is_empty() {
            return QueryInterpreter::default();
        }
        QueryInterpreter::new(
            self.topics
                .iter()
                .map(|t| Topic::new(&t.name, &t.keywords))
                .collect(),
        )
    }
}
