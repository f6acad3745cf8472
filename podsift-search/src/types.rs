//! Core types for podcast records and directory identification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// A single podcast returned by one of the podcast directories.
///
/// Every provider maps its own response shape into this record, so the
/// fusion stage only ever sees one shape. Records are never mutated after
/// a provider produces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastRecord {
    /// Show title as published by the directory.
    pub title: String,
    /// Host or publisher name.
    pub host: String,
    /// Raw show description; may contain HTML markup.
    pub description: String,
    /// Website or directory page for the show.
    pub link: String,
    /// Which directory returned this record.
    pub source: PodcastSource,
}

impl PodcastRecord {
    /// The deduplication key: the title case-folded and trimmed.
    ///
    /// Two records with the same key are treated as the same podcast.
    pub fn title_key(&self) -> String {
        self.title.trim().to_lowercase()
    }
}

/// Podcast directories that podsift can query.
///
/// The derived ordering (`ListenNotes < Podscan`) is the order used when
/// grouping results by source and when interleaving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PodcastSource {
    /// Listen Notes podcast search API.
    #[serde(rename = "Listen Notes")]
    ListenNotes,
    /// Podscan podcast search API.
    Podscan,
}

impl PodcastSource {
    /// Returns the human-readable name of this directory.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListenNotes => "Listen Notes",
            Self::Podscan => "Podscan",
        }
    }

    /// Returns all known directories in interleaving order.
    pub fn all() -> &'static [PodcastSource] {
        &[Self::ListenNotes, Self::Podscan]
    }
}

impl fmt::Display for PodcastSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PodcastSource {
    type Err = SearchError;

    /// Accepts `"Listen Notes"`, `"listen_notes"`, `"listen-notes"`,
    /// `"listennotes"` and `"podscan"` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "listennotes" => Ok(Self::ListenNotes),
            "podscan" => Ok(Self::Podscan),
            _ => Err(SearchError::UnknownSource(s.to_owned())),
        }
    }
}

/// A provider credential. `Debug` and `Display` never reveal the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a credential, returning `None` when it is blank.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value.trim().to_owned()))
        }
    }

    /// The raw credential, for use in request headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> PodcastRecord {
        PodcastRecord {
            title: title.into(),
            host: "Host".into(),
            description: String::new(),
            link: "https://example.com".into(),
            source: PodcastSource::Podscan,
        }
    }

    #[test]
    fn title_key_folds_case_and_trims() {
        assert_eq!(record("  The Daily ").title_key(), "the daily");
        assert_eq!(record("the daily").title_key(), record("The Daily").title_key());
    }

    #[test]
    fn title_key_of_blank_title_is_empty() {
        assert!(record("   ").title_key().is_empty());
    }

    #[test]
    fn source_display() {
        assert_eq!(PodcastSource::ListenNotes.to_string(), "Listen Notes");
        assert_eq!(PodcastSource::Podscan.to_string(), "Podscan");
    }

    #[test]
    fn source_ordering_follows_interleave_order() {
        assert!(PodcastSource::ListenNotes < PodcastSource::Podscan);
        assert_eq!(
            PodcastSource::all(),
            &[PodcastSource::ListenNotes, PodcastSource::Podscan]
        );
    }

    #[test]
    fn source_parses_loose_spellings() {
        for s in ["Listen Notes", "listen_notes", "LISTEN-NOTES", "listennotes"] {
            assert_eq!(s.parse::<PodcastSource>().ok(), Some(PodcastSource::ListenNotes));
        }
        assert_eq!(" Podscan ".parse::<PodcastSource>().ok(), Some(PodcastSource::Podscan));
    }

    #[test]
    fn unknown_source_is_an_error() {
        let err = "Spotify".parse::<PodcastSource>().unwrap_err();
        assert!(matches!(err, SearchError::UnknownSource(ref s) if s == "Spotify"));
    }

    #[test]
    fn source_serializes_with_display_name() {
        let json = serde_json::to_string(&PodcastSource::ListenNotes).expect("serialize");
        assert_eq!(json, "\"Listen Notes\"");
        let decoded: PodcastSource = serde_json::from_str("\"Podscan\"").expect("deserialize");
        assert_eq!(decoded, PodcastSource::Podscan);
    }

    #[test]
    fn record_with_unknown_source_fails_to_deserialize() {
        let json = r#"{"title":"t","host":"h","description":"","link":"","source":"iTunes"}"#;
        assert!(serde_json::from_str::<PodcastRecord>(json).is_err());
    }

    #[test]
    fn blank_api_key_is_none() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
    }

    #[test]
    fn api_key_is_redacted() {
        let key = ApiKey::new("secret-123").expect("non-empty");
        assert_eq!(key.expose(), "secret-123");
        assert!(!format!("{key:?}").contains("secret"));
        assert_eq!(key.to_string(), "[REDACTED]");
    }
}
