//! Listen Notes directory client.
//!
//! Uses the `GET /search` endpoint with `type=podcast`, authenticated by
//! the `X-ListenAPI-Key` header.

use serde::Deserialize;

use crate::config::{ProviderSettings, SearchConfig};
use crate::error::SearchError;
use crate::http;
use crate::provider::PodcastProvider;
use crate::types::{PodcastRecord, PodcastSource};

use super::{UNKNOWN_HOST, non_blank};

/// Production API root.
pub const LISTEN_NOTES_BASE_URL: &str = "https://listen-api.listennotes.com/api/v2";

/// Environment variable conventionally holding the Listen Notes key.
pub const LISTEN_NOTES_KEY_ENV: &str = "LISTEN_NOTES_API_KEY";

/// Listen Notes podcast search client.
pub struct ListenNotesClient {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl ListenNotesClient {
    /// Create a client from provider settings and shared search config.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid base URL and
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(settings: ProviderSettings, config: &SearchConfig) -> Result<Self, SearchError> {
        settings.validate()?;
        let client = http::build_client(config)?;
        Ok(Self { settings, client })
    }
}

impl PodcastProvider for ListenNotesClient {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<PodcastRecord>, SearchError> {
        let Some(key) = self.settings.api_key.as_ref() else {
            return Ok(Vec::new());
        };
        tracing::trace!(query, limit, "Listen Notes search");

        let page_size = limit.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.settings.base_url))
            .header("X-ListenAPI-Key", key.expose())
            .query(&[
                ("q", query),
                ("type", "podcast"),
                ("page_size", page_size.as_str()),
                ("language", "English"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Listen Notes request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Listen Notes HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Listen Notes response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "Listen Notes response received");

        parse_listen_notes_response(&body, limit)
    }

    fn source(&self) -> PodcastSource {
        PodcastSource::ListenNotes
    }

    fn is_enabled(&self) -> bool {
        self.settings.is_enabled()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<ListenNotesPodcast>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListenNotesPodcast {
    title_original: Option<String>,
    publisher_original: Option<String>,
    description_original: Option<String>,
    website: Option<String>,
    listennotes_url: Option<String>,
}

impl From<ListenNotesPodcast> for PodcastRecord {
    fn from(p: ListenNotesPodcast) -> Self {
        Self {
            title: p.title_original.unwrap_or_default(),
            host: non_blank(p.publisher_original).unwrap_or_else(|| UNKNOWN_HOST.to_owned()),
            description: p.description_original.unwrap_or_default(),
            link: non_blank(p.website)
                .or(p.listennotes_url)
                .unwrap_or_default(),
            source: PodcastSource::ListenNotes,
        }
    }
}

/// Decode a Listen Notes search response body into records.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_listen_notes_response(
    body: &str,
    limit: usize,
) -> Result<Vec<PodcastRecord>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Listen Notes response: {e}")))?;

    let records: Vec<PodcastRecord> = response
        .results
        .unwrap_or_default()
        .into_iter()
        .take(limit)
        .map(PodcastRecord::from)
        .collect();

    tracing::debug!(count = records.len(), "Listen Notes results parsed");
    Ok(records)
}
