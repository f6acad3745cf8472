//! Podscan directory client.
//!
//! Uses `GET /podcasts/search` with bearer-token authentication and
//! best-match ordering over name, description and publisher.

use serde::Deserialize;

use crate::config::{ProviderSettings, SearchConfig};
use crate::error::SearchError;
use crate::http;
use crate::provider::PodcastProvider;
use crate::types::{PodcastRecord, PodcastSource};

use super::{UNKNOWN_HOST, non_blank};

/// Production API root.
pub const PODSCAN_BASE_URL: &str = "https://podscan.fm/api/v1";

/// Environment variable conventionally holding the Podscan key.
pub const PODSCAN_KEY_ENV: &str = "PODSCAN_API_KEY";

/// Podscan podcast search client.
pub struct PodscanClient {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl PodscanClient {
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

impl PodcastProvider for PodscanClient {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<PodcastRecord>, SearchError> {
        let Some(key) = self.settings.api_key.as_ref() else {
            return Ok(Vec::new());
        };
        tracing::trace!(query, limit, "Podscan search");

        let per_page = limit.to_string();
        let response = self
            .client
            .get(format!("{}/podcasts/search", self.settings.base_url))
            .bearer_auth(key.expose())
            .header("Content-Type", "application/json")
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("order_by", "best_match"),
                ("search_fields", "name,description,publisher_name"),
                ("language", "en"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Podscan request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Podscan HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Podscan response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "Podscan response received");

        parse_podscan_response(&body, limit)
    }

    fn source(&self) -> PodcastSource {
        PodcastSource::Podscan
    }

    fn is_enabled(&self) -> bool {
        self.settings.is_enabled()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    podcasts: Option<Vec<PodscanPodcast>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PodscanPodcast {
    podcast_name: Option<String>,
    publisher_name: Option<String>,
    podcast_description: Option<String>,
    podcast_url: Option<String>,
}

impl From<PodscanPodcast> for PodcastRecord {
    fn from(p: PodscanPodcast) -> Self {
        Self {
            title: p.podcast_name.unwrap_or_default(),
            host: non_blank(p.publisher_name).unwrap_or_else(|| UNKNOWN_HOST.to_owned()),
            description: p.podcast_description.unwrap_or_default(),
            link: p.podcast_url.unwrap_or_default(),
            source: PodcastSource::Podscan,
        }
    }
}

/// Decode a Podscan search response body into records.
pub(crate) fn parse_podscan_response(
    body: &str,
    limit: usize,
) -> Result<Vec<PodcastRecord>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Podscan response: {e}")))?;

    let records: Vec<PodcastRecord> = response
        .podcasts
        .unwrap_or_default()
        .into_iter()
        .take(limit)
        .map(PodcastRecord::from)
        .collect();

    tracing::debug!(count = records.len(), "Podscan results parsed");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiKey;

    const MOCK_RESPONSE: &str = r#"{
        "podcasts": [
            {
                "podcast_id": "pd_1",
                "podcast_name": "Darknet Diaries",
                "publisher_name": "Jack Rhysider",
                "podcast_description": "True stories from the dark side of the Internet.",
                "podcast_url": "https://darknetdiaries.com"
            },
            {
                "podcast_name": "Casefile True Crime",
                "publisher_name": "",
                "podcast_description": "Fact is scarier than fiction."
            }
        ],
        "pagination": {"total": 2}
    }"#;

    #[test]
    fn parse_maps_fields() {
        let records = parse_podscan_response(MOCK_RESPONSE, 20).expect("should parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Darknet Diaries");
        assert_eq!(records[0].host, "Jack Rhysider");
        assert_eq!(records[0].link, "https://darknetdiaries.com");
        assert_eq!(records[0].source, PodcastSource::Podscan);
    }

    #[test]
    fn blank_publisher_becomes_unknown_host() {
        let records = parse_podscan_response(MOCK_RESPONSE, 20).expect("should parse");
        assert_eq!(records[1].host, "Unknown Host");
        assert_eq!(records[1].link, "");
    }

    #[test]
    fn parse_respects_limit() {
        let records = parse_podscan_response(MOCK_RESPONSE, 1).expect("should parse");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_podcasts_array_is_empty() {
        let records = parse_podscan_response("{}", 20).expect("should parse");
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse_podscan_response("not json", 20).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn disabled_without_key() {
        let client = PodscanClient::new(
            ProviderSettings::new(None, PODSCAN_BASE_URL),
            &SearchConfig::default(),
        )
        .expect("client");
        assert!(!client.is_enabled());
        assert_eq!(client.source(), PodcastSource::Podscan);
        assert_eq!(client.max_page_size(), 50);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PodscanClient>();
    }

    #[tokio::test]
    #[ignore] // Live test: needs PODSCAN_API_KEY, run with `cargo test -- --ignored`
    async fn live_podscan_search() {
        let key = std::env::var(PODSCAN_KEY_ENV).ok().and_then(ApiKey::new);
        let client = PodscanClient::new(
            ProviderSettings::new(key, PODSCAN_BASE_URL),
            &SearchConfig::default(),
        )
        .expect("client");
        let records = client.fetch("true crime", 5).await.expect("live search");
        assert!(!records.is_empty());
    }
}
