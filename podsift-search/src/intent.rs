//! Natural-language query interpretation.
//!
//! Turns free text such as "show me true crime podcasts sorted
//! alphabetically" into a [`QueryIntent`]: a refined search string plus an
//! [`OrderMode`]. Everything is driven by ordered phrase tables, so priority
//! and first-match-wins are explicit.
//!
//! ```text
//! raw ─► lowercase+trim ─► order-mode scan ─► stop-phrase strip ─► topic expansion
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Results requested from each provider, independent of input.
pub const PER_SOURCE_LIMIT: usize = 20;

/// How fused results are ordered before truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderMode {
    /// Round-robin across sources, Listen Notes first.
    #[default]
    Mixed,
    /// Grouped by source, then title.
    #[serde(rename = "source")]
    BySource,
    /// Alphabetical by title.
    #[serde(rename = "title")]
    ByTitle,
    /// Alphabetical by host.
    #[serde(rename = "host")]
    ByHost,
    /// Arrival order after deduplication.
    #[serde(rename = "none")]
    Unsorted,
}

impl OrderMode {
    /// Short name used in output and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::BySource => "source",
            Self::ByTitle => "title",
            Self::ByHost => "host",
            Self::Unsorted => "none",
        }
    }

    /// Parse a mode name, falling back to [`OrderMode::Mixed`] for anything
    /// unrecognised.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "mixed" => Self::Mixed,
            "source" | "by_source" | "bysource" => Self::BySource,
            "title" | "by_title" | "bytitle" => Self::ByTitle,
            "host" | "by_host" | "byhost" => Self::ByHost,
            "none" | "unsorted" => Self::Unsorted,
            other => {
                tracing::debug!(mode = other, "unrecognised order mode, using mixed");
                Self::Mixed
            }
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured form of one user request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryIntent {
    /// Refined string sent to every provider. May be empty.
    pub search_terms: String,
    /// Ordering applied during fusion.
    pub order_mode: OrderMode,
    /// Results requested from each provider.
    pub per_source_limit: usize,
    /// The input, trimmed and lowercased, for display.
    pub original_query: String,
}

/// Ordering phrases, checked in order. First match wins.
pub const ORDER_PHRASES: &[(&[&str], OrderMode)] = &[
    (&["alphabetical", "a to z", "alphabetically"], OrderMode::ByTitle),
    (&["by host", "by publisher", "by creator"], OrderMode::ByHost),
    (&["by source", "grouped by", "separate"], OrderMode::BySource),
    (&["no sorting", "unsorted", "random"], OrderMode::Unsorted),
];

/// Filler phrases removed from the search string, in removal order.
///
/// Longer phrases precede their prefixes ("podcasts about" before "podcasts").
pub const STOP_PHRASES: &[&str] = &[
    "find me",
    "search for",
    "looking for",
    "show me",
    "i want",
    "podcasts about",
    "podcasts on",
    "podcasts for",
    "podcasts",
    "podcast",
    "episodes",
    "shows",
    "audio",
    "listen to",
];

/// Built-in topic table, in match order.
pub const DEFAULT_TOPICS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "tech",
            "programming",
            "coding",
            "software",
            "ai",
            "machine learning",
            "javascript",
            "python",
            "react",
            "frontend",
            "backend",
        ],
    ),
    (
        "business",
        &[
            "startup",
            "entrepreneur",
            "marketing",
            "sales",
            "finance",
            "investment",
            "leadership",
        ],
    ),
    (
        "health",
        &[
            "fitness",
            "nutrition",
            "wellness",
            "mental health",
            "meditation",
            "mindfulness",
        ],
    ),
    (
        "entertainment",
        &["comedy", "movies", "tv shows", "celebrity", "pop culture"],
    ),
    (
        "education",
        &["learning", "science", "history", "philosophy", "research"],
    ),
    (
        "news",
        &["politics", "current events", "journalism", "world news"],
    ),
    (
        "sports",
        &[
            "football",
            "basketball",
            "soccer",
            "baseball",
            "fitness",
            "athletics",
        ],
    ),
    (
        "crime",
        &["true crime", "mystery", "investigation", "detective", "murder"],
    ),
    (
        "lifestyle",
        &["travel", "food", "fashion", "relationships", "parenting"],
    ),
];

/// A topic name and the keywords that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Name prepended to matching queries.
    pub name: String,
    /// Lowercase substrings that select this topic.
    pub keywords: Vec<String>,
}

impl Topic {
    /// Build a topic, lowercasing the name and keywords.
    pub fn new<I, S>(name: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.trim().to_lowercase(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// Interprets free text against a topic table fixed at construction.
#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    topics: Vec<Topic>,
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOPICS
                .iter()
                .map(|&(name, keywords)| Topic::new(name, keywords))
                .collect(),
        )
    }
}

impl QueryInterpreter {
    /// An interpreter over `topics`, matched in the given order.
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// The topic table, in match order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Interpret raw user input. Never fails; blank input yields blank terms.
    pub fn interpret(&self, raw: &str) -> QueryIntent {
        let normalized = raw.trim().to_lowercase();
        let order_mode = detect_order_mode(&normalized);
        let stripped = strip_stop_phrases(&normalized);
        let search_terms = self.expand_topic(stripped);

        tracing::trace!(query = %normalized, terms = %search_terms, mode = %order_mode, "query interpreted");

        QueryIntent {
            search_terms,
            order_mode,
            per_source_limit: PER_SOURCE_LIMIT,
            original_query: normalized,
        }
    }

    /// Prepend the first matching topic's name unless already present.
    fn expand_topic(&self, text: String) -> String {
        let Some(topic) = self.topics.iter().find(|t| t.matches(&text)) else {
            return text;
        };
        if text.contains(topic.name.as_str()) {
            return text;
        }
        format!("{} {}", topic.name, text).trim().to_owned()
    }
}

/// Interpret `raw` with the built-in topic table.
pub fn interpret(raw: &str) -> QueryIntent {
    QueryInterpreter::default().interpret(raw)
}

/// Select the ordering requested by `text` (already lowercased).
pub fn detect_order_mode(text: &str) -> OrderMode {
    ORDER_PHRASES
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|p| text.contains(p)))
        .map(|(_, mode)| *mode)
        .unwrap_or_default()
}

/// Remove every stop phrase, then collapse whitespace.
pub fn strip_stop_phrases(text: &str) -> String {
    let stripped = STOP_PHRASES
        .iter()
        .fold(text.to_owned(), |acc, phrase| acc.replace(phrase, ""));
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
