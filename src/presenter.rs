//! Text and JSON rendering of search reports.

use std::io::Write;

use podsift_search::format::DEFAULT_MAX_SENTENCES;
use podsift_search::{PodcastRecord, QueryIntent, SearchReport, format_description};

use crate::error::{PodsiftError, Result};

/// Width of the `=` rule around each result title.
const RULE_WIDTH: usize = 60;

/// Writes search reports for a terminal or a pipe.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    max_sentences: usize,
    json: bool,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SENTENCES)
    }
}

impl Presenter {
    /// A text presenter keeping `max_sentences` of each description.
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences,
            json: false,
        }
    }

    /// Emit a JSON array of the final records instead of text.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Render `report` in the configured format.
    ///
    /// # Errors
    ///
    /// Returns [`PodsiftError::Io`] if writing fails or
    /// [`PodsiftError::Render`] if JSON encoding fails.
    pub fn render(&self, out: &mut impl Write, report: &SearchReport) -> Result<()> {
        if self.json {
            self.render_json(out, &report.results)
        } else {
            self.render_text(out, report)
        }
    }

    /// Render the human-readable layout followed by the summary line.
    pub fn render_text(&self, out: &mut impl Write, report: &SearchReport) -> Result<()> {
        if report.results.is_empty() {
            writeln!(out, "No podcasts found.")?;
            writeln!(out, "Search terms: '{}'", report.intent.search_terms)?;
            writeln!(out, "Sorting: {}", report.intent.order_mode)?;
        } else {
            write_header(out, &report.intent, report.results.len())?;
            for (i, record) in report.results.iter().enumerate() {
                self.write_record(out, i + 1, record)?;
            }
        }
        writeln!(out, "{}", report.summary())?;
        out.flush()?;
        Ok(())
    }

    /// Render the records as a pretty-printed JSON array.
    pub fn render_json(&self, out: &mut impl Write, records: &[PodcastRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| PodsiftError::Render(e.to_string()))?;
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(())
    }

    fn write_record(&self, out: &mut impl Write, rank: usize, record: &PodcastRecord) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "#{rank} - {}", record.title)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Host: {}", record.host)?;
        writeln!(
            out,
            "Description: {}",
            format_description(&record.description, self.max_sentences)
        )?;
        writeln!(out, "Link: {}", record.link)?;
        writeln!(out, "Source: {}", record.source)?;
        writeln!(out)?;
        Ok(())
    }
}

fn write_header(out: &mut impl Write, intent: &QueryIntent, count: usize) -> Result<()> {
    writeln!(
        out,
        "\nFound {count} podcast(s) for: '{}'",
        intent.original_query
    )?;
    writeln!(out, "Search terms: '{}'", intent.search_terms)?;
    writeln!(out, "Sorting: {}\n", intent.order_mode)?;
    Ok(())
}
