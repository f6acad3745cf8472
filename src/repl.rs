//! Interactive search loop.
//!
//! Reads one request per line, runs the search pipeline and writes the
//! rendered results. The loop is generic over its input, output and
//! shutdown signal so it can be driven from tests.

use std::future::Future;
use std::io::Write;

use podsift_search::{OrderMode, PodcastProvider, PodcastSearch, SearchReport};
use podsift_search::providers::{ListenNotesClient, PodscanClient};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::Result;
use crate::presenter::Presenter;

/// Prompt written before each request.
pub const PROMPT: &str = "\nDescribe what podcasts you're looking for (or 'quit' to exit): ";

/// Written when the loop ends.
pub const GOODBYE: &str = "Goodbye!";

/// Requests shown in the startup banner.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "Find me JavaScript programming podcasts",
    "Show me true crime shows sorted alphabetically",
    "I want business podcasts about startups",
    "Comedy podcasts grouped by source",
    "Meditation and mindfulness shows",
];

/// One line of user input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `quit`, `exit` or `q`.
    Quit,
    /// Nothing but whitespace.
    Empty,
    /// Anything else, trimmed.
    Search(&'a str),
}

/// Classify a line of input.
pub fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Search(trimmed),
    }
}

/// A configured search pipeline plus its presenter.
pub struct Session<L = ListenNotesClient, P = PodscanClient> {
    search: PodcastSearch<L, P>,
    presenter: Presenter,
    order: Option<OrderMode>,
}

impl<L: PodcastProvider, P: PodcastProvider> Session<L, P> {
    /// A session using each request's own ordering phrases.
    pub fn new(search: PodcastSearch<L, P>, presenter: Presenter) -> Self {
        Self {
            search,
            presenter,
            order: None,
        }
    }

    /// Force every request to use `order`, ignoring ordering phrases.
    pub fn with_order(mut self, order: Option<OrderMode>) -> Self {
        self.order = order;
        self
    }

    /// The underlying search pipeline.
    pub fn search(&self) -> &PodcastSearch<L, P> {
        &self.search
    }

    /// Run one request and render it to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error only if rendering fails; directory failures yield
    /// an empty report instead.
    pub async fn handle(&self, query: &str, out: &mut impl Write) -> Result<SearchReport> {
        tracing::debug!(query, "handling request");
        let report = match self.order {
            Some(mode) => self.search.run_with_order(query, mode).await,
            None => self.search.run(query).await,
        };
        self.presenter.render(out, &report)?;
        Ok(report)
    }
}

/// Run the prompt loop until quit, end of input or `shutdown` resolves.
///
/// A failed turn is reported as `Error: ...` and the loop continues.
///
/// # Errors
///
/// Returns an error if reading input fails for a reason other than an
/// undecodable line, or if the prompt cannot be written.
pub async fn run_repl<L, P, R, W, S>(
    session: &Session<L, P>,
    input: R,
    out: &mut W,
    shutdown: S,
) -> Result<()>
where
    L: PodcastProvider,
    P: PodcastProvider,
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future<Output = ()>,
{
    let mut lines = input.lines();
    tokio::pin!(shutdown);

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let read = tokio::select! {
            read = lines.next_line() => read,
            () = &mut shutdown => {
                tracing::debug!("interrupted");
                writeln!(out, "\n{GOODBYE}")?;
                return Ok(());
            }
        };

        let line = match read {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out, "\n{GOODBYE}")?;
                return Ok(());
            }
            // The undecodable line has already been consumed.
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!(error = %e, "unreadable input line");
                writeln!(out, "Error: {e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match parse_command(&line) {
            Command::Quit => {
                writeln!(out, "{GOODBYE}")?;
                return Ok(());
            }
            Command::Empty => continue,
            Command::Search(query) => {
                if let Err(e) = session.handle(query, out).await {
                    tracing::error!(error = %e, "request failed");
                    writeln!(out, "Error: {e}")?;
                }
            }
        }
    }
}
