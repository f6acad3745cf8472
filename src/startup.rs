//! Pipeline construction and the startup banner.

use std::io::Write;

use podsift_search::{PodcastSearch, ProviderSettings};

use crate::config::PodsiftConfig;
use crate::credentials::{BackendStatus, Credentials};
use crate::error::Result;
use crate::presenter::Presenter;
use crate::repl::{EXAMPLE_QUERIES, Session};

/// Build the search pipeline from configuration and resolved keys.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an HTTP client
/// cannot be built. Missing keys only disable their directory.
pub fn build_search(config: &PodsiftConfig, credentials: &Credentials) -> Result<PodcastSearch> {
    let search = PodcastSearch::from_settings(
        ProviderSettings::new(
            credentials.listen_notes.clone(),
            config.listen_notes_base_url(),
        ),
        ProviderSettings::new(credentials.podscan.clone(), config.podscan_base_url()),
        config.search_config(),
    )?
    .with_interpreter(config.interpreter());

    tracing::info!(
        sources = ?search.active_sources(),
        display_limit = config.search.display_limit,
        timeout_seconds = config.search.timeout_seconds,
        "search pipeline ready"
    );
    Ok(search)
}

/// Build a full session: pipeline plus presenter.
///
/// # Errors
///
/// See [`build_search`].
pub fn build_session(
    config: &PodsiftConfig,
    credentials: &Credentials,
    json: bool,
) -> Result<Session> {
    let presenter = Presenter::new(config.presentation.max_sentences).with_json(json);
    Ok(Session::new(build_search(config, credentials)?, presenter))
}

/// Write the interactive banner: title, backend notice and example requests.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_banner(out: &mut impl Write, status: BackendStatus, display_limit: usize) -> Result<()> {
    writeln!(out, "podsift v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{}", status.message())?;
    writeln!(out, "\nExample requests:")?;
    for example in EXAMPLE_QUERIES {
        writeln!(out, "  - '{example}'")?;
    }
    writeln!(out, "  Results show the top {display_limit} matches.")?;
    out.flush()?;
    Ok(())
}
