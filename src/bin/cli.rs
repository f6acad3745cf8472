//! podsift command-line entry point.
//!
//! With a query, runs one search and exits. Without one, starts the
//! interactive prompt.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use podsift::config::PodsiftConfig;
use podsift::credentials::Credentials;
use podsift::{repl, startup};
use podsift_search::OrderMode;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "podsift")]
#[command(about = "Natural-language podcast search across Listen Notes and Podscan")]
#[command(version)]
struct Cli {
    /// Configuration file path (default: ~/.config/podsift/config.toml)
    #[arg(short, long, env = "PODSIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Force an ordering: mixed, source, title, host or none
    #[arg(short, long)]
    order: Option<String>,

    /// Print results as a JSON array (one-shot searches only)
    #[arg(long, requires = "query")]
    json: bool,

    /// Search request; omit to start the interactive prompt
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries results.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("podsift=info,podsift_search=warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = PodsiftConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let credentials = Credentials::resolve(&config);
    let status = credentials.status();
    let session = startup::build_session(&config, &credentials, cli.json)
        .context("failed to build search pipeline")?
        .with_order(cli.order.as_deref().map(OrderMode::from_name));

    let mut stdout = std::io::stdout();

    if !cli.query.is_empty() {
        let query = cli.query.join(" ");
        if status == podsift::BackendStatus::Neither {
            eprintln!("{}", status.message());
        }
        session.handle(&query, &mut stdout).await?;
        return Ok(());
    }

    startup::write_banner(&mut stdout, status, config.search.display_limit)?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };
    repl::run_repl(&session, BufReader::new(tokio::io::stdin()), &mut stdout, shutdown).await?;

    tracing::debug!("podsift exiting");
    Ok(())
}
