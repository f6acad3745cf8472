//! podsift: natural-language podcast search from the terminal.
//!
//! Ties the `podsift-search` pipeline to a TOML configuration, environment
//! credentials, a text/JSON presenter and an interactive prompt loop.

pub mod config;
pub mod credentials;
pub mod error;
pub mod presenter;
pub mod repl;
pub mod startup;

pub use config::PodsiftConfig;
pub use credentials::{BackendStatus, Credentials};
pub use error::{PodsiftError, Result};
pub use presenter::Presenter;
pub use repl::{Session, run_repl};
