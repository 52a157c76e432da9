//! # TUI Handler
//!
//! Launches the interactive terminal interface, optionally entered through a
//! deep link.

use anyhow::{Context, Result};
use rally_app::{Route, RouteError};
use tracing_subscriber::EnvFilter;

use crate::cli::TuiArgs;
use crate::tui::run_app;

/// Resolve the `--open` target: either a `rally://` deep link or a plain
/// route path. Both resolve through the same parser, so the two forms cannot
/// disagree about what they name.
pub fn parse_open_target(raw: &str) -> Result<Route, RouteError> {
    if raw.contains("://") {
        Route::parse_deep_link(raw)
    } else {
        Route::parse(raw)
    }
}

/// Launch the TUI
pub async fn handle_tui(args: &TuiArgs, verbose: bool) -> Result<()> {
    init_tracing(verbose);

    let initial_route = args
        .open
        .as_deref()
        .map(parse_open_target)
        .transpose()
        .context("failed to resolve --open target")?;

    if let Some(route) = &initial_route {
        tracing::info!(route = %route, "opening deep link");
    }

    run_app(initial_route).await?;
    Ok(())
}

/// Logs go to stderr so the fullscreen UI owns stdout; RUST_LOG overrides
/// the verbosity switch.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
