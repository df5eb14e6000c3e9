//! Shared utilities for the demo programs.
//!
//! Provides command-line flag parsing, environment-driven configuration
//! and logging initialization.

#![allow(dead_code)]

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use maze_explorer::{ExplorerConfig, ProtocolVariant, VertexId};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Types
// ============================================================================

/// Command-line arguments for demos.
#[derive(Debug, Clone)]
pub struct Args {
    pub debug: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self {
            debug: args.iter().any(|a| a == "--debug"),
        }
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Initialize tracing/logging.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        "maze_explorer=debug"
    } else {
        "maze_explorer=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

/// Builds an [`ExplorerConfig`] for `url` from `MAZE_*` environment knobs.
///
/// | Variable | Meaning | Default |
/// |----------|---------|---------|
/// | `MAZE_ENTRY` | Entry vertex id | `0` |
/// | `MAZE_VARIANT` | Wire profile (`structured` / `compact`) | `structured` |
/// | `MAZE_SESSIONS` | Sessions to launch | `100` |
/// | `MAZE_PERMITS` | Max open connections | `10` |
pub fn config_from_env(url: &str) -> Result<ExplorerConfig> {
    let entry: u32 = env_parsed("MAZE_ENTRY")?.unwrap_or(0);
    let mut config = ExplorerConfig::new(url, VertexId::new(entry));

    if let Some(variant) = std::env::var("MAZE_VARIANT").ok().filter(|v| !v.is_empty()) {
        let variant: ProtocolVariant = variant
            .parse()
            .map_err(|e: maze_explorer::Error| anyhow::anyhow!(e))?;
        config = config.with_variant(variant);
    }
    if let Some(sessions) = env_parsed("MAZE_SESSIONS")? {
        config = config.with_sessions(sessions);
    }
    if let Some(permits) = env_parsed("MAZE_PERMITS")? {
        config = config.with_permits(permits);
    }
    if let Some(secs) = env_parsed("MAZE_REQUEST_TIMEOUT_SECS")? {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = env_parsed("MAZE_IDLE_TIMEOUT_SECS")? {
        config = config.with_idle_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) if !raw.is_empty() => {
            let value = raw.parse().with_context(|| format!("parsing ${name}"))?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
