//! Log file setup.
//!
//! The TUI owns the terminal, so events go to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{KanbanError, Result};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "KANBAN_SYNC_LOG";

/// Install the global subscriber. The filter comes from `KANBAN_SYNC_LOG`,
/// falling back to `log.filter` in the config.
pub fn init(config: &Config) -> Result<()> {
    let path = config.log_file()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .map_err(|e| KanbanError::Config(format!("invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| KanbanError::Other(format!("failed to initialize logging: {e}")))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
