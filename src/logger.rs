//! File logging setup.
//!
//! The terminal is owned by the UI, so log records go to a file under the
//! local data directory instead of stdout/stderr.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;

/// Install the global logger according to the logging configuration.
///
/// A no-op when logging is disabled; `log` macro calls then go nowhere.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level: log::LevelFilter = config
        .level
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", config.level))?;

    let log_path = log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(&log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging initialized at level {level}");
    Ok(())
}

/// Path of the log file: `<data dir>/incentivist/incentivist.log`.
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("incentivist").join("incentivist.log"))
}
