/// Utility functions used throughout the application

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("camptui-debug.log");
    path
}

/// Route `log` output to the debug log file
///
/// Logging is off unless `debug` is set; the terminal belongs to the UI.
/// `RUST_LOG` overrides the default `debug` filter.
pub fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialised")?;

    log::info!("Debug mode enabled, logging to {}", path.display());
    Ok(())
}
