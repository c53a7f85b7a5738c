// Rust guideline compliant 2026-02-09

//! Tracing setup for the `jdki` binary.
//!
//! Events go to stderr so stdout stays reserved for command output.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global `fmt` subscriber.
///
/// # Arguments
///
/// * `level` - Maximum level name (`error`, `warn`, `info`, `debug`)
/// * `json` - Emit JSON lines instead of human-readable text
///
/// # Errors
///
/// Returns an error if the level name is unknown.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info or debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level: {other} (expected error, warn, info or debug)"),
    }
}
