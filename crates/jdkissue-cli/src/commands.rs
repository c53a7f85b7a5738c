// Rust guideline compliant 2026-02-09

//! Command implementations for the `jdki` CLI.

pub mod format;
pub mod report;
pub mod search;
pub mod stats;

use crate::terminal::print_warning;
use jdkissue_app::{AppError, LoadFailure, Result};
use jdkissue_core::Config;
use std::path::PathBuf;

/// Returns the issue files a command should read.
///
/// Explicit files win; otherwise the configured `default_files` are used.
///
/// # Errors
///
/// Returns `InvalidInput` when neither source names a file.
pub fn resolve_files(files: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }
    if !config.default_files.is_empty() {
        return Ok(config.default_files.clone());
    }
    Err(AppError::InvalidInput(
        "no issue files given: pass -f/--files or set default_files in the config".to_string(),
    ))
}

/// Prints one warning per file that failed to load.
pub fn warn_failures(failures: &[LoadFailure], use_color: bool) {
    for failure in failures {
        print_warning(
            &format!("failed to load {}: {}", failure.path.display(), failure.error),
            use_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_files_prefers_explicit_files() {
        let config = Config {
            default_files: vec![PathBuf::from("default.txt")],
            ..Config::default()
        };
        let explicit = vec![PathBuf::from("a.txt")];
        assert_eq!(resolve_files(&explicit, &config).unwrap(), explicit);
        assert_eq!(
            resolve_files(&[], &config).unwrap(),
            vec![PathBuf::from("default.txt")]
        );
    }

    #[test]
    fn test_resolve_files_requires_some_file() {
        let err = resolve_files(&[], &Config::default()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
