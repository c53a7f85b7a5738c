// Rust guideline compliant 2026-02-06

//! Error types for the JDK issue core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for issue parsing, loading and extraction.
///
/// Every variant except `Io`, `Json` and `Pattern` describes a structurally
/// broken input rather than a single bad record.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input file or directory does not exist.
    #[error("{kind} not found: {}", .path.display())]
    InputNotFound {
        /// What was expected at the path (e.g. "Input file").
        kind: &'static str,
        /// The missing path.
        path: PathBuf,
    },

    /// XML payload could not be parsed.
    #[error("Failed to parse XML {source_name}: {message}")]
    MalformedXml {
        /// File name or identifier of the payload.
        source_name: String,
        /// Parser message.
        message: String,
    },

    /// XML parsed but is not a tracker issue document.
    #[error("Invalid issue payload: {0}")]
    InvalidPayload(String),

    /// Required issue fields are missing.
    #[error("Required fields missing ({}) in {source_name}", .fields.join(", "))]
    MissingFields {
        /// File name or identifier of the payload.
        source_name: String,
        /// Names of the missing fields.
        fields: Vec<&'static str>,
    },

    /// Issue identifier is not in canonical `JDK-<digits>` form.
    #[error("Invalid JDK issue ID at {location}: {value}")]
    InvalidIssueId {
        /// Where the identifier was read (`path:line`).
        location: String,
        /// The offending raw value.
        value: String,
    },

    /// An identifier list contained no identifiers.
    #[error("No JDK issue IDs found in input file: {}", .0.display())]
    EmptyIdList(PathBuf),

    /// Unknown issue field name.
    #[error("Unknown issue field: {0}")]
    InvalidField(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A rule pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Returns true if the error describes broken input rather than an
    /// environment or programming failure.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Json(_) | Error::Pattern(_))
    }
}
