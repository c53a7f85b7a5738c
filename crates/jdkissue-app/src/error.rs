// Rust guideline compliant 2026-02-09

//! Error handling for JDK issue application services.

use jdkissue_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An input file or directory was not found.
    NotFound,
    /// An XML payload could not be parsed or is not an issue document.
    MalformedXml,
    /// An issue payload lacks required fields.
    MissingFields,
    /// An identifier list is malformed or empty.
    InvalidIssueId,
    /// The request included invalid inputs.
    InvalidInput,
    /// No query criteria were given.
    NoQuery,
    /// Configuration failed to load or validate.
    ConfigError,
    /// IO failure while reading or writing files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Report rendering failed.
    TemplateError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A search was requested without an id, keyword or filter.
    #[error("No search criteria given: provide an issue id, a keyword or at least one filter")]
    NoQuery,

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The report template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NoQuery => ErrorCode::NoQuery,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Template(_) => ErrorCode::TemplateError,
            AppError::Core(core) => match core {
                CoreError::InputNotFound { .. } => ErrorCode::NotFound,
                CoreError::MalformedXml { .. } | CoreError::InvalidPayload(_) => {
                    ErrorCode::MalformedXml
                }
                CoreError::MissingFields { .. } => ErrorCode::MissingFields,
                CoreError::InvalidIssueId { .. } | CoreError::EmptyIdList(_) => {
                    ErrorCode::InvalidIssueId
                }
                CoreError::InvalidField(_) => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Pattern(_) => ErrorCode::Unknown,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(core) => match core {
                CoreError::InputNotFound { kind, path } => Some(serde_json::json!({
                    "kind": kind,
                    "path": path,
                })),
                CoreError::MissingFields {
                    source_name,
                    fields,
                } => Some(serde_json::json!({
                    "source": source_name,
                    "fields": fields,
                })),
                CoreError::InvalidIssueId { location, value } => Some(serde_json::json!({
                    "location": location,
                    "value": value,
                })),
                _ => None,
            },
            _ => None,
        }
    }
}
