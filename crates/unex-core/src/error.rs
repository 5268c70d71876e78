//! Error types for unex

use crate::types::ExportFormat;
use thiserror::Error;

/// Main error type for the exporter
#[derive(Debug, Error)]
pub enum ExportError {
    /// Format tag is not one of the recognized formats
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// A tabular format was requested without any entries, or the entries
    /// flatten to no columns at all
    #[error("Cannot export {format} with no entries or columns")]
    EmptyExport { format: ExportFormat },

    /// Payload construction failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An export option has a value the serializer cannot honor
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ExportError>,
    },
}

impl ExportError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ExportError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ExportError {
    fn from(err: toml::ser::Error) -> Self {
        ExportError::Config(err.to_string())
    }
}

/// Result type alias for unex
pub type Result<T> = std::result::Result<T, ExportError>;
