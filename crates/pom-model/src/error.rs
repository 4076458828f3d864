//! Error types for POM serialization.

use thiserror::Error;

/// Result type alias for pom-model operations.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Errors that can occur while writing a descriptor as XML.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write POM: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write POM: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("POM output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
