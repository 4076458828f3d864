//! Error types for loading YAML documents.

use crate::SourceInfo;
use std::fmt;

/// Result type alias for pom-document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a YAML document.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// YAML syntax error reported by the scanner.
    ParseError {
        message: String,
        location: Option<SourceInfo>,
    },

    /// The input contained no document at all.
    EmptyDocument,

    /// The event stream did not describe a well-formed tree.
    InvalidStructure {
        message: String,
        location: Option<SourceInfo>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError { message, location } => {
                write!(f, "YAML parse error: {}", message)?;
                if let Some(loc) = location {
                    write!(f, " ({})", loc)?;
                }
                Ok(())
            }
            Error::EmptyDocument => write!(f, "No YAML document found"),
            Error::InvalidStructure { message, location } => {
                write!(f, "Invalid YAML structure: {}", message)?;
                if let Some(loc) = location {
                    write!(f, " ({})", loc)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        let marker = err.marker();
        Error::ParseError {
            message: err.info().to_string(),
            location: Some(SourceInfo::from_marker(marker, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location() {
        let err = Error::ParseError {
            message: "mapping values are not allowed here".into(),
            location: Some(SourceInfo::new(Some("pom.yaml".into()), 12, 2, 7, 0)),
        };
        assert_eq!(
            err.to_string(),
            "YAML parse error: mapping values are not allowed here (pom.yaml:2:7)"
        );
    }

    #[test]
    fn test_display_without_location() {
        assert_eq!(Error::EmptyDocument.to_string(), "No YAML document found");
    }
}
