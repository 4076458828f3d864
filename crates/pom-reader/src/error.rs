//! Error types for descriptor transformation.

use pom_document::SourceInfo;
use thiserror::Error;

/// Result type alias for transformation steps.
pub type Result<T> = std::result::Result<T, ReaderError>;

/// A shorthand coordinate string that could not be split into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("'{value}' has {count} segment(s), expected between 2 and 6")]
    SegmentCount { value: String, count: usize },

    #[error("'{value}' has an empty {field}")]
    EmptySegment { value: String, field: &'static str },

    #[error("'{value}' does not fit {expected}")]
    UnexpectedShape { value: String, expected: &'static str },
}

/// A failure while mapping one field of the document.
///
/// Every variant names the dotted path of the offending field
/// (`project.build.plugins[1].configuration`) and where it sits in the source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReaderError {
    /// The root, or a recognized field, does not have the expected shape.
    #[error("{path}: {message} ({location})")]
    MalformedDocument {
        path: String,
        message: String,
        location: SourceInfo,
    },

    /// A shorthand coordinate could not be parsed.
    #[error("{path}: malformed coordinate: {source} ({location})")]
    MalformedCoordinate {
        path: String,
        #[source]
        source: CoordinateError,
        location: SourceInfo,
    },

    /// A value that is not a mapping, sequence, scalar or null.
    #[error("{path}: unsupported value type: {kind} ({location})")]
    UnsupportedValueType {
        path: String,
        kind: String,
        location: SourceInfo,
    },

    /// The document nests deeper than the configured bound.
    #[error("{path}: nesting exceeds the maximum depth of {limit} ({location})")]
    Structural {
        path: String,
        limit: usize,
        location: SourceInfo,
    },
}

impl ReaderError {
    /// Dotted path of the field that failed.
    pub fn path(&self) -> &str {
        match self {
            ReaderError::MalformedDocument { path, .. }
            | ReaderError::MalformedCoordinate { path, .. }
            | ReaderError::UnsupportedValueType { path, .. }
            | ReaderError::Structural { path, .. } => path,
        }
    }

    /// Source position of the node that failed.
    pub fn location(&self) -> &SourceInfo {
        match self {
            ReaderError::MalformedDocument { location, .. }
            | ReaderError::MalformedCoordinate { location, .. }
            | ReaderError::UnsupportedValueType { location, .. }
            | ReaderError::Structural { location, .. } => location,
        }
    }
}

/// The single failure returned by a whole parse.
///
/// Wraps the underlying cause together with the label of the source being read,
/// so callers never see a partially built descriptor.
#[derive(Debug, Error)]
pub enum ModelParseError {
    #[error("Unable to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse {location}: {source}")]
    Yaml {
        location: String,
        #[source]
        source: pom_document::Error,
    },

    #[error("Unable to parse {location}: {source}")]
    Model {
        location: String,
        #[source]
        source: ReaderError,
    },
}

impl ModelParseError {
    /// Label of the source that failed to parse.
    pub fn location(&self) -> &str {
        match self {
            ModelParseError::Io { location, .. }
            | ModelParseError::Yaml { location, .. }
            | ModelParseError::Model { location, .. } => location,
        }
    }

    /// The transformation error, if the document loaded but did not map.
    pub fn reader_error(&self) -> Option<&ReaderError> {
        match self {
            ModelParseError::Model { source, .. } => Some(source),
            _ => None,
        }
    }
}
