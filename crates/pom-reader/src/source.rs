//! Locating and parsing descriptor sources.

use crate::error::ModelParseError;
use crate::options::ReaderOptions;
use crate::transformer::ModelTransformer;
use pom_model::ProjectDescriptor;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up when a directory is given.
pub const DEFAULT_FILE_NAME: &str = "pom.yaml";

/// Where a descriptor is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on disk.
    Path(PathBuf),

    /// In-memory content, labelled for error messages.
    Text { location: String, content: String },
}

impl Source {
    pub fn text(location: impl Into<String>, content: impl Into<String>) -> Self {
        Source::Text {
            location: location.into(),
            content: content.into(),
        }
    }

    /// Label used in error messages and source positions.
    pub fn location(&self) -> String {
        match self {
            Source::Path(path) => path.display().to_string(),
            Source::Text { location, .. } => location.clone(),
        }
    }
}

/// A reader for one descriptor format.
pub trait ModelParser {
    /// Resolve `path` to a source this parser can read.
    ///
    /// A directory resolves to the parser's default file inside it; a file is
    /// used as-is. Returns `None` when nothing readable is found.
    fn locate(&self, path: &Path) -> Option<Source>;

    /// Parse a source into a descriptor.
    fn parse(
        &self,
        source: &Source,
        options: &ReaderOptions,
    ) -> Result<ProjectDescriptor, ModelParseError>;
}

/// [`ModelParser`] for `pom.yaml` descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlModelParser;

impl ModelParser for YamlModelParser {
    fn locate(&self, path: &Path) -> Option<Source> {
        let candidate = if path.is_dir() {
            path.join(DEFAULT_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        if candidate.is_file() {
            debug!(path = %candidate.display(), "located descriptor");
            Some(Source::Path(candidate))
        } else {
            debug!(path = %candidate.display(), "no descriptor found");
            None
        }
    }

    fn parse(
        &self,
        source: &Source,
        options: &ReaderOptions,
    ) -> Result<ProjectDescriptor, ModelParseError> {
        let location = source.location();
        let content: Cow<'_, str> = match source {
            Source::Path(path) => {
                Cow::Owned(std::fs::read_to_string(path).map_err(|source| {
                    ModelParseError::Io {
                        location: location.clone(),
                        source,
                    }
                })?)
            }
            Source::Text { content, .. } => Cow::Borrowed(content),
        };

        let document =
            pom_document::parse_file(&content, &location).map_err(|source| ModelParseError::Yaml {
                location: location.clone(),
                source,
            })?;

        let project = ModelTransformer::new(options.clone()).parse_model(&document, &location)?;
        info!(location = %location, "parsed project descriptor");
        Ok(project)
    }
}
