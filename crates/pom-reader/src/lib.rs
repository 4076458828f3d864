//! # pom-reader
//!
//! Transforms a loaded YAML document into a typed Maven [`ProjectDescriptor`].
//!
//! Recognized sections (`dependencies`, `build`, `reporting`, ...) are mapped onto
//! the descriptor types; coordinates may be written as colon-separated shorthand
//! (`org.junit.jupiter:junit-jupiter:test:5.9.3`); untyped `configuration` blocks
//! become opaque [`ConfigNode`](pom_model::ConfigNode) trees. The resulting
//! descriptor serializes through [`pom_model::write_pom`] exactly like the one
//! built from the equivalent verbose POM.
//!
//! ## Example
//!
//! ```rust
//! use pom_reader::parse_str;
//!
//! let project = parse_str(r#"
//! id: org.example:demo:1.0.0
//! dependencies:
//!   - org.junit.jupiter:junit-jupiter:test:5.9.3
//! "#).unwrap();
//!
//! assert_eq!(project.artifact_id.as_deref(), Some("demo"));
//! assert_eq!(project.dependencies[0].coordinate.scope.as_deref(), Some("test"));
//! ```

mod config_tree;
mod coordinate;
mod error;
mod mappers;
mod options;
mod source;
mod transformer;

pub use config_tree::{ConfigTreeBuilder, ElementNaming, is_element_name};
pub use coordinate::{SCOPES, is_scope, parse_coordinate};
pub use error::{CoordinateError, ModelParseError, ReaderError, Result};
pub use mappers::SectionMappers;
pub use options::{DEFAULT_MAX_DEPTH, ReaderOptions};
pub use source::{DEFAULT_FILE_NAME, ModelParser, Source, YamlModelParser};
pub use transformer::{ModelTransformer, RECOGNIZED_KEYS, ROOT_PATH};

use pom_document::Node;
use pom_model::ProjectDescriptor;

/// Transform a loaded document with default options.
pub fn parse_model(document: &Node) -> Result<ProjectDescriptor> {
    ModelTransformer::default().transform(document)
}

/// Load and transform YAML text with default options.
pub fn parse_str(content: &str) -> std::result::Result<ProjectDescriptor, ModelParseError> {
    YamlModelParser.parse(&Source::text("<string>", content), &ReaderOptions::default())
}
