//! Typed Maven project descriptor.
//!
//! This crate holds the output side of pom-yaml: a [`ProjectDescriptor`] whose
//! field set and nesting mirror the POM 4.0.0 schema, the opaque [`ConfigNode`]
//! tree used for plugin configuration, and a writer that serializes a descriptor
//! to canonical POM XML.
//!
//! # Example
//!
//! ```rust
//! use pom_model::{Coordinate, Dependency, ProjectDescriptor, write_pom};
//!
//! let project = ProjectDescriptor {
//!     group_id: Some("org.example".into()),
//!     artifact_id: Some("demo".into()),
//!     version: Some("1.0.0".into()),
//!     dependencies: vec![Dependency::new(Coordinate::new(
//!         Some("org.yaml"),
//!         "snakeyaml",
//!         Some("2.4"),
//!     ))],
//!     ..ProjectDescriptor::default()
//! };
//!
//! let xml = write_pom(&project).unwrap();
//! assert!(xml.contains("<artifactId>snakeyaml</artifactId>"));
//! ```

pub mod config_node;
pub mod error;
pub mod types;
pub mod writer;

pub use config_node::ConfigNode;
pub use error::{Result, WriteError};
pub use types::*;
pub use writer::{PomWriter, write_pom};
