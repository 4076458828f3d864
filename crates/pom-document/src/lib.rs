//! # pom-document
//!
//! The generic document model consumed by the pom-yaml transformer, and a YAML
//! loader that produces it.
//!
//! A document is a tree of [`Node`]s. Each node carries a [`Value`], which is one
//! of four shapes (mapping, sequence, scalar, null) plus an `Unsupported` case for
//! content the loader could read but that has no scalar representation, such as
//! `!!binary` payloads. Every node remembers where it came from in the source
//! text so that downstream errors can point at the offending line.
//!
//! ## Example
//!
//! ```rust
//! use pom_document::parse;
//!
//! let doc = parse("artifactId: demo\nversion: 1.0.0").unwrap();
//! let version = doc.get("version").unwrap();
//! assert_eq!(version.scalar_text().as_deref(), Some("1.0.0"));
//! assert_eq!(version.source_info.line, 2);
//! ```

mod error;
mod node;
mod parser;
mod source_info;

pub use error::{Error, Result};
pub use node::{Entry, Node, Scalar, Value};
pub use parser::{MAX_ALIAS_NODES, parse, parse_file};
pub use source_info::SourceInfo;
