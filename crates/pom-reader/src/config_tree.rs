//! Conversion of arbitrary document values into opaque [`ConfigNode`] trees.
//!
//! Used for every field the schema leaves untyped: plugin, execution and report
//! plugin `configuration` blocks.

use crate::error::{ReaderError, Result};
use crate::options::DEFAULT_MAX_DEPTH;
use pom_document::{Node, Value};
use pom_model::ConfigNode;

/// How the elements of a sequence are named.
///
/// A sequence under `name` always becomes a container called `name`; this
/// decides what its children are called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementNaming {
    /// Every element reuses the sequence's own name.
    #[default]
    Repeat,

    /// Elements take the singular of a plural name (`artifactItems` ->
    /// `artifactItem`, `dependencies` -> `dependency`), matching how the verbose
    /// XML form spells repeated elements. Names that are not plural are reused.
    Singular,
}

impl ElementNaming {
    /// Name for the elements of a sequence called `name`.
    pub fn element_name(self, name: &str) -> String {
        match self {
            ElementNaming::Repeat => name.to_string(),
            ElementNaming::Singular => singular(name),
        }
    }
}

fn singular(name: &str) -> String {
    if name.ends_with("ss") || name.ends_with("sses") {
        return name.to_string();
    }
    if let Some(stem) = name.strip_suffix("ies") {
        return if stem.is_empty() {
            name.to_string()
        } else {
            format!("{}y", stem)
        };
    }
    match name.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// Whether `name` can be written as an XML element name.
///
/// Letters, digits, `-`, `_` and `.`, starting with a letter or `_`. Colons are
/// refused since POM files carry no namespace prefixes.
pub fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Reject a mapping key that cannot become an element name.
pub(crate) fn check_element_name(name: &str, key: &Node, path: &str) -> Result<()> {
    if is_element_name(name) {
        Ok(())
    } else {
        Err(ReaderError::MalformedDocument {
            path: path.to_string(),
            message: format!("'{}' is not a valid XML element name", name),
            location: key.source_info.clone(),
        })
    }
}

/// Builds [`ConfigNode`] trees from document values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTreeBuilder {
    naming: ElementNaming,
    max_depth: usize,
}

impl Default for ConfigTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigTreeBuilder {
    pub fn new() -> Self {
        Self {
            naming: ElementNaming::Repeat,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_naming(mut self, naming: ElementNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Convert `value` into a node called `name`.
    ///
    /// - mapping: container with one child per entry, named after the key
    /// - sequence: container whose children are the elements, named per
    ///   [`ElementNaming`]
    /// - scalar: leaf with the scalar's canonical text
    /// - null: leaf without text
    ///
    /// ```rust
    /// use pom_document::parse;
    /// use pom_reader::ConfigTreeBuilder;
    ///
    /// let doc = parse("source: 17\ntarget: 17").unwrap();
    /// let node = ConfigTreeBuilder::new().build("configuration", &doc).unwrap();
    /// assert_eq!(node.children.len(), 2);
    /// assert_eq!(node.children[0].text.as_deref(), Some("17"));
    /// ```
    pub fn build(&self, name: &str, value: &Node) -> Result<ConfigNode> {
        self.node(name, value, name, 0)
    }

    /// Like [`build`](Self::build), reporting errors under `path`.
    pub fn build_at(&self, name: &str, value: &Node, path: &str) -> Result<ConfigNode> {
        self.node(name, value, path, 0)
    }

    fn node(&self, name: &str, value: &Node, path: &str, depth: usize) -> Result<ConfigNode> {
        if depth > self.max_depth {
            return Err(ReaderError::Structural {
                path: path.to_string(),
                limit: self.max_depth,
                location: value.source_info.clone(),
            });
        }

        match &value.value {
            Value::Mapping(entries) => {
                let children = entries
                    .iter()
                    .map(|entry| {
                        let key = entry.key.scalar_text().ok_or_else(|| {
                            ReaderError::MalformedDocument {
                                path: path.to_string(),
                                message: format!(
                                    "configuration keys must be scalars, found a {}",
                                    entry.key.kind_name()
                                ),
                                location: entry.key.source_info.clone(),
                            }
                        })?;
                        check_element_name(&key, &entry.key, path)?;
                        let child_path = format!("{}.{}", path, key);
                        self.node(&key, &entry.value, &child_path, depth + 1)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ConfigNode::container(name, children))
            }
            Value::Sequence(items) => {
                let element_name = self.naming.element_name(name);
                let children = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let child_path = format!("{}[{}]", path, i);
                        self.node(&element_name, item, &child_path, depth + 1)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ConfigNode::container(name, children))
            }
            Value::Scalar(scalar) => Ok(ConfigNode::leaf(name, scalar.canonical_text())),
            Value::Null => Ok(ConfigNode::empty(name)),
            Value::Unsupported(kind) => Err(ReaderError::UnsupportedValueType {
                path: path.to_string(),
                kind: kind.clone(),
                location: value.source_info.clone(),
            }),
        }
    }
}
