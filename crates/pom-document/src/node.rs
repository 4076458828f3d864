//! Document nodes with source location tracking.

use crate::SourceInfo;

/// A document node: a [`Value`] plus the location it was read from.
///
/// Nodes own their children, so a document is always a finite tree. YAML
/// aliases are expanded by copy when the document is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The value of this node.
    pub value: Value,

    /// Source location for this node.
    pub source_info: SourceInfo,
}

/// The shape of a document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Ordered key/value entries, in document order.
    Mapping(Vec<Entry>),

    /// Ordered elements, in document order.
    Sequence(Vec<Node>),

    /// A single scalar.
    Scalar(Scalar),

    /// An explicit or implicit null (`~`, `null`, or an empty value).
    Null,

    /// Content with no mapping, sequence, or scalar representation.
    ///
    /// Carries a short description of what was found, e.g. `"!!binary payload"`.
    Unsupported(String),
}

/// A key/value pair in a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The key node. Keys are normally scalars.
    pub key: Node,

    /// The value node.
    pub value: Node,
}

/// A resolved scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A string, exactly as written (quotes removed).
    String(String),

    /// An integer that fits in 64 bits.
    Integer(i64),

    /// A floating point number, kept as its source text.
    Real(String),

    /// A boolean.
    Boolean(bool),
}

impl Scalar {
    /// The canonical text of this scalar.
    ///
    /// Booleans render as `true`/`false`, integers in plain decimal, reals as
    /// they were written, strings verbatim.
    pub fn canonical_text(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Real(r) => r.clone(),
            Scalar::Boolean(b) => b.to_string(),
        }
    }

    /// The string content, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Node {
    /// Create a new node.
    pub fn new(value: Value, source_info: SourceInfo) -> Self {
        Self { value, source_info }
    }

    /// Create a string scalar node with a default location.
    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Value::Scalar(Scalar::String(s.into())), SourceInfo::default())
    }

    /// Create a mapping node from `(key, value)` pairs with default locations.
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(k, v)| Entry {
                key: Node::string(k),
                value: v,
            })
            .collect();
        Self::new(Value::Mapping(entries), SourceInfo::default())
    }

    /// Create a sequence node with a default location.
    pub fn sequence(items: impl IntoIterator<Item = Node>) -> Self {
        Self::new(
            Value::Sequence(items.into_iter().collect()),
            SourceInfo::default(),
        )
    }

    /// Human-readable name of the value's shape, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match &self.value {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Scalar(_) => "scalar",
            Value::Null => "null",
            Value::Unsupported(_) => "unsupported value",
        }
    }

    /// Check if this is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self.value, Value::Mapping(_))
    }

    /// Check if this is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self.value, Value::Sequence(_))
    }

    /// Check if this is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self.value, Value::Scalar(_))
    }

    /// Check if this is null.
    pub fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    /// Mapping entries, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[Entry]> {
        match &self.value {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Sequence elements, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.value {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The scalar, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match &self.value {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical text of a scalar node, `None` for every other shape.
    pub fn scalar_text(&self) -> Option<String> {
        self.as_scalar().map(Scalar::canonical_text)
    }

    /// Look up a mapping value by key.
    ///
    /// Keys are compared by their canonical text, so `1: x` is found with `"1"`.
    /// Returns `None` if this is not a mapping or the key is missing.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find(|entry| entry.key.scalar_text().as_deref() == Some(key))
            .map(|entry| &entry.value)
    }

    /// Number of children (sequence length or mapping entry count).
    pub fn len(&self) -> usize {
        match &self.value {
            Value::Mapping(entries) => entries.len(),
            Value::Sequence(items) => items.len(),
            _ => 0,
        }
    }

    /// Check if this node has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
