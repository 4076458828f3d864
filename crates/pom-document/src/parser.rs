//! YAML loader that builds [`Node`] trees from yaml-rust2 events.

use crate::{Entry, Error, Node, Result, Scalar, SourceInfo, Value};
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Prefix the YAML core schema tags (`!!str`, `!!binary`, ...) resolve to.
const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Upper bound on nodes materialized by alias expansion across one document.
pub const MAX_ALIAS_NODES: usize = 10_000;

/// Parse YAML from a string, producing a [`Node`] tree.
///
/// Only the first document of a multi-document stream is read.
///
/// # Example
///
/// ```rust
/// use pom_document::parse;
///
/// let doc = parse("modelVersion: 4.0.0").unwrap();
/// assert!(doc.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is invalid or contains no document.
pub fn parse(content: &str) -> Result<Node> {
    parse_impl(content, None)
}

/// Parse YAML from a string with an associated filename.
///
/// The filename is included in every node's [`SourceInfo`].
///
/// ```rust
/// use pom_document::parse_file;
///
/// let doc = parse_file("name: demo", "pom.yaml").unwrap();
/// assert_eq!(doc.source_info.file.as_deref(), Some("pom.yaml"));
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is invalid or contains no document.
pub fn parse_file(content: &str, filename: &str) -> Result<Node> {
    parse_impl(content, Some(filename))
}

fn parse_impl(content: &str, filename: Option<&str>) -> Result<Node> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = DocumentBuilder::new(filename);

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(|err| with_file(Error::from(err), filename))?;

    builder.result()
}

fn with_file(err: Error, filename: Option<&str>) -> Error {
    match (err, filename) {
        (Error::ParseError { message, location }, Some(file)) => Error::ParseError {
            message,
            location: location.map(|loc| loc.with_file(file)),
        },
        (err, _) => err,
    }
}

/// Event receiver that assembles the node tree.
struct DocumentBuilder {
    filename: Option<String>,

    /// Containers still being filled, innermost last.
    stack: Vec<BuildNode>,

    /// Anchored nodes, by yaml-rust2 anchor id.
    anchors: HashMap<usize, Node>,

    /// Nodes copied in by aliases so far.
    expanded: usize,

    root: Option<Node>,

    /// First structural problem seen; events keep flowing after it but are ignored.
    error: Option<Error>,
}

enum BuildNode {
    Sequence {
        start_marker: Marker,
        anchor_id: usize,
        items: Vec<Node>,
    },
    Mapping {
        start_marker: Marker,
        anchor_id: usize,
        entries: Vec<(Node, Option<Node>)>,
    },
}

impl DocumentBuilder {
    fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(str::to_string),
            stack: Vec::new(),
            anchors: HashMap::new(),
            expanded: 0,
            root: None,
            error: None,
        }
    }

    fn result(self) -> Result<Node> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.root.ok_or(Error::EmptyDocument)
    }

    fn fail(&mut self, message: impl Into<String>, marker: &Marker) {
        if self.error.is_none() {
            self.error = Some(Error::InvalidStructure {
                message: message.into(),
                location: Some(self.make_source_info(marker, 0)),
            });
        }
    }

    fn make_source_info(&self, marker: &Marker, len: usize) -> SourceInfo {
        let info = SourceInfo::from_marker(marker, len);
        match &self.filename {
            Some(filename) => info.with_file(filename.clone()),
            None => info,
        }
    }

    fn remember(&mut self, anchor_id: usize, node: &Node) {
        if anchor_id != 0 {
            self.anchors.insert(anchor_id, node.clone());
        }
    }

    fn push_complete(&mut self, node: Node) {
        match self.stack.last_mut() {
            None => self.root = Some(node),
            Some(BuildNode::Sequence { items, .. }) => items.push(node),
            Some(BuildNode::Mapping { entries, .. }) => match entries.last_mut() {
                Some((_, value @ None)) => *value = Some(node),
                _ => entries.push((node, None)),
            },
        }
    }

    fn finish_sequence(&mut self, marker: &Marker) {
        match self.stack.pop() {
            Some(BuildNode::Sequence {
                start_marker,
                anchor_id,
                items,
            }) => {
                let len = marker.index().saturating_sub(start_marker.index());
                let node = Node::new(
                    Value::Sequence(items),
                    self.make_source_info(&start_marker, len),
                );
                self.remember(anchor_id, &node);
                self.push_complete(node);
            }
            _ => self.fail("sequence end without matching start", marker),
        }
    }

    fn finish_mapping(&mut self, marker: &Marker) {
        match self.stack.pop() {
            Some(BuildNode::Mapping {
                start_marker,
                anchor_id,
                entries,
            }) => {
                let mut complete = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    match value {
                        Some(value) => complete.push(Entry { key, value }),
                        None => {
                            self.fail("mapping key without a value", marker);
                            return;
                        }
                    }
                }
                let len = marker.index().saturating_sub(start_marker.index());
                let node = Node::new(
                    Value::Mapping(complete),
                    self.make_source_info(&start_marker, len),
                );
                self.remember(anchor_id, &node);
                self.push_complete(node);
            }
            _ => self.fail("mapping end without matching start", marker),
        }
    }
}

impl MarkedEventReceiver for DocumentBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.error.is_some() {
            return;
        }

        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(text, style, anchor_id, tag) => {
                let core_tag = tag.as_ref().and_then(|t| {
                    if t.handle == CORE_TAG_PREFIX || t.handle == "!!" {
                        Some(t.suffix.clone())
                    } else {
                        None
                    }
                });
                let plain = matches!(style, TScalarStyle::Plain);
                let value = resolve_scalar(&text, plain, core_tag.as_deref());
                let node = Node::new(value, self.make_source_info(&marker, text.len()));
                self.remember(anchor_id, &node);
                self.push_complete(node);
            }

            Event::SequenceStart(anchor_id, _tag) => {
                self.stack.push(BuildNode::Sequence {
                    start_marker: marker,
                    anchor_id,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => self.finish_sequence(&marker),

            Event::MappingStart(anchor_id, _tag) => {
                self.stack.push(BuildNode::Mapping {
                    start_marker: marker,
                    anchor_id,
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => self.finish_mapping(&marker),

            Event::Alias(anchor_id) => {
                let source_info = self.make_source_info(&marker, 0);
                let budget = MAX_ALIAS_NODES - self.expanded;
                let expansion = self
                    .anchors
                    .get(&anchor_id)
                    .map(|anchored| {
                        count_nodes(&anchored.value, budget)
                            .map(|count| (count, anchored.value.clone()))
                    });
                let node = match expansion {
                    Some(Some((count, value))) => {
                        self.expanded += count;
                        Node::new(value, source_info)
                    }
                    Some(None) => {
                        self.fail(
                            format!("alias expansion exceeds {} nodes", MAX_ALIAS_NODES),
                            &marker,
                        );
                        return;
                    }
                    None => Node::new(Value::Unsupported("unresolved alias".into()), source_info),
                };
                self.push_complete(node);
            }
        }
    }
}

/// Number of nodes in `value`, or `None` once it passes `budget`.
fn count_nodes(value: &Value, budget: usize) -> Option<usize> {
    let mut count = 0usize;
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        count += 1;
        if count > budget {
            return None;
        }
        match value {
            Value::Sequence(items) => pending.extend(items.iter().map(|item| &item.value)),
            Value::Mapping(entries) => {
                for entry in entries {
                    pending.push(&entry.key.value);
                    pending.push(&entry.value.value);
                }
            }
            Value::Scalar(_) | Value::Null | Value::Unsupported(_) => {}
        }
    }
    Some(count)
}

/// Resolve a scalar's text into a [`Value`].
///
/// Quoted and block scalars are always strings. Plain scalars go through YAML 1.1
/// style inference: integers, floats, booleans (`yes`/`no`/`on`/`off` included)
/// and null. A core schema tag overrides inference.
fn resolve_scalar(text: &str, plain: bool, core_tag: Option<&str>) -> Value {
    match core_tag {
        Some("str") => return Value::Scalar(Scalar::String(text.to_string())),
        Some("binary") => return Value::Unsupported("!!binary payload".into()),
        Some("null") => return Value::Null,
        Some("int") | Some("float") | Some("bool") => return infer_scalar(text),
        _ => {}
    }

    if plain {
        infer_scalar(text)
    } else {
        Value::Scalar(Scalar::String(text.to_string()))
    }
}

fn infer_scalar(value: &str) -> Value {
    if let Ok(i) = value.parse::<i64>() {
        return Value::Scalar(Scalar::Integer(i));
    }

    if looks_like_float(value) && value.parse::<f64>().is_ok() {
        return Value::Scalar(Scalar::Real(value.to_string()));
    }

    match value {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" => {
            Value::Scalar(Scalar::Boolean(true))
        }
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" => {
            Value::Scalar(Scalar::Boolean(false))
        }
        "null" | "Null" | "NULL" | "~" | "" => Value::Null,
        _ => Value::Scalar(Scalar::String(value.to_string())),
    }
}

/// Rust accepts `inf`, `NaN` and `infinity` as floats; YAML spells those `.inf`
/// and `.nan`, so only digit-bearing text is treated as a number here.
fn looks_like_float(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar() {
        let doc = parse("hello").unwrap();
        assert_eq!(doc.value, Value::Scalar(Scalar::String("hello".into())));
    }

    #[test]
    fn test_plain_scalar_inference() {
        let doc = parse("a: 17\nb: 3.9\nc: true\nd: no\ne: ~\nf: 1.0.0-SNAPSHOT\ng:").unwrap();
        assert_eq!(doc.get("a").unwrap().value, Value::Scalar(Scalar::Integer(17)));
        assert_eq!(
            doc.get("b").unwrap().value,
            Value::Scalar(Scalar::Real("3.9".into()))
        );
        assert_eq!(doc.get("c").unwrap().value, Value::Scalar(Scalar::Boolean(true)));
        assert_eq!(doc.get("d").unwrap().value, Value::Scalar(Scalar::Boolean(false)));
        assert!(doc.get("e").unwrap().is_null());
        assert_eq!(
            doc.get("f").unwrap().scalar_text().as_deref(),
            Some("1.0.0-SNAPSHOT")
        );
        assert!(doc.get("g").unwrap().is_null());
    }

    #[test]
    fn test_quoted_scalars_stay_strings() {
        let doc = parse("a: \"17\"\nb: 'true'\nc: \"\"").unwrap();
        assert_eq!(
            doc.get("a").unwrap().value,
            Value::Scalar(Scalar::String("17".into()))
        );
        assert_eq!(
            doc.get("b").unwrap().value,
            Value::Scalar(Scalar::String("true".into()))
        );
        assert_eq!(
            doc.get("c").unwrap().value,
            Value::Scalar(Scalar::String(String::new()))
        );
    }

    #[test]
    fn test_word_floats_stay_strings() {
        let doc = parse("a: infinity\nb: NaN").unwrap();
        assert_eq!(doc.get("a").unwrap().scalar_text().as_deref(), Some("infinity"));
        assert!(doc.get("b").unwrap().as_scalar().unwrap().as_str().is_some());
    }

    #[test]
    fn test_core_tags() {
        let doc = parse("a: !!str 42\nb: !!binary R0lGODlh").unwrap();
        assert_eq!(
            doc.get("a").unwrap().value,
            Value::Scalar(Scalar::String("42".into()))
        );
        assert!(matches!(doc.get("b").unwrap().value, Value::Unsupported(_)));
    }

    #[test]
    fn test_parse_sequence() {
        let doc = parse("[1, 2, 3]").unwrap();
        let items = doc.as_sequence().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].value, Value::Scalar(Scalar::Integer(3)));
    }

    #[test]
    fn test_nested_structure_keeps_order() {
        let doc = parse(
            r#"
build:
  plugins:
    - artifactId: b
    - artifactId: a
  extensions: []
"#,
        )
        .unwrap();

        let build = doc.get("build").unwrap();
        let keys: Vec<String> = build
            .as_mapping()
            .unwrap()
            .iter()
            .map(|e| e.key.scalar_text().unwrap())
            .collect();
        assert_eq!(keys, vec!["plugins", "extensions"]);

        let plugins = build.get("plugins").unwrap().as_sequence().unwrap();
        assert_eq!(
            plugins[0].get("artifactId").unwrap().scalar_text().as_deref(),
            Some("b")
        );
        assert!(build.get("extensions").unwrap().is_empty());
    }

    #[test]
    fn test_aliases_are_expanded() {
        let doc = parse(
            r#"
base: &cfg
  source: 17
copy: *cfg
"#,
        )
        .unwrap();

        let base = doc.get("base").unwrap();
        let copy = doc.get("copy").unwrap();
        assert_eq!(base.value, copy.value);
        assert_ne!(base.source_info.line, copy.source_info.line);
    }

    #[test]
    fn test_alias_expansion_is_bounded() {
        let mut yaml = String::from("a: &a [x, x, x, x, x, x, x, x, x, x]\n");
        let levels = ["b", "c", "d", "e", "f", "g"];
        let mut previous = "a";
        for name in levels {
            let aliases = vec![format!("*{}", previous); 10].join(", ");
            yaml.push_str(&format!("{}: &{} [{}]\n", name, name, aliases));
            previous = name;
        }

        match parse(&yaml).unwrap_err() {
            Error::InvalidStructure { message, location } => {
                assert!(message.contains("alias expansion exceeds"));
                assert!(location.unwrap().line > 1);
            }
            other => panic!("expected structure error, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_small_aliases_are_allowed() {
        let mut yaml = String::from("base: &base {source: 17, target: 17}\nitems:\n");
        for _ in 0..100 {
            yaml.push_str("  - *base\n");
        }

        let doc = parse(&yaml).unwrap();
        let items = doc.get("items").unwrap().as_sequence().unwrap();
        assert_eq!(items.len(), 100);
        assert_eq!(items[99].value, doc.get("base").unwrap().value);
    }

    #[test]
    fn test_source_info_tracking() {
        let doc = parse_file("groupId: org.example\nartifactId: demo", "pom.yaml").unwrap();
        let artifact = doc.get("artifactId").unwrap();
        assert_eq!(artifact.source_info.line, 2);
        assert_eq!(artifact.source_info.file.as_deref(), Some("pom.yaml"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(Error::EmptyDocument));
    }

    #[test]
    fn test_syntax_error_carries_file() {
        let err = parse_file("a: [1, 2", "broken.yaml").unwrap_err();
        match err {
            Error::ParseError { location, .. } => {
                assert_eq!(location.unwrap().file.as_deref(), Some("broken.yaml"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
