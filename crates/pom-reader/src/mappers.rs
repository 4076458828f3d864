//! Converters for the recognized descriptor sections.
//!
//! Each converter takes the document value of one section plus the dotted path it
//! was found under, and returns the typed value or the first error. A null value
//! stands for an absent section: list sections become empty, single sections
//! become `None`.

use crate::config_tree::{ConfigTreeBuilder, check_element_name};
use crate::coordinate::parse_coordinate;
use crate::error::{CoordinateError, ReaderError, Result};
use crate::options::ReaderOptions;
use indexmap::IndexMap;
use pom_document::{Entry, Node, Value};
use pom_model::{
    Build, ConfigNode, Coordinate, Dependency, DependencyManagement, Exclusion, Execution, Parent,
    Plugin, PluginManagement, Prerequisites, ReportPlugin, Reporting,
};
use tracing::{debug, trace};

const COORDINATE_KEYS: &[&str] = &[
    "id",
    "groupId",
    "artifactId",
    "version",
    "scope",
    "type",
    "classifier",
];
const DEPENDENCY_KEYS: &[&str] = &["optional", "exclusions"];
const PLUGIN_KEYS: &[&str] = &[
    "extensions",
    "executions",
    "dependencies",
    "inherited",
    "configuration",
];
const REPORT_PLUGIN_KEYS: &[&str] = &["configuration"];
const PARENT_KEYS: &[&str] = &["relativePath"];
const EXCLUSION_KEYS: &[&str] = &["groupId", "artifactId"];
const EXECUTION_KEYS: &[&str] = &["id", "phase", "goals", "inherited", "configuration"];
const BUILD_KEYS: &[&str] = &[
    "sourceDirectory",
    "testSourceDirectory",
    "outputDirectory",
    "testOutputDirectory",
    "extensions",
    "defaultGoal",
    "directory",
    "finalName",
    "pluginManagement",
    "plugins",
];
const PLUGINS_KEYS: &[&str] = &["plugins"];
const DEPENDENCIES_KEYS: &[&str] = &["dependencies"];
const PREREQUISITES_KEYS: &[&str] = &["maven"];

/// Converters for every recognized section, sharing one configuration builder.
#[derive(Debug, Clone)]
pub struct SectionMappers {
    config: ConfigTreeBuilder,
}

impl Default for SectionMappers {
    fn default() -> Self {
        Self::from_options(&ReaderOptions::default())
    }
}

impl SectionMappers {
    pub fn new(config: ConfigTreeBuilder) -> Self {
        Self { config }
    }

    pub fn from_options(options: &ReaderOptions) -> Self {
        Self::new(
            ConfigTreeBuilder::new()
                .with_naming(options.element_naming)
                .with_max_depth(options.max_depth),
        )
    }

    /// `properties`: a mapping of scalars, kept in document order.
    ///
    /// Null values become empty strings; nested values are rejected.
    pub fn properties(&self, value: &Node, path: &str) -> Result<IndexMap<String, String>> {
        let Some(entries) = mapping(value, path)? else {
            return Ok(IndexMap::new());
        };

        let mut properties = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let name = key(entry, path)?;
            check_element_name(&name, &entry.key, path)?;
            let text = match &entry.value.value {
                Value::Scalar(scalar) => scalar.canonical_text(),
                Value::Null => String::new(),
                _ => return Err(unexpected(&entry.value, &child(path, &name), "a scalar")),
            };
            properties.insert(name, text);
        }
        Ok(properties)
    }

    /// A coordinate given as a shorthand string or as a mapping.
    pub fn coordinate(&self, value: &Node, path: &str) -> Result<Coordinate> {
        match &value.value {
            Value::Scalar(scalar) => shorthand(&scalar.canonical_text(), value, path),
            Value::Mapping(entries) => {
                check_keys(entries, &[COORDINATE_KEYS], path);
                coordinate_fields(entries, value, path)
            }
            _ => Err(unexpected(value, path, "a coordinate string or mapping")),
        }
    }

    pub fn dependencies(&self, value: &Node, path: &str) -> Result<Vec<Dependency>> {
        sequence(value, path)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.dependency(item, &index(path, i)))
            .collect()
    }

    pub fn dependency(&self, value: &Node, path: &str) -> Result<Dependency> {
        trace!(path, "mapping dependency");
        let Value::Mapping(entries) = &value.value else {
            return self.coordinate(value, path).map(Dependency::new);
        };

        check_keys(entries, &[COORDINATE_KEYS, DEPENDENCY_KEYS], path);
        Ok(Dependency {
            coordinate: coordinate_fields(entries, value, path)?,
            exclusions: self.list(entries, "exclusions", path, Self::exclusions)?,
            optional: field(entries, "optional", path)?,
        })
    }

    pub fn exclusions(&self, value: &Node, path: &str) -> Result<Vec<Exclusion>> {
        sequence(value, path)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.exclusion(item, &index(path, i)))
            .collect()
    }

    /// An exclusion, as `groupId:artifactId` or a mapping of those two keys.
    pub fn exclusion(&self, value: &Node, path: &str) -> Result<Exclusion> {
        match &value.value {
            Value::Scalar(scalar) => {
                let text = scalar.canonical_text();
                let coordinate = shorthand(&text, value, path)?;
                if coordinate.version.is_some() || has_qualifiers(&coordinate) {
                    return Err(wrong_shape(&text, value, path, "groupId:artifactId"));
                }
                Ok(Exclusion {
                    group_id: coordinate.group_id,
                    artifact_id: coordinate.artifact_id,
                })
            }
            Value::Mapping(entries) => {
                check_keys(entries, &[EXCLUSION_KEYS], path);
                let artifact_id = field(entries, "artifactId", path)?
                    .ok_or_else(|| missing(value, path, "artifactId"))?;
                Ok(Exclusion {
                    group_id: field(entries, "groupId", path)?,
                    artifact_id,
                })
            }
            _ => Err(unexpected(value, path, "an exclusion string or mapping")),
        }
    }

    pub fn plugins(&self, value: &Node, path: &str) -> Result<Vec<Plugin>> {
        sequence(value, path)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.plugin(item, &index(path, i)))
            .collect()
    }

    pub fn plugin(&self, value: &Node, path: &str) -> Result<Plugin> {
        trace!(path, "mapping plugin");
        let Value::Mapping(entries) = &value.value else {
            return self.coordinate(value, path).map(Plugin::new);
        };

        check_keys(entries, &[COORDINATE_KEYS, PLUGIN_KEYS], path);
        Ok(Plugin {
            coordinate: coordinate_fields(entries, value, path)?,
            extensions: field(entries, "extensions", path)?,
            executions: self.list(entries, "executions", path, Self::executions)?,
            dependencies: self.list(entries, "dependencies", path, Self::dependencies)?,
            inherited: field(entries, "inherited", path)?,
            configuration: self.configuration(entries, path)?,
        })
    }

    pub fn executions(&self, value: &Node, path: &str) -> Result<Vec<Execution>> {
        sequence(value, path)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.execution(item, &index(path, i)))
            .collect()
    }

    /// One execution mapping. `goals` may be a sequence or a single goal.
    pub fn execution(&self, value: &Node, path: &str) -> Result<Execution> {
        let Value::Mapping(entries) = &value.value else {
            return Err(unexpected(value, path, "a mapping"));
        };

        check_keys(entries, &[EXECUTION_KEYS], path);
        let goals = match get(entries, "goals") {
            Some(node) => match &node.value {
                Value::Scalar(scalar) => vec![scalar.canonical_text()],
                _ => strings(node, &child(path, "goals"))?,
            },
            None => Vec::new(),
        };
        Ok(Execution {
            id: field(entries, "id", path)?,
            phase: field(entries, "phase", path)?,
            goals,
            inherited: field(entries, "inherited", path)?,
            configuration: self.configuration(entries, path)?,
        })
    }

    /// `build.extensions`: a list of coordinates.
    pub fn extensions(&self, value: &Node, path: &str) -> Result<Vec<Coordinate>> {
        sequence(value, path)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.coordinate(item, &index(path, i)))
            .collect()
    }

    pub fn build(&self, value: &Node, path: &str) -> Result<Option<Build>> {
        let Some(entries) = mapping(value, path)? else {
            return Ok(None);
        };

        check_keys(entries, &[BUILD_KEYS], path);
        let plugin_management = match get(entries, "pluginManagement") {
            Some(node) => self.plugin_management(node, &child(path, "pluginManagement"))?,
            None => None,
        };
        Ok(Some(Build {
            source_directory: field(entries, "sourceDirectory", path)?,
            test_source_directory: field(entries, "testSourceDirectory", path)?,
            output_directory: field(entries, "outputDirectory", path)?,
            test_output_directory: field(entries, "testOutputDirectory", path)?,
            extensions: self.list(entries, "extensions", path, Self::extensions)?,
            default_goal: field(entries, "defaultGoal", path)?,
            directory: field(entries, "directory", path)?,
            final_name: field(entries, "finalName", path)?,
            plugin_management,
            plugins: self.list(entries, "plugins", path, Self::plugins)?,
        }))
    }

    pub fn plugin_management(&self, value: &Node, path: &str) -> Result<Option<PluginManagement>> {
        let Some(entries) = mapping(value, path)? else {
            return Ok(None);
        };

        check_keys(entries, &[PLUGINS_KEYS], path);
        Ok(Some(PluginManagement {
            plugins: self.list(entries, "plugins", path, Self::plugins)?,
        }))
    }

    pub fn prerequisites(&self, value: &Node, path: &str) -> Result<Option<Prerequisites>> {
        let Some(entries) = mapping(value, path)? else {
            return Ok(None);
        };

        check_keys(entries, &[PREREQUISITES_KEYS], path);
        Ok(Some(Prerequisites {
            maven: field(entries, "maven", path)?,
        }))
    }

    pub fn reporting(&self, value: &Node, path: &str) -> Result<Option<Reporting>> {
        let Some(entries) = mapping(value, path)? else {
            return Ok(None);
        };

        check_keys(entries, &[PLUGINS_KEYS], path);
        Ok(Some(Reporting {
            plugins: self.list(entries, "plugins", path, Self::report_plugins)?,
        }))
    }

    pub fn report_plugins(&self, value: &Node, path: &str) -> Result<Vec<ReportPlugin>> {
        sequence(value, path)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.report_plugin(item, &index(path, i)))
            .collect()
    }

    /// A report plugin: coordinate plus configuration, never executions.
    pub fn report_plugin(&self, value: &Node, path: &str) -> Result<ReportPlugin> {
        let Value::Mapping(entries) = &value.value else {
            let coordinate = self.coordinate(value, path)?;
            return Ok(ReportPlugin {
                coordinate,
                configuration: None,
            });
        };

        check_keys(entries, &[COORDINATE_KEYS, REPORT_PLUGIN_KEYS], path);
        Ok(ReportPlugin {
            coordinate: coordinate_fields(entries, value, path)?,
            configuration: self.configuration(entries, path)?,
        })
    }

    /// `parent`, as `groupId:artifactId:version` or a mapping.
    ///
    /// Scope, type and classifier have no meaning for a parent and are rejected.
    pub fn parent(&self, value: &Node, path: &str) -> Result<Option<Parent>> {
        let (coordinate, relative_path) = match &value.value {
            Value::Null => return Ok(None),
            Value::Scalar(scalar) => (shorthand(&scalar.canonical_text(), value, path)?, None),
            Value::Mapping(entries) => {
                check_keys(entries, &[COORDINATE_KEYS, PARENT_KEYS], path);
                (
                    coordinate_fields(entries, value, path)?,
                    field(entries, "relativePath", path)?,
                )
            }
            _ => return Err(unexpected(value, path, "a coordinate string or mapping")),
        };

        if has_qualifiers(&coordinate) {
            let text = value
                .scalar_text()
                .unwrap_or_else(|| coordinate.artifact_id.clone());
            return Err(wrong_shape(&text, value, path, "groupId:artifactId:version"));
        }
        Ok(Some(Parent {
            group_id: coordinate.group_id,
            artifact_id: coordinate.artifact_id,
            version: coordinate.version,
            relative_path,
        }))
    }

    pub fn dependency_management(
        &self,
        value: &Node,
        path: &str,
    ) -> Result<Option<DependencyManagement>> {
        let Some(entries) = mapping(value, path)? else {
            return Ok(None);
        };

        check_keys(entries, &[DEPENDENCIES_KEYS], path);
        Ok(Some(DependencyManagement {
            dependencies: self.list(entries, "dependencies", path, Self::dependencies)?,
        }))
    }

    /// `modules`: a list of module directory names.
    pub fn modules(&self, value: &Node, path: &str) -> Result<Vec<String>> {
        strings(value, path)
    }

    fn configuration(&self, entries: &[Entry], path: &str) -> Result<Option<ConfigNode>> {
        match get(entries, "configuration") {
            Some(node) if !node.is_null() => self
                .config
                .build_at("configuration", node, &child(path, "configuration"))
                .map(Some),
            _ => Ok(None),
        }
    }

    fn list<T>(
        &self,
        entries: &[Entry],
        name: &str,
        path: &str,
        convert: fn(&Self, &Node, &str) -> Result<Vec<T>>,
    ) -> Result<Vec<T>> {
        match get(entries, name) {
            Some(node) => convert(self, node, &child(path, name)),
            None => Ok(Vec::new()),
        }
    }
}

/// Log keys no converter consumes. Non-scalar keys can never match a section, so
/// they are ignored the same way.
pub(crate) fn check_keys(entries: &[Entry], known: &[&[&str]], path: &str) {
    for entry in entries {
        match entry.key.scalar_text() {
            Some(name) if known.iter().any(|keys| keys.contains(&name.as_str())) => {}
            Some(name) => debug!(path, key = %name, "ignoring unrecognized key"),
            None => debug!(path, kind = entry.key.kind_name(), "ignoring non-scalar key"),
        }
    }
}

pub(crate) fn get<'a>(entries: &'a [Entry], name: &str) -> Option<&'a Node> {
    entries
        .iter()
        .find(|entry| entry.key.scalar_text().as_deref() == Some(name))
        .map(|entry| &entry.value)
}

/// Optional scalar field of a mapping.
pub(crate) fn field(entries: &[Entry], name: &str, path: &str) -> Result<Option<String>> {
    match get(entries, name) {
        Some(node) => scalar(node, &child(path, name)),
        None => Ok(None),
    }
}

pub(crate) fn mapping<'a>(value: &'a Node, path: &str) -> Result<Option<&'a [Entry]>> {
    match &value.value {
        Value::Mapping(entries) => Ok(Some(entries)),
        Value::Null => Ok(None),
        _ => Err(unexpected(value, path, "a mapping")),
    }
}

fn sequence<'a>(value: &'a Node, path: &str) -> Result<&'a [Node]> {
    match &value.value {
        Value::Sequence(items) => Ok(items),
        Value::Null => Ok(&[]),
        _ => Err(unexpected(value, path, "a sequence")),
    }
}

fn scalar(value: &Node, path: &str) -> Result<Option<String>> {
    match &value.value {
        Value::Scalar(scalar) => Ok(Some(scalar.canonical_text())),
        Value::Null => Ok(None),
        _ => Err(unexpected(value, path, "a scalar")),
    }
}

fn strings(value: &Node, path: &str) -> Result<Vec<String>> {
    sequence(value, path)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item_path = index(path, i);
            scalar(item, &item_path)?.ok_or_else(|| unexpected(item, &item_path, "a scalar"))
        })
        .collect()
}

fn key(entry: &Entry, path: &str) -> Result<String> {
    entry
        .key
        .scalar_text()
        .ok_or_else(|| ReaderError::MalformedDocument {
            path: path.to_string(),
            message: format!("keys must be scalars, found a {}", entry.key.kind_name()),
            location: entry.key.source_info.clone(),
        })
}

/// Coordinate fields of a mapping. An `id` shorthand supplies defaults that the
/// explicit keys override.
fn coordinate_fields(entries: &[Entry], value: &Node, path: &str) -> Result<Coordinate> {
    let mut coordinate = match get(entries, "id") {
        Some(id) => {
            let id_path = child(path, "id");
            match scalar(id, &id_path)? {
                Some(text) => shorthand(&text, id, &id_path)?,
                None => Coordinate::default(),
            }
        }
        None => Coordinate::default(),
    };

    if let Some(group_id) = field(entries, "groupId", path)? {
        coordinate.group_id = Some(group_id);
    }
    if let Some(artifact_id) = field(entries, "artifactId", path)? {
        coordinate.artifact_id = artifact_id;
    }
    if let Some(version) = field(entries, "version", path)? {
        coordinate.version = Some(version);
    }
    if let Some(scope) = field(entries, "scope", path)? {
        coordinate.scope = Some(scope);
    }
    if let Some(artifact_type) = field(entries, "type", path)? {
        coordinate.artifact_type = Some(artifact_type);
    }
    if let Some(classifier) = field(entries, "classifier", path)? {
        coordinate.classifier = Some(classifier);
    }

    if coordinate.artifact_id.is_empty() {
        return Err(missing(value, path, "artifactId"));
    }
    Ok(coordinate)
}

fn shorthand(text: &str, value: &Node, path: &str) -> Result<Coordinate> {
    parse_coordinate(text).map_err(|source| ReaderError::MalformedCoordinate {
        path: path.to_string(),
        source,
        location: value.source_info.clone(),
    })
}

fn has_qualifiers(coordinate: &Coordinate) -> bool {
    coordinate.scope.is_some() || coordinate.artifact_type.is_some() || coordinate.classifier.is_some()
}

fn child(path: &str, name: &str) -> String {
    format!("{}.{}", path, name)
}

fn index(path: &str, i: usize) -> String {
    format!("{}[{}]", path, i)
}

pub(crate) fn unexpected(value: &Node, path: &str, expected: &str) -> ReaderError {
    match &value.value {
        Value::Unsupported(kind) => ReaderError::UnsupportedValueType {
            path: path.to_string(),
            kind: kind.clone(),
            location: value.source_info.clone(),
        },
        _ => ReaderError::MalformedDocument {
            path: path.to_string(),
            message: format!("expected {}, found a {}", expected, value.kind_name()),
            location: value.source_info.clone(),
        },
    }
}

fn missing(value: &Node, path: &str, name: &str) -> ReaderError {
    ReaderError::MalformedDocument {
        path: path.to_string(),
        message: format!("missing required field '{}'", name),
        location: value.source_info.clone(),
    }
}

fn wrong_shape(text: &str, value: &Node, path: &str, expected: &'static str) -> ReaderError {
    ReaderError::MalformedCoordinate {
        path: path.to_string(),
        source: CoordinateError::UnexpectedShape {
            value: text.to_string(),
            expected,
        },
        location: value.source_info.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pom_document::parse;

    fn mappers() -> SectionMappers {
        SectionMappers::from_options(&ReaderOptions::default())
    }

    fn doc(yaml: &str) -> Node {
        parse(yaml).unwrap()
    }

    #[test]
    fn test_properties_keep_order_and_canonicalize() {
        let value = doc("zeta: 1\nalpha: true\nempty:\nname: x");
        let properties = mappers().properties(&value, "project.properties").unwrap();

        let pairs: Vec<(&str, &str)> = properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("zeta", "1"), ("alpha", "true"), ("empty", ""), ("name", "x")]
        );
    }

    #[test]
    fn test_properties_reject_nested_values() {
        let value = doc("outer:\n  inner: 1");
        let err = mappers().properties(&value, "project.properties").unwrap_err();
        assert!(matches!(
            err,
            ReaderError::MalformedDocument { ref path, .. } if path == "project.properties.outer"
        ));

        let err = mappers()
            .properties(&doc("- a\n- b"), "project.properties")
            .unwrap_err();
        assert!(err.to_string().contains("expected a mapping, found a sequence"));
    }

    #[test]
    fn test_properties_reject_invalid_names() {
        for yaml in ["\"my key\": 1", "1abc: x", "\"a<b\": x"] {
            let err = mappers()
                .properties(&doc(yaml), "project.properties")
                .unwrap_err();
            assert!(matches!(
                err,
                ReaderError::MalformedDocument { ref path, ref message, .. }
                    if path == "project.properties"
                        && message.ends_with("is not a valid XML element name")
            ));
        }

        let properties = mappers()
            .properties(&doc("maven.compiler.release: 17"), "project.properties")
            .unwrap();
        assert_eq!(properties["maven.compiler.release"], "17");
    }

    #[test]
    fn test_dependency_forms() {
        let value = doc(
            r#"
- org.apache.maven:maven-core:3.9.0
- groupId: org.junit.jupiter
  artifactId: junit-jupiter-api
  version: 5.9.3
  scope: test
- id: org.slf4j:slf4j-api:2.0.9
  optional: true
  exclusions:
    - org.slf4j:slf4j-simple
    - groupId: "*"
      artifactId: "*"
"#,
        );
        let deps = mappers().dependencies(&value, "project.dependencies").unwrap();

        assert_eq!(
            deps[0],
            Dependency::new(Coordinate::new(
                Some("org.apache.maven"),
                "maven-core",
                Some("3.9.0")
            ))
        );
        assert_eq!(
            deps[1].coordinate,
            Coordinate::new(Some("org.junit.jupiter"), "junit-jupiter-api", Some("5.9.3"))
                .with_scope("test")
        );
        assert_eq!(deps[2].optional.as_deref(), Some("true"));
        assert_eq!(
            deps[2].exclusions,
            vec![
                Exclusion {
                    group_id: Some("org.slf4j".into()),
                    artifact_id: "slf4j-simple".into()
                },
                Exclusion {
                    group_id: Some("*".into()),
                    artifact_id: "*".into()
                },
            ]
        );
    }

    #[test]
    fn test_explicit_keys_override_id() {
        let value = doc("version: 2.0\nid: org.example:demo:1.0\nscope: test");
        let dep = mappers().dependency(&value, "project.dependencies[0]").unwrap();

        assert_eq!(
            dep.coordinate,
            Coordinate::new(Some("org.example"), "demo", Some("2.0")).with_scope("test")
        );
    }

    #[test]
    fn test_missing_artifact_id() {
        let value = doc("groupId: org.example\nversion: 1.0");
        let err = mappers().dependency(&value, "project.dependencies[3]").unwrap_err();

        assert_eq!(err.path(), "project.dependencies[3]");
        assert!(err.to_string().contains("missing required field 'artifactId'"));
    }

    #[test]
    fn test_bad_shorthand_reports_element_path() {
        let value = doc("- a:b:c\n- just-one-segment");
        let err = mappers().dependencies(&value, "project.dependencies").unwrap_err();

        match err {
            ReaderError::MalformedCoordinate {
                path,
                source,
                location,
            } => {
                assert_eq!(path, "project.dependencies[1]");
                assert_eq!(
                    source,
                    CoordinateError::SegmentCount {
                        value: "just-one-segment".into(),
                        count: 1
                    }
                );
                assert_eq!(location.line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_dependencies_must_be_a_sequence() {
        let err = mappers()
            .dependencies(&doc("groupId: g"), "project.dependencies")
            .unwrap_err();
        assert!(matches!(err, ReaderError::MalformedDocument { .. }));

        let err = mappers()
            .dependencies(&doc("- [a, b]"), "project.dependencies")
            .unwrap_err();
        assert_eq!(err.path(), "project.dependencies[0]");
    }

    #[test]
    fn test_exclusion_shorthand_takes_two_segments() {
        let err = mappers()
            .exclusion(&Node::string("org.slf4j:slf4j-simple:1.0"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            ReaderError::MalformedCoordinate {
                source: CoordinateError::UnexpectedShape { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_plugin_with_executions_and_configuration() {
        let value = doc(
            r#"
groupId: org.codehaus.modello
artifactId: modello-maven-plugin
version: 2.1.1
inherited: false
executions:
  - id: generate
    phase: generate-sources
    goals: velocity
  - id: docs
    goals: [xdoc, xsd]
    configuration:
      version: 4.2.0
configuration:
  params:
    packageModelV4: org.apache.maven.api.model
"#,
        );
        let plugin = mappers().plugin(&value, "project.build.plugins[0]").unwrap();

        assert_eq!(plugin.coordinate.artifact_id, "modello-maven-plugin");
        assert_eq!(plugin.inherited.as_deref(), Some("false"));
        assert_eq!(plugin.executions.len(), 2);
        assert_eq!(plugin.executions[0].goals, vec!["velocity"]);
        assert_eq!(plugin.executions[0].phase.as_deref(), Some("generate-sources"));
        assert_eq!(plugin.executions[1].goals, vec!["xdoc", "xsd"]);
        assert_eq!(
            plugin.executions[1].configuration,
            Some(ConfigNode::container(
                "configuration",
                vec![ConfigNode::leaf("version", "4.2.0")]
            ))
        );
        assert_eq!(
            plugin.configuration,
            Some(ConfigNode::container(
                "configuration",
                vec![ConfigNode::container(
                    "params",
                    vec![ConfigNode::leaf("packageModelV4", "org.apache.maven.api.model")]
                )]
            ))
        );
    }

    #[test]
    fn test_configuration_errors_carry_full_path() {
        let value = doc("artifactId: p\nconfiguration:\n  data: !!binary AAAA");
        let err = mappers().plugin(&value, "project.build.plugins[1]").unwrap_err();

        assert!(matches!(err, ReaderError::UnsupportedValueType { .. }));
        assert_eq!(err.path(), "project.build.plugins[1].configuration.data");
    }

    #[test]
    fn test_build_section() {
        let value = doc(
            r#"
finalName: app
defaultGoal: verify
extensions:
  - org.apache.maven.extensions:maven-build-cache-extension:1.0.0
pluginManagement:
  plugins:
    - org.apache.maven.plugins:maven-compiler-plugin:3.11.0
plugins:
  - artifactId: maven-javadoc-plugin
"#,
        );
        let build = mappers().build(&value, "project.build").unwrap().unwrap();

        assert_eq!(build.final_name.as_deref(), Some("app"));
        assert_eq!(build.default_goal.as_deref(), Some("verify"));
        assert_eq!(build.extensions.len(), 1);
        assert_eq!(build.plugin_management.unwrap().plugins.len(), 1);
        assert_eq!(build.plugins[0].coordinate.group_id, None);
        assert_eq!(build.plugins[0].coordinate.artifact_id, "maven-javadoc-plugin");

        assert_eq!(mappers().build(&doc("~"), "project.build").unwrap(), None);
    }

    #[test]
    fn test_parent_forms() {
        let shorthand = mappers()
            .parent(&Node::string("org.apache:apache:28"), "project.parent")
            .unwrap();
        assert_eq!(shorthand, Some(Parent::new("org.apache", "apache", "28")));

        let mapping = mappers()
            .parent(
                &doc("id: org.apache:apache:28\nrelativePath: ../pom.xml"),
                "project.parent",
            )
            .unwrap()
            .unwrap();
        assert_eq!(mapping.version.as_deref(), Some("28"));
        assert_eq!(mapping.relative_path.as_deref(), Some("../pom.xml"));
    }

    #[test]
    fn test_parent_rejects_qualifiers() {
        let err = mappers()
            .parent(&Node::string("org.apache:apache:test:28"), "project.parent")
            .unwrap_err();
        assert!(matches!(
            err,
            ReaderError::MalformedCoordinate {
                source: CoordinateError::UnexpectedShape { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_reporting_and_prerequisites() {
        let reporting = mappers()
            .reporting(
                &doc(
                    "plugins:\n  - id: org.apache.maven.plugins:maven-surefire-report-plugin:3.1.2\n    configuration:\n      showSuccess: true",
                ),
                "project.reporting",
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            reporting.plugins[0].configuration,
            Some(ConfigNode::container(
                "configuration",
                vec![ConfigNode::leaf("showSuccess", "true")]
            ))
        );

        let prerequisites = mappers()
            .prerequisites(&doc("maven: 3.3.1"), "project.prerequisites")
            .unwrap();
        assert_eq!(
            prerequisites,
            Some(Prerequisites {
                maven: Some("3.3.1".into())
            })
        );
    }

    #[test]
    fn test_modules_are_scalars() {
        let modules = mappers().modules(&doc("- core\n- cli"), "project.modules").unwrap();
        assert_eq!(modules, vec!["core", "cli"]);

        let err = mappers()
            .modules(&doc("- core\n- {name: cli}"), "project.modules")
            .unwrap_err();
        assert_eq!(err.path(), "project.modules[1]");
    }
}
