//! Top-level document to descriptor transformation.

use crate::error::{ModelParseError, ReaderError, Result};
use crate::mappers::{SectionMappers, check_keys, field, get, unexpected};
use crate::options::ReaderOptions;
use pom_document::{Entry, Node, Value};
use pom_model::{DEFAULT_MODEL_VERSION, ProjectDescriptor};
use tracing::debug;

/// Path under which every field of the descriptor is reported.
pub const ROOT_PATH: &str = "project";

/// Top-level keys with a meaning in the descriptor. Anything else is ignored.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "modelVersion",
    "id",
    "parent",
    "groupId",
    "artifactId",
    "version",
    "packaging",
    "name",
    "description",
    "url",
    "prerequisites",
    "modules",
    "properties",
    "dependencyManagement",
    "dependencies",
    "build",
    "reporting",
];

/// Turns a loaded document into a [`ProjectDescriptor`].
///
/// The transformer holds no state between calls; one instance may be reused
/// for any number of documents.
#[derive(Debug, Clone)]
pub struct ModelTransformer {
    mappers: SectionMappers,
}

impl Default for ModelTransformer {
    fn default() -> Self {
        Self::new(ReaderOptions::default())
    }
}

impl ModelTransformer {
    pub fn new(options: ReaderOptions) -> Self {
        Self {
            mappers: SectionMappers::from_options(&options),
        }
    }

    /// Transform a document whose root is a mapping.
    ///
    /// Either the whole descriptor is returned or the first error; nothing is
    /// built partially.
    pub fn transform(&self, document: &Node) -> Result<ProjectDescriptor> {
        let Value::Mapping(entries) = &document.value else {
            return Err(ReaderError::MalformedDocument {
                path: ROOT_PATH.to_string(),
                message: format!(
                    "the document root must be a mapping, found a {}",
                    document.kind_name()
                ),
                location: document.source_info.clone(),
            });
        };

        debug!(keys = entries.len(), "transforming project descriptor");
        check_keys(entries, &[RECOGNIZED_KEYS], ROOT_PATH);

        let id = match get(entries, "id") {
            Some(node) if node.is_scalar() => {
                Some(self.mappers.coordinate(node, &format!("{}.id", ROOT_PATH))?)
            }
            Some(node) if !node.is_null() => {
                return Err(unexpected(
                    node,
                    &format!("{}.id", ROOT_PATH),
                    "a coordinate string",
                ));
            }
            _ => None,
        };

        let group_id = match field(entries, "groupId", ROOT_PATH)? {
            Some(group_id) => Some(group_id),
            None => id.as_ref().and_then(|id| id.group_id.clone()),
        };
        let artifact_id = match field(entries, "artifactId", ROOT_PATH)? {
            Some(artifact_id) => Some(artifact_id),
            None => id.as_ref().map(|id| id.artifact_id.clone()),
        };
        let version = match field(entries, "version", ROOT_PATH)? {
            Some(version) => Some(version),
            None => id.as_ref().and_then(|id| id.version.clone()),
        };

        let m = &self.mappers;
        Ok(ProjectDescriptor {
            model_version: field(entries, "modelVersion", ROOT_PATH)?
                .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string()),
            parent: self.section(entries, "parent", |path, node| m.parent(node, path))?,
            group_id,
            artifact_id,
            version,
            packaging: field(entries, "packaging", ROOT_PATH)?,
            name: field(entries, "name", ROOT_PATH)?,
            description: field(entries, "description", ROOT_PATH)?,
            url: field(entries, "url", ROOT_PATH)?,
            prerequisites: self.section(entries, "prerequisites", |path, node| {
                m.prerequisites(node, path)
            })?,
            modules: self.section(entries, "modules", |path, node| m.modules(node, path))?,
            properties: self.section(entries, "properties", |path, node| {
                m.properties(node, path)
            })?,
            dependency_management: self.section(entries, "dependencyManagement", |path, node| {
                m.dependency_management(node, path)
            })?,
            dependencies: self.section(entries, "dependencies", |path, node| {
                m.dependencies(node, path)
            })?,
            build: self.section(entries, "build", |path, node| m.build(node, path))?,
            reporting: self.section(entries, "reporting", |path, node| m.reporting(node, path))?,
        })
    }

    /// [`transform`](Self::transform), wrapping any failure with the label of
    /// the source the document came from.
    pub fn parse_model(
        &self,
        document: &Node,
        location: &str,
    ) -> std::result::Result<ProjectDescriptor, ModelParseError> {
        self.transform(document)
            .map_err(|source| ModelParseError::Model {
                location: location.to_string(),
                source,
            })
    }

    fn section<T: Default>(
        &self,
        entries: &[Entry],
        name: &str,
        convert: impl FnOnce(&str, &Node) -> Result<T>,
    ) -> Result<T> {
        match get(entries, name) {
            Some(node) => {
                debug!(section = name, "mapping section");
                convert(&format!("{}.{}", ROOT_PATH, name), node)
            }
            None => Ok(T::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pom_document::{SourceInfo, parse};
    use pom_model::Coordinate;

    fn transform(yaml: &str) -> Result<ProjectDescriptor> {
        ModelTransformer::default().transform(&parse(yaml).unwrap())
    }

    #[test]
    fn test_minimal_document() {
        let project = transform("groupId: org.example\nartifactId: demo\nversion: 1.0").unwrap();

        assert_eq!(project.model_version, "4.0.0");
        assert_eq!(project.group_id.as_deref(), Some("org.example"));
        assert_eq!(project.artifact_id.as_deref(), Some("demo"));
        assert_eq!(project.version.as_deref(), Some("1.0"));
        assert!(project.dependencies.is_empty());
        assert!(project.build.is_none());
    }

    #[test]
    fn test_root_must_be_a_mapping() {
        for yaml in ["- a\n- b", "just text", "~"] {
            let err = transform(yaml).unwrap_err();
            assert!(
                matches!(err, ReaderError::MalformedDocument { ref path, .. } if path == "project"),
                "{:?}",
                err
            );
        }
    }

    #[test]
    fn test_project_id_shorthand() {
        let project = transform("id: org.example:demo:1.0\nname: Demo").unwrap();
        assert_eq!(project.group_id.as_deref(), Some("org.example"));
        assert_eq!(project.artifact_id.as_deref(), Some("demo"));
        assert_eq!(project.version.as_deref(), Some("1.0"));
    }

    #[test]
    fn test_explicit_keys_win_over_id_in_any_order() {
        let before = transform("version: 2.0\nid: org.example:demo:1.0").unwrap();
        let after = transform("id: org.example:demo:1.0\nversion: 2.0").unwrap();

        assert_eq!(before.version.as_deref(), Some("2.0"));
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let project = transform("artifactId: demo\nlicenses: [MIT]\nx-custom: {a: 1}").unwrap();
        assert_eq!(project.artifact_id.as_deref(), Some("demo"));
    }

    #[test]
    fn test_model_version_is_kept() {
        let project = transform("modelVersion: 4.1.0\nartifactId: demo").unwrap();
        assert_eq!(project.model_version, "4.1.0");
    }

    #[test]
    fn test_first_error_aborts() {
        let err = transform(
            r#"
artifactId: demo
dependencies:
  - org.example:ok:1.0
  - broken
build:
  plugins: not-a-list
"#,
        )
        .unwrap_err();
        assert_eq!(err.path(), "project.dependencies[1]");
    }

    #[test]
    fn test_non_scalar_unknown_keys_are_ignored() {
        let project = transform(
            r#"
artifactId: demo
? [x-ext, 1]
: ignored
build:
  ? {vendor: acme}
  : ignored
  finalName: demo-app
"#,
        )
        .unwrap();

        assert_eq!(project.artifact_id.as_deref(), Some("demo"));
        assert_eq!(
            project.build.unwrap().final_name.as_deref(),
            Some("demo-app")
        );
    }

    #[test]
    fn test_repeated_transformation_is_equal() {
        let document = parse("artifactId: demo\ndependencies:\n  - g:a:1\nproperties:\n  k: v").unwrap();
        let transformer = ModelTransformer::default();

        let first = transformer.transform(&document).unwrap();
        let second = transformer.transform(&document).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.dependencies[0].coordinate,
            Coordinate::new(Some("g"), "a", Some("1"))
        );
    }

    #[test]
    fn test_parse_model_wraps_error_with_location() {
        let document = Node::sequence([]);
        let err = ModelTransformer::default()
            .parse_model(&document, "demo/pom.yaml")
            .unwrap_err();

        assert_eq!(err.location(), "demo/pom.yaml");
        assert_eq!(err.reader_error().map(|e| e.location()), Some(&SourceInfo::default()));
    }
}
