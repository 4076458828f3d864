//! Descriptor types mirroring the POM 4.0.0 schema.
//!
//! Every list keeps document order and `properties` keeps insertion order.
//! Values are stored as strings exactly as the source presented them;
//! `${...}` references are never resolved.

use crate::ConfigNode;
use indexmap::IndexMap;
use serde::Serialize;

/// Model version used when a document does not declare one.
pub const DEFAULT_MODEL_VERSION: &str = "4.0.0";

/// Group id Maven assumes for plugins that do not name one.
pub const DEFAULT_PLUGIN_GROUP_ID: &str = "org.apache.maven.plugins";

/// Dependency type Maven assumes when none is given.
pub const DEFAULT_DEPENDENCY_TYPE: &str = "jar";

/// The root of a parsed project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub model_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Prerequisites>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_management: Option<DependencyManagement>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<Reporting>,
}

impl Default for ProjectDescriptor {
    fn default() -> Self {
        Self {
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            parent: None,
            group_id: None,
            artifact_id: None,
            version: None,
            packaging: None,
            name: None,
            description: None,
            url: None,
            prerequisites: None,
            modules: Vec::new(),
            properties: IndexMap::new(),
            dependency_management: None,
            dependencies: Vec::new(),
            build: None,
            reporting: None,
        }
    }
}

/// An artifact coordinate: the shape shared by dependencies, plugins and extensions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    pub artifact_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl Coordinate {
    pub fn new(group_id: Option<&str>, artifact_id: &str, version: Option<&str>) -> Self {
        Self {
            group_id: group_id.map(str::to_string),
            artifact_id: artifact_id.to_string(),
            version: version.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn with_type(mut self, artifact_type: &str) -> Self {
        self.artifact_type = Some(artifact_type.to_string());
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }
}

/// The `parent` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    pub artifact_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

impl Parent {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: Some(group_id.to_string()),
            artifact_id: artifact_id.to_string(),
            version: Some(version.to_string()),
            relative_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(flatten)]
    pub coordinate: Coordinate,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<Exclusion>,

    /// `true`/`false` as written; Maven treats absence as `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<String>,
}

impl Dependency {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    pub artifact_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManagement {
    pub dependencies: Vec<Dependency>,
}

/// The `build` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_source_directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_output_directory: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Coordinate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_goal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_management: Option<PluginManagement>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManagement {
    pub plugins: Vec<Plugin>,
}

/// A build plugin: coordinate, configuration and executions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    #[serde(flatten)]
    pub coordinate: Coordinate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub executions: Vec<Execution>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigNode>,
}

impl Plugin {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Self::default()
        }
    }

    pub fn with_configuration(mut self, configuration: ConfigNode) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn with_executions(mut self, executions: Vec<Execution>) -> Self {
        self.executions = executions;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prerequisites {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reporting {
    pub plugins: Vec<ReportPlugin>,
}

/// A reporting plugin: coordinate and configuration, never executions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPlugin {
    #[serde(flatten)]
    pub coordinate: Coordinate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_version() {
        let project = ProjectDescriptor::default();
        assert_eq!(project.model_version, "4.0.0");
        assert!(project.properties.is_empty());
    }

    #[test]
    fn test_coordinate_builders() {
        let c = Coordinate::new(Some("org.apache.maven"), "maven-core", Some("3.9.0"))
            .with_scope("test")
            .with_type("test-jar")
            .with_classifier("tests");
        assert_eq!(c.group_id.as_deref(), Some("org.apache.maven"));
        assert_eq!(c.scope.as_deref(), Some("test"));
        assert_eq!(c.artifact_type.as_deref(), Some("test-jar"));
        assert_eq!(c.classifier.as_deref(), Some("tests"));
    }

    #[test]
    fn test_json_uses_schema_names() {
        let dep = Dependency::new(
            Coordinate::new(Some("org.junit.jupiter"), "junit-jupiter", Some("5.9.3"))
                .with_scope("test")
                .with_type("jar"),
        );
        let json = serde_json::to_value(&dep).unwrap();
        assert_eq!(json["groupId"], "org.junit.jupiter");
        assert_eq!(json["type"], "jar");
        assert!(json.get("classifier").is_none());
        assert!(json.get("exclusions").is_none());
    }
}
