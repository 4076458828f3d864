//! Canonical POM XML writer.
//!
//! Elements are written in POM schema order with two-space indentation. Absent
//! fields are omitted, and so are values equal to the schema default
//! (dependency type `jar`, plugin group `org.apache.maven.plugins`), which is
//! what Maven's own writer does. Two descriptors that differ only in spelling out
//! a default therefore serialize identically.

use crate::error::Result;
use crate::types::*;
use crate::ConfigNode;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Serialize a descriptor to a POM XML string, newline terminated.
pub fn write_pom(project: &ProjectDescriptor) -> Result<String> {
    let mut writer = PomWriter::new(Vec::new());
    writer.write_project(project)?;
    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Streams descriptors as POM XML into any [`Write`] sink.
pub struct PomWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> PomWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', 2),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Write the XML declaration and the `<project>` element.
    pub fn write_project(&mut self, project: &ProjectDescriptor) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let (namespace, schema_location) = namespace_for(&project.model_version);
        let root = BytesStart::new("project").with_attributes([
            ("xmlns", namespace.as_str()),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", schema_location.as_str()),
        ]);
        self.writer.write_event(Event::Start(root))?;

        self.text("modelVersion", Some(&project.model_version))?;
        if let Some(parent) = &project.parent {
            self.parent(parent)?;
        }
        self.text("groupId", project.group_id.as_deref())?;
        self.text("artifactId", project.artifact_id.as_deref())?;
        self.text("version", project.version.as_deref())?;
        self.text("packaging", project.packaging.as_deref())?;
        self.text("name", project.name.as_deref())?;
        self.text("description", project.description.as_deref())?;
        self.text("url", project.url.as_deref())?;
        if let Some(prerequisites) = &project.prerequisites {
            self.start("prerequisites")?;
            self.text("maven", prerequisites.maven.as_deref())?;
            self.end("prerequisites")?;
        }
        if !project.modules.is_empty() {
            self.start("modules")?;
            for module in &project.modules {
                self.text("module", Some(module))?;
            }
            self.end("modules")?;
        }
        if !project.properties.is_empty() {
            self.start("properties")?;
            for (key, value) in &project.properties {
                self.text(key, Some(value))?;
            }
            self.end("properties")?;
        }
        if let Some(management) = &project.dependency_management {
            self.start("dependencyManagement")?;
            self.dependencies(&management.dependencies)?;
            self.end("dependencyManagement")?;
        }
        self.dependencies(&project.dependencies)?;
        if let Some(build) = &project.build {
            self.build(build)?;
        }
        if let Some(reporting) = &project.reporting {
            self.start("reporting")?;
            if !reporting.plugins.is_empty() {
                self.start("plugins")?;
                for plugin in &reporting.plugins {
                    self.report_plugin(plugin)?;
                }
                self.end("plugins")?;
            }
            self.end("reporting")?;
        }

        self.end("project")
    }

    /// Write a configuration tree verbatim.
    pub fn config_node(&mut self, node: &ConfigNode) -> Result<()> {
        if !node.children.is_empty() {
            self.start(&node.name)?;
            for child in &node.children {
                self.config_node(child)?;
            }
            self.end(&node.name)
        } else if let Some(text) = &node.text {
            self.text(&node.name, Some(text))
        } else {
            self.writer
                .write_event(Event::Empty(BytesStart::new(node.name.as_str())))?;
            Ok(())
        }
    }

    fn parent(&mut self, parent: &Parent) -> Result<()> {
        self.start("parent")?;
        self.text("groupId", parent.group_id.as_deref())?;
        self.text("artifactId", Some(&parent.artifact_id))?;
        self.text("version", parent.version.as_deref())?;
        self.text("relativePath", parent.relative_path.as_deref())?;
        self.end("parent")
    }

    fn dependencies(&mut self, dependencies: &[Dependency]) -> Result<()> {
        if dependencies.is_empty() {
            return Ok(());
        }
        self.start("dependencies")?;
        for dependency in dependencies {
            let c = &dependency.coordinate;
            self.start("dependency")?;
            self.text("groupId", c.group_id.as_deref())?;
            self.text("artifactId", Some(&c.artifact_id))?;
            self.text("version", c.version.as_deref())?;
            self.text_unless_default("type", c.artifact_type.as_deref(), DEFAULT_DEPENDENCY_TYPE)?;
            self.text("classifier", c.classifier.as_deref())?;
            self.text("scope", c.scope.as_deref())?;
            if !dependency.exclusions.is_empty() {
                self.start("exclusions")?;
                for exclusion in &dependency.exclusions {
                    self.start("exclusion")?;
                    self.text("groupId", exclusion.group_id.as_deref())?;
                    self.text("artifactId", Some(&exclusion.artifact_id))?;
                    self.end("exclusion")?;
                }
                self.end("exclusions")?;
            }
            self.text("optional", dependency.optional.as_deref())?;
            self.end("dependency")?;
        }
        self.end("dependencies")
    }

    fn build(&mut self, build: &Build) -> Result<()> {
        self.start("build")?;
        self.text("sourceDirectory", build.source_directory.as_deref())?;
        self.text("testSourceDirectory", build.test_source_directory.as_deref())?;
        self.text("outputDirectory", build.output_directory.as_deref())?;
        self.text("testOutputDirectory", build.test_output_directory.as_deref())?;
        if !build.extensions.is_empty() {
            self.start("extensions")?;
            for extension in &build.extensions {
                self.start("extension")?;
                self.text("groupId", extension.group_id.as_deref())?;
                self.text("artifactId", Some(&extension.artifact_id))?;
                self.text("version", extension.version.as_deref())?;
                self.end("extension")?;
            }
            self.end("extensions")?;
        }
        self.text("defaultGoal", build.default_goal.as_deref())?;
        self.text("directory", build.directory.as_deref())?;
        self.text("finalName", build.final_name.as_deref())?;
        if let Some(management) = &build.plugin_management {
            self.start("pluginManagement")?;
            self.plugins(&management.plugins)?;
            self.end("pluginManagement")?;
        }
        self.plugins(&build.plugins)?;
        self.end("build")
    }

    fn plugins(&mut self, plugins: &[Plugin]) -> Result<()> {
        if plugins.is_empty() {
            return Ok(());
        }
        self.start("plugins")?;
        for plugin in plugins {
            let c = &plugin.coordinate;
            self.start("plugin")?;
            self.text_unless_default("groupId", c.group_id.as_deref(), DEFAULT_PLUGIN_GROUP_ID)?;
            self.text("artifactId", Some(&c.artifact_id))?;
            self.text("version", c.version.as_deref())?;
            self.text("extensions", plugin.extensions.as_deref())?;
            if !plugin.executions.is_empty() {
                self.start("executions")?;
                for execution in &plugin.executions {
                    self.execution(execution)?;
                }
                self.end("executions")?;
            }
            self.dependencies(&plugin.dependencies)?;
            self.text("inherited", plugin.inherited.as_deref())?;
            if let Some(configuration) = &plugin.configuration {
                self.config_node(configuration)?;
            }
            self.end("plugin")?;
        }
        self.end("plugins")
    }

    fn execution(&mut self, execution: &Execution) -> Result<()> {
        self.start("execution")?;
        self.text("id", execution.id.as_deref())?;
        self.text("phase", execution.phase.as_deref())?;
        if !execution.goals.is_empty() {
            self.start("goals")?;
            for goal in &execution.goals {
                self.text("goal", Some(goal))?;
            }
            self.end("goals")?;
        }
        self.text("inherited", execution.inherited.as_deref())?;
        if let Some(configuration) = &execution.configuration {
            self.config_node(configuration)?;
        }
        self.end("execution")
    }

    fn report_plugin(&mut self, plugin: &ReportPlugin) -> Result<()> {
        let c = &plugin.coordinate;
        self.start("plugin")?;
        self.text_unless_default("groupId", c.group_id.as_deref(), DEFAULT_PLUGIN_GROUP_ID)?;
        self.text("artifactId", Some(&c.artifact_id))?;
        self.text("version", c.version.as_deref())?;
        if let Some(configuration) = &plugin.configuration {
            self.config_node(configuration)?;
        }
        self.end("plugin")
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// `<name>text</name>`, or nothing when `text` is `None`.
    fn text(&mut self, name: &str, text: Option<&str>) -> Result<()> {
        let Some(text) = text else {
            return Ok(());
        };
        self.start(name)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        self.end(name)
    }

    fn text_unless_default(&mut self, name: &str, text: Option<&str>, default: &str) -> Result<()> {
        match text {
            Some(value) if value == default => Ok(()),
            other => self.text(name, other),
        }
    }
}

/// POM namespace and schema location for a model version.
fn namespace_for(model_version: &str) -> (String, String) {
    let version = match model_version {
        "4.1.0" => "4.1.0",
        _ => "4.0.0",
    };
    let namespace = format!("http://maven.apache.org/POM/{}", version);
    let schema_location = format!(
        "{} https://maven.apache.org/xsd/maven-{}.xsd",
        namespace, version
    );
    (namespace, schema_location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ProjectDescriptor {
        ProjectDescriptor {
            group_id: Some("org.example".into()),
            artifact_id: Some("demo".into()),
            version: Some("1.0.0".into()),
            ..ProjectDescriptor::default()
        }
    }

    #[test]
    fn test_minimal_project() {
        let xml = write_pom(&minimal()).unwrap();
        insta::assert_snapshot!(xml.trim_end(), @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
          <modelVersion>4.0.0</modelVersion>
          <groupId>org.example</groupId>
          <artifactId>demo</artifactId>
          <version>1.0.0</version>
        </project>
        "#);
    }

    #[test]
    fn test_defaults_are_omitted() {
        let mut project = minimal();
        project.dependencies = vec![Dependency::new(
            Coordinate::new(Some("org.apache.maven"), "maven-model", Some("3.9.0")).with_type("jar"),
        )];
        project.build = Some(Build {
            plugins: vec![Plugin::new(Coordinate::new(
                Some(DEFAULT_PLUGIN_GROUP_ID),
                "maven-javadoc-plugin",
                None,
            ))],
            ..Build::default()
        });

        let xml = write_pom(&project).unwrap();
        assert!(!xml.contains("<type>"));
        assert!(!xml.contains("org.apache.maven.plugins"));
        assert!(xml.contains("<artifactId>maven-javadoc-plugin</artifactId>"));
    }

    #[test]
    fn test_properties_keep_insertion_order() {
        let mut project = minimal();
        project.properties.insert("zeta".into(), "1".into());
        project.properties.insert("alpha".into(), "2".into());

        let xml = write_pom(&project).unwrap();
        let zeta = xml.find("<zeta>1</zeta>").unwrap();
        let alpha = xml.find("<alpha>2</alpha>").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_text_is_escaped_and_placeholders_kept() {
        let mut project = minimal();
        project.name = Some("Tools & <Things>".into());
        project.properties.insert("ver".into(), "${maven.version}".into());

        let xml = write_pom(&project).unwrap();
        assert!(xml.contains("<name>Tools &amp; &lt;Things&gt;</name>"));
        assert!(xml.contains("<ver>${maven.version}</ver>"));
    }

    #[test]
    fn test_configuration_tree() {
        let mut writer = PomWriter::new(Vec::new());
        writer
            .config_node(&ConfigNode::container(
                "configuration",
                vec![ConfigNode::leaf("source", "17"), ConfigNode::empty("skip")],
            ))
            .unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            xml,
            "<configuration>\n  <source>17</source>\n  <skip/>\n</configuration>"
        );
    }

    #[test]
    fn test_model_version_selects_namespace() {
        let project = ProjectDescriptor {
            model_version: "4.1.0".into(),
            ..minimal()
        };
        let xml = write_pom(&project).unwrap();
        assert!(xml.contains("xmlns=\"http://maven.apache.org/POM/4.1.0\""));
        assert!(xml.contains("maven-4.1.0.xsd"));
    }
}
