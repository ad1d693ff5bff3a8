//! Descriptor upgrade: strategy wiring, JDK properties, dependency pins and
//! the compiler plugin, applied to the parsed tree and written back once.

use std::path::{Path, PathBuf};

use serde::Serialize;
use uplift_core::config::DescriptorConfig;
use uplift_core::descriptor::{parse_document, read_document, to_xml_string, write_document, Element};
use uplift_core::errors::DescriptorError;

use super::backup::create_backup;
use super::compiler_plugin::{build_plugin, is_compiler_plugin, processor_paths};
use super::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeOptions {
    pub strategy: Strategy,
    pub create_backup: bool,
}

impl Default for UpgradeOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::BomImport,
            create_backup: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyBump {
    pub group_id: String,
    pub artifact_id: String,
    pub previous: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyChange {
    pub key: String,
    pub previous: Option<String>,
    pub value: String,
}

/// What one upgrade changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeSummary {
    pub path: PathBuf,
    pub backup: Option<PathBuf>,
    pub strategy: Strategy,
    pub dependencies: Vec<DependencyBump>,
    pub properties: Vec<PropertyChange>,
    pub compiler_plugin_installed: bool,
}

/// Tree-level changes, before any file is involved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeChanges {
    pub dependencies: Vec<DependencyBump>,
    pub properties: Vec<PropertyChange>,
    pub compiler_plugin_installed: bool,
}

pub struct DescriptorUpgrader {
    config: DescriptorConfig,
    options: UpgradeOptions,
}

impl DescriptorUpgrader {
    pub fn new(config: DescriptorConfig, options: UpgradeOptions) -> Self {
        Self { config, options }
    }

    pub fn options(&self) -> UpgradeOptions {
        self.options
    }

    /// Upgrade the descriptor at `path` in place.
    ///
    /// The backup is taken before parsing. Parse and transform errors abort
    /// before the descriptor is written.
    pub fn upgrade(&self, path: &Path) -> Result<UpgradeSummary, DescriptorError> {
        if !path.is_file() {
            return Err(DescriptorError::NotFound(path.display().to_string()));
        }
        tracing::info!(path = %path.display(), strategy = %self.options.strategy, "upgrading descriptor");

        let backup = if self.options.create_backup {
            Some(create_backup(path)?)
        } else {
            None
        };

        let mut doc = read_document(path)?;
        let changes = self.apply(&mut doc.root)?;
        write_document(path, &doc)?;

        tracing::info!(
            path = %path.display(),
            dependencies = changes.dependencies.len(),
            properties = changes.properties.len(),
            "descriptor upgraded"
        );
        Ok(UpgradeSummary {
            path: path.to_path_buf(),
            backup,
            strategy: self.options.strategy,
            dependencies: changes.dependencies,
            properties: changes.properties,
            compiler_plugin_installed: changes.compiler_plugin_installed,
        })
    }

    /// Upgrade descriptor XML held in memory.
    pub fn upgrade_xml(&self, xml: &str) -> Result<(String, TreeChanges), DescriptorError> {
        let mut doc = parse_document(xml)?;
        let changes = self.apply(&mut doc.root)?;
        Ok((to_xml_string(&doc)?, changes))
    }

    /// Apply every upgrade step to the descriptor's root element.
    pub fn apply(&self, project: &mut Element) -> Result<TreeChanges, DescriptorError> {
        let processors = if self.options.strategy.installs_compiler_plugin() {
            processor_paths(&self.config)?
        } else {
            Vec::new()
        };

        match self.options.strategy {
            Strategy::ParentInheritance => self.install_parent(project),
            Strategy::BomImport => self.import_bom(project),
        }

        let mut changes = TreeChanges {
            properties: self.upgrade_properties(project),
            dependencies: self.bump_dependencies(project),
            ..Default::default()
        };

        if self.options.strategy.installs_compiler_plugin() {
            self.install_compiler_plugin(project, &processors);
            changes.compiler_plugin_installed = true;
        }
        Ok(changes)
    }

    fn install_parent(&self, project: &mut Element) {
        let coordinate = &self.config.parent;
        let removed = project.remove_children(|c| c.is("parent"));

        let mut parent = project.new_child("parent");
        parent.set_child_text("groupId", &coordinate.group_id);
        parent.set_child_text("artifactId", &coordinate.artifact_id);
        parent.set_child_text("version", &coordinate.version);
        project.insert_first_child(parent);

        tracing::debug!(replaced = removed, parent = %coordinate.key(), "installed parent");
    }

    fn import_bom(&self, project: &mut Element) {
        let bom = &self.config.bom;
        let dependencies = project
            .get_or_create_child("dependencyManagement")
            .get_or_create_child("dependencies");

        let existing = dependencies.children.iter().position(|d| {
            d.is("dependency")
                && d.child_text("groupId") == Some(bom.group_id.as_str())
                && d.child_text("artifactId") == Some(bom.artifact_id.as_str())
        });

        let entry = match existing {
            Some(index) => {
                tracing::debug!(bom = %bom.key(), "bom already imported, converging");
                &mut dependencies.children[index]
            }
            None => {
                let mut entry = dependencies.new_child("dependency");
                entry.set_child_text("groupId", &bom.group_id);
                entry.set_child_text("artifactId", &bom.artifact_id);
                dependencies.push_child(entry)
            }
        };
        entry.set_child_text("version", &bom.version);
        entry.set_child_text("type", "pom");
        entry.set_child_text("scope", "import");
    }

    fn upgrade_properties(&self, project: &mut Element) -> Vec<PropertyChange> {
        let target = self.config.target_java_version.as_str();
        let properties = project.get_or_create_child("properties");
        let mut changes = Vec::new();

        for key in &self.config.java_properties {
            let previous = properties.set_child_text(key, target);
            changes.push(PropertyChange {
                key: key.clone(),
                previous,
                value: target.to_string(),
            });
        }

        for entry in &self.config.framework_properties {
            if let Some(property) = properties.child_mut(&entry.key) {
                let previous = property.text.replace(entry.value.clone());
                changes.push(PropertyChange {
                    key: entry.key.clone(),
                    previous,
                    value: entry.value.clone(),
                });
            }
        }
        changes
    }

    fn bump_dependencies(&self, project: &mut Element) -> Vec<DependencyBump> {
        let mut bumps = Vec::new();
        project.visit_descendants_mut(&mut |element: &mut Element| {
            if !element.is("dependencies") {
                return;
            }
            for dependency in element.children.iter_mut().filter(|c| c.is("dependency")) {
                let (Some(group_id), Some(artifact_id)) =
                    (dependency.child_text("groupId"), dependency.child_text("artifactId"))
                else {
                    continue;
                };
                let Some(version) = self.config.upgrade_version(group_id, artifact_id) else {
                    continue;
                };
                let (group_id, artifact_id) = (group_id.to_string(), artifact_id.to_string());
                let previous = dependency.set_child_text("version", version);
                tracing::debug!(dependency = %format!("{group_id}:{artifact_id}"), version, "pinned dependency");
                bumps.push(DependencyBump {
                    group_id,
                    artifact_id,
                    previous,
                    version: version.to_string(),
                });
            }
        });
        bumps
    }

    fn install_compiler_plugin(&self, project: &mut Element, processors: &[(String, String, String)]) {
        let plugins = project.get_or_create_child("build").get_or_create_child("plugins");
        let plugin = build_plugin(plugins, &self.config, processors);
        plugins.replace_subtree(|p| is_compiler_plugin(p, &self.config), plugin);
    }
}
