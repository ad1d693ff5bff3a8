//! Target platform coordinates and version tables for the descriptor upgrader.

use serde::{Deserialize, Serialize};

/// Maven `group:artifact:version` triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
        }
    }

    /// `group:artifact`, the key used by the upgrade table.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// A property updated only when the descriptor already declares it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyOverride {
    pub key: String,
    pub value: String,
}

/// An annotation processor installed on the compiler plugin. Its version is
/// looked up in the dependency upgrade table under `version_from`
/// (`group:artifact`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotationProcessor {
    pub group_id: String,
    pub artifact_id: String,
    pub version_from: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompilerPluginConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub fork: bool,
    pub annotation_processors: Vec<AnnotationProcessor>,
    pub compiler_args: Vec<String>,
}

impl Default for CompilerPluginConfig {
    fn default() -> Self {
        Self {
            group_id: "org.apache.maven.plugins".to_string(),
            artifact_id: "maven-compiler-plugin".to_string(),
            version: "3.11.0".to_string(),
            fork: true,
            annotation_processors: vec![
                AnnotationProcessor {
                    group_id: "org.projectlombok".to_string(),
                    artifact_id: "lombok".to_string(),
                    version_from: "org.projectlombok:lombok".to_string(),
                },
                AnnotationProcessor {
                    group_id: "org.mapstruct".to_string(),
                    artifact_id: "mapstruct-processor".to_string(),
                    version_from: "org.mapstruct:mapstruct".to_string(),
                },
            ],
            compiler_args: [
                "-Amapstruct.suppressGeneratorTimestamp=true",
                "-Amapstruct.defaultComponentModel=spring",
                "--add-opens",
                "jdk.compiler/com.sun.tools.javac.processing=ALL-UNNAMED",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DescriptorConfig {
    /// Target JDK release, e.g. `21`.
    pub target_java_version: String,
    /// Properties always set to the target JDK release.
    pub java_properties: Vec<String>,
    /// Parent installed by the parent-inheritance strategy.
    pub parent: Coordinate,
    /// BOM imported by the bom-import strategy.
    pub bom: Coordinate,
    pub framework_properties: Vec<PropertyOverride>,
    /// Dependencies pinned to a target version wherever they are declared.
    pub dependency_upgrades: Vec<Coordinate>,
    pub compiler_plugin: CompilerPluginConfig,
}

impl DescriptorConfig {
    /// Target version for `group:artifact`, if the upgrade table has one.
    pub fn upgrade_version(&self, group_id: &str, artifact_id: &str) -> Option<&str> {
        self.dependency_upgrades
            .iter()
            .find(|c| c.group_id == group_id && c.artifact_id == artifact_id)
            .map(|c| c.version.as_str())
    }

    /// Like [`upgrade_version`](Self::upgrade_version) but keyed by `group:artifact`.
    pub fn upgrade_version_by_key(&self, key: &str) -> Option<&str> {
        let (group_id, artifact_id) = key.split_once(':')?;
        self.upgrade_version(group_id, artifact_id)
    }
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            target_java_version: "21".to_string(),
            java_properties: [
                "java.version",
                "maven.compiler.source",
                "maven.compiler.target",
                "maven.compiler.release",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            parent: Coordinate::new("com.ym", "ym-build-parent", "1.0.0-SNAPSHOT"),
            bom: Coordinate::new("com.ym", "ym-dependencies-bom", "1.0.0-SNAPSHOT"),
            framework_properties: vec![
                PropertyOverride {
                    key: "spring-boot.version".to_string(),
                    value: "3.2.4".to_string(),
                },
                PropertyOverride {
                    key: "spring-cloud.version".to_string(),
                    value: "2023.0.1".to_string(),
                },
            ],
            dependency_upgrades: vec![
                Coordinate::new("org.projectlombok", "lombok", "1.18.36"),
                Coordinate::new("org.mapstruct", "mapstruct", "1.5.5.Final"),
                Coordinate::new("com.google.guava", "guava", "33.2.1-jre"),
                Coordinate::new("cn.hutool", "hutool-all", "5.8.25"),
                Coordinate::new("com.baomidou", "mybatis-plus-boot-starter", "3.5.5"),
                Coordinate::new("com.mysql", "mysql-connector-j", "8.3.0"),
                Coordinate::new("org.redisson", "redisson-spring-boot-starter", "3.27.2"),
                Coordinate::new("com.alibaba.fastjson2", "fastjson2", "2.0.47"),
            ],
            compiler_plugin: CompilerPluginConfig::default(),
        }
    }
}
