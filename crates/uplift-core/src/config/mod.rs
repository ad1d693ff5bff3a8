//! Configuration. Every table the passes consume lives here and is passed
//! explicitly into each component; nothing is global.

pub mod descriptor_config;
pub mod detection_config;
pub mod import_config;
pub mod risk_config;
pub mod scan_config;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

pub use descriptor_config::{
    AnnotationProcessor, CompilerPluginConfig, Coordinate, DescriptorConfig, PropertyOverride,
};
pub use detection_config::{DeprecatedApi, DetectionConfig};
pub use import_config::{ImportConfig, NamespaceMapping};
pub use risk_config::RiskConfig;
pub use scan_config::ScanConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UpliftConfig {
    pub scan: ScanConfig,
    pub imports: ImportConfig,
    pub detection: DetectionConfig,
    pub risk: RiskConfig,
    pub descriptor: DescriptorConfig,
}

impl UpliftConfig {
    /// Parse config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load config for a project.
    ///
    /// `explicit` wins and must exist. Otherwise `<root>/uplift.toml` is used
    /// when present, else the built-in defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml(&content)
    }

    /// Reject tables the passes cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for mapping in &self.imports.mappings {
            if mapping.from.trim().is_empty() || mapping.to.trim().is_empty() {
                return Err(ConfigError::invalid("namespace mapping with empty prefix"));
            }
            if mapping.from == mapping.to {
                return Err(ConfigError::invalid(format!(
                    "namespace mapping '{}' maps onto itself",
                    mapping.from
                )));
            }
            if !seen.insert(mapping.from.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate namespace mapping '{}'",
                    mapping.from
                )));
            }
        }

        if self.descriptor.target_java_version.trim().is_empty() {
            return Err(ConfigError::invalid("descriptor.target_java_version is empty"));
        }

        for processor in &self.descriptor.compiler_plugin.annotation_processors {
            if self
                .descriptor
                .upgrade_version_by_key(&processor.version_from)
                .is_none()
            {
                return Err(ConfigError::invalid(format!(
                    "annotation processor {}:{} takes its version from '{}', which is not in the upgrade table",
                    processor.group_id, processor.artifact_id, processor.version_from
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = UpliftConfig::default();
        assert_eq!(config.imports.mappings.len(), 22);
        assert_eq!(
            config.imports.mappings[0],
            NamespaceMapping::new("javax.servlet", "jakarta.servlet")
        );
        assert_eq!(
            config.imports.mappings.last().unwrap(),
            &NamespaceMapping::new("javax.servlet.jsp", "jakarta.servlet.jsp")
        );
        assert_eq!(config.detection.namespaces.len(), 6);
        assert_eq!(config.descriptor.dependency_upgrades.len(), 8);
        assert_eq!(config.descriptor.compiler_plugin.compiler_args.len(), 4);
        config.validate().unwrap();
    }

    #[test]
    fn test_upgrade_version_lookup() {
        let config = DescriptorConfig::default();
        assert_eq!(config.upgrade_version("org.projectlombok", "lombok"), Some("1.18.36"));
        assert_eq!(config.upgrade_version_by_key("org.mapstruct:mapstruct"), Some("1.5.5.Final"));
        assert_eq!(config.upgrade_version("org.example", "nope"), None);
        assert_eq!(config.upgrade_version_by_key("malformed"), None);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = UpliftConfig::from_toml(
            r#"
[descriptor]
target_java_version = "17"

[[imports.mappings]]
from = "javax.servlet"
to = "jakarta.servlet"
"#,
        )
        .unwrap();
        assert_eq!(config.descriptor.target_java_version, "17");
        assert_eq!(config.imports.mappings.len(), 1);
        assert_eq!(config.detection, DetectionConfig::default());
        assert_eq!(config.descriptor.parent, DescriptorConfig::default().parent);
    }

    #[test]
    fn test_validate_rejects_duplicate_mapping() {
        let err = UpliftConfig::from_toml(
            r#"
[[imports.mappings]]
from = "javax.mail"
to = "jakarta.mail"

[[imports.mappings]]
from = "javax.mail"
to = "jakarta.mail"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validate_rejects_unknown_processor_version() {
        let mut config = UpliftConfig::default();
        config.descriptor.dependency_upgrades.retain(|c| c.artifact_id != "mapstruct");
        assert!(config.validate().is_err());
    }
}
