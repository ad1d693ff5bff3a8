//! What the project scanner looks for.

use serde::{Deserialize, Serialize};

/// A legacy API flagged when a source file imports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeprecatedApi {
    /// Identifier reported in findings, e.g. `com.sun.*`.
    pub api: String,
    /// Import prefix that triggers the finding, e.g. `com.sun.`.
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Artifact-name substring marking framework usage in a descriptor.
    pub framework_marker: String,
    /// Property holding the declared JDK version.
    pub platform_version_property: String,
    /// Property holding the declared framework-extension version.
    pub extension_version_property: String,
    /// Namespaces whose imports are counted per file.
    pub namespaces: Vec<String>,
    /// Legacy APIs whose imports are recorded per file.
    pub deprecated_apis: Vec<DeprecatedApi>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            framework_marker: "spring-boot".to_string(),
            platform_version_property: "java.version".to_string(),
            extension_version_property: "spring-cloud.version".to_string(),
            namespaces: [
                "javax.servlet",
                "javax.persistence",
                "javax.validation",
                "javax.annotation",
                "javax.transaction",
                "javax.ws.rs",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            deprecated_apis: vec![
                DeprecatedApi {
                    api: "sun.misc.Unsafe".to_string(),
                    prefix: "sun.misc.Unsafe".to_string(),
                },
                DeprecatedApi {
                    api: "com.sun.*".to_string(),
                    prefix: "com.sun.".to_string(),
                },
            ],
        }
    }
}
