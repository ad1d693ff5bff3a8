//! Thresholds for the risk rules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskConfig {
    /// JDK versions considered too old to jump straight to the target.
    pub ancient_java_versions: Vec<String>,
    /// Assumed JDK version when the root descriptor declares none.
    pub assumed_java_version: String,
    /// Framework version prefix that cannot be upgraded in one step.
    pub obsolete_framework_prefix: String,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            ancient_java_versions: ["1.6", "1.7", "6", "7"].iter().map(|s| s.to_string()).collect(),
            assumed_java_version: "8".to_string(),
            obsolete_framework_prefix: "1.".to_string(),
        }
    }
}
