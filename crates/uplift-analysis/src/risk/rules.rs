//! Ordered risk rules.
//!
//! Rules run in a fixed order and each contributes at most one finding:
//! JDK age, framework major version, namespace volume, legacy APIs, module
//! count.

use uplift_core::config::RiskConfig;

use super::types::{RiskFinding, RiskLevel};
use crate::scanner::ProjectSnapshot;

/// Namespace usage above this count is a MEDIUM risk.
pub const HEAVY_NAMESPACE_USAGE: usize = 100;

pub struct RiskAssessor {
    config: RiskConfig,
}

impl RiskAssessor {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn assess(&self, snapshot: &ProjectSnapshot) -> Vec<RiskFinding> {
        let rules: [fn(&Self, &ProjectSnapshot) -> Option<RiskFinding>; 5] = [
            Self::jdk_too_old,
            Self::framework_too_old,
            Self::namespace_usage,
            Self::deprecated_apis,
            Self::multi_module,
        ];
        let findings: Vec<RiskFinding> = rules.iter().filter_map(|rule| rule(self, snapshot)).collect();
        tracing::debug!(findings = findings.len(), "risk assessment complete");
        findings
    }

    fn jdk_too_old(&self, snapshot: &ProjectSnapshot) -> Option<RiskFinding> {
        let declared = snapshot
            .versions
            .java
            .as_deref()
            .unwrap_or(&self.config.assumed_java_version);
        if !self.config.ancient_java_versions.iter().any(|v| v == declared) {
            return None;
        }
        Some(RiskFinding::new(
            RiskLevel::High,
            "JDK version too low",
            format!("Current JDK {declared} is too far behind; upgrade to JDK 11 first"),
            "Likely to hit many incompatibilities",
        ))
    }

    fn framework_too_old(&self, snapshot: &ProjectSnapshot) -> Option<RiskFinding> {
        let version = snapshot.versions.spring_boot.as_deref()?;
        if !version.starts_with(self.config.obsolete_framework_prefix.as_str()) {
            return None;
        }
        Some(RiskFinding::new(
            RiskLevel::High,
            "Spring Boot 1.x",
            "Spring Boot 1.x must be upgraded to 2.x first",
            "Cannot upgrade directly to 3.x",
        ))
    }

    fn namespace_usage(&self, snapshot: &ProjectSnapshot) -> Option<RiskFinding> {
        let total = snapshot.total_namespace_usage();
        let description = format!("Found {total} javax namespace usages");
        if total > HEAVY_NAMESPACE_USAGE {
            Some(RiskFinding::new(
                RiskLevel::Medium,
                "Heavy javax usage",
                description,
                "Large amount of code migration work",
            ))
        } else if total > 0 {
            Some(RiskFinding::new(
                RiskLevel::Low,
                "javax usage",
                description,
                "Small amount of code migration work",
            ))
        } else {
            None
        }
    }

    fn deprecated_apis(&self, snapshot: &ProjectSnapshot) -> Option<RiskFinding> {
        if snapshot.deprecated_apis.is_empty() {
            return None;
        }
        Some(RiskFinding::new(
            RiskLevel::High,
            "Deprecated API usage",
            format!("Found {} kinds of deprecated API usage", snapshot.deprecated_apis.len()),
            "Needs manual fixes; there may be no automatic replacement",
        ))
    }

    fn multi_module(&self, snapshot: &ProjectSnapshot) -> Option<RiskFinding> {
        if !snapshot.is_multi_module() {
            return None;
        }
        Some(RiskFinding::new(
            RiskLevel::Medium,
            "Multi-module project",
            format!("Contains {} modules", snapshot.module_count()),
            "Dependency versions must be coordinated across modules",
        ))
    }
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}
