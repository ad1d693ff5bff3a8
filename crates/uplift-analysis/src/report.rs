//! The serialisable analysis record and its Markdown rendering.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uplift_core::config::UpliftConfig;
use uplift_core::errors::ScanError;
use uplift_core::FileWarning;

use crate::risk::{estimate, RiskAssessor, RiskFinding, RiskLevel, WorkloadEstimate};
use crate::scanner::{DeclaredVersions, DeprecatedApiUsage, ProjectSnapshot, ProjectStructure, Scanner, Topology};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub project_name: String,
    /// RFC 3339 local time of the analysis.
    pub analysis_time: String,
    pub structure: ProjectStructure,
    pub versions: DeclaredVersions,
    pub namespace_usage: BTreeMap<String, usize>,
    pub deprecated_apis: Vec<DeprecatedApiUsage>,
    pub risks: Vec<RiskFinding>,
    pub workload_estimate: WorkloadEstimate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FileWarning>,
}

/// Scan `root`, assess the snapshot and estimate the workload.
pub fn analyze(root: &Path, config: &UpliftConfig) -> Result<AnalysisReport, ScanError> {
    let snapshot = Scanner::new(config.clone())?.scan(root)?;
    let risks = RiskAssessor::new(config.risk.clone()).assess(&snapshot);
    let workload = estimate(&snapshot, &risks);
    tracing::info!(
        project = %snapshot.project_name,
        risks = risks.len(),
        hours = workload.estimated_hours,
        "analysis complete"
    );
    Ok(AnalysisReport::from_parts(snapshot, risks, workload))
}

impl AnalysisReport {
    pub fn from_parts(snapshot: ProjectSnapshot, risks: Vec<RiskFinding>, workload: WorkloadEstimate) -> Self {
        Self {
            project_name: snapshot.project_name,
            analysis_time: chrono::Local::now().to_rfc3339(),
            structure: snapshot.structure,
            versions: snapshot.versions,
            namespace_usage: snapshot.namespace_usage,
            deprecated_apis: snapshot.deprecated_apis,
            risks,
            workload_estimate: workload,
            warnings: snapshot.warnings,
        }
    }

    pub fn high_risk_count(&self) -> usize {
        self.risks.iter().filter(|r| r.level == RiskLevel::High).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable report derived 1:1 from the record.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let s = &self.structure;
        let v = &self.versions;
        let w = &self.workload_estimate;

        // fmt::Write into a String cannot fail.
        let _ = writeln!(out, "# JDK upgrade analysis - {}\n", self.project_name);
        let _ = writeln!(out, "**Analysis time**: {}\n", self.analysis_time);

        let _ = writeln!(out, "## Project overview\n");
        let topology = match s.topology {
            Topology::SingleModule => "single-module",
            Topology::MultiModule => "multi-module",
        };
        let _ = writeln!(out, "- **Project type**: {topology}");
        let _ = writeln!(out, "- **Spring Boot**: {}", if s.is_spring_boot { "yes" } else { "no" });
        let _ = writeln!(out, "- **Descriptors**: {}", s.pom_count);
        let _ = writeln!(out, "- **Java files**: {}\n", s.java_files_count);

        let _ = writeln!(out, "## Declared versions\n");
        let _ = writeln!(out, "- **JDK**: {}", v.java.as_deref().unwrap_or("not declared"));
        let _ = writeln!(out, "- **Spring Boot**: {}", v.spring_boot.as_deref().unwrap_or("not used"));
        let _ = writeln!(out, "- **Spring Cloud**: {}\n", v.spring_cloud.as_deref().unwrap_or("not used"));

        let _ = writeln!(out, "## Code migration\n");
        let _ = writeln!(out, "### javax namespace usage\n");
        if self.namespace_usage.is_empty() {
            let _ = writeln!(out, "No javax namespace usage found");
        }
        for (namespace, count) in &self.namespace_usage {
            let _ = writeln!(out, "- `{namespace}`: {count} files");
        }
        let _ = writeln!(out, "\n### Deprecated APIs\n");
        if self.deprecated_apis.is_empty() {
            let _ = writeln!(out, "No deprecated API usage found");
        }
        for usage in &self.deprecated_apis {
            let _ = writeln!(out, "- **{}**: {} files", usage.api, usage.files.len());
        }

        let _ = writeln!(out, "\n## Risks\n");
        if self.risks.is_empty() {
            let _ = writeln!(out, "No risks found\n");
        }
        for risk in &self.risks {
            let _ = writeln!(out, "**[{}] {}**", risk.level, risk.item);
            let _ = writeln!(out, "   - Description: {}", risk.description);
            let _ = writeln!(out, "   - Impact: {}\n", risk.impact);
        }

        let _ = writeln!(out, "## Workload estimate\n");
        let _ = writeln!(out, "- **Estimated hours**: {}", w.estimated_hours);
        let _ = writeln!(out, "- **Estimated days**: {}", w.estimated_days);
        let _ = writeln!(out, "- **Automation coverage**: {}%", w.automation_coverage_percent);
        let _ = writeln!(out, "- **Manual work hours**: {}", w.manual_work_hours);

        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\n## Warnings\n");
            for warning in &self.warnings {
                let _ = writeln!(out, "- {warning}");
            }
        }
        out
    }
}
