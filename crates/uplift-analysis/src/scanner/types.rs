//! Scan output types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uplift_core::FileWarning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    SingleModule,
    MultiModule,
}

/// Project shape as seen by the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStructure {
    #[serde(rename = "type")]
    pub topology: Topology,
    /// Any descriptor mentions the framework marker.
    pub is_spring_boot: bool,
    pub pom_count: usize,
    pub java_files_count: usize,
    /// Descriptor directories relative to the root; empty for single-module projects.
    pub modules: Vec<String>,
}

/// Versions declared by the root descriptor. Absent when undeclared or
/// when the root descriptor could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredVersions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spring_boot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spring_cloud: Option<String>,
}

impl DeclaredVersions {
    pub fn is_empty(&self) -> bool {
        self.java.is_none() && self.spring_boot.is_none() && self.spring_cloud.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecatedApiUsage {
    pub api: String,
    pub files: Vec<String>,
}

/// Everything one scan learned about a project. Built once, read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub project_name: String,
    pub structure: ProjectStructure,
    pub versions: DeclaredVersions,
    /// Namespace → number of files importing it.
    pub namespace_usage: BTreeMap<String, usize>,
    /// Namespace → files importing it.
    pub namespace_files: BTreeMap<String, BTreeSet<String>>,
    /// Legacy APIs found, in detection-table order. Only non-empty entries.
    pub deprecated_apis: Vec<DeprecatedApiUsage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FileWarning>,
}

impl ProjectSnapshot {
    pub fn is_multi_module(&self) -> bool {
        self.structure.topology == Topology::MultiModule
    }

    /// Sum of per-namespace file counts.
    pub fn total_namespace_usage(&self) -> usize {
        self.namespace_usage.values().sum()
    }

    /// Module count used by the risk rules: one per descriptor.
    pub fn module_count(&self) -> usize {
        self.structure.pom_count
    }
}
