use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uplift_core::FileWarning;

/// One rewritten file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Path relative to the rewrite root.
    pub path: String,
    pub replacements: usize,
}

/// Counters for one rewrite invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationStats {
    pub total_files: usize,
    pub modified_files: usize,
    pub total_replacements: usize,
    /// Source namespace → replacements. Only namespaces that matched.
    pub by_package: BTreeMap<String, usize>,
    pub dry_run: bool,
    #[serde(default)]
    pub changed_files: Vec<FileChange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FileWarning>,
}

impl MigrationStats {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub(crate) fn record(&mut self, path: String, replacements: &[(String, usize)]) {
        let total: usize = replacements.iter().map(|(_, n)| n).sum();
        self.modified_files += 1;
        self.total_replacements += total;
        for (namespace, count) in replacements {
            *self.by_package.entry(namespace.clone()).or_insert(0) += count;
        }
        self.changed_files.push(FileChange {
            path,
            replacements: total,
        });
    }

    /// Per-namespace counts, largest first; ties in name order.
    pub fn packages_by_count(&self) -> Vec<(&str, usize)> {
        let mut packages: Vec<(&str, usize)> =
            self.by_package.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        packages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        packages
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
