//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for file enumeration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Files larger than this many bytes are skipped with a warning. Default: no limit.
    pub max_file_size: Option<u64>,
    /// Number of walker threads. 0 = auto-detect.
    pub threads: Option<usize>,
    /// Additional ignore patterns beyond the built-in list (gitignore syntax).
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Honour `.gitignore` / `.ignore` files. Default: false.
    pub respect_gitignore: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective max file size; `None` means unlimited.
    pub fn effective_max_file_size(&self) -> Option<u64> {
        self.max_file_size.filter(|limit| *limit > 0)
    }

    /// Returns the effective thread count, defaulting to 0 (auto-detect).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(false)
    }
}
