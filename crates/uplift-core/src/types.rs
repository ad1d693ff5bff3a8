//! Small value types shared by every pass.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A recoverable, file-scoped problem. The pass that produced it skipped the
/// file and kept going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileWarning {
    pub path: String,
    pub message: String,
}

impl FileWarning {
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
