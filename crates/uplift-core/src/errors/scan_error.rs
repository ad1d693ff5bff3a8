//! Scanner errors. Only conditions that abort the whole scan live here;
//! per-file problems become warnings.

use super::error_code::UpliftErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Project path does not exist: {0}")]
    RootNotFound(String),

    #[error("Invalid detection pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Walk(#[from] super::WalkError),
}

impl UpliftErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound(_) => "SCAN_ROOT_NOT_FOUND",
            Self::Pattern { .. } => "SCAN_INVALID_PATTERN",
            Self::Walk(e) => e.error_code(),
        }
    }
}
