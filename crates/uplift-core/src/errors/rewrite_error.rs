//! Import rewriter errors.

use super::error_code::UpliftErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Source path does not exist: {0}")]
    RootNotFound(String),

    #[error("Invalid mapping for '{from}': {source}")]
    Pattern {
        from: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Walk(#[from] super::WalkError),
}

impl UpliftErrorCode for RewriteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound(_) => "REWRITE_ROOT_NOT_FOUND",
            Self::Pattern { .. } => "REWRITE_INVALID_MAPPING",
            Self::Walk(e) => e.error_code(),
        }
    }
}
