//! File enumeration errors.

use super::error_code::UpliftErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("Walk root does not exist: {0}")]
    RootNotFound(String),

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    IgnorePattern { pattern: String, message: String },
}

impl UpliftErrorCode for WalkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound(_) => "WALK_ROOT_NOT_FOUND",
            Self::IgnorePattern { .. } => "WALK_INVALID_IGNORE",
        }
    }
}
