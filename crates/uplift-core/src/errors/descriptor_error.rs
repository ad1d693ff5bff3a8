//! Build descriptor errors. Any of these aborts the single descriptor
//! operation that raised it.

use super::error_code::UpliftErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Descriptor not found: {0}")]
    NotFound(String),

    #[error("Malformed descriptor at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("Descriptor has no root element")]
    MissingRoot,

    #[error("Failed to serialize descriptor: {message}")]
    Serialize { message: String },

    #[error("Backup failed for {path}: {source}")]
    Backup {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Upgrade table has no version for {coordinate}")]
    MissingVersion { coordinate: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DescriptorError {
    pub fn malformed(position: u64, message: impl Into<String>) -> Self {
        Self::Malformed {
            position,
            message: message.into(),
        }
    }
}

impl UpliftErrorCode for DescriptorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "DESCRIPTOR_NOT_FOUND",
            Self::Malformed { .. } => "DESCRIPTOR_MALFORMED",
            Self::MissingRoot => "DESCRIPTOR_MISSING_ROOT",
            Self::Serialize { .. } => "DESCRIPTOR_SERIALIZE_FAILED",
            Self::Backup { .. } => "DESCRIPTOR_BACKUP_FAILED",
            Self::MissingVersion { .. } => "DESCRIPTOR_MISSING_VERSION",
            Self::Io(_) => "IO_ERROR",
        }
    }
}
