//! Configuration errors.

use super::error_code::UpliftErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

impl UpliftErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CONFIG_READ_ERROR",
            Self::Parse(_) => "CONFIG_PARSE_ERROR",
            Self::Serialize(_) => "CONFIG_SERIALIZE_ERROR",
            Self::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}
