//! Stable error codes.

/// Maps an error to a stable SCREAMING_SNAKE code.
pub trait UpliftErrorCode {
    fn error_code(&self) -> &'static str;
}
