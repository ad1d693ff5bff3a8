//! Error types for every Uplift subsystem.
//!
//! Each subsystem has one enum; all of them implement [`UpliftErrorCode`]
//! and the CLI appends that stable code to the message it prints.

pub mod config_error;
pub mod descriptor_error;
pub mod error_code;
pub mod rewrite_error;
pub mod scan_error;
pub mod walk_error;

pub use config_error::ConfigError;
pub use descriptor_error::DescriptorError;
pub use error_code::UpliftErrorCode;
pub use rewrite_error::RewriteError;
pub use scan_error::ScanError;
pub use walk_error::WalkError;
