//! # uplift-core
//!
//! Foundation crate for the Uplift migration assistant.
//! Defines config tables, errors, the build-descriptor tree model,
//! file enumeration and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod descriptor;
pub mod errors;
pub mod tracing;
pub mod types;
pub mod walker;

// Re-export the most commonly used types at the crate root.
pub use config::UpliftConfig;
pub use errors::error_code::UpliftErrorCode;
pub use types::FileWarning;
pub use walker::{SourceEnumerator, WalkEnumerator};
