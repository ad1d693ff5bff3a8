//! Project scanner: topology, declared versions and per-file import usage.

pub mod detect;
pub mod scanner;
pub mod types;
pub mod versions;

pub use detect::{FileHits, ImportDetector};
pub use scanner::Scanner;
pub use types::{DeclaredVersions, DeprecatedApiUsage, ProjectSnapshot, ProjectStructure, Topology};
