//! # uplift-transform
//!
//! The two mutating passes of the Uplift migration assistant. Both operate
//! on demand and independently of the analysis pipeline.
//!
//! - [`imports`]: rewrites `javax.*` imports to their `jakarta.*` namespace.
//! - [`descriptor`]: upgrades a `pom.xml` to the target platform.

pub mod descriptor;
pub mod imports;

pub use descriptor::{DescriptorUpgrader, Strategy, UpgradeOptions, UpgradeSummary};
pub use imports::{ImportRewriter, MigrationStats, RewriteOutcome};
