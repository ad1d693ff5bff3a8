//! Risk assessment and workload estimate over a [`ProjectSnapshot`].
//!
//! [`ProjectSnapshot`]: crate::scanner::ProjectSnapshot

pub mod estimate;
pub mod rules;
pub mod types;

pub use estimate::{estimate, AUTOMATION_COVERAGE_PERCENT};
pub use rules::RiskAssessor;
pub use types::{RiskFinding, RiskLevel, WorkloadEstimate};
