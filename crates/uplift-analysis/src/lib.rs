//! # uplift-analysis
//!
//! Read-only analysis pipeline for the Uplift migration assistant:
//! scanner → risk assessor → workload estimate → report record.

pub mod report;
pub mod risk;
pub mod scanner;

pub use report::{analyze, AnalysisReport};
pub use risk::{estimate, RiskAssessor, RiskFinding, RiskLevel, WorkloadEstimate};
pub use scanner::{ProjectSnapshot, Scanner, Topology};
