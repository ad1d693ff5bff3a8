use super::types::{RiskFinding, RiskLevel, WorkloadEstimate};
use crate::scanner::ProjectSnapshot;

pub const AUTOMATION_COVERAGE_PERCENT: u8 = 85;

const BASE_HOURS: f64 = 2.0;
/// (source files strictly above, extra hours); first match wins.
const SIZE_TIERS: [(usize, f64); 3] = [(500, 8.0), (200, 4.0), (50, 2.0)];
const HOURS_PER_NAMESPACE_USE: f64 = 0.05;
const HOURS_PER_HIGH_RISK: f64 = 2.0;
const HOURS_PER_MODULE: f64 = 0.5;
const MANUAL_SHARE: f64 = 0.15;
const HOURS_PER_DAY: f64 = 8.0;

/// Estimated effort for migrating `snapshot`, given its assessed `findings`.
pub fn estimate(snapshot: &ProjectSnapshot, findings: &[RiskFinding]) -> WorkloadEstimate {
    let mut hours = BASE_HOURS;

    let files = snapshot.structure.java_files_count;
    if let Some((_, extra)) = SIZE_TIERS.iter().find(|(threshold, _)| files > *threshold) {
        hours += extra;
    }

    hours += snapshot.total_namespace_usage() as f64 * HOURS_PER_NAMESPACE_USE;

    let high = findings.iter().filter(|f| f.level == RiskLevel::High).count();
    hours += high as f64 * HOURS_PER_HIGH_RISK;

    if snapshot.is_multi_module() {
        hours += snapshot.module_count() as f64 * HOURS_PER_MODULE;
    }

    WorkloadEstimate {
        estimated_hours: round1(hours),
        estimated_days: round1(hours / HOURS_PER_DAY),
        automation_coverage_percent: AUTOMATION_COVERAGE_PERCENT,
        manual_work_hours: round1(hours * MANUAL_SHARE),
    }
}

/// Round to one decimal place on the exact decimal value of `value`, ties to
/// even. `2.05` is stored just below the half and becomes `2.0`.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
