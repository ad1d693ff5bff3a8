use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One assessed migration risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub level: RiskLevel,
    pub item: String,
    pub description: String,
    pub impact: String,
}

impl RiskFinding {
    pub fn new(
        level: RiskLevel,
        item: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            level,
            item: item.into(),
            description: description.into(),
            impact: impact.into(),
        }
    }
}

/// Effort estimate. Hours and days are rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadEstimate {
    pub estimated_hours: f64,
    pub estimated_days: f64,
    pub automation_coverage_percent: u8,
    pub manual_work_hours: f64,
}
