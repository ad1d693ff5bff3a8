use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the target platform is wired into a descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Replace the parent with the organisation build parent.
    ParentInheritance,
    /// Import the organisation BOM and install the compiler plugin.
    #[default]
    BomImport,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParentInheritance => "parent-inheritance",
            Self::BomImport => "bom-import",
        }
    }

    /// The compiler plugin comes from the parent under parent inheritance.
    pub fn installs_compiler_plugin(&self) -> bool {
        matches!(self, Self::BomImport)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}', expected 'parent-inheritance' or 'bom-import'",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parent-inheritance" | "parent" => Ok(Self::ParentInheritance),
            "bom-import" | "bom" => Ok(Self::BomImport),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
