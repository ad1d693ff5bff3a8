//! Build descriptor upgrader.

pub mod backup;
pub mod compiler_plugin;
pub mod strategy;
pub mod upgrader;

pub use backup::create_backup;
pub use strategy::{ParseStrategyError, Strategy};
pub use upgrader::{
    DependencyBump, DescriptorUpgrader, PropertyChange, TreeChanges, UpgradeOptions, UpgradeSummary,
};
