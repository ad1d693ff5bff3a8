//! Fixed names shared across the workspace.

/// File name identifying a Maven build descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";

/// Extension identifying a Java source file.
pub const SOURCE_EXTENSION: &str = "java";

/// Project-local configuration file, looked up in the target root.
pub const CONFIG_FILE_NAME: &str = "uplift.toml";

/// Default analysis output, written next to the analysed project.
pub const ANALYSIS_OUTPUT_FILE: &str = "upgrade_analysis.json";

/// Default import-migration stats output, written next to the source root.
pub const MIGRATION_STATS_FILE: &str = "import_migration_stats.json";
