use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uplift_transform::Strategy;

/// Top-level CLI parser for the `uplift` binary.
#[derive(Debug, Parser)]
#[command(name = "uplift", version, about = "Uplift - JDK 8 to 21 and javax to jakarta migration assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to <target>/uplift.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only, no summaries)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a project: structure, versions, javax usage, risks, workload
    Analyze(AnalyzeArgs),
    /// Rewrite javax.* imports to jakarta.* under a source directory
    MigrateImports(MigrateImportsArgs),
    /// Upgrade a pom.xml to the JDK 21 platform
    UpgradePom(UpgradePomArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Project root directory
    pub project: PathBuf,

    /// JSON output path (defaults to <PROJECT>/upgrade_analysis.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a Markdown report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MigrateImportsArgs {
    /// Source directory to rewrite
    pub src: PathBuf,

    /// Count replacements without modifying any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct UpgradePomArgs {
    /// Descriptor to upgrade
    pub pom: PathBuf,

    /// parent-inheritance or bom-import
    #[arg(long, value_parser = parse_strategy, conflicts_with = "use_parent")]
    pub strategy: Option<Strategy>,

    /// Shorthand for --strategy parent-inheritance
    #[arg(long)]
    pub use_parent: bool,

    /// Do not write a timestamped backup first
    #[arg(long)]
    pub no_backup: bool,
}

impl UpgradePomArgs {
    pub fn effective_strategy(&self) -> Strategy {
        match (self.use_parent, self.strategy) {
            (true, _) => Strategy::ParentInheritance,
            (false, Some(strategy)) => strategy,
            (false, None) => Strategy::default(),
        }
    }
}

fn parse_strategy(value: &str) -> Result<Strategy, uplift_transform::descriptor::ParseStrategyError> {
    value.parse()
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalFlags {
    pub config: Option<PathBuf>,
    pub quiet: bool,
}

impl Cli {
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            config: self.config.clone(),
            quiet: self.quiet,
        }
    }
}
