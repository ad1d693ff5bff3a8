use anyhow::Context;
use uplift_analysis::analyze;
use uplift_core::constants::ANALYSIS_OUTPUT_FILE;

use crate::cli::{AnalyzeArgs, GlobalFlags};
use crate::output;

pub fn handle(args: &AnalyzeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::ensure_exists(&args.project, "project directory")?;
    let config = super::load_config(flags, &args.project)?;

    let report = analyze(&args.project, &config)
        .with_context(|| format!("failed to analyze {}", args.project.display()))?;

    let json_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.project.join(ANALYSIS_OUTPUT_FILE));
    let json = report.to_json().context("failed to serialize analysis report")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    if let Some(report_path) = &args.report {
        std::fs::write(report_path, report.to_markdown())
            .with_context(|| format!("failed to write {}", report_path.display()))?;
    }

    if !flags.quiet {
        output::print_analysis(&report, &json_path, args.report.as_deref());
    }
    Ok(())
}
