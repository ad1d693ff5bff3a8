//! Human-readable summaries on stdout.

use std::path::Path;

use uplift_analysis::{AnalysisReport, RiskLevel, Topology};
use uplift_transform::{MigrationStats, UpgradeSummary};

const RULE: &str = "============================================================";

pub fn print_analysis(report: &AnalysisReport, json_path: &Path, report_path: Option<&Path>) {
    let s = &report.structure;
    let v = &report.versions;
    let w = &report.workload_estimate;

    println!("Project: {}", report.project_name);
    println!("{RULE}");
    println!(
        "Structure: {} ({} descriptors, {} java files, spring boot: {})",
        match s.topology {
            Topology::SingleModule => "single-module",
            Topology::MultiModule => "multi-module",
        },
        s.pom_count,
        s.java_files_count,
        if s.is_spring_boot { "yes" } else { "no" }
    );
    println!("JDK:          {}", v.java.as_deref().unwrap_or("not declared"));
    println!("Spring Boot:  {}", v.spring_boot.as_deref().unwrap_or("not used"));
    println!("Spring Cloud: {}", v.spring_cloud.as_deref().unwrap_or("not used"));

    if !report.namespace_usage.is_empty() {
        println!("\njavax usage:");
        for (namespace, count) in &report.namespace_usage {
            println!("  {namespace}: {count} files");
        }
    }
    for usage in &report.deprecated_apis {
        println!("Deprecated API {}: {} files", usage.api, usage.files.len());
    }

    println!("\nRisks:");
    if report.risks.is_empty() {
        println!("  none");
    }
    for risk in &report.risks {
        let marker = match risk.level {
            RiskLevel::High => "!!",
            RiskLevel::Medium => "! ",
            RiskLevel::Low => "  ",
        };
        println!("  {marker} [{}] {}", risk.level, risk.item);
        println!("       {}", risk.description);
    }

    println!("\nWorkload:");
    println!("  estimated hours:     {}", w.estimated_hours);
    println!("  estimated days:      {}", w.estimated_days);
    println!("  automation coverage: {}%", w.automation_coverage_percent);
    println!("  manual work hours:   {}", w.manual_work_hours);

    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    println!("\nAnalysis written to {}", json_path.display());
    if let Some(path) = report_path {
        println!("Report written to {}", path.display());
    }
}

pub fn print_migration(stats: &MigrationStats, stats_path: Option<&Path>) {
    if stats.dry_run {
        println!("[dry run] no files were modified");
    }
    for change in &stats.changed_files {
        println!("  {} ({} replacements)", change.path, change.replacements);
    }
    println!("{RULE}");
    println!("Total files:        {}", stats.total_files);
    println!("Modified files:     {}", stats.modified_files);
    println!("Total replacements: {}", stats.total_replacements);

    let packages = stats.packages_by_count();
    if !packages.is_empty() {
        println!("\nBy package:");
        for (namespace, count) in packages {
            println!("  {namespace}: {count}");
        }
    }
    for warning in &stats.warnings {
        println!("warning: {warning}");
    }
    if let Some(path) = stats_path {
        println!("\nStats written to {}", path.display());
    }
}

pub fn print_upgrade(summary: &UpgradeSummary) {
    println!("Upgraded {} ({})", summary.path.display(), summary.strategy);
    if let Some(backup) = &summary.backup {
        println!("  backup: {}", backup.display());
    }
    for property in &summary.properties {
        match &property.previous {
            Some(previous) => println!("  property {}: {previous} -> {}", property.key, property.value),
            None => println!("  property {}: {} (added)", property.key, property.value),
        }
    }
    for bump in &summary.dependencies {
        println!(
            "  dependency {}:{} -> {}",
            bump.group_id, bump.artifact_id, bump.version
        );
    }
    if summary.compiler_plugin_installed {
        println!("  compiler plugin installed");
    }
    println!("Verify with: mvn clean compile");
}
