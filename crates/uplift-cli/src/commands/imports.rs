use std::path::{Path, PathBuf};

use anyhow::Context;
use uplift_core::constants::MIGRATION_STATS_FILE;
use uplift_transform::ImportRewriter;

use crate::cli::{GlobalFlags, MigrateImportsArgs};
use crate::output;

pub fn handle(args: &MigrateImportsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::ensure_exists(&args.src, "source directory")?;
    let config = super::load_config(flags, &args.src)?;

    let rewriter = ImportRewriter::new(&config).context("invalid namespace mapping table")?;
    let stats = rewriter
        .rewrite(&args.src, args.dry_run)
        .with_context(|| format!("failed to migrate imports under {}", args.src.display()))?;

    let mut stats_path = None;
    if !args.dry_run && stats.modified_files > 0 {
        let path = stats_file(&args.src);
        let json = stats.to_json().context("failed to serialize migration stats")?;
        std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        stats_path = Some(path);
    }

    if !flags.quiet {
        output::print_migration(&stats, stats_path.as_deref());
    }
    Ok(())
}

/// Stats land next to the source directory, not inside it.
fn stats_file(src: &Path) -> PathBuf {
    let absolute = src.canonicalize().unwrap_or_else(|_| src.to_path_buf());
    absolute
        .parent()
        .map(|parent| parent.join(MIGRATION_STATS_FILE))
        .unwrap_or_else(|| PathBuf::from(MIGRATION_STATS_FILE))
}
