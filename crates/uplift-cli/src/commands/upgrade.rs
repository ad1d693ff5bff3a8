use std::path::Path;

use anyhow::Context;
use uplift_transform::{DescriptorUpgrader, UpgradeOptions};

use crate::cli::{GlobalFlags, UpgradePomArgs};
use crate::output;

pub fn handle(args: &UpgradePomArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::ensure_exists(&args.pom, "descriptor")?;
    let root = args.pom.parent().unwrap_or(Path::new("."));
    let config = super::load_config(flags, root)?;

    let options = UpgradeOptions {
        strategy: args.effective_strategy(),
        create_backup: !args.no_backup,
    };
    let summary = DescriptorUpgrader::new(config.descriptor, options)
        .upgrade(&args.pom)
        .with_context(|| format!("failed to upgrade {}", args.pom.display()))?;

    if !flags.quiet {
        output::print_upgrade(&summary);
    }
    Ok(())
}
