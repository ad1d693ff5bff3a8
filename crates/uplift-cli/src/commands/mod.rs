pub mod analyze;
pub mod imports;
pub mod upgrade;

use std::path::Path;

use anyhow::Context;
use uplift_core::UpliftConfig;

use crate::cli::GlobalFlags;

/// `--config` if given, else `<root>/uplift.toml` if present, else defaults.
pub fn load_config(flags: &GlobalFlags, root: &Path) -> anyhow::Result<UpliftConfig> {
    UpliftConfig::load(root, flags.config.as_deref()).with_context(|| match &flags.config {
        Some(path) => format!("failed to load config {}", path.display()),
        None => format!("failed to load config for {}", root.display()),
    })
}

pub fn ensure_exists(path: &Path, what: &str) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("{what} does not exist: {}", path.display());
    }
    Ok(())
}
