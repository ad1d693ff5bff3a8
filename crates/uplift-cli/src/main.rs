use clap::Parser;
use uplift_core::errors::{ConfigError, DescriptorError, RewriteError, ScanError, WalkError};
use uplift_core::UpliftErrorCode;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        match error_code(&error) {
            Some(code) => eprintln!("uplift error: {error:#} [{code}]"),
            None => eprintln!("uplift error: {error:#}"),
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let level = uplift_core::tracing::default_level(cli.quiet, cli.verbose);
    uplift_core::tracing::init(level)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    let flags = cli.global_flags();
    match cli.command {
        cli::Commands::Analyze(args) => commands::analyze::handle(&args, &flags),
        cli::Commands::MigrateImports(args) => commands::imports::handle(&args, &flags),
        cli::Commands::UpgradePom(args) => commands::upgrade::handle(&args, &flags),
    }
}

/// Stable code of the first library error in the chain, if there is one.
fn error_code(error: &anyhow::Error) -> Option<&'static str> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<DescriptorError>() {
            Some(e.error_code())
        } else if let Some(e) = cause.downcast_ref::<ScanError>() {
            Some(e.error_code())
        } else if let Some(e) = cause.downcast_ref::<RewriteError>() {
            Some(e.error_code())
        } else if let Some(e) = cause.downcast_ref::<ConfigError>() {
            Some(e.error_code())
        } else {
            cause.downcast_ref::<WalkError>().map(UpliftErrorCode::error_code)
        }
    })
}
