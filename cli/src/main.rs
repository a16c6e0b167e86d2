//! CLI entrypoint for dpr-gold
//!
//! This is the main binary that resolves configuration, initializes logging,
//! and wires the file adapters into the conversion use case.

use anyhow::{Context, Result};
use clap::Parser;
use dpr_gold_application::{ConvertProgressNotifier, NoProgress};
use dpr_gold_infrastructure::{ConfigLoader, convert_with_progress};
use dpr_gold_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        debug!("Skipping config files and environment (--no-config)");
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let config = file_config
        .with_overrides(cli.src_path, cli.gold_data_path)
        .into_convert_config()?;

    info!(
        "Converting {} into {}",
        config.src_path.display(),
        config.gold_data_path.display()
    );

    // === Conversion ===
    let progress: Box<dyn ConvertProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let output = match convert_with_progress(&config, progress.as_ref()) {
        Ok(output) => output,
        Err(e) => {
            let label = ConsoleFormatter::error_label(&e);
            return Err(anyhow::Error::new(e).context(label));
        }
    };

    if !cli.quiet {
        println!("{}", ConsoleFormatter::format_summary(&output));
    }

    Ok(())
}
