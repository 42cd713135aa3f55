use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use kape2toml::cli::Args;
use kape2toml::converter::convert_tree;

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.verbose)?;

    let options = args.convert_options();
    info!("Scanning folder at {}", options.input.display());

    let summary = convert_tree(&options).with_context(|| {
        format!(
            "Failed to convert KAPE files under {}",
            options.input.display()
        )
    })?;

    if args.verbose {
        summary.log_summary();
    }

    info!(
        "KAPE files converted to TOML files at '{}'",
        options.output.display()
    );
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}
