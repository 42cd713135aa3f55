use clap::Parser;
use std::path::PathBuf;

use crate::config::ConvertOptions;

/// Command-line arguments for kape2toml.
#[derive(Parser, Debug)]
#[clap(
    name = "kape2toml",
    about = "Convert KAPE files to TOML format",
    after_help = "Created for artemis: https://github.com/puffyCid/artemis"
)]
pub struct Args {
    /// Path to the KapeFiles folder
    #[clap(short, long)]
    pub input: PathBuf,

    /// Path to save the TOML files
    #[clap(short, long)]
    pub output: PathBuf,

    /// Include the disabled KAPE files
    #[clap(short, long)]
    pub enable: bool,

    /// Suppress log messages
    #[clap(short, long)]
    pub quiet: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Options for the conversion run described by these arguments
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new(&self.input, &self.output)
            .include_disabled(self.enable)
            .quiet(self.quiet)
    }
}
