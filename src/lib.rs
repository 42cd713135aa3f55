//! # kape2toml
//!
//! Converts KAPE target definitions (`.tkape` YAML files) into TOML
//! collections that artemis can run.
//!
//! ## Overview
//!
//! A KAPE tree is walked for target definitions. Each definition is parsed,
//! every target gets its KAPE defaults made explicit, and compound targets
//! (targets whose `Path` is just another `.tkape` file name) are replaced by
//! the targets of the definition they name. One TOML file is written per
//! definition, mirroring the input folder layout.
//!
//! ## Usage
//!
//! ```no_run
//! use kape2toml::config::ConvertOptions;
//! use kape2toml::converter::convert_tree;
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = ConvertOptions::new("KapeFiles/Targets", "collections")
//!     .include_disabled(false)
//!     .quiet(true);
//!
//! let summary = convert_tree(&options)?;
//! println!("Converted {} KAPE files", summary.converted());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Conversion options
//! - [`converter`]: Discovery, resolution and TOML output
//! - [`models`]: KAPE definitions and the TOML documents they become
//! - [`error`]: Conversion errors
//! - [`utils`]: Run summaries
//! - [`constants`]: KAPE naming conventions and target defaults

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Conversion run options
pub mod config;

/// KAPE naming conventions and target defaults
pub mod constants;

/// Discovery, resolution and TOML output
pub mod converter;

/// Conversion errors
pub mod error;

/// KAPE definitions and TOML output documents
pub mod models;

/// Run summaries
pub mod utils;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
