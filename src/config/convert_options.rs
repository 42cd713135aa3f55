use std::path::PathBuf;

use crate::error::{ConvertError, Result};

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Root of the KAPE tree (usually the `Targets` folder or its parent)
    pub input: PathBuf,
    /// Directory the TOML collections are written under
    pub output: PathBuf,
    /// Also convert definitions inside `!Disabled` folders
    pub include_disabled: bool,
    /// Suppress per-target progress messages
    pub quiet: bool,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        ConvertOptions {
            input: input.into(),
            output: output.into(),
            include_disabled: false,
            quiet: false,
        }
    }

    pub fn include_disabled(mut self, include_disabled: bool) -> Self {
        self.include_disabled = include_disabled;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Check the input root is a directory
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_dir() {
            return Err(ConvertError::InvalidOptions(format!(
                "input path {} is not a directory",
                self.input.display()
            )));
        }

        Ok(())
    }
}
