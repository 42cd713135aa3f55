use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting KAPE definitions.
///
/// Every variant is fatal: a conversion run stops at the first one.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The definition file is not valid YAML or lacks its `Targets` list
    #[error("Failed to parse KAPE file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A compound target names a definition that is nowhere under the input root
    #[error("Could not find compound target {name} under {search_root}")]
    ReferenceNotFound { name: String, search_root: PathBuf },

    /// A compound target eventually references itself
    #[error("Compound target {path} references itself")]
    ReferenceCycle { path: PathBuf },

    /// A target is missing a field that has no default
    #[error("Target in {path} is missing required field {field}")]
    MissingField { path: PathBuf, field: &'static str },

    /// A target field is present but its value cannot be used
    #[error("Target in {path} has invalid {field} value {value}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    /// Reading a definition or writing an output failed
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolved document could not be represented as TOML
    #[error("Failed to serialize {path} to TOML: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    /// A directory could not be traversed
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The conversion options are unusable
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl ConvertError {
    /// Wrap an I/O error with the path it happened at
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
