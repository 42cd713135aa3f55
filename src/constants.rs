//! Global constants for the kape2toml converter.
//!
//! KAPE naming conventions and the defaults KAPE applies to targets live here
//! so the walker, resolver and writer agree on them.

// File naming
/// Extension of KAPE target definition files
pub const TARGET_EXTENSION: &str = "tkape";

/// Extension of KAPE module definition files (not supported)
pub const MODULE_EXTENSION: &str = "mkape";

/// Extension of the generated collection files
pub const OUTPUT_EXTENSION: &str = "toml";

/// Directory name KAPE uses for disabled definitions
pub const DISABLED_DIR_NAME: &str = "!Disabled";

// Target defaults
// https://ericzimmerman.github.io/KapeDocs/#!Pages%5C2.1-Targets.md
/// Placeholder KAPE expands to every user profile
pub const USER_PLACEHOLDER: &str = "%user%";

/// Wildcard that replaces the user placeholder
pub const USER_WILDCARD: &str = "*";

/// FileMask used when a target does not set one
pub const DEFAULT_FILE_MASK: &str = "*";

/// Recursive value used when a target does not set one
pub const DEFAULT_RECURSIVE: bool = false;

/// AlwaysAddToQueue value used when a target does not set one
pub const DEFAULT_ALWAYS_ADD_TO_QUEUE: bool = false;
