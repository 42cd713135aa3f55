//! KAPE target conversion pipeline.
//!
//! The [`walker`] discovers `.tkape` definitions, the [`resolver`] turns each
//! one into a fully defaulted document (bundling compound targets through the
//! [`index`]), and the [`writer`] emits the TOML collection.
//!
//! ## Example
//!
//! ```no_run
//! use kape2toml::config::ConvertOptions;
//! use kape2toml::converter::convert_tree;
//!
//! # fn example() -> kape2toml::error::Result<()> {
//! let options = ConvertOptions::new("KapeFiles", "collections").include_disabled(false);
//! let summary = convert_tree(&options)?;
//! println!("Converted {} files", summary.converted());
//! # Ok(())
//! # }
//! ```

pub mod index;
pub mod resolver;
pub mod targets;
pub mod walker;
pub mod writer;

pub use index::ReferenceIndex;
pub use resolver::{load_definition, Resolver};
pub use walker::{convert_tree, discover};
pub use writer::{emit, output_path_for, write_output};

use std::path::Path;

use crate::error::Result;
use crate::models::OutputDocument;

/// Resolve a single definition, searching `search_root` for compound targets
pub fn resolve(path: &Path, search_root: &Path, quiet: bool) -> Result<OutputDocument> {
    let index = ReferenceIndex::build(search_root)?;
    Resolver::new(&index, quiet).resolve(path)
}
