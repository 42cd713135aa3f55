use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::ConvertOptions;
use crate::constants::{DISABLED_DIR_NAME, TARGET_EXTENSION};
use crate::converter::index::ReferenceIndex;
use crate::converter::resolver::Resolver;
use crate::converter::writer::emit;
use crate::error::{ConvertError, Result};
use crate::utils::summary::ConversionSummary;

/// Lazily yield every target definition under `root`.
///
/// `!Disabled` folders are skipped unless `include_disabled` is set. Module
/// definitions (`.mkape`) and other files are ignored. A directory that cannot
/// be read is yielded as an error.
pub fn discover(root: &Path, include_disabled: bool) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| include_disabled || !is_disabled_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) if is_target_file(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(ConvertError::from(err))),
        })
}

fn is_disabled_dir(entry: &DirEntry) -> bool {
    // The root itself is always scanned, whatever its name
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name() == OsStr::new(DISABLED_DIR_NAME)
}

fn is_target_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.path().extension() == Some(OsStr::new(TARGET_EXTENSION))
}

/// Convert every target definition under the input root into TOML.
///
/// Each discovered definition is written as its own collection, including
/// definitions that are also bundled into a compound target. The run stops at
/// the first error.
pub fn convert_tree(options: &ConvertOptions) -> Result<ConversionSummary> {
    options.validate()?;

    let index = ReferenceIndex::build(&options.input)?;
    let mut resolver = Resolver::new(&index, options.quiet);
    let mut summary = ConversionSummary::default();

    for definition in discover(&options.input, options.include_disabled) {
        let definition = definition?;
        debug!("Converting {}", definition.display());

        let destination = emit(&mut resolver, &definition, &options.output)?;
        summary.record(definition, destination);
    }

    summary.references_inlined = resolver.references_inlined();
    if !options.quiet {
        info!(
            "Converted {} KAPE files ({} compound targets bundled)",
            summary.converted(),
            summary.references_inlined
        );
    }
    Ok(summary)
}
