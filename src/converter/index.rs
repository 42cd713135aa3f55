use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{ConvertError, Result};

/// Case-insensitive lookup of definition files by file name.
///
/// Compound targets only name the file they bundle (`Amcache.tkape`), and that
/// file may live in any folder of the KAPE tree, so the whole input root is
/// indexed once per run. KAPE file names differ in case from the references
/// that point at them, hence the lowercase keys.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    search_root: PathBuf,
    files: HashMap<String, PathBuf>,
}

impl ReferenceIndex {
    /// Index every file under `search_root`, including disabled definitions.
    ///
    /// Entries are visited depth-first in file-name order; when two files share
    /// a name, the first one visited wins.
    pub fn build(search_root: &Path) -> Result<Self> {
        let mut files = HashMap::new();

        for entry in WalkDir::new(search_root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let key = entry.file_name().to_string_lossy().to_lowercase();
            files.entry(key).or_insert_with(|| entry.into_path());
        }

        debug!(
            "Indexed {} files under {}",
            files.len(),
            search_root.display()
        );

        Ok(ReferenceIndex {
            search_root: search_root.to_path_buf(),
            files,
        })
    }

    /// Find the definition a compound target points at
    pub fn find(&self, name: &str) -> Result<&Path> {
        self.files
            .get(&name.to_lowercase())
            .map(PathBuf::as_path)
            .ok_or_else(|| ConvertError::ReferenceNotFound {
                name: name.to_string(),
                search_root: self.search_root.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
