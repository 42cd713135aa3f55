use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::converter::index::ReferenceIndex;
use crate::converter::targets::{is_reference_path, normalize_target};
use crate::error::{ConvertError, Result};
use crate::models::{DefinitionDocument, OutputDocument, TargetEntry};

/// Read and parse a KAPE target definition
pub fn load_definition(path: &Path) -> Result<DefinitionDocument> {
    let content = fs::read_to_string(path).map_err(|err| ConvertError::filesystem(path, err))?;

    let definition: DefinitionDocument =
        serde_yaml::from_str(&content).map_err(|source| ConvertError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded {} with {} targets",
        path.display(),
        definition.targets.len()
    );
    Ok(definition)
}

/// Resolves definitions into fully defaulted, reference-free documents.
///
/// Compound targets are bundled by resolving the definition they name with the
/// same resolver, so nesting works to any depth.
pub struct Resolver<'a> {
    index: &'a ReferenceIndex,
    quiet: bool,
    // Definitions currently being resolved, outermost first
    in_progress: Vec<PathBuf>,
    references_inlined: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a ReferenceIndex, quiet: bool) -> Self {
        Resolver {
            index,
            quiet,
            in_progress: Vec::new(),
            references_inlined: 0,
        }
    }

    /// Number of compound targets bundled so far
    pub fn references_inlined(&self) -> usize {
        self.references_inlined
    }

    /// Resolve the definition at `path` without writing anything.
    ///
    /// The resulting targets are the definition's own targets in file order,
    /// followed by the resolved targets of each compound target in the order
    /// they were encountered.
    pub fn resolve(&mut self, path: &Path) -> Result<OutputDocument> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if self.in_progress.contains(&key) {
            return Err(ConvertError::ReferenceCycle {
                path: path.to_path_buf(),
            });
        }

        self.in_progress.push(key);
        let result = self.resolve_definition(path);
        self.in_progress.pop();
        result
    }

    fn resolve_definition(&mut self, path: &Path) -> Result<OutputDocument> {
        let definition = load_definition(path)?;

        let mut targets = Vec::with_capacity(definition.targets.len());
        let mut bundled = Vec::new();

        for raw in &definition.targets {
            let target = normalize_target(raw, path)?;

            if is_reference_path(&target.path) {
                bundled.extend(self.resolve_reference(&target)?);
                continue;
            }
            targets.push(target);
        }

        targets.extend(bundled);
        Ok(OutputDocument::from_metadata(&definition, targets))
    }

    fn resolve_reference(&mut self, target: &TargetEntry) -> Result<Vec<TargetEntry>> {
        if !self.quiet {
            info!(
                "Found compound target: {}. Category is '{}'. Going to bundle all the tkape files in '{}' into one TOML file",
                target.path,
                target.category.as_deref().unwrap_or_default(),
                target.path
            );
        }

        let reference = self.index.find(&target.path)?.to_path_buf();
        let nested = self.resolve(&reference)?;
        self.references_inlined += 1;
        Ok(nested.targets)
    }
}
