use std::path::PathBuf;

use log::info;

/// What a conversion run produced.
///
/// Outputs are kept in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// `(definition, collection)` pairs
    pub outputs: Vec<(PathBuf, PathBuf)>,
    /// Compound targets bundled across the whole run
    pub references_inlined: usize,
}

impl ConversionSummary {
    pub fn record(&mut self, definition: PathBuf, destination: PathBuf) {
        self.outputs.push((definition, destination));
    }

    /// Number of TOML collections written
    pub fn converted(&self) -> usize {
        self.outputs.len()
    }

    /// Log every written collection
    pub fn log_summary(&self) {
        for (definition, destination) in &self.outputs {
            info!("{} -> {}", definition.display(), destination.display());
        }
        info!(
            "{} collections written, {} compound targets bundled",
            self.converted(),
            self.references_inlined
        );
    }
}
