use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::constants::OUTPUT_EXTENSION;
use crate::converter::resolver::Resolver;
use crate::error::{ConvertError, Result};
use crate::models::OutputDocument;

/// Where the TOML file for `definition` goes.
///
/// The definition's directory is mirrored below `output_root`. Root, drive
/// prefix, `.` and `..` components are dropped so the result never escapes
/// the output root.
pub fn output_path_for(output_root: &Path, definition: &Path) -> PathBuf {
    let mut destination = output_root.to_path_buf();

    if let Some(parent) = definition.parent() {
        for component in parent.components() {
            if let Component::Normal(part) = component {
                destination.push(part);
            }
        }
    }

    // Stems may contain dots of their own, so the extension is appended
    let mut file_name = definition
        .file_stem()
        .unwrap_or(definition.as_os_str())
        .to_os_string();
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);
    destination.push(file_name);
    destination
}

/// Serialize a resolved document to `destination`, replacing any existing file
pub fn write_output(document: &OutputDocument, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|err| ConvertError::filesystem(parent, err))?;
    }

    let content = toml::to_string(document).map_err(|source| ConvertError::Serialize {
        path: destination.to_path_buf(),
        source,
    })?;

    fs::write(destination, content).map_err(|err| ConvertError::filesystem(destination, err))?;
    debug!("Wrote {}", destination.display());
    Ok(())
}

/// Resolve one definition and write its TOML collection below `output_root`.
///
/// Returns the path of the written file.
pub fn emit(resolver: &mut Resolver<'_>, definition: &Path, output_root: &Path) -> Result<PathBuf> {
    let document = resolver.resolve(definition)?;
    let destination = output_path_for(output_root, definition);
    write_output(&document, &destination)?;
    Ok(destination)
}
