use serde::{Deserialize, Serialize};

/// A KAPE target definition (`.tkape`) as it is read from disk.
///
/// Metadata is taken verbatim. The targets stay loosely typed until
/// [`crate::converter::targets::normalize_target`] turns them into
/// [`TargetEntry`] records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefinitionDocument {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub recreate_directories: Option<bool>,
    pub targets: Vec<serde_yaml::Mapping>,
}

/// KAPE versions are written either as numbers (`1.1`) or strings (`"1.0"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Version {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// A single target with every KAPE default made explicit.
///
/// Keys KAPE gives meaning to are typed fields. Anything else the definition
/// carries (`Comment`, `MinSize`, `SaveAsFileName`, ...) is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub path: String,
    pub file_mask: String,
    pub recursive: bool,
    pub always_add_to_queue: bool,
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// The TOML collection written for one definition file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recreate_directories: Option<bool>,
    pub targets: Vec<TargetEntry>,
}

impl OutputDocument {
    /// Copy the metadata of a definition; targets are filled in by the resolver
    pub fn from_metadata(definition: &DefinitionDocument, targets: Vec<TargetEntry>) -> Self {
        OutputDocument {
            description: definition.description.clone(),
            author: definition.author.clone(),
            version: definition.version.clone(),
            id: definition.id.clone(),
            recreate_directories: definition.recreate_directories,
            targets,
        }
    }
}
