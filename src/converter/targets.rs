use std::path::Path;

use log::warn;
use serde_yaml::{Mapping, Value};

use crate::constants::{
    DEFAULT_ALWAYS_ADD_TO_QUEUE, DEFAULT_FILE_MASK, DEFAULT_RECURSIVE, TARGET_EXTENSION,
    USER_PLACEHOLDER, USER_WILDCARD,
};
use crate::error::{ConvertError, Result};
use crate::models::TargetEntry;

/// Replace every user placeholder in string values with a wildcard.
///
/// Sequences and nested mappings are walked; other scalars are returned as-is.
pub fn substitute_user_placeholder(value: Value) -> Value {
    match value {
        Value::String(text) if text.contains(USER_PLACEHOLDER) => {
            Value::String(text.replace(USER_PLACEHOLDER, USER_WILDCARD))
        }
        Value::Sequence(items) => Value::Sequence(
            items.into_iter().map(substitute_user_placeholder).collect(),
        ),
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, substitute_user_placeholder(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Check whether a target path is a bare reference to another definition file.
///
/// KAPE paths are Windows paths, so both `\` and `/` separate components no
/// matter which OS runs the conversion. A path with directory segments that
/// ends in `.tkape` is a request to acquire the file itself.
pub fn is_reference_path(path: &str) -> bool {
    let components = path
        .split(['\\', '/'])
        .filter(|component| !component.is_empty())
        .count();

    components == 1 && path.ends_with(&format!(".{TARGET_EXTENSION}"))
}

/// Turn a raw target mapping into a [`TargetEntry`] with KAPE defaults filled in.
///
/// `source` is the definition the target came from and is only used for errors.
pub fn normalize_target(raw: &Mapping, source: &Path) -> Result<TargetEntry> {
    let mut name = None;
    let mut category = None;
    let mut path = None;
    let mut file_mask = None;
    let mut recursive = None;
    let mut always_add_to_queue = None;
    let mut extra = toml::Table::new();

    for (key, value) in raw {
        let Some(key) = key_to_string(key) else {
            warn!("Skipping target key that is not a scalar in {}", source.display());
            continue;
        };

        let value = substitute_user_placeholder(value.clone());
        if value.is_null() {
            continue;
        }

        match key.as_str() {
            "Name" => name = scalar_to_string(&value),
            "Category" => category = scalar_to_string(&value),
            "Path" => match value {
                Value::String(text) => path = Some(text),
                other => return Err(invalid_field(source, "Path", &other)),
            },
            "FileMask" => file_mask = scalar_to_string(&value),
            "Recursive" => recursive = Some(flag(&value, "Recursive", source)?),
            "AlwaysAddToQueue" => {
                always_add_to_queue = Some(flag(&value, "AlwaysAddToQueue", source)?)
            }
            _ => {
                if let Some(converted) = yaml_to_toml(&value) {
                    extra.insert(key, converted);
                }
            }
        }
    }

    let path = path.ok_or_else(|| ConvertError::MissingField {
        path: source.to_path_buf(),
        field: "Path",
    })?;

    Ok(TargetEntry {
        name,
        category,
        path,
        file_mask: file_mask.unwrap_or_else(|| DEFAULT_FILE_MASK.to_string()),
        recursive: recursive.unwrap_or(DEFAULT_RECURSIVE),
        always_add_to_queue: always_add_to_queue.unwrap_or(DEFAULT_ALWAYS_ADD_TO_QUEUE),
        extra,
    })
}

/// Convert a YAML value into its TOML equivalent.
///
/// TOML has no null, so nulls (and null items inside sequences) are dropped.
pub fn yaml_to_toml(value: &Value) -> Option<toml::Value> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(toml::Value::Boolean(*flag)),
        Value::Number(number) => number
            .as_i64()
            .map(toml::Value::Integer)
            .or_else(|| number.as_f64().map(toml::Value::Float)),
        Value::String(text) => Some(toml::Value::String(text.clone())),
        Value::Sequence(items) => Some(toml::Value::Array(
            items.iter().filter_map(yaml_to_toml).collect(),
        )),
        Value::Mapping(map) => {
            let table = map
                .iter()
                .filter_map(|(key, value)| Some((key_to_string(key)?, yaml_to_toml(value)?)))
                .collect();
            Some(toml::Value::Table(table))
        }
        Value::Tagged(tagged) => yaml_to_toml(&tagged.value),
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => scalar_to_string(key),
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Read a KAPE boolean.
///
/// KAPE files are YAML 1.1, so `yes`/`no`, `on`/`off` and `y`/`n` are booleans
/// there, as are the integers `0` and `1`. Anything else is rejected.
fn flag(value: &Value, field: &'static str, source: &Path) -> Result<bool> {
    let parsed = match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "on" => Some(true),
            "false" | "no" | "n" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    };

    parsed.ok_or_else(|| invalid_field(source, field, value))
}

fn invalid_field(source: &Path, field: &'static str, value: &Value) -> ConvertError {
    let value = serde_yaml::to_string(value)
        .map(|text| text.trim_end().to_string())
        .unwrap_or_else(|_| format!("{value:?}"));

    ConvertError::InvalidField {
        path: source.to_path_buf(),
        field,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn source() -> PathBuf {
        PathBuf::from("Targets/Windows/Test.tkape")
    }

    #[test]
    fn test_defaults_are_filled() {
        let raw = mapping(
            r#"
Name: A
Category: Cat
Path: C:\foo
"#,
        );

        let target = normalize_target(&raw, &source()).unwrap();
        assert_eq!(target.name.as_deref(), Some("A"));
        assert_eq!(target.category.as_deref(), Some("Cat"));
        assert_eq!(target.path, r"C:\foo");
        assert_eq!(target.file_mask, "*");
        assert!(!target.recursive);
        assert!(!target.always_add_to_queue);
        assert!(target.extra.is_empty());
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let raw = mapping(
            r#"
Name: Amcache
Category: ApplicationCompatibility
Path: C:\Windows\AppCompat\Programs\
FileMask: Amcache.hve
Recursive: true
AlwaysAddToQueue: true
Comment: Locked file
MinSize: 1024
"#,
        );

        let target = normalize_target(&raw, &source()).unwrap();
        assert_eq!(target.file_mask, "Amcache.hve");
        assert!(target.recursive);
        assert!(target.always_add_to_queue);
        assert_eq!(
            target.extra.get("Comment"),
            Some(&toml::Value::String("Locked file".to_string()))
        );
        assert_eq!(target.extra.get("MinSize"), Some(&toml::Value::Integer(1024)));
    }

    #[test]
    fn test_null_values_count_as_absent() {
        let raw = mapping(
            r#"
Name: Empty mask
Path: C:\Temp\
FileMask:
Comment:
"#,
        );

        let target = normalize_target(&raw, &source()).unwrap();
        assert_eq!(target.file_mask, "*");
        assert!(!target.extra.contains_key("Comment"));
    }

    #[test]
    fn test_user_placeholder_replaced_in_every_field() {
        let raw = mapping(
            r#"
Name: "%user% NTUSER"
Path: C:\Users\%user%\AppData\%user%\
FileMask: NTUSER.DAT
Comment: "Profile of %user%"
"#,
        );

        let target = normalize_target(&raw, &source()).unwrap();
        assert_eq!(target.name.as_deref(), Some("* NTUSER"));
        assert_eq!(target.path, r"C:\Users\*\AppData\*\");
        assert_eq!(
            target.extra.get("Comment"),
            Some(&toml::Value::String("Profile of *".to_string()))
        );
    }

    #[test]
    fn test_placeholder_is_case_sensitive() {
        let value = substitute_user_placeholder(Value::String(r"C:\Users\%USER%\".to_string()));
        assert_eq!(value, Value::String(r"C:\Users\%USER%\".to_string()));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let raw = mapping("Name: No path\n");
        let result = normalize_target(&raw, &source());
        assert!(matches!(
            result,
            Err(ConvertError::MissingField { field: "Path", .. })
        ));
    }

    #[test]
    fn test_quoted_booleans() {
        let raw = mapping(
            r#"
Path: C:\Temp\
Recursive: "True"
AlwaysAddToQueue: "FALSE"
"#,
        );

        let target = normalize_target(&raw, &source()).unwrap();
        assert!(target.recursive);
        assert!(!target.always_add_to_queue);
    }

    #[test]
    fn test_yaml_11_booleans() {
        let raw = mapping(
            r#"
Name: A
Path: C:\foo
Recursive: yes
AlwaysAddToQueue: 1
"#,
        );

        let target = normalize_target(&raw, &source()).unwrap();
        assert!(target.recursive);
        assert!(target.always_add_to_queue);

        for (text, expected) in [("On", true), ("y", true), ("off", false), ("N", false), ("no", false)] {
            let raw = mapping(&format!("Path: C:\\foo\nRecursive: {text}\n"));
            let target = normalize_target(&raw, &source()).unwrap();
            assert_eq!(target.recursive, expected, "Recursive: {text}");
        }

        let raw = mapping("Path: C:\\foo\nAlwaysAddToQueue: 0\n");
        assert!(!normalize_target(&raw, &source()).unwrap().always_add_to_queue);
    }

    #[test]
    fn test_unparseable_boolean_is_an_error() {
        let raw = mapping(
            r#"
Path: C:\Temp\
Recursive: sometimes
"#,
        );

        let result = normalize_target(&raw, &source());
        assert!(matches!(
            result,
            Err(ConvertError::InvalidField { field: "Recursive", ref value, .. }) if value == "sometimes"
        ));

        let raw = mapping("Path: C:\\Temp\\\nAlwaysAddToQueue: 2\n");
        assert!(matches!(
            normalize_target(&raw, &source()),
            Err(ConvertError::InvalidField { field: "AlwaysAddToQueue", .. })
        ));
    }

    #[test]
    fn test_non_string_path_is_invalid_not_missing() {
        let raw = mapping("Name: Numeric\nPath: 42\n");
        let result = normalize_target(&raw, &source());
        assert!(matches!(
            result,
            Err(ConvertError::InvalidField { field: "Path", ref value, .. }) if value == "42"
        ));
    }

    #[test]
    fn test_numeric_names_become_strings() {
        let raw = mapping("Name: 2020\nCategory: 7\nPath: C:\\foo\nFileMask: 1234\n");
        let target = normalize_target(&raw, &source()).unwrap();
        assert_eq!(target.name.as_deref(), Some("2020"));
        assert_eq!(target.category.as_deref(), Some("7"));
        assert_eq!(target.file_mask, "1234");
    }

    #[test]
    fn test_reference_paths() {
        assert!(is_reference_path("Amcache.tkape"));
        assert!(!is_reference_path(r"C:\KAPE\Targets\Amcache.tkape"));
        assert!(!is_reference_path("Targets/Amcache.tkape"));
        assert!(!is_reference_path(r"C:\Windows\Prefetch\"));
        assert!(!is_reference_path("Amcache.mkape"));
        assert!(!is_reference_path("Amcache.TKAPE"));
    }

    #[test]
    fn test_yaml_to_toml_drops_nulls() {
        let value: Value = serde_yaml::from_str("[1, ~, two, 3.5]").unwrap();
        let converted = yaml_to_toml(&value).unwrap();
        assert_eq!(
            converted,
            toml::Value::Array(vec![
                toml::Value::Integer(1),
                toml::Value::String("two".to_string()),
                toml::Value::Float(3.5),
            ])
        );
        assert!(yaml_to_toml(&Value::Null).is_none());
    }
}
