//! module `loader::document`
//!
//! YAML reading shared by the configuration and icon loaders.

use std::{fs, path::Path};

use serde::de::Error as _;
use serde_yaml::{Mapping, Value};

use crate::error::LoadError;

/// Read a document into memory.
///
/// # Errors
/// - `Read` if the file cannot be read
pub fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a YAML document. An empty document parses as `Value::Null`.
///
/// # Errors
/// - `Read` if the file cannot be read
/// - `Parse` if the text is not valid YAML
pub fn read_yaml(path: &Path) -> Result<Value, LoadError> {
    parse_yaml(&read_text(path)?, path)
}

/// Parse YAML text that came from `path` (used only for error reporting).
///
/// # Errors
/// - `Parse` if the text is not valid YAML
pub fn parse_yaml(text: &str, path: &Path) -> Result<Value, LoadError> {
    serde_yaml::from_str(text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Lowercase string keys of every nested mapping so field names match regardless of case.
///
/// Non-mapping values are returned unchanged.
///
/// # Errors
/// - if two keys of one mapping differ only by case (`Label` and `label`)
pub fn lowercase_keys(value: Value) -> Result<Value, serde_yaml::Error> {
    let Value::Mapping(mapping) = value else {
        return Ok(value);
    };
    let mut lowered = Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match key {
            Value::String(name) => {
                let folded = name.to_lowercase();
                if lowered.contains_key(folded.as_str()) {
                    return Err(serde_yaml::Error::custom(format!(
                        "field '{name}' repeats '{folded}' (field names ignore case)"
                    )));
                }
                Value::String(folded)
            },
            other => other,
        };
        lowered.insert(key, lowercase_keys(value)?);
    }
    Ok(Value::Mapping(lowered))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        parse_yaml(text, Path::new("test.yml")).unwrap()
    }

    #[test]
    fn every_level_is_lowercased() {
        let value = lowercase_keys(yaml("Icon_Meta: a.yml\nFontAwesome:\n  URL: x\n")).unwrap();
        assert_eq!(value, yaml("icon_meta: a.yml\nfontawesome:\n  url: x\n"));
    }

    #[test]
    fn values_are_not_touched() {
        let value = lowercase_keys(yaml("label: Hand Rock\n")).unwrap();
        assert_eq!(value, yaml("label: Hand Rock\n"));
    }

    #[test]
    fn keys_differing_only_by_case_are_rejected() {
        let err = lowercase_keys(yaml("fontawesome:\n  URL: a\n  url: b\n")).unwrap_err();
        assert!(err.to_string().contains("'url'"));
    }

    #[test]
    fn empty_document_is_null() {
        assert_eq!(yaml(""), Value::Null);
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_yaml("a: [unclosed", Path::new("broken.yml")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref path, .. } if path == Path::new("broken.yml")));
    }
}
