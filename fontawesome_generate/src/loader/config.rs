//! Root configuration loading.
//!
//! The root document is usually a site `_config.yml` carrying plenty of keys
//! that have nothing to do with icons; those are ignored.

use std::path::{Path, PathBuf};

use fontawesome_data::ConfigDef;
use log::debug;
use serde_yaml::{Mapping, Value};

use super::document::{lowercase_keys, read_yaml};
use crate::error::LoadError;

/// Load and check the root configuration document.
///
/// Field names are matched case-insensitively. An empty document is treated as an empty mapping.
///
/// # Errors
/// - `Read` / `Parse` on IO or YAML errors, or field names that differ only by case
/// - `MissingIconMeta` if `icon_meta` is absent or blank
pub fn load_config(path: &Path) -> Result<ConfigDef, LoadError> {
    let document = match read_yaml(path)? {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    };
    let config: ConfigDef = lowercase_keys(document)
        .and_then(serde_yaml::from_value)
        .map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if config.icon_meta.trim().is_empty() {
        return Err(LoadError::MissingIconMeta {
            path: path.to_path_buf(),
        });
    }
    debug!("configuration loaded from '{}': {config:?}", path.display());
    Ok(config)
}

/// Resolve `icon_meta` against the directory holding the root document.
///
/// # Errors
/// - `MissingIconMeta` if `icon_meta` is blank
/// - `NotFound` if the resolved file does not exist
pub fn resolve_icon_meta_path(root: &Path, config: &ConfigDef) -> Result<PathBuf, LoadError> {
    let relative = config.icon_meta.trim();
    if relative.is_empty() {
        return Err(LoadError::MissingIconMeta {
            path: root.to_path_buf(),
        });
    }
    let base = root.parent().unwrap_or_else(|| Path::new(""));
    let resolved = base.join(relative);
    if !resolved.is_file() {
        return Err(LoadError::NotFound(resolved));
    }
    Ok(resolved)
}
