//! Loader for a Font Awesome configuration and the icon metadata it names.
//!
//! The root document is read first; its `icon_meta` entry points at the icon
//! metadata file, resolved relative to the root document's directory.

pub mod config;
pub mod document;
pub mod icons;

use std::path::Path;

use fontawesome_data::validate_icons;
use log::{info, warn};

use crate::error::LoadError;
use crate::icon_set::IconSet;
pub use config::{load_config, resolve_icon_meta_path};
pub use icons::{load_icons, parse_icons};

/// Load the configuration at `root` together with every icon it references.
///
/// Icons keep the key order of the metadata document. Validation findings
/// (symbol collisions, odd codepoints) are logged as warnings and do not fail the load.
///
/// # Errors
/// - `MissingIconMeta` if the configuration names no icon metadata file
/// - `NotFound` if the named file does not exist
/// - `Read` / `Parse` on IO or YAML errors in either document
/// - `InvalidRecords` if any icon record is malformed
pub fn load_icon_set(root: &Path) -> Result<IconSet, LoadError> {
    let config = load_config(root)?;
    let icon_path = resolve_icon_meta_path(root, &config)?;
    info!("icon metadata for '{}' resolved to '{}'", root.display(), icon_path.display());

    let icons = load_icons(&icon_path)?;
    info!("{} icons loaded from '{}'", icons.len(), icon_path.display());

    let findings = validate_icons(&icons);
    for finding in &findings {
        warn!("{finding}");
    }
    if !findings.is_empty() {
        warn!("{} validation warning(s) in '{}'", findings.len(), icon_path.display());
    }

    Ok(IconSet::new(config, icons))
}
