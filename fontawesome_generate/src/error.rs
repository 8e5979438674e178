//! Errors raised while loading a configuration and its icon metadata.

use std::path::PathBuf;

use thiserror::Error;

/// Why an icon set could not be loaded. Every variant aborts the load; no partial set is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing icon metadata reference (`icon_meta`) in '{}'", .path.display())]
    MissingIconMeta { path: PathBuf },
    #[error("icon metadata file '{}' named in the configuration could not be found", .0.display())]
    NotFound(PathBuf),
    #[error("reading '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{} malformed icon record(s) in '{}':\n{}", .errors.len(), .path.display(), list_records(.errors))]
    InvalidRecords { path: PathBuf, errors: Vec<RecordError> },
}

/// A single icon record that failed to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("icon '{id}': {reason}")]
pub struct RecordError {
    pub id: String,
    pub reason: String,
}

fn list_records(errors: &[RecordError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}
