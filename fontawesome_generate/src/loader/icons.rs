//! Icon metadata loading.
//!
//! The metadata document is one mapping from icon id to record. It is
//! deserialized straight from the text rather than through `serde_yaml::Value`,
//! so plain scalars such as `1.50` or `00` keep their exact spelling as ids,
//! labels and version tags.
//!
//! When that pass fails, the document is walked a second time record by record
//! so that every bad record can be reported at once.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use fontawesome_data::{IconDef, IconEntry};
use log::debug;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_yaml::Value;

use super::document::read_text;
use crate::error::{LoadError, RecordError};

/// Load every icon from the metadata file at `path`, in document order.
///
/// # Errors
/// - `Read` / `Parse` if the file cannot be read or is not a YAML mapping
/// - `InvalidRecords` if one or more records are malformed
pub fn load_icons(path: &Path) -> Result<Vec<IconEntry>, LoadError> {
    let text = read_text(path)?;
    parse_icons(&text, path)
}

/// Parse icon metadata text; `path` is only used in error messages.
///
/// ```
/// use std::path::Path;
/// use fontawesome_generate::loader::parse_icons;
///
/// let icons = parse_icons("hand-rock:\n  label: Rock\n1.50:\n  label: One and a half\n", Path::new("icons.yml")).unwrap();
/// let ids: Vec<&str> = icons.iter().map(|icon| icon.id()).collect();
/// assert_eq!(ids, ["hand-rock", "1.50"]);
/// assert_eq!(icons[1].safe_name(), "_150");
/// ```
///
/// # Errors
/// - `Parse` if the text is not a YAML mapping, or an id appears twice
/// - `InvalidRecords` if one or more records are malformed
pub fn parse_icons(text: &str, path: &Path) -> Result<Vec<IconEntry>, LoadError> {
    let records = match serde_yaml::from_str::<Option<Entries<Record>>>(text) {
        Ok(records) => records.map(|entries| entries.0).unwrap_or_default(),
        Err(err) => return Err(diagnose(text, path, err)),
    };

    let icons = records
        .into_iter()
        .map(|(id, Record(def))| {
            debug!("icon '{id}' read from '{}'", path.display());
            IconEntry::new(id, def)
        })
        .collect();
    Ok(icons)
}

/// Work out which records broke the first pass.
///
/// Each record is re-read on its own; only shape errors matter here, so going
/// through `Value` is fine. Errors that are not tied to a record come back as `Parse`.
fn diagnose(text: &str, path: &Path, first_error: serde_yaml::Error) -> LoadError {
    let parse_error = |source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let entries = match serde_yaml::from_str::<Option<Entries<Value>>>(text) {
        Ok(entries) => entries.map(|entries| entries.0).unwrap_or_default(),
        Err(err) => return parse_error(err),
    };

    let errors: Vec<RecordError> = entries
        .into_iter()
        .filter_map(|(id, value)| {
            let reason = serde_yaml::to_string(&value)
                .and_then(|record| serde_yaml::from_str::<Record>(&record))
                .err()?;
            Some(RecordError {
                id,
                reason: reason.to_string(),
            })
        })
        .collect();

    if errors.is_empty() {
        return parse_error(first_error);
    }
    LoadError::InvalidRecords {
        path: path.to_path_buf(),
        errors,
    }
}

/// Mapping entries in document order, keyed by the raw key text.
struct Entries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping from icon id to icon record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(id) = map.next_key::<String>()? {
            if !seen.insert(id.clone()) {
                return Err(de::Error::custom(format!("icon id '{id}' appears more than once")));
            }
            let value = map.next_value::<V>()?;
            entries.push((id, value));
        }
        Ok(Entries(entries))
    }
}

/// One icon record with field names matched case-insensitively.
struct Record(IconDef);

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an icon record mapping")
    }

    /// `bath:` with nothing under it.
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Record(IconDef::default()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut def = IconDef::default();
        let mut seen = HashSet::new();
        while let Some(name) = map.next_key::<String>()? {
            let field = name.to_lowercase();
            if !seen.insert(field.clone()) {
                return Err(de::Error::custom(format!(
                    "field '{name}' repeats '{field}' (field names ignore case)"
                )));
            }
            match field.as_str() {
                "changes" => def.changes = map.next_value::<Option<Vec<String>>>()?.unwrap_or_default(),
                "label" => def.label = map.next_value::<Option<String>>()?.unwrap_or_default(),
                "search" => {
                    let search = map.next_value::<Option<BTreeMap<String, Option<Vec<String>>>>>()?;
                    def.search = search
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(category, terms)| (category, terms.unwrap_or_default()))
                        .collect();
                },
                "styles" => def.styles = map.next_value::<Option<Vec<String>>>()?.unwrap_or_default(),
                "unicode" => def.unicode = map.next_value::<Option<String>>()?.unwrap_or_default(),
                "voted" => def.voted = map.next_value::<Option<bool>>()?.unwrap_or_default(),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                },
            }
        }
        Ok(Record(def))
    }
}
