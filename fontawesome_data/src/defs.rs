use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::safe_name::safe_name;

/// Raw icon identifier as it appears in the metadata document.
pub type Id = String;

/// Root configuration document, typically `_config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDef {
    /// Icon metadata file, relative to the directory of the root document.
    #[serde(default, deserialize_with = "or_default")]
    pub icon_meta: String,
    /// Output location for generated icon sources. Passed through untouched.
    #[serde(default)]
    pub icon_destination: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub fontawesome: FontAwesomeDef,
}

/// Font family descriptor found under the `fontawesome` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontAwesomeDef {
    #[serde(default)]
    pub doc_blob: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub author: AuthorDef,
    #[serde(default, deserialize_with = "or_default")]
    pub github: GithubDef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDef {
    #[serde(default)]
    pub name: Option<String>,
    /// Profile URL of the author.
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubDef {
    /// Source repository URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// One record of the icon metadata document.
///
/// The record never carries its own id; the id is the key it is filed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDef {
    /// Release tags in which the icon changed.
    #[serde(default, deserialize_with = "or_default")]
    pub changes: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub label: String,
    /// Search aliases grouped by category (usually just `terms`).
    #[serde(default, deserialize_with = "search_terms")]
    pub search: BTreeMap<String, Vec<String>>,
    /// Style variants such as `solid`, `regular` or `brands`.
    #[serde(default, deserialize_with = "or_default")]
    pub styles: Vec<String>,
    /// Codepoint in hexadecimal, without prefix (`f26e`).
    #[serde(default, deserialize_with = "or_default")]
    pub unicode: String,
    #[serde(default, deserialize_with = "or_default")]
    pub voted: bool,
}

/// A loaded icon: the metadata record plus its id and derived symbol name.
///
/// `id` and `safe_name` are only readable so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    id: Id,
    safe_name: String,
    pub label: String,
    pub unicode: String,
    pub styles: Vec<String>,
    pub voted: bool,
    pub changes: Vec<String>,
    pub search: BTreeMap<String, Vec<String>>,
}

impl IconEntry {
    /// Build an entry from the key it was filed under and its record.
    ///
    /// ```
    /// use fontawesome_data::{IconDef, IconEntry};
    ///
    /// let entry = IconEntry::new("arrow-circle-o-right", IconDef::default());
    /// assert_eq!(entry.id(), "arrow-circle-o-right");
    /// assert_eq!(entry.safe_name(), "ArrowCircleOutlineRight");
    /// ```
    pub fn new(id: impl Into<Id>, def: IconDef) -> Self {
        let id = id.into();
        let safe_name = safe_name(&id);
        let IconDef {
            changes,
            label,
            search,
            styles,
            unicode,
            voted,
        } = def;
        Self {
            id,
            safe_name,
            label,
            unicode,
            styles,
            voted,
            changes,
            search,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Code-symbol-safe form of the id.
    pub fn safe_name(&self) -> &str {
        &self.safe_name
    }

    /// Returns true if the icon ships in the given style (`solid`, `brands`, ...).
    pub fn has_style(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s.eq_ignore_ascii_case(style))
    }
}

/// Treat an explicit null the same as a missing field.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Search categories may be left empty (`terms:`), which reads as null.
fn search_terms<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<Vec<String>>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|(category, terms)| (category, terms.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_def_reads_all_fields() {
        let json = r#"{
            "changes": ["4.4", "5.0.0"],
            "label": "500px",
            "search": { "terms": ["photo"], "empty": null },
            "styles": ["brands"],
            "unicode": "f26e",
            "voted": true
        }"#;
        let def: IconDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.changes, vec!["4.4", "5.0.0"]);
        assert_eq!(def.label, "500px");
        assert_eq!(def.search["terms"], vec!["photo"]);
        assert!(def.search["empty"].is_empty());
        assert_eq!(def.styles, vec!["brands"]);
        assert_eq!(def.unicode, "f26e");
        assert!(def.voted);
    }

    #[test]
    fn icon_def_missing_and_null_fields_default() {
        let def: IconDef = serde_json::from_str(r#"{ "label": "Rock", "styles": null, "voted": null }"#).unwrap();
        assert_eq!(def.label, "Rock");
        assert!(def.styles.is_empty());
        assert!(def.changes.is_empty());
        assert!(def.search.is_empty());
        assert!(!def.voted);
    }

    #[test]
    fn config_def_ignores_unknown_fields() {
        let json = r#"{
            "icon_meta": "src/icons.yml",
            "markdown": "kramdown",
            "fontawesome": {
                "url": "https://fontawesome.com",
                "author": { "name": "Dave Gandy" },
                "github": null
            }
        }"#;
        let config: ConfigDef = serde_json::from_str(json).unwrap();
        assert_eq!(config.icon_meta, "src/icons.yml");
        assert!(config.icon_destination.is_none());
        assert_eq!(config.fontawesome.url.as_deref(), Some("https://fontawesome.com"));
        assert_eq!(config.fontawesome.author.name.as_deref(), Some("Dave Gandy"));
        assert_eq!(config.fontawesome.github, GithubDef::default());
    }

    #[test]
    fn icon_entry_takes_id_from_key() {
        let def = IconDef {
            label: "Hand Rock".into(),
            styles: vec!["solid".into(), "regular".into()],
            unicode: "f255".into(),
            ..IconDef::default()
        };
        let entry = IconEntry::new("hand-rock", def);
        assert_eq!(entry.id(), "hand-rock");
        assert_eq!(entry.safe_name(), "HandRock");
        assert_eq!(entry.label, "Hand Rock");
        assert!(entry.has_style("Regular"));
        assert!(!entry.has_style("brands"));
    }

    #[test]
    fn icon_entry_serializes_safe_name() {
        let entry = IconEntry::new("1", IconDef::default());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["safe_name"], "_1");
    }
}
