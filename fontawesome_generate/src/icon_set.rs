//! The loaded configuration plus its icons, and the JSON hand-off for code generation.

use fontawesome_data::{ConfigDef, FontAwesomeDef, IconEntry};
use serde::Serialize;

/// A configuration and the icons loaded from the metadata file it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    config: ConfigDef,
    icons: Vec<IconEntry>,
}

impl IconSet {
    pub fn new(config: ConfigDef, icons: Vec<IconEntry>) -> Self {
        Self { config, icons }
    }

    /// The `fontawesome` descriptor block.
    pub fn config(&self) -> &FontAwesomeDef {
        &self.config.fontawesome
    }

    /// The whole root configuration.
    pub fn container(&self) -> &ConfigDef {
        &self.config
    }

    /// Icons in metadata document order.
    pub fn items(&self) -> &[IconEntry] {
        &self.icons
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> {
        self.icons.iter()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Look up an icon by its raw id.
    pub fn get(&self, id: &str) -> Option<&IconEntry> {
        self.icons.iter().find(|icon| icon.id() == id)
    }

    pub fn into_parts(self) -> (ConfigDef, Vec<IconEntry>) {
        (self.config, self.icons)
    }

    pub fn generator_input(&self) -> GeneratorInput<'_> {
        GeneratorInput {
            icon_destination: self.config.icon_destination.as_deref(),
            fontawesome: &self.config.fontawesome,
            icons: &self.icons,
        }
    }

    /// Render the generator input as pretty-printed JSON.
    ///
    /// # Errors
    /// - if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.generator_input())
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconEntry;
    type IntoIter = std::slice::Iter<'a, IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

/// Everything the downstream code generator needs, borrowed from an [`IconSet`].
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorInput<'a> {
    pub icon_destination: Option<&'a str>,
    pub fontawesome: &'a FontAwesomeDef,
    pub icons: &'a [IconEntry],
}
