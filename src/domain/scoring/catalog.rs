//! Subtype Catalog - Descriptive metadata lookup.

use serde::{Deserialize, Serialize};

/// Sentinel used for every field of the placeholder description.
pub const NOT_AVAILABLE: &str = "No disponible.";

/// Descriptive metadata for one subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeDescription {
    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "rasgos_clave")]
    pub key_traits: String,

    #[serde(rename = "virtudes")]
    pub virtues: String,

    #[serde(rename = "mecanismos_defensa")]
    pub defense_mechanisms: String,

    #[serde(rename = "motivacion_nuclear")]
    pub core_motivation: String,

    #[serde(rename = "palabra_clave")]
    pub keyword: String,
}

impl SubtypeDescription {
    /// The fallback record: every field is [`NOT_AVAILABLE`].
    pub fn placeholder() -> Self {
        Self {
            description: NOT_AVAILABLE.to_string(),
            key_traits: NOT_AVAILABLE.to_string(),
            virtues: NOT_AVAILABLE.to_string(),
            defense_mechanisms: NOT_AVAILABLE.to_string(),
            core_motivation: NOT_AVAILABLE.to_string(),
            keyword: NOT_AVAILABLE.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

impl Default for SubtypeDescription {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Subtype descriptions keyed by exact type name.
///
/// Lookups are case- and whitespace-sensitive. Inserting a name that is
/// already present replaces the earlier description.
#[derive(Debug, Clone, Default)]
pub struct SubtypeCatalog {
    entries: Vec<(String, SubtypeDescription)>,
}

impl SubtypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_name: impl Into<String>, description: SubtypeDescription) {
        let type_name = type_name.into();
        match self.entries.iter_mut().find(|(name, _)| *name == type_name) {
            Some((_, existing)) => *existing = description,
            None => self.entries.push((type_name, description)),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&SubtypeDescription> {
        self.entries
            .iter()
            .find(|(name, _)| name == type_name)
            .map(|(_, description)| description)
    }

    /// Description for the principal subtype, or the placeholder when the
    /// subtype is `None` or unknown.
    pub fn describe(&self, principal: Option<&str>) -> SubtypeDescription {
        principal
            .and_then(|name| self.get(name))
            .cloned()
            .unwrap_or_else(SubtypeDescription::placeholder)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, SubtypeDescription)> for SubtypeCatalog {
    fn from_iter<I: IntoIterator<Item = (S, SubtypeDescription)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, description) in iter {
            catalog.insert(name, description);
        }
        catalog
    }
}
