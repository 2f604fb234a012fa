use std::path::PathBuf;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named entry point mapped to one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOptions {
    pub name: String,
    pub source: PathBuf,
}

/// Entry points in declaration order.
///
/// Accepts either a table (`index = "src/index.js"`) or a list of
/// `{ name, source }` tables. The list form can carry duplicate names, which
/// are kept as written so that resolution can report them.
///
/// Serializes back to the table form unless names repeat, so that profile
/// and environment overrides merge into it key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries(Vec<EntryOptions>);

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping declaration order
    pub fn push(&mut self, name: impl Into<String>, source: impl Into<PathBuf>) {
        self.0.push(EntryOptions {
            name: name.into(),
            source: source.into(),
        });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntryOptions> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&EntryOptions> {
        self.0.iter().find(|entry| entry.name == name)
    }
}

impl<N, S> FromIterator<(N, S)> for Entries
where
    N: Into<String>,
    S: Into<PathBuf>,
{
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        let mut entries = Entries::new();
        for (name, source) in iter {
            entries.push(name, source);
        }
        entries
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a EntryOptions;
    type IntoIter = std::slice::Iter<'a, EntryOptions>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Entries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut names = std::collections::HashSet::new();
        if !self.0.iter().all(|entry| names.insert(entry.name.as_str())) {
            return self.0.serialize(serializer);
        }

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.name, &entry.source)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Table(IndexMap<String, PathBuf>),
            List(Vec<EntryOptions>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Table(table) => table.into_iter().collect(),
            Repr::List(list) => Entries(list),
        })
    }
}
