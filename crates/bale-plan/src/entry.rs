use std::collections::HashSet;
use std::path::PathBuf;

use bale_config::{ConfigError, EntryOptions, Result};
use serde::Serialize;
use tracing::debug;

/// An entry point after resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub name: String,
    pub source: PathBuf,
}

/// Resolve declared entries into ordered `(name, source)` pairs.
///
/// Declaration order is kept. A repeated name fails with
/// [`ConfigError::DuplicateEntry`]. Source existence is not checked here;
/// see [`FsValidator`](bale_config::FsValidator).
pub fn resolve_entries<'a, I>(entries: I) -> Result<Vec<ResolvedEntry>>
where
    I: IntoIterator<Item = &'a EntryOptions>,
{
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(ConfigError::DuplicateEntry {
                name: entry.name.clone(),
            });
        }
        debug!(entry = %entry.name, source = %entry.source.display(), "resolved entry");
        resolved.push(ResolvedEntry {
            name: entry.name.clone(),
            source: entry.source.clone(),
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bale_config::Entries;

    #[test]
    fn keeps_declaration_order() {
        let entries: Entries = [
            ("index", "client/assets/entries/index.js"),
            ("app", "client/assets/entries/app.jsx"),
            ("admin", "client/assets/entries/admin.js"),
        ]
        .into_iter()
        .collect();

        let resolved = resolve_entries(&entries).unwrap();
        let names: Vec<_> = resolved.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["index", "app", "admin"]);
        assert_eq!(
            resolved[1].source,
            PathBuf::from("client/assets/entries/app.jsx")
        );
    }

    #[test]
    fn one_pair_per_entry() {
        let entries: Entries = (0..25).map(|i| (format!("e{i}"), format!("src/e{i}.js"))).collect();
        assert_eq!(resolve_entries(&entries).unwrap().len(), 25);
    }

    #[test]
    fn empty_map_resolves_to_nothing() {
        assert!(resolve_entries(&Entries::new()).unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_names() {
        let entries: Entries = [("app", "a.js"), ("index", "i.js"), ("app", "b.js")]
            .into_iter()
            .collect();

        match resolve_entries(&entries).unwrap_err() {
            ConfigError::DuplicateEntry { name } => assert_eq!(name, "app"),
            other => panic!("expected DuplicateEntry, got {other:?}"),
        }
    }
}
