use std::collections::HashSet;
use std::path::PathBuf;

use bale_config::HtmlOptions;
use serde::Serialize;
use tracing::debug;

use crate::entry::ResolvedEntry;
use crate::output::resolve_output;

/// A generated HTML document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuxiliaryDocument {
    pub template: PathBuf,
    pub filename: String,
    /// Chunks the document references, in configured order
    pub chunks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entry a per-entry document was expanded for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

/// Resolve HTML document rules against the resolved entries.
///
/// Per-entry rules produce one document per entry with `[name]` substituted
/// in the template, filename and chunk names. Shared rules are taken
/// verbatim; validation rejects `[name]` in their template or filename.
/// Chunks are not required to be entries: shared chunks come from plugins.
pub fn resolve_auxiliary_documents(
    rules: &[HtmlOptions],
    entries: &[ResolvedEntry],
) -> Vec<AuxiliaryDocument> {
    let entry_names: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let mut documents = Vec::new();

    for rule in rules {
        if rule.per_entry {
            for entry in entries {
                documents.push(expand(rule, Some(&entry.name)));
            }
        } else {
            documents.push(expand(rule, None));
        }
    }

    for doc in &documents {
        for chunk in doc.chunks.iter().filter(|c| !entry_names.contains(c.as_str())) {
            debug!(document = %doc.filename, chunk = %chunk, "chunk is not an entry");
        }
    }

    documents
}

fn expand(rule: &HtmlOptions, entry: Option<&str>) -> AuxiliaryDocument {
    let substitute = |template: &str| match entry {
        Some(name) => resolve_output(template, name),
        None => template.to_string(),
    };

    AuxiliaryDocument {
        template: PathBuf::from(substitute(&rule.template)),
        filename: substitute(&rule.filename),
        chunks: rule.chunks.iter().map(|chunk| substitute(chunk)).collect(),
        title: rule.title.clone(),
        entry: entry.map(str::to_string),
    }
}
