use serde::{Deserialize, Serialize};

use crate::bundle::helpers::default_html_filename;

/// HTML document generated alongside the bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Template file, relative to the project root.
    /// May contain `[name]` when `per_entry` is set.
    pub template: String,

    /// Output filename (default: "index.html"), may contain `[name]`
    #[serde(default = "default_html_filename")]
    pub filename: String,

    /// Chunks referenced by the document. Not checked against the entries,
    /// since plugin-produced chunks (e.g. commons) are valid too.
    #[serde(default)]
    pub chunks: Vec<String>,

    /// Page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Generate one document per entry, substituting `[name]`
    #[serde(default)]
    pub per_entry: bool,
}

impl HtmlOptions {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            filename: default_html_filename(),
            chunks: Vec::new(),
            title: None,
            per_entry: false,
        }
    }
}
