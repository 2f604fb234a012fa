//! Declarative bundle configuration: entries, output naming, transform rules
//! and generated documents.

mod entries;
mod helpers;
mod html;
mod rule;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use entries::{Entries, EntryOptions};
pub use html::HtmlOptions;
pub use rule::{ExcludeOptions, RuleOptions, TransformStep};
pub use types::{DevTool, Mode};

use helpers::{
    default_extensions, default_filename_template, default_modules, default_output_dir,
    default_stylesheet_template,
};

/// Placeholder substituted with the entry name in filename templates
pub const NAME_PLACEHOLDER: &str = "[name]";

/// Main bundle configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleOptions {
    /// Entry points, name → source path
    #[serde(default)]
    pub entries: Entries,

    /// Output directory and filename templates
    #[serde(default)]
    pub output: OutputOptions,

    /// Build mode
    #[serde(default)]
    pub mode: Mode,

    /// Source map generation
    #[serde(default)]
    pub devtool: DevTool,

    /// Minify scripts. Defaults to on in production mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,

    /// Module resolution settings forwarded to the bundler
    #[serde(default)]
    pub resolve: ResolveOptions,

    /// Transform rules, first match wins
    #[serde(default)]
    pub rules: Vec<RuleOptions>,

    /// Generated HTML documents
    #[serde(default)]
    pub html: Vec<HtmlOptions>,

    /// Shared chunk extracted from modules common to several entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commons: Option<CommonsChunkOptions>,

    /// Compile-time replacements (identifier → replacement)
    ///
    /// Strings are taken as source text (`"\"1.0.0\""` for a string
    /// literal); numbers and booleans stand for themselves.
    /// `process.env.NODE_ENV` is filled in from `mode` unless set here.
    #[serde(default)]
    pub define: IndexMap<String, Value>,

    /// Identifiers made globally available (identifier → module)
    #[serde(default)]
    pub provide: IndexMap<String, String>,
}

impl BundleOptions {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use bale_config::BundleOptions;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "entries": { "app": "src/app.jsx" },
    ///     "output": { "filename": "[name].js" }
    /// });
    ///
    /// let options = BundleOptions::from_value(value).unwrap();
    /// assert_eq!(options.entries.len(), 1);
    /// assert_eq!(options.output.filename, "[name].js");
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value)
            .map_err(|e| crate::error::ConfigError::invalid_value("bundle", e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self)
            .map_err(|e| crate::error::ConfigError::invalid_value("bundle", e.to_string()))
    }

    /// Whether minification is on, falling back to the mode default
    pub fn minify_enabled(&self) -> bool {
        self.minify.unwrap_or_else(|| self.mode.is_production())
    }

    /// Add an entry point
    ///
    /// # Example
    /// ```
    /// use bale_config::BundleOptions;
    ///
    /// let options = BundleOptions::default()
    ///     .with_entry("index", "client/assets/entries/index.js")
    ///     .with_entry("app", "client/assets/entries/app.jsx");
    /// assert_eq!(options.entries.len(), 2);
    /// ```
    pub fn with_entry(mut self, name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        self.entries.push(name, source);
        self
    }

    /// Append a transform rule
    pub fn with_rule(mut self, rule: RuleOptions) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Where bundles are written and how they are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory, created by the bundler if missing
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Script filename template
    #[serde(default = "default_filename_template")]
    pub filename: String,

    /// Extracted stylesheet filename template
    #[serde(default = "default_stylesheet_template")]
    pub stylesheet: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            filename: default_filename_template(),
            stylesheet: default_stylesheet_template(),
        }
    }
}

/// Module resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions that may be left off when importing
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directories searched when resolving bare module specifiers
    #[serde(default = "default_modules")]
    pub modules: Vec<PathBuf>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            modules: default_modules(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonsChunkOptions {
    pub name: String,

    /// Defaults to `<name>.js`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl CommonsChunkOptions {
    pub fn filename(&self) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| format!("{}.js", self.name))
    }
}
