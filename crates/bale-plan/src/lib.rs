//! Build configuration resolver.
//!
//! Turns a declarative [`BaleConfig`](bale_config::BaleConfig) into a
//! [`BuildPlan`]: the concrete entries, output names, transform chains,
//! generated documents and plugin list an external bundler consumes.
//!
//! The individual steps are exposed on their own so hosts can reuse them:
//!
//! - [`resolve_entries`] - ordered `(name, source)` pairs, duplicates rejected
//! - [`resolve_output`] - `[name]` substitution in filename templates
//! - [`match_transform`] - first-match transform rule lookup
//! - [`resolve_auxiliary_documents`] - HTML documents and their chunks
//! - [`resolve_plugins`] - per-entry plugin values
//!
//! # Example
//!
//! ```
//! use bale_plan::{match_transform, TransformRule};
//!
//! let rules = vec![
//!     TransformRule::new(r"\.jsx$", ["babel-loader"]).unwrap(),
//!     TransformRule::new(r"\.css$", ["css-loader"]).unwrap(),
//! ];
//!
//! let chain = match_transform("src/app.jsx", &rules).unwrap();
//! assert_eq!(chain[0].loader, "babel-loader");
//! assert!(match_transform("logo.png", &rules).is_none());
//! ```

mod document;
mod entry;
mod output;
mod plan;
mod plugin;
mod transform;

pub use document::{resolve_auxiliary_documents, AuxiliaryDocument};
pub use entry::{resolve_entries, ResolvedEntry};
pub use output::{detect_output_collisions, resolve_output};
pub use plan::{BuildPlan, DevServerPlan, EntryPlan};
pub use plugin::{resolve_plugins, Plugin};
pub use transform::{compile_rules, match_transform, Exclusion, Pattern, TransformRule};

pub use bale_config::{ConfigError, Result, TransformStep};
