//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bundle::{BundleOptions, NAME_PLACEHOLDER};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate bundle options
    fn validate(&self, config: &BundleOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this when sources are virtual or not yet on disk.
///
/// # Example
///
/// ```
/// use bale_config::{BundleOptions, SchemaValidator, ConfigValidator};
///
/// let config = BundleOptions::default().with_entry("app", "src/app.jsx");
///
/// let validator = SchemaValidator;
/// validator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        if config.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        let mut seen = HashSet::new();
        for entry in &config.entries {
            if entry.name.trim().is_empty() {
                return Err(schema_error(
                    "entry names cannot be empty",
                    "Give every entry a name, e.g. `app = \"src/app.js\"`",
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateEntry {
                    name: entry.name.clone(),
                });
            }
        }

        if config.output.filename.trim().is_empty() {
            return Err(schema_error(
                "output filename template cannot be empty",
                "Use a template such as \"[name]-bundle.min.js\"",
            ));
        }

        for rule in &config.rules {
            if rule.test.is_empty() {
                return Err(schema_error(
                    "rule test pattern cannot be empty",
                    "Set `test` to a regex such as \"\\\\.jsx?$\"",
                ));
            }
            if rule.chain.is_empty() {
                return Err(schema_error(
                    format!("rule `{}` has an empty transform chain", rule.test),
                    "List at least one loader under `use`",
                ));
            }
            let mut loaders = rule.chain.iter().chain(rule.fallback.iter());
            if loaders.any(|step| step.loader.trim().is_empty()) {
                return Err(schema_error(
                    format!("rule `{}` has a loader without a name", rule.test),
                    "Every transform step needs a `loader`",
                ));
            }
        }

        for doc in &config.html {
            if doc.template.trim().is_empty() {
                return Err(schema_error(
                    "html template path cannot be empty",
                    "Point `template` at an existing template file",
                ));
            }
            if !doc.per_entry
                && (doc.template.contains(NAME_PLACEHOLDER) || doc.filename.contains(NAME_PLACEHOLDER))
            {
                return Err(schema_error(
                    format!("html template `{}` uses {NAME_PLACEHOLDER} in a shared document", doc.template),
                    "Set `per_entry = true` to render one document per entry, or drop the placeholder",
                ));
            }
        }

        if let Some(commons) = &config.commons {
            if commons.name.trim().is_empty() {
                return Err(schema_error(
                    "commons chunk name cannot be empty",
                    "Name the shared chunk, e.g. \"commons\"",
                ));
            }
        }

        Ok(())
    }
}

fn schema_error(message: impl Into<String>, hint: impl Into<String>) -> ConfigError {
    ConfigError::SchemaValidation {
        message: message.into(),
        hint: Some(hint.into()),
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that entry sources and HTML templates exist on disk. Per-entry
/// templates are checked once for every entry name they expand to.
///
/// # Example
///
/// ```no_run
/// use bale_config::{BundleOptions, FsValidator, ConfigValidator};
///
/// let config = BundleOptions::default().with_entry("app", "src/app.jsx");
///
/// let validator = FsValidator::new(".");
/// validator.validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundleOptions) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        for entry in &config.entries {
            let path = self.root.join(&entry.source);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound {
                    name: entry.name.clone(),
                    path,
                });
            }
        }

        for doc in &config.html {
            let templates: Vec<String> = if doc.per_entry {
                config
                    .entries
                    .iter()
                    .map(|entry| doc.template.replace(NAME_PLACEHOLDER, &entry.name))
                    .collect()
            } else {
                vec![doc.template.clone()]
            };

            for template in templates {
                let path = self.root.join(template);
                if !path.is_file() {
                    return Err(ConfigError::TemplateNotFound { path });
                }
            }
        }

        debug!(root = %self.root.display(), "filesystem references verified");
        Ok(())
    }
}

/// Convenience function for schema-only validation
///
/// # Example
///
/// ```
/// use bale_config::{BundleOptions, validate_schema};
///
/// let config = BundleOptions::default().with_entry("app", "src/app.jsx");
///
/// validate_schema(&config).unwrap();
/// ```
pub fn validate_schema(config: &BundleOptions) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BundleOptions, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{CommonsChunkOptions, Entries, HtmlOptions, RuleOptions};

    fn with_app() -> BundleOptions {
        BundleOptions::default().with_entry("app", "src/app.jsx")
    }

    #[test]
    fn schema_validator_rejects_empty_entries() {
        let config = BundleOptions::default();
        let result = SchemaValidator.validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::NoEntries));
    }

    #[test]
    fn schema_validator_accepts_valid_config() {
        assert!(SchemaValidator.validate(&with_app()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_duplicate_entries() {
        let mut config = BundleOptions::default();
        config.entries = [("app", "a.js"), ("app", "b.js")].into_iter().collect::<Entries>();

        match SchemaValidator.validate(&config).unwrap_err() {
            ConfigError::DuplicateEntry { name } => assert_eq!(name, "app"),
            other => panic!("expected DuplicateEntry, got {other:?}"),
        }
    }

    #[test]
    fn schema_validator_rejects_empty_chain() {
        let config = with_app().with_rule(RuleOptions::new("\\.js$"));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_blank_loader() {
        let config = with_app().with_rule(RuleOptions::new("\\.js$").step("  "));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_unnamed_commons() {
        let mut config = with_app();
        config.commons = Some(CommonsChunkOptions {
            name: String::new(),
            filename: None,
        });
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn shared_document_cannot_use_name_placeholder() {
        let mut config = with_app();
        let mut doc = HtmlOptions::new("templates/index.ejs");
        doc.filename = "[name].html".into();
        config.html.push(doc);

        match SchemaValidator.validate(&config).unwrap_err() {
            ConfigError::SchemaValidation { message, hint } => {
                assert!(message.contains("[name]"));
                assert!(hint.unwrap().contains("per_entry"));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }

        config.html[0].per_entry = true;
        assert!(SchemaValidator.validate(&config).is_ok());
    }

    #[test]
    fn validate_schema_helper_works() {
        assert!(validate_schema(&with_app()).is_ok());
    }
}
