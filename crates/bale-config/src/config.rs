//! High-level configuration structure for bale.
//!
//! This module provides the main `BaleConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::bundle::BundleOptions;
use crate::dev::DevConfig;
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaleConfig {
    #[serde(default)]
    pub bundle: BundleOptions,

    #[serde(default)]
    pub dev: DevConfig,

    #[serde(default)]
    pub profiles: IndexMap<String, ProfileConfig>,
}

/// Partial overrides applied on top of the base configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub bundle: Value,

    #[serde(default)]
    pub dev: Value,
}

impl BaleConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use bale_config::BaleConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "bundle": {
    ///         "entries": { "index": "client/assets/entries/index.js" },
    ///         "mode": "development"
    ///     }
    /// });
    ///
    /// let config = BaleConfig::from_value(value).unwrap();
    /// assert_eq!(config.bundle.entries.len(), 1);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// Merge the named profile's overrides into the base sections.
    ///
    /// Objects merge key by key, anything else (arrays included) replaces the
    /// base value. An unknown profile leaves the configuration untouched.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let Some(profile_cfg) = self.profiles.get(name).cloned() else {
            warn!(profile = name, "profile not defined, using base configuration");
            return Ok(self);
        };

        debug!(profile = name, "applying profile overrides");
        self.bundle = apply_override(&self.bundle, &profile_cfg.bundle)?;
        self.dev = apply_override(&self.dev, &profile_cfg.dev)?;

        Ok(self)
    }
}

fn apply_override<T>(base: &T, update: &Value) -> ConfigResult<T>
where
    T: Serialize + serde::de::DeserializeOwned + Clone,
{
    if update.is_null() {
        return Ok(base.clone());
    }

    let mut merged = serde_json::to_value(base).map_err(|err| {
        ConfigError::InvalidProfileOverride {
            message: err.to_string(),
        }
    })?;
    merge_values(&mut merged, update);
    serde_json::from_value(merged).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::Mode;
    use serde_json::json;

    #[test]
    fn from_value_creates_config() {
        let value = json!({
            "bundle": {
                "entries": { "app": "src/app.jsx" },
                "minify": true
            }
        });

        let config = BaleConfig::from_value(value).unwrap();
        assert_eq!(config.bundle.entries.len(), 1);
        assert_eq!(config.bundle.minify, Some(true));
    }

    #[test]
    fn to_value_serializes_config() {
        let mut config = BaleConfig::default();
        config.bundle.mode = Mode::Development;

        let value = config.to_value().unwrap();
        assert_eq!(value["bundle"]["mode"], json!("development"));
    }

    #[test]
    fn profile_merging_works() {
        let value = json!({
            "bundle": {
                "entries": { "app": "src/app.jsx" },
                "mode": "production",
                "output": { "dir": "dist", "filename": "[name].min.js" }
            },
            "profiles": {
                "development": {
                    "bundle": {
                        "mode": "development",
                        "output": { "filename": "[name].js" }
                    },
                    "dev": { "port": 3000 }
                }
            }
        });

        let config = BaleConfig::from_value(value)
            .unwrap()
            .materialize_profile(Some("development"))
            .unwrap();

        assert_eq!(config.bundle.mode, Mode::Development);
        assert_eq!(config.bundle.output.filename, "[name].js");
        assert_eq!(config.bundle.output.dir, std::path::PathBuf::from("dist"));
        assert_eq!(config.dev.port, 3000);
    }

    #[test]
    fn unknown_profile_is_ignored() {
        let config = BaleConfig::default()
            .materialize_profile(Some("staging"))
            .unwrap();
        assert_eq!(config.bundle.mode, Mode::Production);
    }

    #[test]
    fn merge_replaces_arrays() {
        let mut base = json!({ "extensions": [".js", ".json"], "keep": 1 });
        merge_values(&mut base, &json!({ "extensions": [".jsx"] }));
        assert_eq!(base, json!({ "extensions": [".jsx"], "keep": 1 }));
    }
}
