//! File-based config discovery for CLI use
//!
//! Handles finding and loading bale configuration files from the filesystem.
//! Layers apply in order: defaults, file, selected profile, then
//! `BALE_`-prefixed environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{providers::Env, Figment};
use serde_json::Value;
use tracing::debug;

use crate::config::{merge_values, BaleConfig};
use crate::error::{ConfigError, Result};

/// Conventional configuration file name
pub const CONFIG_FILE: &str = "bale.toml";

/// Prefix of environment overrides; nested keys are separated by `__`
/// (`BALE_DEV__PORT=9000` sets `dev.port`).
pub const ENV_PREFIX: &str = "BALE_";

/// File-based configuration discovery
///
/// Searches for bale configuration files in conventional locations and loads them.
/// This is primarily for CLI use - library users should use `BaleConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use bale_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
    use_env: bool,
    profile: Option<String>,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            use_env: true,
            profile: None,
        }
    }

    /// Skip environment overrides
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Apply a profile from the file before environment overrides
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: bale.toml
    /// 2. package.json (bale field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("bale").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<BaleConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_file(&path)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<BaleConfig> {
        self.clone().with_profile(profile).load()
    }

    /// Load config from a specific file path
    ///
    /// `package.json` files are read from their `bale` field, anything else
    /// is parsed as TOML.
    pub fn load_file(&self, path: &Path) -> Result<BaleConfig> {
        debug!(path = %path.display(), "loading configuration");

        let value = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            read_package_json(path)?
        } else {
            read_toml(path)?
        };

        let config = BaleConfig::from_value(value)?.materialize_profile(self.profile.as_deref())?;
        if !self.use_env {
            return Ok(config);
        }

        let overrides = env_overrides()?;
        if overrides.as_object().is_none_or(|map| map.is_empty()) {
            return Ok(config);
        }

        debug!("applying {ENV_PREFIX}* environment overrides");
        let mut value = config.to_value()?;
        merge_values(&mut value, &overrides);
        BaleConfig::from_value(value)
    }
}

fn read_toml(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let toml_val: toml::Value = toml::from_str(&content)
        .map_err(|e| ConfigError::invalid_value("toml", format!("Invalid TOML syntax: {e}")))?;

    serde_json::to_value(toml_val).map_err(|e| {
        ConfigError::invalid_value("toml", format!("TOML to JSON conversion failed: {e}"))
    })
}

fn read_package_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let mut parsed: Value = serde_json::from_str(&content)
        .map_err(|e| ConfigError::invalid_value("package.json", format!("Invalid JSON: {e}")))?;

    match parsed.get_mut("bale").map(Value::take) {
        Some(Value::Null) => Err(ConfigError::invalid_value(
            "bale",
            "The 'bale' field cannot be null",
        )),
        Some(value) => Ok(value),
        None => Err(ConfigError::invalid_value(
            "bale",
            "Add a 'bale' field to your package.json",
        )),
    }
}

fn env_overrides() -> Result<Value> {
    Figment::from(Env::prefixed(ENV_PREFIX).split("__"))
        .extract::<Value>()
        .map_err(|e| ConfigError::invalid_value("environment", e.to_string()))
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use bale_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<BaleConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use bale_config::discover_with_profile;
///
/// let config = discover_with_profile("development").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<BaleConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
