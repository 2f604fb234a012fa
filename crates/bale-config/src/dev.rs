//! Development server settings.
//!
//! These are resolved into the build plan for the external dev server; bale
//! never serves anything itself.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Reload the page in place on change instead of iframe mode
    #[serde(default = "default_inline")]
    pub inline: bool,

    /// Directory served as static content. Defaults to the output directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_base: Option<PathBuf>,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            inline: default_inline(),
            content_base: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

fn default_inline() -> bool {
    true
}
