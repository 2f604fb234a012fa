use serde::{Deserialize, Serialize};

/// Build mode, drives production-only plugins and the `process.env.NODE_ENV` define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    /// Optimized output (default)
    #[default]
    Production,
}

impl Mode {
    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

/// Source map generation handed to the bundler (`devtool`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevTool {
    /// No source maps
    None,
    /// Inline source maps (base64)
    Inline,
    /// External .map files
    #[default]
    SourceMap,
}

impl DevTool {
    pub fn emits_source_maps(self) -> bool {
        !matches!(self, DevTool::None)
    }
}
