use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One transform rule as written in the configuration.
///
/// Rules are tried in declaration order; the first whose `test` matches a
/// path and whose `exclude` does not decides the transform chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOptions {
    /// Regex matched against `/`-separated file paths
    pub test: String,

    /// Paths matching this are skipped by the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<ExcludeOptions>,

    /// Ordered transform chain (first step runs first)
    #[serde(rename = "use", default)]
    pub chain: Vec<TransformStep>,

    /// Pull the rule's output into a separate stylesheet
    #[serde(default)]
    pub extract: bool,

    /// Loader prepended to the chain when extraction is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<TransformStep>,
}

impl RuleOptions {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            exclude: None,
            chain: Vec::new(),
            extract: false,
            fallback: None,
        }
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(ExcludeOptions::new(pattern));
        self
    }

    pub fn step(mut self, step: impl Into<TransformStep>) -> Self {
        self.chain.push(step.into());
        self
    }
}

/// Exclusion pattern with optional re-admission patterns.
///
/// `{ pattern = "node_modules/", unless = ["node_modules/bootstrap/"] }`
/// excludes everything under `node_modules` except bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludeOptions {
    pub pattern: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unless: Vec<String>,
}

impl ExcludeOptions {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            unless: Vec::new(),
        }
    }

    pub fn unless(mut self, pattern: impl Into<String>) -> Self {
        self.unless.push(pattern.into());
        self
    }
}

impl<'de> Deserialize<'de> for ExcludeOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Pattern(String),
            Full {
                pattern: String,
                #[serde(default)]
                unless: Vec<String>,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Pattern(pattern) => ExcludeOptions::new(pattern),
            Repr::Full { pattern, unless } => ExcludeOptions { pattern, unless },
        })
    }
}

/// A single loader invocation in a transform chain.
///
/// Written either as a bare loader name or as `{ loader, options }`;
/// `options` is forwarded to the loader untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformStep {
    pub loader: String,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl TransformStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

impl From<&str> for TransformStep {
    fn from(loader: &str) -> Self {
        TransformStep::new(loader)
    }
}

impl<'de> Deserialize<'de> for TransformStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Loader(String),
            Full {
                loader: String,
                #[serde(default)]
                options: Value,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Loader(loader) => TransformStep::new(loader),
            Repr::Full { loader, options } => TransformStep { loader, options },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rule_accepts_shorthand_forms() {
        let rule: RuleOptions = serde_json::from_value(json!({
            "test": "\\.jsx?$",
            "exclude": "node_modules",
            "use": ["babel-loader"]
        }))
        .unwrap();

        assert_eq!(rule.exclude, Some(ExcludeOptions::new("node_modules")));
        assert_eq!(rule.chain, vec![TransformStep::new("babel-loader")]);
        assert!(!rule.extract);
    }

    #[test]
    fn rule_accepts_full_forms() {
        let rule: RuleOptions = serde_json::from_value(json!({
            "test": "\\.s?css$",
            "exclude": { "pattern": "node_modules/", "unless": ["node_modules/bootstrap/"] },
            "use": [
                { "loader": "css-loader", "options": { "sourceMap": true } },
                "sass-loader"
            ],
            "extract": true,
            "fallback": "style-loader"
        }))
        .unwrap();

        let exclude = rule.exclude.unwrap();
        assert_eq!(exclude.unless, vec!["node_modules/bootstrap/".to_string()]);
        assert_eq!(rule.chain[0].options["sourceMap"], json!(true));
        assert_eq!(rule.chain[1].options, Value::Null);
        assert_eq!(rule.fallback, Some(TransformStep::new("style-loader")));
    }
}
