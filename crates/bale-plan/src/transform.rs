use std::borrow::Cow;
use std::path::Path;

use bale_config::{ConfigError, ExcludeOptions, Mode, Result, RuleOptions, TransformStep};
use regex::Regex;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

/// A compiled path pattern
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Pattern)
            .map_err(|err| ConfigError::InvalidPattern {
                pattern: source.to_string(),
                message: err.to_string(),
            })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Exclusion with re-admission patterns
#[derive(Debug, Clone, Serialize)]
pub struct Exclusion {
    pattern: Pattern,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unless: Vec<Pattern>,
}

impl Exclusion {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
            unless: Vec::new(),
        })
    }

    pub fn compile(options: &ExcludeOptions) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::new(&options.pattern)?,
            unless: options
                .unless
                .iter()
                .map(|source| Pattern::new(source))
                .collect::<Result<_>>()?,
        })
    }

    /// True when the path matches the pattern and none of the `unless` patterns
    pub fn excludes(&self, path: &str) -> bool {
        self.pattern.is_match(path) && !self.unless.iter().any(|p| p.is_match(path))
    }
}

/// A compiled transform rule
#[derive(Debug, Clone, Serialize)]
pub struct TransformRule {
    test: Pattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude: Option<Exclusion>,
    #[serde(rename = "use")]
    chain: Vec<TransformStep>,
    extract: bool,
}

impl TransformRule {
    pub fn new<I, S>(test: &str, chain: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<TransformStep>,
    {
        Ok(Self {
            test: Pattern::new(test)?,
            exclude: None,
            chain: chain.into_iter().map(Into::into).collect(),
            extract: false,
        })
    }

    pub fn with_exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude = Some(Exclusion::new(pattern)?);
        Ok(self)
    }

    /// Compile a configured rule.
    ///
    /// An extracting rule in development mode has extraction switched off, so
    /// its fallback loader (if any) runs first in the chain instead.
    pub fn compile(options: &RuleOptions, mode: Mode) -> Result<Self> {
        let mut chain = Vec::with_capacity(options.chain.len() + 1);
        if options.extract && !mode.is_production() {
            chain.extend(options.fallback.iter().cloned());
        }
        chain.extend(options.chain.iter().cloned());

        Ok(Self {
            test: Pattern::new(&options.test)?,
            exclude: options.exclude.as_ref().map(Exclusion::compile).transpose()?,
            chain,
            extract: options.extract,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclusion| exclusion.excludes(path))
    }

    pub fn chain(&self) -> &[TransformStep] {
        &self.chain
    }

    pub fn extracts(&self) -> bool {
        self.extract
    }
}

/// Compile configured rules, keeping their order
pub fn compile_rules(options: &[RuleOptions], mode: Mode) -> Result<Vec<TransformRule>> {
    let rules = options
        .iter()
        .map(|rule| TransformRule::compile(rule, mode))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = rules.len(), "compiled transform rules");
    Ok(rules)
}

/// Find the transform chain for a file.
///
/// Rules are scanned in declaration order and the first match wins. There is
/// no fallback chain: `None` means the file passes through untouched.
pub fn match_transform<'a>(
    path: impl AsRef<Path>,
    rules: &'a [TransformRule],
) -> Option<&'a [TransformStep]> {
    let path = normalize(path.as_ref());
    let rule = rules.iter().find(|rule| rule.matches(&path));
    trace!(path = %path, matched = rule.is_some(), "transform lookup");
    rule.map(TransformRule::chain)
}

// Patterns are written against `/`-separated paths on every platform.
fn normalize(path: &Path) -> Cow<'_, str> {
    let lossy = path.to_string_lossy();
    if lossy.contains('\\') {
        Cow::Owned(lossy.replace('\\', "/"))
    } else {
        lossy
    }
}
