//! Whole-configuration resolution.

use std::path::{Path, PathBuf};

use bale_config::{
    BaleConfig, ConfigValidator, DevTool, FsValidator, Mode, ResolveOptions, Result, TransformStep,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::document::{resolve_auxiliary_documents, AuxiliaryDocument};
use crate::entry::resolve_entries;
use crate::output::{detect_output_collisions, resolve_output};
use crate::plugin::{resolve_plugins, stylesheet_for, Plugin};
use crate::transform::{compile_rules, match_transform, TransformRule};

/// Fully resolved instructions for the external bundler.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub root: PathBuf,
    pub mode: Mode,
    pub devtool: DevTool,
    pub output_dir: PathBuf,
    pub entries: Vec<EntryPlan>,
    pub rules: Vec<TransformRule>,
    pub documents: Vec<AuxiliaryDocument>,
    pub resolve: ResolveOptions,
    pub dev: DevServerPlan,
}

/// One entry's bundle
#[derive(Debug, Clone, Serialize)]
pub struct EntryPlan {
    pub name: String,
    pub source: PathBuf,
    /// Script filename inside the output directory
    pub output: String,
    /// Extracted stylesheet filename, when a rule extracts styles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerPlan {
    pub host: String,
    pub port: u16,
    pub inline: bool,
    pub content_base: PathBuf,
}

impl BuildPlan {
    /// Resolve a configuration against a project root.
    ///
    /// Entry sources and HTML templates must exist under `root`. Any failure
    /// aborts resolution; no partial plan is returned.
    ///
    /// # Errors
    ///
    /// Every [`ConfigError`](bale_config::ConfigError) variant except the
    /// loading ones can surface here.
    pub fn resolve(config: &BaleConfig, root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        Self::resolve_with(config, root, &FsValidator::new(root))
    }

    /// Resolve with a custom validator, e.g.
    /// [`SchemaValidator`](bale_config::SchemaValidator) for sources that are
    /// not on disk.
    pub fn resolve_with<V>(config: &BaleConfig, root: impl AsRef<Path>, validator: &V) -> Result<Self>
    where
        V: ConfigValidator + ?Sized,
    {
        let root = root.as_ref();
        let bundle = &config.bundle;

        validator.validate(bundle)?;

        let entries = resolve_entries(&bundle.entries)?;
        let rules = compile_rules(&bundle.rules, bundle.mode)?;
        let documents = resolve_auxiliary_documents(&bundle.html, &entries);

        let entry_plans: Vec<EntryPlan> = entries
            .iter()
            .map(|entry| {
                let output = resolve_output(&bundle.output.filename, &entry.name);
                debug!(entry = %entry.name, output = %output, "resolved output");
                EntryPlan {
                    name: entry.name.clone(),
                    source: entry.source.clone(),
                    output,
                    stylesheet: stylesheet_for(bundle, &entry.name),
                    plugins: resolve_plugins(bundle, entry, &documents),
                }
            })
            .collect();

        let commons = bundle.commons.as_ref().map(|c| (c.filename(), c.name.as_str()));
        let artifacts = entry_plans
            .iter()
            .flat_map(|plan| {
                std::iter::once((plan.output.as_str(), plan.name.as_str())).chain(
                    plan.stylesheet
                        .as_deref()
                        .map(|stylesheet| (stylesheet, plan.name.as_str())),
                )
            })
            .chain(
                commons
                    .as_ref()
                    .map(|(filename, name)| (filename.as_str(), *name)),
            )
            .chain(documents.iter().map(|doc| {
                let template = doc.template.to_str().unwrap_or(doc.filename.as_str());
                (doc.filename.as_str(), template)
            }));
        detect_output_collisions(artifacts)?;

        let output_dir = root.join(&bundle.output.dir);
        let dev = DevServerPlan {
            host: config.dev.host.clone(),
            port: config.dev.port,
            inline: config.dev.inline,
            content_base: config
                .dev
                .content_base
                .as_ref()
                .map(|base| root.join(base))
                .unwrap_or_else(|| output_dir.clone()),
        };

        info!(
            entries = entry_plans.len(),
            rules = rules.len(),
            documents = documents.len(),
            mode = bundle.mode.as_str(),
            "resolved build plan"
        );

        Ok(Self {
            root: root.to_path_buf(),
            mode: bundle.mode,
            devtool: bundle.devtool,
            output_dir,
            entries: entry_plans,
            rules,
            documents,
            resolve: bundle.resolve.clone(),
            dev,
        })
    }

    pub fn entry(&self, name: &str) -> Option<&EntryPlan> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Transform chain for a file under this plan's rules
    pub fn transform_for(&self, path: impl AsRef<Path>) -> Option<&[TransformStep]> {
        match_transform(path, &self.rules)
    }
}
