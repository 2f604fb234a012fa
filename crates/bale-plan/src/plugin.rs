use bale_config::BundleOptions;
use indexmap::IndexMap;
use serde::Serialize;

use crate::document::AuxiliaryDocument;
use crate::entry::ResolvedEntry;
use crate::output::resolve_output;

const NODE_ENV: &str = "process.env.NODE_ENV";

/// A bundler plugin instruction, resolved for one entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Plugin {
    /// Minify scripts
    Minify { source_map: bool },
    /// Split modules shared between entries into one chunk
    CommonsChunk { name: String, filename: String },
    /// Compile-time constant replacements
    Define { values: IndexMap<String, String> },
    /// Identifiers injected as globals
    Provide { globals: IndexMap<String, String> },
    /// Generate an HTML document for the entry
    Html(AuxiliaryDocument),
    /// Write extracted styles to a separate file
    ExtractCss { filename: String, disabled: bool },
}

/// Build the ordered plugin list for one entry.
///
/// `documents` is the full resolved document list; only documents expanded
/// for this entry become [`Plugin::Html`]. Shared documents (`per_entry =
/// false`) belong to no single entry and are only listed in
/// [`BuildPlan::documents`](crate::BuildPlan::documents).
pub fn resolve_plugins(
    options: &BundleOptions,
    entry: &ResolvedEntry,
    documents: &[AuxiliaryDocument],
) -> Vec<Plugin> {
    let mut plugins = Vec::new();

    if options.minify_enabled() {
        plugins.push(Plugin::Minify {
            source_map: options.devtool.emits_source_maps(),
        });
    }

    if let Some(commons) = &options.commons {
        plugins.push(Plugin::CommonsChunk {
            name: commons.name.clone(),
            filename: commons.filename(),
        });
    }

    let mut values = IndexMap::new();
    values.insert(NODE_ENV.to_string(), format!("\"{}\"", options.mode.as_str()));
    for (key, value) in &options.define {
        let source = value.as_str().map_or_else(|| value.to_string(), str::to_owned);
        values.insert(key.clone(), source);
    }
    plugins.push(Plugin::Define { values });

    if !options.provide.is_empty() {
        plugins.push(Plugin::Provide {
            globals: options.provide.clone(),
        });
    }

    plugins.extend(
        documents
            .iter()
            .filter(|doc| doc.entry.as_deref() == Some(entry.name.as_str()))
            .cloned()
            .map(Plugin::Html),
    );

    if let Some(filename) = stylesheet_for(options, &entry.name) {
        plugins.push(Plugin::ExtractCss {
            filename,
            disabled: !options.mode.is_production(),
        });
    }

    plugins
}

/// Stylesheet filename for an entry, when any rule extracts styles
pub(crate) fn stylesheet_for(options: &BundleOptions, entry: &str) -> Option<String> {
    options
        .rules
        .iter()
        .any(|rule| rule.extract)
        .then(|| resolve_output(&options.output.stylesheet, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bale_config::{CommonsChunkOptions, DevTool, Mode, RuleOptions};
    use std::path::PathBuf;

    fn app() -> ResolvedEntry {
        ResolvedEntry {
            name: "app".into(),
            source: PathBuf::from("client/assets/entries/app.jsx"),
        }
    }

    #[test]
    fn production_defaults() {
        let options = BundleOptions::default();
        let plugins = resolve_plugins(&options, &app(), &[]);

        assert_eq!(
            plugins,
            vec![
                Plugin::Minify { source_map: true },
                Plugin::Define {
                    values: IndexMap::from([(NODE_ENV.to_string(), "\"production\"".to_string())]),
                },
            ]
        );
    }

    #[test]
    fn development_skips_minify_and_disables_extraction() {
        let mut options = BundleOptions::default();
        options.mode = Mode::Development;
        let mut rule = RuleOptions::new(r"\.css$").step("css-loader");
        rule.extract = true;
        options.rules.push(rule);

        let plugins = resolve_plugins(&options, &app(), &[]);

        assert!(!plugins.iter().any(|p| matches!(p, Plugin::Minify { .. })));
        assert_eq!(
            plugins.last(),
            Some(&Plugin::ExtractCss {
                filename: "app-style.min.css".into(),
                disabled: true,
            })
        );
    }

    #[test]
    fn user_define_overrides_node_env_in_place() {
        let mut options = BundleOptions::default();
        options.define.insert("__VERSION__".into(), "\"1.0.0\"".into());
        options.define.insert(NODE_ENV.into(), "\"test\"".into());

        let plugins = resolve_plugins(&options, &app(), &[]);
        let values = plugins
            .iter()
            .find_map(|p| match p {
                Plugin::Define { values } => Some(values),
                _ => None,
            })
            .unwrap();

        let keys: Vec<_> = values.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![NODE_ENV, "__VERSION__"]);
        assert_eq!(values[NODE_ENV], "\"test\"");
    }

    #[test]
    fn scalar_defines_render_as_source_text() {
        let mut options = BundleOptions::default();
        options.define.insert("VERSION".into(), 1.into());
        options.define.insert("DEBUG".into(), false.into());
        options.define.insert("RATIO".into(), 0.5.into());

        let plugins = resolve_plugins(&options, &app(), &[]);
        let values = plugins
            .iter()
            .find_map(|p| match p {
                Plugin::Define { values } => Some(values),
                _ => None,
            })
            .unwrap();

        assert_eq!(values["VERSION"], "1");
        assert_eq!(values["DEBUG"], "false");
        assert_eq!(values["RATIO"], "0.5");
    }

    #[test]
    fn shared_documents_are_not_attached_to_entries() {
        let shared = AuxiliaryDocument {
            template: PathBuf::from("templates/index.ejs"),
            filename: "index.html".into(),
            chunks: vec!["app".into()],
            title: None,
            entry: None,
        };

        let plugins = resolve_plugins(&BundleOptions::default(), &app(), &[shared]);
        assert!(!plugins.iter().any(|p| matches!(p, Plugin::Html(_))));
    }

    #[test]
    fn commons_provide_and_html_in_order() {
        let mut options = BundleOptions::default();
        options.devtool = DevTool::None;
        options.commons = Some(CommonsChunkOptions {
            name: "commons".into(),
            filename: None,
        });
        options.provide.insert("$".into(), "jquery".into());
        options.provide.insert("jQuery".into(), "jquery".into());

        let own = AuxiliaryDocument {
            template: PathBuf::from("templates/app.ejs"),
            filename: "app.html".into(),
            chunks: vec!["commons".into(), "app".into()],
            title: None,
            entry: Some("app".into()),
        };
        let other = AuxiliaryDocument {
            entry: Some("index".into()),
            filename: "index.html".into(),
            ..own.clone()
        };

        let plugins = resolve_plugins(&options, &app(), &[other, own.clone()]);

        assert_eq!(plugins[0], Plugin::Minify { source_map: false });
        assert_eq!(
            plugins[1],
            Plugin::CommonsChunk {
                name: "commons".into(),
                filename: "commons.js".into(),
            }
        );
        assert!(matches!(plugins[2], Plugin::Define { .. }));
        assert!(matches!(&plugins[3], Plugin::Provide { globals } if globals.len() == 2));
        assert_eq!(plugins[4], Plugin::Html(own));
        assert_eq!(plugins.len(), 5);
    }

    #[test]
    fn plugins_serialize_with_kind_tag() {
        let value = serde_json::to_value(Plugin::ExtractCss {
            filename: "app-style.min.css".into(),
            disabled: false,
        })
        .unwrap();
        assert_eq!(value["kind"], "extract-css");
        assert_eq!(value["filename"], "app-style.min.css");
    }
}
