use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_filename_template() -> String {
    "[name]-bundle.min.js".to_string()
}

pub(crate) fn default_stylesheet_template() -> String {
    "[name]-style.min.css".to_string()
}

pub(crate) fn default_extensions() -> Vec<String> {
    vec![".js".to_string(), ".json".to_string()]
}

pub(crate) fn default_modules() -> Vec<PathBuf> {
    vec![PathBuf::from("node_modules")]
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}
