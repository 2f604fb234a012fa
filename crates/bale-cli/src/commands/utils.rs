//! Configuration loading shared by all commands.

use std::path::{Path, PathBuf};

use bale_config::{BaleConfig, ConfigDiscovery};
use tracing::debug;

use crate::cli::ConfigArgs;
use crate::error::Result;

/// Load the configuration selected by the command-line options.
///
/// Returns the configuration with its profile applied, together with the
/// project root that relative paths resolve against.
pub fn load_config(args: &ConfigArgs) -> Result<(BaleConfig, PathBuf)> {
    let root = match (&args.root, &args.config) {
        (Some(root), _) => root.clone(),
        (None, Some(file)) => config_dir(file),
        (None, None) => std::env::current_dir()?,
    };

    let mut discovery = ConfigDiscovery::new(&root);
    if args.no_env {
        discovery = discovery.without_env();
    }
    if let Some(profile) = &args.profile {
        discovery = discovery.with_profile(profile);
    }

    let config = match &args.config {
        Some(file) => discovery.load_file(file)?,
        None => discovery.load()?,
    };

    debug!(root = %root.display(), profile = ?args.profile, "configuration loaded");
    Ok((config, root))
}

fn config_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
