//! Match command implementation.
//!
//! Prints the loaders of the transform chain selected for a file, one per
//! line, in execution order.

use std::io::Write;

use bale_plan::{compile_rules, match_transform};

use crate::cli::MatchArgs;
use crate::commands::utils::load_config;
use crate::error::Result;
use crate::ui;

/// Execute the match command.
///
/// Only the rules are resolved; entry sources do not need to exist.
pub fn execute(args: MatchArgs) -> Result<()> {
    let (config, _root) = load_config(&args.config)?;
    let rules = compile_rules(&config.bundle.rules, config.bundle.mode)?;

    match match_transform(&args.file, &rules) {
        Some(chain) => {
            let mut stdout = std::io::stdout().lock();
            for step in chain {
                writeln!(stdout, "{}", step.loader)?;
            }
        }
        None => ui::info(&format!(
            "no transform for {}, passed through untouched",
            args.file.display()
        )),
    }

    Ok(())
}
