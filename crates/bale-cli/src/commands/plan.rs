//! Plan command implementation.
//!
//! Resolves the configuration and writes the build plan to stdout as JSON.

use std::io::Write;

use bale_plan::BuildPlan;

use crate::cli::PlanArgs;
use crate::commands::utils::load_config;
use crate::error::Result;

/// Execute the plan command.
///
/// # Errors
///
/// Any configuration error aborts before anything is written to stdout.
pub fn execute(args: PlanArgs) -> Result<()> {
    let (config, root) = load_config(&args.config)?;
    let plan = BuildPlan::resolve(&config, &root)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
