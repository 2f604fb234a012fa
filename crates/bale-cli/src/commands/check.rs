//! Check command implementation.
//!
//! Validates configuration and resolves the plan without printing it.

use std::collections::HashSet;

use bale_plan::BuildPlan;

use crate::cli::CheckArgs;
use crate::commands::utils::load_config;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the configuration and apply the profile
/// 2. Check entry sources and templates exist
/// 3. Compile rule patterns and detect output collisions
/// 4. Warn about document chunks that nothing produces
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let (config, root) = load_config(&args.config)?;
    let plan = BuildPlan::resolve(&config, &root)?;

    for entry in &plan.entries {
        ui::success(&format!(
            "{} → {}",
            entry.source.display(),
            plan.output_dir.join(&entry.output).display()
        ));
    }

    let mut known: HashSet<&str> = plan.entries.iter().map(|e| e.name.as_str()).collect();
    if let Some(commons) = &config.bundle.commons {
        known.insert(commons.name.as_str());
    }
    for doc in &plan.documents {
        for chunk in doc.chunks.iter().filter(|c| !known.contains(c.as_str())) {
            ui::warning(&format!(
                "{} references chunk `{chunk}`, which no entry or plugin produces",
                doc.filename
            ));
        }
    }

    ui::success(&format!(
        "Configuration is valid: {} entries, {} rules, {} documents",
        plan.entries.len(),
        plan.rules.len(),
        plan.documents.len()
    ));
    Ok(())
}
