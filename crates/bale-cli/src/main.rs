//! bale CLI - resolve front-end build configuration into a build plan.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and command dispatch.

use bale_cli::{cli, commands, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(!args.no_color && logger::should_use_colors(), args.quiet);

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Match(match_args) => commands::match_execute(match_args),
    };

    result.map_err(miette::Report::new)
}
