//! Command-line interface definition for bale.
//!
//! # Command Structure
//!
//! - `bale plan` - Print the resolved build plan as JSON
//! - `bale check` - Validate configuration and report a summary
//! - `bale match` - Show which transform chain a file gets

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, MatchArgs, PlanArgs};

/// bale - build configuration resolver
#[derive(Parser, Debug)]
#[command(
    name = "bale",
    version,
    about = "Resolve front-end build configuration into a bundler build plan",
    long_about = "bale reads bale.toml (or the \"bale\" field of package.json), applies\n\
                  profile and BALE_* environment overrides, and resolves entries, output\n\
                  names, transform rules and generated documents into a build plan."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_plan_with_profile() {
        let cli = Cli::try_parse_from(["bale", "plan", "--profile", "development", "--pretty"])
            .unwrap();
        match cli.command {
            Command::Plan(args) => {
                assert_eq!(args.config.profile.as_deref(), Some("development"));
                assert!(args.pretty);
            }
            other => panic!("expected plan command, got {other:?}"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["bale", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn match_requires_a_file() {
        assert!(Cli::try_parse_from(["bale", "match"]).is_err());
    }
}
