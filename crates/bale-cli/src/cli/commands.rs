use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available bale subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the configuration and print the build plan as JSON
    ///
    /// The plan is written to stdout so it can be piped straight into the
    /// bundler wrapper.
    Plan(PlanArgs),

    /// Validate configuration without printing the plan
    ///
    /// Checks that every entry source and HTML template exists, that rule
    /// patterns compile, and that no two outputs share a filename.
    Check(CheckArgs),

    /// Show the transform chain selected for a file
    Match(MatchArgs),
}

/// Options shared by every command that loads configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to bale.toml or package.json
    ///
    /// If not provided, searches the project root for bale.toml, then for a
    /// "bale" field in package.json.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile whose overrides are merged over the base configuration
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Project root that entry and template paths are relative to
    ///
    /// Defaults to the directory of the configuration file, or the current
    /// directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Ignore BALE_* environment overrides
    #[arg(long)]
    pub no_env: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Pretty-print the JSON plan
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the match command
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// File path to look up, `/`-separated and relative to the project root
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}
