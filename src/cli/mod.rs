//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;
pub mod snapshot;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Holdwatch - reports churn in a top-holders leaderboard.
#[derive(Parser, Debug)]
#[command(name = "holdwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the leaderboard and report changes (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Print the stored snapshot as a full listing
    Snapshot(ConfigPathArg),
}

/// Subcommands for `holdwatch check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Fetch the leaderboard once without touching the snapshot
    Source(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Run a single cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Enable Telegram notifications
    #[arg(long)]
    pub telegram: bool,
}
