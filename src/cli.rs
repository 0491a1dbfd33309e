use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Klimat emissions trend analysis and forecasting.
#[derive(Parser)]
#[command(
    name = "klimat",
    version,
    about = "Emissions trend analysis and forecasting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build per-year chart series (gap-fill, projection, Carbon Law).
    Approximate(RunArgs),
    /// Summarise trends, Paris-budget verdicts and unusual points.
    Analyze(RunArgs),
}

/// Arguments shared by both subcommands.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to the JSON array of entities.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override approximation mode from config (linear or exponential).
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Override last projected year from config.
    #[arg(long = "end-year")]
    pub end_year: Option<i32>,

    /// Year treated as "now". Defaults to the local calendar year.
    #[arg(long = "current-year")]
    pub current_year: Option<i32>,

    /// Path for JSON output. Written to stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
