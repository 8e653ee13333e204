use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Significant peak and valley detection for short timecourses.
#[derive(Parser)]
#[command(
    name = "timecourse",
    version,
    about = "Significant peak and valley detection for short timecourses"
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
    /// Classify every time point as peak, valley or insignificant.
    Classify(RunArgs),
    /// Compute summary metrics of a timecourse.
    Metrics(RunArgs),
}

/// Arguments shared by `classify` and `metrics`.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to the input CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Override the peak sensitivity from config (fraction of the range, 0 to 1).
    #[arg(short, long)]
    pub sensitivity: Option<f64>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output JSON path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
