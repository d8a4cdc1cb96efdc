//! Wells CLI - Command-line interface for the foraging simulation.

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "wells")]
#[command(author, version, about = "Wells - a forager learning which well to trust", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (logs every checkup and contemplation)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default wells.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run the experiment
    Run(RunArgs),

    /// Export the resolved experiment
    Export {
        /// Output file path
        output: String,

        /// Export format
        #[arg(short, long, default_value = "toml")]
        format: String,
    },

    /// Show the resolved configuration and wells
    Show,
}

/// Overrides for a single `wells run`.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Load an exported experiment (TOML or JSON) instead of wells.toml
    #[arg(short, long)]
    pub experiment: Option<String>,

    /// Output directory for history.txt and values.json
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of runs
    #[arg(short = 'n', long)]
    pub runs: Option<u64>,

    /// Days between checkups (0 disables them)
    #[arg(short, long)]
    pub checkups: Option<u64>,

    /// Days of forced exploration at the start of each run
    #[arg(long)]
    pub exploration: Option<u64>,

    /// Exploration probability
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Learning rate
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Discount factor
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Health at the start of each run
    #[arg(long)]
    pub max_health: Option<f64>,

    /// Carry values from one run to the next
    #[arg(long)]
    pub retain: bool,

    /// Checkups between contemplations (0 disables them)
    #[arg(long)]
    pub thinking: Option<u64>,

    /// Rehearsal runs per contemplation
    #[arg(long)]
    pub thinking_runs: Option<u64>,

    /// Day cap for each rehearsal run
    #[arg(long)]
    pub thinking_step_limit: Option<u64>,

    /// Day cap for real runs
    #[arg(long)]
    pub step_limit: Option<u64>,

    /// PRNG seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run(args) => commands::run::run(&args),
        Commands::Export { output, format } => commands::export::run(&output, &format),
        Commands::Show => commands::show::run(),
    }
}
