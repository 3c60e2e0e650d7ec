//! Command-line front end for the YT airdrop simulator.
//!
//! Loads a JSON scenario, runs one simulation or an entry-timing sweep, and
//! prints a text report or the raw result as JSON.

mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use ytdrop_core::SimulationConfig;
use ytdrop_sim::{simulate_airdrop, timing_sweep};

use crate::scenario::{load_scenario, parse_entry_days};

/// Pendle YT points-program airdrop simulator.
#[derive(Parser)]
#[command(name = "ytdrop-cli")]
#[command(version, about = "Estimate a YT airdrop allocation and the best entry day.")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Log format (text or json).
    #[arg(long, default_value = "text", global = true)]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation.
    Simulate(SimulateArgs),
    /// Re-run the simulation for each candidate entry day.
    Sweep(SweepArgs),
    /// Print a sample scenario as JSON.
    Example,
}

#[derive(Args)]
struct SimulateArgs {
    /// Path to the scenario JSON file.
    #[arg(short, long)]
    config: PathBuf,

    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SweepArgs {
    /// Path to the scenario JSON file.
    #[arg(short, long)]
    config: PathBuf,

    /// Comma-separated entry days to test (default: every day).
    #[arg(long)]
    entry_days: Option<String>,

    /// Number of best entry days to list per FDV.
    #[arg(long, default_value = "5")]
    top: usize,

    /// Print the full sweep as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    match cli.command {
        Commands::Simulate(args) => run_simulate(args),
        Commands::Sweep(args) => run_sweep(args),
        Commands::Example => print_example(),
    }
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
    let config = load_scenario(&args.config)?;
    info!(path = %args.config.display(), days = config.duration_days, "loaded scenario");

    let result = simulate_airdrop(&config).context("Simulation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let mut out = String::new();
        report::write_simulation(&mut out, &result)?;
        print!("{out}");
    }
    Ok(())
}

fn run_sweep(args: SweepArgs) -> Result<()> {
    let config = load_scenario(&args.config)?;
    let entry_days = args.entry_days.as_deref().map(parse_entry_days).transpose()?;
    info!(
        path = %args.config.display(),
        days = config.duration_days,
        holdings = config.user_yt_tokens.len(),
        "loaded scenario"
    );

    let sweeps = timing_sweep(&config, entry_days.as_deref()).context("Timing sweep failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sweeps)?);
    } else {
        let mut out = String::new();
        report::write_sweep(&mut out, &sweeps, &config.fdv_list, args.top)?;
        print!("{out}");
    }
    Ok(())
}

fn print_example() -> Result<()> {
    let json = serde_json::to_string_pretty(&SimulationConfig::example())
        .context("Failed to serialize example scenario")?;
    println!("{json}");
    Ok(())
}
