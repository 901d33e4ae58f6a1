//! Kaprekar routine demo.
//!
//! Picks a random 3-digit and a random 4-digit number and shows every step
//! of Kaprekar's routine until each reaches its constant (495 and 6174).
//!
//! # Quick Start
//!
//! ```bash
//! # One random 3-digit and one random 4-digit run
//! kaprekar
//!
//! # Explicit starting numbers
//! kaprekar --start 3524 --start 100
//!
//! # Explicit start that must be 4 digits
//! kaprekar --width 4 --start 3524
//!
//! # Reproducible 4-digit run, machine-readable
//! kaprekar --width 4 --seed 42 --json
//! ```

mod config;
mod demo;
mod report;
mod source;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use kaprekar_kernel::Width;
use tracing::{Level, debug, warn};

use crate::config::DemoConfig;
use crate::source::RandSource;

/// Kaprekar's routine - sort digits, subtract, repeat until 495 or 6174.
#[derive(Parser, Debug)]
#[command(name = "kaprekar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Digit width to draw a random starting number for (3 or 4). Repeatable.
    /// A single width given with --start only accepts starts of that width.
    #[arg(short, long = "width", value_parser = parse_width)]
    width: Vec<Width>,

    /// Explicit starting number instead of a random one. Repeatable.
    #[arg(short, long = "start")]
    start: Vec<u32>,

    /// Seed the random number generator for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Output the report as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_width(s: &str) -> Result<Width, String> {
    let digits: u8 = s.parse().map_err(|e| format!("invalid width '{s}': {e}"))?;
    Width::try_from(digits).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes logging on stderr so stdout carries only the report.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<()> {
    let config = DemoConfig::from_args(&cli.width, &cli.start, cli.seed, cli.json)?;
    debug!(?config, "demo configuration");

    if cli.seed.is_some() && !config.uses_randomness() {
        warn!("--seed has no effect with explicit --start numbers");
    }

    let mut source = match config.rng_seed {
        Some(seed) => RandSource::seeded(seed),
        None => RandSource::from_entropy(),
    };

    let stdout = io::stdout();
    demo::run_demo(&config, &mut source, &mut stdout.lock())?;
    Ok(())
}
