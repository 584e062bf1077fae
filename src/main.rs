//! Seat a roster on a grid, keeping flagged pairs apart and friends together.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use seat_shuffle::action::ShuffleError;
use seat_shuffle::config::RosterConfig;

#[derive(Parser)]
#[command(name = "seat-shuffle")]
#[command(version)]
#[command(about = "Randomized seating with friend and flagged-pair constraints")]
struct Cli {
    /// Roster JSON file (defaults to the built-in eight-person demo)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffle-and-place attempts before giving up
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let mut config = match &cli.config {
        Some(path) => RosterConfig::load(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => RosterConfig::demo(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.max_attempts.is_some() {
        config.max_attempts = cli.max_attempts;
    }

    println!("Generating seating arrangement...");
    let mut shuffler = config.build().context("invalid roster")?;

    match shuffler.run() {
        Ok(arrangement) => {
            println!("Found valid arrangement on attempt {}", arrangement.attempt);
            println!("Seed: {}", arrangement.seed);
            println!("\nSeating Arrangement:");
            print!("{}", arrangement.grid);
            println!("\n{}", shuffler.report(&arrangement));
            Ok(ExitCode::SUCCESS)
        }
        Err(ShuffleError::AttemptsExhausted { attempts }) => {
            println!(
                "Unable to find a valid arrangement after {attempts} attempts. Try relaxing some constraints."
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
