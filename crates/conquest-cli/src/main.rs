//! Conquest CLI - terminal front end for the territory conquest game.
//!
//! - `conquest` - enter territories interactively and play with missions
//! - `conquest --classic` - attacks only, play until exit
//! - `conquest --config game.json` - load players, missions and a preset map

mod controller;
mod display;
mod prompt;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use conquest_core::{Game, GameConfig, RuleSet};

use crate::prompt::Prompter;

#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(about = "Turn-based territory conquest with dice battles and secret missions", version)]
struct Cli {
    /// Dice seed (defaults to the config seed, then the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Play without missions
    #[arg(long)]
    classic: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if cli.classic {
        config.rules = RuleSet::Classic;
    }
    let seed = cli.seed.or(config.seed).unwrap_or_else(clock_seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    writeln!(prompter.output(), "=== TERRITORY SYSTEM - WAR GAME ===")?;

    let territories = if config.territories.is_empty() {
        controller::read_territories(&mut prompter)?
    } else {
        config.preset_territories()?
    };

    let mut game = Game::seeded(&config, territories, seed)?;
    tracing::info!(seed, rules = ?game.rules(), "Starting game");

    let exit = controller::play(&mut game, &mut prompter)?;
    tracing::info!(?exit, turns = game.turn(), "Game finished");
    Ok(())
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
        .unwrap_or_default()
}
