//! `dungeon` binary: runs one simulated session and prints its report.
//!
//! Settings come from the environment (optionally a `.env` file) and are then
//! overridden by command-line flags.
//!
//! ```bash
//! dungeon --seed 7 --rooms 12
//! dungeon --no-curse --json
//! RUST_LOG=runtime::ai=debug dungeon --events > events.jsonl
//! ```

mod report;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::TablesLoader;
use runtime::{EventKind, RuntimeConfig, Simulation};
use strum::IntoEnumIterator;

/// Watch a hero explore a generated dungeon.
#[derive(Parser)]
#[command(name = "dungeon")]
#[command(about = "Behavior-tree dungeon simulation", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for generation and every decision
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rooms to generate (at least 3)
    #[arg(long)]
    rooms: Option<usize>,

    /// Stop after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Disable the automated curse
    #[arg(long)]
    no_curse: bool,

    /// Per-turn chance that the curse acts (0.0-1.0)
    #[arg(long)]
    curse_chance: Option<f64>,

    /// Content tables to generate from (.ron or .toml)
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Stream every event to stdout as JSON lines
    #[arg(long)]
    events: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, mut config: RuntimeConfig) -> RuntimeConfig {
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(rooms) = self.rooms {
            config = config.with_rooms(rooms);
        }
        if let Some(max_turns) = self.max_turns {
            config.game = config.game.with_max_turns(max_turns);
        }
        if self.no_curse {
            config = config.with_curse(false);
        }
        if let Some(chance) = self.curse_chance {
            config = config.with_curse_chance(chance);
        }
        config
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(RuntimeConfig::from_env());
    tracing::debug!(?config, "configuration resolved");

    let mut simulation = match &cli.tables {
        Some(path) => {
            let tables = TablesLoader::load(path)
                .with_context(|| format!("loading content tables from {}", path.display()))?;
            Simulation::with_tables(config, tables)?
        }
        None => Simulation::new(config)?,
    };

    if cli.events {
        stream_events(&simulation);
    }

    let report = simulation.run();

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        report::render(&mut stdout, &report)?;
    }
    Ok(())
}

/// Prints each event as one JSON line the moment it is published.
fn stream_events(simulation: &Simulation) {
    for kind in EventKind::iter() {
        simulation.bus().subscribe(kind, |_, event| {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(error) => tracing::warn!(%error, "event could not be encoded"),
            }
        });
    }
}
