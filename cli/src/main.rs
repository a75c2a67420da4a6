use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use rand::{SeedableRng, rngs::SmallRng};
use sweeper_core::{CellCount, Coord, GameConfig};

mod game;
mod input;
mod render;

#[derive(Parser, Debug)]
#[command(name = "sweeper", about = "Terminal minesweeper", version)]
struct Args {
    /// Side length of the square board
    #[arg(long, default_value_t = 5)]
    size: Coord,
    /// Number of mines
    #[arg(long, default_value_t = 4)]
    mines: CellCount,
    /// Seed for reproducible boards, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new(args.size, args.mines)
        .with_context(|| format!("cannot play {0}x{0} with {1} mines", args.size, args.mines))?;

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    game::run(config, &mut rng, io::stdin().lock(), io::stdout().lock())
}
