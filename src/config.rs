//! Command-line configuration.
//!
//! Every flag is optional; running with no arguments starts a game with a
//! clock-derived seed and default cell width.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "block-game", version, about = "Falling-block puzzle on a 10x10 board")]
pub struct Args {
    /// Seed for the shape sequence (default: derived from the system clock)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Terminal columns per board cell
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=8))]
    pub cell_width: u16,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// The explicit seed, or one taken from the clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
