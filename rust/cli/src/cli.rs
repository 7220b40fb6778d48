//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "patience",
    version,
    about = "Klondike and Vegas solitaire in the terminal"
)]
pub struct PatienceCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive game
    Play {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Start in Vegas mode
        #[arg(long)]
        vegas: bool,
        /// Start with draw-three (Vegas only)
        #[arg(long = "draw3")]
        draw_three: bool,
        /// Start with cumulative scoring (Vegas only)
        #[arg(long)]
        cumulative: bool,
        /// Append finished deals to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Deal a single layout and print it
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Deal under Vegas rules
        #[arg(long)]
        vegas: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
