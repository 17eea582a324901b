use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shared_resources::IndexBase;

#[derive(Parser, Debug)]
#[command(author, version, about = "Elevator simulator driving the default random AI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (defaults to config.json, then _config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Index convention for moves: zero or one
    #[arg(long, global = true)]
    pub index_base: Option<IndexBase>,

    /// Seed for a reproducible run
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the building simulation
    Run {
        /// Number of ticks, overrides the configuration
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Only log, do not draw the status tables
        #[arg(long)]
        no_display: bool,
    },
    /// Compute a single move from a JSON description of the building
    Assign {
        /// {"floors": [...], "elevators": [...]}
        #[arg(short, long)]
        input: String,
    },
}
