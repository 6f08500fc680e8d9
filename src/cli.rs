use crate::{config::Config, simulate};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "poimap", about = "Location-aware map session simulator", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Seed for all random sources to make a run reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulated position updates (overrides the configuration).
    #[arg(long)]
    steps: Option<u32>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    simulate::run(&cfg, args.seed, args.steps)
}
