//! Lifeboard Interactive App
//!
//! Windowed Game of Life viewer drawing one quad per live cell.

mod pacing;
mod renderer;
mod viewer;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lifeboard_params::LifeConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for the initial board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cells per side
    #[arg(short, long)]
    dimension: Option<u32>,

    /// Probability a cell starts alive
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Generations per second
    #[arg(long)]
    fps: Option<u32>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            serde_yaml::from_str(&std::fs::read_to_string(path)?)?
        }
        None => LifeConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.world.seed = seed;
    }
    if let Some(dimension) = cli.dimension {
        config.world.dimension = dimension;
    }
    if let Some(threshold) = cli.threshold {
        config.world.threshold = threshold;
    }
    if let Some(fps) = cli.fps {
        config.display.fps = fps;
    }

    config.validate().map_err(anyhow::Error::msg)?;
    config.log_summary();

    pollster::block_on(viewer::run_viewer(config))
}
