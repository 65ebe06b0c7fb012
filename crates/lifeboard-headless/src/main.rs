mod metrics;
mod raster;
mod snapshots;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use lifeboard_core::{Board, LifeConfig};
use metrics::MetricsWriter;
use raster::RasterRenderer;
use snapshots::SnapshotWriter;

#[derive(Parser)]
#[command(name = "lifeboard-headless")]
#[command(about = "Headless CLI runner for Lifeboard experiments")]
struct Cli {
    /// Configuration file path (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory for results
    #[arg(short, long, value_name = "DIR")]
    out: PathBuf,

    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<u32>,

    /// Random seed for the initial board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop as soon as every cell is dead
    #[arg(long)]
    stop_on_extinction: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            serde_yaml::from_str(&std::fs::read_to_string(path)?)?
        }
        None => LifeConfig::default(),
    };
    if let Some(generations) = cli.generations {
        config.world.generations = generations;
    }
    if let Some(seed) = cli.seed {
        config.world.seed = seed;
    }

    // Validate configuration
    if let Err(reason) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", reason);
    }
    config.log_summary();

    std::fs::create_dir_all(&cli.out)?;

    let start_time = Instant::now();
    let summary = run_experiment(&config, &cli.out, cli.stop_on_extinction)?;

    log::info!(
        "Simulation completed in {:?} ({} generations, {} metric rows, {} snapshots)",
        start_time.elapsed(),
        summary.generations,
        summary.metric_rows,
        summary.snapshots.len()
    );
    if let Some(generation) = summary.extinct_at {
        log::info!("Board was empty from generation {}", generation);
    }
    log::info!("Results written to {}", cli.out.display());

    Ok(())
}

/// What a headless run produced
#[derive(Debug)]
struct RunSummary {
    generations: u64,
    metric_rows: u32,
    snapshots: Vec<PathBuf>,
    extinct_at: Option<u64>,
}

/// Run the configured experiment, writing metrics and snapshots into `out`
fn run_experiment(
    config: &LifeConfig,
    out: &Path,
    stop_on_extinction: bool,
) -> Result<RunSummary, anyhow::Error> {
    let dimension = config.world.dimension as usize;
    let mut board = Board::seeded(
        dimension,
        RasterRenderer::new(&config.display),
        config.world.threshold,
        config.world.seed,
    )?;

    let mut metrics_writer = MetricsWriter::new(out)?;
    let snapshot_writer = SnapshotWriter::new(out);
    let snapshot_at: BTreeSet<u64> = config.output.snapshot_at.iter().map(|&g| g as u64).collect();
    let metrics_every = config.output.metrics_every as u64;
    let mut snapshots = Vec::new();
    let mut extinct_at = None;

    log::info!(
        "Running {} generations from {} live cells",
        config.world.generations,
        board.population()
    );

    let mut step_start = Instant::now();
    board.render()?;
    loop {
        let stats = board.last_stats();
        let generation = stats.generation;

        if generation % metrics_every == 0 {
            metrics_writer.write_generation(&stats, dimension, step_start.elapsed())?;
        }
        if snapshot_at.contains(&generation) {
            let path = snapshot_writer.write_frame(generation, board.renderer().image())?;
            log::info!("Snapshot written to {}", path.display());
            snapshots.push(path);
        }
        log::debug!(
            "Generation {}: population {}, +{} -{}",
            generation,
            stats.population,
            stats.births,
            stats.deaths
        );

        if stats.population == 0 && extinct_at.is_none() {
            log::warn!("All cells died at generation {}", generation);
            extinct_at = Some(generation);
        }
        if extinct_at.is_some() && stop_on_extinction {
            break;
        }
        if generation >= config.world.generations as u64 {
            break;
        }

        step_start = Instant::now();
        board.advance_generation();
        board.render()?;
    }

    Ok(RunSummary {
        generations: board.generation(),
        metric_rows: metrics_writer.rows(),
        snapshots,
        extinct_at,
    })
}
