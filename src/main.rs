mod logger;
mod point;
mod load;
mod distance;
mod centroid;
mod partition;
mod initialization;
mod algorithm;
mod inertia;
mod config;
mod error;

use clap::Parser;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use algorithm::KMeans;
use config::{available_workers, ClusterConfig, ExecutionMode, DEFAULT_TASK_COUNT};
use inertia::calculate_inertia;
use initialization::random_centers;
use load::{load_dataset, DEFAULT_REPLICATION_FACTOR};
use crate::logger::init_logger;

/// Parallel k-means over 2-D points read from a `x,y` per line text file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Input file with one `x,y` pair per line.
    input: PathBuf,

    /// Number of clusters.
    k: usize,

    #[arg(long, value_enum, default_value_t = ExecutionMode::Concurrent)]
    mode: ExecutionMode,

    /// Partitions (tasks) per iteration.
    #[arg(long, default_value_t = DEFAULT_TASK_COUNT)]
    tasks: usize,

    /// Worker threads; defaults to the available parallelism.
    #[arg(long)]
    workers: Option<usize>,

    /// Copies of every input record pushed into the dataset.
    #[arg(long, default_value_t = DEFAULT_REPLICATION_FACTOR)]
    replication: usize,

    /// Lower bound for random initial centers.
    #[arg(long, default_value_t = 0.0)]
    lower: f32,

    /// Upper bound (exclusive) for random initial centers.
    #[arg(long, default_value_t = 1_000_000.0)]
    upper: f32,

    /// Seed for the initial centers.
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many iterations instead of looping until convergence.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Total center shift at or below which the run counts as converged.
    #[arg(long, default_value_t = 0.0)]
    tolerance: f64,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    init_logger(opts.log_level)?;

    let start = Instant::now();
    let dataset = load_dataset(&opts.input, opts.replication)
        .map_err(|err| format!("could not read file {}: {}", opts.input.display(), err))?;
    println!(
        "Load Data time elapsed: {} ms   with {} records",
        start.elapsed().as_millis(),
        dataset.len()
    );

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let centers = random_centers(opts.k, opts.lower, opts.upper, &mut rng)?;

    let kmeans = KMeans::new(ClusterConfig {
        mode: opts.mode,
        task_count: opts.tasks,
        worker_count: opts.workers.unwrap_or_else(available_workers),
        max_iterations: opts.max_iterations,
        tolerance: opts.tolerance,
    });

    println!("{:?} version", kmeans.config().mode);
    let start = Instant::now();
    let clustering = kmeans.cluster(&dataset, centers, opts.k)?;
    println!(
        "Time elapsed: {} ms   in {} iterations",
        start.elapsed().as_millis(),
        clustering.iterations
    );

    for (idx, center) in clustering.centers.iter().enumerate() {
        println!("center {}: {}", idx, center);
    }
    println!("Inertia: {}", calculate_inertia(&dataset, &clustering.centers));

    Ok(())
}
