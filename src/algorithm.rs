use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Mutex;

use crate::centroid::mean;
use crate::config::{ClusterConfig, ExecutionMode};
use crate::distance::{nearest_index, total_shift};
use crate::error::ClusterError;
use crate::partition::partition;
use crate::point::Point;

/// Per-cluster members for one iteration, indexed by center position.
type Clusters = Vec<Vec<Point>>;

/// Result of a converged run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    pub centers: Vec<Point>,
    pub iterations: usize,
}

/// One assignment + update step. Implementations bind the dataset up front
/// and map the current centers to the next ones.
pub trait IterationStrategy {
    fn next_centers(&self, centers: &[Point]) -> Result<Vec<Point>, ClusterError>;
}

pub struct Sequential<'a> {
    dataset: &'a [Point],
}

impl<'a> Sequential<'a> {
    pub fn new(dataset: &'a [Point]) -> Self {
        Self { dataset }
    }
}

impl IterationStrategy for Sequential<'_> {
    fn next_centers(&self, centers: &[Point]) -> Result<Vec<Point>, ClusterError> {
        let mut clusters: Clusters = vec![Vec::new(); centers.len()];
        for point in self.dataset {
            let idx = nearest_index(point, centers)
                .ok_or(ClusterError::Unassignable { point: *point })?;
            clusters[idx].push(*point);
        }
        Ok(cluster_means(&clusters))
    }
}

pub struct Concurrent<'a> {
    partitions: Vec<Vec<&'a Point>>,
    pool: ThreadPool,
}

impl<'a> Concurrent<'a> {
    pub fn new(dataset: &'a [Point], task_count: usize, worker_count: usize) -> Result<Self, ClusterError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|idx| format!("kmeans-worker-{}", idx))
            .build()?;
        Ok(Self {
            partitions: partition(dataset, task_count),
            pool,
        })
    }
}

impl IterationStrategy for Concurrent<'_> {
    fn next_centers(&self, centers: &[Point]) -> Result<Vec<Point>, ClusterError> {
        let parts = self.partitions.len();
        // one label slot per task, filled under the lock
        let slots: Mutex<Vec<Vec<usize>>> = Mutex::new(vec![Vec::new(); parts]);

        // try_for_each returns only once every task is done or one has failed
        self.pool.install(|| {
            self.partitions
                .par_iter()
                .with_max_len(1)
                .enumerate()
                .try_for_each(|(task_idx, part)| -> Result<(), ClusterError> {
                    let labels = classify(part, centers)?;

                    let mut slots = slots.lock().map_err(|_| ClusterError::PoisonedAccumulator)?;
                    slots[task_idx] = labels;
                    log::trace!("task {} merged {} points", task_idx, part.len());
                    Ok(())
                })
        })?;

        let slots = slots.into_inner().map_err(|_| ClusterError::PoisonedAccumulator)?;

        // Fold back in dataset order: element i sits at slot i % parts,
        // position i / parts. Cluster sums then match the sequential scan.
        let total: usize = self.partitions.iter().map(Vec::len).sum();
        let mut clusters: Clusters = vec![Vec::new(); centers.len()];
        for idx in 0..total {
            let (task_idx, pos) = (idx % parts, idx / parts);
            clusters[slots[task_idx][pos]].push(*self.partitions[task_idx][pos]);
        }
        Ok(cluster_means(&clusters))
    }
}

/// Nearest center of every point in a partition. Reads only shared state.
fn classify(part: &[&Point], centers: &[Point]) -> Result<Vec<usize>, ClusterError> {
    part.iter()
        .map(|point| nearest_index(point, centers).ok_or(ClusterError::Unassignable { point: **point }))
        .collect()
}

fn cluster_means(clusters: &Clusters) -> Vec<Point> {
    clusters
        .iter()
        .enumerate()
        .map(|(idx, members)| {
            if members.is_empty() {
                log::warn!("cluster {} lost all members, collapsing to origin", idx);
            }
            mean(members)
        })
        .collect()
}

/// Replaces the centers with `strategy.next_centers` until the total shift
/// reaches `config.tolerance` (exactly zero by default).
pub fn converge<S: IterationStrategy>(
    strategy: &S,
    initial_centers: Vec<Point>,
    config: &ClusterConfig,
) -> Result<Clustering, ClusterError> {
    let mut centers = initial_centers;
    let mut iterations = 0;

    loop {
        if let Some(limit) = config.max_iterations {
            if iterations >= limit {
                return Err(ClusterError::IterationLimit { limit });
            }
        }
        if iterations > 0 && iterations % 10 == 0 {
            log::info!("Finished iteration {}", iterations);
        }

        let new_centers = strategy.next_centers(&centers)?;
        let shift = total_shift(&centers, &new_centers);
        centers = new_centers;
        iterations += 1;
        log::debug!("iteration {}: total shift {}", iterations, shift);

        if shift <= config.tolerance {
            log::info!("Converged after {} iterations", iterations);
            return Ok(Clustering { centers, iterations });
        }
    }
}

pub struct KMeans {
    config: ClusterConfig,
}

impl KMeans {
    pub fn new(config: ClusterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Runs the assignment/update loop from `initial_centers` to convergence.
    ///
    /// Fails before iterating when `k` is zero, the center count differs
    /// from `k`, the dataset is empty or the configuration is invalid.
    pub fn cluster(
        &self,
        dataset: &[Point],
        initial_centers: Vec<Point>,
        k: usize,
    ) -> Result<Clustering, ClusterError> {
        if k == 0 {
            return Err(ClusterError::InvalidK(k));
        }
        if initial_centers.len() != k {
            return Err(ClusterError::CenterCountMismatch {
                expected: k,
                actual: initial_centers.len(),
            });
        }
        if dataset.is_empty() {
            return Err(ClusterError::EmptyDataset);
        }
        self.config.validate()?;

        match self.config.mode {
            ExecutionMode::Sequential => {
                log::info!("Starting sequential KMeans with k = {} over {} points", k, dataset.len());
                converge(&Sequential::new(dataset), initial_centers, &self.config)
            }
            ExecutionMode::Concurrent => {
                log::info!(
                    "Starting concurrent KMeans with k = {} over {} points ({} tasks on {} workers)",
                    k,
                    dataset.len(),
                    self.config.task_count,
                    self.config.worker_count
                );
                let strategy = Concurrent::new(dataset, self.config.task_count, self.config.worker_count)?;
                converge(&strategy, initial_centers, &self.config)
            }
        }
    }
}
