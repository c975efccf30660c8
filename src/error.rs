use thiserror::Error;

use crate::point::Point;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("number of clusters must be at least 1, got {0}")]
    InvalidK(usize),
    #[error("expected {expected} initial centers, got {actual}")]
    CenterCountMismatch { expected: usize, actual: usize },
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("point {point} has no comparable distance to any center")]
    Unassignable { point: Point },
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    #[error("cluster accumulator poisoned by a failed task")]
    PoisonedAccumulator,
    #[error("no convergence within {limit} iterations")]
    IterationLimit { limit: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `x,y`, found {content:?}")]
    Parse { line: usize, content: String },
    #[error("replication factor must be at least 1")]
    InvalidReplication,
}
