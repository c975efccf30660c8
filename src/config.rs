use std::num::NonZeroUsize;
use std::thread;

use crate::error::ClusterError;

pub const DEFAULT_TASK_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExecutionMode {
    /// Single-threaded scan over the dataset in order.
    Sequential,
    /// Partitioned classification on a worker pool with a locked merge.
    #[default]
    Concurrent,
}

#[derive(Debug, Clone)]
pub struct ClusterConfig {
    pub mode: ExecutionMode,
    /// Number of partitions, and so tasks, per iteration.
    pub task_count: usize,
    /// Threads in the worker pool.
    pub worker_count: usize,
    /// `None` iterates until an exact fixed point.
    pub max_iterations: Option<usize>,
    /// Stop once the total center shift is at or below this value.
    pub tolerance: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            task_count: DEFAULT_TASK_COUNT,
            worker_count: available_workers(),
            max_iterations: None,
            tolerance: 0.0,
        }
    }
}

impl ClusterConfig {
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.task_count == 0 {
            return Err(ClusterError::InvalidConfig("task_count must be at least 1".into()));
        }
        if self.worker_count == 0 {
            return Err(ClusterError::InvalidConfig("worker_count must be at least 1".into()));
        }
        if self.max_iterations == Some(0) {
            return Err(ClusterError::InvalidConfig("max_iterations must be at least 1".into()));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

pub fn available_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ClusterConfig::default();
        assert_eq!(config.mode, ExecutionMode::Concurrent);
        assert_eq!(config.task_count, DEFAULT_TASK_COUNT);
        assert!(config.worker_count >= 1);
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.tolerance, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_values() {
        let cases = [
            ClusterConfig { task_count: 0, ..Default::default() },
            ClusterConfig { worker_count: 0, ..Default::default() },
            ClusterConfig { max_iterations: Some(0), ..Default::default() },
            ClusterConfig { tolerance: -1.0, ..Default::default() },
            ClusterConfig { tolerance: f64::NAN, ..Default::default() },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ClusterError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }
}
