//! Configuration for the worker pool.

use std::time::Duration;

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn. One worker runs the plain sequential A*.
    pub num_workers: usize,
    /// Back-off before re-polling a frontier that is empty while other workers are busy.
    pub idle_wait: Duration,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            idle_wait: Duration::from_micros(100),
        }
    }
}

impl ParallelConfig {
    /// Set the number of workers (at least one).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the number of workers from an Option, keeping the default on `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }

    /// Set the idle back-off delay.
    pub fn with_idle_wait(mut self, idle_wait: Duration) -> Self {
        self.idle_wait = idle_wait;
        self
    }

    pub fn is_sequential(&self) -> bool {
        self.num_workers == 1
    }
}
