//! Configuration types for the A* search

use crate::board::heuristic::{Heuristic, MAX_MANHATTAN_WEIGHT};
use crate::search::error::SearchError;
use std::time::Duration;

/// Main search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Estimator used to order the frontier
    pub heuristic: Heuristic,
    /// Stop after this many expansions (None = unbounded)
    pub max_expansions: Option<u64>,
    /// Overall wall-clock limit for the search
    pub timeout: Option<Duration>,
    /// Reject boards with the wrong permutation parity before searching
    pub check_solvability: bool,
    /// Report progress every N expansions per worker
    pub progress_interval: Option<u64>,
    /// Verbose output during search
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            max_expansions: None,
            timeout: None,
            check_solvability: true,
            progress_interval: None,
            verbose: false,
        }
    }
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_max_expansions_option(mut self, limit: Option<u64>) -> Self {
        self.max_expansions = limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_solvability_check(mut self, enabled: bool) -> Self {
        self.check_solvability = enabled;
        self
    }

    pub fn with_progress_interval(mut self, interval: Option<u64>) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Reject settings the search cannot honour
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.progress_interval == Some(0) {
            return Err(SearchError::InvalidConfig(
                "progress interval must be at least 1".to_string(),
            ));
        }
        match self.heuristic {
            Heuristic::WeightedManhattan(0) => Err(SearchError::InvalidConfig(
                "Manhattan weight must be at least 1".to_string(),
            )),
            Heuristic::WeightedManhattan(weight) if weight > MAX_MANHATTAN_WEIGHT => {
                Err(SearchError::InvalidConfig(format!(
                    "Manhattan weight {} exceeds the maximum of {}",
                    weight, MAX_MANHATTAN_WEIGHT
                )))
            }
            _ => Ok(()),
        }
    }
}
