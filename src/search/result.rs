//! Search result types and statistics

use std::time::Duration;

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A goal state was reached after `path_cost` moves.
    ///
    /// `proven_optimal` is false when a limit stopped the search before every
    /// cheaper candidate was ruled out.
    Solved { path_cost: u32, proven_optimal: bool },
    /// The frontier ran dry without reaching the goal
    Exhausted,
    /// The start board has the wrong permutation parity
    Unsolvable,
    /// The expansion cap or the timeout ended the search first
    LimitReached,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }

    pub fn path_cost(&self) -> Option<u32> {
        match self {
            SearchOutcome::Solved { path_cost, .. } => Some(*path_cost),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Solved {
                path_cost,
                proven_optimal: true,
            } => write!(f, "solved in {} moves", path_cost),
            SearchOutcome::Solved {
                path_cost,
                proven_optimal: false,
            } => write!(f, "solved in {} moves (optimality not proven)", path_cost),
            SearchOutcome::Exhausted => write!(f, "no solution: search space exhausted"),
            SearchOutcome::Unsolvable => write!(f, "no solution: board parity is unsolvable"),
            SearchOutcome::LimitReached => write!(f, "no solution: search limit reached"),
        }
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of states popped and expanded
    pub expanded: u64,
    /// Number of successor states built
    pub generated: u64,
    /// Successors discarded because their tiles were already known
    pub duplicates: u64,
    /// Successors that replaced a known state with a shorter path
    pub reopened: u64,
    /// Largest frontier size observed
    pub max_frontier: usize,
    /// Number of workers that took part
    pub workers: usize,
}

impl SearchStatistics {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            ..Default::default()
        }
    }

    /// Fold another worker's counters into these
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.expanded += other.expanded;
        self.generated += other.generated;
        self.duplicates += other.duplicates;
        self.reopened += other.reopened;
        self.max_frontier = self.max_frontier.max(other.max_frontier);
    }

    /// Get expansions per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.expanded as f64 / secs
        }
    }

    /// Fraction of generated successors that were duplicates (0.0 to 1.0)
    pub fn duplicate_rate(&self) -> f64 {
        if self.generated == 0 {
            0.0
        } else {
            self.duplicates as f64 / self.generated as f64
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Workers: {}\n", self.workers));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("States expanded: {}\n", self.expanded));
        s.push_str(&format!("States generated: {}\n", self.generated));
        s.push_str(&format!(
            "Duplicates discarded: {} ({:.2}%)\n",
            self.duplicates,
            self.duplicate_rate() * 100.0
        ));
        if self.reopened > 0 {
            s.push_str(&format!("States reopened: {}\n", self.reopened));
        }
        s.push_str(&format!("Peak frontier size: {}\n", self.max_frontier));
        s.push_str(&format!(
            "Throughput: {:.0} expansions/sec\n",
            self.throughput()
        ));
        s
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    /// Statistics aggregated from all workers
    pub statistics: SearchStatistics,
    /// Per-worker statistics, indexed by worker id
    pub worker_statistics: Vec<SearchStatistics>,
}

impl SearchResult {
    pub fn new(outcome: SearchOutcome, statistics: SearchStatistics) -> Self {
        Self {
            outcome,
            statistics,
            worker_statistics: Vec::new(),
        }
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            SearchOutcome::Solved {
                path_cost,
                proven_optimal,
            } => {
                writeln!(f, "Found a solution!")?;
                writeln!(f, "Total cost: {}", path_cost)?;
                if !proven_optimal {
                    writeln!(f, "Search stopped before optimality was proven.")?;
                }
            }
            outcome => writeln!(f, "No solution found ({}).", outcome)?,
        }
        write!(f, "{}", self.statistics.format_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let solved = SearchOutcome::Solved {
            path_cost: 7,
            proven_optimal: true,
        };
        assert!(solved.is_solved());
        assert_eq!(solved.path_cost(), Some(7));

        for outcome in [
            SearchOutcome::Exhausted,
            SearchOutcome::Unsolvable,
            SearchOutcome::LimitReached,
        ] {
            assert!(!outcome.is_solved());
            assert_eq!(outcome.path_cost(), None);
        }
    }

    #[test]
    fn test_statistics_merge() {
        let mut total = SearchStatistics::new(2);
        let a = SearchStatistics {
            expanded: 10,
            generated: 30,
            duplicates: 5,
            reopened: 1,
            max_frontier: 40,
            ..Default::default()
        };
        let b = SearchStatistics {
            expanded: 5,
            generated: 12,
            duplicates: 3,
            reopened: 0,
            max_frontier: 55,
            ..Default::default()
        };
        total.merge(&a);
        total.merge(&b);

        assert_eq!(total.workers, 2);
        assert_eq!(total.expanded, 15);
        assert_eq!(total.generated, 42);
        assert_eq!(total.duplicates, 8);
        assert_eq!(total.reopened, 1);
        assert_eq!(total.max_frontier, 55);
    }

    #[test]
    fn test_statistics_rates() {
        let stats = SearchStatistics {
            expanded: 10000,
            generated: 200,
            duplicates: 50,
            elapsed_time: Duration::from_secs(10),
            ..Default::default()
        };
        assert!((stats.throughput() - 1000.0).abs() < 1e-10);
        assert!((stats.duplicate_rate() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_zero_division() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.throughput(), 0.0);
        assert_eq!(stats.duplicate_rate(), 0.0);
    }

    #[test]
    fn test_result_display() {
        let result = SearchResult::new(
            SearchOutcome::Solved {
                path_cost: 1,
                proven_optimal: true,
            },
            SearchStatistics::new(1),
        );
        let text = result.to_string();
        assert!(text.contains("Found a solution!"));
        assert!(text.contains("Total cost: 1"));

        let result = SearchResult::new(SearchOutcome::Exhausted, SearchStatistics::new(1));
        assert!(result.to_string().contains("No solution found"));
    }
}
