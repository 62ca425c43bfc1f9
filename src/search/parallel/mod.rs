//! Concurrent A* over a shared frontier.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that spawns worker threads, enforces the timeout and aggregates results
//! - Multiple **workers** that pop, goal-test and expand states from one shared frontier
//! - A **channel system** carrying goal, progress and completion messages to the coordinator
//! - **Shared atomics** for the best goal cost, stop flags and the in-flight expansion count
//!
//! With a single worker the search is the textbook sequential A*.
//!
//! # Example
//!
//! ```
//! use slidesolve::board::parse_board;
//! use slidesolve::search::{run_search, ParallelConfig, SearchConfig};
//!
//! let tiles = parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 - 15")?;
//! let parallel = ParallelConfig::default().with_workers(4);
//! let result = run_search(&tiles, &SearchConfig::default(), &parallel)?;
//! assert_eq!(result.outcome.path_cost(), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use channel::ProgressReport;
pub use config::ParallelConfig;
pub use coordinator::{run_search, run_search_with_progress};
