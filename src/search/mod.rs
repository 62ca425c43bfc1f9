//! A* search over sliding-tile boards
//!
//! - `frontier`: priority queue of open states with decrease-key
//! - `registry`: best known path cost per visited layout
//! - `parallel`: the worker pool driving the search
//! - `config` / `result`: knobs going in, outcome and statistics coming out

pub mod config;
pub mod error;
pub mod frontier;
pub mod parallel;
pub mod registry;
pub mod result;

pub use config::SearchConfig;
pub use error::SearchError;
pub use parallel::{run_search, run_search_with_progress, ParallelConfig, ProgressReport};
pub use result::{SearchOutcome, SearchResult, SearchStatistics};
