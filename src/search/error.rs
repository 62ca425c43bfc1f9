//! Errors that abort a search

use crate::board::BoardError;
use thiserror::Error;

/// Internal failures of a search run.
///
/// Running out of states or hitting a limit is not an error; those are
/// reported through [`SearchOutcome`](crate::search::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("board invariant violated: {0}")]
    Board(#[from] BoardError),
    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}
