//! Messages and shared flags connecting search workers to the coordinator.

use crate::search::error::SearchError;
use crate::search::result::SearchStatistics;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Periodic report about a state a worker just expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    pub worker_id: usize,
    /// Expansions performed by this worker so far
    pub expanded: u64,
    pub path_cost: u32,
    pub heuristic_cost: u32,
}

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker popped a goal state that beat the best known cost.
    GoalFound { worker_id: usize, path_cost: u32 },
    /// Worker progress sample.
    Progress(ProgressReport),
    /// Worker has finished searching.
    Finished {
        worker_id: usize,
        statistics: SearchStatistics,
    },
    /// Worker hit an internal invariant violation.
    Error { worker_id: usize, error: SearchError },
}

/// Lock-free state shared by all workers.
#[derive(Debug)]
pub struct SharedBest {
    /// Cheapest goal path found so far (u32::MAX means none yet).
    best_cost: AtomicU32,
    /// Flag to signal all workers to stop.
    should_stop: AtomicBool,
    /// Set when the search ended on its own (frontier drained with nobody expanding).
    completed: AtomicBool,
    /// Set when the expansion cap or the timeout stopped the search.
    limit_reached: AtomicBool,
    /// Workers currently between popping a state and admitting its successors.
    in_flight: AtomicUsize,
    /// Expansions across all workers.
    expanded: AtomicU64,
}

impl Default for SharedBest {
    fn default() -> Self {
        Self {
            best_cost: AtomicU32::new(u32::MAX),
            should_stop: AtomicBool::new(false),
            completed: AtomicBool::new(false),
            limit_reached: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
            expanded: AtomicU64::new(0),
        }
    }
}

impl SharedBest {
    /// Try to update the best cost. Returns true if this is a new best.
    pub fn try_update(&self, new_cost: u32) -> bool {
        let mut current = self.best_cost.load(Ordering::SeqCst);
        loop {
            if new_cost >= current {
                return false;
            }
            match self.best_cost.compare_exchange_weak(
                current,
                new_cost,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(c) => current = c,
            }
        }
    }

    /// Get the cheapest goal cost found so far.
    pub fn current_best(&self) -> Option<u32> {
        match self.best_cost.load(Ordering::SeqCst) {
            u32::MAX => None,
            cost => Some(cost),
        }
    }

    /// Check if we should stop searching.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
    }

    /// Stop because the search space (or every cheaper candidate) is used up.
    pub fn signal_complete(&self) {
        self.completed.store(true, Ordering::SeqCst);
        self.signal_stop();
    }

    /// Stop because a resource limit was hit.
    pub fn signal_limit(&self) {
        self.limit_reached.store(true, Ordering::SeqCst);
        self.signal_stop();
    }

    pub fn is_complete(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn limit_reached(&self) -> bool {
        self.limit_reached.load(Ordering::SeqCst)
    }

    /// Must be called while holding the frontier lock, right after a successful pop.
    pub fn begin_expansion(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
    }

    /// Called once every successor of the popped state has been admitted or dropped.
    pub fn end_expansion(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Count one expansion and return the new global total.
    pub fn record_expansion(&self) -> u64 {
        self.expanded.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded.load(Ordering::SeqCst)
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared state for fast checks without channel overhead.
    pub shared: Arc<SharedBest>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared state.
    pub shared: Arc<SharedBest>,
}

/// Create channels for parallel search with the given number of workers.
///
/// The coordinator keeps no sender, so the receiver disconnects once every
/// worker has exited.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedBest::default());

    // Unbounded so that workers never block on reporting
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        shared,
    };

    (coordinator, worker_channels)
}
