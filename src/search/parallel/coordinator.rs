//! Search coordinator that runs A* on a pool of worker threads.
//!
//! Every worker loops over the same shared frontier and visited registry:
//! pop the cheapest state, test it for the goal, expand it, claim each
//! successor in the registry and queue the claimed ones. The coordinator
//! thread only aggregates messages and enforces the timeout.

use crate::board::{successors, BoardState, Tiles};
use crate::search::config::SearchConfig;
use crate::search::error::SearchError;
use crate::search::frontier::Frontier;
use crate::search::parallel::channel::{
    create_channels, CoordinatorChannels, ProgressReport, SharedBest, WorkerChannels,
    WorkerMessage,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::registry::{Claim, VisitedRegistry};
use crate::search::result::{SearchOutcome, SearchResult, SearchStatistics};
use crossbeam_channel::RecvTimeoutError;
use log::{debug, info, trace, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Frontier and registry, each behind its own lock.
///
/// No code path holds both locks at once: a successor is claimed in the
/// registry, that lock is released, and only then is the frontier locked.
#[derive(Debug, Default)]
struct SearchSpace {
    frontier: Mutex<Frontier>,
    registry: Mutex<VisitedRegistry>,
}

/// Releases the other workers if this one unwinds mid-expansion.
struct StopOnPanic(Arc<SharedBest>);

impl Drop for StopOnPanic {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.signal_stop();
        }
    }
}

/// Run A* from `start` and report how the search ended.
pub fn run_search(
    start: &Tiles,
    config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> Result<SearchResult, SearchError> {
    run_search_with_progress(start, config, parallel_config, |_| {})
}

/// Like [`run_search`], forwarding every progress report to `on_progress`.
pub fn run_search_with_progress<F>(
    start: &Tiles,
    config: &SearchConfig,
    parallel_config: &ParallelConfig,
    mut on_progress: F,
) -> Result<SearchResult, SearchError>
where
    F: FnMut(&ProgressReport),
{
    config.validate()?;
    let start_time = Instant::now();
    let num_workers = parallel_config.num_workers.max(1);

    let initial = BoardState::new(*start, config.heuristic)?;
    if !config.heuristic.is_admissible() {
        warn!(
            "heuristic {} overestimates; the reported cost may not be minimal",
            config.heuristic
        );
    }

    if config.check_solvability && !initial.is_solvable() {
        info!("start board fails the parity test, skipping search");
        let mut statistics = SearchStatistics::new(0);
        statistics.elapsed_time = start_time.elapsed();
        return Ok(SearchResult::new(SearchOutcome::Unsolvable, statistics));
    }

    let space = Arc::new(SearchSpace::default());
    space.registry.lock().insert(&initial);
    space.frontier.lock().insert(initial);

    let (coordinator_channels, worker_channels) = create_channels(num_workers);
    let shared = Arc::clone(&coordinator_channels.shared);
    let config_arc = Arc::new(config.clone());
    let parallel_arc = Arc::new(parallel_config.clone());

    if parallel_config.is_sequential() {
        debug!("starting sequential search");
    } else {
        debug!("starting search with {} workers", num_workers);
    }

    let worker_handles: Vec<_> = worker_channels
        .into_iter()
        .enumerate()
        .map(|(worker_id, channels)| {
            let space = Arc::clone(&space);
            let config = Arc::clone(&config_arc);
            let parallel_config = Arc::clone(&parallel_arc);

            thread::spawn(move || {
                run_worker(worker_id, &space, &config, &parallel_config, channels)
            })
        })
        .collect();

    let report = run_coordinator(
        coordinator_channels,
        config,
        num_workers,
        start_time,
        &mut on_progress,
    );

    let mut panicked = None;
    for (worker_id, handle) in worker_handles.into_iter().enumerate() {
        if handle.join().is_err() {
            panicked.get_or_insert(worker_id);
        }
    }

    if let Some(error) = report.error {
        return Err(error);
    }
    if let Some(worker_id) = panicked {
        return Err(SearchError::WorkerPanicked { worker_id });
    }

    let outcome = match shared.current_best() {
        Some(path_cost) => SearchOutcome::Solved {
            path_cost,
            proven_optimal: shared.is_complete() && config.heuristic.is_admissible(),
        },
        None if shared.is_complete() && !shared.limit_reached() => SearchOutcome::Exhausted,
        None => SearchOutcome::LimitReached,
    };

    let mut statistics = SearchStatistics::new(num_workers);
    for worker in &report.worker_statistics {
        statistics.merge(worker);
    }
    statistics.elapsed_time = start_time.elapsed();

    info!(
        "search finished: {} after {} expansions in {:.2?}",
        outcome,
        shared.total_expanded(),
        statistics.elapsed_time
    );

    Ok(SearchResult {
        outcome,
        statistics,
        worker_statistics: report.worker_statistics,
    })
}

/// What the coordinator collected from the workers.
struct CoordinatorReport {
    worker_statistics: Vec<SearchStatistics>,
    error: Option<SearchError>,
}

/// Coordinator loop that receives messages from workers until all have finished.
fn run_coordinator(
    channels: CoordinatorChannels,
    config: &SearchConfig,
    num_workers: usize,
    start_time: Instant,
    on_progress: &mut dyn FnMut(&ProgressReport),
) -> CoordinatorReport {
    let mut worker_statistics = vec![SearchStatistics::new(1); num_workers];
    let mut error = None;
    let mut finished_count = 0;

    let deadline = config.timeout.map(|t| start_time + t);

    loop {
        if deadline.is_some_and(|d| Instant::now() >= d) && !channels.shared.should_stop() {
            warn!("search timed out after {:.2?}", start_time.elapsed());
            channels.shared.signal_limit();
        }

        // Receive with timeout to allow periodic deadline checks
        match channels
            .from_workers
            .recv_timeout(Duration::from_millis(100))
        {
            Ok(WorkerMessage::GoalFound {
                worker_id,
                path_cost,
            }) => {
                info!("worker {} reached the goal at cost {}", worker_id, path_cost);
            }
            Ok(WorkerMessage::Progress(report)) => {
                info!(
                    "worker {} expanded {} states (g={}, h={})",
                    report.worker_id, report.expanded, report.path_cost, report.heuristic_cost
                );
                on_progress(&report);
            }
            Ok(WorkerMessage::Finished {
                worker_id,
                statistics,
            }) => {
                if config.verbose {
                    info!(
                        "worker {} finished: {} expanded, {} generated, {} duplicates",
                        worker_id, statistics.expanded, statistics.generated, statistics.duplicates
                    );
                }
                worker_statistics[worker_id] = statistics;
                finished_count += 1;
                if finished_count >= num_workers {
                    break;
                }
            }
            Ok(WorkerMessage::Error { worker_id, error: e }) => {
                log::error!("worker {} error: {}", worker_id, e);
                channels.shared.signal_stop();
                error.get_or_insert(e);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // All senders dropped, we're done
                break;
            }
        }
    }

    CoordinatorReport {
        worker_statistics,
        error,
    }
}

/// Worker thread entry point.
fn run_worker(
    worker_id: usize,
    space: &SearchSpace,
    config: &SearchConfig,
    parallel_config: &ParallelConfig,
    channels: WorkerChannels,
) {
    let _guard = StopOnPanic(Arc::clone(&channels.shared));
    let mut statistics = SearchStatistics::new(1);

    if let Err(error) = worker_loop(
        worker_id,
        space,
        config,
        parallel_config,
        &channels,
        &mut statistics,
    ) {
        channels.shared.signal_stop();
        let _ = channels
            .to_coordinator
            .send(WorkerMessage::Error { worker_id, error });
    }

    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        statistics,
    });
}

fn worker_loop(
    worker_id: usize,
    space: &SearchSpace,
    config: &SearchConfig,
    parallel_config: &ParallelConfig,
    channels: &WorkerChannels,
    statistics: &mut SearchStatistics,
) -> Result<(), SearchError> {
    let shared = &channels.shared;

    while !shared.should_stop() {
        let popped = {
            let mut frontier = space.frontier.lock();

            // Once a goal is known, queued states that cannot beat it are dead weight
            if let Some(best) = shared.current_best() {
                if frontier.peek_total_cost().is_some_and(|f| f >= best) {
                    frontier.clear();
                }
            }

            match frontier.extract_min() {
                Some(state) => {
                    shared.begin_expansion();
                    Some(state)
                }
                None if shared.in_flight() == 0 => {
                    // Nothing queued and nobody can queue more
                    if !shared.should_stop() {
                        shared.signal_complete();
                    }
                    return Ok(());
                }
                None => None,
            }
        };

        let Some(state) = popped else {
            thread::sleep(parallel_config.idle_wait);
            continue;
        };

        let result = expand(worker_id, state, space, config, channels, statistics);
        shared.end_expansion();
        result?;
    }

    Ok(())
}

/// Goal-test `state` and, unless it is the goal, queue its successors.
fn expand(
    worker_id: usize,
    state: BoardState,
    space: &SearchSpace,
    config: &SearchConfig,
    channels: &WorkerChannels,
    statistics: &mut SearchStatistics,
) -> Result<(), SearchError> {
    let shared = &channels.shared;
    let best = shared.current_best();

    if best.is_some_and(|b| state.total_cost() >= b) {
        return Ok(());
    }

    if state.is_goal() {
        if shared.try_update(state.path_cost()) {
            let _ = channels.to_coordinator.send(WorkerMessage::GoalFound {
                worker_id,
                path_cost: state.path_cost(),
            });
        }
        return Ok(());
    }

    let total = shared.record_expansion();
    if config.max_expansions.is_some_and(|limit| total > limit) {
        debug!("worker {} hit the expansion cap", worker_id);
        shared.signal_limit();
        return Ok(());
    }

    statistics.expanded += 1;
    trace!(
        "worker {} expanding g={} h={} f={}",
        worker_id,
        state.path_cost(),
        state.heuristic_cost(),
        state.total_cost()
    );

    if let Some(interval) = config.progress_interval {
        if statistics.expanded % interval == 0 {
            let _ = channels
                .to_coordinator
                .send(WorkerMessage::Progress(ProgressReport {
                    worker_id,
                    expanded: statistics.expanded,
                    path_cost: state.path_cost(),
                    heuristic_cost: state.heuristic_cost(),
                }));
        }
    }

    for successor in successors(&state)? {
        statistics.generated += 1;

        if best.is_some_and(|b| successor.total_cost() >= b) {
            continue;
        }

        let claim = space.registry.lock().claim(&successor);
        match claim {
            Claim::Known { .. } => {
                statistics.duplicates += 1;
                continue;
            }
            Claim::Improved { previous } => {
                trace!(
                    "worker {} found a shorter path ({} < {})",
                    worker_id,
                    successor.path_cost(),
                    previous
                );
                statistics.reopened += 1;
            }
            Claim::New => {}
        }

        let mut frontier = space.frontier.lock();
        if !frontier.insert(successor).is_admitted() {
            statistics.duplicates += 1;
        }
        statistics.max_frontier = statistics.max_frontier.max(frontier.len());
    }

    Ok(())
}
