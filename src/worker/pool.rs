//! Worker pool management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::matcher::Pattern;

use super::cpu::{CpuWorker, WorkerStats};

/// Result of a successful vanity seed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityResult {
    /// The encoded secret, e.g. `sp6JS7f14BuwFY8Mw6bTtLKWauoUs`
    pub secret: String,
    /// The 16 seed body bytes (uppercase hex)
    pub seed_hex: String,
    /// The ID of the worker that found this result
    pub worker_id: usize,
}

/// Manages a pool of workers for parallel vanity seed generation.
///
/// The overall attempt budget is split evenly across workers; each worker
/// samples independently, so no coordination is needed beyond the shared
/// stop flag and the result channel. The channel disconnects once every
/// worker has exhausted its share, which is how callers observe completion.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// The pattern to search for
    pattern: Pattern,
    /// Overall attempt budget
    max_attempts: u64,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<()>>>,
    /// Channel receiver for results
    result_rx: Receiver<VanityResult>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Shared statistics
    stats: Arc<WorkerStats>,
    /// Start time
    start_time: Instant,
}

impl WorkerPool {
    /// Creates a new worker pool and starts the search.
    ///
    /// `max_attempts` is the total number of candidate seeds to test across
    /// all workers; zero spawns workers with nothing to do, so the result
    /// stream ends immediately.
    pub fn new(num_workers: usize, pattern: Pattern, max_attempts: u64) -> Self {
        let num_workers = num_workers.max(1);
        let (result_tx, result_rx) = bounded(100);
        let stop_flag = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(WorkerStats::new());

        let handles = Self::spawn_workers(
            num_workers,
            pattern.clone(),
            max_attempts,
            result_tx,
            stop_flag.clone(),
            stats.clone(),
        );

        Self {
            num_workers,
            pattern,
            max_attempts,
            handles: Some(handles),
            result_rx,
            stop_flag,
            stats,
            start_time: Instant::now(),
        }
    }

    /// Spawns worker threads, dividing the attempt budget between them.
    fn spawn_workers(
        num_workers: usize,
        pattern: Pattern,
        max_attempts: u64,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Vec<JoinHandle<()>> {
        let base = max_attempts / num_workers as u64;
        let remainder = max_attempts % num_workers as u64;

        // The original result_tx drops when this function returns, leaving
        // one sender per worker; the channel disconnects once all finish.
        (0..num_workers)
            .map(|id| {
                // Low-indexed workers absorb the remainder
                let budget = base + u64::from((id as u64) < remainder);
                let pattern = pattern.clone();
                let result_tx = result_tx.clone();
                let stop_flag = stop_flag.clone();
                let stats = stats.clone();

                thread::Builder::new()
                    .name(format!("vanity-worker-{}", id))
                    .spawn(move || {
                        let worker =
                            CpuWorker::new(id, pattern, budget, result_tx, stop_flag, stats);
                        worker.run();
                    })
                    .expect("Failed to spawn worker thread")
            })
            .collect()
    }

    /// Waits for a result with optional timeout.
    ///
    /// Returns `Some(result)` if a match arrives, `None` if the timeout
    /// expires or every worker has finished.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<VanityResult> {
        self.result_rx.recv_timeout(timeout).ok()
    }

    /// Attempts to receive a result without blocking.
    pub fn try_recv(&self) -> Option<VanityResult> {
        self.result_rx.try_recv().ok()
    }

    /// Returns a blocking iterator over results.
    ///
    /// Matches are yielded as they are found; the iterator ends when the
    /// attempt budget is exhausted (or the pool is stopped).
    pub fn results(&self) -> impl Iterator<Item = VanityResult> + '_ {
        self.result_rx.iter()
    }

    /// Signals all workers to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    /// Stops the search and waits for all workers to exit.
    ///
    /// Remaining buffered results are discarded; callers that want the full
    /// stream should drain [`WorkerPool::results`] first.
    pub fn join(mut self) {
        self.stop();
        // Keep draining until the channel disconnects so a worker that is
        // mid-send on a full channel can finish and observe the stop flag.
        while self.result_rx.recv().is_ok() {}
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the pattern being searched for.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the overall attempt budget.
    pub fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// Returns the total attempts made across all workers.
    pub fn total_attempts(&self) -> u64 {
        self.stats.total_attempts()
    }

    /// Returns the total matches found.
    pub fn total_matches(&self) -> u64 {
        self.stats.total_matches()
    }

    /// Returns the elapsed time since the pool was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the current generation rate (seeds per second).
    pub fn seeds_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_attempts() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Returns a clone of the stop flag for external use (e.g. signal handlers).
    pub fn stop_flag_clone(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Returns true if the pool has been signaled to stop.
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }

    /// Returns true once every worker thread has finished its budget.
    pub fn is_finished(&self) -> bool {
        self.handles
            .as_ref()
            .map(|handles| handles.iter().all(JoinHandle::is_finished))
            .unwrap_or(true)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        if self.handles.is_none() {
            return;
        }
        self.stop();
        // Drain pending results so no worker stays blocked on a full channel
        while self.result_rx.recv().is_ok() {}
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Seed;

    #[test]
    fn empty_prefix_yields_budget_many_results() {
        let pool = WorkerPool::new(3, Pattern::new(""), 25);
        let results: Vec<VanityResult> = pool.results().collect();
        assert_eq!(results.len(), 25);
        assert_eq!(pool.total_attempts(), 25);
        assert_eq!(pool.total_matches(), 25);
        pool.join();
    }

    #[test]
    fn zero_budget_yields_nothing() {
        let pool = WorkerPool::new(2, Pattern::new("a"), 0);
        assert_eq!(pool.results().count(), 0);
        assert_eq!(pool.total_attempts(), 0);
        pool.join();
    }

    #[test]
    fn results_are_valid_secrets() {
        let pool = WorkerPool::new(1, Pattern::new(""), 5);
        for result in pool.results() {
            let seed = Seed::from_encoded(&result.secret).expect("emitted secret must verify");
            assert_eq!(seed.body_hex(), result.seed_hex);
        }
        pool.join();
    }

    #[test]
    fn budget_is_split_across_workers() {
        let pool = WorkerPool::new(4, Pattern::new(""), 10);
        let results: Vec<VanityResult> = pool.results().collect();
        assert_eq!(results.len(), 10);
        // 10 split over 4 workers: budgets 3, 3, 2, 2, so every worker ran.
        for id in 0..4 {
            assert!(results.iter().any(|r| r.worker_id == id));
        }
        pool.join();
    }

    #[test]
    fn stop_ends_the_search_early() {
        let pool = WorkerPool::new(2, Pattern::new("zzzzzzzz"), u64::MAX);
        pool.stop();
        assert!(pool.is_stopped());
        pool.join();
    }
}
