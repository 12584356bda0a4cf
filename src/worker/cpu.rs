//! CPU-based worker for vanity seed generation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::crypto::Seed;
use crate::matcher::Pattern;

use super::VanityResult;

/// Shared statistics across all workers.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total seeds generated and tested
    pub attempts: AtomicU64,
    /// Matches found
    pub matches_found: AtomicU64,
}

impl WorkerStats {
    /// Creates new worker stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total attempts made.
    pub fn total_attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Returns the total matches found.
    pub fn total_matches(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }
}

/// A CPU worker that generates and tests seeds from its attempt budget.
pub struct CpuWorker {
    /// Worker ID
    id: usize,
    /// The pattern to match against
    pattern: Pattern,
    /// This worker's share of the overall attempt budget
    budget: u64,
    /// Channel to send results
    result_tx: Sender<VanityResult>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Worker statistics
    stats: Arc<WorkerStats>,
}

impl CpuWorker {
    /// Creates a new CPU worker.
    pub fn new(
        id: usize,
        pattern: Pattern,
        budget: u64,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            pattern,
            budget,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Runs the worker loop.
    ///
    /// Draws random seeds and tests them against the pattern until the
    /// attempt budget is exhausted. Every match is sent through the result
    /// channel; a match never ends the loop early. The loop also stops when:
    /// - The stop flag is set (checked between batches)
    /// - The result channel is closed
    pub fn run(&self) {
        // Process in batches to reduce atomic operation overhead
        const BATCH_SIZE: u64 = 1000;

        let mut rng = rand::thread_rng();
        let mut remaining = self.budget;

        while remaining > 0 {
            // Check stop flag
            if self.stop_flag.load(Ordering::Relaxed) {
                break;
            }

            let batch = remaining.min(BATCH_SIZE);

            // Generate and test a batch of seeds
            for _ in 0..batch {
                let seed = Seed::generate(&mut rng);

                if self.pattern.matches(seed.encoded()).is_match() {
                    // Found a match!
                    self.stats.matches_found.fetch_add(1, Ordering::Relaxed);

                    let result = VanityResult {
                        secret: seed.encoded().to_owned(),
                        seed_hex: seed.body_hex(),
                        worker_id: self.id,
                    };

                    // A closed channel means no one is listening anymore
                    if self.result_tx.send(result).is_err() {
                        return;
                    }
                }
            }

            // Update stats
            self.stats.attempts.fetch_add(batch, Ordering::Relaxed);
            remaining -= batch;
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns this worker's attempt budget.
    pub fn budget(&self) -> u64 {
        self.budget
    }
}
