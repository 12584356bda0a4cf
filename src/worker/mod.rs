//! Worker pool for parallel vanity seed search.
//!
//! This module provides:
//! - Multi-threaded CPU workers with a shared attempt budget
//! - Streaming result delivery over a channel
//! - Progress tracking and cooperative cancellation

mod cpu;
mod pool;

pub use cpu::{CpuWorker, WorkerStats};
pub use pool::{VanityResult, WorkerPool};

use crate::matcher::Pattern;

/// Runs a vanity search to completion and collects every match.
///
/// Tests up to `max_attempts` random seeds across `workers` threads,
/// reporting every candidate whose encoded form matches `prefix` starting
/// at the third symbol (case-insensitive). The search never stops early on
/// a match; an empty prefix matches every candidate and a zero budget
/// yields nothing.
///
/// Callers that want matches as they are found should build a
/// [`WorkerPool`] directly and consume [`WorkerPool::results`].
#[must_use]
pub fn search(prefix: &str, max_attempts: u64, workers: usize) -> Vec<VanityResult> {
    let pool = WorkerPool::new(workers, Pattern::new(prefix), max_attempts);
    let results: Vec<VanityResult> = pool.results().collect();
    pool.join();
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_matches_first_candidate() {
        let results = search("", 1, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].secret.len(), 29);
    }

    #[test]
    fn zero_attempts_yields_empty() {
        assert!(search("ab", 0, 4).is_empty());
    }

    #[test]
    fn matches_carry_the_prefix() {
        // Single-symbol prefix: expected hit rate ~1/58 per attempt, so a
        // 2000-attempt budget practically always finds at least one.
        let results = search("p", 2000, 2);
        assert!(!results.is_empty());
        for result in &results {
            assert!(result.secret[2..3].eq_ignore_ascii_case("p"));
        }
    }
}
