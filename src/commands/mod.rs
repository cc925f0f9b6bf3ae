//! Command implementations
//!
//! The batch harness that drives the core simulator: single traced games,
//! parallel batches of games, and parallel letter-selection rounds.

pub mod letters;
pub mod play;
pub mod simulate;

pub use letters::{SelectionConfig, SelectionResult, count_parallel, run_letter_selection};
pub use play::{PlayConfig, play_word};
pub use simulate::{BatchConfig, BatchResult, SupplyMode, run_batch};

use crate::error::{SimError, SimResult};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Build a rayon pool with `workers` threads (0 lets rayon decide)
pub(crate) fn build_pool(workers: usize) -> SimResult<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SimError::WorkerPool(e.to_string()))
}

/// Worker count with 0 resolved to rayon's default pool size
#[must_use]
pub fn resolve_workers(workers: usize) -> usize {
    if workers == 0 {
        rayon::current_num_threads()
    } else {
        workers
    }
}

/// Number of items per chunk when splitting `len` items into `chunks` parts
pub(crate) fn chunk_size(len: usize, chunks: usize) -> usize {
    len.div_ceil(chunks.max(1)).max(1)
}

/// Progress bar over `len` steps, hidden unless `enabled`
pub(crate) fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_covers_all_items() {
        assert_eq!(chunk_size(10, 4), 3);
        assert_eq!(chunk_size(8, 4), 2);
        assert_eq!(chunk_size(3, 8), 1);
        assert_eq!(chunk_size(0, 4), 1);
        assert_eq!(chunk_size(5, 0), 5);
    }

    #[test]
    fn zero_workers_resolve_to_default_pool() {
        assert_eq!(resolve_workers(0), rayon::current_num_threads());
        assert_eq!(resolve_workers(5), 5);
    }

    #[test]
    fn pool_has_requested_threads() {
        let pool = build_pool(3).unwrap();
        assert_eq!(pool.current_num_threads(), 3);
    }

    #[test]
    fn hidden_progress_bar() {
        let pb = progress_bar(10, false);
        assert!(pb.is_hidden());
    }
}
