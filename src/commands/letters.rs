//! Letter selection command
//!
//! Repeatedly counts letters over a word list split across workers, merges the
//! partial counts, and guesses the most common letter. A round whose pick is
//! already among the guessed letters counts as a win; otherwise the pick is
//! added to the guessed letters.

use super::{build_pool, chunk_size, progress_bar, resolve_workers};
use crate::core::{LetterCounts, count_letters};
use crate::error::SimResult;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for letter selection rounds
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    pub rounds: usize,
    /// Worker threads (0 uses rayon's default)
    pub workers: usize,
    /// Number of chunks the word list is split into
    pub chunks: usize,
    pub progress: bool,
}

impl SelectionConfig {
    #[must_use]
    pub fn new(rounds: usize, workers: usize) -> Self {
        Self {
            rounds,
            workers,
            chunks: resolve_workers(workers),
            progress: false,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new(100, rayon::current_num_threads())
    }
}

/// Result of the letter selection rounds
#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub rounds: usize,
    pub wins: usize,
    /// Guessed letters at the end, in the order they were added
    pub guessed: Vec<char>,
    /// Merged counts over the whole word list
    pub counts: LetterCounts,
    pub duration: Duration,
    pub workers: usize,
}

/// Count letters over `words` split into `chunks` contiguous parts
///
/// Each chunk is counted on the current rayon pool and the partial counts are
/// summed once all chunks are done. Equal to `count_letters(words)`.
pub fn count_parallel<S>(words: &[S], chunks: usize) -> LetterCounts
where
    S: AsRef<str> + Sync,
{
    let size = chunk_size(words.len(), chunks);
    let partials: Vec<LetterCounts> = words.par_chunks(size).map(count_letters).collect();
    partials.into_iter().sum()
}

/// Run `config.rounds` letter selection rounds
///
/// # Errors
///
/// Returns `SimError::NoCandidateLetters` if the word list has no valid letters
/// to count, or an error if the worker pool cannot be built.
///
/// # Examples
/// ```
/// use hangman_sim::commands::{SelectionConfig, run_letter_selection};
///
/// let words = ["apple", "banana", "orange", "grape", "kiwi"];
/// let result = run_letter_selection(&words, vec!['e'], &SelectionConfig::new(3, 2)).unwrap();
/// assert_eq!(result.guessed, vec!['e', 'a']);
/// assert_eq!(result.wins, 2);
/// ```
pub fn run_letter_selection<S>(
    words: &[S],
    mut guessed: Vec<char>,
    config: &SelectionConfig,
) -> SimResult<SelectionResult>
where
    S: AsRef<str> + Sync,
{
    let pool = build_pool(config.workers)?;
    let mut wins = 0;
    let mut counts = LetterCounts::new();

    info!(
        words = words.len(),
        rounds = config.rounds,
        workers = pool.current_num_threads(),
        "starting letter selection"
    );

    let pb = progress_bar(config.rounds, config.progress);
    let start = Instant::now();

    for round in 0..config.rounds {
        counts = pool.install(|| count_parallel(words, config.chunks));
        let letter = counts.most_common()?;

        if guessed.contains(&letter) {
            wins += 1;
        } else {
            guessed.push(letter);
        }

        debug!(round, letter = %letter, wins, "round complete");
        pb.inc(1);
    }

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    info!(
        rounds = config.rounds,
        wins,
        elapsed_ms = duration.as_millis() as u64,
        "letter selection complete"
    );

    Ok(SelectionResult {
        rounds: config.rounds,
        wins,
        guessed,
        counts,
        duration,
        workers: pool.current_num_threads(),
    })
}
