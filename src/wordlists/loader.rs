//! Word list loading utilities
//!
//! Provides functions to load word lists from files, use embedded constants, or
//! generate random words.

use crate::core::{ALPHABET, Target};
use crate::error::SimResult;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::path::Path;

/// Longest word produced by [`random_words`]
pub const MAX_RANDOM_WORD_LEN: usize = 10;

/// Load words from a file, one per line
///
/// Blank lines are skipped. Other lines are kept as-is after trimming, even if
/// they are not valid words; letter counting ignores those.
///
/// # Errors
///
/// Returns `SimError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> SimResult<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(words)
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use hangman_sim::wordlists::loader::words_from_slice;
/// use hangman_sim::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Build a game target for each word
#[must_use]
pub fn targets_from_words<S: AsRef<str>>(words: &[S]) -> Vec<Target> {
    words.iter().map(|w| Target::new(w.as_ref())).collect()
}

/// Generate `count` random words of 1 to 10 lowercase letters
pub fn random_words<R: Rng>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=MAX_RANDOM_WORD_LEN);
            (0..len)
                .filter_map(|_| ALPHABET.choose(&mut *rng).copied())
                .collect()
        })
        .collect()
}
