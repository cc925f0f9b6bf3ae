//! Preset letter pools

use super::LetterSupply;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// A finite pool of letters consumed front to back
///
/// Duplicate letters are dropped on construction, keeping the first
/// occurrence, so no letter is ever handed out twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetSupply {
    pool: VecDeque<char>,
}

impl PresetSupply {
    /// Create a pool from letters in draw order
    ///
    /// # Examples
    /// ```
    /// use hangman_sim::supply::PresetSupply;
    ///
    /// let mut pool = PresetSupply::new("abca".chars());
    /// assert_eq!(pool.remaining(), 3);
    /// assert_eq!(pool.take_next(), Some('a'));
    /// ```
    #[must_use]
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        let mut seen = FxHashSet::default();
        let pool = letters.into_iter().filter(|&c| seen.insert(c)).collect();
        Self { pool }
    }

    /// Remove and return the next letter
    pub fn take_next(&mut self) -> Option<char> {
        self.pool.pop_front()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Wrap the pool for sharing between games
    #[must_use]
    pub fn into_shared(self) -> SharedPresetSupply {
        SharedPresetSupply {
            inner: Arc::new(Mutex::new(self)),
        }
    }
}

impl LetterSupply for PresetSupply {
    fn next_letter(&mut self, _guessed: &FxHashSet<char>) -> Option<char> {
        self.take_next()
    }
}

/// A preset pool shared by every game of a batch
///
/// Clones are handles onto the same pool. Each draw pops under a lock, so a
/// letter is consumed by at most one game even when games run concurrently.
#[derive(Debug, Clone, Default)]
pub struct SharedPresetSupply {
    inner: Arc<Mutex<PresetSupply>>,
}

impl SharedPresetSupply {
    #[must_use]
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        PresetSupply::new(letters).into_shared()
    }

    /// Remove and return the next letter from the shared pool
    pub fn take_next(&self) -> Option<char> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take_next()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remaining()
    }
}

impl LetterSupply for SharedPresetSupply {
    fn next_letter(&mut self, _guessed: &FxHashSet<char>) -> Option<char> {
        self.take_next()
    }
}
