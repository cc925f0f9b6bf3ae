//! Uniform random letter draws

use super::LetterSupply;
use crate::core::ALPHABET;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Draws uniformly from the letters a game has not guessed yet
///
/// The random source is injected so tests and batch runs can seed it.
#[derive(Debug, Clone)]
pub struct RandomSupply<R> {
    rng: R,
}

impl<R: Rng> RandomSupply<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the random source
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> LetterSupply for RandomSupply<R> {
    fn next_letter(&mut self, guessed: &FxHashSet<char>) -> Option<char> {
        let remaining: Vec<char> = ALPHABET
            .iter()
            .copied()
            .filter(|letter| !guessed.contains(letter))
            .collect();

        remaining.choose(&mut self.rng).copied()
    }
}
