//! Letter supplies
//!
//! A `LetterSupply` decides which letter a simulated game guesses next. Two
//! supplies exist: random draws from the unguessed alphabet, and a preset pool
//! that is consumed destructively, optionally shared between games.

mod preset;
mod random;

pub use preset::{PresetSupply, SharedPresetSupply};
pub use random::RandomSupply;

use rustc_hash::FxHashSet;

/// Source of the next guessed letter
pub trait LetterSupply {
    /// Draw the next letter to guess
    ///
    /// `guessed` holds the letters the current game has already tried.
    /// Returns `None` when the supply has nothing left to offer; the game then
    /// ends as lost.
    fn next_letter(&mut self, guessed: &FxHashSet<char>) -> Option<char>;
}

impl<S: LetterSupply + ?Sized> LetterSupply for &mut S {
    fn next_letter(&mut self, guessed: &FxHashSet<char>) -> Option<char> {
        (**self).next_letter(guessed)
    }
}

impl<S: LetterSupply + ?Sized> LetterSupply for Box<S> {
    fn next_letter(&mut self, guessed: &FxHashSet<char>) -> Option<char> {
        (**self).next_letter(guessed)
    }
}
