//! Core hangman simulation
//!
//! Word validity, letter frequency counting and the single-game state machine.
//! Everything here is single-threaded and free of shared state; parallelism
//! lives in the batch commands.

mod counts;
mod game;
mod word;

pub use counts::{LetterCounts, count_letters};
pub use game::{
    DEFAULT_ATTEMPT_BUDGET, GameConfig, GameOutcome, GameRecord, GameState, Guess, SENTINEL,
    play, simulate,
};
pub use word::{ALPHABET, Target, is_letter, is_valid_word, parse_letters};
