//! Word lists for simulated games
//!
//! Provides the embedded target list plus loaders for files and random words.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
