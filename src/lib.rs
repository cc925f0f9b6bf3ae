//! Hangman Simulator
//!
//! Simulates hangman games driven by random or preset letter supplies, counts
//! letter frequencies across word lists, and runs batches of either across a
//! rayon worker pool.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_sim::core::{GameConfig, Target, count_letters, simulate};
//! use hangman_sim::supply::PresetSupply;
//!
//! // Guess the most common letters of a small word list, in order
//! let counts = count_letters(["apple", "banana", "cherry"]);
//! let mut supply = PresetSupply::new(counts.ranked());
//!
//! let outcome = simulate(&Target::new("banana"), &mut supply, &GameConfig::default());
//! println!("Outcome: {outcome}");
//! ```

// Core domain types
pub mod core;

// Letter supplies
pub mod supply;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{SimError, SimResult};
