//! Word validity and target word representation
//!
//! A `Target` stores the word to guess along with letter position indices so a
//! correct guess can reveal every matching position in one step.

use crate::error::{SimError, SimResult};
use rustc_hash::FxHashMap;
use std::fmt;

/// The 26 lowercase Latin letters, in alphabetical order
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Check whether a word consists solely of lowercase letters `a..=z`
///
/// The empty word is valid.
///
/// # Examples
/// ```
/// use hangman_sim::core::is_valid_word;
///
/// assert!(is_valid_word("apple"));
/// assert!(is_valid_word(""));
/// assert!(!is_valid_word("Apple"));
/// assert!(!is_valid_word("1x"));
/// ```
#[inline]
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_lowercase())
}

/// Check whether a single character is a guessable letter
#[inline]
#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Parse a string of guessable letters, e.g. `"etaoin"`
///
/// Whitespace and commas are ignored so `"e, t, a"` works too.
///
/// # Errors
/// Returns `SimError::InvalidLetter` for anything outside `a..=z`.
pub fn parse_letters(text: &str) -> SimResult<Vec<char>> {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            if is_letter(c) {
                Ok(c)
            } else {
                Err(SimError::InvalidLetter(c))
            }
        })
        .collect()
}

/// The word a simulated game tries to reveal
///
/// Any text is accepted. Characters outside `a..=z` can never be guessed, so
/// such targets are simply unwinnable rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

impl Target {
    /// Create a new target word
    ///
    /// # Examples
    /// ```
    /// use hangman_sim::core::Target;
    ///
    /// let target = Target::new("banana");
    /// assert_eq!(target.positions_of('a'), &[1, 3, 5]);
    /// assert!(!target.has_letter('z'));
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            chars,
            char_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of positions to reveal
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Distinct letters of the word, alphabetically
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.char_positions.keys().copied().collect();
        letters.sort_unstable();
        letters
    }
}

impl From<&str> for Target {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
