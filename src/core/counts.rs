//! Letter frequency counting
//!
//! Counts raw letter occurrences across a collection of words. Counts from
//! disjoint chunks of a word list merge by per-letter summation, so a word list
//! can be split across workers and the partial counts added back together.

use super::word::{ALPHABET, is_valid_word};
use crate::error::{SimError, SimResult};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Occurrence count for each of the 26 lowercase letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: [u64; 26],
}

/// Slot index for a letter, or `None` if it is not in `a..=z`
#[inline]
fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

impl LetterCounts {
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 26] }
    }

    /// Count of a single letter (0 for letters outside `a..=z`)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> u64 {
        slot(letter).map_or(0, |i| self.counts[i])
    }

    /// Add every letter of a word. Invalid words contribute nothing.
    pub fn add_word(&mut self, word: &str) {
        if !is_valid_word(word) {
            return;
        }
        for b in word.bytes() {
            self.counts[(b - b'a') as usize] += 1;
        }
    }

    /// Sum of all letter counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Letters with a non-zero count, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ALPHABET
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, &count)| (letter, count))
    }

    /// Add another set of counts into this one
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// The letter with the highest count
    ///
    /// Ties go to the alphabetically first letter, so the result is the same
    /// on every call and every platform.
    ///
    /// # Errors
    /// Returns `SimError::NoCandidateLetters` if no letter has been counted.
    ///
    /// # Examples
    /// ```
    /// use hangman_sim::core::count_letters;
    ///
    /// let counts = count_letters(["aab", "bba"]);
    /// assert_eq!(counts.most_common().unwrap(), 'a');
    /// ```
    pub fn most_common(&self) -> SimResult<char> {
        let mut best: Option<(char, u64)> = None;
        for (letter, count) in self.iter() {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((letter, count));
            }
        }
        best.map(|(letter, _)| letter)
            .ok_or(SimError::NoCandidateLetters)
    }

    /// Counted letters ordered by count descending, then alphabetically
    #[must_use]
    pub fn ranked(&self) -> Vec<char> {
        let mut letters: Vec<(char, u64)> = self.iter().collect();
        letters.sort_by(|(a, ca), (b, cb)| cb.cmp(ca).then(a.cmp(b)));
        letters.into_iter().map(|(letter, _)| letter).collect()
    }
}

impl AddAssign<&Self> for LetterCounts {
    fn add_assign(&mut self, rhs: &Self) {
        self.merge(rhs);
    }
}

impl AddAssign for LetterCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Add for LetterCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.merge(&rhs);
        self
    }
}

impl Sum for LetterCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<S: AsRef<str>> FromIterator<S> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = Self::new();
        for word in iter {
            counts.add_word(word.as_ref());
        }
        counts
    }
}

/// Count letter occurrences across all valid words
///
/// Repeated letters within a word each count. Words containing anything other
/// than `a..=z` are skipped.
///
/// # Examples
/// ```
/// use hangman_sim::core::count_letters;
///
/// let counts = count_letters(["ab", "bc", "1x"]);
/// assert_eq!(counts.get('a'), 1);
/// assert_eq!(counts.get('b'), 2);
/// assert_eq!(counts.get('c'), 1);
/// assert_eq!(counts.get('x'), 0);
/// ```
pub fn count_letters<I>(words: I) -> LetterCounts
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words.into_iter().collect()
}
