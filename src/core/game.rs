//! Single-game hangman simulation
//!
//! A game starts with every position hidden and a fixed budget of wrong
//! guesses. Each turn draws a letter from a `LetterSupply`: a hit reveals every
//! matching position at no cost, a miss spends one attempt. The game is won once
//! nothing is hidden and lost when attempts run out or the supply runs dry.

use super::word::Target;
use crate::supply::LetterSupply;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::trace;

/// Wrong guesses tolerated by a default game
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 6;

/// Placeholder shown for positions not yet revealed
pub const SENTINEL: char = '_';

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub attempt_budget: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(attempt_budget: u32) -> Self {
        Self { attempt_budget }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPT_BUDGET)
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Won,
    Lost,
}

impl GameOutcome {
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }

    /// 1 for a win, 0 for a loss
    #[inline]
    #[must_use]
    pub const fn as_tally(self) -> usize {
        match self {
            Self::Won => 1,
            Self::Lost => 0,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A single applied guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub letter: char,
    /// Whether the letter occurs in the target
    pub hit: bool,
    /// Number of positions this guess revealed
    pub revealed: usize,
    /// Attempts remaining after the guess
    pub attempts_left: u32,
}

/// Mutable state of one game in progress
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    target: &'a Target,
    revealed: Vec<Option<char>>,
    attempts_left: u32,
    guessed: FxHashSet<char>,
}

impl<'a> GameState<'a> {
    #[must_use]
    pub fn new(target: &'a Target, config: &GameConfig) -> Self {
        Self {
            target,
            revealed: vec![None; target.len()],
            attempts_left: config.attempt_budget,
            guessed: FxHashSet::default(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        self.target
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// True once no position is hidden
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    /// True once the game can take no more guesses
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.attempts_left == 0 || self.is_solved()
    }

    /// Apply a guessed letter to the board
    ///
    /// Re-guessing a letter is harmless on a hit and costs an attempt on a
    /// miss, same as any other wrong guess.
    pub fn apply_guess(&mut self, letter: char) -> Guess {
        self.guessed.insert(letter);

        let positions = self.target.positions_of(letter);
        let mut revealed = 0;
        for &i in positions {
            if self.revealed[i].is_none() {
                self.revealed[i] = Some(letter);
                revealed += 1;
            }
        }

        let hit = !positions.is_empty();
        if !hit {
            self.attempts_left = self.attempts_left.saturating_sub(1);
        }

        trace!(letter = %letter, hit, attempts_left = self.attempts_left, "guess applied");

        Guess {
            letter,
            hit,
            revealed,
            attempts_left: self.attempts_left,
        }
    }

    /// Draw the next letter from `supply` and apply it
    ///
    /// Returns `None` if the supply had nothing left.
    pub fn step<S: LetterSupply + ?Sized>(&mut self, supply: &mut S) -> Option<Guess> {
        let letter = supply.next_letter(&self.guessed)?;
        Some(self.apply_guess(letter))
    }

    /// Outcome as of now: won iff nothing is hidden
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        if self.is_solved() {
            GameOutcome::Won
        } else {
            GameOutcome::Lost
        }
    }

    /// The board with hidden positions shown as `_`
    #[must_use]
    pub fn revealed_text(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(SENTINEL))
            .collect()
    }
}

/// Full history of a played game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: String,
    pub outcome: GameOutcome,
    pub guesses: Vec<Guess>,
    /// Final board, hidden positions as `_`
    pub revealed: String,
    pub attempts_left: u32,
    /// The game ended because the supply ran out of letters
    pub supply_exhausted: bool,
}

/// Play one game to completion
///
/// Always returns an outcome. An empty target is won without drawing a letter.
///
/// # Examples
/// ```
/// use hangman_sim::core::{GameConfig, GameOutcome, Target, simulate};
/// use hangman_sim::supply::PresetSupply;
///
/// let target = Target::new("abc");
/// let mut supply = PresetSupply::new(['a', 'z', 'b', 'c']);
/// let outcome = simulate(&target, &mut supply, &GameConfig::default());
/// assert_eq!(outcome, GameOutcome::Won);
/// ```
pub fn simulate<S: LetterSupply + ?Sized>(
    target: &Target,
    supply: &mut S,
    config: &GameConfig,
) -> GameOutcome {
    let mut state = GameState::new(target, config);
    while !state.is_finished() {
        if state.step(supply).is_none() {
            break;
        }
    }
    state.outcome()
}

/// Play one game to completion, recording every turn
pub fn play<S: LetterSupply + ?Sized>(
    target: &Target,
    supply: &mut S,
    config: &GameConfig,
) -> GameRecord {
    let mut state = GameState::new(target, config);
    let mut guesses = Vec::new();
    let mut supply_exhausted = false;

    while !state.is_finished() {
        match state.step(supply) {
            Some(guess) => guesses.push(guess),
            None => {
                supply_exhausted = true;
                break;
            }
        }
    }

    GameRecord {
        target: target.text().to_string(),
        outcome: state.outcome(),
        guesses,
        revealed: state.revealed_text(),
        attempts_left: state.attempts_left(),
        supply_exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET;
    use crate::supply::{PresetSupply, RandomSupply, SharedPresetSupply};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(word: &str, letters: &str) -> GameOutcome {
        let target = Target::new(word);
        let mut supply = PresetSupply::new(letters.chars());
        simulate(&target, &mut supply, &GameConfig::default())
    }

    #[test]
    fn wins_with_misses_absorbed() {
        assert_eq!(run("abc", "azbc"), GameOutcome::Won);
    }

    #[test]
    fn loses_after_budget_of_misses() {
        assert_eq!(run("abc", "uvwxyz"), GameOutcome::Lost);
        assert_eq!(run("abc", "abuvwxyzc"), GameOutcome::Lost);
    }

    #[test]
    fn fifth_miss_still_allows_win() {
        assert_eq!(run("abc", "uvwxyabc"), GameOutcome::Won);
    }

    #[test]
    fn hit_reveals_all_positions_without_cost() {
        let target = Target::new("banana");
        let mut state = GameState::new(&target, &GameConfig::default());

        let guess = state.apply_guess('a');
        assert!(guess.hit);
        assert_eq!(guess.revealed, 3);
        assert_eq!(state.attempts_left(), 6);
        assert_eq!(state.revealed_text(), "_a_a_a");
    }

    #[test]
    fn each_miss_costs_one_attempt() {
        let target = Target::new("banana");
        let mut state = GameState::new(&target, &GameConfig::default());

        assert_eq!(state.apply_guess('z').attempts_left, 5);
        assert_eq!(state.apply_guess('b').attempts_left, 5);
        assert_eq!(state.apply_guess('q').attempts_left, 4);
        assert_eq!(state.revealed_text(), "b_____");
        assert!(!state.is_finished());
    }

    #[test]
    fn empty_target_wins_without_drawing() {
        let target = Target::new("");
        let mut supply = PresetSupply::new(['a', 'b']);
        let outcome = simulate(&target, &mut supply, &GameConfig::default());

        assert_eq!(outcome, GameOutcome::Won);
        assert_eq!(supply.remaining(), 2);

        let mut random = RandomSupply::new(StdRng::seed_from_u64(0));
        assert_eq!(
            simulate(&target, &mut random, &GameConfig::default()),
            GameOutcome::Won
        );
    }

    #[test]
    fn empty_preset_loses_immediately() {
        let record = play(
            &Target::new("dog"),
            &mut PresetSupply::default(),
            &GameConfig::default(),
        );
        assert_eq!(record.outcome, GameOutcome::Lost);
        assert!(record.supply_exhausted);
        assert!(record.guesses.is_empty());
        assert_eq!(record.attempts_left, 6);
        assert_eq!(record.revealed, "___");
    }

    #[test]
    fn preset_runs_dry_mid_game() {
        let record = play(
            &Target::new("dog"),
            &mut PresetSupply::new(['d', 'x']),
            &GameConfig::default(),
        );
        assert_eq!(record.outcome, GameOutcome::Lost);
        assert!(record.supply_exhausted);
        assert_eq!(record.guesses.len(), 2);
        assert_eq!(record.attempts_left, 5);
        assert_eq!(record.revealed, "d__");
    }

    #[test]
    fn zero_budget_loses_without_drawing() {
        let target = Target::new("a");
        let mut supply = PresetSupply::new(['a']);
        let outcome = simulate(&target, &mut supply, &GameConfig::new(0));
        assert_eq!(outcome, GameOutcome::Lost);
        assert_eq!(supply.remaining(), 1);
    }

    #[test]
    fn custom_budget() {
        assert_eq!(
            simulate(
                &Target::new("ab"),
                &mut PresetSupply::new("xyab".chars()),
                &GameConfig::new(2),
            ),
            GameOutcome::Lost
        );
        assert_eq!(
            simulate(
                &Target::new("ab"),
                &mut PresetSupply::new("xab".chars()),
                &GameConfig::new(2),
            ),
            GameOutcome::Won
        );
    }

    #[test]
    fn repeated_miss_costs_again() {
        let target = Target::new("cat");
        let mut state = GameState::new(&target, &GameConfig::default());
        state.apply_guess('z');
        state.apply_guess('z');
        assert_eq!(state.attempts_left(), 4);
        assert_eq!(state.guessed().len(), 1);
    }

    #[test]
    fn unguessable_target_is_lost() {
        let target = Target::new("a-b");
        let mut supply = PresetSupply::new(ALPHABET);
        assert_eq!(
            simulate(&target, &mut supply, &GameConfig::default()),
            GameOutcome::Lost
        );
    }

    #[test]
    fn shared_pool_is_consumed_across_games() {
        let pool = SharedPresetSupply::new("etaoin".chars());
        let config = GameConfig::default();

        let first = play(&Target::new("tea"), &mut pool.clone(), &config);
        assert_eq!(first.outcome, GameOutcome::Won);
        assert_eq!(pool.remaining(), 3);

        let second = play(&Target::new("tea"), &mut pool.clone(), &config);
        assert_eq!(second.outcome, GameOutcome::Lost);
        assert!(second.supply_exhausted);
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn record_matches_simulate() {
        let target = Target::new("elderberry");
        let config = GameConfig::default();
        for seed in 0..20 {
            let record = play(
                &target,
                &mut RandomSupply::new(StdRng::seed_from_u64(seed)),
                &config,
            );
            let outcome = simulate(
                &target,
                &mut RandomSupply::new(StdRng::seed_from_u64(seed)),
                &config,
            );
            assert_eq!(record.outcome, outcome);
            assert!(!record.supply_exhausted);
        }
    }

    #[test]
    fn outcome_tally() {
        assert_eq!(GameOutcome::Won.as_tally(), 1);
        assert_eq!(GameOutcome::Lost.as_tally(), 0);
        assert!(GameOutcome::Won.is_win());
        assert_eq!(GameOutcome::Lost.to_string(), "lost");
    }

    /// Reference result: walk the draws, stop at the budget, check coverage.
    fn expected_outcome(word: &str, draws: &[char], budget: u32) -> GameOutcome {
        let needed: FxHashSet<char> = word.chars().collect();
        let mut seen = FxHashSet::default();
        let mut misses = 0;
        for &letter in draws {
            if needed.is_subset(&seen) || misses == budget {
                break;
            }
            seen.insert(letter);
            if !needed.contains(&letter) {
                misses += 1;
            }
        }
        if needed.is_subset(&seen) {
            GameOutcome::Won
        } else {
            GameOutcome::Lost
        }
    }

    proptest! {
        #[test]
        fn random_games_terminate(word in "[a-z]{0,20}", seed in any::<u64>()) {
            let target = Target::new(word);
            let record = play(
                &target,
                &mut RandomSupply::new(StdRng::seed_from_u64(seed)),
                &GameConfig::default(),
            );
            let misses = record.guesses.iter().filter(|g| !g.hit).count();
            prop_assert!(misses <= 6);
            prop_assert!(record.guesses.len() <= 26);
            prop_assert_eq!(record.outcome.is_win(), !record.revealed.contains(SENTINEL));
        }

        #[test]
        fn preset_games_match_reference(
            word in "[a-z]{0,20}",
            draws in prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..30),
        ) {
            let pool = PresetSupply::new(draws.iter().copied());
            let unique: Vec<char> = {
                let mut copy = pool.clone();
                std::iter::from_fn(|| copy.take_next()).collect()
            };

            let target = Target::new(word.as_str());
            let mut supply = pool;
            let outcome = simulate(&target, &mut supply, &GameConfig::default());

            prop_assert_eq!(outcome, expected_outcome(&word, &unique, 6));
            prop_assert!(supply.remaining() <= unique.len());
        }
    }
}
