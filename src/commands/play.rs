//! Single game command
//!
//! Plays one target word and returns the turn-by-turn record.

use crate::core::{GameConfig, GameRecord, Target, is_letter, play};
use crate::error::{SimError, SimResult};
use crate::supply::{PresetSupply, RandomSupply};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Configuration for playing a single word
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Guess from this pool in order instead of at random
    pub pool: Option<Vec<char>>,
    pub seed: u64,
    pub game: GameConfig,
}

impl PlayConfig {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            pool: None,
            seed,
            game: GameConfig::default(),
        }
    }

    #[must_use]
    pub fn with_pool(mut self, pool: Vec<char>) -> Self {
        self.pool = Some(pool);
        self
    }
}

/// Play one game on `word`
///
/// # Errors
///
/// Returns `SimError::InvalidLetter` if the pool contains a non-letter.
///
/// # Examples
/// ```
/// use hangman_sim::commands::{PlayConfig, play_word};
/// use hangman_sim::core::GameOutcome;
///
/// let config = PlayConfig::new(0).with_pool("dgo".chars().collect());
/// let record = play_word("dog", &config).unwrap();
/// assert_eq!(record.outcome, GameOutcome::Won);
/// assert_eq!(record.guesses.len(), 3);
/// ```
pub fn play_word(word: &str, config: &PlayConfig) -> SimResult<GameRecord> {
    let target = Target::new(word);

    let record = match &config.pool {
        Some(letters) => {
            if let Some(&bad) = letters.iter().find(|&&c| !is_letter(c)) {
                return Err(SimError::InvalidLetter(bad));
            }
            let mut supply = PresetSupply::new(letters.iter().copied());
            play(&target, &mut supply, &config.game)
        }
        None => {
            let mut supply = RandomSupply::new(StdRng::seed_from_u64(config.seed));
            play(&target, &mut supply, &config.game)
        }
    };

    debug!(
        word,
        outcome = %record.outcome,
        guesses = record.guesses.len(),
        "game played"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameOutcome;

    #[test]
    fn random_play_is_reproducible() {
        let config = PlayConfig::new(1234);
        let first = play_word("elderberry", &config).unwrap();
        let second = play_word("elderberry", &config).unwrap();

        assert_eq!(first.guesses, second.guesses);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn preset_play_follows_pool() {
        let config = PlayConfig::new(0).with_pool(vec!['a', 'x', 'n', 'b']);
        let record = play_word("banana", &config).unwrap();

        let letters: Vec<char> = record.guesses.iter().map(|g| g.letter).collect();
        assert_eq!(letters, vec!['a', 'x', 'n', 'b']);
        assert_eq!(record.outcome, GameOutcome::Won);
        assert_eq!(record.attempts_left, 5);
        assert_eq!(record.revealed, "banana");
    }

    #[test]
    fn preset_play_runs_dry() {
        let config = PlayConfig::new(0).with_pool(Vec::new());
        let record = play_word("dog", &config).unwrap();
        assert_eq!(record.outcome, GameOutcome::Lost);
        assert!(record.supply_exhausted);
    }

    #[test]
    fn custom_budget_applies() {
        let mut config = PlayConfig::new(0).with_pool(vec!['x', 'd', 'o', 'g']);
        config.game = GameConfig::new(1);
        let record = play_word("dog", &config).unwrap();
        assert_eq!(record.outcome, GameOutcome::Lost);
        assert_eq!(record.guesses.len(), 1);
    }

    #[test]
    fn invalid_pool_rejected() {
        let config = PlayConfig::new(0).with_pool(vec!['!']);
        assert!(matches!(
            play_word("dog", &config),
            Err(SimError::InvalidLetter('!'))
        ));
    }
}
