//! Batch simulation command
//!
//! Plays many independent games split across a worker pool and tallies wins
//! once every chunk has finished.

use super::{build_pool, chunk_size, progress_bar, resolve_workers};
use crate::core::{GameConfig, GameOutcome, Target, is_letter, simulate};
use crate::error::{SimError, SimResult};
use crate::supply::{RandomSupply, SharedPresetSupply};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Where each game of a batch gets its letters from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SupplyMode {
    /// A fresh random supply per game, seeded from the batch seed and the
    /// game's index
    #[default]
    Random,
    /// One preset pool shared by every game in the batch
    Preset(Vec<char>),
}

/// Configuration for a batch of games
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Worker threads (0 uses rayon's default)
    pub workers: usize,
    /// Number of chunks the games are split into
    pub chunks: usize,
    /// Play this many games on targets drawn at random from the list,
    /// instead of one game per listed word
    pub games: Option<usize>,
    pub supply: SupplyMode,
    pub game: GameConfig,
    pub seed: u64,
    pub progress: bool,
}

impl BatchConfig {
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            chunks: resolve_workers(workers),
            games: None,
            supply: SupplyMode::Random,
            game: GameConfig::default(),
            seed: 0,
            progress: false,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Fraction of games won, 0.0 for an empty batch
    pub win_rate: f64,
    pub duration: Duration,
    pub games_per_second: f64,
    pub workers: usize,
    pub chunks: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct ChunkTally {
    wins: usize,
    games: usize,
}

/// Per-game supply factory for a batch
enum BatchSupply {
    Random { seed: u64 },
    Shared(SharedPresetSupply),
}

impl BatchSupply {
    fn from_mode(mode: &SupplyMode, seed: u64) -> SimResult<Self> {
        match mode {
            SupplyMode::Random => Ok(Self::Random { seed }),
            SupplyMode::Preset(letters) => {
                if let Some(&bad) = letters.iter().find(|&&c| !is_letter(c)) {
                    return Err(SimError::InvalidLetter(bad));
                }
                Ok(Self::Shared(SharedPresetSupply::new(letters.iter().copied())))
            }
        }
    }

    fn play(&self, target: &Target, game_index: usize, config: &GameConfig) -> GameOutcome {
        match self {
            Self::Random { seed } => {
                let rng = StdRng::seed_from_u64(game_seed(*seed, game_index));
                simulate(target, &mut RandomSupply::new(rng), config)
            }
            Self::Shared(pool) => simulate(target, &mut pool.clone(), config),
        }
    }
}

/// Seed for one game's random supply, independent of scheduling
fn game_seed(batch_seed: u64, game_index: usize) -> u64 {
    let mut hasher = FxHasher::default();
    (batch_seed, game_index).hash(&mut hasher);
    hasher.finish()
}

/// Pick the targets a batch will play
fn select_targets<'a>(targets: &'a [Target], config: &BatchConfig) -> Vec<&'a Target> {
    match config.games {
        None => targets.iter().collect(),
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            (0..count)
                .filter_map(|_| targets.choose(&mut rng))
                .collect()
        }
    }
}

/// Run a batch of games
///
/// Games are split into contiguous chunks and the chunks are played on a
/// rayon pool of `config.workers` threads. Wins are summed only after every
/// chunk has finished. With a random supply the result does not depend on the
/// number of workers or chunks.
///
/// # Errors
///
/// Returns an error if a preset pool contains a non-letter or the worker pool
/// cannot be built.
///
/// # Examples
/// ```
/// use hangman_sim::commands::{BatchConfig, run_batch};
/// use hangman_sim::core::Target;
///
/// let targets = vec![Target::new("kiwi"), Target::new("fig")];
/// let result = run_batch(&targets, &BatchConfig::new(2)).unwrap();
/// assert_eq!(result.games, 2);
/// assert_eq!(result.wins + result.losses, 2);
/// ```
pub fn run_batch(targets: &[Target], config: &BatchConfig) -> SimResult<BatchResult> {
    let supply = BatchSupply::from_mode(&config.supply, config.seed)?;
    let games = select_targets(targets, config);
    let pool = build_pool(config.workers)?;
    let size = chunk_size(games.len(), config.chunks);
    let chunk_count = games.len().div_ceil(size);

    info!(
        games = games.len(),
        workers = pool.current_num_threads(),
        chunks = chunk_count,
        "starting batch"
    );

    let pb = progress_bar(chunk_count, config.progress);
    let start = Instant::now();

    let tallies: Vec<ChunkTally> = pool.install(|| {
        games
            .par_chunks(size)
            .enumerate()
            .map(|(chunk_index, chunk)| {
                let offset = chunk_index * size;
                let wins: usize = chunk
                    .iter()
                    .enumerate()
                    .map(|(i, target)| supply.play(target, offset + i, &config.game).as_tally())
                    .sum();

                debug!(chunk = chunk_index, games = chunk.len(), wins, "chunk complete");
                pb.inc(1);

                ChunkTally {
                    wins,
                    games: chunk.len(),
                }
            })
            .collect()
    });

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let wins: usize = tallies.iter().map(|t| t.wins).sum();
    let total: usize = tallies.iter().map(|t| t.games).sum();

    let result = BatchResult {
        games: total,
        wins,
        losses: total - wins,
        win_rate: if total > 0 {
            wins as f64 / total as f64
        } else {
            0.0
        },
        duration,
        games_per_second: if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
        workers: pool.current_num_threads(),
        chunks: chunk_count,
    };

    info!(
        games = result.games,
        wins = result.wins,
        elapsed_ms = result.duration.as_millis() as u64,
        "batch complete"
    );

    Ok(result)
}
