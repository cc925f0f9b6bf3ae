//! Hangman Simulator - CLI
//!
//! Plays single hangman games, runs parallel batches of simulated games, and
//! runs parallel letter-frequency selection rounds.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_sim::{
    commands::{
        BatchConfig, PlayConfig, SelectionConfig, SupplyMode, play_word, run_batch,
        run_letter_selection,
    },
    core::{GameConfig, count_letters, parse_letters},
    output::{print_batch_result, print_game_record, print_selection_result},
    wordlists::{
        WORDS,
        loader::{load_from_file, random_words, targets_from_words, words_from_slice},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman_sim",
    about = "Hangman game simulator with letter-frequency guessing and parallel batches",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single word and show every turn
    Play {
        /// The target word
        word: String,

        /// Guess these letters in order instead of at random
        #[arg(short, long)]
        pool: Option<String>,

        /// Seed for random guesses
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "6")]
        attempts: u32,

        /// Show attempts and revealed positions per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Simulate a batch of games across worker threads
    Simulate {
        /// Number of games on randomly drawn words (default: each word once)
        #[arg(short = 'n', long)]
        games: Option<usize>,

        /// Worker threads (0 = one per core)
        #[arg(short = 'j', long, default_value = "0")]
        workers: usize,

        /// Number of chunks to split the games into (default: one per worker)
        #[arg(short, long)]
        chunks: Option<usize>,

        /// Share one preset letter pool across all games
        #[arg(short, long, conflicts_with = "ranked_pool")]
        pool: Option<String>,

        /// Share one pool of the word list's letters, most common first
        #[arg(long)]
        ranked_pool: bool,

        /// Seed for target selection and random guesses
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Wrong guesses allowed per game
        #[arg(short, long, default_value = "6")]
        attempts: u32,
    },

    /// Pick the most common letter over the word list, round after round
    Letters {
        /// Use this many random words instead of the word list
        #[arg(short, long)]
        random_words: Option<usize>,

        /// Number of selection rounds
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Worker threads (0 = one per core)
        #[arg(short = 'j', long, default_value = "0")]
        workers: usize,

        /// Number of chunks to split the word list into (default: one per worker)
        #[arg(short, long)]
        chunks: Option<usize>,

        /// Letters considered guessed before the first round
        #[arg(short, long, default_value = "ae")]
        guessed: String,

        /// Seed for random words
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("loading word list {path}")),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hangman_sim={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Simulate {
        games: None,
        workers: 0,
        chunks: None,
        pool: None,
        ranked_pool: false,
        seed: 0,
        attempts: 6,
    });

    match command {
        Commands::Play {
            word,
            pool,
            seed,
            attempts,
            details,
        } => run_play_command(&word, pool.as_deref(), seed, attempts, details),
        Commands::Simulate {
            games,
            workers,
            chunks,
            pool,
            ranked_pool,
            seed,
            attempts,
        } => {
            let words = load_wordlist(&cli.wordlist)?;
            let supply = if ranked_pool {
                SupplyMode::Preset(count_letters(&words).ranked())
            } else if let Some(letters) = pool {
                SupplyMode::Preset(parse_letters(&letters)?)
            } else {
                SupplyMode::Random
            };

            let mut config = BatchConfig::new(workers);
            if let Some(chunks) = chunks {
                config.chunks = chunks;
            }
            config.games = games;
            config.supply = supply;
            config.game = GameConfig::new(attempts);
            config.seed = seed;
            config.progress = true;

            run_simulate_command(&words, &config)
        }
        Commands::Letters {
            random_words: random_count,
            rounds,
            workers,
            chunks,
            guessed,
            seed,
        } => {
            let words = match random_count {
                Some(count) => random_words(count, &mut StdRng::seed_from_u64(seed)),
                None => load_wordlist(&cli.wordlist)?,
            };

            let mut config = SelectionConfig::new(rounds, workers);
            if let Some(chunks) = chunks {
                config.chunks = chunks;
            }
            config.progress = true;

            run_letters_command(&words, parse_letters(&guessed)?, &config)
        }
    }
}

fn run_play_command(
    word: &str,
    pool: Option<&str>,
    seed: u64,
    attempts: u32,
    details: bool,
) -> Result<()> {
    let mut config = PlayConfig::new(seed);
    if let Some(letters) = pool {
        config = config.with_pool(parse_letters(letters)?);
    }
    config.game = GameConfig::new(attempts);

    let record = play_word(word, &config)?;
    print_game_record(&record, details);
    Ok(())
}

fn run_simulate_command(words: &[String], config: &BatchConfig) -> Result<()> {
    let targets = targets_from_words(words);
    match &config.games {
        Some(count) => println!(
            "Simulating {count} games on words drawn from {} targets...",
            targets.len()
        ),
        None => println!("Simulating one game per word ({} words)...", targets.len()),
    }

    let result = run_batch(&targets, config)?;
    info!(win_rate = result.win_rate, "simulation finished");
    print_batch_result(&result);
    Ok(())
}

fn run_letters_command(
    words: &[String],
    guessed: Vec<char>,
    config: &SelectionConfig,
) -> Result<()> {
    println!(
        "Running {} letter selection rounds over {} words...",
        config.rounds,
        words.len()
    );

    let result = run_letter_selection(words, guessed, config)?;
    print_selection_result(&result);
    Ok(())
}
