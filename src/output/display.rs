//! Display functions for command results

use super::formatters::{boards_by_turn, letter_histogram, spaced_board, win_rate_bar};
use crate::commands::{BatchResult, SelectionResult};
use crate::core::GameRecord;
use colored::Colorize;

/// Print the turn-by-turn record of a single game
pub fn print_game_record(record: &GameRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Playing: {} ({} letters)",
        record.target.to_uppercase().bright_yellow().bold(),
        record.target.chars().count()
    );
    println!("{}", "─".repeat(60).cyan());

    let boards = boards_by_turn(record);
    for (i, (guess, board)) in record.guesses.iter().zip(&boards).enumerate() {
        let turn = i + 1;
        let letter = guess.letter.to_uppercase().to_string();
        let letter = if guess.hit {
            letter.green().bold()
        } else {
            letter.red()
        };
        println!("\nTurn {turn}: {letter}  {}", spaced_board(board));

        if verbose {
            if guess.hit {
                println!("  Revealed:     {} position(s)", guess.revealed);
            }
            println!("  Attempts left: {}", guess.attempts_left);
        }
    }

    println!();
    if record.outcome.is_win() {
        println!(
            "{}",
            format!("✅ Won after {} guesses!", record.guesses.len())
                .green()
                .bold()
        );
    } else if record.supply_exhausted {
        println!(
            "{}",
            format!(
                "❌ Lost: ran out of letters at {}",
                spaced_board(&record.revealed)
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Lost: no attempts left at {}",
                spaced_board(&record.revealed)
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a batch of games
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Wins:             {}",
        format!("{}", result.wins).green()
    );
    println!(
        "   Losses:           {}",
        format!("{}", result.losses).red()
    );
    println!(
        "   Win rate:         [{}] {}",
        win_rate_bar(result.win_rate, 30).green(),
        format!("{:.2}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Workers:          {}", result.workers);
    println!("   Chunks:           {}", result.chunks);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}

/// Print the result of letter selection rounds
pub fn print_selection_result(result: &SelectionResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER SELECTION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Rounds:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Already guessed:  {}",
        format!("{}", result.wins).green()
    );
    let guessed: String = result.guessed.iter().collect();
    println!(
        "   Guessed letters:  {}",
        guessed.to_uppercase().bright_yellow().bold()
    );
    println!("   Workers:          {}", result.workers);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());

    if !result.counts.is_empty() {
        println!("\n📈 {}", "Letter counts:".bright_cyan().bold());
        for line in letter_histogram(&result.counts, 40).iter().take(10) {
            println!("   {line}");
        }
    }
}
