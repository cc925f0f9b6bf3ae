//! Formatting utilities for terminal output

use crate::core::{GameRecord, LetterCounts, SENTINEL};

/// Spell out a board with spaces between positions, e.g. `b _ n _ n _`
#[must_use]
pub fn spaced_board(revealed: &str) -> String {
    let mut result = String::with_capacity(revealed.len() * 2);
    for (i, c) in revealed.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Board after each turn of a recorded game
///
/// Replays the guesses over the target so the display can show how the word
/// was uncovered.
#[must_use]
pub fn boards_by_turn(record: &GameRecord) -> Vec<String> {
    let target: Vec<char> = record.target.chars().collect();
    let mut board = vec![SENTINEL; target.len()];
    let mut boards = Vec::with_capacity(record.guesses.len());

    for guess in &record.guesses {
        for (slot, &c) in board.iter_mut().zip(&target) {
            if c == guess.letter {
                *slot = c;
            }
        }
        boards.push(board.iter().collect());
    }

    boards
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Non-positive max draws an empty bar; the min below clamps overshoot
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a win rate (0.0..=1.0) as a bar
#[must_use]
pub fn win_rate_bar(win_rate: f64, width: usize) -> String {
    create_progress_bar(win_rate, 1.0, width)
}

/// Counted letters with a bar each, most common first
#[must_use]
pub fn letter_histogram(counts: &LetterCounts, width: usize) -> Vec<String> {
    let max = counts.iter().map(|(_, c)| c).max().unwrap_or(0) as f64;

    counts
        .ranked()
        .into_iter()
        .map(|letter| {
            let count = counts.get(letter);
            format!(
                "{letter}: {} {count}",
                create_progress_bar(count as f64, max, width)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Target, count_letters, play};
    use crate::supply::PresetSupply;

    #[test]
    fn spaced_board_separates_positions() {
        assert_eq!(spaced_board("b_n"), "b _ n");
        assert_eq!(spaced_board(""), "");
    }

    #[test]
    fn boards_follow_guesses() {
        let record = play(
            &Target::new("dog"),
            &mut PresetSupply::new(['o', 'x', 'd', 'g']),
            &GameConfig::default(),
        );
        assert_eq!(boards_by_turn(&record), vec!["_o_", "_o_", "do_", "dog"]);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn win_rate_bar_half() {
        assert_eq!(win_rate_bar(0.5, 10), "█████░░░░░");
    }

    #[test]
    fn histogram_most_common_first() {
        let lines = letter_histogram(&count_letters(["aab"]), 4);
        assert_eq!(lines, vec!["a: ████ 2", "b: ██░░ 1"]);
    }
}
