//! Formatting utilities for terminal output

use crate::core::{Evaluation, EvaluationCell, LetterStatus};
use crate::game::{KEY_ROWS, KeyboardState};
use colored::{ColoredString, Colorize};

/// Render one cell as a coloured tile, e.g. ` A ` on green
#[must_use]
pub fn tile(cell: &EvaluationCell) -> ColoredString {
    let text = format!(" {} ", cell.letter);
    match cell.status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Render a whole evaluation as a row of tiles
#[must_use]
pub fn evaluation_row(evaluation: &Evaluation) -> String {
    evaluation
        .cells()
        .iter()
        .map(|cell| tile(cell).to_string())
        .collect()
}

/// Render an empty row placeholder for `len` letters
#[must_use]
pub fn empty_row(len: usize) -> String {
    " _ ".repeat(len).bright_black().to_string()
}

/// Render the keyboard with every guessed key shaded
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| match keyboard.status(key) {
                    Some(LetterStatus::Correct) => key.to_string().green().bold().to_string(),
                    Some(LetterStatus::Present) => key.to_string().yellow().bold().to_string(),
                    Some(LetterStatus::Absent) => key.to_string().bright_black().to_string(),
                    None => key.to_string(),
                })
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn tile_contains_letter() {
        let evaluation = evaluate("MANGA", "ANIME").unwrap();
        assert!(tile(&evaluation[0]).to_string().contains(" M "));
    }

    #[test]
    fn evaluation_row_contains_every_letter() {
        colored::control::set_override(false);
        let evaluation = evaluate("ninja", "anime").unwrap();
        assert_eq!(evaluation_row(&evaluation), " N  I  N  J  A ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        let keyboard = KeyboardState::new();
        let rows = keyboard_rows(&keyboard);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains('Q'));
        assert!(rows[2].starts_with("  Z"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(150.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }
}
