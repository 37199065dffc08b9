//! Keyboard colouring
//!
//! Merges evaluations into the best status known for each letter, the way an
//! on-screen keyboard shades its keys.

use crate::core::{Evaluation, LetterStatus};
use rustc_hash::FxHashMap;

/// Key rows of a QWERTY keyboard
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best status seen for each guessed letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        let mut state = Self::new();
        for evaluation in evaluations {
            state.record(evaluation);
        }
        state
    }

    /// Merge one evaluation; `Correct` beats `Present` beats `Absent`
    pub fn record(&mut self, evaluation: &Evaluation) {
        for cell in evaluation {
            self.keys
                .entry(cell.letter)
                .and_modify(|known| {
                    if cell.status.rank() > known.rank() {
                        *known = cell.status;
                    }
                })
                .or_insert(cell.status);
        }
    }

    /// Status of a letter, or `None` if it was never guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn empty_state_knows_nothing() {
        let state = KeyboardState::new();
        assert!(state.is_empty());
        assert_eq!(state.status('A'), None);
    }

    #[test]
    fn upgrades_but_never_downgrades() {
        let mut state = KeyboardState::new();

        // A is present here
        state.record(&evaluate("MANGA", "ANIME").unwrap());
        assert_eq!(state.status('A'), Some(LetterStatus::Present));

        // A is correct here
        state.record(&evaluate("ANVIL", "ANIME").unwrap());
        assert_eq!(state.status('a'), Some(LetterStatus::Correct));

        // A would be absent here but stays correct
        state.record(&evaluate("ZZZZA", "ANIME").unwrap());
        assert_eq!(state.status('A'), Some(LetterStatus::Correct));
    }

    #[test]
    fn duplicate_absent_cell_keeps_present_status() {
        // Second A in MANGA is absent, the first is present
        let state = KeyboardState::from_evaluations(&[evaluate("MANGA", "ANIME").unwrap()]);
        assert_eq!(state.status('A'), Some(LetterStatus::Present));
    }

    #[test]
    fn key_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEY_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('A'..='Z').collect::<Vec<_>>());
    }
}
