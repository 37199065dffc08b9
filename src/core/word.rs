//! Validated game words
//!
//! A Word is a non-empty run of ASCII letters, stored uppercased. Word sources
//! and game sessions build Words; the evaluator itself accepts any text.

use super::evaluation::{Evaluation, EvaluationError, evaluate};
use rustc_hash::FxHashMap;
use std::fmt;

/// A game word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacters => write!(f, "Word must contain only the letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_wizard::core::Word;
    ///
    /// let word = Word::new("Sakura").unwrap();
    /// assert_eq!(word.text(), "SAKURA");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("k4t4na").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let letters = text.as_bytes().to_vec();

        Ok(Self { text, letters })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed Word; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        char::from(self.letters[position])
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(char::from(letter)).or_insert(0) += 1;
        }
        counts
    }

    /// Evaluate this word as a guess against `target`
    ///
    /// # Errors
    /// Returns `EvaluationError::LengthMismatch` if the lengths differ.
    pub fn evaluate_against(&self, target: &Self) -> Result<Evaluation, EvaluationError> {
        evaluate(&self.text, &target.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
