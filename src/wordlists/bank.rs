//! Word bank: dictionary lookups and target selection
//!
//! Supplies targets for both game modes. Unlimited play draws a random word
//! within a length range; the daily challenge derives its word from a hash of
//! the calendar date so every player gets the same word on the same day.

use super::loader::words_from_slice;
use super::{DAILY, WORDS};
use crate::core::Word;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Default shortest word offered in unlimited play
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default longest word offered in unlimited play
pub const DEFAULT_MAX_LENGTH: usize = 7;

/// Error type for word selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankError {
    Empty,
    NoWordsInRange { min: usize, max: usize },
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word bank is empty"),
            Self::NoWordsInRange { min, max } => {
                write!(f, "No words between {min} and {max} letters in the word bank")
            }
        }
    }
}

impl std::error::Error for WordBankError {}

/// A collection of playable words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The general anime word bank compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// The daily challenge rotation compiled into the binary
    #[must_use]
    pub fn daily_rotation() -> Self {
        Self::new(words_from_slice(DAILY))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check dictionary membership (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use word_wizard::wordlists::WordBank;
    ///
    /// let bank = WordBank::embedded();
    /// assert!(bank.contains("Anime"));
    /// assert!(!bank.contains("zzzzz"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .iter()
            .any(|w| w.text().eq_ignore_ascii_case(word))
    }

    /// Pick a random word whose length lies in `min_len..=max_len`
    ///
    /// # Errors
    /// Returns `WordBankError::Empty` for an empty bank, or
    /// `WordBankError::NoWordsInRange` if no word has a matching length.
    pub fn random_word<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min_len: usize,
        max_len: usize,
    ) -> Result<&Word, WordBankError> {
        if self.words.is_empty() {
            return Err(WordBankError::Empty);
        }

        let eligible: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| (min_len..=max_len).contains(&w.len()))
            .collect();

        let word = eligible
            .choose(rng)
            .copied()
            .ok_or(WordBankError::NoWordsInRange {
                min: min_len,
                max: max_len,
            })?;

        log::debug!(
            "Picked random word from {} eligible ({min_len}..={max_len} letters)",
            eligible.len()
        );
        Ok(word)
    }

    /// The word for a given calendar day
    ///
    /// # Errors
    /// Returns `WordBankError::Empty` if the bank has no words.
    pub fn daily_word(&self, date: NaiveDate) -> Result<&Word, WordBankError> {
        if self.words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(&self.words[daily_index(date, self.words.len())])
    }
}

/// 32-bit string hash of the form `h = h * 31 + c`, wrapping on overflow
fn date_hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Index into a list of `len` words for `date`
///
/// The key is `"{year}-{month}-{day}"` with unpadded month and day.
///
/// # Panics
/// Panics if `len` is zero.
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    let key = format!("{}-{}-{}", date.year(), date.month(), date.day());
    let hash = i64::from(date_hash(&key)).unsigned_abs();
    (hash % len as u64) as usize
}
