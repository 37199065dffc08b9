//! Word lists for the game
//!
//! Provides the anime word banks compiled into the binary, plus selection of
//! random and daily targets.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, WordBank, WordBankError, daily_index};
pub use embedded::{DAILY, DAILY_COUNT, WORDS, WORDS_COUNT};
