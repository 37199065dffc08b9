//! Word Wizard
//!
//! An anime-themed Wordle-style word game. At its heart is a guess evaluator
//! that classifies each guessed letter as correct, present or absent while
//! never marking a letter more often than it occurs in the target.
//!
//! # Quick Start
//!
//! ```rust
//! use word_wizard::core::{LetterStatus, evaluate};
//!
//! let evaluation = evaluate("LLAMA", "ALLOY").unwrap();
//! assert_eq!(evaluation.to_emoji(), "🟨🟩🟨⬜⬜");
//! assert_eq!(evaluation[4].status, LetterStatus::Absent);
//! ```

// Core domain types
pub mod core;

// Rounds, keyboard state and progression
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
