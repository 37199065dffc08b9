//! Core domain types for the word game
//!
//! The guess evaluator and the validated word type. Everything here is pure
//! and free of I/O; every other module builds on these types.

mod evaluation;
mod word;

pub use evaluation::{
    Evaluation, EvaluationCell, EvaluationError, LetterStatus, evaluate, parse_statuses,
};
pub use word::{Word, WordError};
