//! Game bookkeeping layered on the evaluator
//!
//! Round sessions, keyboard colouring, and scoring/progression.

mod keyboard;
mod progress;
mod session;

pub use keyboard::{KEY_ROWS, KeyboardState};
pub use progress::{
    DAILY_XP, Progress, ProgressError, UNLIMITED_XP, XP_PER_LEVEL, calculate_score, level_for,
};
pub use session::{GameConfig, GameSession, GameState, Hint, SessionError};
