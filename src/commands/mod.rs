//! Command implementations

pub mod audit;
pub mod daily;
pub mod play;

pub use audit::{AuditReport, Violation, run_audit, synthetic_words};
pub use daily::{
    DailyError, DailyResult, daily_session, format_countdown, run_daily, time_until_next_day,
};
pub use play::{PlayConfig, RoundEnd, play_round, run_unlimited};
