//! Daily challenge command
//!
//! Everyone gets the same word on the same calendar day.

use super::play::{RoundEnd, play_round};
use crate::game::{GameConfig, GameSession, GameState, Progress, ProgressError};
use crate::wordlists::{WordBank, WordBankError};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use colored::Colorize;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Why a daily challenge could not be played
#[derive(Debug)]
pub enum DailyError {
    Bank(WordBankError),
    Progress(ProgressError),
    Io(io::Error),
}

impl fmt::Display for DailyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bank(e) => write!(f, "{e}"),
            Self::Progress(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Terminal I/O failed: {e}"),
        }
    }
}

impl std::error::Error for DailyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bank(e) => Some(e),
            Self::Progress(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<WordBankError> for DailyError {
    fn from(e: WordBankError) -> Self {
        Self::Bank(e)
    }
}

impl From<ProgressError> for DailyError {
    fn from(e: ProgressError) -> Self {
        Self::Progress(e)
    }
}

impl From<io::Error> for DailyError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result of playing a daily challenge
#[derive(Debug, Clone)]
pub struct DailyResult {
    pub date: NaiveDate,
    pub end: RoundEnd,
    pub attempts: usize,
    pub experience_gained: u32,
}

/// Build the session for `date`
///
/// # Errors
///
/// Returns `WordBankError::Empty` if the rotation has no words.
pub fn daily_session(
    rotation: &WordBank,
    date: NaiveDate,
    config: GameConfig,
) -> Result<GameSession, WordBankError> {
    let target = rotation.daily_word(date)?.clone();
    Ok(GameSession::new(target, config))
}

/// Time left until the next daily word, counted from `now`
#[must_use]
pub fn time_until_next_day(now: NaiveDateTime) -> TimeDelta {
    now.date()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
        .map_or(TimeDelta::zero(), |midnight| midnight - now)
}

/// Format a countdown as `HH:MM:SS`
#[must_use]
pub fn format_countdown(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Play the daily challenge for `date` and record it in `progress`
///
/// A quit round is not recorded, so the day can be played later.
///
/// # Errors
///
/// Returns an error before play if the rotation is empty or the day was
/// already recorded or is older than the last recorded day, and during play
/// if terminal I/O fails.
pub fn run_daily<R: BufRead, W: Write>(
    rotation: &WordBank,
    date: NaiveDate,
    config: GameConfig,
    progress: &mut Progress,
    input: &mut R,
    out: &mut W,
) -> Result<DailyResult, DailyError> {
    progress.check_daily(date)?;

    let mut session = daily_session(rotation, date, config)?;
    log::debug!("Daily challenge for {date}: {} letters", session.target().len());

    writeln!(
        out,
        "\n📅 {} {}",
        "Daily Challenge".bright_cyan().bold(),
        date.format("%Y-%m-%d")
    )?;

    let end = play_round(&mut session, None, input, out)?;
    let experience_gained = match end {
        RoundEnd::Finished(state) => {
            progress.record_daily(date, state == GameState::Won, session.attempts_used())?
        }
        RoundEnd::Skipped => progress.record_daily(date, false, session.attempts_used())?,
        RoundEnd::Quit => 0,
    };

    Ok(DailyResult {
        date,
        end,
        attempts: session.attempts_used(),
        experience_gained,
    })
}
