//! Scoring, experience and streaks
//!
//! Consumes round outcomes only. Storage of this state is left to the host.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Experience awarded for solving the daily challenge
pub const DAILY_XP: u32 = 20;

/// Experience awarded for solving an unlimited puzzle
pub const UNLIMITED_XP: u32 = 10;

/// Experience needed per level
pub const XP_PER_LEVEL: u32 = 100;

/// Points for a solved round
///
/// `word_len * 10` plus `5` for every unused guess, scaled by `difficulty`
/// and rounded down.
///
/// # Examples
/// ```
/// use word_wizard::game::calculate_score;
///
/// assert_eq!(calculate_score(5, 3, 6, 1.0), 65);
/// assert_eq!(calculate_score(5, 6, 6, 2.0), 100);
/// ```
#[must_use]
pub fn calculate_score(
    word_len: usize,
    guesses_used: usize,
    max_guesses: usize,
    difficulty: f64,
) -> u32 {
    let base = word_len * 10;
    let bonus = max_guesses.saturating_sub(guesses_used) * 5;
    ((base + bonus) as f64 * difficulty).floor().max(0.0) as u32
}

/// Level reached with the given experience
#[must_use]
pub const fn level_for(experience: u32) -> u32 {
    experience / XP_PER_LEVEL + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    /// The daily challenge for this date was already recorded
    AlreadyRecorded(NaiveDate),
    /// A result arrived for a date before the last recorded daily
    OutOfOrder { date: NaiveDate, last: NaiveDate },
}

impl fmt::Display for ProgressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRecorded(date) => {
                write!(f, "Daily challenge for {date} already completed")
            }
            Self::OutOfOrder { date, last } => {
                write!(f, "Daily result for {date} is older than the last one ({last})")
            }
        }
    }
}

impl std::error::Error for ProgressError {}

/// Player statistics across rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    experience: u32,
    level: u32,
    streak: u32,
    best_streak: u32,
    played: u32,
    won: u32,
    distribution: BTreeMap<usize, u32>,
    last_daily: Option<NaiveDate>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            experience: 0,
            level: 1,
            streak: 0,
            best_streak: 0,
            played: 0,
            won: 0,
            distribution: BTreeMap::new(),
            last_daily: None,
        }
    }
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn experience(&self) -> u32 {
        self.experience
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    #[must_use]
    pub const fn won(&self) -> u32 {
        self.won
    }

    #[must_use]
    pub const fn last_daily(&self) -> Option<NaiveDate> {
        self.last_daily
    }

    /// Wins keyed by number of guesses
    #[must_use]
    pub const fn distribution(&self) -> &BTreeMap<usize, u32> {
        &self.distribution
    }

    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }

    /// Check that a daily result for `date` can still be recorded
    ///
    /// # Errors
    /// Refuses a date already recorded, or one older than the last.
    pub fn check_daily(&self, date: NaiveDate) -> Result<(), ProgressError> {
        match self.last_daily {
            Some(last) if date == last => Err(ProgressError::AlreadyRecorded(date)),
            Some(last) if date < last => Err(ProgressError::OutOfOrder { date, last }),
            _ => Ok(()),
        }
    }

    /// Record the daily challenge result for `date`
    ///
    /// A win adds one to the streak and a loss resets it to zero. Days that
    /// were never played leave the streak alone. Returns the experience
    /// gained.
    ///
    /// # Errors
    /// Refuses a second result for the same date, or one older than the last.
    pub fn record_daily(
        &mut self,
        date: NaiveDate,
        success: bool,
        guesses: usize,
    ) -> Result<u32, ProgressError> {
        self.check_daily(date)?;
        self.last_daily = Some(date);

        if success {
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        log::debug!("Daily {date}: success={success}, streak={}", self.streak);
        Ok(self.record_round(success, guesses, DAILY_XP))
    }

    /// Record an unlimited-mode round; streaks are unaffected
    ///
    /// Returns the experience gained.
    pub fn record_unlimited(&mut self, success: bool, guesses: usize) -> u32 {
        self.record_round(success, guesses, UNLIMITED_XP)
    }

    fn record_round(&mut self, success: bool, guesses: usize, reward: u32) -> u32 {
        self.played += 1;
        if !success {
            return 0;
        }

        self.won += 1;
        *self.distribution.entry(guesses).or_insert(0) += 1;
        self.experience += reward;

        let level = level_for(self.experience);
        if level > self.level {
            log::info!("Level up: {} -> {level}", self.level);
            self.level = level;
        }
        reward
    }
}
