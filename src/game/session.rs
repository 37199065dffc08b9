//! A single round of guessing
//!
//! Tracks attempts, hints and the win/lose outcome around repeated calls to
//! the evaluator. Configuration is passed in explicitly per session.

use super::keyboard::KeyboardState;
use super::progress::calculate_score;
use crate::core::{Evaluation, EvaluationError, LetterStatus, Word, WordError};
use std::fmt;

/// Round parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub max_hints: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            max_hints: 2,
        }
    }
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// A revealed target letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}

/// Reasons a guess or hint request is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    GameOver,
    WrongLength { expected: usize, actual: usize },
    InvalidWord(WordError),
    HintsExhausted { limit: usize },
    NothingToReveal,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The round is already over"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Your guess must be {expected} letters long (got {actual})")
            }
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::HintsExhausted { limit } => {
                write!(f, "You've used all {limit} hints for this puzzle")
            }
            Self::NothingToReveal => write!(f, "Every letter is already known"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EvaluationError> for SessionError {
    fn from(e: EvaluationError) -> Self {
        match e {
            EvaluationError::LengthMismatch { guess, target } => Self::WrongLength {
                expected: target,
                actual: guess,
            },
        }
    }
}

/// One round against a fixed target word
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    config: GameConfig,
    history: Vec<Evaluation>,
    hints: Vec<Hint>,
    state: GameState,
}

impl GameSession {
    #[must_use]
    pub const fn new(target: Word, config: GameConfig) -> Self {
        Self {
            target,
            config,
            history: Vec::new(),
            hints: Vec::new(),
            state: GameState::InProgress,
        }
    }

    /// The secret word. Hosts should only show it once the round is over.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// Evaluations of every submitted guess, oldest first
    #[must_use]
    pub fn history(&self) -> &[Evaluation] {
        &self.history
    }

    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn hints_remaining(&self) -> usize {
        self.config.max_hints.saturating_sub(self.hints.len())
    }

    /// Best known status of every guessed letter
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_evaluations(&self.history)
    }

    /// Submit a full-length guess
    ///
    /// # Errors
    /// - `GameOver` once the round is won or lost
    /// - `WrongLength` if the guess does not match the target length
    /// - `InvalidWord` if the guess contains anything but letters
    ///
    /// Refused guesses do not use up an attempt.
    pub fn submit_guess(&mut self, guess: &str) -> Result<&Evaluation, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        let actual = guess.chars().count();
        if actual != self.target.len() {
            return Err(SessionError::WrongLength {
                expected: self.target.len(),
                actual,
            });
        }

        let word = Word::new(guess).map_err(SessionError::InvalidWord)?;
        let evaluation = word.evaluate_against(&self.target)?;

        if evaluation.is_solved() {
            self.state = GameState::Won;
            log::info!("Solved {} in {} attempts", self.target, self.history.len() + 1);
        } else if self.history.len() + 1 >= self.config.max_attempts {
            self.state = GameState::Lost;
            log::info!("Out of attempts; the word was {}", self.target);
        } else {
            log::debug!(
                "Guess {} -> {} ({} attempts left)",
                word,
                evaluation,
                self.config.max_attempts - self.history.len() - 1
            );
        }

        self.history.push(evaluation);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Reveal the leftmost target letter the player has not yet placed
    ///
    /// Positions already shown `Correct` in any guess, or revealed by an
    /// earlier hint, are skipped.
    ///
    /// # Errors
    /// - `GameOver` once the round is won or lost
    /// - `HintsExhausted` when the hint budget is spent
    /// - `NothingToReveal` when every position is already known
    pub fn reveal_hint(&mut self) -> Result<Hint, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.hints.len() >= self.config.max_hints {
            return Err(SessionError::HintsExhausted {
                limit: self.config.max_hints,
            });
        }

        let position = (0..self.target.len())
            .find(|&i| !self.is_position_known(i))
            .ok_or(SessionError::NothingToReveal)?;

        let hint = Hint {
            position,
            letter: self.target.letter_at(position),
        };
        self.hints.push(hint);
        log::debug!("Hint {} of {}: position {position}", self.hints.len(), self.config.max_hints);

        Ok(hint)
    }

    fn is_position_known(&self, position: usize) -> bool {
        self.hints.iter().any(|h| h.position == position)
            || self
                .history
                .iter()
                .any(|e| e[position].status == LetterStatus::Correct)
    }

    /// Score for a won round, `None` otherwise
    #[must_use]
    pub fn score(&self, difficulty: f64) -> Option<u32> {
        (self.state == GameState::Won).then(|| {
            calculate_score(
                self.target.len(),
                self.history.len(),
                self.config.max_attempts,
                difficulty,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap(), GameConfig::default())
    }

    #[test]
    fn winning_guess_ends_round() {
        let mut game = session("anime");
        let evaluation = game.submit_guess("ANIME").unwrap();
        assert!(evaluation.is_solved());
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.submit_guess("manga"), Err(SessionError::GameOver));
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let config = GameConfig {
            max_attempts: 3,
            max_hints: 2,
        };
        let mut game = GameSession::new(Word::new("anime").unwrap(), config);

        game.submit_guess("manga").unwrap();
        game.submit_guess("otaku").unwrap();
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.attempts_remaining(), 1);

        game.submit_guess("ninja").unwrap();
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.score(1.0), None);
    }

    #[test]
    fn win_on_last_attempt_counts_as_win() {
        let config = GameConfig {
            max_attempts: 2,
            max_hints: 0,
        };
        let mut game = GameSession::new(Word::new("hero").unwrap(), config);
        game.submit_guess("note").unwrap();
        game.submit_guess("hero").unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn wrong_length_does_not_use_attempt() {
        let mut game = session("sakura");
        assert_eq!(
            game.submit_guess("anime"),
            Err(SessionError::WrongLength {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn invalid_characters_rejected() {
        let mut game = session("anime");
        assert_eq!(
            game.submit_guess("an1me"),
            Err(SessionError::InvalidWord(WordError::InvalidCharacters))
        );
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn history_records_evaluations_in_order() {
        let mut game = session("anime");
        game.submit_guess("manga").unwrap();
        game.submit_guess("anima").unwrap();

        let symbols: Vec<String> = game.history().iter().map(Evaluation::to_symbols).collect();
        assert_eq!(symbols, vec!["YYY--", "GGGG-"]);
    }

    #[test]
    fn first_hint_reveals_first_letter() {
        let mut game = session("ninja");
        assert_eq!(
            game.reveal_hint().unwrap(),
            Hint {
                position: 0,
                letter: 'N'
            }
        );
        assert_eq!(game.hints_remaining(), 1);
    }

    #[test]
    fn hints_skip_known_positions() {
        let mut game = session("anime");
        // A, N correct; I, M, E unknown
        game.submit_guess("anvil").unwrap();

        assert_eq!(game.reveal_hint().unwrap().position, 2);
        assert_eq!(
            game.reveal_hint().unwrap(),
            Hint {
                position: 3,
                letter: 'M'
            }
        );
    }

    #[test]
    fn hint_budget_is_enforced() {
        let mut game = session("otaku");
        game.reveal_hint().unwrap();
        game.reveal_hint().unwrap();
        assert_eq!(
            game.reveal_hint(),
            Err(SessionError::HintsExhausted { limit: 2 })
        );
    }

    #[test]
    fn nothing_to_reveal_when_all_known() {
        let config = GameConfig {
            max_attempts: 6,
            max_hints: 5,
        };
        let mut game = GameSession::new(Word::new("ab").unwrap(), config);
        game.reveal_hint().unwrap();
        game.reveal_hint().unwrap();
        assert_eq!(game.reveal_hint(), Err(SessionError::NothingToReveal));
    }

    #[test]
    fn score_for_won_round() {
        let mut game = session("anime");
        game.submit_guess("manga").unwrap();
        game.submit_guess("anime").unwrap();
        // 5 * 10 + (6 - 2) * 5
        assert_eq!(game.score(1.0), Some(70));
        assert_eq!(game.score(1.5), Some(105));
    }

    #[test]
    fn keyboard_tracks_history() {
        let mut game = session("anime");
        game.submit_guess("manga").unwrap();
        let keyboard = game.keyboard();
        assert_eq!(keyboard.status('M'), Some(LetterStatus::Present));
        assert_eq!(keyboard.status('G'), Some(LetterStatus::Absent));
        assert_eq!(keyboard.status('Z'), None);
    }
}
