//! Interactive play mode
//!
//! Text-based rounds against random words from the bank (unlimited mode).

use crate::game::{GameConfig, GameSession, GameState, Progress};
use crate::output::{write_board, write_outcome};
use crate::wordlists::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, WordBank};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Configuration for unlimited play
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    pub game: GameConfig,
    pub min_len: usize,
    pub max_len: usize,
    /// Fixed seed for reproducible word selection
    pub seed: Option<u64>,
    /// Only accept guesses found in the word bank
    pub strict: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            min_len: DEFAULT_MIN_LENGTH,
            max_len: DEFAULT_MAX_LENGTH,
            seed: None,
            strict: false,
        }
    }
}

/// How an interactive round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Finished(GameState),
    Skipped,
    Quit,
}

/// Drive one round from line-based input until it ends
///
/// Each line is a guess or a command: `hint`, `skip`, `quit`. End of input
/// counts as quitting. When `dictionary` is given, guesses outside it are
/// refused without using an attempt.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_round<R: BufRead, W: Write>(
    session: &mut GameSession,
    dictionary: Option<&WordBank>,
    input: &mut R,
    out: &mut W,
) -> io::Result<RoundEnd> {
    loop {
        if session.is_over() {
            write_board(out, session)?;
            write_outcome(out, session)?;
            return Ok(RoundEnd::Finished(session.state()));
        }

        write_board(out, session)?;
        write!(
            out,
            "Guess {}/{} ({} letters; 'hint', 'skip', 'quit'): ",
            session.attempts_used() + 1,
            session.config().max_attempts,
            session.target().len()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(RoundEnd::Quit);
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(RoundEnd::Quit),
            "skip" | "new" => {
                writeln!(
                    out,
                    "\nSkipped! The word was {}",
                    session.target().text().bright_yellow().bold()
                )?;
                return Ok(RoundEnd::Skipped);
            }
            "hint" | "h" => match session.reveal_hint() {
                Ok(hint) => writeln!(
                    out,
                    "💡 Letter {} is {} ({} hints left)",
                    hint.position + 1,
                    hint.letter.to_string().bright_green().bold(),
                    session.hints_remaining()
                )?,
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            _ => {
                if let Some(bank) = dictionary
                    && !bank.contains(line)
                {
                    writeln!(out, "❌ {} is not in the word list", line.to_uppercase())?;
                    continue;
                }

                if let Err(e) = session.submit_guess(line) {
                    writeln!(out, "❌ {e}")?;
                }
            }
        }
    }
}

/// Ask a yes/no question; anything but yes is no
fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<bool> {
    write!(out, "{prompt} (yes/no): ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "yes" | "y"))
}

/// Play unlimited rounds until the player quits
///
/// # Errors
///
/// Returns an error if no word in the bank fits the configured length range,
/// or if terminal I/O fails.
pub fn run_unlimited<R: BufRead, W: Write>(
    bank: &WordBank,
    config: PlayConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Progress, String> {
    let mut rng = config.seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    );
    let mut progress = Progress::new();
    let dictionary = config.strict.then_some(bank);

    writeln!(out, "\n╔══════════════════════════════════════════════════╗")
        .map_err(|e| e.to_string())?;
    writeln!(out, "║          Word Wizard - Unlimited Play Mode       ║")
        .map_err(|e| e.to_string())?;
    writeln!(out, "╚══════════════════════════════════════════════════╝")
        .map_err(|e| e.to_string())?;

    loop {
        let target = bank
            .random_word(&mut rng, config.min_len, config.max_len)
            .map_err(|e| e.to_string())?
            .clone();
        let mut session = GameSession::new(target, config.game);

        let end = play_round(&mut session, dictionary, input, out).map_err(|e| e.to_string())?;
        match end {
            RoundEnd::Quit => break,
            RoundEnd::Skipped => {
                progress.record_unlimited(false, session.attempts_used());
            }
            RoundEnd::Finished(state) => {
                let won = state == GameState::Won;
                let xp = progress.record_unlimited(won, session.attempts_used());
                if let Some(score) = session.score(1.0) {
                    writeln!(out, "\n  Score: {}  (+{xp} XP)", score.to_string().bright_yellow())
                        .map_err(|e| e.to_string())?;
                }
                if !confirm(input, out, "\nPlay again?").map_err(|e| e.to_string())? {
                    break;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n").map_err(|e| e.to_string())?;
    Ok(progress)
}
