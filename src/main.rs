//! Word Wizard - CLI
//!
//! Anime-themed word puzzles in the terminal: unlimited play, the daily
//! challenge, one-off guess checks and an audit of the evaluator.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use word_wizard::{
    commands::{
        PlayConfig, RoundEnd, format_countdown, run_audit, run_daily, run_unlimited,
        synthetic_words, time_until_next_day,
    },
    core::evaluate,
    game::{GameConfig, Progress},
    output::{print_audit_report, print_evaluation, print_progress},
    wordlists::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_wizard",
    about = "Anime-themed word guessing game with daily challenges and unlimited play",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'anime' (default, embedded bank) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "anime")]
    wordlist: String,

    /// Show informational log messages (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Unlimited play with random words (default)
    Play {
        /// Shortest word to pick
        #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_len: usize,

        /// Longest word to pick
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        max_len: usize,

        /// Guesses allowed per puzzle
        #[arg(short, long, default_value_t = 6)]
        attempts: usize,

        /// Hints allowed per puzzle
        #[arg(long, default_value_t = 2)]
        hints: usize,

        /// Seed for reproducible word selection
        #[arg(long)]
        seed: Option<u64>,

        /// Only accept guesses from the word list
        #[arg(long)]
        strict: bool,
    },

    /// Play today's daily challenge
    Daily {
        /// Play the challenge of another day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Guesses allowed
        #[arg(short, long, default_value_t = 6)]
        attempts: usize,

        /// Hints allowed
        #[arg(long, default_value_t = 2)]
        hints: usize,
    },

    /// Evaluate a single guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Check the evaluator's invariants over every equal-length word pair
    Audit {
        /// Letters used to generate the synthetic corpus
        #[arg(long, default_value = "abc")]
        alphabet: String,

        /// Longest synthetic word
        #[arg(long, default_value_t = 5)]
        max_len: usize,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the word bank based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "anime" => Ok(WordBank::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            if words.is_empty() {
                bail!("Word list {path} contains no valid words");
            }
            Ok(WordBank::new(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        min_len: DEFAULT_MIN_LENGTH,
        max_len: DEFAULT_MAX_LENGTH,
        attempts: 6,
        hints: 2,
        seed: None,
        strict: false,
    });

    match command {
        Commands::Play {
            min_len,
            max_len,
            attempts,
            hints,
            seed,
            strict,
        } => {
            let bank = load_wordlist(&cli.wordlist)?;
            let config = PlayConfig {
                game: GameConfig {
                    max_attempts: attempts,
                    max_hints: hints,
                },
                min_len,
                max_len,
                seed,
                strict,
            };
            run_play_command(&bank, config)
        }
        Commands::Daily {
            date,
            attempts,
            hints,
        } => {
            let config = GameConfig {
                max_attempts: attempts,
                max_hints: hints,
            };
            run_daily_command(&cli.wordlist, date, config)
        }
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Audit {
            alphabet,
            max_len,
            quiet,
        } => run_audit_command(&cli.wordlist, &alphabet, max_len, quiet),
    }
}

fn run_play_command(bank: &WordBank, config: PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let progress =
        run_unlimited(bank, config, &mut input, &mut out).map_err(|e| anyhow::anyhow!(e))?;
    print_progress(&progress);
    Ok(())
}

fn run_daily_command(wordlist: &str, date: Option<NaiveDate>, config: GameConfig) -> Result<()> {
    // The embedded bank has a dedicated daily rotation
    let rotation = if wordlist == "anime" {
        WordBank::daily_rotation()
    } else {
        load_wordlist(wordlist)?
    };

    let now = Local::now().naive_local();
    let date = date.unwrap_or_else(|| now.date());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut progress = Progress::new();

    let result = run_daily(&rotation, date, config, &mut progress, &mut input, &mut out)?;

    if result.end != RoundEnd::Quit {
        println!("\n  +{} XP", result.experience_gained);
        print_progress(&progress);
    }
    if date == now.date() {
        println!(
            "\n⏳ Next challenge in {}",
            format_countdown(time_until_next_day(now)).bright_cyan()
        );
    }
    Ok(())
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let evaluation = evaluate(guess, target)?;
    print_evaluation(&evaluation);
    Ok(())
}

fn run_audit_command(wordlist: &str, alphabet: &str, max_len: usize, quiet: bool) -> Result<()> {
    let mut words = load_wordlist(wordlist)?.words().to_vec();
    if wordlist == "anime" {
        words.extend(WordBank::daily_rotation().words().iter().cloned());
    }

    let letters: Vec<char> = alphabet.chars().collect();
    words.extend(synthetic_words(&letters, max_len));
    words.sort_by(|a, b| a.text().cmp(b.text()));
    words.dedup();

    println!("🔍 Auditing {} words...", words.len());
    let report = run_audit(&words, !quiet);
    print_audit_report(&report);

    if !report.passed() {
        bail!("{} evaluator invariants violated", report.violations.len());
    }
    Ok(())
}
