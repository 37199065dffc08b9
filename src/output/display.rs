//! Display functions for command results

use super::formatters::{create_progress_bar, empty_row, evaluation_row, keyboard_rows};
use crate::commands::AuditReport;
use crate::core::{Evaluation, LetterStatus};
use crate::game::{GameSession, GameState, Progress, XP_PER_LEVEL};
use colored::Colorize;
use std::io::{self, Write};

/// Print a single evaluation with its emoji summary
pub fn print_evaluation(evaluation: &Evaluation) {
    println!("\n  {}   {}", evaluation_row(evaluation), evaluation.to_emoji());
    println!(
        "  {} correct, {} present, {} absent",
        evaluation.count(LetterStatus::Correct).to_string().green(),
        evaluation.count(LetterStatus::Present).to_string().yellow(),
        evaluation.count(LetterStatus::Absent).to_string().bright_black()
    );
    if evaluation.is_solved() {
        println!("  {}", "Solved!".bright_green().bold());
    }
}

/// Draw the board and keyboard for a round in progress
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let len = session.target().len();

    writeln!(out)?;
    for evaluation in session.history() {
        writeln!(out, "  {}", evaluation_row(evaluation))?;
    }
    for _ in 0..session.attempts_remaining() {
        writeln!(out, "  {}", empty_row(len))?;
    }

    writeln!(out)?;
    for row in keyboard_rows(&session.keyboard()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Announce how a round ended
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let attempts = session.attempts_used();
    match session.state() {
        GameState::Won => {
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "   ✨  P U Z Z L E   S O L V E D !  ✨".bright_green().bold()
            )?;
            writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "\n  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameState::Lost => {
            writeln!(
                out,
                "\n  {} The word was: {}",
                "Game Over!".red().bold(),
                session.target().text().bright_yellow().bold()
            )?;
        }
        GameState::InProgress => {}
    }

    if session.is_over() {
        writeln!(out, "\n  Share:")?;
        for evaluation in session.history() {
            writeln!(out, "    {}", evaluation.to_emoji())?;
        }
    }
    Ok(())
}

/// Print level, experience and streak
pub fn print_progress(progress: &Progress) {
    let into_level = progress.experience() % XP_PER_LEVEL;
    let bar = create_progress_bar(f64::from(into_level), f64::from(XP_PER_LEVEL), 20);

    println!("\n📊 {}", "Progress:".bright_cyan().bold());
    println!(
        "   Level {}  [{}] {}/{} XP",
        progress.level().to_string().bright_yellow().bold(),
        bar.green(),
        into_level,
        XP_PER_LEVEL
    );
    println!(
        "   Streak:   {} (best {})",
        progress.streak().to_string().bright_yellow(),
        progress.best_streak()
    );
    println!(
        "   Played:   {}  Won: {}  ({:.0}%)",
        progress.played(),
        progress.won(),
        progress.win_rate()
    );

    let distribution = progress.distribution();
    if let Some(&most) = distribution.values().max() {
        println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
        for (&guesses, &count) in distribution {
            let bar = create_progress_bar(f64::from(count), f64::from(most), 20);
            println!("   {guesses:>2}: {} {count}", bar.green());
        }
    }
}

/// Print the result of an evaluator audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATOR AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔍 {}", "Coverage:".bright_cyan().bold());
    println!("   Words:            {}", report.total_words);
    println!("   Pairs checked:    {}", report.pairs_checked);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    let total_cells = report.correct + report.present + report.absent;
    if total_cells > 0 {
        println!("\n📈 {}", "Cell distribution:".bright_cyan().bold());
        for (label, count) in [
            ("correct", report.correct),
            ("present", report.present),
            ("absent", report.absent),
        ] {
            let pct = count as f64 / total_cells as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {label:>8}: {} {count:8} ({pct:5.1}%)", bar.green());
        }
    }

    println!();
    if report.violations.is_empty() {
        println!("{}", "✅ All invariants hold".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violations", report.violations.len())
                .red()
                .bold()
        );
        for violation in report.violations.iter().take(20) {
            println!(
                "   {} vs {}: {}",
                violation.guess, violation.target, violation.reason
            );
        }
    }
}
