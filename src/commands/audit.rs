//! Evaluator audit - exhaustive invariant check
//!
//! Evaluates every ordered pair of equal-length words and checks the
//! evaluator's guarantees on each result.

use crate::core::{Evaluation, LetterStatus, Word, evaluate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A broken guarantee for one (guess, target) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub guess: String,
    pub target: String,
    pub reason: String,
}

/// Aggregate result of an audit
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub total_words: usize,
    pub pairs_checked: usize,
    pub correct: usize,
    pub present: usize,
    pub absent: usize,
    pub violations: Vec<Violation>,
    pub duration: Duration,
}

impl AuditReport {
    fn merge(mut self, other: Self) -> Self {
        self.pairs_checked += other.pairs_checked;
        self.correct += other.correct;
        self.present += other.present;
        self.absent += other.absent;
        self.violations.extend(other.violations);
        self
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Every word up to `max_len` letters over `alphabet`
///
/// Small alphabets produce dense duplicate-letter cases.
///
/// # Examples
/// ```
/// use word_wizard::commands::synthetic_words;
///
/// let words = synthetic_words(&['a', 'b'], 2);
/// assert_eq!(words.len(), 2 + 4);
/// ```
#[must_use]
pub fn synthetic_words(alphabet: &[char], max_len: usize) -> Vec<Word> {
    let mut words = Vec::new();
    let mut layer = vec![String::new()];

    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&ch| {
                    let mut word = prefix.clone();
                    word.push(ch);
                    word
                })
            })
            .collect();
        words.extend(layer.iter().filter_map(|w| Word::new(w).ok()));
    }

    words
}

/// Check a single evaluation against the evaluator's guarantees
fn check_pair(guess: &Word, target: &Word, evaluation: &Evaluation) -> Vec<String> {
    let mut problems = Vec::new();

    if evaluation.len() != target.len() {
        problems.push(format!(
            "evaluation has {} cells, expected {}",
            evaluation.len(),
            target.len()
        ));
        return problems;
    }

    if !evaluation.letters().eq(guess.text().chars()) {
        problems.push("cells do not spell the guess".to_string());
    }

    for (i, cell) in evaluation.cells().iter().enumerate() {
        let aligned = cell.letter == target.letter_at(i);
        if aligned != (cell.status == LetterStatus::Correct) {
            problems.push(format!("position {i} is {} for '{}'", cell.status, cell.letter));
        }
    }

    let target_counts = target.letter_counts();
    let mut marked: FxHashMap<char, usize> = FxHashMap::default();
    for cell in evaluation.cells() {
        if cell.status != LetterStatus::Absent {
            *marked.entry(cell.letter).or_insert(0) += 1;
        }
    }
    for (letter, count) in marked {
        let available = target_counts.get(&letter).copied().unwrap_or(0);
        if count > available {
            problems.push(format!(
                "letter '{letter}' marked {count} times but occurs {available} times"
            ));
        }
    }

    if evaluation.is_solved() != (guess == target) {
        problems.push("solved flag disagrees with equality".to_string());
    }

    problems
}

fn violation(guess: &str, target: &Word, reason: impl Into<String>) -> Violation {
    Violation {
        guess: guess.to_string(),
        target: target.text().to_string(),
        reason: reason.into(),
    }
}

/// Audit one target against every same-length guess
fn audit_target(target: &Word, guesses: &[&Word]) -> AuditReport {
    let mut report = AuditReport::default();

    match evaluate(target.text(), target.text()) {
        Ok(evaluation) if evaluation.is_solved() => {}
        _ => report
            .violations
            .push(violation(target.text(), target, "self-match is not all correct")),
    }

    let text = target.text();
    let longer = format!("{text}A");
    let shorter = &text[..text.len() - 1];
    for other in [longer.as_str(), shorter] {
        if evaluate(other, text).is_ok() {
            report
                .violations
                .push(violation(other, target, "length mismatch was accepted"));
        }
    }

    for &guess in guesses {
        let evaluation = match evaluate(guess.text(), target.text()) {
            Ok(evaluation) => evaluation,
            Err(e) => {
                report
                    .violations
                    .push(violation(guess.text(), target, e.to_string()));
                continue;
            }
        };

        if evaluate(guess.text(), target.text()).as_ref() != Ok(&evaluation) {
            report
                .violations
                .push(violation(guess.text(), target, "repeated evaluation differs"));
        }

        for reason in check_pair(guess, target, &evaluation) {
            report
                .violations
                .push(violation(guess.text(), target, reason));
        }

        report.pairs_checked += 1;
        report.correct += evaluation.count(LetterStatus::Correct);
        report.present += evaluation.count(LetterStatus::Present);
        report.absent += evaluation.count(LetterStatus::Absent);
    }

    report
}

/// Run the audit over every ordered pair of equal-length words
///
/// Targets are processed in parallel; a progress bar is shown when
/// `show_progress` is set.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_audit(words: &[Word], show_progress: bool) -> AuditReport {
    let start = Instant::now();

    let mut by_length: FxHashMap<usize, Vec<&Word>> = FxHashMap::default();
    for word in words {
        by_length.entry(word.len()).or_default().push(word);
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message("Auditing");

    let report = words
        .par_iter()
        .map(|target| {
            let guesses = by_length
                .get(&target.len())
                .map_or(&[][..], Vec::as_slice);
            let partial = audit_target(target, guesses);
            pb.inc(1);
            partial
        })
        .reduce(AuditReport::default, AuditReport::merge);

    pb.finish_with_message("Complete!");

    let report = AuditReport {
        total_words: words.len(),
        duration: start.elapsed(),
        ..report
    };

    if report.passed() {
        log::info!("Audit passed: {} pairs", report.pairs_checked);
    } else {
        log::warn!("Audit found {} violations", report.violations.len());
    }
    report
}
