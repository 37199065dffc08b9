//! Guess evaluation
//!
//! Compares a guessed word against a target word and classifies every letter
//! as correct, present or absent. Duplicate letters are accounted for with a
//! multiset of the target's letters:
//! - First pass: exact position matches consume their letter from the pool
//! - Second pass: remaining guess letters claim leftover occurrences, left to right
//!
//! A guessed letter is therefore never marked more often than it occurs in the target.

use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Index;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter matches the target at the same position (green)
    Correct,
    /// Letter occurs elsewhere in the target and was not yet claimed (yellow)
    Present,
    /// Letter does not occur, or all its occurrences are already claimed (gray)
    Absent,
}

impl LetterStatus {
    /// Plain-text symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a status symbol
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Precedence used when merging statuses for the same letter
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// One guessed letter together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluationCell {
    pub letter: char,
    pub status: LetterStatus,
}

/// Error returned when a guess cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Guess and target differ in length (measured in characters)
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => write!(
                f,
                "Guess has {guess} letters but the target has {target}"
            ),
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Ordered per-letter result of comparing a guess to a target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation {
    cells: Vec<EvaluationCell>,
}

impl Evaluation {
    /// Number of cells (equal to the guess and target length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[EvaluationCell] {
        &self.cells
    }

    /// The normalized (uppercased) guess letters
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|cell| cell.letter)
    }

    pub fn statuses(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.cells.iter().map(|cell| cell.status)
    }

    /// True when every cell is `Correct`
    ///
    /// An empty evaluation is never a win.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.cells.is_empty() && self.statuses().all(|s| s == LetterStatus::Correct)
    }

    /// Count the cells with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses().filter(|&s| s == status).count()
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses().map(LetterStatus::emoji).collect()
    }

    /// Render as status symbols, e.g. "GY--G"
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.statuses().map(LetterStatus::symbol).collect()
    }
}

impl Index<usize> for Evaluation {
    type Output = EvaluationCell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a EvaluationCell;
    type IntoIter = std::slice::Iter<'a, EvaluationCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_symbols())
    }
}

/// Parse a status string like "GY-G-" or "🟩🟨⬜🟩⬜"
///
/// Returns `None` if any character is not a status symbol.
///
/// # Examples
/// ```
/// use word_wizard::core::{LetterStatus, parse_statuses};
///
/// let statuses = parse_statuses("GY-").unwrap();
/// assert_eq!(
///     statuses,
///     vec![LetterStatus::Correct, LetterStatus::Present, LetterStatus::Absent]
/// );
/// assert!(parse_statuses("GX-").is_none());
/// ```
#[must_use]
pub fn parse_statuses(s: &str) -> Option<Vec<LetterStatus>> {
    s.chars().map(LetterStatus::from_symbol).collect()
}

/// Uppercase a character without changing the character count
///
/// Characters whose uppercase form expands to several characters are kept as-is.
fn normalize(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Evaluate `guess` against `target`
///
/// Comparison is case-insensitive. Characters are compared as opaque
/// symbols; no dictionary or alphabet validation happens here.
///
/// # Errors
/// Returns `EvaluationError::LengthMismatch` if the two words differ in
/// length. The input is never truncated or padded.
///
/// # Examples
/// ```
/// use word_wizard::core::{LetterStatus, evaluate};
///
/// let evaluation = evaluate("manga", "ANIME").unwrap();
/// assert_eq!(evaluation.to_symbols(), "YYY--");
/// assert_eq!(evaluation[4].status, LetterStatus::Absent);
///
/// assert!(evaluate("ab", "abc").is_err());
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<Evaluation, EvaluationError> {
    let guess: Vec<char> = guess.chars().map(normalize).collect();
    let target: Vec<char> = target.chars().map(normalize).collect();

    if guess.len() != target.len() {
        return Err(EvaluationError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();
    for &letter in &target {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    let mut cells: Vec<EvaluationCell> = guess
        .iter()
        .map(|&letter| EvaluationCell {
            letter,
            status: LetterStatus::Absent,
        })
        .collect();

    // First pass: exact matches claim their occurrence before anything else
    for (cell, &expected) in cells.iter_mut().zip(&target) {
        if cell.letter == expected {
            cell.status = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(&cell.letter) {
                *count -= 1;
            }
        }
    }

    // Second pass: leftmost misplaced letters win any leftover occurrences
    for cell in cells
        .iter_mut()
        .filter(|cell| cell.status != LetterStatus::Correct)
    {
        if let Some(count) = remaining.get_mut(&cell.letter)
            && *count > 0
        {
            cell.status = LetterStatus::Present;
            *count -= 1;
        }
    }

    Ok(Evaluation { cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::LetterStatus::{Absent, Correct, Present};

    fn statuses(guess: &str, target: &str) -> Vec<LetterStatus> {
        evaluate(guess, target).unwrap().statuses().collect()
    }

    /// Every word of length `len` over `alphabet`
    fn all_words(alphabet: &[char], len: usize) -> Vec<String> {
        let mut words = vec![String::new()];
        for _ in 0..len {
            words = words
                .iter()
                .flat_map(|prefix| {
                    alphabet.iter().map(move |&ch| {
                        let mut word = prefix.clone();
                        word.push(ch);
                        word
                    })
                })
                .collect();
        }
        words
    }

    fn occurrences(word: &str, letter: char) -> usize {
        word.chars().filter(|&ch| normalize(ch) == letter).count()
    }

    #[test]
    fn exact_match_is_all_correct() {
        let evaluation = evaluate("ANIME", "ANIME").unwrap();
        assert_eq!(evaluation.len(), 5);
        assert!(evaluation.is_solved());
        assert_eq!(evaluation.count(Correct), 5);
    }

    #[test]
    fn manga_against_anime() {
        assert_eq!(
            statuses("MANGA", "ANIME"),
            vec![Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letters_respect_target_multiplicity() {
        // SPEED has two E's; ERASE carries two E's and one S
        let evaluation = evaluate("ERASE", "SPEED").unwrap();
        assert_eq!(
            evaluation.statuses().collect::<Vec<_>>(),
            vec![Present, Absent, Absent, Present, Present]
        );

        let marked_e = evaluation
            .cells()
            .iter()
            .filter(|cell| cell.letter == 'E' && cell.status != Absent)
            .count();
        assert_eq!(marked_e, 2);
    }

    #[test]
    fn three_guess_letters_against_two_in_target() {
        // EERIE has three E's, SPEED only two: the third must be absent
        assert_eq!(
            statuses("EERIE", "SPEED"),
            vec![Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn single_target_letter_claimed_once() {
        // ALLOY has one A; LLAMA guesses two
        let evaluation = evaluate("LLAMA", "ALLOY").unwrap();
        assert_eq!(
            evaluation.statuses().collect::<Vec<_>>(),
            vec![Present, Correct, Present, Absent, Absent]
        );

        let marked_a = evaluation
            .cells()
            .iter()
            .filter(|cell| cell.letter == 'A' && cell.status != Absent)
            .count();
        assert_eq!(marked_a, 1);
    }

    #[test]
    fn exact_match_consumes_before_misplaced() {
        // The later exact O must win over the earlier misplaced O
        assert_eq!(
            statuses("ROBOT", "FLOOR"),
            vec![Present, Present, Absent, Correct, Absent]
        );
        // Both target L's are taken by exact matches, so the leading L is absent
        assert_eq!(
            statuses("LOLLY", "HELLO"),
            vec![Absent, Present, Correct, Correct, Absent]
        );
        assert_eq!(
            statuses("SPEED", "ABIDE"),
            vec![Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn leftmost_misplaced_letter_wins() {
        assert_eq!(
            statuses("EEXXX", "XXXXE"),
            vec![Present, Absent, Correct, Correct, Present]
        );
        assert_eq!(statuses("AAB", "BCA"), vec![Present, Absent, Present]);
    }

    #[test]
    fn case_insensitive() {
        let mixed = evaluate("Apple", "apple").unwrap();
        let upper = evaluate("APPLE", "APPLE").unwrap();
        assert_eq!(mixed, upper);
        assert_eq!(mixed.letters().collect::<String>(), "APPLE");
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            evaluate("AB", "ABC"),
            Err(EvaluationError::LengthMismatch {
                guess: 2,
                target: 3
            })
        );
        assert!(evaluate("ANIMES", "ANIME").is_err());
        assert!(evaluate("", "A").is_err());
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Multi-byte characters count once each
        assert!(evaluate("ÉTÉ", "ETE").is_ok());
        assert_eq!(statuses("été", "ÉTÉ"), vec![Correct, Correct, Correct]);
    }

    #[test]
    fn non_alphabetic_symbols_are_opaque() {
        assert_eq!(statuses("A-1", "1A-"), vec![Present, Present, Present]);
        assert_eq!(statuses("??", "?!"), vec![Correct, Absent]);
    }

    #[test]
    fn empty_inputs_evaluate_to_empty() {
        let evaluation = evaluate("", "").unwrap();
        assert!(evaluation.is_empty());
        assert!(!evaluation.is_solved());
    }

    #[test]
    fn renders_symbols_and_emoji() {
        let evaluation = evaluate("MANGA", "ANIME").unwrap();
        assert_eq!(evaluation.to_symbols(), "YYY--");
        assert_eq!(evaluation.to_emoji(), "🟨🟨🟨⬜⬜");
        assert_eq!(format!("{evaluation}"), "YYY--");
        assert_eq!(parse_statuses("YYY--").unwrap(), statuses("MANGA", "ANIME"));
    }

    #[test]
    fn exhaustive_small_alphabet_invariants() {
        // Every ordered pair of words up to length 4 over a three-letter alphabet
        let alphabet = ['A', 'B', 'C'];

        for len in 1..=4 {
            let words = all_words(&alphabet, len);
            for target in &words {
                for guess in &words {
                    let evaluation = evaluate(guess, target).unwrap();
                    assert_eq!(evaluation.len(), len);

                    for (i, (cell, expected)) in
                        evaluation.cells().iter().zip(target.chars()).enumerate()
                    {
                        // Correct exactly where the letters line up
                        assert_eq!(
                            cell.status == Correct,
                            cell.letter == expected,
                            "{guess} vs {target} at {i}"
                        );
                    }

                    for &letter in &alphabet {
                        let marked = evaluation
                            .cells()
                            .iter()
                            .filter(|cell| cell.letter == letter && cell.status != Absent)
                            .count();
                        let in_target = occurrences(target, letter);
                        let in_guess = occurrences(guess, letter);
                        // Never more than the target holds, and as many as both sides share
                        assert_eq!(
                            marked,
                            in_target.min(in_guess),
                            "{guess} vs {target} letter {letter}"
                        );
                    }

                    assert_eq!(evaluation.is_solved(), guess == target);
                }
            }
        }
    }

    #[test]
    fn exhaustive_present_cells_prefer_left() {
        // A present cell may never sit to the right of an absent cell with the same letter
        let words = all_words(&['A', 'B', 'C'], 4);
        for target in &words {
            for guess in &words {
                let evaluation = evaluate(guess, target).unwrap();
                let cells = evaluation.cells();
                for (i, left) in cells.iter().enumerate() {
                    for right in &cells[i + 1..] {
                        assert!(
                            !(left.letter == right.letter
                                && left.status == Absent
                                && right.status == Present),
                            "{guess} vs {target}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn length_mismatch_exactly_when_lengths_differ() {
        let words: Vec<String> = (0..=4).flat_map(|len| all_words(&['A', 'B'], len)).collect();
        for guess in &words {
            for target in &words {
                let result = evaluate(guess, target);
                assert_eq!(result.is_err(), guess.len() != target.len());
            }
        }
    }

    #[test]
    fn random_pairs_are_deterministic_and_self_match() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let random_word = |rng: &mut StdRng, len: usize| -> String {
            (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
                .collect()
        };

        for _ in 0..2_000 {
            let len = rng.random_range(1..=8);
            let guess = random_word(&mut rng, len);
            let target = random_word(&mut rng, len);

            let first = evaluate(&guess, &target).unwrap();
            let second = evaluate(&guess, &target).unwrap();
            assert_eq!(first, second);

            assert!(evaluate(&target, &target).unwrap().is_solved());
            assert_eq!(
                evaluate(&guess.to_uppercase(), &target).unwrap(),
                first
            );
        }
    }
}
