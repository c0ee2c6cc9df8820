//! Guess evaluation
//!
//! Classifies each letter of a guess against the secret word:
//! - `Correct`: right letter, right position
//! - `Present`: right letter, wrong position, within the secret's remaining count
//! - `Absent`: no remaining occurrence in the secret
//!
//! Duplicate letters are handled by consuming occurrences from the secret's
//! letter pool, so a guess never gets credited for more copies of a letter
//! than the secret actually contains.

use super::Word;
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    /// Right letter in the right position
    Correct,
    /// Letter occurs elsewhere in the secret (counting remaining occurrences)
    Present,
    /// Letter has no remaining occurrence in the secret
    Absent,
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// Per-position feedback for one guess, positionally aligned with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult(Vec<LetterResult>);

impl GuessResult {
    /// Number of positions in the result (equals the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the result has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The per-position classifications in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterResult] {
        &self.0
    }

    /// True if every position is `Correct` (the guess equals the secret)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&r| r == LetterResult::Correct)
    }
}

impl From<Vec<LetterResult>> for GuessResult {
    fn from(letters: Vec<LetterResult>) -> Self {
        Self(letters)
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Evaluate `guess` against `secret`, one [`LetterResult`] per position
///
/// Pure and deterministic; emits canonical results only. Presentation
/// concerns (colors, labels, legacy status codes) live in the output layer.
///
/// Equal lengths are a caller precondition: the session rejects a
/// wrong-length guess before evaluation is reached.
///
/// # Algorithm
/// 1. First pass: mark exact positional matches `Correct`, consuming one
///    occurrence of the letter from the secret's pool.
/// 2. Second pass: for each remaining position, mark `Present` if the pool
///    still holds that letter (consuming one occurrence), else `Absent`.
///
/// The pool tracking is what makes repeated letters come out right: a guess
/// with two copies of a letter against a secret with one gets exactly one
/// `Correct`/`Present` and one `Absent`.
///
/// # Examples
/// ```
/// use wordle_arena::core::{LetterResult, Word, evaluate};
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("crate").unwrap();
/// let result = evaluate(&secret, &guess);
///
/// assert_eq!(
///     result.letters(),
///     &[
///         LetterResult::Correct,
///         LetterResult::Correct,
///         LetterResult::Correct,
///         LetterResult::Absent,
///         LetterResult::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> GuessResult {
    debug_assert_eq!(
        secret.len(),
        guess.len(),
        "guess length must match secret length"
    );

    let len = guess.len();
    let mut result = vec![LetterResult::Absent; len];
    let mut available = secret.char_counts();

    // First pass: exact matches consume from the pool before any
    // present-elsewhere credit is handed out
    for i in 0..len {
        if guess.char_at(i) == secret.char_at(i) {
            result[i] = LetterResult::Correct;

            if let Some(count) = available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present-elsewhere, one pool occurrence per credit
    for i in 0..len {
        if result[i] == LetterResult::Correct {
            continue;
        }

        if let Some(count) = available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = LetterResult::Present;
            *count -= 1;
        }
    }

    GuessResult(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::{Absent, Correct, Present};

    fn eval(secret: &str, guess: &str) -> GuessResult {
        let secret = Word::parse(secret).unwrap();
        let guess = Word::parse(guess).unwrap();
        evaluate(&secret, &guess)
    }

    #[test]
    fn evaluate_all_absent() {
        let result = eval("abcde", "fghij");
        assert_eq!(result.letters(), &[Absent; 5]);
        assert!(!result.is_solved());
    }

    #[test]
    fn evaluate_exact_match_is_solved() {
        let result = eval("crane", "crane");
        assert_eq!(result.letters(), &[Correct; 5]);
        assert!(result.is_solved());
    }

    #[test]
    fn evaluate_exact_match_case_normalized() {
        let secret = Word::parse("CRANE").unwrap();
        let guess = Word::parse("crane").unwrap();
        assert!(evaluate(&secret, &guess).is_solved());
    }

    #[test]
    fn evaluate_result_length_matches_word_length() {
        for (secret, guess) in [("ox", "ax"), ("crane", "slate"), ("quizzes", "buzzers")] {
            let result = eval(secret, guess);
            assert_eq!(result.len(), secret.len());
        }
    }

    #[test]
    fn evaluate_duplicate_guess_letters_not_overcounted() {
        // Secret SPEED, guess ERASE: the guess has two E's and SPEED has
        // two, so both are Present; A does not occur at all
        let result = eval("speed", "erase");
        assert_eq!(result.letters(), &[Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn evaluate_duplicate_letters_both_credited() {
        // Secret ALLOY, guess LLAMA: two L's in both words, so both guess
        // L's are credited; only the first A finds a remaining occurrence
        let result = eval("alloy", "llama");
        assert_eq!(result.letters(), &[Present, Correct, Present, Absent, Absent]);
    }

    #[test]
    fn evaluate_green_consumes_before_yellow() {
        // Secret FLOOR, guess ROBOT: the O at position 3 is Correct and
        // consumes one O, leaving one for the O at position 1
        let result = eval("floor", "robot");
        assert_eq!(result.letters(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn evaluate_extra_guess_copies_go_absent() {
        // Secret CRANE has one E; guess EERIE repeats it three times, and
        // the exact-position E claims it, leaving the others Absent
        let result = eval("crane", "eerie");
        assert_eq!(result.letters(), &[Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn evaluate_single_scenario_crane_crate() {
        let result = eval("crane", "crate");
        assert_eq!(
            result.letters(),
            &[Correct, Correct, Correct, Absent, Correct]
        );
        assert!(!result.is_solved());
    }

    #[test]
    fn evaluate_is_deterministic() {
        let secret = Word::new("speed").unwrap();
        let guess = Word::new("erase").unwrap();
        assert_eq!(evaluate(&secret, &guess), evaluate(&secret, &guess));
    }

    #[test]
    fn evaluate_non_default_length() {
        let result = eval("bananas", "cabanas");
        assert_eq!(result.len(), 7);
        assert_eq!(
            result.letters(),
            &[Absent, Correct, Present, Correct, Correct, Correct, Correct]
        );
    }
}
