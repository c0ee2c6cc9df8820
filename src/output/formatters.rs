//! Formatting utilities for terminal output
//!
//! Everything that turns canonical [`LetterResult`] values into labels,
//! colors, or legacy wire codes lives here; the evaluator itself never
//! carries presentation concerns.

use crate::core::{GuessResult, LetterResult};
use colored::Colorize;

/// Format a result as emoji squares
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .letters()
        .iter()
        .map(|r| match r {
            LetterResult::Correct => '🟩',
            LetterResult::Present => '🟨',
            LetterResult::Absent => '⬜',
        })
        .collect()
}

/// Render a guess with per-letter colors matching its result
///
/// Matching lengths are a caller precondition, guaranteed by the session
/// invariant that guesses and results are appended together.
#[must_use]
pub fn colorize_guess(guess: &str, result: &GuessResult) -> String {
    debug_assert_eq!(guess.len(), result.len(), "guess/result length mismatch");

    guess
        .to_uppercase()
        .chars()
        .zip(result.letters())
        .map(|(ch, r)| {
            let letter = ch.to_string();
            match r {
                LetterResult::Correct => letter.bright_green().bold().to_string(),
                LetterResult::Present => letter.bright_yellow().bold().to_string(),
                LetterResult::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Canonical single-letter code for a result: `c`/`p`/`a`
#[must_use]
pub const fn to_status_code(result: LetterResult) -> char {
    match result {
        LetterResult::Correct => 'c',
        LetterResult::Present => 'p',
        LetterResult::Absent => 'a',
    }
}

/// Map an abbreviated status code to a canonical result
///
/// Accepts the canonical codes `c`/`p`/`a` (any case). The extra `r` code is
/// a compatibility shim for an older client API that reported "revealed"
/// letters; those clients treated it as absent, so it maps to `Absent` here
/// rather than in the evaluator.
#[must_use]
pub fn from_status_code(code: char) -> Option<LetterResult> {
    match code.to_ascii_lowercase() {
        'c' => Some(LetterResult::Correct),
        'p' => Some(LetterResult::Present),
        'a' | 'r' => Some(LetterResult::Absent),
        _ => None,
    }
}

/// Format a result as a string of status codes, e.g. "cccac"
#[must_use]
pub fn result_to_codes(result: &GuessResult) -> String {
    result.letters().iter().map(|&r| to_status_code(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn eval(secret: &str, guess: &str) -> GuessResult {
        let secret = Word::parse(secret).unwrap();
        let guess = Word::parse(guess).unwrap();
        evaluate(&secret, &guess)
    }

    #[test]
    fn emoji_for_mixed_result() {
        let result = eval("crane", "crate");
        assert_eq!(result_to_emoji(&result), "🟩🟩🟩⬜🟩");
    }

    #[test]
    fn emoji_for_solved_result() {
        let result = eval("crane", "crane");
        assert_eq!(result_to_emoji(&result), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn status_codes_round_trip() {
        let result = eval("speed", "erase");
        let codes = result_to_codes(&result);
        assert_eq!(codes, "paapp");

        for (code, &expected) in codes.chars().zip(result.letters()) {
            assert_eq!(from_status_code(code), Some(expected));
        }
    }

    #[test]
    fn legacy_revealed_code_maps_to_absent() {
        assert_eq!(from_status_code('r'), Some(LetterResult::Absent));
        assert_eq!(from_status_code('R'), Some(LetterResult::Absent));
    }

    #[test]
    fn unknown_status_code_rejected() {
        assert_eq!(from_status_code('x'), None);
        assert_eq!(from_status_code('1'), None);
    }

    #[test]
    fn colorize_guess_covers_every_letter() {
        let result = eval("crane", "slate");
        let rendered = colorize_guess("slate", &result);

        // Colored output still contains each uppercase letter in order
        for letter in ['S', 'L', 'A', 'T', 'E'] {
            assert!(rendered.contains(letter));
        }
    }
}
