//! One-shot evaluation command
//!
//! Evaluates a single guess against a secret without any session.

use crate::core::{GuessResult, Word, evaluate};

/// Evaluate `guess` against `secret`, parsing both
///
/// The secret fixes the required length; the guess must match it.
///
/// # Errors
///
/// Returns an error if either word fails validation or the lengths differ.
pub fn evaluate_pair(secret: &str, guess: &str) -> Result<GuessResult, String> {
    let secret = Word::parse(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess =
        Word::with_length(guess, secret.len()).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(evaluate(&secret, &guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult::{Absent, Correct};

    #[test]
    fn evaluate_pair_returns_feedback() {
        let result = evaluate_pair("crane", "crate").unwrap();
        assert_eq!(
            result.letters(),
            &[Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_pair_normalizes_case() {
        let result = evaluate_pair("CRANE", "crane").unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn evaluate_pair_rejects_length_mismatch() {
        let err = evaluate_pair("crane", "cranes").unwrap_err();
        assert!(err.contains("Invalid guess"));
    }

    #[test]
    fn evaluate_pair_rejects_bad_secret() {
        let err = evaluate_pair("cr4ne", "crane").unwrap_err();
        assert!(err.contains("Invalid secret word"));
    }
}
