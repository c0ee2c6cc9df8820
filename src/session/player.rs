//! Player state within a game session
//!
//! Tracks a player's guess history and completion status. The guess and
//! result lists are parallel: entries are only ever appended together.

use crate::core::{GuessResult, Word};

/// One player in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    name: String,
    guesses: Vec<Word>,
    results: Vec<GuessResult>,
    solved: bool,
    time_completed: Option<u64>,
}

impl Player {
    /// Create a new player with empty histories
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            guesses: Vec::new(),
            results: Vec::new(),
            solved: false,
            time_completed: None,
        }
    }

    /// Player identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Submitted guesses, in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Evaluation results, positionally parallel to `guesses()`
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// True once any result came back all-correct; never reverts
    #[inline]
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Millisecond timestamp of the solving guess, if solved
    #[inline]
    #[must_use]
    pub fn time_completed(&self) -> Option<u64> {
        self.time_completed
    }

    /// Number of guesses taken so far
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Append a guess and its result atomically
    ///
    /// Sets `solved` and records the completion time on the first
    /// all-correct result. Callers must have validated the guess already.
    pub(crate) fn record(&mut self, guess: Word, result: GuessResult, at: u64) {
        let newly_solved = result.is_solved();

        self.guesses.push(guess);
        self.results.push(result);

        if newly_solved && !self.solved {
            self.solved = true;
            self.time_completed = Some(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    #[test]
    fn new_player_has_empty_histories() {
        let player = Player::new("p1", "Alice");
        assert_eq!(player.id(), "p1");
        assert_eq!(player.name(), "Alice");
        assert!(player.guesses().is_empty());
        assert!(player.results().is_empty());
        assert!(!player.solved());
        assert!(player.time_completed().is_none());
    }

    #[test]
    fn record_keeps_histories_parallel() {
        let secret = word("crane");
        let mut player = Player::new("p1", "Alice");

        for guess_text in ["slate", "crate", "brace"] {
            let guess = word(guess_text);
            let result = evaluate(&secret, &guess);
            player.record(guess, result, 100);

            assert_eq!(player.guesses().len(), player.results().len());
        }

        assert_eq!(player.guess_count(), 3);
    }

    #[test]
    fn record_sets_solved_with_timestamp() {
        let secret = word("crane");
        let mut player = Player::new("p1", "Alice");

        let guess = word("crane");
        let result = evaluate(&secret, &guess);
        player.record(guess, result, 4242);

        assert!(player.solved());
        assert_eq!(player.time_completed(), Some(4242));
    }

    #[test]
    fn solved_timestamp_is_not_overwritten() {
        let secret = word("crane");
        let mut player = Player::new("p1", "Alice");

        let guess = word("crane");
        player.record(guess.clone(), evaluate(&secret, &guess), 100);
        player.record(guess.clone(), evaluate(&secret, &guess), 200);

        assert!(player.solved());
        assert_eq!(player.time_completed(), Some(100));
    }
}
