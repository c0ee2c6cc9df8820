//! Game session state machine
//!
//! A session moves strictly forward through `Waiting → Playing → Finished`.
//! Players join while waiting, guess while playing, and the session finishes
//! on host action, when everyone has solved, or when every player has used
//! up the attempt limit.
//!
//! Every rejected operation leaves the session untouched: no partial
//! appends, no silent repair of invalid guesses.

use super::Player;
use crate::core::{GuessResult, Word, evaluate};
use std::fmt;

/// Default number of guesses each player gets
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Lifecycle status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Created; players may join
    Waiting,
    /// In progress; guesses accepted
    Playing,
    /// Over; terminal
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Playing => write!(f, "playing"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// Error type for rejected session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Guess length does not match the secret word length
    InvalidGuessLength { expected: usize, actual: usize },
    /// Operation not allowed in the session's current status
    InvalidState {
        operation: &'static str,
        status: GameStatus,
    },
    /// Player has already solved the word
    PlayerSolved(String),
    /// Player is not part of the session
    UnknownPlayer(String),
    /// Player id already joined
    DuplicatePlayer(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidState { operation, status } => {
                write!(f, "Cannot {operation} while session is {status}")
            }
            Self::PlayerSolved(id) => write!(f, "Player '{id}' has already solved the word"),
            Self::UnknownPlayer(id) => write!(f, "Player '{id}' is not in this session"),
            Self::DuplicatePlayer(id) => write!(f, "Player '{id}' has already joined"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One game instance: a secret word, a set of players, and a status lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    id: String,
    host_id: String,
    secret: Word,
    status: GameStatus,
    players: Vec<Player>,
    started_at: Option<u64>,
    ended_at: Option<u64>,
    winner: Option<String>,
    max_guesses: usize,
}

impl GameSession {
    /// Create a session in `Waiting` around a fixed secret word
    #[must_use]
    pub fn new(id: impl Into<String>, host_id: impl Into<String>, secret: Word) -> Self {
        Self {
            id: id.into(),
            host_id: host_id.into(),
            secret,
            status: GameStatus::Waiting,
            players: Vec::new(),
            started_at: None,
            ended_at: None,
            winner: None,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    /// Override the per-player attempt limit
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Session identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identity of the hosting player
    #[inline]
    #[must_use]
    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    /// The secret word
    ///
    /// Hiding the secret from guessing clients is a transport concern; the
    /// in-memory state keeps it accessible for evaluation and reveal.
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Required guess length, fixed by the secret
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// All joined players, in join order
    #[inline]
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id
    #[must_use]
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Millisecond timestamp of the start transition, once playing
    #[inline]
    #[must_use]
    pub fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    /// Millisecond timestamp of the finish transition, once finished
    #[inline]
    #[must_use]
    pub fn ended_at(&self) -> Option<u64> {
        self.ended_at
    }

    /// Winning player id: earliest completion among solved players
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Per-player attempt limit
    #[inline]
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// True if every joined player has solved the word
    #[must_use]
    pub fn all_solved(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::solved)
    }

    /// True if every unsolved player has used up the attempt limit
    #[must_use]
    pub fn attempts_exhausted(&self) -> bool {
        !self.players.is_empty()
            && self
                .players
                .iter()
                .all(|p| p.solved() || p.guess_count() >= self.max_guesses)
    }

    /// Add a player while the session is `Waiting`
    ///
    /// # Errors
    /// Returns `InvalidState` once the session has started, or
    /// `DuplicatePlayer` if the id is already taken.
    pub fn join(
        &mut self,
        player_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.status != GameStatus::Waiting {
            return Err(SessionError::InvalidState {
                operation: "join",
                status: self.status,
            });
        }

        let player_id = player_id.into();
        if self.player(&player_id).is_some() {
            return Err(SessionError::DuplicatePlayer(player_id));
        }

        self.players.push(Player::new(player_id, name));
        Ok(())
    }

    /// Transition `Waiting → Playing`, recording the start time
    ///
    /// # Errors
    /// Returns `InvalidState` unless the session is `Waiting`.
    pub fn start(&mut self, at: u64) -> Result<(), SessionError> {
        if self.status != GameStatus::Waiting {
            return Err(SessionError::InvalidState {
                operation: "start",
                status: self.status,
            });
        }

        self.status = GameStatus::Playing;
        self.started_at = Some(at);
        Ok(())
    }

    /// Transition `Playing → Finished`, recording the end time and winner
    ///
    /// The winner is the solved player with the earliest completion time,
    /// if anyone solved at all.
    ///
    /// # Errors
    /// Returns `InvalidState` unless the session is `Playing`.
    pub fn finish(&mut self, at: u64) -> Result<(), SessionError> {
        if self.status != GameStatus::Playing {
            return Err(SessionError::InvalidState {
                operation: "finish",
                status: self.status,
            });
        }

        self.status = GameStatus::Finished;
        self.ended_at = Some(at);
        self.winner = self
            .players
            .iter()
            .filter(|p| p.solved())
            .min_by_key(|p| p.time_completed())
            .map(|p| p.id().to_string());
        Ok(())
    }

    /// Submit a guess for a player, returning its evaluation
    ///
    /// Validates status, player, and guess length before evaluating; a
    /// rejection mutates nothing. On success the guess and result are
    /// appended together, `solved` is set on an all-correct result, and the
    /// session auto-finishes once everyone has solved or run out of
    /// attempts.
    ///
    /// # Errors
    /// - `InvalidState` if the session is not `Playing`
    /// - `UnknownPlayer` if the player never joined
    /// - `PlayerSolved` if the player has already solved the word
    /// - `InvalidGuessLength` on a length mismatch
    pub fn submit_guess(
        &mut self,
        player_id: &str,
        guess: Word,
        at: u64,
    ) -> Result<GuessResult, SessionError> {
        if self.status != GameStatus::Playing {
            return Err(SessionError::InvalidState {
                operation: "submit a guess",
                status: self.status,
            });
        }

        let player_index = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or_else(|| SessionError::UnknownPlayer(player_id.to_string()))?;

        if self.players[player_index].solved() {
            return Err(SessionError::PlayerSolved(player_id.to_string()));
        }

        if guess.len() != self.secret.len() {
            return Err(SessionError::InvalidGuessLength {
                expected: self.secret.len(),
                actual: guess.len(),
            });
        }

        let result = evaluate(&self.secret, &guess);
        self.players[player_index].record(guess, result.clone(), at);

        if self.all_solved() || self.attempts_exhausted() {
            // Cannot fail: status is Playing here
            let _ = self.finish(at);
        }

        Ok(result)
    }
}
