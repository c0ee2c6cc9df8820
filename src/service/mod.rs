//! Data-access boundary
//!
//! The game core talks to the outside world (lobby storage, realtime fanout)
//! only through [`GameService`]. Production deployments back it with a
//! persistence layer; [`InMemoryService`] is the reference implementation
//! used by the CLI and tests.

mod memory;

pub use memory::InMemoryService;

use crate::core::{GuessResult, WordError};
use crate::session::{GameSession, GameStatus, SessionError};
use std::fmt;

/// Identity of a session: a short join code
pub type SessionId = String;

/// Handle for an active subscription
pub type SubscriptionId = u64;

/// Callback invoked with a full session snapshot after every state change
///
/// Snapshots for one session are delivered in mutation order, never
/// out of order. Callbacks run inside the service's mutation path and must
/// not call back into the service.
pub type SnapshotCallback = Box<dyn Fn(&GameSession) + Send>;

/// Error type for service operations
#[derive(Debug)]
pub enum ServiceError {
    /// No session with the given id
    UnknownSession(SessionId),
    /// A word failed validation (secret or guess charset/shape)
    InvalidWord(WordError),
    /// The session rejected the operation
    Session(SessionError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSession(id) => write!(f, "No session with id '{id}'"),
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::Session(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownSession(_) => None,
            Self::InvalidWord(e) => Some(e),
            Self::Session(e) => Some(e),
        }
    }
}

impl From<WordError> for ServiceError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<SessionError> for ServiceError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// The boundary operations the core consumes and exposes
///
/// Implementations must serialize mutations per session so the
/// guesses/results append invariant and the one-shot `solved` transition
/// hold under concurrent callers.
pub trait GameService: Send + Sync {
    /// Create a session in `Waiting` and return its join code
    ///
    /// # Errors
    /// Returns `InvalidWord` if the secret fails validation.
    fn create_session(&self, host_id: &str, secret_word: &str) -> Result<SessionId, ServiceError>;

    /// Add a player to a waiting session
    ///
    /// # Errors
    /// Returns `UnknownSession` or a session rejection.
    fn join_session(&self, session_id: &str, player_id: &str, name: &str)
    -> Result<(), ServiceError>;

    /// Fetch a full snapshot of a session
    ///
    /// # Errors
    /// Returns `UnknownSession` if the id is not known.
    fn fetch_session(&self, session_id: &str) -> Result<GameSession, ServiceError>;

    /// Register a callback for session updates
    ///
    /// The callback receives a full snapshot after every state change, in
    /// mutation order. Delivery happens while the mutation's lock is still
    /// held (that is what keeps it in order), so a callback must not invoke
    /// the service again; copy what you need out of the snapshot instead.
    ///
    /// # Errors
    /// Returns `UnknownSession` if the id is not known.
    fn subscribe(
        &self,
        session_id: &str,
        callback: SnapshotCallback,
    ) -> Result<SubscriptionId, ServiceError>;

    /// Drop a subscription; unknown handles are ignored
    fn unsubscribe(&self, session_id: &str, subscription: SubscriptionId);

    /// Submit a guess on behalf of a player and return its evaluation
    ///
    /// # Errors
    /// Returns `UnknownSession`, `InvalidWord` for a malformed guess, or the
    /// session's rejection (wrong state, unknown/solved player, bad length).
    fn submit_guess(
        &self,
        session_id: &str,
        player_id: &str,
        guess: &str,
    ) -> Result<GuessResult, ServiceError>;

    /// Drive the session lifecycle forward
    ///
    /// `Playing` starts the session, `Finished` ends it. Explicit timestamps
    /// override the service clock.
    ///
    /// # Errors
    /// Returns `UnknownSession` or a session rejection (including any
    /// attempt at a backward transition).
    fn update_status(
        &self,
        session_id: &str,
        status: GameStatus,
        started_at: Option<u64>,
        ended_at: Option<u64>,
    ) -> Result<(), ServiceError>;
}
