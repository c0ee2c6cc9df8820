//! In-memory reference implementation of the service boundary
//!
//! All sessions live behind one mutex, which gives every session the
//! single-writer discipline the state machine requires: mutations apply one
//! at a time in lock-acquisition order, and subscriber callbacks fire in
//! that same order before the next mutation can begin.

use super::{GameService, ServiceError, SessionId, SnapshotCallback, SubscriptionId};
use crate::core::{GuessResult, Word};
use crate::session::{DEFAULT_MAX_GUESSES, GameSession, GameStatus};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Join codes avoid lookalike characters (I/l/1, O/0)
const JOIN_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const JOIN_CODE_LEN: usize = 6;

/// One session plus its realtime bookkeeping
struct Slot {
    session: GameSession,
    /// Bumped on every mutation; snapshots go out in version order
    version: u64,
    subscribers: Vec<(SubscriptionId, SnapshotCallback)>,
}

impl Slot {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            version: 0,
            subscribers: Vec::new(),
        }
    }

    /// Record a mutation and fan the new snapshot out to subscribers
    fn notify(&mut self) {
        self.version += 1;
        for (_, callback) in &self.subscribers {
            callback(&self.session);
        }
    }
}

struct Inner {
    sessions: FxHashMap<SessionId, Slot>,
    next_subscription: SubscriptionId,
}

/// In-memory [`GameService`]
///
/// Suitable for local play and tests; nothing survives the process.
pub struct InMemoryService {
    inner: Mutex<Inner>,
    max_guesses: usize,
}

impl InMemoryService {
    /// Create an empty service
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                sessions: FxHashMap::default(),
                next_subscription: 1,
            }),
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    /// Override the attempt limit applied to sessions this service creates
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Number of sessions currently held
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.lock().sessions.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a callback panicked; the session data itself
        // is still consistent because mutations complete before notify runs
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for InMemoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl GameService for InMemoryService {
    fn create_session(&self, host_id: &str, secret_word: &str) -> Result<SessionId, ServiceError> {
        let secret = Word::parse(secret_word)?;
        let mut inner = self.lock();

        let mut id = generate_join_code();
        while inner.sessions.contains_key(&id) {
            id = generate_join_code();
        }

        let session =
            GameSession::new(id.clone(), host_id, secret).with_max_guesses(self.max_guesses);
        inner.sessions.insert(id.clone(), Slot::new(session));
        Ok(id)
    }

    fn join_session(
        &self,
        session_id: &str,
        player_id: &str,
        name: &str,
    ) -> Result<(), ServiceError> {
        let mut inner = self.lock();
        let slot = slot_mut(&mut inner, session_id)?;

        slot.session.join(player_id, name)?;
        slot.notify();
        Ok(())
    }

    fn fetch_session(&self, session_id: &str) -> Result<GameSession, ServiceError> {
        let inner = self.lock();
        inner
            .sessions
            .get(session_id)
            .map(|slot| slot.session.clone())
            .ok_or_else(|| ServiceError::UnknownSession(session_id.to_string()))
    }

    fn subscribe(
        &self,
        session_id: &str,
        callback: SnapshotCallback,
    ) -> Result<SubscriptionId, ServiceError> {
        let mut inner = self.lock();
        let id = inner.next_subscription;

        let slot = slot_mut(&mut inner, session_id)?;
        slot.subscribers.push((id, callback));

        inner.next_subscription += 1;
        Ok(id)
    }

    fn unsubscribe(&self, session_id: &str, subscription: SubscriptionId) {
        let mut inner = self.lock();
        if let Some(slot) = inner.sessions.get_mut(session_id) {
            slot.subscribers.retain(|(id, _)| *id != subscription);
        }
    }

    fn submit_guess(
        &self,
        session_id: &str,
        player_id: &str,
        guess: &str,
    ) -> Result<GuessResult, ServiceError> {
        let guess = Word::parse(guess)?;
        let now = now_millis();

        let mut inner = self.lock();
        let slot = slot_mut(&mut inner, session_id)?;

        let result = slot.session.submit_guess(player_id, guess, now)?;
        slot.notify();
        Ok(result)
    }

    fn update_status(
        &self,
        session_id: &str,
        status: GameStatus,
        started_at: Option<u64>,
        ended_at: Option<u64>,
    ) -> Result<(), ServiceError> {
        let mut inner = self.lock();
        let slot = slot_mut(&mut inner, session_id)?;

        match status {
            GameStatus::Waiting => {
                // Only forward transitions exist; Waiting is where sessions
                // are created, never a target
                return Err(ServiceError::Session(
                    crate::session::SessionError::InvalidState {
                        operation: "return to waiting",
                        status: slot.session.status(),
                    },
                ));
            }
            GameStatus::Playing => {
                slot.session.start(started_at.unwrap_or_else(now_millis))?;
            }
            GameStatus::Finished => {
                slot.session.finish(ended_at.unwrap_or_else(now_millis))?;
            }
        }

        slot.notify();
        Ok(())
    }
}

fn slot_mut<'a>(inner: &'a mut Inner, session_id: &str) -> Result<&'a mut Slot, ServiceError> {
    inner
        .sessions
        .get_mut(session_id)
        .ok_or_else(|| ServiceError::UnknownSession(session_id.to_string()))
}

/// Milliseconds since the Unix epoch
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Random join code, e.g. "K4TQ7Z"
fn generate_join_code() -> String {
    let mut rng = rand::rng();
    (0..JOIN_CODE_LEN)
        .map(|_| JOIN_CODE_ALPHABET[rng.random_range(0..JOIN_CODE_ALPHABET.len())] as char)
        .collect()
}
