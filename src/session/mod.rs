//! Game session lifecycle
//!
//! Players, sessions, and the `Waiting → Playing → Finished` state machine.

mod game;
mod player;

pub use game::{DEFAULT_MAX_GUESSES, GameSession, GameStatus, SessionError};
pub use player::Player;
