//! Wordle Arena
//!
//! Multiplayer word-guessing game core: players join a shared session,
//! submit guesses against a hidden secret word, and receive per-letter
//! feedback from a duplicate-aware two-pass evaluator.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_arena::core::{Word, evaluate};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("crate").unwrap();
//!
//! let result = evaluate(&secret, &guess);
//! assert!(!result.is_solved());
//! ```

// Core domain types
pub mod core;

// Session lifecycle and state machine
pub mod session;

// Data-access boundary and in-memory implementation
pub mod service;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
