//! Core domain types
//!
//! Fundamental data structures for the game: words and guess evaluation.

mod evaluate;
mod word;

pub use evaluate::{GuessResult, LetterResult, evaluate};
pub use word::{Word, WordError};
