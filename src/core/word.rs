//! Word representation
//!
//! A Word stores a validated lowercase letter sequence. The length is
//! configurable per game; classic play uses [`Word::DEFAULT_LEN`].

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated game word: ASCII letters only, normalized to lowercase
///
/// Both secret words and guesses are represented as `Word`. The secret fixes
/// the length for a session; guesses are validated against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    WrongLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Classic word length used when no explicit length is configured
    pub const DEFAULT_LEN: usize = 5;

    /// Create a Word of any non-zero length
    ///
    /// The secret word of a session is parsed with this; its length then
    /// becomes the required length for every guess in that session.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    ///
    /// let word = Word::parse("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::parse("cran3").is_err());
    /// assert!(Word::parse("").is_err());
    /// ```
    pub fn parse(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = text.as_bytes().to_vec();

        Ok(Self { text, chars })
    }

    /// Create a Word that must have exactly `expected` letters
    ///
    /// # Errors
    /// Returns `WordError::WrongLength` on a length mismatch, otherwise the
    /// same errors as [`Word::parse`].
    pub fn with_length(text: impl Into<String>, expected: usize) -> Result<Self, WordError> {
        let word = Self::parse(text)?;

        if word.len() != expected {
            return Err(WordError::WrongLength {
                expected,
                actual: word.len(),
            });
        }

        Ok(word)
    }

    /// Create a classic 5-letter Word
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::Word;
    ///
    /// assert!(Word::new("crane").is_ok());
    /// assert!(Word::new("cranes").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, Self::DEFAULT_LEN)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator to track how many occurrences of a letter
    /// remain creditable when the guess repeats letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
