//! Word list loading utilities
//!
//! Provides functions to load secret pools from files or from the
//! embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file, one word per line
///
/// Invalid entries (wrong length, non-letters) are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_arena::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/secrets.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::with_length(trimmed, length).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector, keeping the given length
///
/// # Examples
/// ```
/// use wordle_arena::wordlists::loader::words_from_slice;
/// use wordle_arena::wordlists::SECRET_POOL;
///
/// let words = words_from_slice(SECRET_POOL, 5);
/// assert_eq!(words.len(), SECRET_POOL.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_wrong_length() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_other_length() {
        let input = &["crane", "puzzle", "arcade"];
        let words = words_from_slice(input, 6);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "puzzle");
        assert_eq!(words[1].text(), "arcade");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input, 5);
        assert_eq!(words.len(), 0);
    }
}
