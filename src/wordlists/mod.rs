//! Word lists for hosting games
//!
//! Provides the embedded secret pool and file loading helpers.

mod embedded;
pub mod loader;

pub use embedded::{SECRET_POOL, SECRET_POOL_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_count_matches_const() {
        assert_eq!(SECRET_POOL.len(), SECRET_POOL_COUNT);
    }

    #[test]
    fn pool_words_are_valid() {
        for &word in SECRET_POOL {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn pool_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = SECRET_POOL.iter().collect();
        assert_eq!(unique.len(), SECRET_POOL.len());
    }
}
