//! Terminal output formatting
//!
//! Presentation adapter over the canonical core results: colors, emoji,
//! and the legacy status-code table.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_summary};
pub use formatters::{colorize_guess, from_status_code, result_to_codes, result_to_emoji};
