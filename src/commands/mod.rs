//! Command implementations

pub mod eval;
pub mod play;

pub use eval::evaluate_pair;
pub use play::{PlayConfig, run_play};
