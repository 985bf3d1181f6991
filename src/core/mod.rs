//! Core hunt types: puzzles, the final phrase, sessions, configuration.
//!
//! Everything here is plain data. Rules live in [`crate::rules`], the
//! mutating operations in [`crate::engine`].

pub mod puzzle;
pub mod phrase;
pub mod session;
pub mod config;

pub use puzzle::{Puzzle, PuzzleId, PuzzleSet};
pub use phrase::{normalize_letter, FinalPhrase, PhraseMatch, DEFAULT_PHRASE};
pub use session::{Session, DEFAULT_MAX_GUESSES};
pub use config::{GuessFloor, HuntConfig, HuntConfigBuilder};
