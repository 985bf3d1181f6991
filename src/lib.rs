//! # puzzle-hunt
//!
//! Game-state engine for a riddle-driven puzzle hunt.
//!
//! Teams log in, solve riddles in order, and earn one letter of a hidden
//! phrase per riddle. They win by revealing every letter or by guessing the
//! phrase outright, and lose when their final-phrase guesses run out.
//!
//! ## Design Principles
//!
//! 1. **Raw facts only**: the session stores what happened (solved ids,
//!    revealed letters, guesses left, outright win). Progress, win and loss
//!    are recomputed from those facts on every read.
//!
//! 2. **Engine is authoritative**: invalid letters and unknown puzzles are
//!    rejected by the engine, not left to the UI.
//!
//! 3. **Injected storage**: the engine persists through [`KeyValueStore`]
//!    and never touches ambient globals. Storage failures degrade to
//!    in-memory play; they never abort a game.
//!
//! ## Modules
//!
//! - `core`: puzzles, final phrase, session, configuration
//! - `rules`: derived queries (current puzzle, won, over)
//! - `engine`: `HuntEngine` and its operations
//! - `storage`: key-value port, session codec, memory and file stores
//! - `sync`: remote API contract and server-wins status shape
//! - `error`: error types

pub mod core;
pub mod rules;
pub mod engine;
pub mod storage;
pub mod sync;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    FinalPhrase, GuessFloor, HuntConfig, HuntConfigBuilder, PhraseMatch, Puzzle, PuzzleId,
    PuzzleSet, Session,
};

pub use crate::rules::GameOutcome;

pub use crate::engine::HuntEngine;

pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};

pub use crate::sync::{Endpoint, GameStatus};

pub use crate::error::{HuntError, StoreError};
