//! The game state engine.
//!
//! `HuntEngine` owns the session, applies the four mutating operations
//! (login, solve, final guess, restart) and writes through to its store.
//! UI layers read derived state from it and never mutate the session
//! directly.

pub mod hunt;

pub use hunt::HuntEngine;
