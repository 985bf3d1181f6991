//! Hunt rules as pure functions of the session.
//!
//! - Which puzzle comes next
//! - When the team has won
//! - When the team has lost
//!
//! The engine calls into these on every read and never caches the result.

pub mod engine;

pub use engine::{all_puzzles_solved, current_puzzle_id, is_over, is_won, outcome, GameOutcome};
