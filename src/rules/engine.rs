//! Derived game queries.
//!
//! Pure functions of a [`Session`] and its [`HuntConfig`]. They are
//! recomputed on every read; nothing here is ever persisted.

use serde::{Deserialize, Serialize};

use crate::core::{HuntConfig, PuzzleId, Session};

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Still playing.
    InProgress,
    /// Every letter of the phrase was revealed through puzzles.
    WonByReveal,
    /// The phrase was guessed outright.
    WonByGuess,
    /// Out of guesses without winning.
    Lost,
}

impl GameOutcome {
    /// Check if the game has ended either way.
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Check if the team won.
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, GameOutcome::WonByReveal | GameOutcome::WonByGuess)
    }
}

/// The next puzzle to solve: one past the number solved.
///
/// Reaches `puzzles.len() + 1` once everything is solved.
#[must_use]
pub fn current_puzzle_id(session: &Session) -> PuzzleId {
    PuzzleId::new(session.solved_puzzles().len() as u32 + 1)
}

/// Check if every puzzle in the hunt has been solved.
#[must_use]
pub fn all_puzzles_solved(session: &Session, config: &HuntConfig) -> bool {
    current_puzzle_id(session).raw() as usize > config.puzzles.len()
}

/// Won when every phrase letter is revealed or the phrase was guessed.
#[must_use]
pub fn is_won(session: &Session, config: &HuntConfig) -> bool {
    session.won_by_guess() || config.phrase.is_fully_revealed(session.revealed_letters())
}

/// Lost when no guesses remain and the game is not won.
#[must_use]
pub fn is_over(session: &Session, config: &HuntConfig) -> bool {
    session.guesses_left() <= 0 && !is_won(session, config)
}

/// Classify the session. A win takes precedence over running out of guesses.
#[must_use]
pub fn outcome(session: &Session, config: &HuntConfig) -> GameOutcome {
    if session.won_by_guess() {
        GameOutcome::WonByGuess
    } else if config.phrase.is_fully_revealed(session.revealed_letters()) {
        GameOutcome::WonByReveal
    } else if session.guesses_left() <= 0 {
        GameOutcome::Lost
    } else {
        GameOutcome::InProgress
    }
}
