//! Per-team session state.
//!
//! ## Session
//!
//! Holds only the raw facts of a playthrough:
//! - Team name (empty = logged out)
//! - Solved puzzle ids
//! - Revealed letters
//! - Remaining final-phrase guesses
//! - Whether the phrase was guessed outright
//!
//! Progress, win and loss are derived in [`crate::rules`] and never stored.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::config::{GuessFloor, HuntConfig};
use super::puzzle::PuzzleId;

/// Final-phrase guesses a fresh session starts with.
pub const DEFAULT_MAX_GUESSES: i32 = 3;

/// Mutable game state for one team.
///
/// Uses `im` persistent sets so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) team_name: String,
    pub(crate) solved_puzzles: OrdSet<PuzzleId>,
    pub(crate) revealed_letters: OrdSet<char>,
    pub(crate) guesses_left: i32,
    pub(crate) won_by_guess: bool,
}

impl Session {
    /// Create a fresh, logged-out session.
    #[must_use]
    pub fn new(max_guesses: i32) -> Self {
        Self {
            team_name: String::new(),
            solved_puzzles: OrdSet::new(),
            revealed_letters: OrdSet::new(),
            guesses_left: max_guesses,
            won_by_guess: false,
        }
    }

    /// Build a session from raw parts. Not validated; see [`Session::check`].
    #[must_use]
    pub fn from_parts(
        team_name: impl Into<String>,
        solved_puzzles: impl IntoIterator<Item = PuzzleId>,
        revealed_letters: impl IntoIterator<Item = char>,
        guesses_left: i32,
        won_by_guess: bool,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            solved_puzzles: solved_puzzles.into_iter().collect(),
            revealed_letters: revealed_letters.into_iter().collect(),
            guesses_left,
            won_by_guess,
        }
    }

    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// A session with a team name is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.team_name.is_empty()
    }

    #[must_use]
    pub fn solved_puzzles(&self) -> &OrdSet<PuzzleId> {
        &self.solved_puzzles
    }

    #[must_use]
    pub fn revealed_letters(&self) -> &OrdSet<char> {
        &self.revealed_letters
    }

    #[must_use]
    pub fn guesses_left(&self) -> i32 {
        self.guesses_left
    }

    #[must_use]
    pub fn won_by_guess(&self) -> bool {
        self.won_by_guess
    }

    /// Check the session against a hunt's puzzles, phrase and guess limit.
    ///
    /// Returns a description of the first violated invariant.
    pub fn check(&self, config: &HuntConfig) -> Result<(), String> {
        if let Some(id) = self.solved_puzzles.iter().find(|id| !config.puzzles.contains(**id)) {
            return Err(format!("solved puzzle {} does not exist", id));
        }
        if let Some(c) = self
            .revealed_letters
            .iter()
            .find(|c| !config.phrase.is_unique_letter(**c))
        {
            return Err(format!("revealed letter {:?} is not in the phrase", c));
        }
        if self.guesses_left > config.max_guesses {
            return Err(format!(
                "{} guesses left exceeds the limit of {}",
                self.guesses_left, config.max_guesses
            ));
        }
        if config.guess_floor == GuessFloor::Clamp && self.guesses_left < 0 {
            return Err(format!("{} guesses left is negative", self.guesses_left));
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES)
    }
}
