//! Puzzle definitions and the ordered puzzle set.
//!
//! Puzzles are static for the lifetime of a hunt. Ids are 1-based and
//! sequential; the id order is the solve order.

use serde::{Deserialize, Serialize};

use crate::error::HuntError;

/// Puzzle identifier (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(pub u32);

impl PuzzleId {
    /// Create a new puzzle ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A riddle and its exact-match solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: PuzzleId,
    pub riddle: String,
    /// Uppercase solution, compared byte-for-byte.
    pub solution: String,
}

impl Puzzle {
    /// Create a new puzzle.
    pub fn new(id: u32, riddle: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            id: PuzzleId::new(id),
            riddle: riddle.into(),
            solution: solution.into(),
        }
    }

    /// Check an answer: uppercased, then compared exactly with the solution.
    #[must_use]
    pub fn is_solution(&self, answer: &str) -> bool {
        answer.to_uppercase() == self.solution
    }
}

/// Ordered, validated set of puzzles.
///
/// ## Example
///
/// ```
/// use puzzle_hunt::core::{PuzzleId, PuzzleSet};
///
/// let puzzles = PuzzleSet::default_hunt();
/// assert_eq!(puzzles.len(), 8);
///
/// let first = puzzles.get(PuzzleId::new(1)).unwrap();
/// assert!(first.is_solution("map"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Puzzle>", into = "Vec<Puzzle>")]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

impl PuzzleSet {
    /// Build a puzzle set.
    ///
    /// Ids must run 1, 2, 3, ... in order and every solution must be a
    /// non-empty uppercase string.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, HuntError> {
        if puzzles.is_empty() {
            return Err(HuntError::InvalidConfig("puzzle set is empty".into()));
        }
        for (idx, puzzle) in puzzles.iter().enumerate() {
            let expected = idx as u32 + 1;
            if puzzle.id.raw() != expected {
                return Err(HuntError::InvalidConfig(format!(
                    "puzzle at position {} has id {}, expected {}",
                    idx, puzzle.id, expected
                )));
            }
            if puzzle.solution.trim().is_empty() {
                return Err(HuntError::InvalidConfig(format!(
                    "puzzle {} has an empty solution",
                    puzzle.id
                )));
            }
            if puzzle.solution != puzzle.solution.to_uppercase() {
                return Err(HuntError::InvalidConfig(format!(
                    "puzzle {} solution {:?} is not uppercase",
                    puzzle.id, puzzle.solution
                )));
            }
        }
        Ok(Self { puzzles })
    }

    /// The eight riddles of the standard hunt.
    #[must_use]
    pub fn default_hunt() -> Self {
        let puzzles = vec![
            Puzzle::new(
                1,
                "I have cities, but no houses. I have mountains, but no trees. \
                 I have water, but no fish. What am I?",
                "MAP",
            ),
            Puzzle::new(2, "What has an eye, but cannot see?", "NEEDLE"),
            Puzzle::new(3, "What is so fragile that saying its name breaks it?", "SILENCE"),
            Puzzle::new(
                4,
                "What comes once in a minute, twice in a moment, but never in a thousand years?",
                "M",
            ),
            Puzzle::new(5, "I\u{2019}m tall when I\u{2019}m young, and I\u{2019}m short when I\u{2019}m old. What am I?", "CANDLE"),
            Puzzle::new(6, "What has many keys but can't open a single lock?", "PIANO"),
            Puzzle::new(7, "What can you hold in your left hand but not in your right?", "RIGHT ELBOW"),
            Puzzle::new(8, "What is always in front of you but can\u{2019}t be seen?", "FUTURE"),
        ];
        Self { puzzles }
    }

    /// Get a puzzle by ID.
    #[must_use]
    pub fn get(&self, id: PuzzleId) -> Option<&Puzzle> {
        let idx = (id.raw() as usize).checked_sub(1)?;
        self.puzzles.get(idx)
    }

    /// Check if a puzzle ID exists.
    #[must_use]
    pub fn contains(&self, id: PuzzleId) -> bool {
        self.get(id).is_some()
    }

    /// Number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false for a validated set; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Iterate in solve order.
    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    /// Iterate over all IDs in solve order.
    pub fn ids(&self) -> impl Iterator<Item = PuzzleId> + '_ {
        self.puzzles.iter().map(|p| p.id)
    }
}

impl Default for PuzzleSet {
    fn default() -> Self {
        Self::default_hunt()
    }
}

impl TryFrom<Vec<Puzzle>> for PuzzleSet {
    type Error = HuntError;

    fn try_from(puzzles: Vec<Puzzle>) -> Result<Self, Self::Error> {
        Self::new(puzzles)
    }
}

impl From<PuzzleSet> for Vec<Puzzle> {
    fn from(set: PuzzleSet) -> Self {
        set.puzzles
    }
}
