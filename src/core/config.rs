//! Hunt configuration.
//!
//! A hunt is configured once at startup:
//! - `FinalPhrase`: the secret phrase and its letter universe
//! - `PuzzleSet`: the ordered riddles
//! - Guess limit and how guesses are compared and counted
//!
//! The engine never hardcodes puzzles or the phrase; the defaults are the
//! standard eight-riddle "POWERHOUSE" hunt.

use serde::{Deserialize, Serialize};

use super::phrase::{FinalPhrase, PhraseMatch};
use super::puzzle::PuzzleSet;
use super::session::DEFAULT_MAX_GUESSES;
use crate::error::HuntError;

/// What happens to the guess counter below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessFloor {
    /// Wrong guesses stop counting at 0.
    #[default]
    Clamp,
    /// Every wrong guess decrements, even past 0.
    Unbounded,
}

/// Complete hunt configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntConfig {
    /// Phrase to reveal or guess.
    pub phrase: FinalPhrase,

    /// Riddles in solve order.
    pub puzzles: PuzzleSet,

    /// Final-phrase guesses per session.
    pub max_guesses: i32,

    /// Guess normalization.
    pub phrase_match: PhraseMatch,

    /// Counter behavior on wrong guesses.
    pub guess_floor: GuessFloor,

    /// Logging in as "test" seeds a partially solved session.
    /// Diagnostic only; disable for real events.
    pub debug_login: bool,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            phrase: FinalPhrase::default(),
            puzzles: PuzzleSet::default_hunt(),
            max_guesses: DEFAULT_MAX_GUESSES,
            phrase_match: PhraseMatch::default(),
            guess_floor: GuessFloor::default(),
            debug_login: true,
        }
    }
}

impl HuntConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> HuntConfigBuilder {
        HuntConfigBuilder::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use puzzle_hunt::core::{HuntConfig, GuessFloor};
    ///
    /// let config = HuntConfig::from_json(r#"{ "max_guesses": 5, "guess_floor": "unbounded" }"#).unwrap();
    /// assert_eq!(config.max_guesses, 5);
    /// assert_eq!(config.guess_floor, GuessFloor::Unbounded);
    /// assert_eq!(config.puzzles.len(), 8);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, HuntError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HuntError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), HuntError> {
        if self.max_guesses < 1 {
            return Err(HuntError::InvalidConfig(format!(
                "max_guesses must be at least 1, got {}",
                self.max_guesses
            )));
        }
        Ok(())
    }
}

/// Builder for [`HuntConfig`].
#[derive(Default)]
pub struct HuntConfigBuilder {
    config: HuntConfig,
}

impl HuntConfigBuilder {
    #[must_use]
    pub fn phrase(mut self, phrase: FinalPhrase) -> Self {
        self.config.phrase = phrase;
        self
    }

    #[must_use]
    pub fn puzzles(mut self, puzzles: PuzzleSet) -> Self {
        self.config.puzzles = puzzles;
        self
    }

    #[must_use]
    pub fn max_guesses(mut self, max: i32) -> Self {
        self.config.max_guesses = max;
        self
    }

    #[must_use]
    pub fn phrase_match(mut self, mode: PhraseMatch) -> Self {
        self.config.phrase_match = mode;
        self
    }

    #[must_use]
    pub fn guess_floor(mut self, floor: GuessFloor) -> Self {
        self.config.guess_floor = floor;
        self
    }

    #[must_use]
    pub fn debug_login(mut self, enabled: bool) -> Self {
        self.config.debug_login = enabled;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<HuntConfig, HuntError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
