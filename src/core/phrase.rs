//! The final phrase and its unique-letter universe.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::HuntError;

/// Default hunt phrase.
pub const DEFAULT_PHRASE: &str = "POWERHOUSE";

/// How a final-phrase guess is normalized before comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseMatch {
    /// Uppercase the guess, then compare byte-for-byte with the phrase.
    #[default]
    Exact,
    /// Uppercase and drop all whitespace on both sides before comparing.
    IgnoreWhitespace,
}

/// Uppercase a single letter the way phrase letters are stored.
///
/// Returns `None` for characters whose uppercase form is more than one
/// character (e.g. 'ß'), since those can never be a phrase letter.
///
/// ```
/// use puzzle_hunt::core::normalize_letter;
///
/// assert_eq!(normalize_letter('é'), Some('É'));
/// assert_eq!(normalize_letter('ß'), None);
/// ```
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    let first = upper.next()?;
    upper.next().is_none().then_some(first)
}

/// The secret phrase players reveal letter by letter or guess outright.
///
/// Stored uppercase. Whitespace separates words and is never a letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinalPhrase {
    text: String,
    unique: SmallVec<[char; 16]>,
}

impl FinalPhrase {
    /// Create a phrase. Fails if it contains no letters.
    pub fn new(text: impl AsRef<str>) -> Result<Self, HuntError> {
        let text = text.as_ref().trim().to_uppercase();

        let mut unique: SmallVec<[char; 16]> = SmallVec::new();
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }

        if unique.is_empty() {
            return Err(HuntError::InvalidConfig("final phrase has no letters".into()));
        }

        Ok(Self { text, unique })
    }

    /// The phrase text (uppercase).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Unique letters in order of first appearance.
    ///
    /// ```
    /// use puzzle_hunt::core::FinalPhrase;
    ///
    /// let phrase = FinalPhrase::new("POWERHOUSE").unwrap();
    /// assert_eq!(phrase.unique_letters(), &['P', 'O', 'W', 'E', 'R', 'H', 'U', 'S']);
    /// ```
    #[must_use]
    pub fn unique_letters(&self) -> &[char] {
        &self.unique
    }

    /// Check whether `c` (already uppercase) belongs to the phrase.
    #[must_use]
    pub fn is_unique_letter(&self, c: char) -> bool {
        self.unique.contains(&c)
    }

    /// True when every letter of the phrase is in `revealed`.
    #[must_use]
    pub fn is_fully_revealed(&self, revealed: &OrdSet<char>) -> bool {
        self.unique.iter().all(|c| revealed.contains(c))
    }

    /// Compare a guess against the phrase.
    #[must_use]
    pub fn matches(&self, guess: &str, mode: PhraseMatch) -> bool {
        let guess = guess.to_uppercase();
        match mode {
            PhraseMatch::Exact => guess == self.text,
            PhraseMatch::IgnoreWhitespace => {
                let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
                strip(&guess) == strip(&self.text)
            }
        }
    }

    /// Words of the phrase.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Per-word display mask: `Some(c)` for revealed letters, `None` otherwise.
    #[must_use]
    pub fn mask(&self, revealed: &OrdSet<char>) -> Vec<Vec<Option<char>>> {
        self.words()
            .map(|word| {
                word.chars()
                    .map(|c| revealed.contains(&c).then_some(c))
                    .collect()
            })
            .collect()
    }
}

impl Default for FinalPhrase {
    fn default() -> Self {
        Self {
            text: DEFAULT_PHRASE.to_string(),
            unique: SmallVec::from_slice(&['P', 'O', 'W', 'E', 'R', 'H', 'U', 'S']),
        }
    }
}

impl TryFrom<String> for FinalPhrase {
    type Error = HuntError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<FinalPhrase> for String {
    fn from(phrase: FinalPhrase) -> Self {
        phrase.text
    }
}

impl std::fmt::Display for FinalPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
