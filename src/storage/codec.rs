//! Session <-> key-value mapping.
//!
//! Each session field lives under its own fixed key, JSON-encoded:
//!
//! | key               | value                 |
//! |-------------------|-----------------------|
//! | `teamName`        | `"Owls"`              |
//! | `solvedPuzzles`   | `[1,2,3]`             |
//! | `revealedLetters` | `["O","P","W"]`       |
//! | `guessesLeft`     | `3`                   |
//! | `hasWonByGuess`   | `false`               |

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store::KeyValueStore;
use crate::core::Session;
use crate::error::StoreError;

pub const TEAM_NAME_KEY: &str = "teamName";
pub const SOLVED_PUZZLES_KEY: &str = "solvedPuzzles";
pub const REVEALED_LETTERS_KEY: &str = "revealedLetters";
pub const GUESSES_LEFT_KEY: &str = "guessesLeft";
pub const HAS_WON_BY_GUESS_KEY: &str = "hasWonByGuess";

/// All keys a session occupies.
pub const SESSION_KEYS: [&str; 5] = [
    TEAM_NAME_KEY,
    SOLVED_PUZZLES_KEY,
    REVEALED_LETTERS_KEY,
    GUESSES_LEFT_KEY,
    HAS_WON_BY_GUESS_KEY,
];

fn read_field<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::corrupt(key, e)),
        None => Ok(None),
    }
}

fn encode_field<T>(key: &'static str, value: &T) -> Result<(&'static str, String), StoreError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StoreError::corrupt(key, e))?;
    Ok((key, raw))
}

/// Load a session.
///
/// Returns `Ok(None)` when no session key is present. Keys that are missing
/// individually take the field default (`max_guesses` for the counter).
/// Any unparsable value is [`StoreError::Corrupt`].
pub fn load_session<S>(store: &S, max_guesses: i32) -> Result<Option<Session>, StoreError>
where
    S: KeyValueStore + ?Sized,
{
    let mut any_present = false;
    for key in SESSION_KEYS {
        if store.get(key)?.is_some() {
            any_present = true;
            break;
        }
    }
    if !any_present {
        return Ok(None);
    }

    let mut session = Session::new(max_guesses);
    if let Some(name) = read_field(store, TEAM_NAME_KEY)? {
        session.team_name = name;
    }
    if let Some(solved) = read_field(store, SOLVED_PUZZLES_KEY)? {
        session.solved_puzzles = solved;
    }
    if let Some(letters) = read_field(store, REVEALED_LETTERS_KEY)? {
        session.revealed_letters = letters;
    }
    if let Some(guesses) = read_field(store, GUESSES_LEFT_KEY)? {
        session.guesses_left = guesses;
    }
    if let Some(won) = read_field(store, HAS_WON_BY_GUESS_KEY)? {
        session.won_by_guess = won;
    }
    Ok(Some(session))
}

/// Write every field of the session in one batch.
///
/// All values are encoded before anything is written; on error the store
/// still holds the previous session.
pub fn save_session<S>(store: &mut S, session: &Session) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    let entries = [
        encode_field(TEAM_NAME_KEY, &session.team_name)?,
        encode_field(SOLVED_PUZZLES_KEY, &session.solved_puzzles)?,
        encode_field(REVEALED_LETTERS_KEY, &session.revealed_letters)?,
        encode_field(GUESSES_LEFT_KEY, &session.guesses_left)?,
        encode_field(HAS_WON_BY_GUESS_KEY, &session.won_by_guess)?,
    ];
    store.set_many(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleId;
    use crate::storage::MemoryStore;

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryStore::new();
        assert_eq!(load_session(&store, 3).unwrap(), None);
    }

    #[test]
    fn test_wire_format() {
        let mut store = MemoryStore::new();
        let session = Session::from_parts(
            "Owls",
            [PuzzleId::new(2), PuzzleId::new(1)],
            ['W', 'P'],
            1,
            false,
        );

        save_session(&mut store, &session).unwrap();

        assert_eq!(store.get(TEAM_NAME_KEY).unwrap().as_deref(), Some("\"Owls\""));
        assert_eq!(store.get(SOLVED_PUZZLES_KEY).unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(store.get(REVEALED_LETTERS_KEY).unwrap().as_deref(), Some("[\"P\",\"W\"]"));
        assert_eq!(store.get(GUESSES_LEFT_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(store.get(HAS_WON_BY_GUESS_KEY).unwrap().as_deref(), Some("false"));

        assert_eq!(load_session(&store, 3).unwrap(), Some(session));
    }

    #[test]
    fn test_failed_save_keeps_previous_session() {
        // Room for the first session, not for a longer team name
        let mut store = MemoryStore::with_quota(80);
        let first = Session::from_parts("Owls", [], [], 3, false);
        save_session(&mut store, &first).unwrap();

        let second = Session::from_parts("Owls Who Hoot", [PuzzleId::new(1)], ['P'], 3, false);
        assert!(matches!(
            save_session(&mut store, &second),
            Err(StoreError::QuotaExceeded { .. })
        ));

        assert_eq!(load_session(&store, 3).unwrap(), Some(first));
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let mut store = MemoryStore::new();
        store.set(TEAM_NAME_KEY, "\"Owls\"").unwrap();

        let session = load_session(&store, 5).unwrap().unwrap();
        assert_eq!(session.team_name(), "Owls");
        assert_eq!(session.guesses_left(), 5);
        assert!(session.solved_puzzles().is_empty());
    }

    #[test]
    fn test_zero_guesses_survive_reload() {
        let mut store = MemoryStore::new();
        store.set(GUESSES_LEFT_KEY, "0").unwrap();

        let session = load_session(&store, 3).unwrap().unwrap();
        assert_eq!(session.guesses_left(), 0);
    }

    #[test]
    fn test_unparsable_value_is_corrupt() {
        let mut store = MemoryStore::new();
        store.set(SOLVED_PUZZLES_KEY, "[1, 2").unwrap();

        let err = load_session(&store, 3).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == SOLVED_PUZZLES_KEY));

        store.set(SOLVED_PUZZLES_KEY, "[1]").unwrap();
        store.set(REVEALED_LETTERS_KEY, "[\"PO\"]").unwrap();
        assert!(load_session(&store, 3).is_err());
    }
}
