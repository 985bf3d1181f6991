//! The hunt engine: session owner and the only place game state changes.
//!
//! Persist-after-apply:
//!   1. validate input (state untouched on error)
//!   2. mutate the in-memory session
//!   3. write the whole session through to the store
//!
//! A failed write is logged and leaves the in-memory session authoritative.

use log::{debug, error, info, warn};

use crate::core::{normalize_letter, GuessFloor, HuntConfig, Puzzle, PuzzleId, Session};
use crate::error::HuntError;
use crate::rules::{self, GameOutcome};
use crate::storage::{load_session, save_session, KeyValueStore};
use crate::sync::GameStatus;

/// Team name that triggers the seeded debug session.
const DEBUG_TEAM_NAME: &str = "Test";

/// How many puzzles and letters the debug session starts with.
const DEBUG_SEED_COUNT: usize = 3;

/// Game state engine for one session.
///
/// ## Example
///
/// ```
/// use puzzle_hunt::{HuntEngine, MemoryStore, PuzzleId};
///
/// let mut engine = HuntEngine::new(MemoryStore::new());
/// engine.login("Owls");
///
/// assert!(engine.check_solution(PuzzleId::new(1), "map").unwrap());
/// engine.solve_puzzle(PuzzleId::new(1), 'p').unwrap();
/// assert_eq!(engine.current_puzzle_id(), PuzzleId::new(2));
///
/// assert!(engine.submit_final_guess("powerhouse"));
/// assert!(engine.is_won());
/// ```
pub struct HuntEngine<S: KeyValueStore> {
    config: HuntConfig,
    session: Session,
    store: S,
    persistence_degraded: bool,
}

impl<S: KeyValueStore> HuntEngine<S> {
    /// Open the standard hunt on `store`.
    pub fn new(store: S) -> Self {
        Self::open(HuntConfig::default(), store)
    }

    /// Open a hunt, rehydrating any session already in `store`.
    ///
    /// A missing, unparsable or out-of-bounds session starts fresh.
    pub fn open(config: HuntConfig, store: S) -> Self {
        let session = Self::rehydrate(&config, &store);
        Self {
            config,
            session,
            store,
            persistence_degraded: false,
        }
    }

    fn rehydrate(config: &HuntConfig, store: &S) -> Session {
        match load_session(store, config.max_guesses) {
            Ok(Some(session)) => match session.check(config) {
                Ok(()) => {
                    debug!(
                        "restored session for {:?}: {} solved, {} revealed",
                        session.team_name(),
                        session.solved_puzzles().len(),
                        session.revealed_letters().len()
                    );
                    session
                }
                Err(reason) => {
                    warn!("discarding persisted session: {}", reason);
                    Session::new(config.max_guesses)
                }
            },
            Ok(None) => Session::new(config.max_guesses),
            Err(e) => {
                warn!("discarding persisted session: {}", e);
                Session::new(config.max_guesses)
            }
        }
    }

    // === Operations ===

    /// Start a fresh session for `name`, discarding any previous one.
    ///
    /// With `debug_login` on, the name "test" (any case) seeds a session
    /// with the first three puzzles solved and the first three letters
    /// revealed.
    pub fn login(&mut self, name: &str) {
        self.reset_session();

        if self.config.debug_login && name.to_lowercase() == DEBUG_TEAM_NAME.to_lowercase() {
            warn!("debug login: seeding partially solved session");
            self.session.team_name = DEBUG_TEAM_NAME.to_string();
            self.session.solved_puzzles = self.config.puzzles.ids().take(DEBUG_SEED_COUNT).collect();
            self.session.revealed_letters = self
                .config
                .phrase
                .unique_letters()
                .iter()
                .copied()
                .take(DEBUG_SEED_COUNT)
                .collect();
        } else {
            if name.trim().is_empty() {
                warn!("login with a blank team name");
            }
            self.session.team_name = name.to_string();
        }

        info!("team {:?} logged in", self.session.team_name);
        self.persist();
    }

    /// Mark a puzzle solved and reveal a letter.
    ///
    /// The letter is uppercased and must be one of the phrase's unique
    /// letters. Both insertions are idempotent. Puzzles solved out of
    /// order are accepted; progress is derived from the solved count.
    pub fn solve_puzzle(&mut self, puzzle_id: PuzzleId, letter: char) -> Result<(), HuntError> {
        if !self.config.puzzles.contains(puzzle_id) {
            warn!("solve rejected: no puzzle {}", puzzle_id);
            return Err(HuntError::UnknownPuzzle(puzzle_id));
        }
        let letter = match normalize_letter(letter) {
            Some(c) if self.config.phrase.is_unique_letter(c) => c,
            _ => {
                warn!("solve rejected: {:?} is not a phrase letter", letter);
                return Err(HuntError::InvalidLetter(letter));
            }
        };

        let expected = self.current_puzzle_id();
        if puzzle_id != expected {
            debug!("puzzle {} solved out of order (expected {})", puzzle_id, expected);
        }

        let was_won = self.is_won();
        let new_puzzle = self.session.solved_puzzles.insert(puzzle_id).is_none();
        let new_letter = self.session.revealed_letters.insert(letter).is_none();
        debug!(
            "puzzle {} solved (new: {}), letter {} revealed (new: {})",
            puzzle_id, new_puzzle, letter, new_letter
        );

        if !was_won && self.is_won() {
            info!("team {:?} revealed the whole phrase", self.session.team_name);
        }

        self.persist();
        Ok(())
    }

    /// Guess the final phrase. Returns whether the guess was right.
    ///
    /// A right guess sets the won-by-guess flag without spending a guess,
    /// at any point in the game. A wrong one spends a guess: under
    /// [`GuessFloor::Clamp`] the counter stops at 0, under
    /// [`GuessFloor::Unbounded`] it keeps going negative.
    pub fn submit_final_guess(&mut self, guess: &str) -> bool {
        if self.config.phrase.matches(guess, self.config.phrase_match) {
            self.session.won_by_guess = true;
            info!("team {:?} guessed the phrase", self.session.team_name);
            self.persist();
            return true;
        }

        self.session.guesses_left = match self.config.guess_floor {
            GuessFloor::Clamp => (self.session.guesses_left - 1).max(0),
            GuessFloor::Unbounded => self.session.guesses_left - 1,
        };
        debug!("wrong final guess, {} left", self.session.guesses_left);

        if self.is_over() {
            info!("team {:?} is out of guesses", self.session.team_name);
        }

        self.persist();
        false
    }

    /// Clear persisted state and reset every field. Idempotent.
    pub fn restart(&mut self) {
        self.reset_session();
        info!("session restarted");
    }

    /// Log out. Same as [`restart`](Self::restart).
    pub fn logout(&mut self) {
        self.restart();
    }

    /// Replace the local session with the backend's (server wins).
    ///
    /// A status naming unknown puzzles, foreign letters or an impossible
    /// guess count is rejected and the local session kept.
    pub fn apply_remote_status(&mut self, status: &GameStatus) -> Result<(), HuntError> {
        let incoming = Session::from(status);
        incoming.check(&self.config).map_err(|reason| {
            warn!("remote status rejected: {}", reason);
            HuntError::InvalidRemoteState(reason)
        })?;

        if incoming != self.session {
            info!("remote status replaced local session for {:?}", incoming.team_name());
        }
        self.session = incoming;
        self.persist();
        Ok(())
    }

    // === Queries ===

    /// Check an answer to a puzzle (uppercased, exact match). Changes nothing.
    pub fn check_solution(&self, puzzle_id: PuzzleId, answer: &str) -> Result<bool, HuntError> {
        self.config
            .puzzles
            .get(puzzle_id)
            .map(|puzzle| puzzle.is_solution(answer))
            .ok_or(HuntError::UnknownPuzzle(puzzle_id))
    }

    #[must_use]
    pub fn current_puzzle_id(&self) -> PuzzleId {
        rules::current_puzzle_id(&self.session)
    }

    /// The next puzzle, or `None` once all are solved.
    #[must_use]
    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.config.puzzles.get(self.current_puzzle_id())
    }

    #[must_use]
    pub fn all_puzzles_solved(&self) -> bool {
        rules::all_puzzles_solved(&self.session, &self.config)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        rules::is_won(&self.session, &self.config)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        rules::is_over(&self.session, &self.config)
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(&self.session, &self.config)
    }

    /// Per-word phrase display with unrevealed letters as `None`.
    #[must_use]
    pub fn phrase_mask(&self) -> Vec<Vec<Option<char>>> {
        self.config.phrase.mask(self.session.revealed_letters())
    }

    #[must_use]
    pub fn unique_letters(&self) -> &[char] {
        self.config.phrase.unique_letters()
    }

    #[must_use]
    pub fn team_name(&self) -> &str {
        self.session.team_name()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    #[must_use]
    pub fn guesses_left(&self) -> i32 {
        self.session.guesses_left()
    }

    /// Snapshot-friendly view of the raw session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The local session in the backend's status shape.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::from(&self.session)
    }

    #[must_use]
    pub fn config(&self) -> &HuntConfig {
        &self.config
    }

    /// True after a failed store write, until the next successful one.
    #[must_use]
    pub fn is_persistence_degraded(&self) -> bool {
        self.persistence_degraded
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, e.g. to reopen it with another engine.
    pub fn into_store(self) -> S {
        self.store
    }

    // === Persistence ===

    fn reset_session(&mut self) {
        self.session = Session::new(self.config.max_guesses);
        match self.store.clear() {
            Ok(()) => self.persistence_degraded = false,
            Err(e) => {
                error!("failed to clear stored session: {}", e);
                self.persistence_degraded = true;
            }
        }
    }

    fn persist(&mut self) {
        match save_session(&mut self.store, &self.session) {
            Ok(()) => {
                if self.persistence_degraded {
                    info!("session persistence recovered");
                }
                self.persistence_degraded = false;
            }
            Err(e) => {
                error!("failed to persist session, continuing in memory: {}", e);
                self.persistence_degraded = true;
            }
        }
    }
}
