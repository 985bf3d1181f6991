//! Engine behavior tests.
//!
//! These tests drive `HuntEngine` through full playthroughs and verify
//! login, puzzle progression, final guesses and restart.

use puzzle_hunt::{
    GameOutcome, GuessFloor, HuntConfig, HuntEngine, HuntError, MemoryStore, PhraseMatch,
    PuzzleId,
};

fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

fn logged_in(name: &str) -> HuntEngine<MemoryStore> {
    init_logging();
    let mut engine = HuntEngine::new(MemoryStore::new());
    engine.login(name);
    engine
}

const LETTERS: [char; 8] = ['P', 'O', 'W', 'E', 'R', 'H', 'U', 'S'];

// =============================================================================
// Login
// =============================================================================

/// Test that login sets the team name on a fresh session.
#[test]
fn test_login_sets_team() {
    let engine = logged_in("Night Owls");

    assert_eq!(engine.team_name(), "Night Owls");
    assert!(engine.is_logged_in());
    assert!(engine.session().solved_puzzles().is_empty());
    assert_eq!(engine.guesses_left(), 3);
}

/// Test that login discards the previous team's progress.
#[test]
fn test_login_resets_previous_session() {
    let mut engine = logged_in("Owls");
    engine.solve_puzzle(PuzzleId::new(1), 'P').unwrap();
    engine.submit_final_guess("WRONG");

    engine.login("Larks");

    assert_eq!(engine.team_name(), "Larks");
    assert!(engine.session().solved_puzzles().is_empty());
    assert!(engine.session().revealed_letters().is_empty());
    assert_eq!(engine.guesses_left(), 3);
}

/// Test the seeded debug session for the "test" team.
#[test]
fn test_debug_login() {
    for name in ["test", "TEST", "Test"] {
        let engine = logged_in(name);
        let session = engine.session();

        assert_eq!(session.team_name(), "Test");
        let solved: Vec<u32> = session.solved_puzzles().iter().map(|id| id.raw()).collect();
        assert_eq!(solved, vec![1, 2, 3]);
        let revealed: Vec<char> = session.revealed_letters().iter().copied().collect();
        assert_eq!(revealed, vec!['O', 'P', 'W']);
        assert_eq!(session.guesses_left(), 3);
        assert!(!session.won_by_guess());
        assert_eq!(engine.current_puzzle_id(), PuzzleId::new(4));
    }
}

/// Test that debug login can be turned off.
#[test]
fn test_debug_login_disabled() {
    init_logging();
    let config = HuntConfig::builder().debug_login(false).build().unwrap();
    let mut engine = HuntEngine::open(config, MemoryStore::new());

    engine.login("test");

    assert_eq!(engine.team_name(), "test");
    assert!(engine.session().solved_puzzles().is_empty());
}

// =============================================================================
// Solving Puzzles
// =============================================================================

/// Test that solving all puzzles with all letters wins the game.
#[test]
fn test_solving_everything_wins() {
    let mut engine = logged_in("Owls");

    for (idx, letter) in LETTERS.iter().enumerate() {
        assert!(!engine.is_won());
        engine.solve_puzzle(PuzzleId::new(idx as u32 + 1), *letter).unwrap();
    }

    assert!(engine.is_won());
    assert!(!engine.is_over());
    assert_eq!(engine.outcome(), GameOutcome::WonByReveal);
    assert_eq!(engine.current_puzzle_id(), PuzzleId::new(9));
    assert_eq!(engine.guesses_left(), 3);
}

/// Test that solving the same puzzle twice changes nothing.
#[test]
fn test_solve_is_idempotent() {
    let mut engine = logged_in("Owls");

    engine.solve_puzzle(PuzzleId::new(1), 'P').unwrap();
    engine.solve_puzzle(PuzzleId::new(1), 'P').unwrap();

    assert_eq!(engine.session().solved_puzzles().len(), 1);
    assert_eq!(engine.session().revealed_letters().len(), 1);
    assert_eq!(engine.current_puzzle_id(), PuzzleId::new(2));
}

/// Test that lowercase letters are accepted and stored uppercase.
#[test]
fn test_solve_uppercases_letter() {
    let mut engine = logged_in("Owls");

    engine.solve_puzzle(PuzzleId::new(1), 'h').unwrap();

    assert!(engine.session().revealed_letters().contains(&'H'));
}

/// Test that letters outside the phrase are rejected without side effects.
#[test]
fn test_solve_rejects_foreign_letter() {
    let mut engine = logged_in("Owls");
    let before = engine.session().clone();

    let err = engine.solve_puzzle(PuzzleId::new(1), 'Z').unwrap_err();
    assert!(matches!(err, HuntError::InvalidLetter('Z')));

    let err = engine.solve_puzzle(PuzzleId::new(1), ' ').unwrap_err();
    assert!(matches!(err, HuntError::InvalidLetter(' ')));

    assert_eq!(engine.session(), &before);
}

/// Test that unknown puzzle ids are rejected without side effects.
#[test]
fn test_solve_rejects_unknown_puzzle() {
    let mut engine = logged_in("Owls");

    for id in [0, 9, 100] {
        let err = engine.solve_puzzle(PuzzleId::new(id), 'P').unwrap_err();
        assert!(matches!(err, HuntError::UnknownPuzzle(p) if p.raw() == id));
    }

    assert!(engine.session().solved_puzzles().is_empty());
    assert!(engine.session().revealed_letters().is_empty());
}

/// Test that out-of-order solves are accepted and progress follows the count.
#[test]
fn test_out_of_order_solve() {
    let mut engine = logged_in("Owls");

    engine.solve_puzzle(PuzzleId::new(5), 'R').unwrap();

    assert!(engine.session().solved_puzzles().contains(&PuzzleId::new(5)));
    assert_eq!(engine.current_puzzle_id(), PuzzleId::new(2));
}

/// Test that the phrase mask follows revealed letters.
#[test]
fn test_phrase_mask() {
    let mut engine = logged_in("Owls");
    engine.solve_puzzle(PuzzleId::new(1), 'O').unwrap();

    let mask = engine.phrase_mask();
    assert_eq!(mask.len(), 1);
    assert_eq!(
        mask[0],
        vec![None, Some('O'), None, None, None, None, Some('O'), None, None, None]
    );
}

// =============================================================================
// Final Guess
// =============================================================================

/// Test that the right phrase wins regardless of case and costs no guess.
#[test]
fn test_correct_guess_wins() {
    let mut engine = logged_in("Owls");

    assert!(engine.submit_final_guess("PowerHouse"));

    assert!(engine.session().won_by_guess());
    assert_eq!(engine.guesses_left(), 3);
    assert_eq!(engine.outcome(), GameOutcome::WonByGuess);
}

/// Test that three wrong guesses lose the game.
#[test]
fn test_three_wrong_guesses_lose() {
    let mut engine = logged_in("Owls");

    assert!(!engine.submit_final_guess("WRONG"));
    assert_eq!(engine.guesses_left(), 2);
    assert!(!engine.is_over());

    assert!(!engine.submit_final_guess("WRONG"));
    assert!(!engine.submit_final_guess("WRONG"));

    assert_eq!(engine.guesses_left(), 0);
    assert!(engine.is_over());
    assert!(!engine.is_won());
    assert_eq!(engine.outcome(), GameOutcome::Lost);
}

/// Test that the counter stops at zero and the right answer still wins after a loss.
#[test]
fn test_guesses_clamped_after_loss() {
    let mut engine = logged_in("Owls");
    for _ in 0..3 {
        engine.submit_final_guess("WRONG");
    }
    assert_eq!(engine.outcome(), GameOutcome::Lost);

    assert!(!engine.submit_final_guess("WRONG"));
    assert_eq!(engine.guesses_left(), 0);

    assert!(engine.submit_final_guess("POWERHOUSE"));
    assert!(engine.session().won_by_guess());
    assert!(engine.is_won());
    assert!(!engine.is_over());
    assert_eq!(engine.guesses_left(), 0);
}

/// Test that guesses after a win are still evaluated and counted.
#[test]
fn test_guess_after_win_still_counts() {
    let mut engine = logged_in("Owls");
    assert!(engine.submit_final_guess("POWERHOUSE"));

    assert!(!engine.submit_final_guess("WRONG"));
    assert_eq!(engine.guesses_left(), 2);
    assert!(engine.is_won());
}

/// Test that a correct guess after a reveal win sets the guess flag.
#[test]
fn test_guess_after_reveal_win() {
    let mut engine = logged_in("Owls");
    for (idx, letter) in LETTERS.iter().enumerate() {
        engine.solve_puzzle(PuzzleId::new(idx as u32 + 1), *letter).unwrap();
    }
    assert_eq!(engine.outcome(), GameOutcome::WonByReveal);
    assert!(!engine.session().won_by_guess());

    assert!(engine.submit_final_guess("POWERHOUSE"));
    assert!(engine.session().won_by_guess());
    assert_eq!(engine.guesses_left(), 3);
}

/// Test the unbounded counter keeps decrementing past zero.
#[test]
fn test_unbounded_counter() {
    init_logging();
    let config = HuntConfig::builder()
        .guess_floor(GuessFloor::Unbounded)
        .build()
        .unwrap();
    let mut engine = HuntEngine::open(config, MemoryStore::new());
    engine.login("Owls");

    for _ in 0..5 {
        engine.submit_final_guess("WRONG");
    }

    assert_eq!(engine.guesses_left(), -2);
    assert!(engine.is_over());
}

/// Test the whitespace-insensitive comparison mode.
#[test]
fn test_ignore_whitespace_guess() {
    init_logging();
    let config = HuntConfig::builder()
        .phrase_match(PhraseMatch::IgnoreWhitespace)
        .build()
        .unwrap();
    let mut engine = HuntEngine::open(config, MemoryStore::new());
    engine.login("Owls");

    assert!(engine.submit_final_guess("power house"));
}

/// Test that the spaced form does not match under exact comparison.
#[test]
fn test_exact_guess_rejects_spaced_form() {
    let mut engine = logged_in("Owls");

    assert!(!engine.submit_final_guess("POWER HOUSE"));
    assert_eq!(engine.guesses_left(), 2);
}

/// Test that a revealed phrase beats zero guesses.
#[test]
fn test_win_takes_precedence_over_zero_guesses() {
    let mut engine = logged_in("Owls");
    for (idx, letter) in LETTERS.iter().enumerate().take(7) {
        engine.solve_puzzle(PuzzleId::new(idx as u32 + 1), *letter).unwrap();
    }
    for _ in 0..3 {
        engine.submit_final_guess("WRONG");
    }
    assert!(engine.is_over());

    engine.solve_puzzle(PuzzleId::new(8), 'S').unwrap();

    assert!(engine.is_won());
    assert!(!engine.is_over());
}

// =============================================================================
// Restart
// =============================================================================

/// Test that restart returns to the default session.
#[test]
fn test_restart_resets_everything() {
    let mut engine = logged_in("test");
    engine.solve_puzzle(PuzzleId::new(4), 'E').unwrap();
    engine.submit_final_guess("WRONG");
    engine.submit_final_guess("POWERHOUSE");

    engine.restart();

    let session = engine.session();
    assert_eq!(session.team_name(), "");
    assert!(session.solved_puzzles().is_empty());
    assert!(session.revealed_letters().is_empty());
    assert_eq!(session.guesses_left(), 3);
    assert!(!session.won_by_guess());
    assert!(engine.store().is_empty());
}

/// Test that restart on an empty session is harmless.
#[test]
fn test_restart_idempotent() {
    init_logging();
    let mut engine = HuntEngine::new(MemoryStore::new());

    engine.restart();
    engine.restart();
    engine.logout();

    assert_eq!(engine.session(), &puzzle_hunt::Session::default());
}
