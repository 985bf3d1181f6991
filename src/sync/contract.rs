//! Remote API contract.
//!
//! Endpoints and JSON bodies of the optional hunt backend. When a backend is
//! present it owns the canonical session; the client applies each
//! [`GameStatus`] it receives with
//! [`HuntEngine::apply_remote_status`](crate::engine::HuntEngine::apply_remote_status)
//! and the server's view always wins.

use serde::{Deserialize, Serialize};

use crate::core::{normalize_letter, PuzzleId, Session};

/// Prefix shared by every endpoint.
pub const API_BASE: &str = "/api";

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Backend endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Liveness probe, informational only.
    Health,
    /// Create a team; answers with an [`AuthResponse`].
    Register,
    /// Log in with a team code; answers with an [`AuthResponse`].
    Login,
    /// Current [`GameStatus`] for the authenticated team.
    Status,
    /// Submit an answer to the current puzzle.
    Solve,
    /// Reveal a letter after solving a puzzle.
    GuessLetter,
    /// Guess the final phrase.
    GuessWord,
}

impl Endpoint {
    /// All endpoints.
    pub const ALL: [Endpoint; 7] = [
        Endpoint::Health,
        Endpoint::Register,
        Endpoint::Login,
        Endpoint::Status,
        Endpoint::Solve,
        Endpoint::GuessLetter,
        Endpoint::GuessWord,
    ];

    /// Full request path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/api/health",
            Endpoint::Register => "/api/teams/register",
            Endpoint::Login => "/api/teams/login",
            Endpoint::Status => "/api/game/status",
            Endpoint::Solve => "/api/game/solve",
            Endpoint::GuessLetter => "/api/game/guess-letter",
            Endpoint::GuessWord => "/api/game/guess-word",
        }
    }

    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Endpoint::Health | Endpoint::Status => Method::Get,
            _ => Method::Post,
        }
    }

    /// Whether the request carries the bearer token.
    ///
    /// Registration and login are how a token is obtained.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Endpoint::Register | Endpoint::Login)
    }
}

/// `Authorization` header value for a token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub team_code: String,
    pub password: String,
}

/// Token grant from register or login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessLetterRequest {
    pub letter: char,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessWordRequest {
    pub guess: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Error body of any failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Canonical session as the backend reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub team_name: String,
    #[serde(default)]
    pub solved_puzzles: Vec<PuzzleId>,
    #[serde(default)]
    pub revealed_letters: Vec<char>,
    pub guesses_left: i32,
    #[serde(default)]
    pub has_won_by_guess: bool,
}

impl From<&Session> for GameStatus {
    fn from(session: &Session) -> Self {
        Self {
            team_name: session.team_name().to_string(),
            solved_puzzles: session.solved_puzzles().iter().copied().collect(),
            revealed_letters: session.revealed_letters().iter().copied().collect(),
            guesses_left: session.guesses_left(),
            has_won_by_guess: session.won_by_guess(),
        }
    }
}

impl From<&GameStatus> for Session {
    /// Letters are uppercased like solved letters; duplicates collapse.
    /// Not validated.
    fn from(status: &GameStatus) -> Self {
        Session::from_parts(
            status.team_name.clone(),
            status.solved_puzzles.iter().copied(),
            status.revealed_letters.iter().map(|&c| normalize_letter(c).unwrap_or(c)),
            status.guesses_left,
            status.has_won_by_guess,
        )
    }
}
