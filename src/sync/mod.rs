//! State-sync contract with an optional hunt backend.
//!
//! Only the contract lives here: endpoint table, request/response bodies,
//! and the status shape the engine reconciles against (server wins).

pub mod contract;

pub use contract::{
    bearer_header, ApiError, AuthResponse, Endpoint, GameStatus, GuessLetterRequest,
    GuessWordRequest, HealthResponse, LoginRequest, Method, RegisterRequest, SolveRequest,
    API_BASE,
};
