//! Wordle solving
//!
//! Candidate filtering, guess selection strategies, and the game loop.

mod engine;
pub mod filter;
pub mod strategy;

pub use engine::{
    DEFAULT_MAX_ROUNDS, Game, GameOutcome, GameReport, GameState, SolveError, Solver, Turn,
};
pub use filter::{CandidateFilter, PositionConstraint};
pub use strategy::{
    DEFAULT_POOL_SIZE, FrequencyStrategy, RandomStrategy, Strategy, StrategyType,
};
