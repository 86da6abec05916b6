//! Command implementations

pub mod score;
pub mod simulate;
pub mod solve;

pub use score::{ScoreResult, score_word};
pub use simulate::{SimulationConfig, SimulationResult, SimulationTally, run_simulation};
pub use solve::{SolveConfig, SolveResult, solve_word};
