//! Wordle Simulator
//!
//! Estimates the win rate and average guess count of a letter-frequency
//! Wordle strategy by simulating many games.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_sim::core::{LetterStats, Word};
//! use wordle_sim::solver::{FrequencyStrategy, GameOutcome, Solver};
//!
//! let words: Vec<Word> = ["apple", "angle", "ankle", "ample"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let strategy = FrequencyStrategy::new(LetterStats::from_words(&words));
//! let solver = Solver::new(strategy, &words);
//!
//! let report = solver.play(&words[2], &mut StdRng::seed_from_u64(1));
//! assert!(matches!(report.outcome, GameOutcome::Won { .. }));
//! ```

// Core domain types
pub mod core;

// Filtering, guess selection and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
