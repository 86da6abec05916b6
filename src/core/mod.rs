//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types. Everything here is
//! pure and deterministic.

mod feedback;
mod stats;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use stats::LetterStats;
pub use word::{WORD_LENGTH, Word, WordError};
