//! Word solving command
//!
//! Plays a single game against a chosen answer and returns the full trace.

use crate::core::{Word, WordError};
use crate::solver::{GameReport, Solver, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target, seed: None }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub report: GameReport,
    /// Whether the answer is in the solver's dictionary
    pub in_dictionary: bool,
    pub seed: u64,
}

/// Solve a specific word using the given solver
///
/// The target does not have to be in the dictionary; if it is not, the game
/// usually ends with no candidates left.
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter word.
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, WordError> {
    let target = Word::new(config.target)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let in_dictionary = solver.words().contains(&target);
    let report = solver.play(&target, &mut rng);

    Ok(SolveResult {
        report,
        in_dictionary,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStats;
    use crate::solver::{FrequencyStrategy, GameOutcome};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn config(target: &str, seed: u64) -> SolveConfig {
        SolveConfig {
            target: target.to_string(),
            seed: Some(seed),
        }
    }

    #[test]
    fn solve_word_from_dictionary() {
        let dict = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy::new(LetterStats::from_words(&dict)), &dict);

        let result = solve_word(config("ankle", 1), &solver).unwrap();

        assert!(result.in_dictionary);
        assert!(!result.report.turns.is_empty());
        assert!(result.report.turns.len() <= 6);
        assert!(!matches!(
            result.report.outcome,
            GameOutcome::NoCandidates { .. }
        ));
        for turn in &result.report.turns {
            assert!(turn.candidates_after <= turn.candidates_before);
        }
    }

    #[test]
    fn solve_with_forced_first_word() {
        let dict = words_from_slice(&["apple", "angle", "ankle", "ample"]);
        let solver = Solver::new(FrequencyStrategy::new(LetterStats::from_words(&dict)), &dict)
            .with_first_guess(dict.iter().find(|w| w.text() == "apple"));

        let result = solve_word(config("ankle", 4), &solver).unwrap();
        assert_eq!(result.report.turns[0].guess.text(), "apple");
        assert!(result.report.outcome.is_win());
    }

    #[test]
    fn solve_is_reproducible_with_seed() {
        let dict = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy::new(LetterStats::from_words(&dict)), &dict);

        let first = solve_word(config("crane", 8), &solver).unwrap();
        let second = solve_word(config("crane", 8), &solver).unwrap();
        assert_eq!(first.report.turns, second.report.turns);
        assert_eq!(first.seed, 8);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dict = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy::new(LetterStats::from_words(&dict)), &dict);

        assert!(solve_word(config("toolong", 0), &solver).is_err());
    }

    #[test]
    fn solve_target_outside_dictionary() {
        let dict = words_from_slice(&["apple", "angle", "ankle", "ample"]);
        let solver = Solver::new(FrequencyStrategy::new(LetterStats::from_words(&dict)), &dict);

        let result = solve_word(config("zesty", 0), &solver).unwrap();
        assert!(!result.in_dictionary);
        assert_eq!(
            result.report.outcome,
            GameOutcome::NoCandidates { round: 1 }
        );
    }
}
