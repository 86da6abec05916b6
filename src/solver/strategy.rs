//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{LetterStats, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// How many top-scoring candidates the frequency strategy picks from
pub const DEFAULT_POOL_SIZE: usize = 20;

/// A strategy for selecting the next guess from the remaining candidates
///
/// The random source is always supplied by the caller so games can be
/// replayed from a seed.
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Letter-frequency heuristic (default)
    Frequency(FrequencyStrategy),
    /// Uniform random choice among candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates, rng),
            Self::Random(s) => s.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the
    /// name is unrecognized. The frequency strategy takes its letter
    /// statistics from `words`.
    #[must_use]
    pub fn from_name(name: &str, words: &[Word]) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy::new(LetterStats::from_words(words))),
        }
    }
}

/// Letter-frequency strategy
///
/// Scores each candidate by the summed frequency of its distinct letters and
/// picks uniformly among the best `pool_size`.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    stats: LetterStats,
    pool_size: usize,
}

impl FrequencyStrategy {
    /// Create a frequency strategy with the default pool of 20
    #[must_use]
    pub fn new(stats: LetterStats) -> Self {
        Self::with_pool_size(stats, DEFAULT_POOL_SIZE)
    }

    /// Create a frequency strategy choosing among the top `pool_size` words
    ///
    /// A pool size of 0 is treated as 1 (always the best scorer).
    #[must_use]
    pub fn with_pool_size(stats: LetterStats, pool_size: usize) -> Self {
        Self { stats, pool_size }
    }

    /// Letter statistics used for scoring
    #[must_use]
    pub const fn stats(&self) -> &LetterStats {
        &self.stats
    }

    /// Candidates sorted by descending score, cut to the pool size
    ///
    /// The sort is stable: equal scores keep their dictionary order.
    #[must_use]
    pub fn top_candidates<'a>(&self, candidates: &[&'a Word]) -> Vec<(&'a Word, f64)> {
        let mut scored: Vec<(&'a Word, f64)> = candidates
            .iter()
            .map(|&word| (word, self.stats.score(word)))
            .collect();

        scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        scored.truncate(self.pool_size.max(1));
        scored
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        self.top_candidates(candidates)
            .choose(rng)
            .map(|&(word, _)| word)
    }
}

/// Random strategy
///
/// Picks any remaining candidate with equal probability. Useful as a baseline.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        candidates.choose(rng).copied()
    }
}
