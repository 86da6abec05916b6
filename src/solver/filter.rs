//! Candidate filtering from accumulated feedback
//!
//! The filter keeps one constraint per slot plus the set of letters known to
//! be somewhere in the answer. Feedback is folded in with [`CandidateFilter::record`]
//! and word lists are narrowed with [`CandidateFilter::apply`].

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Constraint on a single slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionConstraint {
    excluded: FxHashSet<u8>,
    known: Option<u8>,
}

impl PositionConstraint {
    /// Forbid `letter` in this slot, unless it is the slot's known letter
    pub fn exclude(&mut self, letter: u8) {
        if self.known != Some(letter) {
            self.excluded.insert(letter);
        }
    }

    /// Pin the slot to `letter`
    pub fn set_known(&mut self, letter: u8) {
        self.known = Some(letter);
    }

    /// Letter known to occupy this slot, if any
    #[must_use]
    pub const fn known(&self) -> Option<u8> {
        self.known
    }

    /// Whether `letter` has been ruled out for this slot
    #[must_use]
    pub fn is_excluded(&self, letter: u8) -> bool {
        self.excluded.contains(&letter)
    }

    /// Whether `letter` may occupy this slot
    #[must_use]
    pub fn allows(&self, letter: u8) -> bool {
        !self.is_excluded(letter) && self.known.is_none_or(|known| known == letter)
    }
}

/// Accumulated constraints from every guess of a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    positions: [PositionConstraint; WORD_LENGTH],
    known_letters: FxHashSet<u8>,
}

impl CandidateFilter {
    /// Create a filter with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the constraints
    ///
    /// Exact and present marks are applied first. Absent letters are then
    /// excluded from every slot, but only if no slot of this or an earlier
    /// guess confirmed them, so a letter that is exact once and absent as a
    /// duplicate stays allowed.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Feedback, Word};
    /// use wordle_sim::solver::CandidateFilter;
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let feedback: Feedback = "GBBGG".parse().unwrap();
    ///
    /// let mut filter = CandidateFilter::new();
    /// filter.record(&guess, &feedback);
    ///
    /// assert!(filter.allows(&Word::new("ankle").unwrap()));
    /// assert!(!filter.allows(&Word::new("ample").unwrap()));
    /// ```
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Exact => {
                    self.known_letters.insert(letter);
                    self.positions[i].set_known(letter);
                }
                Mark::Present => {
                    self.known_letters.insert(letter);
                    self.positions[i].exclude(letter);
                }
                Mark::Absent => {}
            }
        }

        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            if mark == Mark::Absent && !self.known_letters.contains(&letter) {
                for position in &mut self.positions {
                    position.exclude(letter);
                }
            }
        }
    }

    /// Whether `word` satisfies every recorded constraint
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.positions
            .iter()
            .zip(word.chars())
            .all(|(position, &letter)| position.allows(letter))
            && self.known_letters.iter().all(|&letter| word.has_letter(letter))
    }

    /// Keep only the words that satisfy every constraint
    ///
    /// Returns a new list in the original order; the input is not modified.
    #[must_use]
    pub fn apply<'w>(&self, words: &[&'w Word]) -> Vec<&'w Word> {
        words.iter().copied().filter(|word| self.allows(word)).collect()
    }

    /// Constraint for slot `index` (0-4)
    ///
    /// # Panics
    /// Panics if index >= 5
    #[must_use]
    pub fn position(&self, index: usize) -> &PositionConstraint {
        &self.positions[index]
    }

    /// Letters confirmed present somewhere in the answer
    #[must_use]
    pub const fn known_letters(&self) -> &FxHashSet<u8> {
        &self.known_letters
    }
}
