//! Wordle feedback calculation and representation
//!
//! Feedback is five per-slot marks. The text form follows the classic
//! simulator notation:
//! - `G` = exact (letter in the correct slot)
//! - `O` = present elsewhere (letter in the answer, wrong slot)
//! - `B` = absent (letter not in the answer, or all occurrences already credited)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Single-character notation (`G`, `O`, `B`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'O',
            Self::Absent => 'B',
        }
    }

    /// Coloured square used for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'O' | 'o' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback mark '{0}'")]
    InvalidMark(char),
}

/// Feedback for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All exact (the guess was the answer)
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    /// Build feedback from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: exact matches are marked and their answer slots consumed;
    ///    letters missing from the answer entirely are marked absent; the rest
    ///    are left pending.
    /// 2. Second pass: each pending slot, left to right, claims the first
    ///    unconsumed matching answer slot (present), or is marked absent.
    ///
    /// A repeated guess letter is never credited more times than the answer
    /// holds it.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Feedback, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let answer = Word::new("ankle").unwrap();
    ///
    /// assert_eq!(Feedback::evaluate(&guess, &answer).to_string(), "GBBGG");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut pending = [false; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: Index needed to compare guess[i] with answer[i] and set three arrays
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                marks[i] = Mark::Exact;
                consumed[i] = true;
            } else if answer.contains(&guess[i]) {
                pending[i] = true;
            }
        }

        for i in (0..WORD_LENGTH).filter(|&i| pending[i]) {
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                marks[i] = Mark::Present;
                consumed[j] = true;
            }
        }

        Self(marks)
    }

    /// Per-slot marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every slot is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count slots carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to an emoji string like "🟩⬜⬜🟩🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.symbol()))
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse "GBBOG"-style text
    ///
    /// Also accepts `Y`/`-`/`_` and the coloured squares.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = Mark::from_symbol(ch).ok_or(FeedbackError::InvalidMark(ch))?;
        }

        Ok(Self(marks))
    }
}
