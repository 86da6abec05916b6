//! Letter frequency statistics
//!
//! Relative frequency of each letter over every letter of the dictionary.
//! Built once per run and shared read-only by all games.

use super::Word;
use rustc_hash::FxHashMap;

/// Relative letter frequencies for a dictionary
#[derive(Debug, Clone, Default)]
pub struct LetterStats {
    frequencies: FxHashMap<u8, f64>,
}

impl LetterStats {
    /// Count every letter occurrence across `words` and normalise by the total
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{LetterStats, Word};
    ///
    /// let words = vec![Word::new("apple").unwrap(), Word::new("ample").unwrap()];
    /// let stats = LetterStats::from_words(&words);
    ///
    /// // 3 Ps out of 10 letters
    /// assert!((stats.frequency(b'p') - 0.3).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        let mut total = 0usize;

        for word in words {
            for &ch in word.chars() {
                *counts.entry(ch).or_insert(0) += 1;
                total += 1;
            }
        }

        let frequencies = counts
            .into_iter()
            .map(|(ch, count)| (ch, count as f64 / total as f64))
            .collect();

        Self { frequencies }
    }

    /// Relative frequency of a letter (0.0 if never seen)
    #[inline]
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        self.frequencies.get(&letter).copied().unwrap_or(0.0)
    }

    /// Heuristic score: summed frequency of the word's distinct letters
    ///
    /// Repeated letters count once, so words covering more distinct
    /// common letters score higher.
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        word.distinct_letters().map(|ch| self.frequency(ch)).sum()
    }

    /// Number of distinct letters seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether no letters were seen (empty dictionary)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn frequencies_sum_to_one() {
        let stats = LetterStats::from_words(&words(&["apple", "angle", "ankle", "ample"]));
        let sum: f64 = (b'a'..=b'z').map(|ch| stats.frequency(ch)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn frequency_counts_every_occurrence() {
        let stats = LetterStats::from_words(&words(&["apple", "angle", "ankle", "ample"]));
        // 20 letters: a×4, e×4, l×4, p×3, n×2, g×1, k×1, m×1
        assert!((stats.frequency(b'a') - 0.2).abs() < 1e-12);
        assert!((stats.frequency(b'p') - 0.15).abs() < 1e-12);
        assert!((stats.frequency(b'g') - 0.05).abs() < 1e-12);
        assert_eq!(stats.len(), 8);
    }

    #[test]
    fn unseen_letter_has_zero_frequency() {
        let stats = LetterStats::from_words(&words(&["apple"]));
        assert!(stats.frequency(b'z').abs() < f64::EPSILON);
    }

    #[test]
    fn score_counts_repeated_letters_once() {
        let stats = LetterStats::from_words(&words(&["apple", "angle", "ankle", "ample"]));
        let apple = Word::new("apple").unwrap();
        // a + p + l + e = 0.2 + 0.15 + 0.2 + 0.2
        assert!((stats.score(&apple) - 0.75).abs() < 1e-12);

        let ample = Word::new("ample").unwrap();
        // a + m + p + l + e = 0.2 + 0.05 + 0.15 + 0.2 + 0.2
        assert!((stats.score(&ample) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn empty_dictionary() {
        let stats = LetterStats::from_words(&[]);
        assert!(stats.is_empty());
        assert!(stats.score(&Word::new("apple").unwrap()).abs() < f64::EPSILON);
    }
}
