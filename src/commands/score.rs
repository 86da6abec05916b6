//! Word scoring command
//!
//! Reports how a word scores under the letter-frequency heuristic.

use crate::core::{LetterStats, Word, WordError};

/// Result of scoring a word
pub struct ScoreResult {
    pub word: String,
    pub score: f64,
    /// Per-letter frequency, repeated letters listed once
    pub letters: Vec<(char, f64)>,
    /// 1-based rank among dictionary words (ties share a rank)
    pub rank: usize,
    pub total_words: usize,
    pub in_dictionary: bool,
}

/// Score `word` against the dictionary's letter statistics
///
/// # Errors
///
/// Returns an error if the word is not a valid five-letter word.
pub fn score_word(
    word: &str,
    stats: &LetterStats,
    words: &[Word],
) -> Result<ScoreResult, WordError> {
    let word = Word::new(word)?;
    let score = stats.score(&word);

    let letters = word
        .distinct_letters()
        .map(|ch| (char::from(ch), stats.frequency(ch)))
        .collect();

    let rank = words.iter().filter(|w| stats.score(w) > score).count() + 1;

    Ok(ScoreResult {
        word: word.text().to_string(),
        score,
        letters,
        rank,
        total_words: words.len(),
        in_dictionary: words.contains(&word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn score_and_rank() {
        let dict = words_from_slice(&["apple", "angle", "ankle", "ample"]);
        let stats = LetterStats::from_words(&dict);

        let best = score_word("ample", &stats, &dict).unwrap();
        assert_eq!(best.rank, 1);
        assert!((best.score - 0.8).abs() < 1e-12);
        assert!(best.in_dictionary);
        assert_eq!(best.total_words, 4);

        let tied = score_word("ankle", &stats, &dict).unwrap();
        assert_eq!(tied.rank, 2);
    }

    #[test]
    fn letters_listed_once() {
        let dict = words_from_slice(&["apple", "angle", "ankle", "ample"]);
        let stats = LetterStats::from_words(&dict);

        let result = score_word("apple", &stats, &dict).unwrap();
        let letters: String = result.letters.iter().map(|(ch, _)| ch).collect();
        assert_eq!(letters, "aple");
    }

    #[test]
    fn word_outside_dictionary() {
        let dict = words_from_slice(&["apple", "angle"]);
        let stats = LetterStats::from_words(&dict);

        let result = score_word("zzzzz", &stats, &dict).unwrap();
        assert!(!result.in_dictionary);
        assert!(result.score.abs() < f64::EPSILON);
        assert_eq!(result.rank, 3);
    }

    #[test]
    fn invalid_word_is_rejected() {
        let dict = words_from_slice(&["apple"]);
        let stats = LetterStats::from_words(&dict);
        assert!(score_word("app", &stats, &dict).is_err());
    }
}
