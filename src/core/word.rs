//! Five-letter word representation
//!
//! A Word stores a validated, lowercased 5-letter word as both text and bytes.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter lowercase ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased; anything that is not exactly five ASCII letters
    /// is rejected rather than truncated.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Word;
    ///
    /// let word = Word::new("Ankle").unwrap();
    /// assert_eq!(word.text(), "ankle");
    ///
    /// assert!(Word::new("apples").is_err());
    /// assert!(Word::new("ap1le").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Iterate over the word's letters, skipping repeats
    ///
    /// Letters are yielded in order of first appearance.
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.chars[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ankle").unwrap();
        assert_eq!(word.text(), "ankle");
        assert_eq!(word.chars(), b"ankle");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "apple");

        let word2 = Word::new("ApPlE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("apples"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("appl"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("ap1le"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl\u{e9}"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("angle").unwrap();
        assert_eq!(word.char_at(0), b'a');
        assert_eq!(word.char_at(2), b'g');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("ankle").unwrap();
        assert!(word.has_letter(b'k'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'p'));
    }

    #[test]
    fn distinct_letters_skips_repeats() {
        let word = Word::new("sleep").unwrap();
        let letters: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(letters, b"slep".to_vec());

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.distinct_letters().count(), 1);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
