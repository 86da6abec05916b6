//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid word '{word}': {source}")]
    InvalidWord {
        line: usize,
        word: String,
        source: WordError,
    },
    #[error("word list is empty")]
    Empty,
}

/// Load words from a file
///
/// Lines are trimmed and blank lines skipped. Any other line that is not a
/// valid five-letter word rejects the whole file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::InvalidWord`
/// for the first malformed line, or `LoadError::Empty` if no words remain.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

/// Parse newline-separated words
///
/// # Errors
///
/// Same validation as [`load_from_file`], minus I/O.
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("apple\n ankle \n\n").unwrap();
/// assert_eq!(words.len(), 2);
///
/// assert!(parse_word_list("apple\napples\n").is_err());
/// ```
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    let words = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| {
            Word::new(text).map_err(|source| LoadError::InvalidWord {
                line,
                word: text.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::words_from_slice;
/// use wordle_sim::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["apple", "angle", "ankle"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[2].text(), "ankle");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["apple", "toolong", "abc", "ankle"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "ankle");
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let words = parse_word_list("  apple\r\n\nANGLE\n\t ankle \n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "angle", "ankle"]);
    }

    #[test]
    fn parse_rejects_malformed_line() {
        let err = parse_word_list("apple\nangle\nank\nample\n").unwrap_err();
        match err {
            LoadError::InvalidWord { line, word, source } => {
                assert_eq!(line, 3);
                assert_eq!(word, "ank");
                assert_eq!(source, WordError::InvalidLength(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert!(matches!(parse_word_list("\n \n"), Err(LoadError::Empty)));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/nonexistent/words.txt"),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
