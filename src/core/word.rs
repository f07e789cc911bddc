//! Word representation
//!
//! A Word stores a lowercase ASCII word of any playable length. Modes pin the
//! length (4, 5 or 6) at comparison time rather than in the type.

use super::LetterCounts;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest word accepted by [`Word::new`]
pub const MAX_WORD_LENGTH: usize = 16;

/// A guessable word, normalized to lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be between 1 and {} letters, got {0}", MAX_WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is zero or above [`MAX_WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters (including embedded whitespace)
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::Word;
    ///
    /// let word = Word::new("REACT").unwrap();
    /// assert_eq!(word.text(), "react");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.letters()[0]
    }

    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> u8 {
        self.letters()[self.len() - 1]
    }

    /// Check if the word contains a specific letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter.to_ascii_lowercase())
    }

    /// Get all positions where a letter appears
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        let letter = letter.to_ascii_lowercase();
        self.letters()
            .iter()
            .enumerate()
            .filter_map(move |(i, &ch)| (ch == letter).then_some(i))
    }

    /// Letter-frequency count of this word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::of(self)
    }

    /// The same letters in reverse order
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            text: self.text.chars().rev().collect(),
        }
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
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
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE\n").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_any_playable_length() {
        assert_eq!(Word::new("fast").unwrap().len(), 4);
        assert_eq!(Word::new("python").unwrap().len(), 6);
        assert_eq!(Word::new("racecar").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(Word::new("   "), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::InvalidLength(17))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_first_and_last_letters() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.first_letter(), b'a');
        assert_eq!(word.last_letter(), b'e');
        assert_eq!(word.char_at(1), b'p');
    }

    #[test]
    fn word_has_letter_case_insensitive() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'N'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.positions_of(b'e').collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(word.positions_of(b's').collect::<Vec<_>>(), vec![0]);
        assert_eq!(word.positions_of(b'z').count(), 0);
    }

    #[test]
    fn word_reversed() {
        let word = Word::new("smart").unwrap();
        assert_eq!(word.reversed().text(), "trams");
        assert_eq!(word.reversed().reversed(), word);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word3 = Word::new("CRANE").unwrap();
        let word4 = Word::new("slate").unwrap();

        assert_eq!(word1, word3);
        assert_ne!(word1, word4);
    }
}
