//! Puzzle definitions
//!
//! Every mode resolves to one [`Puzzle`] at session start: a single hidden
//! word, a pair of words (double and crosswordle), or a waffle seed.

use crate::core::{Word, WordError};
use std::fmt;
use thiserror::Error;

/// Board position used when two words share no letter
pub const FALLBACK_INTERSECTION: (usize, usize) = (2, 2);

/// A puzzle resolved for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Puzzle {
    SingleWord(Word),
    DualWord(PuzzleDefinition),
    Grid(GridPuzzle),
}

/// Waffle puzzles are generated from a seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPuzzle {
    pub seed: u64,
}

/// Two words played together, with a hint about how they relate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub id: u32,
    pub horizontal: Word,
    pub vertical: Word,
    pub relation: String,
}

/// A letter both words contain, with its index in each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonLetter {
    pub letter: u8,
    pub horizontal_index: usize,
    pub vertical_index: usize,
}

impl fmt::Display for CommonLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" at horizontal {}, vertical {}",
            char::from(self.letter.to_ascii_uppercase()),
            self.horizontal_index + 1,
            self.vertical_index + 1
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Puzzle #{id} has an invalid word: {source}")]
    InvalidWord { id: u32, source: WordError },
    #[error("Puzzle record has a bad id '{0}'")]
    BadId(String),
    #[error("Puzzle #{id} has words of incorrect length ({horizontal} and {vertical}, expected {expected})")]
    WrongLength {
        id: u32,
        horizontal: usize,
        vertical: usize,
        expected: usize,
    },
    #[error("Puzzle #{id} has no common letters between words")]
    NoCommonLetter { id: u32 },
}

impl PuzzleDefinition {
    /// Build from text fields
    ///
    /// # Errors
    /// `PuzzleError::InvalidWord` when either field is not a word.
    pub fn new(
        id: u32,
        horizontal: &str,
        vertical: &str,
        relation: impl Into<String>,
    ) -> Result<Self, PuzzleError> {
        let word = |text: &str| {
            Word::new(text).map_err(|source| PuzzleError::InvalidWord { id, source })
        };
        Ok(Self {
            id,
            horizontal: word(horizontal)?,
            vertical: word(vertical)?,
            relation: relation.into(),
        })
    }

    /// Parse an embedded `(id, horizontal, vertical, relation)` record
    ///
    /// # Errors
    /// `PuzzleError::BadId` or `PuzzleError::InvalidWord`.
    pub fn from_record(record: &(&str, &str, &str, &str)) -> Result<Self, PuzzleError> {
        let (id, horizontal, vertical, relation) = *record;
        let id = id
            .trim()
            .parse()
            .map_err(|_| PuzzleError::BadId(id.to_string()))?;
        Self::new(id, horizontal, vertical, relation)
    }

    /// Every pair of positions where the two words hold the same letter
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::wordlists::PuzzleDefinition;
    ///
    /// let puzzle = PuzzleDefinition::new(1, "bread", "toast", "Breakfast").unwrap();
    /// let common = puzzle.common_letters();
    ///
    /// assert_eq!(common.len(), 1);
    /// assert_eq!(common[0].letter, b'a');
    /// assert_eq!((common[0].horizontal_index, common[0].vertical_index), (3, 2));
    /// ```
    #[must_use]
    pub fn common_letters(&self) -> Vec<CommonLetter> {
        let mut common = Vec::new();
        for (h, &letter) in self.horizontal.letters().iter().enumerate() {
            for v in self.vertical.positions_of(letter) {
                common.push(CommonLetter {
                    letter,
                    horizontal_index: h,
                    vertical_index: v,
                });
            }
        }
        common
    }

    /// Where the words cross: `(horizontal index, vertical index)`
    ///
    /// The first shared letter wins; words with nothing in common cross at
    /// [`FALLBACK_INTERSECTION`].
    #[must_use]
    pub fn intersection(&self) -> (usize, usize) {
        self.common_letters()
            .first()
            .map_or(FALLBACK_INTERSECTION, |c| (c.horizontal_index, c.vertical_index))
    }
}

/// Authoring checks: both words `word_length` long and crossing somewhere
///
/// # Errors
/// `PuzzleError::WrongLength` or `PuzzleError::NoCommonLetter`.
pub fn validate_definition(
    puzzle: &PuzzleDefinition,
    word_length: usize,
) -> Result<Vec<CommonLetter>, PuzzleError> {
    if puzzle.horizontal.len() != word_length || puzzle.vertical.len() != word_length {
        return Err(PuzzleError::WrongLength {
            id: puzzle.id,
            horizontal: puzzle.horizontal.len(),
            vertical: puzzle.vertical.len(),
            expected: word_length,
        });
    }

    let common = puzzle.common_letters();
    if common.is_empty() {
        return Err(PuzzleError::NoCommonLetter { id: puzzle.id });
    }
    Ok(common)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_letters_lists_every_pair() {
        let puzzle = PuzzleDefinition::new(8, "night", "light", "Opposites").unwrap();
        // I, G, H, T line up; N has no partner
        let common = puzzle.common_letters();
        assert_eq!(common.len(), 4);
        assert!(common.iter().all(|c| c.horizontal_index == c.vertical_index));
        assert_eq!(puzzle.intersection(), (1, 1));
    }

    #[test]
    fn repeated_letters_pair_up_each_way() {
        let puzzle = PuzzleDefinition::new(1, "llama", "hello", "").unwrap();
        // Two L's in each word give four pairs
        assert_eq!(puzzle.common_letters().len(), 4);
        assert_eq!(puzzle.intersection(), (0, 2));
    }

    #[test]
    fn no_common_letter_falls_back_to_centre() {
        let puzzle = PuzzleDefinition::new(3, "bread", "lofty", "").unwrap();
        assert!(puzzle.common_letters().is_empty());
        assert_eq!(puzzle.intersection(), FALLBACK_INTERSECTION);
        assert_eq!(
            validate_definition(&puzzle, 5),
            Err(PuzzleError::NoCommonLetter { id: 3 })
        );
    }

    #[test]
    fn wrong_length_is_reported() {
        let puzzle = PuzzleDefinition::new(14, "river", "bridge", "").unwrap();
        assert_eq!(
            validate_definition(&puzzle, 5),
            Err(PuzzleError::WrongLength {
                id: 14,
                horizontal: 5,
                vertical: 6,
                expected: 5,
            })
        );
    }

    #[test]
    fn records_parse() {
        let puzzle = PuzzleDefinition::from_record(&("12", "river", "water", "Flow")).unwrap();
        assert_eq!(puzzle.id, 12);
        assert_eq!(puzzle.relation, "Flow");

        assert_eq!(
            PuzzleDefinition::from_record(&("x", "river", "water", "")),
            Err(PuzzleError::BadId("x".to_string()))
        );
        assert!(matches!(
            PuzzleDefinition::from_record(&("2", "riv3r", "water", "")),
            Err(PuzzleError::InvalidWord { id: 2, .. })
        ));
    }
}
