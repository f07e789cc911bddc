//! Guess scoring
//!
//! A [`GuessResult`] holds one [`LetterStatus`] per letter of the guess.
//! Both comparators use the same two passes over a letter budget taken
//! from the target:
//! 1. Exact position matches become `Correct` and spend one occurrence
//! 2. Remaining letters become `Present` while the budget lasts
//!
//! The crossing comparator adds a third pass that upgrades leftover
//! `Absent` letters to `OtherWord` when the crossing word contains them.

use super::{LetterStatus, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparator failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("Guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// Per-letter feedback for a single guessed word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<LetterStatus>);

impl GuessResult {
    /// Score `guess` against `target`
    ///
    /// Duplicate letters are handled the way players expect: the target's
    /// supply of each letter goes to exact matches first, then to misplaced
    /// letters from left to right.
    ///
    /// # Errors
    /// Returns `CompareError::LengthMismatch` when the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::{GuessResult, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let result = GuessResult::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(result.to_string(), "🟨⬜🟨🟨⬜");
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, CompareError> {
        Self::score(guess, target)
    }

    /// Score `guess` against `target`, hinting letters found in `other`
    ///
    /// `target` alone decides `Correct`/`Present`. Any position still
    /// `Absent` afterwards becomes `OtherWord` if the letter occurs anywhere
    /// in `other`. That check ignores how much of the target budget was
    /// spent; it is a hint, not a position claim.
    ///
    /// # Errors
    /// Returns `CompareError::LengthMismatch` when `guess` and `target`
    /// differ in length. `other` may have any length.
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::{GuessResult, Word};
    ///
    /// let guess = Word::new("smoke").unwrap();
    /// let target = Word::new("bread").unwrap();
    /// let other = Word::new("toast").unwrap();
    /// let result = GuessResult::calculate_crossing(&guess, &target, &other).unwrap();
    ///
    /// // S and O only appear in the crossing word, E is misplaced
    /// assert_eq!(result.to_symbols(), "O-O-Y");
    /// ```
    pub fn calculate_crossing(
        guess: &Word,
        target: &Word,
        other: &Word,
    ) -> Result<Self, CompareError> {
        let mut result = Self::score(guess, target)?;
        let other_letters = other.letter_counts();

        for (status, &letter) in result.0.iter_mut().zip(guess.letters()) {
            if *status == LetterStatus::Absent && other_letters.contains(letter) {
                *status = LetterStatus::OtherWord;
            }
        }

        Ok(result)
    }

    fn score(guess: &Word, target: &Word) -> Result<Self, CompareError> {
        if guess.len() != target.len() {
            return Err(CompareError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = LetterStatus::Correct;
                available.take(g);
            }
        }

        // Second pass: misplaced letters from what is left
        for (status, &letter) in result.iter_mut().zip(guess.letters()) {
            if *status == LetterStatus::Absent && available.take(letter) {
                *status = LetterStatus::Present;
            }
        }

        Ok(Self(result))
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<LetterStatus> {
        self.0.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// ASCII rendering such as `"GY-O-"`
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.0.iter().map(|s| s.symbol()).collect()
    }

    /// Emoji rendering such as `"🟩🟨⬜🟧⬜"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl FromStr for GuessResult {
    type Err = String;

    /// Parse symbols or emoji squares, e.g. `"GY-O-"` or `"🟩🟨⬜🟧⬜"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let statuses: Option<Vec<LetterStatus>> =
            s.trim().chars().map(LetterStatus::from_symbol).collect();

        match statuses {
            Some(statuses) if !statuses.is_empty() => Ok(Self(statuses)),
            _ => Err(format!("Invalid feedback string: {s}")),
        }
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
