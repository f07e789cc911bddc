//! Score command
//!
//! Scores one guess against a target, optionally with a crossing word.

use crate::core::{GuessResult, Word};
use anyhow::{Context, Result};

/// Result of scoring a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub other: Option<Word>,
    pub result: GuessResult,
}

/// Score `guess` against `target`, using the crosswordle comparator when
/// `other` is given
///
/// # Errors
///
/// Returns an error if any argument is not a word, or if the guess and
/// target differ in length.
pub fn score_guess(guess: &str, target: &str, other: Option<&str>) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;
    let other = other
        .map(|o| Word::new(o).with_context(|| format!("Invalid crossing word '{o}'")))
        .transpose()?;

    let result = match &other {
        Some(other) => GuessResult::calculate_crossing(&guess, &target, other)?,
        None => GuessResult::calculate(&guess, &target)?,
    };

    Ok(ScoreResult {
        guess,
        target,
        other,
        result,
    })
}
