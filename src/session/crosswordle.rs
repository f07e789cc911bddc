//! Crosswordle: guess a horizontal and a vertical word at once
//!
//! Each guess is scored against its own target with the crossing word as
//! the source of `OtherWord` hints. Both halves share one keyboard.

use super::dictionary::{Dictionary, LookupError, Validation, resolve};
use super::game::ScoredGuess;
use super::{GameStatus, GuessError};
use crate::core::{GuessResult, Word};
use crate::keyboard::KeyboardState;
use crate::wordlists::PuzzleDefinition;
use chrono::NaiveDate;
use log::{debug, info};
use std::fmt;

/// Rounds before the game is lost
pub const CROSSWORDLE_ROUNDS: usize = 6;

/// Which of the two words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("Horizontal"),
            Self::Vertical => f.write_str("Vertical"),
        }
    }
}

impl Axis {
    fn wrap(self, err: impl Into<GuessError>) -> GuessError {
        GuessError::Crossing {
            axis: self,
            source: Box::new(err.into()),
        }
    }
}

/// Both guesses of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossRound {
    pub horizontal: ScoredGuess,
    pub vertical: ScoredGuess,
}

/// A round waiting for its two dictionary answers
#[derive(Debug, PartialEq, Eq)]
pub struct CrosswordlePending {
    horizontal: Word,
    vertical: Word,
}

impl CrosswordlePending {
    #[must_use]
    pub fn horizontal(&self) -> &Word {
        &self.horizontal
    }

    #[must_use]
    pub fn vertical(&self) -> &Word {
        &self.vertical
    }
}

#[derive(Debug, Clone)]
pub struct CrosswordleSession {
    puzzle: PuzzleDefinition,
    rounds: Vec<CrossRound>,
    keyboard: KeyboardState,
    status: GameStatus,
    in_flight: bool,
}

impl CrosswordleSession {
    #[must_use]
    pub fn new(puzzle: PuzzleDefinition) -> Self {
        Self {
            puzzle,
            rounds: Vec::with_capacity(CROSSWORDLE_ROUNDS),
            keyboard: KeyboardState::new(),
            status: GameStatus::Playing,
            in_flight: false,
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> &PuzzleDefinition {
        &self.puzzle
    }

    #[must_use]
    pub fn rounds(&self) -> &[CrossRound] {
        &self.rounds
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn rounds_left(&self) -> usize {
        CROSSWORDLE_ROUNDS.saturating_sub(self.rounds.len())
    }

    fn target(&self, axis: Axis) -> &Word {
        match axis {
            Axis::Horizontal => &self.puzzle.horizontal,
            Axis::Vertical => &self.puzzle.vertical,
        }
    }

    fn parse(&self, axis: Axis, text: &str) -> Result<Word, GuessError> {
        let word = Word::new(text).map_err(|e| axis.wrap(e))?;
        let expected = self.target(axis).len();
        if word.len() != expected {
            return Err(axis.wrap(GuessError::LengthMismatch {
                expected,
                actual: word.len(),
            }));
        }
        Ok(word)
    }

    /// First phase: check both words and mark the round in flight
    ///
    /// # Errors
    /// `GameOver`, `SubmissionPending`, or a `Crossing` error naming the
    /// word that is malformed or has the wrong length.
    pub fn begin_submission(
        &mut self,
        horizontal: &str,
        vertical: &str,
    ) -> Result<CrosswordlePending, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.in_flight {
            return Err(GuessError::SubmissionPending);
        }

        let pending = CrosswordlePending {
            horizontal: self.parse(Axis::Horizontal, horizontal)?,
            vertical: self.parse(Axis::Vertical, vertical)?,
        };
        self.in_flight = true;
        Ok(pending)
    }

    /// Second phase: apply both dictionary answers and score the round
    ///
    /// # Errors
    /// A `Crossing` error wrapping `InvalidWord` for a rejected word.
    pub fn complete_submission(
        &mut self,
        pending: CrosswordlePending,
        horizontal_lookup: Result<Validation, LookupError>,
        vertical_lookup: Result<Validation, LookupError>,
    ) -> Result<&CrossRound, GuessError> {
        self.in_flight = false;
        let CrosswordlePending {
            horizontal,
            vertical,
        } = pending;

        for (axis, word, lookup) in [
            (Axis::Horizontal, &horizontal, horizontal_lookup),
            (Axis::Vertical, &vertical, vertical_lookup),
        ] {
            let validation = resolve(word, lookup);
            if !validation.is_valid {
                return Err(axis.wrap(GuessError::InvalidWord(
                    validation.message_or_default(),
                )));
            }
        }

        let h_target = &self.puzzle.horizontal;
        let v_target = &self.puzzle.vertical;
        let h_result = GuessResult::calculate_crossing(&horizontal, h_target, v_target)
            .map_err(|_| Axis::Horizontal.wrap(length_error(h_target, &horizontal)))?;
        let v_result = GuessResult::calculate_crossing(&vertical, v_target, h_target)
            .map_err(|_| Axis::Vertical.wrap(length_error(v_target, &vertical)))?;

        let won = horizontal == *h_target && vertical == *v_target;

        self.keyboard.record(&horizontal, &h_result);
        self.keyboard.record(&vertical, &v_result);
        debug!(
            "round {}: {} {} / {} {}",
            self.rounds.len() + 1,
            horizontal,
            h_result.to_symbols(),
            vertical,
            v_result.to_symbols()
        );

        self.rounds.push(CrossRound {
            horizontal: ScoredGuess {
                word: horizontal,
                result: h_result,
            },
            vertical: ScoredGuess {
                word: vertical,
                result: v_result,
            },
        });

        if won {
            self.status = GameStatus::Won;
            info!("crosswordle #{} solved in {} rounds", self.puzzle.id, self.rounds.len());
        } else if self.rounds.len() >= CROSSWORDLE_ROUNDS {
            self.status = GameStatus::Lost;
            info!("crosswordle #{} lost", self.puzzle.id);
        }

        let last = self.rounds.len() - 1;
        Ok(&self.rounds[last])
    }

    pub fn abandon(&mut self, _pending: CrosswordlePending) {
        self.in_flight = false;
    }

    /// Both phases; one lookup per word
    ///
    /// # Errors
    /// Any error from the two phases.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        horizontal: &str,
        vertical: &str,
        dictionary: &D,
    ) -> Result<&CrossRound, GuessError> {
        let pending = self.begin_submission(horizontal, vertical)?;
        let h_lookup = dictionary.lookup(pending.horizontal(), self.puzzle.horizontal.len());
        let v_lookup = dictionary.lookup(pending.vertical(), self.puzzle.vertical.len());
        self.complete_submission(pending, h_lookup, v_lookup)
    }

    /// Result summary for sharing, with the latest round's squares
    #[must_use]
    pub fn share_text(&self, date: NaiveDate) -> String {
        let mut text = format!(
            "Crosswordle #{} ({date}) - {}/{CROSSWORDLE_ROUNDS}",
            self.puzzle.id,
            self.rounds.len()
        );
        if let Some(round) = self.rounds.last() {
            text.push_str("\n\nHorizontal: ");
            text.push_str(&round.horizontal.result.to_emoji());
            text.push_str("\nVertical: ");
            text.push_str(&round.vertical.result.to_emoji());
        }
        text
    }
}

fn length_error(target: &Word, guess: &Word) -> GuessError {
    GuessError::LengthMismatch {
        expected: target.len(),
        actual: guess.len(),
    }
}
