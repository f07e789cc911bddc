//! Game sessions
//!
//! A session owns everything one game needs: its solution, the accepted
//! guesses, the keyboard and the status. Guesses arrive as text and go
//! through a two-phase submission so the dictionary lookup can happen
//! outside the session:
//!
//! 1. [`Session::begin_submission`] checks shape and length and marks a
//!    submission as in flight
//! 2. [`Session::complete_submission`] takes the lookup result, applies the
//!    mode rules and scores the guess
//!
//! [`Session::submit`] runs both phases with exactly one lookup.

mod crosswordle;
mod dictionary;
mod double;
mod game;
mod mode;
mod timer;

pub use crosswordle::{
    Axis, CROSSWORDLE_ROUNDS, CrossRound, CrosswordlePending, CrosswordleSession,
};
pub use dictionary::{
    AcceptAll, CachedDictionary, Dictionary, LookupError, Validation, WordSetDictionary, resolve,
    validate,
};
pub use double::{DoubleSession, DoubleTurn};
pub use game::{PendingGuess, ScoredGuess, Session};
pub use mode::{GameConfig, GameMode};
pub use timer::SpeedTimer;

use crate::core::WordError;
use crate::rules::RuleViolation;
use thiserror::Error;

/// Why a guess was not accepted; none of these consume a turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Word must be {expected} letters long")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("{0}")]
    InvalidWord(String),
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("Still checking the previous guess")]
    SubmissionPending,
    #[error("The game is over")]
    GameOver,
    /// One half of a crosswordle submission failed
    #[error("{axis} word: {source}")]
    Crossing {
        axis: Axis,
        source: Box<GuessError>,
    },
}

/// Session progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Self::Playing
    }
}
