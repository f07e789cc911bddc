//! Two boards, one input stream

use super::dictionary::{Dictionary, LookupError, Validation, resolve};
use super::game::{PendingGuess, ScoredGuess, Session};
use super::mode::GameConfig;
use super::{GameStatus, GuessError};
use crate::core::Word;
use crate::keyboard::KeyboardState;
use log::info;

/// Feedback from one submission; `None` for a board that was already won
pub type DoubleTurn = [Option<ScoredGuess>; 2];

/// Double mode: every guess is played on both boards until each is solved
#[derive(Debug, Clone)]
pub struct DoubleSession {
    boards: [Session; 2],
    status: GameStatus,
    in_flight: bool,
}

impl DoubleSession {
    /// Start a game with two solutions
    ///
    /// # Errors
    /// Returns `GuessError::LengthMismatch` if either solution does not fit
    /// the configured word length.
    pub fn new(config: GameConfig, first: Word, second: Word) -> Result<Self, GuessError> {
        Ok(Self {
            boards: [Session::new(config, first)?, Session::new(config, second)?],
            status: GameStatus::Playing,
            in_flight: false,
        })
    }

    #[must_use]
    pub fn boards(&self) -> &[Session; 2] {
        &self.boards
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
    pub fn word_length(&self) -> usize {
        self.boards[0].config().word_length
    }

    /// Submissions accepted so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.boards
            .iter()
            .map(Session::attempts_used)
            .max()
            .unwrap_or(0)
    }

    /// Keyboard shown to the player: the best status from either board
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        self.boards[0].keyboard().merge(self.boards[1].keyboard())
    }

    /// First phase, as [`Session::begin_submission`]
    ///
    /// # Errors
    /// `GameOver`, `SubmissionPending`, `Malformed` or `LengthMismatch`.
    pub fn begin_submission(&mut self, text: &str) -> Result<PendingGuess, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.in_flight {
            return Err(GuessError::SubmissionPending);
        }

        let word = Word::new(text)?;
        let expected = self.word_length();
        if word.len() != expected {
            return Err(GuessError::LengthMismatch {
                expected,
                actual: word.len(),
            });
        }

        self.in_flight = true;
        Ok(PendingGuess::new(word))
    }

    /// Second phase: one validation result applies to every board in play
    ///
    /// # Errors
    /// `InvalidWord` when the dictionary rejects the word.
    pub fn complete_submission(
        &mut self,
        pending: PendingGuess,
        lookup: Result<Validation, LookupError>,
    ) -> Result<DoubleTurn, GuessError> {
        self.in_flight = false;
        let word = pending.into_word();

        let validation = resolve(&word, lookup);
        if !validation.is_valid {
            return Err(GuessError::InvalidWord(validation.message_or_default()));
        }

        let mut turn: DoubleTurn = [None, None];
        for (board, slot) in self.boards.iter_mut().zip(turn.iter_mut()) {
            if !board.is_over() {
                *slot = Some(board.apply_validated(word.clone())?.clone());
            }
        }

        let statuses = self.boards.each_ref().map(Session::status);
        if statuses.iter().all(|&s| s == GameStatus::Won) {
            self.status = GameStatus::Won;
            info!("double solved in {} guesses", self.attempts_used());
        } else if statuses.contains(&GameStatus::Lost) {
            self.status = GameStatus::Lost;
        }

        Ok(turn)
    }

    pub fn abandon(&mut self, _pending: PendingGuess) {
        self.in_flight = false;
    }

    /// Both phases with one dictionary lookup
    ///
    /// # Errors
    /// Any error from the two phases.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        text: &str,
        dictionary: &D,
    ) -> Result<DoubleTurn, GuessError> {
        let pending = self.begin_submission(text)?;
        let lookup = dictionary.lookup(pending.word(), self.word_length());
        self.complete_submission(pending, lookup)
    }
}
