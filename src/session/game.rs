//! Single-board session

use super::dictionary::{Dictionary, LookupError, Validation, resolve};
use super::mode::GameConfig;
use super::timer::SpeedTimer;
use super::{GameStatus, GuessError};
use crate::core::{GuessResult, Word};
use crate::keyboard::KeyboardState;
use crate::rules::{ChainState, entered_form, is_backwards_win};
use log::{debug, info};
use std::time::Instant;

/// An accepted guess as displayed, with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Word,
    pub result: GuessResult,
}

/// A submission waiting for its dictionary answer
///
/// Hand it back to [`Session::complete_submission`] or
/// [`Session::abandon`]; until then the session rejects new submissions.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingGuess {
    word: Word,
}

impl PendingGuess {
    pub(super) fn new(word: Word) -> Self {
        Self { word }
    }

    /// The word to look up
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    pub(super) fn into_word(self) -> Word {
        self.word
    }
}

/// One single-word game
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    solution: Word,
    guesses: Vec<ScoredGuess>,
    keyboard: KeyboardState,
    chain: ChainState,
    status: GameStatus,
    timer: Option<SpeedTimer>,
    in_flight: bool,
}

impl Session {
    /// Start a game
    ///
    /// # Errors
    /// Returns `GuessError::LengthMismatch` when the solution does not fit
    /// the configured word length.
    pub fn new(config: GameConfig, solution: Word) -> Result<Self, GuessError> {
        if solution.len() != config.word_length {
            return Err(GuessError::LengthMismatch {
                expected: config.word_length,
                actual: solution.len(),
            });
        }

        Ok(Self {
            timer: config.time_limit.map(SpeedTimer::new),
            config,
            solution,
            guesses: Vec::with_capacity(config.max_attempts),
            keyboard: KeyboardState::new(),
            chain: ChainState::new(),
            status: GameStatus::Playing,
            in_flight: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
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
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn timer(&self) -> Option<&SpeedTimer> {
        self.timer.as_ref()
    }

    /// Letter the next chain guess must start with
    #[must_use]
    pub fn required_letter(&self) -> Option<char> {
        if self.config.chain {
            self.chain.required_letter()
        } else {
            None
        }
    }

    /// A submission is waiting for its dictionary answer
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight
    }

    /// End a speed game whose clock has run out; returns true if it did
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self.status == GameStatus::Playing
            && self.timer.as_ref().is_some_and(|t| t.is_expired(now));
        if expired {
            self.status = GameStatus::Lost;
            info!("time is up, the word was {}", self.solution);
        }
        expired
    }

    fn ensure_playing(&mut self) -> Result<(), GuessError> {
        self.expire(Instant::now());
        if self.is_over() {
            Err(GuessError::GameOver)
        } else {
            Ok(())
        }
    }

    /// First phase: check the text and mark a submission in flight
    ///
    /// # Errors
    /// - `GameOver` once the game has ended
    /// - `SubmissionPending` while another submission is in flight
    /// - `Malformed` for text that is not a word
    /// - `LengthMismatch` for a word of the wrong length
    pub fn begin_submission(&mut self, text: &str) -> Result<PendingGuess, GuessError> {
        self.ensure_playing()?;
        if self.in_flight {
            return Err(GuessError::SubmissionPending);
        }

        let word = Word::new(text)?;
        if word.len() != self.config.word_length {
            return Err(GuessError::LengthMismatch {
                expected: self.config.word_length,
                actual: word.len(),
            });
        }

        self.in_flight = true;
        Ok(PendingGuess::new(word))
    }

    /// Second phase: apply the dictionary answer and score the guess
    ///
    /// A `LookupError` counts as valid.
    ///
    /// # Errors
    /// `InvalidWord` when the dictionary rejects the word, `Rule` when a
    /// mode rule is broken, `GameOver` if the game ended meanwhile. None of
    /// them consume a turn.
    pub fn complete_submission(
        &mut self,
        pending: PendingGuess,
        lookup: Result<Validation, LookupError>,
    ) -> Result<&ScoredGuess, GuessError> {
        self.in_flight = false;
        let word = pending.into_word();

        let validation = resolve(&word, lookup);
        if !validation.is_valid {
            return Err(GuessError::InvalidWord(validation.message_or_default()));
        }

        self.apply_validated(word)
    }

    /// Drop a submission without using a turn
    pub fn abandon(&mut self, pending: PendingGuess) {
        debug!("abandoned submission of {}", pending.word());
        self.in_flight = false;
    }

    /// Both phases with one dictionary lookup
    ///
    /// # Errors
    /// Any error from [`Session::begin_submission`] or
    /// [`Session::complete_submission`].
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::{LetterStatus, Word};
    /// use wordle_variants::session::{AcceptAll, GameMode, Session};
    ///
    /// let solution = Word::new("react").unwrap();
    /// let mut session = Session::new(GameMode::Classic.config(), solution).unwrap();
    /// let scored = session.submit("trace", &AcceptAll).unwrap();
    ///
    /// assert_eq!(scored.result.count(LetterStatus::Present), 3);
    /// assert_eq!(scored.result.count(LetterStatus::Correct), 2);
    /// ```
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        text: &str,
        dictionary: &D,
    ) -> Result<&ScoredGuess, GuessError> {
        let pending = self.begin_submission(text)?;
        let lookup = dictionary.lookup(pending.word(), self.config.word_length);
        self.complete_submission(pending, lookup)
    }

    /// Apply mode rules to a dictionary-approved word and score it
    pub(crate) fn apply_validated(&mut self, typed: Word) -> Result<&ScoredGuess, GuessError> {
        self.ensure_playing()?;

        if self.config.chain {
            self.chain.check(&typed)?;
        }

        let shown = if self.config.backwards.is_some() {
            entered_form(&typed)
        } else {
            typed.clone()
        };

        let result = GuessResult::calculate(&shown, &self.solution).map_err(|_| {
            GuessError::LengthMismatch {
                expected: self.solution.len(),
                actual: shown.len(),
            }
        })?;

        let won = match self.config.backwards {
            Some(rule) => is_backwards_win(rule, &typed, &self.solution),
            None => result.is_solved(),
        };

        if let Some(timer) = self.timer.as_mut() {
            timer.start(Instant::now());
        }
        self.keyboard.record(&shown, &result);
        self.chain.advance(&shown);

        debug!("guess {} scored {}", shown, result.to_symbols());
        self.guesses.push(ScoredGuess {
            word: shown,
            result,
        });

        if won {
            self.status = GameStatus::Won;
            info!("solved in {} guesses", self.guesses.len());
        } else if self.guesses.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
            info!("out of guesses, the word was {}", self.solution);
        }

        let last = self.guesses.len() - 1;
        Ok(&self.guesses[last])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::rules::{BackwardsWin, RuleViolation};
    use crate::session::dictionary::{AcceptAll, WordSetDictionary};
    use crate::session::mode::GameMode;
    use std::time::Duration;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session(mode: GameMode, solution: &str) -> Session {
        Session::new(mode.config(), word(solution)).unwrap()
    }

    #[test]
    fn anagram_guess_marks_shared_positions_correct() {
        let mut game = session(GameMode::Classic, "react");
        let scored = game.submit("TRACE", &AcceptAll).unwrap().clone();
        assert_eq!(scored.result.to_symbols(), "YYGGY");
        assert_eq!(game.keyboard().status(b'a'), Some(LetterStatus::Correct));
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.keyboard().status(b't'), Some(LetterStatus::Present));
    }

    #[test]
    fn win_and_game_over() {
        let mut game = session(GameMode::Classic, "react");
        game.submit("trace", &AcceptAll).unwrap();
        game.submit("react", &AcceptAll).unwrap();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_used(), 2);
        assert_eq!(game.submit("crane", &AcceptAll), Err(GuessError::GameOver));
    }

    #[test]
    fn loses_after_max_attempts() {
        let mut game = session(GameMode::Classic, "react");
        for _ in 0..6 {
            game.submit("crane", &AcceptAll).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempts_left(), 0);
    }

    #[test]
    fn solution_must_fit_mode() {
        assert_eq!(
            Session::new(GameMode::Speed.config(), word("react")).unwrap_err(),
            GuessError::LengthMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn rejected_guesses_do_not_use_turns() {
        let dictionary = WordSetDictionary::new(&[word("crane"), word("react")]);
        let mut game = session(GameMode::Classic, "react");

        assert!(matches!(
            game.submit("cran", &dictionary),
            Err(GuessError::LengthMismatch { expected: 5, actual: 4 })
        ));
        assert!(matches!(
            game.submit("cr4ne", &dictionary),
            Err(GuessError::Malformed(_))
        ));
        assert!(matches!(
            game.submit("qwxyz", &dictionary),
            Err(GuessError::InvalidWord(_))
        ));
        assert_eq!(game.attempts_used(), 0);
        assert!(game.keyboard().is_empty());
        assert!(!game.is_pending());
    }

    #[test]
    fn one_submission_in_flight() {
        let mut game = session(GameMode::Classic, "react");
        let pending = game.begin_submission("crane").unwrap();
        assert!(game.is_pending());
        assert_eq!(
            game.begin_submission("slate").unwrap_err(),
            GuessError::SubmissionPending
        );

        game.complete_submission(pending, Ok(Validation::valid()))
            .unwrap();
        assert!(!game.is_pending());
        assert_eq!(game.attempts_used(), 1);

        let pending = game.begin_submission("slate").unwrap();
        game.abandon(pending);
        assert!(!game.is_pending());
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn lookup_failure_fails_open() {
        let mut game = session(GameMode::Classic, "react");
        let pending = game.begin_submission("qwxyz").unwrap();
        let scored = game
            .complete_submission(pending, Err(LookupError::Unavailable("timeout".into())))
            .unwrap();
        assert_eq!(scored.word, word("qwxyz"));
    }

    #[test]
    fn chain_rule_rejects_without_consuming() {
        let mut game = session(GameMode::Chain, "eagle");
        game.submit("apple", &AcceptAll).unwrap();
        assert_eq!(game.required_letter(), Some('e'));

        assert_eq!(
            game.submit("grape", &AcceptAll),
            Err(GuessError::Rule(RuleViolation::WrongStart('e')))
        );
        assert_eq!(game.attempts_used(), 1);

        game.submit("eagle", &AcceptAll).unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn backwards_guess_is_reversed_before_scoring() {
        let mut game = session(GameMode::Backwards, "smart");
        let scored = game.submit("trams", &AcceptAll).unwrap().clone();
        assert_eq!(scored.word, word("smart"));
        assert!(scored.result.is_solved());
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn backwards_default_rule_needs_the_target() {
        let mut game = session(GameMode::Backwards, "smart");
        let scored = game.submit("smart", &AcceptAll).unwrap().clone();
        assert_eq!(scored.word, word("trams"));
        assert_eq!(scored.result.to_symbols(), "YYGYY");
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn backwards_any_valid_word_rule() {
        let config = GameMode::Backwards
            .config()
            .with_backwards_rule(BackwardsWin::AnyValidWord);
        let mut game = Session::new(config, word("smart")).unwrap();
        game.submit("crane", &AcceptAll).unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn speed_clock_starts_on_first_guess_and_expires() {
        let mut game = session(GameMode::Speed, "dash");
        assert!(game.timer().unwrap().started_at().is_none());

        game.submit("rush", &AcceptAll).unwrap();
        let started = game.timer().unwrap().started_at().unwrap();

        assert!(!game.expire(started + Duration::from_secs(30)));
        assert!(game.expire(started + Duration::from_secs(61)));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.submit("dash", &AcceptAll), Err(GuessError::GameOver));
    }
}
