//! Chain continuity
//!
//! Every guess after the first must begin with the letter the previous
//! accepted guess ended on.

use super::RuleViolation;
use crate::core::Word;

/// True when `guess` may follow `previous`
///
/// # Examples
/// ```
/// use wordle_variants::core::Word;
/// use wordle_variants::rules::is_valid_chain_start;
///
/// let apple = Word::new("APPLE").unwrap();
/// let eagle = Word::new("eagle").unwrap();
/// let grape = Word::new("grape").unwrap();
///
/// assert!(is_valid_chain_start(None, &apple));
/// assert!(is_valid_chain_start(Some(&apple), &eagle));
/// assert!(!is_valid_chain_start(Some(&apple), &grape));
/// ```
#[must_use]
pub fn is_valid_chain_start(previous: Option<&Word>, guess: &Word) -> bool {
    previous.is_none_or(|prev| prev.last_letter() == guess.first_letter())
}

/// Most recent accepted guess of a chain session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainState {
    last: Option<Word>,
}

impl ChainState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter the next guess has to start with, if any
    #[must_use]
    pub fn required_letter(&self) -> Option<char> {
        self.last.as_ref().map(|w| char::from(w.last_letter()))
    }

    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.last.as_ref()
    }

    /// Check `guess` without changing state
    ///
    /// # Errors
    /// Returns `RuleViolation::WrongStart` naming the required letter.
    pub fn check(&self, guess: &Word) -> Result<(), RuleViolation> {
        if is_valid_chain_start(self.last.as_ref(), guess) {
            Ok(())
        } else {
            let required = self.required_letter().unwrap_or('?');
            Err(RuleViolation::WrongStart(required))
        }
    }

    /// Record an accepted guess
    pub fn advance(&mut self, guess: &Word) {
        self.last = Some(guess.clone());
    }
}
