//! Dictionary validation boundary
//!
//! A [`Dictionary`] answers whether a word is real. Lookups may fail at the
//! transport level; [`resolve`] treats that as valid so a flaky backend
//! never blocks play.

use crate::core::Word;
use log::warn;
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use thiserror::Error;

/// Outcome of a dictionary check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    /// Message for the player when the word is rejected
    pub message: Option<String>,
}

impl Validation {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }

    /// Rejection message, with a generic fallback
    #[must_use]
    pub fn message_or_default(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Not a valid word".to_string())
    }
}

/// The dictionary could not be reached
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("dictionary unavailable: {0}")]
    Unavailable(String),
}

/// Word validity oracle
pub trait Dictionary {
    /// Check one word; called at most once per submission
    ///
    /// # Errors
    /// Returns `LookupError` when the answer is unknown.
    fn lookup(&self, word: &Word, expected_length: usize) -> Result<Validation, LookupError>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup(&self, word: &Word, expected_length: usize) -> Result<Validation, LookupError> {
        (**self).lookup(word, expected_length)
    }
}

/// Turn a lookup result into a decision, failing open
#[must_use]
pub fn resolve(word: &Word, lookup: Result<Validation, LookupError>) -> Validation {
    lookup.unwrap_or_else(|err| {
        warn!("accepting \"{word}\" unchecked: {err}");
        Validation::valid()
    })
}

/// Length check, then one dictionary lookup
///
/// # Examples
/// ```
/// use wordle_variants::core::Word;
/// use wordle_variants::session::{AcceptAll, validate};
///
/// let word = Word::new("fast").unwrap();
/// let validation = validate(&AcceptAll, &word, 5);
///
/// assert!(!validation.is_valid);
/// assert_eq!(validation.message.as_deref(), Some("Word must be 5 letters long"));
/// ```
pub fn validate<D: Dictionary + ?Sized>(
    dictionary: &D,
    word: &Word,
    expected_length: usize,
) -> Validation {
    if word.len() != expected_length {
        return Validation::invalid(format!("Word must be {expected_length} letters long"));
    }
    resolve(word, dictionary.lookup(word, expected_length))
}

/// Dictionary backed by an in-memory word set
#[derive(Debug, Clone, Default)]
pub struct WordSetDictionary {
    words: FxHashSet<Word>,
}

impl WordSetDictionary {
    #[must_use]
    pub fn new<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        Self {
            words: words.into_iter().cloned().collect(),
        }
    }

    pub fn extend<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a Word>,
    {
        self.words.extend(words.into_iter().cloned());
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn lookup(&self, word: &Word, _expected_length: usize) -> Result<Validation, LookupError> {
        if self.contains(word) {
            Ok(Validation::valid())
        } else {
            Ok(Validation::invalid(format!(
                "\"{}\" is not a valid English word",
                word.text().to_uppercase()
            )))
        }
    }
}

/// Accepts every word
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn lookup(&self, _word: &Word, _expected_length: usize) -> Result<Validation, LookupError> {
        Ok(Validation::valid())
    }
}

/// Remembers words the inner dictionary accepted
///
/// Rejections and transport failures are not cached.
#[derive(Debug)]
pub struct CachedDictionary<D> {
    inner: D,
    known: RefCell<FxHashSet<Word>>,
}

impl<D: Dictionary> CachedDictionary<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            known: RefCell::new(FxHashSet::default()),
        }
    }

    /// Number of cached valid words
    pub fn cached(&self) -> usize {
        self.known.borrow().len()
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Dictionary> Dictionary for CachedDictionary<D> {
    fn lookup(&self, word: &Word, expected_length: usize) -> Result<Validation, LookupError> {
        if self.known.borrow().contains(word) {
            return Ok(Validation::valid());
        }
        let validation = self.inner.lookup(word, expected_length)?;
        if validation.is_valid {
            self.known.borrow_mut().insert(word.clone());
        }
        Ok(validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Counts lookups and fails when told to
    struct Probe {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Probe {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    impl Dictionary for Probe {
        fn lookup(&self, word: &Word, _: usize) -> Result<Validation, LookupError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(LookupError::Unavailable("offline".to_string()))
            } else if word.text() == "crane" {
                Ok(Validation::valid())
            } else {
                Ok(Validation::invalid("nope"))
            }
        }
    }

    #[test]
    fn length_is_checked_before_lookup() {
        let probe = Probe::new(false);
        let validation = validate(&probe, &word("cranes"), 5);
        assert!(!validation.is_valid);
        assert_eq!(probe.calls.get(), 0);
    }

    #[test]
    fn transport_failure_fails_open() {
        let probe = Probe::new(true);
        assert!(validate(&probe, &word("qwxyz"), 5).is_valid);
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn word_set_rejects_unknown_words() {
        let dictionary = WordSetDictionary::new(&[word("crane"), word("slate")]);
        assert_eq!(dictionary.len(), 2);
        assert!(validate(&dictionary, &word("CRANE"), 5).is_valid);

        let rejected = validate(&dictionary, &word("qwxyz"), 5);
        assert!(!rejected.is_valid);
        assert_eq!(
            rejected.message_or_default(),
            "\"QWXYZ\" is not a valid English word"
        );
    }

    #[test]
    fn cache_skips_repeat_lookups() {
        let cached = CachedDictionary::new(Probe::new(false));
        assert!(validate(&cached, &word("crane"), 5).is_valid);
        assert!(validate(&cached, &word("crane"), 5).is_valid);
        assert!(!validate(&cached, &word("slate"), 5).is_valid);
        assert!(!validate(&cached, &word("slate"), 5).is_valid);

        assert_eq!(cached.cached(), 1);
        assert_eq!(cached.into_inner().calls.get(), 3);
    }

    #[test]
    fn default_message() {
        let validation = Validation {
            is_valid: false,
            message: None,
        };
        assert_eq!(validation.message_or_default(), "Not a valid word");
    }
}
