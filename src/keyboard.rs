//! Keyboard hint aggregation
//!
//! Folds the feedback of every accepted guess into the best status seen per
//! letter. Statuses only ever move up the ranking
//! `Correct > Present > OtherWord > Absent`, so the fold is monotonic and
//! independent of guess order.

use crate::core::{GuessResult, LetterStatus, Word};

const ALPHABET_LEN: usize = 26;

/// Best status observed per letter A–Z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterStatus>; ALPHABET_LEN],
}

fn slot(letter: u8) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

impl KeyboardState {
    /// Empty keyboard for a new game
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status shown for `letter` (case-insensitive); `None` if unused
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        slot(letter).and_then(|i| self.keys[i])
    }

    /// Record one letter's status, keeping the better of old and new
    pub fn upgrade(&mut self, letter: u8, status: LetterStatus) {
        if let Some(i) = slot(letter) {
            self.keys[i] = Some(self.keys[i].map_or(status, |current| current.max(status)));
        }
    }

    /// Record every letter of a scored guess
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::{GuessResult, LetterStatus, Word};
    /// use wordle_variants::keyboard::KeyboardState;
    ///
    /// let target = Word::new("react").unwrap();
    /// let mut keyboard = KeyboardState::new();
    ///
    /// for guess in ["crate", "react"] {
    ///     let guess = Word::new(guess).unwrap();
    ///     let result = GuessResult::calculate(&guess, &target).unwrap();
    ///     keyboard.record(&guess, &result);
    /// }
    ///
    /// assert_eq!(keyboard.status(b'C'), Some(LetterStatus::Correct));
    /// ```
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, status) in guess.letters().iter().zip(result.iter()) {
            self.upgrade(letter, status);
        }
    }

    /// Display merge of two independent boards (double mode)
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = *self;
        for (letter, status) in other.iter() {
            merged.upgrade(letter, status);
        }
        merged
    }

    /// Used letters with their status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'a'..=b'z')
            .zip(self.keys.iter())
            .filter_map(|(letter, status)| status.map(|s| (letter, s)))
    }

    /// Number of letters with a status
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keyboard: &mut KeyboardState, guess: &str, feedback: &str) {
        let guess = Word::new(guess).unwrap();
        let result: GuessResult = feedback.parse().unwrap();
        keyboard.record(&guess, &result);
    }

    #[test]
    fn new_keyboard_is_empty() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.status(b'a'), None);
    }

    #[test]
    fn correct_is_sticky() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(b'x', LetterStatus::Absent);
        keyboard.upgrade(b'x', LetterStatus::Present);
        keyboard.upgrade(b'x', LetterStatus::Correct);
        keyboard.upgrade(b'x', LetterStatus::Absent);
        keyboard.upgrade(b'x', LetterStatus::Present);
        assert_eq!(keyboard.status(b'X'), Some(LetterStatus::Correct));
    }

    #[test]
    fn duplicate_letters_keep_best_status_within_one_guess() {
        let mut keyboard = KeyboardState::new();
        // Second E is absent but the first was present
        record(&mut keyboard, "eerie", "Y---G");
        assert_eq!(keyboard.status(b'e'), Some(LetterStatus::Correct));
        assert_eq!(keyboard.status(b'r'), Some(LetterStatus::Absent));
        assert_eq!(keyboard.len(), 3);
    }

    #[test]
    fn other_word_ranks_between_absent_and_present() {
        let mut a = KeyboardState::new();
        a.upgrade(b'o', LetterStatus::Absent);
        a.upgrade(b'o', LetterStatus::OtherWord);
        assert_eq!(a.status(b'o'), Some(LetterStatus::OtherWord));

        a.upgrade(b'o', LetterStatus::Present);
        a.upgrade(b'o', LetterStatus::OtherWord);
        assert_eq!(a.status(b'o'), Some(LetterStatus::Present));
    }

    #[test]
    fn order_of_guesses_does_not_matter() {
        let mut forward = KeyboardState::new();
        record(&mut forward, "smoke", "O-O-Y");
        record(&mut forward, "stone", "Y-Y-G");

        let mut backward = KeyboardState::new();
        record(&mut backward, "stone", "Y-Y-G");
        record(&mut backward, "smoke", "O-O-Y");

        assert_eq!(forward, backward);
    }

    #[test]
    fn merge_takes_best_of_both_boards() {
        let mut first = KeyboardState::new();
        record(&mut first, "bread", "G-Y--");

        let mut second = KeyboardState::new();
        record(&mut second, "bread", "--GG-");

        let merged = first.merge(&second);
        assert_eq!(merged.status(b'b'), Some(LetterStatus::Correct));
        assert_eq!(merged.status(b'r'), Some(LetterStatus::Absent));
        assert_eq!(merged.status(b'e'), Some(LetterStatus::Correct));
        assert_eq!(merged.status(b'a'), Some(LetterStatus::Correct));
        assert_eq!(merged.status(b'd'), Some(LetterStatus::Absent));
        assert_eq!(merged, second.merge(&first));
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "zebra", "-----");
        let letters: String = keyboard.iter().map(|(l, _)| char::from(l)).collect();
        assert_eq!(letters, "aberz");
    }
}
