//! Letter-frequency counting
//!
//! Every comparator manages duplicate letters through a budget of how many
//! times each letter occurs in the target.

use super::Word;
use rustc_hash::FxHashMap;

/// Multiset of lowercase letters
///
/// Letters whose count drops to zero are removed, so two counters compare
/// equal exactly when they describe the same multiset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<u8, u32>);

impl LetterCounts {
    /// Count the letters of a word
    #[must_use]
    pub fn of(word: &Word) -> Self {
        word.letters().iter().copied().collect()
    }

    /// Occurrences of `letter` (case-insensitive)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u32 {
        self.0
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.get(letter) > 0
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns false (and changes nothing) when none is left.
    pub fn take(&mut self, letter: u8) -> bool {
        let letter = letter.to_ascii_lowercase();
        match self.0.get_mut(&letter) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.0.remove(&letter);
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, letter: u8) {
        *self.0.entry(letter.to_ascii_lowercase()).or_insert(0) += 1;
    }

    /// Number of distinct letters
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(letter, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.0.iter().map(|(&letter, &count)| (letter, count))
    }
}

impl FromIterator<u8> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::of(&Word::new("erase").unwrap());
        assert_eq!(counts.get(b'e'), 2);
        assert_eq!(counts.get(b'r'), 1);
        assert_eq!(counts.get(b'z'), 0);
        assert_eq!(counts.distinct(), 4);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn counts_all_same() {
        let counts = LetterCounts::of(&Word::new("aaaaa").unwrap());
        assert_eq!(counts.distinct(), 1);
        assert_eq!(counts.get(b'a'), 5);
    }

    #[test]
    fn take_consumes_budget() {
        let mut counts = LetterCounts::of(&Word::new("erase").unwrap());
        assert!(counts.take(b'e'));
        assert!(counts.take(b'E'));
        assert!(!counts.take(b'e'));
        assert!(!counts.contains(b'e'));
        assert!(!counts.take(b'q'));
    }

    #[test]
    fn emptied_letters_do_not_affect_equality() {
        let mut counts = LetterCounts::of(&Word::new("abc").unwrap());
        assert!(counts.take(b'c'));
        let expected: LetterCounts = b"ba".iter().copied().collect();
        assert_eq!(counts, expected);
    }
}
