//! Word bank
//!
//! All embedded word data, checked and converted once, then passed to
//! whatever needs it.

use super::embedded::{
    BACKWARDS, CHAIN, CLASSIC, CROSSWORDLE_PUZZLES, DICTIONARY_FIVE, DICTIONARY_FOUR, DOUBLE_PAIRS,
    HARD, SPEED,
};
use super::loader::words_of_length;
use super::puzzles::{GridPuzzle, Puzzle, PuzzleDefinition, PuzzleError};
use crate::core::Word;
use crate::session::{GameMode, WordSetDictionary};
use log::{debug, warn};
use rand::Rng;

/// Distinct waffle seeds in the daily rotation
pub const WAFFLE_ROTATION: usize = 365;

/// Solutions and dictionary words for every mode
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    classic: Vec<Word>,
    speed: Vec<Word>,
    hard: Vec<Word>,
    chain: Vec<Word>,
    backwards: Vec<Word>,
    double: Vec<PuzzleDefinition>,
    crosswordle: Vec<PuzzleDefinition>,
    dictionary_four: Vec<Word>,
    dictionary_five: Vec<Word>,
}

fn length_for(mode: GameMode) -> usize {
    mode.config().word_length
}

fn pairs_of_length(
    records: impl IntoIterator<Item = Result<PuzzleDefinition, PuzzleError>>,
    length: usize,
    list: &str,
) -> Vec<PuzzleDefinition> {
    records
        .into_iter()
        .filter_map(|record| match record {
            Ok(puzzle)
                if puzzle.horizontal.len() == length && puzzle.vertical.len() == length =>
            {
                Some(puzzle)
            }
            Ok(puzzle) => {
                warn!(
                    "{list}: skipping {} / {}, words must be {length} letters",
                    puzzle.horizontal, puzzle.vertical
                );
                None
            }
            Err(e) => {
                warn!("{list}: {e}");
                None
            }
        })
        .collect()
}

impl WordBank {
    /// Load the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let double = DOUBLE_PAIRS
            .iter()
            .zip(1u32..)
            .map(|(&(first, second, relation), id)| {
                PuzzleDefinition::new(id, first, second, relation)
            });
        let crosswordle = CROSSWORDLE_PUZZLES.iter().map(PuzzleDefinition::from_record);

        let bank = Self {
            classic: words_of_length(CLASSIC, length_for(GameMode::Classic), "classic"),
            speed: words_of_length(SPEED, length_for(GameMode::Speed), "speed"),
            hard: words_of_length(HARD, length_for(GameMode::Hard), "hard"),
            chain: words_of_length(CHAIN, length_for(GameMode::Chain), "chain"),
            backwards: words_of_length(BACKWARDS, length_for(GameMode::Backwards), "backwards"),
            double: pairs_of_length(double, length_for(GameMode::Double), "double"),
            crosswordle: pairs_of_length(
                crosswordle,
                length_for(GameMode::Crosswordle),
                "crosswordle",
            ),
            dictionary_four: words_of_length(DICTIONARY_FOUR, 4, "dictionary4"),
            dictionary_five: words_of_length(DICTIONARY_FIVE, 5, "dictionary5"),
        };

        debug!(
            "word bank: {} classic, {} speed, {} hard, {} chain, {} backwards, {} double, {} crosswordle",
            bank.classic.len(),
            bank.speed.len(),
            bank.hard.len(),
            bank.chain.len(),
            bank.backwards.len(),
            bank.double.len(),
            bank.crosswordle.len()
        );
        bank
    }

    /// Solutions of a single-word mode; empty for the others
    #[must_use]
    pub fn answers(&self, mode: GameMode) -> &[Word] {
        match mode {
            GameMode::Classic => &self.classic,
            GameMode::Speed => &self.speed,
            GameMode::Hard => &self.hard,
            GameMode::Chain => &self.chain,
            GameMode::Backwards => &self.backwards,
            GameMode::Double | GameMode::Crosswordle | GameMode::Waffle => &[],
        }
    }

    /// Word pairs of a dual-word mode; empty for the others
    #[must_use]
    pub fn pairs(&self, mode: GameMode) -> &[PuzzleDefinition] {
        match mode {
            GameMode::Double => &self.double,
            GameMode::Crosswordle => &self.crosswordle,
            _ => &[],
        }
    }

    /// Number of puzzles in the rotation for a mode
    #[must_use]
    pub fn puzzle_count(&self, mode: GameMode) -> usize {
        match mode {
            GameMode::Double | GameMode::Crosswordle => self.pairs(mode).len(),
            GameMode::Waffle => WAFFLE_ROTATION,
            _ => self.answers(mode).len(),
        }
    }

    /// Puzzle `number` (1-based, wrapping) for a mode
    ///
    /// Returns `None` only when the mode has no puzzles.
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::session::GameMode;
    /// use wordle_variants::wordlists::{Puzzle, WordBank};
    ///
    /// let bank = WordBank::embedded();
    /// let count = bank.puzzle_count(GameMode::Classic);
    ///
    /// assert!(matches!(bank.puzzle(GameMode::Classic, 1), Some(Puzzle::SingleWord(_))));
    /// assert_eq!(bank.puzzle(GameMode::Classic, 1), bank.puzzle(GameMode::Classic, count + 1));
    /// ```
    #[must_use]
    pub fn puzzle(&self, mode: GameMode, number: usize) -> Option<Puzzle> {
        let count = self.puzzle_count(mode);
        if count == 0 {
            return None;
        }
        let index = (number % count + count - 1) % count;

        Some(match mode {
            GameMode::Waffle => Puzzle::Grid(GridPuzzle {
                seed: (index + 1) as u64,
            }),
            GameMode::Double | GameMode::Crosswordle => {
                Puzzle::DualWord(self.pairs(mode)[index].clone())
            }
            _ => Puzzle::SingleWord(self.answers(mode)[index].clone()),
        })
    }

    /// A random puzzle for a mode
    pub fn random_puzzle<R: Rng + ?Sized>(&self, mode: GameMode, rng: &mut R) -> Option<Puzzle> {
        let count = self.puzzle_count(mode);
        if count == 0 {
            return None;
        }
        if mode == GameMode::Waffle {
            return Some(Puzzle::Grid(GridPuzzle { seed: rng.random() }));
        }
        self.puzzle(mode, rng.random_range(1..=count))
    }

    /// Five-letter words for the waffle generator
    #[must_use]
    pub fn waffle_pool(&self) -> &[Word] {
        &self.dictionary_five
    }

    /// Dictionary of every word the bank knows
    #[must_use]
    pub fn dictionary(&self) -> WordSetDictionary {
        let mut dictionary = WordSetDictionary::new(&self.dictionary_four);
        dictionary.extend(&self.dictionary_five);
        for list in [&self.classic, &self.speed, &self.hard, &self.chain, &self.backwards] {
            dictionary.extend(list);
        }
        for pair in self.double.iter().chain(&self.crosswordle) {
            dictionary.extend([&pair.horizontal, &pair.vertical]);
        }
        // Backwards answers are typed reversed
        dictionary.extend(&self.backwards.iter().map(Word::reversed).collect::<Vec<_>>());
        dictionary
    }
}
