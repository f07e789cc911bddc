//! Waffle puzzle generation
//!
//! Finds three horizontal and three vertical words that agree on all nine
//! intersections, then scrambles the twelve movable letters.
//!
//! The search is a randomised backtracking walk:
//! 1. Pick the top row word
//! 2. Pick the three column words starting with its letters 0, 2 and 4
//! 3. Look up middle and bottom row words by the letters the columns put
//!    at their intersections
//!
//! Each candidate examined costs one step; the walk gives up once the step
//! budget is spent.

use super::grid::{GRID_SIZE, Position, WORDS_PER_AXIS, WaffleGrid};
use crate::core::Word;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Candidates examined before giving up
pub const DEFAULT_STEP_BUDGET: usize = 250_000;

/// Minimum pool size: six distinct words
const WORDS_NEEDED: usize = 2 * WORDS_PER_AXIS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Need at least {needed} distinct five-letter words, found {found}")]
    NotEnoughWords { needed: usize, found: usize },
    #[error("No compatible layout found after {steps} steps")]
    NoCompatibleLayout { steps: usize },
}

/// A solved waffle and its scrambled starting position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWaffle {
    pub solution: WaffleGrid,
    pub puzzle: WaffleGrid,
    pub horizontal: [Word; WORDS_PER_AXIS],
    pub vertical: [Word; WORDS_PER_AXIS],
    /// Seed used, when generated reproducibly
    pub seed: Option<u64>,
}

type Key = [u8; WORDS_PER_AXIS];

/// Indexed pool of candidate words
pub struct WaffleGenerator {
    words: Vec<Word>,
    by_first: FxHashMap<u8, Vec<usize>>,
    by_crossings: FxHashMap<Key, Vec<usize>>,
    step_budget: usize,
}

fn crossing_key(word: &Word) -> Key {
    [word.char_at(0), word.char_at(2), word.char_at(4)]
}

impl WaffleGenerator {
    /// Index a pool; words that are not five letters long are skipped
    #[must_use]
    pub fn new<'a, I>(pool: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = pool
            .into_iter()
            .filter(|w| w.len() == GRID_SIZE)
            .filter(|w| seen.insert((*w).clone()))
            .cloned()
            .collect();

        let mut by_first: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        let mut by_crossings: FxHashMap<Key, Vec<usize>> = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            by_first.entry(word.first_letter()).or_default().push(i);
            by_crossings.entry(crossing_key(word)).or_default().push(i);
        }

        Self {
            words,
            by_first,
            by_crossings,
            step_budget: DEFAULT_STEP_BUDGET,
        }
    }

    #[must_use]
    pub fn with_step_budget(mut self, step_budget: usize) -> Self {
        self.step_budget = step_budget;
        self
    }

    /// Number of usable words in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reproducible generation from a seed
    ///
    /// # Errors
    /// See [`WaffleGenerator::generate`].
    pub fn generate_with_seed(&self, seed: u64) -> Result<GeneratedWaffle, GenerateError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut waffle = self.generate(&mut rng)?;
        waffle.seed = Some(seed);
        Ok(waffle)
    }

    /// Generate a solution and a scrambled puzzle
    ///
    /// # Errors
    /// `NotEnoughWords` when the pool has fewer than six words,
    /// `NoCompatibleLayout` when the search exhausts the pool or its step
    /// budget without finding six words that agree on every intersection.
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::Word;
    /// use wordle_variants::waffle::WaffleGenerator;
    ///
    /// let pool: Vec<Word> = ["about", "there", "range", "actor", "ocean", "theme"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let waffle = WaffleGenerator::new(&pool).generate_with_seed(7).unwrap();
    ///
    /// assert_eq!(waffle.puzzle.letter_counts(), waffle.solution.letter_counts());
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedWaffle, GenerateError> {
        if self.words.len() < WORDS_NEEDED {
            return Err(GenerateError::NotEnoughWords {
                needed: WORDS_NEEDED,
                found: self.words.len(),
            });
        }

        let (horizontal, vertical) = self.search(rng)?;
        let solution = WaffleGrid::from_words(&horizontal, &vertical)
            .map_err(|_| GenerateError::NoCompatibleLayout { steps: 0 })?;
        let puzzle = scramble(&solution, rng);

        Ok(GeneratedWaffle {
            solution,
            puzzle,
            horizontal,
            vertical,
            seed: None,
        })
    }

    fn shuffled<R: Rng + ?Sized>(candidates: &[usize], rng: &mut R) -> Vec<usize> {
        let mut order = candidates.to_vec();
        order.shuffle(rng);
        order
    }

    fn column_candidates<R: Rng + ?Sized>(&self, letter: u8, rng: &mut R) -> Vec<usize> {
        self.by_first
            .get(&letter)
            .map(|c| Self::shuffled(c, rng))
            .unwrap_or_default()
    }

    fn row_for<R: Rng + ?Sized>(&self, key: Key, used: &[usize], rng: &mut R) -> Option<usize> {
        let candidates: Vec<usize> = self
            .by_crossings
            .get(&key)?
            .iter()
            .copied()
            .filter(|i| !used.contains(i))
            .collect();
        candidates.choose(rng).copied()
    }

    #[allow(clippy::type_complexity)]
    fn search<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<([Word; WORDS_PER_AXIS], [Word; WORDS_PER_AXIS]), GenerateError> {
        let all: Vec<usize> = (0..self.words.len()).collect();
        let mut steps = 0usize;

        for top in Self::shuffled(&all, rng) {
            let top_word = &self.words[top];
            for left in self.column_candidates(top_word.char_at(0), rng) {
                steps += 1;
                if left == top {
                    continue;
                }
                for middle in self.column_candidates(top_word.char_at(2), rng) {
                    steps += 1;
                    if [top, left].contains(&middle) {
                        continue;
                    }
                    for right in self.column_candidates(top_word.char_at(4), rng) {
                        steps += 1;
                        if steps > self.step_budget {
                            debug!("waffle search gave up after {steps} steps");
                            return Err(GenerateError::NoCompatibleLayout { steps });
                        }
                        if [top, left, middle].contains(&right) {
                            continue;
                        }

                        let columns = [left, middle, right].map(|i| &self.words[i]);
                        let middle_key = columns.map(|w| w.char_at(2));
                        let bottom_key = columns.map(|w| w.char_at(4));

                        let mut used = vec![top, left, middle, right];
                        let Some(middle_row) = self.row_for(middle_key, &used, rng) else {
                            continue;
                        };
                        used.push(middle_row);
                        let Some(bottom_row) = self.row_for(bottom_key, &used, rng) else {
                            continue;
                        };

                        debug!("waffle layout found after {steps} steps");
                        let pick = |i: usize| self.words[i].clone();
                        return Ok((
                            [pick(top), pick(middle_row), pick(bottom_row)],
                            [pick(left), pick(middle), pick(right)],
                        ));
                    }
                }
            }
        }

        Err(GenerateError::NoCompatibleLayout { steps })
    }
}

/// Shuffle the movable letters of `solution` with one Fisher–Yates pass
///
/// Fixed cells and gaps are untouched, so the result always holds the same
/// letters as the solution.
pub fn scramble<R: Rng + ?Sized>(solution: &WaffleGrid, rng: &mut R) -> WaffleGrid {
    let positions: Vec<Position> = solution.movable_positions().collect();
    let mut letters: Vec<u8> = positions
        .iter()
        .filter_map(|&pos| solution.letter(pos))
        .collect();
    letters.shuffle(rng);

    let mut puzzle = solution.clone();
    for (pos, letter) in positions.into_iter().zip(letters) {
        puzzle.set_letter(pos, letter);
    }
    puzzle
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn sample_pool() -> Vec<Word> {
        pool(&["about", "there", "range", "actor", "ocean", "theme"])
    }

    #[test]
    fn finds_the_only_layout() {
        let waffle = WaffleGenerator::new(&sample_pool())
            .generate_with_seed(1)
            .unwrap();
        assert_eq!(waffle.seed, Some(1));

        let mut all: Vec<&str> = waffle
            .horizontal
            .iter()
            .chain(&waffle.vertical)
            .map(Word::text)
            .collect();
        all.sort_unstable();
        assert_eq!(all, ["about", "actor", "ocean", "range", "theme", "there"]);

        let rebuilt = WaffleGrid::from_words(&waffle.horizontal, &waffle.vertical).unwrap();
        assert_eq!(rebuilt, waffle.solution);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let generator = WaffleGenerator::new(&sample_pool());
        assert_eq!(
            generator.generate_with_seed(99).unwrap(),
            generator.generate_with_seed(99).unwrap()
        );
    }

    #[test]
    fn small_pools_are_rejected() {
        let generator = WaffleGenerator::new(&pool(&["about", "there", "range", "fast"]));
        assert_eq!(generator.len(), 3);
        assert_eq!(
            generator.generate_with_seed(0),
            Err(GenerateError::NotEnoughWords { needed: 6, found: 3 })
        );
    }

    #[test]
    fn duplicates_count_once() {
        let generator = WaffleGenerator::new(&pool(&["about", "about", "there"]));
        assert_eq!(generator.len(), 2);
    }

    #[test]
    fn incompatible_pool_fails() {
        let generator = WaffleGenerator::new(&pool(&[
            "aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee", "fffff",
        ]));
        assert!(matches!(
            generator.generate_with_seed(3),
            Err(GenerateError::NoCompatibleLayout { .. })
        ));
    }

    #[test]
    fn step_budget_is_honoured() {
        let generator = WaffleGenerator::new(&pool(&[
            "aaaaa", "aabaa", "aacaa", "aadaa", "aaeaa", "aafaa",
        ]))
        .with_step_budget(10);
        assert!(matches!(
            generator.generate_with_seed(3),
            Err(GenerateError::NoCompatibleLayout { steps }) if steps > 10
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn scramble_conserves_letters_and_fixed_cells(seed in any::<u64>()) {
            let waffle = WaffleGenerator::new(&sample_pool())
                .generate_with_seed(seed)
                .unwrap();

            prop_assert_eq!(waffle.puzzle.letter_counts(), waffle.solution.letter_counts());
            for pos in waffle.solution.fixed_positions() {
                prop_assert!(waffle.puzzle.is_fixed(pos));
                prop_assert_eq!(waffle.puzzle.letter(pos), waffle.solution.letter(pos));
            }
            for pos in waffle.solution.positions() {
                prop_assert!(waffle.puzzle.letter(pos).is_some());
            }
        }
    }
}
