//! Stress command
//!
//! Generates many waffles in parallel and checks each one: the scrambled
//! grid must hold the solution's letters with every fixed cell in place,
//! and all six solution words must come from the pool.

use crate::core::Word;
use crate::waffle::{GeneratedWaffle, WORDS_PER_AXIS, WaffleGame, WaffleGenerator, WaffleGrid};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// A seed whose waffle failed a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressFailure {
    pub seed: u64,
    pub reason: String,
}

/// Statistics from a stress run
#[derive(Debug, Clone)]
pub struct StressReport {
    pub requested: usize,
    pub failures: Vec<StressFailure>,
    pub duration: Duration,
    pub waffles_per_second: f64,
}

impl StressReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.requested - self.failures.len()
    }
}

/// Check one generated waffle against the pool it came from
///
/// # Errors
///
/// Returns a description of the first broken property.
pub fn verify_waffle(waffle: &GeneratedWaffle, pool: &FxHashSet<&Word>) -> Result<(), String> {
    if waffle.puzzle.letter_counts() != waffle.solution.letter_counts() {
        return Err("scrambled letters differ from the solution".to_string());
    }

    for pos in waffle.solution.fixed_positions() {
        if !waffle.puzzle.is_fixed(pos) || waffle.puzzle.letter(pos) != waffle.solution.letter(pos)
        {
            return Err(format!("fixed cell {pos} moved"));
        }
    }

    let words: Vec<&Word> = waffle.horizontal.iter().chain(&waffle.vertical).collect();
    if let Some(word) = words.iter().find(|w| !pool.contains(*w)) {
        return Err(format!("{word} is not in the pool"));
    }
    if words.iter().collect::<FxHashSet<_>>().len() != 2 * WORDS_PER_AXIS {
        return Err("solution repeats a word".to_string());
    }

    let rebuilt = WaffleGrid::from_words(&waffle.horizontal, &waffle.vertical)
        .map_err(|e| e.to_string())?;
    if rebuilt != waffle.solution {
        return Err("solution grid does not match its words".to_string());
    }

    let game = WaffleGame::from_grids(waffle.solution.clone(), waffle.solution.clone());
    if !game.is_over() {
        return Err("solution is not recognised as solved".to_string());
    }
    Ok(())
}

fn progress_bar(count: usize) -> ProgressBar {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
        )
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );
    pb
}

/// Generate `count` waffles from seeds `base_seed..` and verify each
#[must_use]
pub fn run_stress(pool: &[Word], count: usize, base_seed: u64) -> StressReport {
    let generator = WaffleGenerator::new(pool);
    let pool_set: FxHashSet<&Word> = pool.iter().collect();
    let pb = progress_bar(count);

    let start = Instant::now();
    let mut failures: Vec<StressFailure> = (0..count)
        .into_par_iter()
        .progress_with(pb.clone())
        .filter_map(|i| {
            let seed = base_seed.wrapping_add(i as u64);
            let outcome = generator
                .generate_with_seed(seed)
                .map_err(|e| e.to_string())
                .and_then(|waffle| verify_waffle(&waffle, &pool_set));
            outcome.err().map(|reason| StressFailure { seed, reason })
        })
        .collect();
    pb.finish_and_clear();

    let duration = start.elapsed();
    failures.sort_by_key(|f| f.seed);
    debug!("stress: {} of {count} waffles failed", failures.len());

    StressReport {
        requested: count,
        failures,
        duration,
        waffles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordBank;

    #[test]
    fn embedded_pool_passes() {
        let bank = WordBank::embedded();
        let report = run_stress(bank.waffle_pool(), 16, 1);
        assert_eq!(report.requested, 16);
        assert!(report.failures.is_empty(), "{:?}", report.failures);
        assert_eq!(report.passed(), 16);
    }

    #[test]
    fn tiny_pool_reports_every_seed() {
        let pool: Vec<Word> = ["about", "there", "range"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let report = run_stress(&pool, 4, 10);
        let seeds: Vec<u64> = report.failures.iter().map(|f| f.seed).collect();
        assert_eq!(seeds, [10, 11, 12, 13]);
    }

    #[test]
    fn foreign_words_are_caught() {
        let pool: Vec<Word> = ["about", "there", "range", "actor", "ocean", "theme"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let waffle = WaffleGenerator::new(&pool).generate_with_seed(5).unwrap();

        let full: FxHashSet<&Word> = pool.iter().collect();
        assert_eq!(verify_waffle(&waffle, &full), Ok(()));

        let partial: FxHashSet<&Word> = pool.iter().skip(1).collect();
        assert!(verify_waffle(&waffle, &partial).is_err());
    }
}
