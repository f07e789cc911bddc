//! Daily puzzle rotation
//!
//! Each date maps to a puzzle number counted from 2023-01-01, wrapping
//! around the size of the mode's puzzle list. Players can go back up to a
//! week; completion is tracked through a [`PuzzleHistory`].

use chrono::{Days, NaiveDate};
use rustc_hash::FxHashSet;
use std::fmt;

/// Days offered in the history, today included
pub const DAYS_TO_KEEP: u64 = 7;

/// First day of the rotation
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("2023-01-01 is a valid date")
}

/// Puzzle number (1-based) for `date` in a rotation of `total` puzzles
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_variants::daily::puzzle_number;
///
/// let day = |d| NaiveDate::from_ymd_opt(2023, 1, d).unwrap();
/// assert_eq!(puzzle_number(day(1), 30), 1);
/// assert_eq!(puzzle_number(day(31), 30), 1);
/// ```
#[must_use]
pub fn puzzle_number(date: NaiveDate, total: usize) -> usize {
    let total = i64::try_from(total.max(1)).unwrap_or(i64::MAX);
    let days = date.signed_duration_since(epoch()).num_days();
    days.rem_euclid(total) as usize + 1
}

/// A puzzle offered for a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub number: usize,
    pub date: NaiveDate,
}

impl fmt::Display for DailyPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.number, format_long(self.date))
    }
}

/// One line of the history picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub puzzle: DailyPuzzle,
    pub completed: bool,
}

/// Long date form, e.g. "March 9, 2024"
#[must_use]
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn within_window(date: NaiveDate, today: NaiveDate) -> bool {
    let age = today.signed_duration_since(date).num_days();
    age >= 0 && age.unsigned_abs() < DAYS_TO_KEEP
}

/// Today's puzzle and the previous six, newest first
#[must_use]
pub fn available_puzzles(
    today: NaiveDate,
    total: usize,
    history: &dyn PuzzleHistory,
) -> Vec<HistoryEntry> {
    (0..DAYS_TO_KEEP)
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| {
            let number = puzzle_number(date, total);
            HistoryEntry {
                puzzle: DailyPuzzle { number, date },
                completed: history.is_completed(number),
            }
        })
        .collect()
}

/// Persistence for completed and selected puzzles
pub trait PuzzleHistory {
    /// Puzzle to show: the loaded one if still in the window, else today's
    fn current_puzzle(&self, today: NaiveDate, total: usize) -> DailyPuzzle;

    fn is_completed(&self, number: usize) -> bool;

    fn mark_completed(&mut self, number: usize);

    /// Select an older puzzle; returns false if `date` is outside the window
    fn load_puzzle(&mut self, puzzle: DailyPuzzle, today: NaiveDate) -> bool;
}

/// History kept for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    completed: FxHashSet<usize>,
    loaded: Option<DailyPuzzle>,
}

impl InMemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

impl PuzzleHistory for InMemoryHistory {
    fn current_puzzle(&self, today: NaiveDate, total: usize) -> DailyPuzzle {
        match self.loaded {
            Some(loaded) if within_window(loaded.date, today) => loaded,
            _ => DailyPuzzle {
                number: puzzle_number(today, total),
                date: today,
            },
        }
    }

    fn is_completed(&self, number: usize) -> bool {
        self.completed.contains(&number)
    }

    fn mark_completed(&mut self, number: usize) {
        self.completed.insert(number);
    }

    fn load_puzzle(&mut self, puzzle: DailyPuzzle, today: NaiveDate) -> bool {
        if within_window(puzzle.date, today) {
            self.loaded = Some(puzzle);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(puzzle_number(date(2023, 1, 1), 12), 1);
        assert_eq!(puzzle_number(date(2023, 1, 12), 12), 12);
        assert_eq!(puzzle_number(date(2023, 1, 13), 12), 1);
        // 365 days into the rotation
        assert_eq!(puzzle_number(date(2024, 1, 1), 30), 365 % 30 + 1);
    }

    #[test]
    fn dates_before_epoch_still_rotate() {
        assert_eq!(puzzle_number(date(2022, 12, 31), 12), 12);
        assert_eq!(puzzle_number(date(2023, 1, 1), 0), 1);
    }

    #[test]
    fn history_lists_seven_days_newest_first() {
        let mut history = InMemoryHistory::new();
        history.mark_completed(puzzle_number(date(2023, 3, 8), 30));

        let entries = available_puzzles(date(2023, 3, 10), 30, &history);
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].puzzle.date, date(2023, 3, 10));
        assert_eq!(entries[6].puzzle.date, date(2023, 3, 4));
        assert!(entries[2].completed);
        assert!(!entries[0].completed);
    }

    #[test]
    fn completing_twice_counts_once() {
        let mut history = InMemoryHistory::new();
        history.mark_completed(4);
        history.mark_completed(4);
        history.mark_completed(9);
        assert_eq!(history.completed_count(), 2);
        assert!(history.is_completed(9));
    }

    #[test]
    fn loaded_puzzle_expires_after_window() {
        let mut history = InMemoryHistory::new();
        let today = date(2023, 3, 10);
        let older = DailyPuzzle {
            number: 5,
            date: date(2023, 3, 5),
        };

        assert!(history.load_puzzle(older, today));
        assert_eq!(history.current_puzzle(today, 30), older);

        let week_later = date(2023, 3, 12);
        assert_eq!(
            history.current_puzzle(week_later, 30).date,
            week_later
        );

        let too_old = DailyPuzzle {
            number: 1,
            date: date(2023, 3, 1),
        };
        assert!(!history.load_puzzle(too_old, today));
    }

    #[test]
    fn long_date_format() {
        assert_eq!(format_long(date(2024, 3, 9)), "March 9, 2024");
    }
}
