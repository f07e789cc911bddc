//! Daily command
//!
//! Lists today's puzzle and the previous week for a mode.

use crate::daily::{DailyPuzzle, HistoryEntry, PuzzleHistory, available_puzzles};
use crate::session::GameMode;
use crate::wordlists::WordBank;
use chrono::NaiveDate;

/// The daily picker for one mode
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub mode: GameMode,
    pub total: usize,
    pub current: DailyPuzzle,
    pub entries: Vec<HistoryEntry>,
}

/// Build the picker for `mode` as of `today`
#[must_use]
pub fn daily_report(
    bank: &WordBank,
    mode: GameMode,
    today: NaiveDate,
    history: &dyn PuzzleHistory,
) -> DailyReport {
    let total = bank.puzzle_count(mode);
    DailyReport {
        mode,
        total,
        current: history.current_puzzle(today, total),
        entries: available_puzzles(today, total, history),
    }
}
