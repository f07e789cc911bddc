//! Command implementations

pub mod check;
pub mod daily;
mod input;
pub mod play;
pub mod score;
pub mod stress;
pub mod waffle;

pub use check::{CheckReport, PuzzleCheck, check_puzzles};
pub use daily::{DailyReport, daily_report};
pub use play::{Game, PlayOptions, resolve_puzzle, run_play, start_game};
pub use score::{ScoreResult, score_guess};
pub use stress::{StressFailure, StressReport, run_stress, verify_waffle};
pub use waffle::{new_waffle, parse_cells, run_waffle};
