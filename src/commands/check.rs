//! Puzzle check command
//!
//! Runs the authoring checks over every embedded word pair.

use crate::session::GameMode;
use crate::wordlists::{
    CROSSWORDLE_PUZZLES, CommonLetter, DOUBLE_PAIRS, PuzzleDefinition, PuzzleError,
    validate_definition,
};

/// Outcome of checking one embedded pair
#[derive(Debug, Clone)]
pub struct PuzzleCheck {
    pub mode: GameMode,
    pub id: u32,
    pub label: String,
    pub outcome: Result<Vec<CommonLetter>, PuzzleError>,
}

impl PuzzleCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Every check, in list order
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub checks: Vec<PuzzleCheck>,
}

impl CheckReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &PuzzleCheck> {
        self.checks.iter().filter(|c| !c.passed())
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(PuzzleCheck::passed)
    }
}

fn label(horizontal: &str, vertical: &str) -> String {
    format!("{} / {}", horizontal.to_uppercase(), vertical.to_uppercase())
}

fn check(
    mode: GameMode,
    id: u32,
    label: String,
    puzzle: Result<PuzzleDefinition, PuzzleError>,
) -> PuzzleCheck {
    let word_length = mode.config().word_length;
    let outcome = puzzle.and_then(|puzzle| match validate_definition(&puzzle, word_length) {
        // Double boards never cross, so sharing no letter is fine
        Err(PuzzleError::NoCommonLetter { .. }) if mode == GameMode::Double => Ok(Vec::new()),
        other => other,
    });
    PuzzleCheck {
        mode,
        id,
        label,
        outcome,
    }
}

/// Check the embedded double pairs and crosswordle puzzles
#[must_use]
pub fn check_puzzles() -> CheckReport {
    let double = DOUBLE_PAIRS
        .iter()
        .zip(1u32..)
        .map(|(&(first, second, relation), id)| {
            check(
                GameMode::Double,
                id,
                label(first, second),
                PuzzleDefinition::new(id, first, second, relation),
            )
        });

    let crosswordle = CROSSWORDLE_PUZZLES.iter().zip(1u32..).map(|(record, line)| {
        let puzzle = PuzzleDefinition::from_record(record);
        let id = puzzle.as_ref().map_or(line, |p| p.id);
        check(GameMode::Crosswordle, id, label(record.1, record.2), puzzle)
    });

    CheckReport {
        checks: double.chain(crosswordle).collect(),
    }
}
