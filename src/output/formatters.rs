//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus, Word};
use crate::keyboard::KeyboardState;
use crate::waffle::{CellState, GRID_SIZE, Position, WaffleGrid};
use colored::{ColoredString, Colorize};

/// Keyboard rows as printed under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A letter tile coloured by its status
#[must_use]
pub fn status_tile(letter: u8, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::OtherWord) => text.black().on_truecolor(255, 165, 0).bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// One scored guess as a row of coloured tiles
#[must_use]
pub fn guess_row(word: &Word, result: &GuessResult) -> String {
    word.letters()
        .iter()
        .zip(result.iter())
        .map(|(&letter, status)| status_tile(letter, Some(status)).to_string())
        .collect()
}

/// Placeholder row for an unused attempt
#[must_use]
pub fn empty_row(length: usize) -> String {
    " · ".repeat(length).bright_black().to_string()
}

/// The three keyboard rows, indented like a real keyboard
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| status_tile(letter, keyboard.status(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// A waffle cell coloured by how close it is to the solution
#[must_use]
pub fn waffle_tile(letter: Option<u8>, state: CellState, selected: bool) -> ColoredString {
    let Some(letter) = letter else {
        return "   ".normal();
    };
    let text = if selected {
        format!("[{}]", char::from(letter.to_ascii_uppercase()))
    } else {
        format!(" {} ", char::from(letter.to_ascii_uppercase()))
    };
    match state {
        CellState::Fixed | CellState::Correct => text.black().on_green().bold(),
        CellState::Misplaced => text.black().on_yellow().bold(),
        CellState::Wrong => text.white().on_bright_black(),
        CellState::Empty => text.normal(),
    }
}

/// Waffle grid with 1-based row and column labels
#[must_use]
pub fn waffle_rows(
    grid: &WaffleGrid,
    solution: &WaffleGrid,
    selected: Option<Position>,
) -> Vec<String> {
    let header: String = (1..=GRID_SIZE).map(|c| format!(" {c} ")).collect();
    let mut rows = vec![format!("   {}", header.bright_black())];

    for row in 0..GRID_SIZE {
        let cells: String = (0..GRID_SIZE)
            .map(|col| {
                let pos = Position::new(row, col);
                waffle_tile(
                    grid.letter(pos),
                    grid.cell_state(pos, solution),
                    selected == Some(pos),
                )
                .to_string()
            })
            .collect();
        rows.push(format!(" {} {cells}", (row + 1).to_string().bright_black()));
    }
    rows
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
