//! Waffle command
//!
//! Generates a waffle from the embedded pool and plays it with typed swaps.

use super::input::{get_user_input, is_quit};
use crate::output::print_waffle;
use crate::waffle::{
    GenerateError, GeneratedWaffle, Position, Selection, SwapOutcome, WaffleGame, WaffleGenerator,
    WaffleStatus,
};
use crate::wordlists::{GridPuzzle, WordBank};
use anyhow::Result;

/// Generate the waffle for a grid puzzle
///
/// # Errors
///
/// Returns an error if the word pool cannot produce a layout.
pub fn new_waffle(bank: &WordBank, puzzle: GridPuzzle) -> Result<GeneratedWaffle, GenerateError> {
    WaffleGenerator::new(bank.waffle_pool()).generate_with_seed(puzzle.seed)
}

fn parse_cell(row: &str, col: &str) -> Option<Position> {
    let row: usize = row.parse().ok()?;
    let col: usize = col.parse().ok()?;
    let pos = Position::new(row.checked_sub(1)?, col.checked_sub(1)?);
    pos.in_bounds().then_some(pos)
}

/// Parse `"r c"` (select) or `"r c r c"` (swap), 1-based
#[must_use]
pub fn parse_cells(input: &str) -> Option<Vec<Position>> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [r, c] => Some(vec![parse_cell(r, c)?]),
        [r1, c1, r2, c2] => Some(vec![parse_cell(r1, c1)?, parse_cell(r2, c2)?]),
        _ => None,
    }
}

/// Play a waffle until it is solved, out of swaps, or the player quits
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_waffle(game: &mut WaffleGame) -> Result<WaffleStatus> {
    println!("Swap letters to rebuild three words across and three down.");
    println!("Type 'r c r c' to swap two cells, or 'r c' to pick cells one at a time.\n");

    while !game.is_over() {
        print_waffle(game);

        let Some(input) = get_user_input("Swap")? else {
            break;
        };
        if is_quit(&input) {
            break;
        }

        match parse_cells(&input).as_deref() {
            Some(&[a, b]) => {
                if game.swap(a, b) == SwapOutcome::Ignored {
                    println!("❌ Those cells cannot be swapped\n");
                }
            }
            Some(&[pos]) => match game.select(pos) {
                Selection::Selected(pos) => println!("Selected {pos}"),
                Selection::Deselected => println!("Selection cleared"),
                Selection::Swapped => {}
                Selection::Ignored => println!("❌ That cell cannot be moved\n"),
            },
            _ => println!("❌ Enter cells as row and column numbers from 1 to 5\n"),
        }
    }

    print_waffle(game);
    Ok(game.status())
}
