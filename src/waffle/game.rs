//! Waffle session
//!
//! `Unsolved` moves to `Solved` when a swap completes the grid, or to
//! `OutOfSwaps` when the budget hits zero first. Both are terminal.

use super::generator::GeneratedWaffle;
use super::grid::{CellState, Position, WaffleGrid};
use log::{debug, info};

/// Swaps available at the start of a game
pub const MAX_SWAPS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaffleStatus {
    Unsolved,
    Solved,
    OutOfSwaps,
}

/// Result of a swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    Swapped,
    /// Illegal cells, same cell, or the game is over; no swap consumed
    Ignored,
}

/// Result of clicking a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected(Position),
    Deselected,
    Swapped,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct WaffleGame {
    solution: WaffleGrid,
    grid: WaffleGrid,
    swaps_left: u32,
    status: WaffleStatus,
    selected: Option<Position>,
}

impl WaffleGame {
    #[must_use]
    pub fn new(waffle: GeneratedWaffle) -> Self {
        Self::from_grids(waffle.solution, waffle.puzzle)
    }

    /// Start from an explicit solution and starting grid
    #[must_use]
    pub fn from_grids(solution: WaffleGrid, grid: WaffleGrid) -> Self {
        let status = if grid.matches(&solution) {
            WaffleStatus::Solved
        } else {
            WaffleStatus::Unsolved
        };
        Self {
            solution,
            grid,
            swaps_left: MAX_SWAPS,
            status,
            selected: None,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &WaffleGrid {
        &self.grid
    }

    #[must_use]
    pub fn solution(&self) -> &WaffleGrid {
        &self.solution
    }

    #[must_use]
    pub fn status(&self) -> WaffleStatus {
        self.status
    }

    #[must_use]
    pub fn swaps_left(&self) -> u32 {
        self.swaps_left
    }

    #[must_use]
    pub fn swaps_used(&self) -> u32 {
        MAX_SWAPS - self.swaps_left
    }

    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != WaffleStatus::Unsolved
    }

    #[must_use]
    pub fn cell_state(&self, pos: Position) -> CellState {
        self.grid.cell_state(pos, &self.solution)
    }

    /// Swap two cells, consuming one swap if the request is legal
    ///
    /// Every legal swap costs one, whether or not it helps.
    pub fn swap(&mut self, a: Position, b: Position) -> SwapOutcome {
        if self.is_over() {
            return SwapOutcome::Ignored;
        }
        if let Err(reason) = self.grid.swap(a, b) {
            debug!("ignored swap {a} <-> {b}: {reason}");
            return SwapOutcome::Ignored;
        }

        self.swaps_left -= 1;
        debug!("swapped {a} <-> {b}, {} left", self.swaps_left);

        if self.grid.matches(&self.solution) {
            self.status = WaffleStatus::Solved;
            info!("waffle solved with {} swaps left", self.swaps_left);
        } else if self.swaps_left == 0 {
            self.status = WaffleStatus::OutOfSwaps;
            info!("waffle out of swaps");
        }
        SwapOutcome::Swapped
    }

    /// Click-driven flow: first click selects, second click on the same
    /// cell deselects, second click elsewhere swaps
    pub fn select(&mut self, pos: Position) -> Selection {
        let movable = self.grid.letter(pos).is_some() && !self.grid.is_fixed(pos);
        if self.is_over() || !movable {
            return Selection::Ignored;
        }

        match self.selected.take() {
            None => {
                self.selected = Some(pos);
                Selection::Selected(pos)
            }
            Some(first) if first == pos => Selection::Deselected,
            Some(first) => match self.swap(first, pos) {
                SwapOutcome::Swapped => Selection::Swapped,
                SwapOutcome::Ignored => Selection::Ignored,
            },
        }
    }
}
