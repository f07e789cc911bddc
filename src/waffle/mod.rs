//! Waffle: a 5×5 grid of six crossing words solved by swapping letters

mod game;
mod generator;
mod grid;

pub use game::{MAX_SWAPS, Selection, SwapOutcome, WaffleGame, WaffleStatus};
pub use generator::{DEFAULT_STEP_BUDGET, GenerateError, GeneratedWaffle, WaffleGenerator, scramble};
pub use grid::{
    CellState, GRID_SIZE, IllegalSwap, LayoutError, MOVABLE_CELLS, Position, WORDS_PER_AXIS,
    WaffleGrid,
};
