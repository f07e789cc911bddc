//! Word lists and puzzles for every mode
//!
//! Lists are embedded at build time; [`WordBank`] turns them into checked
//! `Word`s once and resolves puzzle numbers to [`Puzzle`]s.

mod bank;
mod embedded;
pub mod loader;
mod puzzles;

pub use bank::{WAFFLE_ROTATION, WordBank};
pub use embedded::{
    BACKWARDS, BACKWARDS_COUNT, CHAIN, CHAIN_COUNT, CLASSIC, CLASSIC_COUNT, CROSSWORDLE_PUZZLES,
    DICTIONARY_FIVE, DICTIONARY_FIVE_COUNT, DICTIONARY_FOUR, DICTIONARY_FOUR_COUNT, DOUBLE_PAIRS,
    HARD, HARD_COUNT, SPEED, SPEED_COUNT,
};
pub use puzzles::{
    CommonLetter, FALLBACK_INTERSECTION, GridPuzzle, Puzzle, PuzzleDefinition, PuzzleError,
    validate_definition,
};
