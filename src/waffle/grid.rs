//! Waffle grid
//!
//! A 5×5 matrix with words on rows 0, 2, 4 and columns 0, 2, 4. Cells where
//! an odd row meets an odd column are gaps. The nine even/even cells are
//! intersections: they belong to one horizontal and one vertical word and
//! are fixed for the whole game. The remaining twelve letters are movable.

use crate::core::{LetterCounts, Word};
use std::fmt;
use thiserror::Error;

/// Side length of the grid, also the length of every word in it
pub const GRID_SIZE: usize = 5;

/// Words per direction
pub const WORDS_PER_AXIS: usize = 3;

/// Letter-holding cells that are not intersections
pub const MOVABLE_CELLS: usize = 12;

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Both indices even: shared by a horizontal and a vertical word
    #[must_use]
    pub const fn is_intersection(self) -> bool {
        self.row % 2 == 0 && self.col % 2 == 0
    }

    /// Both indices odd: never holds a letter
    #[must_use]
    pub const fn is_gap(self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The horizontal and vertical words cannot share a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("\"{0}\" is not {} letters long", GRID_SIZE)]
    WrongLength(String),
    #[error("\"{horizontal}\" and \"{vertical}\" disagree at {position}")]
    Conflict {
        horizontal: String,
        vertical: String,
        position: Position,
    },
}

/// Why a swap request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalSwap {
    #[error("{0} is outside the grid")]
    OutOfBounds(Position),
    #[error("{0} holds no letter")]
    Empty(Position),
    #[error("{0} is fixed")]
    Fixed(Position),
    #[error("A cell cannot be swapped with itself")]
    SameCell,
}

/// Rendering state of one cell relative to the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Fixed,
    Correct,
    /// Wrong here, but its word still needs this letter elsewhere
    Misplaced,
    Wrong,
}

/// Letters of a waffle plus which cells are fixed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaffleGrid {
    cells: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
    fixed: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl WaffleGrid {
    /// Lay out three horizontal and three vertical words
    ///
    /// Horizontal word `i` fills row `2i`, vertical word `j` fills column
    /// `2j`. Every intersection must receive the same letter from both.
    ///
    /// # Errors
    /// `LayoutError::WrongLength` for a word that is not five letters,
    /// `LayoutError::Conflict` when the words disagree at an intersection.
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::Word;
    /// use wordle_variants::waffle::WaffleGrid;
    ///
    /// let words = |list: [&str; 3]| list.map(|w| Word::new(w).unwrap());
    /// let grid = WaffleGrid::from_words(
    ///     &words(["about", "there", "range"]),
    ///     &words(["actor", "ocean", "theme"]),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.column_word(1).as_deref(), Some("ocean"));
    /// ```
    pub fn from_words(
        horizontal: &[Word; WORDS_PER_AXIS],
        vertical: &[Word; WORDS_PER_AXIS],
    ) -> Result<Self, LayoutError> {
        if let Some(word) = horizontal
            .iter()
            .chain(vertical)
            .find(|w| w.len() != GRID_SIZE)
        {
            return Err(LayoutError::WrongLength(word.text().to_string()));
        }

        let mut grid = Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            fixed: [[false; GRID_SIZE]; GRID_SIZE],
        };

        for (i, word) in horizontal.iter().enumerate() {
            let row = 2 * i;
            for (col, &letter) in word.letters().iter().enumerate() {
                grid.cells[row][col] = Some(letter);
            }
        }

        for (j, word) in vertical.iter().enumerate() {
            let col = 2 * j;
            for (row, &letter) in word.letters().iter().enumerate() {
                let cell = &mut grid.cells[row][col];
                match *cell {
                    Some(existing) if existing != letter => {
                        return Err(LayoutError::Conflict {
                            horizontal: horizontal[row / 2].text().to_string(),
                            vertical: word.text().to_string(),
                            position: Position::new(row, col),
                        });
                    }
                    Some(_) => grid.fixed[row][col] = true,
                    None => *cell = Some(letter),
                }
            }
        }

        Ok(grid)
    }

    /// Letter at `pos`, `None` for gaps and out-of-range positions
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<u8> {
        if pos.in_bounds() {
            self.cells[pos.row][pos.col]
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        pos.in_bounds() && self.fixed[pos.row][pos.col]
    }

    /// Every letter-holding cell, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.letter(pos).is_some())
    }

    /// Letter-holding cells a player may swap
    pub fn movable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| !self.is_fixed(pos))
    }

    pub fn fixed_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| self.is_fixed(pos))
    }

    /// Multiset of every letter on the board
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        self.positions().filter_map(|pos| self.letter(pos)).collect()
    }

    /// Check a swap without performing it
    ///
    /// # Errors
    /// Returns the first reason the swap is illegal.
    pub fn check_swap(&self, a: Position, b: Position) -> Result<(), IllegalSwap> {
        if a == b {
            return Err(IllegalSwap::SameCell);
        }
        for pos in [a, b] {
            if !pos.in_bounds() {
                return Err(IllegalSwap::OutOfBounds(pos));
            }
            if self.letter(pos).is_none() {
                return Err(IllegalSwap::Empty(pos));
            }
            if self.is_fixed(pos) {
                return Err(IllegalSwap::Fixed(pos));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn can_swap(&self, a: Position, b: Position) -> bool {
        self.check_swap(a, b).is_ok()
    }

    /// Exchange the letters of two movable cells
    ///
    /// # Errors
    /// Returns `IllegalSwap` and leaves the grid untouched when either cell
    /// is fixed, empty or out of range, or when both are the same cell.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), IllegalSwap> {
        self.check_swap(a, b)?;
        let tmp = self.cells[a.row][a.col];
        self.cells[a.row][a.col] = self.cells[b.row][b.col];
        self.cells[b.row][b.col] = tmp;
        Ok(())
    }

    /// Overwrite a movable cell; used when scrambling
    pub(super) fn set_letter(&mut self, pos: Position, letter: u8) {
        if pos.in_bounds() && !pos.is_gap() && !self.is_fixed(pos) {
            self.cells[pos.row][pos.col] = Some(letter);
        }
    }

    /// Every letter-holding cell equals the solution's
    #[must_use]
    pub fn matches(&self, solution: &Self) -> bool {
        self.cells == solution.cells
    }

    /// Current text of horizontal word `index` (row `2 * index`)
    #[must_use]
    pub fn row_word(&self, index: usize) -> Option<String> {
        if index >= WORDS_PER_AXIS {
            return None;
        }
        let row = 2 * index;
        (0..GRID_SIZE)
            .map(|col| self.letter(Position::new(row, col)).map(char::from))
            .collect()
    }

    /// Current text of vertical word `index` (column `2 * index`)
    #[must_use]
    pub fn column_word(&self, index: usize) -> Option<String> {
        if index >= WORDS_PER_AXIS {
            return None;
        }
        let col = 2 * index;
        (0..GRID_SIZE)
            .map(|row| self.letter(Position::new(row, col)).map(char::from))
            .collect()
    }

    /// Colour of the cell at `pos` compared with `solution`
    ///
    /// A movable cell lies on exactly one word. It is `Misplaced` when that
    /// word still needs its letter somewhere that is not already correct,
    /// with duplicates handed out left to right (top to bottom).
    #[must_use]
    pub fn cell_state(&self, pos: Position, solution: &Self) -> CellState {
        let Some(letter) = self.letter(pos) else {
            return CellState::Empty;
        };
        if self.is_fixed(pos) {
            return CellState::Fixed;
        }
        if solution.letter(pos) == Some(letter) {
            return CellState::Correct;
        }

        let line: Vec<Position> = if pos.row % 2 == 0 {
            (0..GRID_SIZE).map(|col| Position::new(pos.row, col)).collect()
        } else {
            (0..GRID_SIZE).map(|row| Position::new(row, pos.col)).collect()
        };

        let mut needed: LetterCounts = line
            .iter()
            .filter(|&&p| self.letter(p) != solution.letter(p))
            .filter_map(|&p| solution.letter(p))
            .collect();

        for &p in &line {
            let current = self.letter(p);
            if current == solution.letter(p) {
                continue;
            }
            let Some(current) = current else { continue };
            let hit = needed.take(current);
            if p == pos {
                return if hit {
                    CellState::Misplaced
                } else {
                    CellState::Wrong
                };
            }
        }

        CellState::Wrong
    }
}

impl fmt::Display for WaffleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or(' ', |l| char::from(l.to_ascii_uppercase())))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: [&str; 3]) -> [Word; 3] {
        list.map(|w| Word::new(w).unwrap())
    }

    fn sample() -> WaffleGrid {
        WaffleGrid::from_words(
            &words(["about", "there", "range"]),
            &words(["actor", "ocean", "theme"]),
        )
        .unwrap()
    }

    #[test]
    fn layout_fills_words_and_fixes_intersections() {
        let grid = sample();
        assert_eq!(grid.row_word(0).as_deref(), Some("about"));
        assert_eq!(grid.row_word(2).as_deref(), Some("range"));
        assert_eq!(grid.column_word(0).as_deref(), Some("actor"));
        assert_eq!(grid.column_word(2).as_deref(), Some("theme"));
        assert_eq!(grid.row_word(3), None);

        assert_eq!(grid.positions().count(), 21);
        assert_eq!(grid.fixed_positions().count(), 9);
        assert_eq!(grid.movable_positions().count(), MOVABLE_CELLS);
        assert!(grid.fixed_positions().all(Position::is_intersection));
        assert_eq!(grid.letter(Position::new(1, 1)), None);
    }

    #[test]
    fn conflicting_words_are_rejected() {
        let err = WaffleGrid::from_words(
            &words(["about", "there", "range"]),
            &words(["actor", "ocean", "crane"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::Conflict {
                horizontal: "about".to_string(),
                vertical: "crane".to_string(),
                position: Position::new(0, 4),
            }
        );
    }

    #[test]
    fn short_words_are_rejected() {
        let err = WaffleGrid::from_words(
            &words(["abut", "there", "range"]),
            &words(["actor", "ocean", "theme"]),
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::WrongLength("abut".to_string()));
    }

    #[test]
    fn only_movable_cells_swap() {
        let mut grid = sample();
        let a = Position::new(0, 1);
        let b = Position::new(3, 4);

        assert!(grid.swap(a, b).is_ok());
        assert_eq!(grid.letter(a), Some(b'm'));
        assert_eq!(grid.letter(b), Some(b'b'));

        let before = grid.clone();
        assert_eq!(
            grid.swap(a, Position::new(0, 0)),
            Err(IllegalSwap::Fixed(Position::new(0, 0)))
        );
        assert_eq!(
            grid.swap(Position::new(1, 1), a),
            Err(IllegalSwap::Empty(Position::new(1, 1)))
        );
        assert_eq!(
            grid.swap(a, Position::new(5, 0)),
            Err(IllegalSwap::OutOfBounds(Position::new(5, 0)))
        );
        assert_eq!(grid.swap(a, a), Err(IllegalSwap::SameCell));
        assert_eq!(grid, before);
    }

    #[test]
    fn swapping_preserves_letters() {
        let mut grid = sample();
        let counts = grid.letter_counts();
        grid.swap(Position::new(0, 1), Position::new(4, 3)).unwrap();
        grid.swap(Position::new(2, 1), Position::new(1, 0)).unwrap();
        assert_eq!(grid.letter_counts(), counts);
        assert_eq!(counts.total(), 21);
    }

    #[test]
    fn solved_check_needs_every_cell() {
        let solution = sample();
        assert!(solution.clone().matches(&solution));

        let mut changed = solution.clone();
        changed.cells[0][1] = Some(b'z');
        assert!(!changed.matches(&solution));
    }

    #[test]
    fn cell_states() {
        let solution = sample();
        let mut grid = solution.clone();
        // ABOUT becomes AUOBT
        grid.swap(Position::new(0, 1), Position::new(0, 3)).unwrap();

        assert_eq!(grid.cell_state(Position::new(0, 0), &solution), CellState::Fixed);
        assert_eq!(grid.cell_state(Position::new(1, 1), &solution), CellState::Empty);
        assert_eq!(
            grid.cell_state(Position::new(0, 1), &solution),
            CellState::Misplaced
        );
        assert_eq!(
            grid.cell_state(Position::new(2, 1), &solution),
            CellState::Correct
        );

        // Move H out of THEME into ABOUT: nothing in ABOUT needs it
        let mut grid = solution.clone();
        grid.swap(Position::new(0, 1), Position::new(1, 4)).unwrap();
        assert_eq!(grid.cell_state(Position::new(0, 1), &solution), CellState::Wrong);
        assert_eq!(grid.cell_state(Position::new(1, 4), &solution), CellState::Wrong);
    }

    #[test]
    fn display_shows_gaps() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ABOUT");
        assert_eq!(lines[1], "C C H");
        assert_eq!(lines[4], "RANGE");
    }
}
