//! The 9x9 grid and its placement rules.

use serde::{Deserialize, Serialize};

/// Side length of the grid.
pub const GRID_SIZE: usize = 9;
/// Side length of a box.
pub const BOX_SIZE: usize = 3;
/// Total cell count.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell coordinate on the 9x9 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position. Panics on out-of-range coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "position out of range");
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position { row, col }))
    }

    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position {
            row: self.row / BOX_SIZE * BOX_SIZE,
            col: self.col / BOX_SIZE * BOX_SIZE,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 9x9 Sudoku grid. Cells hold `1..=9`, with `0` marking an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid from row-major cell values.
    pub fn from_rows(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Parse a grid from an 81-character string, row-major.
    /// `1`-`9` are values; `0`, `.` and `_` are empty cells.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::new();
        let mut positions = Position::all();
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let pos = positions.next()?;
            match ch {
                '0' | '.' | '_' => {}
                '1'..='9' => grid.cells[pos.row][pos.col] = ch as u8 - b'0',
                _ => return None,
            }
            count += 1;
        }
        if count == CELL_COUNT {
            Some(grid)
        } else {
            None
        }
    }

    /// Format as an 81-character string with `.` for empty cells.
    pub fn to_string_compact(&self) -> String {
        Position::all()
            .map(|pos| match self.get(pos) {
                0 => '.',
                v => (b'0' + v) as char,
            })
            .collect()
    }

    /// Value at `pos` (`0` = empty).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Place `digit` at `pos`.
    pub fn set(&mut self, pos: Position, digit: u8) {
        debug_assert!((1..=9).contains(&digit));
        self.cells[pos.row][pos.col] = digit;
    }

    /// Reset `pos` to empty.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Whether the cell at `pos` is empty.
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == 0
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&value| value == 0)
            .count()
    }

    /// Whether every cell is filled.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    /// Check whether `digit` may legally be placed at `pos`: it must not
    /// already occur in the row, the column, or the 3x3 box of `pos`.
    /// Pure with respect to the grid.
    pub fn is_valid(&self, digit: u8, pos: Position) -> bool {
        if self.cells[pos.row].contains(&digit) {
            return false;
        }
        if (0..GRID_SIZE).any(|row| self.cells[row][pos.col] == digit) {
            return false;
        }
        let origin = pos.box_origin();
        for row in origin.row..origin.row + BOX_SIZE {
            for col in origin.col..origin.col + BOX_SIZE {
                if self.cells[row][col] == digit {
                    return false;
                }
            }
        }
        true
    }

    /// Number of digits that may legally be placed at `pos`.
    pub fn candidate_count(&self, pos: Position) -> usize {
        (1..=9).filter(|&digit| self.is_valid(digit, pos)).count()
    }

    /// Whether every filled row, column and box holds pairwise-distinct
    /// digits. Empty cells are ignored.
    pub fn is_consistent(&self) -> bool {
        for pos in Position::all() {
            let digit = self.get(pos);
            if digit == 0 {
                continue;
            }
            // is_valid looks at the whole row/col/box, so mask the cell out
            // before re-checking its own digit.
            let mut probe = *self;
            probe.clear(pos);
            if !probe.is_valid(digit, pos) {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row % BOX_SIZE == 0 && row != 0 {
                writeln!(f, "{}", "-".repeat(21))?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col % BOX_SIZE == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                match value {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
