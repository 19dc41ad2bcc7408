//! Board rendering.
//!
//! Color rules: the last cell touched by the solver is red, digits the
//! solver filled in are green, original givens stay plain. Colors are only
//! emitted when the stream is an interactive terminal.

use crossterm::style::Stylize;
use std::io::IsTerminal;
use sudoku_engine::{Grid, Position, BOX_SIZE, GRID_SIZE};

/// Whether stdout can take colored output.
pub fn supports_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Render `grid` with 3x3 separators. `initial` is the untouched puzzle
/// snapshot used to tell solver fills from givens; `last` marks the cell the
/// solver touched most recently.
pub fn format_board(grid: &Grid, last: Option<Position>, initial: &Grid, color: bool) -> String {
    let mut out = String::new();
    for row in 0..GRID_SIZE {
        if row % BOX_SIZE == 0 && row != 0 {
            out.push_str(&"-".repeat(21));
            out.push('\n');
        }
        for col in 0..GRID_SIZE {
            if col % BOX_SIZE == 0 && col != 0 {
                out.push_str("| ");
            }
            let pos = Position::new(row, col);
            let value = grid.get(pos);
            let symbol = match value {
                0 => ".".to_string(),
                v => v.to_string(),
            };
            if !color {
                out.push_str(&symbol);
            } else if last == Some(pos) {
                out.push_str(&symbol.red().to_string());
            } else if value != 0 && initial.is_empty_cell(pos) {
                out.push_str(&symbol.green().to_string());
            } else {
                out.push_str(&symbol);
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_plain_board_layout() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let board = format_board(&grid, None, &grid, false);
        let lines: Vec<&str> = board.lines().collect();
        // 9 digit rows plus 2 separators.
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "5 3 . | . 7 . | . . . ");
        assert_eq!(lines[3], "-".repeat(21));
        assert!(!board.contains('\u{1b}'), "plain mode must not emit escapes");
    }

    #[test]
    fn test_solver_fills_are_colored() {
        let initial = Grid::from_string(PUZZLE).unwrap();
        let mut solved = initial;
        let pos = Position::new(0, 2);
        solved.set(pos, 4);
        let board = format_board(&solved, None, &initial, true);
        assert!(board.contains('\u{1b}'), "expected color escapes");
    }

    #[test]
    fn test_last_cell_marked_in_color_mode_only() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let plain = format_board(&grid, Some(Position::new(0, 0)), &grid, false);
        assert!(!plain.contains('\u{1b}'));
        let colored = format_board(&grid, Some(Position::new(0, 0)), &grid, true);
        assert!(colored.contains('\u{1b}'));
    }
}
