//! Empty-cell selection strategies.
//!
//! The search engine branches on one empty cell per recursion level; which
//! cell is chosen is a pluggable capability with two implementations, the
//! naive row-major scan and the Minimum-Remaining-Value heuristic.

use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Which selection strategy the search engine should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// Plain backtracking: branch on the first empty cell found.
    Naive,
    /// Backtracking with the Minimum-Remaining-Value heuristic.
    Mrv,
}

impl SolveMode {
    /// Label used in menus and in the result log.
    pub fn label(&self) -> &'static str {
        match self {
            SolveMode::Naive => "Naive",
            SolveMode::Mrv => "BT + MRV",
        }
    }

    /// The selector implementing this mode.
    pub fn selector(&self) -> &'static dyn CellSelector {
        match self {
            SolveMode::Naive => &NaiveSelector,
            SolveMode::Mrv => &MrvSelector,
        }
    }
}

impl std::fmt::Display for SolveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks the next empty cell to branch on, or `None` when the grid is full.
pub trait CellSelector {
    fn next_cell(&self, grid: &Grid) -> Option<Position>;
}

/// Row-major scan, first empty cell wins.
pub struct NaiveSelector;

impl CellSelector for NaiveSelector {
    fn next_cell(&self, grid: &Grid) -> Option<Position> {
        Position::all().find(|&pos| grid.is_empty_cell(pos))
    }
}

/// Minimum-Remaining-Value heuristic: the empty cell with the fewest legal
/// candidate digits. Ties go to the first cell encountered in row-major
/// order. A cell with exactly one candidate is returned immediately since no
/// cell can do better.
pub struct MrvSelector;

impl CellSelector for MrvSelector {
    fn next_cell(&self, grid: &Grid) -> Option<Position> {
        let mut best: Option<Position> = None;
        let mut min_options = 10;
        for pos in Position::all() {
            if !grid.is_empty_cell(pos) {
                continue;
            }
            let options = grid.candidate_count(pos);
            if options < min_options {
                min_options = options;
                best = Some(pos);
                if min_options == 1 {
                    return best;
                }
            }
        }
        best
    }
}
