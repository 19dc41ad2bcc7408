//! Backtracking Sudoku engine.
//!
//! Solves classic 9x9 puzzles by exhaustive constraint-satisfaction search
//! (naive or MRV-guided cell selection), counts solutions to certify that a
//! generated puzzle is uniquely solvable, and runs the acceptance loop that
//! retries generation until a certified puzzle comes out.

mod accept;
mod generator;
mod grid;
mod record;
mod selector;
mod solver;
mod uniqueness;

pub use accept::{
    generate_valid_puzzle, AcceptanceConfig, AcceptedPuzzle, AcceptError, MAX_SEED,
};
pub use generator::{BacktrackGenerator, GenerateError, PuzzleSource};
pub use grid::{Grid, Position, BOX_SIZE, CELL_COUNT, GRID_SIZE};
pub use record::SolveRecord;
pub use selector::{CellSelector, MrvSelector, NaiveSelector, SolveMode};
pub use solver::{SolveOutcome, Solver, StepEvent, StepObserver};
pub use uniqueness::{
    count_solutions, has_unique_solution, likely_unique, DEFAULT_BLANK_THRESHOLD, SOLUTION_LIMIT,
};

use serde::{Deserialize, Serialize};

/// Difficulty preset, mapped to the fraction of cells the generator blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Fraction of the 81 cells the generator leaves blank.
    pub fn blank_ratio(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.4,
            Difficulty::Hard => 0.6,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("Easy"),
            Difficulty::Medium => f.write_str("Medium"),
            Difficulty::Hard => f.write_str("Hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ratios() {
        assert_eq!(Difficulty::Easy.blank_ratio(), 0.3);
        assert_eq!(Difficulty::Medium.blank_ratio(), 0.4);
        assert_eq!(Difficulty::Hard.blank_ratio(), 0.6);
    }

    #[test]
    fn test_difficulty_parse_round_trip() {
        for level in Difficulty::ALL {
            assert_eq!(level.to_string().parse::<Difficulty>(), Ok(level));
        }
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
