//! Candidate-puzzle generation.
//!
//! The acceptance loop only talks to [`PuzzleSource`]; the bundled
//! [`BacktrackGenerator`] is one implementation of it. Box size is fixed at
//! 3, so a source takes just a seed and the target blank ratio.

use crate::grid::{Grid, Position, BOX_SIZE, CELL_COUNT};
use crate::selector::SolveMode;
use crate::solver::Solver;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

/// Generation failure. The acceptance loop treats any of these as a spent
/// attempt rather than aborting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("blank ratio {0} is outside (0, 1]")]
    InvalidRatio(f64),
    #[error("could not complete a full grid from the seeded boxes")]
    Incomplete,
}

/// Produces a candidate 9x9 grid from a seed and a target blank ratio.
/// Implementations may fail; the caller decides whether to retry.
pub trait PuzzleSource {
    fn generate(&mut self, seed: u32, blank_ratio: f64) -> Result<Grid, GenerateError>;
}

/// Default puzzle source: fill the three diagonal boxes with shuffled
/// digits (they share no row, column or box, so any fill is consistent),
/// complete the grid with the search engine, then blank a seed-determined
/// selection of `round(81 * blank_ratio)` cells.
///
/// Fully deterministic per seed.
pub struct BacktrackGenerator;

impl PuzzleSource for BacktrackGenerator {
    fn generate(&mut self, seed: u32, blank_ratio: f64) -> Result<Grid, GenerateError> {
        if !(blank_ratio > 0.0 && blank_ratio <= 1.0) {
            return Err(GenerateError::InvalidRatio(blank_ratio));
        }
        let mut rng = StdRng::seed_from_u64(u64::from(seed));

        let mut grid = Grid::new();
        for origin in (0..9).step_by(BOX_SIZE) {
            fill_box(&mut grid, origin, origin, &mut rng);
        }
        if !Solver::new().solve(&mut grid, SolveMode::Mrv).solved {
            return Err(GenerateError::Incomplete);
        }

        let blanks = (CELL_COUNT as f64 * blank_ratio).round() as usize;
        let mut positions: Vec<Position> = Position::all().collect();
        positions.shuffle(&mut rng);
        for pos in positions.into_iter().take(blanks) {
            grid.clear(pos);
        }
        Ok(grid)
    }
}

fn fill_box(grid: &mut Grid, start_row: usize, start_col: usize, rng: &mut StdRng) {
    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    let mut idx = 0;
    for row in start_row..start_row + BOX_SIZE {
        for col in start_col..start_col + BOX_SIZE {
            grid.set(Position::new(row, col), digits[idx]);
            idx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_per_seed() {
        let a = BacktrackGenerator.generate(12345, 0.3).unwrap();
        let b = BacktrackGenerator.generate(12345, 0.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = BacktrackGenerator.generate(1, 0.3).unwrap();
        let b = BacktrackGenerator.generate(2, 0.3).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_blank_count_matches_ratio() {
        for (ratio, expected) in [(0.3, 24), (0.4, 32), (0.6, 49)] {
            let grid = BacktrackGenerator.generate(42, ratio).unwrap();
            assert_eq!(grid.empty_count(), expected, "ratio {}", ratio);
        }
    }

    #[test]
    fn test_generated_grid_is_consistent() {
        for seed in [0, 7, 99_999] {
            let grid = BacktrackGenerator.generate(seed, 0.4).unwrap();
            assert!(grid.is_consistent(), "seed {}", seed);
        }
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        assert!(matches!(
            BacktrackGenerator.generate(0, 0.0),
            Err(GenerateError::InvalidRatio(_))
        ));
        assert!(matches!(
            BacktrackGenerator.generate(0, 1.5),
            Err(GenerateError::InvalidRatio(_))
        ));
        assert!(BacktrackGenerator.generate(0, 1.0).is_ok());
    }
}
