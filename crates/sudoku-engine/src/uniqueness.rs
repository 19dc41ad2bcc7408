//! Uniqueness certification.
//!
//! A puzzle is only presented to the player once it provably has exactly one
//! completion. Counting runs on a private copy of the grid with the MRV
//! selector and a randomized digit order, and unwinds as soon as a second
//! solution is found.

use crate::grid::Grid;
use crate::selector::{CellSelector, MrvSelector};
use rand::seq::SliceRandom;
use rand::Rng;

/// Solutions are only counted up to this bound; a puzzle is unique iff the
/// count is exactly 1.
pub const SOLUTION_LIMIT: usize = 2;

/// Grids with more empty cells than this are overwhelmingly likely to admit
/// multiple solutions. Empirical, not a proven bound.
pub const DEFAULT_BLANK_THRESHOLD: usize = 58;

/// Cheap pre-filter: rejects grids with more than `blank_threshold` empty
/// cells before the full count is attempted. A heuristic short-circuit, not
/// a correctness guarantee.
pub fn likely_unique(grid: &Grid, blank_threshold: usize) -> bool {
    grid.empty_count() <= blank_threshold
}

/// Count the completions of `grid`, stopping once `limit` are found.
///
/// The caller's grid is never mutated. The returned value is exact below
/// `limit`; values at `limit` only mean "at least this many". Digits are
/// tried in a randomized order drawn from `rng` so repeated runs on similar
/// grids do not systematically find the same solution first.
pub fn count_solutions<R: Rng>(grid: &Grid, limit: usize, rng: &mut R) -> usize {
    let mut working = *grid;
    let mut count = 0;
    count_recursive(&mut working, limit, rng, &mut count);
    count
}

/// Whether `grid` has exactly one completion.
pub fn has_unique_solution<R: Rng>(grid: &Grid, rng: &mut R) -> bool {
    count_solutions(grid, SOLUTION_LIMIT, rng) == 1
}

fn count_recursive<R: Rng>(grid: &mut Grid, limit: usize, rng: &mut R, count: &mut usize) {
    if *count >= limit {
        return;
    }

    // MRV keeps the search tree small regardless of how the interactive
    // solve is configured.
    let Some(pos) = MrvSelector.next_cell(grid) else {
        *count += 1;
        return;
    };

    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    for digit in digits {
        if !grid.is_valid(digit, pos) {
            continue;
        }
        grid.set(pos, digit);
        count_recursive(grid, limit, rng, count);
        grid.clear(pos);
        if *count >= limit {
            return;
        }
    }
}
