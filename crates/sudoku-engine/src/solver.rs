//! Backtracking search engine.

use crate::grid::{Grid, Position};
use crate::selector::{CellSelector, SolveMode};
use std::time::{Duration, Instant};

/// What just happened in the search, as reported to a [`StepObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Entering a recursion level; no cell has been touched yet.
    Initial,
    /// A digit was tentatively placed at the reported cell.
    Placement,
    /// The placement at the reported cell was undone.
    Backtrack,
}

/// Observer invoked on every search step, used externally for animation.
/// Side-effect-only; it cannot alter the search outcome.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid, last: Option<Position>, event: StepEvent);
}

impl<F: FnMut(&Grid, Option<Position>, StepEvent)> StepObserver for F {
    fn on_step(&mut self, grid: &Grid, last: Option<Position>, event: StepEvent) {
        self(grid, last, event)
    }
}

/// Outcome of a solve run.
#[derive(Debug, Clone, Copy)]
pub struct SolveOutcome {
    /// Whether the grid was completed. `false` means the search exhausted
    /// every assignment without finding a solution; that is a normal
    /// terminal outcome for a contradictory grid, not an error.
    pub solved: bool,
    /// Number of tentative placements, including ones later undone.
    pub steps: u64,
    /// Wall-clock time from invocation to termination.
    pub duration: Duration,
}

/// Stateless backtracking solver; all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve `grid` in place with the given selection strategy.
    pub fn solve(&self, grid: &mut Grid, mode: SolveMode) -> SolveOutcome {
        self.solve_with(grid, mode, None)
    }

    /// Solve `grid` in place, notifying `observer` of every step.
    ///
    /// The grid is mutated during the search; on success it holds a complete
    /// solution, on failure it is restored to its initial state (every
    /// tentative placement has been undone).
    pub fn solve_with(
        &self,
        grid: &mut Grid,
        mode: SolveMode,
        mut observer: Option<&mut dyn StepObserver>,
    ) -> SolveOutcome {
        let start = Instant::now();
        let mut steps = 0u64;
        let solved = solve_recursive(grid, mode.selector(), &mut observer, &mut steps);
        SolveOutcome {
            solved,
            steps,
            duration: start.elapsed(),
        }
    }
}

/// One level of the depth-first search. Picks an empty cell, tries digits
/// `1..=9` ascending, recurses, and undoes the placement on failure.
/// Terminates because every recursion level strictly reduces the number of
/// empty cells or returns.
fn solve_recursive(
    grid: &mut Grid,
    selector: &dyn CellSelector,
    observer: &mut Option<&mut dyn StepObserver>,
    steps: &mut u64,
) -> bool {
    if let Some(obs) = observer.as_deref_mut() {
        obs.on_step(grid, None, StepEvent::Initial);
    }

    let Some(pos) = selector.next_cell(grid) else {
        // No empty cell left: the grid is complete.
        return true;
    };

    for digit in 1..=9 {
        if !grid.is_valid(digit, pos) {
            continue;
        }
        grid.set(pos, digit);
        *steps += 1;
        if let Some(obs) = observer.as_deref_mut() {
            obs.on_step(grid, Some(pos), StepEvent::Placement);
        }

        if solve_recursive(grid, selector, observer, steps) {
            return true;
        }

        grid.clear(pos);
        if let Some(obs) = observer.as_deref_mut() {
            obs.on_step(grid, Some(pos), StepEvent::Backtrack);
        }
    }

    false
}
