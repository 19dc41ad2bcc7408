//! Step-by-step animation of the search.
//!
//! Implements the engine's [`StepObserver`]: every event clears the screen,
//! prints the mode header and a step line, redraws the board and sleeps
//! briefly. Pure display policy; the search outcome is unaffected.

use crate::render::format_board;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::thread;
use std::time::Duration;
use sudoku_engine::{Grid, Position, SolveMode, StepEvent, StepObserver};

pub struct Animator<W: Write> {
    out: W,
    initial: Grid,
    header: String,
    delay: Duration,
    color: bool,
    steps_seen: u64,
    message: String,
}

impl<W: Write> Animator<W> {
    pub fn new(out: W, initial: Grid, mode: SolveMode, delay: Duration, color: bool) -> Self {
        Self {
            out,
            initial,
            header: format!("Mode: {}", mode.label()),
            delay,
            color,
            steps_seen: 0,
            message: String::new(),
        }
    }

    /// Placements seen so far; mirrors the engine's step counter.
    pub fn steps_seen(&self) -> u64 {
        self.steps_seen
    }

    fn draw(&mut self, grid: &Grid, last: Option<Position>) {
        // Display-only: a failed write must not disturb the search.
        let _ = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0));
        let _ = writeln!(self.out, "{}\n{}", self.header, "-".repeat(30));
        if !self.message.is_empty() {
            let _ = writeln!(self.out, "{}", self.message);
        }
        let _ = write!(
            self.out,
            "{}",
            format_board(grid, last, &self.initial, self.color)
        );
        let _ = self.out.flush();
    }
}

impl<W: Write> StepObserver for Animator<W> {
    fn on_step(&mut self, grid: &Grid, last: Option<Position>, event: StepEvent) {
        match (event, last) {
            (StepEvent::Placement, Some(pos)) => {
                self.steps_seen += 1;
                self.message = format!(
                    "Step {}: try {} at {}",
                    self.steps_seen,
                    grid.get(pos),
                    pos
                );
            }
            (StepEvent::Backtrack, Some(pos)) => {
                self.message = format!("Step {}: backtrack from {}", self.steps_seen, pos);
            }
            _ => {}
        }
        self.draw(grid, last);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_engine::Solver;

    #[test]
    fn test_animator_counts_placements() {
        let solved = Grid::from_string(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        )
        .unwrap();
        let mut grid = solved;
        grid.clear(Position::new(0, 0));

        let mut animator = Animator::new(
            Vec::new(),
            grid,
            SolveMode::Naive,
            Duration::ZERO,
            false,
        );
        let outcome = Solver::new().solve_with(&mut grid, SolveMode::Naive, Some(&mut animator));

        assert!(outcome.solved);
        assert_eq!(animator.steps_seen(), outcome.steps);
        let output = String::from_utf8_lossy(&animator.out).into_owned();
        assert!(output.contains("Mode: Naive"));
        assert!(output.contains("Step 1: try 5 at (0, 0)"));
    }

    #[test]
    fn test_animator_reports_backtracks() {
        // A grid that forces at least one backtrack: naive selection tries
        // 1..=9 ascending at (0, 0) of an empty grid, so the first dead end
        // appears deep in the search.
        let mut grid = Grid::new();
        let mut animator =
            Animator::new(Vec::new(), grid, SolveMode::Naive, Duration::ZERO, false);
        let outcome = Solver::new().solve_with(&mut grid, SolveMode::Naive, Some(&mut animator));
        assert!(outcome.solved);
        let output = String::from_utf8_lossy(&animator.out).into_owned();
        assert!(output.contains("backtrack from"));
    }
}
