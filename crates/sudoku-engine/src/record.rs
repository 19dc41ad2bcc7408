//! Solve-result record handed to the logging frontend.

use crate::selector::SolveMode;
use crate::solver::SolveOutcome;
use crate::Difficulty;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One row of the result log. Produced here, persisted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRecord {
    /// Unix timestamp (seconds) of record creation.
    pub timestamp: u64,
    /// Difficulty label, e.g. "Easy".
    pub difficulty: String,
    /// Solve-mode label: "Naive" or "BT + MRV".
    pub mode: String,
    /// Tentative placements made by the search.
    pub steps: u64,
    /// Wall-clock solve time in seconds.
    pub duration_secs: f64,
    /// Seed the puzzle was generated from.
    pub seed: u32,
    /// Whether the solve ran with animation enabled.
    pub animated: bool,
}

impl SolveRecord {
    /// Build a record for a finished solve, timestamped now.
    pub fn new(
        difficulty: Difficulty,
        mode: SolveMode,
        outcome: &SolveOutcome,
        seed: u32,
        animated: bool,
    ) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            timestamp,
            difficulty: difficulty.to_string(),
            mode: mode.label().to_string(),
            steps: outcome.steps,
            duration_secs: outcome.duration.as_secs_f64(),
            seed,
            animated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_record_captures_outcome() {
        let outcome = SolveOutcome {
            solved: true,
            steps: 42,
            duration: Duration::from_millis(1500),
        };
        let record = SolveRecord::new(Difficulty::Medium, SolveMode::Mrv, &outcome, 123, true);
        assert_eq!(record.difficulty, "Medium");
        assert_eq!(record.mode, "BT + MRV");
        assert_eq!(record.steps, 42);
        assert!((record.duration_secs - 1.5).abs() < 1e-9);
        assert_eq!(record.seed, 123);
        assert!(record.animated);
        assert!(record.timestamp > 0);
    }
}
