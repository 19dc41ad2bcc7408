//! Puzzle acceptance loop.
//!
//! Keeps asking a [`PuzzleSource`] for candidates until one passes the
//! blank-count pre-filter and certifies as having exactly one solution, or
//! the attempt budget runs out.

use crate::generator::{GenerateError, PuzzleSource};
use crate::grid::Grid;
use crate::uniqueness::{has_unique_solution, likely_unique, DEFAULT_BLANK_THRESHOLD};
use crate::Difficulty;
use rand::Rng;
use thiserror::Error;

/// Largest accepted generation seed.
pub const MAX_SEED: u32 = 99_999;

/// Knobs of the acceptance loop.
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceConfig {
    /// Candidate grids requested before giving up.
    pub max_attempts: usize,
    /// Blank-count cutoff for the cheap pre-filter.
    pub blank_threshold: usize,
}

impl Default for AcceptanceConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            blank_threshold: DEFAULT_BLANK_THRESHOLD,
        }
    }
}

/// A certified puzzle and the seed that produced it.
#[derive(Debug, Clone)]
pub struct AcceptedPuzzle {
    pub grid: Grid,
    pub seed: u32,
}

/// Why no puzzle was accepted. All explicit values; the loop never panics
/// on a bad attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcceptError {
    /// The generator failed for an explicitly supplied seed. Automatic
    /// seeds retry instead.
    #[error("generation failed for seed {seed}: {source}")]
    Generation { seed: u32, source: GenerateError },
    /// An explicitly supplied seed produced a puzzle that is not certified
    /// unique. Manual seeds are never silently replaced, so this is final.
    #[error("seed {seed} does not yield a uniquely solvable puzzle")]
    NotUnique { seed: u32 },
    /// The retry budget ran out without an acceptable puzzle.
    #[error("no uniquely solvable puzzle found after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Generate a puzzle certified to have exactly one solution.
///
/// Each attempt draws a fresh seed from `rng` in `0..=MAX_SEED` unless
/// `seed` pins one explicitly, in which case exactly one attempt is made:
/// retrying a manual seed with a different one would defeat reproducibility.
/// Generator errors consume an attempt and the loop moves on; rejected
/// candidates (too many blanks, or not unique) are discarded silently.
pub fn generate_valid_puzzle<S: PuzzleSource, R: Rng>(
    source: &mut S,
    difficulty: Difficulty,
    seed: Option<u32>,
    config: &AcceptanceConfig,
    rng: &mut R,
) -> Result<AcceptedPuzzle, AcceptError> {
    for _ in 0..config.max_attempts {
        let attempt_seed = match seed {
            Some(fixed) => fixed,
            None => rng.gen_range(0..=MAX_SEED),
        };

        match source.generate(attempt_seed, difficulty.blank_ratio()) {
            Ok(grid) => {
                if likely_unique(&grid, config.blank_threshold)
                    && has_unique_solution(&grid, rng)
                {
                    return Ok(AcceptedPuzzle {
                        grid,
                        seed: attempt_seed,
                    });
                }
                if seed.is_some() {
                    return Err(AcceptError::NotUnique { seed: attempt_seed });
                }
            }
            Err(source_err) => {
                if seed.is_some() {
                    return Err(AcceptError::Generation {
                        seed: attempt_seed,
                        source: source_err,
                    });
                }
                // Automatic seed: the failed attempt counts against the
                // budget and the loop continues with a new seed.
            }
        }
    }
    Err(AcceptError::Exhausted {
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::BacktrackGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    /// Always hands back the same known-unique puzzle.
    struct FixedSource;

    impl PuzzleSource for FixedSource {
        fn generate(&mut self, _seed: u32, _ratio: f64) -> Result<Grid, GenerateError> {
            Ok(Grid::from_string(PUZZLE).unwrap())
        }
    }

    /// Always fails.
    struct BrokenSource;

    impl PuzzleSource for BrokenSource {
        fn generate(&mut self, _seed: u32, _ratio: f64) -> Result<Grid, GenerateError> {
            Err(GenerateError::Incomplete)
        }
    }

    /// Fails a fixed number of times, then delegates.
    struct FlakySource {
        failures_left: usize,
        inner: FixedSource,
    }

    impl PuzzleSource for FlakySource {
        fn generate(&mut self, seed: u32, ratio: f64) -> Result<Grid, GenerateError> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(GenerateError::Incomplete);
            }
            self.inner.generate(seed, ratio)
        }
    }

    /// Produces grids that never pass the blank-count pre-filter.
    struct AmbiguousSource;

    impl PuzzleSource for AmbiguousSource {
        fn generate(&mut self, _seed: u32, _ratio: f64) -> Result<Grid, GenerateError> {
            Ok(Grid::new())
        }
    }

    #[test]
    fn test_manual_seed_is_echoed_back() {
        let accepted = generate_valid_puzzle(
            &mut FixedSource,
            Difficulty::Easy,
            Some(12345),
            &AcceptanceConfig::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(accepted.seed, 12345);
        assert_eq!(accepted.grid, Grid::from_string(PUZZLE).unwrap());
    }

    #[test]
    fn test_manual_seed_generation_error_is_not_retried() {
        let err = generate_valid_puzzle(
            &mut BrokenSource,
            Difficulty::Easy,
            Some(7),
            &AcceptanceConfig::default(),
            &mut rng(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AcceptError::Generation {
                seed: 7,
                source: GenerateError::Incomplete
            }
        );
    }

    #[test]
    fn test_manual_seed_ambiguous_puzzle_is_final() {
        let err = generate_valid_puzzle(
            &mut AmbiguousSource,
            Difficulty::Hard,
            Some(42),
            &AcceptanceConfig::default(),
            &mut rng(),
        )
        .unwrap_err();
        assert_eq!(err, AcceptError::NotUnique { seed: 42 });
    }

    #[test]
    fn test_automatic_seed_retries_past_generator_errors() {
        let mut source = FlakySource {
            failures_left: 3,
            inner: FixedSource,
        };
        let accepted = generate_valid_puzzle(
            &mut source,
            Difficulty::Easy,
            None,
            &AcceptanceConfig::default(),
            &mut rng(),
        )
        .unwrap();
        assert!(accepted.seed <= MAX_SEED);
    }

    #[test]
    fn test_exhaustion_reports_attempt_count() {
        let config = AcceptanceConfig {
            max_attempts: 5,
            ..AcceptanceConfig::default()
        };
        let err = generate_valid_puzzle(
            &mut AmbiguousSource,
            Difficulty::Easy,
            None,
            &config,
            &mut rng(),
        )
        .unwrap_err();
        assert_eq!(err, AcceptError::Exhausted { attempts: 5 });
    }

    #[test]
    fn test_real_generator_easy_puzzle_is_accepted() {
        // 0.3 blank ratio leaves 57 givens; the retry budget makes
        // acceptance a near-certainty even if early seeds are ambiguous.
        let accepted = generate_valid_puzzle(
            &mut BacktrackGenerator,
            Difficulty::Easy,
            None,
            &AcceptanceConfig::default(),
            &mut rng(),
        )
        .unwrap();
        assert!(accepted.grid.is_consistent());
        assert_eq!(accepted.grid.empty_count(), 24);
        assert!(crate::uniqueness::has_unique_solution(
            &accepted.grid,
            &mut rng()
        ));
    }
}
