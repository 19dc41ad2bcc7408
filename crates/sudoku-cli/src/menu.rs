//! Interactive prompt parsing.
//!
//! Menu answers are parsed by pure functions so they test without a
//! terminal; `prompt` does the actual line reading.

use std::io::{self, Write};
use sudoku_engine::{Difficulty, SolveMode, MAX_SEED};

/// Answer to the difficulty menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyChoice {
    Level(Difficulty),
    Quit,
}

/// Answer to the solve-mode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChoice {
    Mode(SolveMode),
    Back,
}

/// `1`..`3` pick a level, `4` quits.
pub fn parse_difficulty_choice(input: &str) -> Option<DifficultyChoice> {
    match input.trim() {
        "1" => Some(DifficultyChoice::Level(Difficulty::Easy)),
        "2" => Some(DifficultyChoice::Level(Difficulty::Medium)),
        "3" => Some(DifficultyChoice::Level(Difficulty::Hard)),
        "4" => Some(DifficultyChoice::Quit),
        _ => None,
    }
}

/// `1` picks Naive, `2` picks BT + MRV, `q` goes back.
pub fn parse_mode_choice(input: &str) -> Option<ModeChoice> {
    match input.trim() {
        "1" => Some(ModeChoice::Mode(SolveMode::Naive)),
        "2" => Some(ModeChoice::Mode(SolveMode::Mrv)),
        "q" | "Q" => Some(ModeChoice::Back),
        _ => None,
    }
}

/// A seed must be an integer in `0..=99_999`.
pub fn parse_seed_value(input: &str) -> Result<u32, String> {
    let value: u32 = input
        .trim()
        .parse()
        .map_err(|_| "the seed must be a number".to_string())?;
    if value > MAX_SEED {
        return Err(format!("the seed must be between 0 and {}", MAX_SEED));
    }
    Ok(value)
}

/// `y`/`Y` means yes, everything else no.
pub fn parse_yes_no(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Clap-facing difficulty parser.
pub fn parse_difficulty_name(s: &str) -> Result<Difficulty, String> {
    s.parse()
}

/// Clap-facing mode parser.
pub fn parse_mode_name(s: &str) -> Result<SolveMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "naive" => Ok(SolveMode::Naive),
        "mrv" => Ok(SolveMode::Mrv),
        other => Err(format!("unknown mode: {} (expected naive or mrv)", other)),
    }
}

/// Print `label`, flush, and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
