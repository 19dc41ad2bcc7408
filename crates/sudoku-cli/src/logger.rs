//! Append-only CSV result log.
//!
//! One row per successful solve; the fixed header is written only when the
//! file is first created. The engine produces the record, this module only
//! persists it.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use sudoku_engine::SolveRecord;

pub const LOG_HEADER: &str = "Timestamp,Difficulty,Mode,Steps,DurationSecs,Seed,Animated";

/// Append `record` to the log at `path`, creating the file (with header) if
/// it does not exist yet.
pub fn append_record(path: &Path, record: &SolveRecord) -> io::Result<()> {
    let fresh = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if fresh {
        writeln!(file, "{}", LOG_HEADER)?;
    }
    writeln!(
        file,
        "{},{},{},{},{:.2},{},{}",
        record.timestamp,
        record.difficulty,
        record.mode,
        record.steps,
        record.duration_secs,
        record.seed,
        if record.animated { "yes" } else { "no" }
    )
}
