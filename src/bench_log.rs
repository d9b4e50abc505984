//! Appending benchmark rows for completed searches.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::WordscanError;
use crate::results::Outcome;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG: &str = "benchmark.csv";

/// Format one row: `<pattern>,<match count>,<elapsed ms>ms`.
pub fn format_row(pattern: &str, outcome: &Outcome) -> String {
    format!(
        "{},{},{}ms",
        pattern,
        outcome.match_count(),
        outcome.elapsed.as_millis()
    )
}

/// Append a row for `outcome` to the log at `path`, creating it if needed.
pub fn append(path: impl AsRef<Path>, pattern: &str, outcome: &Outcome) -> Result<(), WordscanError> {
    let path = path.as_ref();
    let io_err = |source| WordscanError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    writeln!(file, "{}", format_row(pattern, outcome)).map_err(io_err)
}
