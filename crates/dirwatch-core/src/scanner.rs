//! Incremental line scanner.
//!
//! Reads a file from the beginning every time but only checks lines past
//! the caller's offset, so a file that has not grown since the previous
//! scan re-checks zero lines. Line boundaries are not byte-addressable
//! without pre-indexing, so the scanner deliberately does not seek.

use crate::ScanError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A line that contained the magic phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    /// File name the match was found in
    pub file: String,
    /// 1-based line number of the match
    pub line_number: usize,
    /// Content of the matching line, without its terminator
    pub line: String,
}

/// Result of scanning one file.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Total lines observed; the offset to resume from next cycle
    pub line_count: usize,
    /// Matches found past the starting offset
    pub matches: Vec<MatchEvent>,
}

/// Scan `path` for lines containing `magic`, skipping the first
/// `start_line` lines as already scanned.
///
/// Returns the new total line count along with every match at a 0-based
/// index `>= start_line`. An empty file yields a count of 0; a final line
/// without a trailing newline still counts once EOF is reached.
pub fn scan_file(path: &Path, magic: &str, start_line: usize) -> Result<ScanOutcome, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::from_io(path, e))?;
    let reader = BufReader::new(file);

    let name = file_name(path);
    let mut outcome = ScanOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ScanError::from_io(path, e))?;

        if index >= start_line && line.contains(magic) {
            outcome.matches.push(MatchEvent {
                file: name.clone(),
                line_number: index + 1,
                line,
            });
        }
        outcome.line_count = index + 1;
    }

    Ok(outcome)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
