use std::io::{BufRead, BufReader};
use std::path::Path;
use todogate_core::{TaskMap, TodoItem};

use crate::extract::extract_tool_events;
use crate::ledger::TaskLedger;
use crate::todos::TodoReducer;

#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    /// Non-blank lines seen.
    pub lines_read: usize,
    /// Lines that were not valid JSON.
    pub lines_skipped: usize,
    /// Tool events extracted across all lines.
    pub events: usize,
}

/// Todo and task state reconstructed from one transcript.
#[derive(Debug, Default)]
pub struct TranscriptState {
    pub todos: Vec<TodoItem>,
    pub tasks: TaskMap,
    pub stats: ScanStats,
}

/// One-pass scan of a transcript JSONL file.
///
/// A missing or unreadable file is an empty state, not an error.
pub fn scan_transcript(path: &Path) -> TranscriptState {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "transcript not readable");
            return TranscriptState::default();
        }
    };
    scan_reader(BufReader::new(file))
}

/// Same pass as [`scan_transcript`] over any line source.
///
/// Lines are decoded as bytes so one invalid UTF-8 line only loses itself.
/// A read error ends the scan with whatever was reduced so far.
pub fn scan_reader<R: BufRead>(mut reader: R) -> TranscriptState {
    let mut todos = TodoReducer::new();
    let mut ledger = TaskLedger::new();
    let mut stats = ScanStats::default();

    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "transcript read stopped");
                break;
            }
        }
        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }
        stats.lines_read += 1;

        let record: serde_json::Value = match serde_json::from_slice(line) {
            Ok(v) => v,
            Err(e) => {
                stats.lines_skipped += 1;
                tracing::debug!(line = stats.lines_read, error = %e, "skipping malformed line");
                continue;
            }
        };

        for event in extract_tool_events(&record) {
            stats.events += 1;
            todos.apply(&event);
            ledger.apply(&event);
        }
    }

    tracing::debug!(
        lines = stats.lines_read,
        skipped = stats.lines_skipped,
        events = stats.events,
        "transcript scanned"
    );

    TranscriptState {
        todos: todos.finish(),
        tasks: ledger.finish(),
        stats,
    }
}
