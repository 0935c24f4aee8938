mod extract;
mod ledger;
mod scan;
mod todos;

pub use extract::extract_tool_events;
pub use ledger::TaskLedger;
pub use scan::{scan_reader, scan_transcript, ScanStats, TranscriptState};
pub use todos::TodoReducer;
