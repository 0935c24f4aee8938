use std::path::PathBuf;

use todogate_core::{IncompleteItem, TaskMap};
use todogate_transcript::{scan_transcript, TranscriptState};

use crate::error::HookError;
use crate::parse::{parse_hook_input, HookInput};
use crate::reconcile::{reconcile, TaskSource};
use crate::render::format_decision;

// ── Options ──

/// Resolved configuration for one check.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Snapshot root. `None` means [`todogate_store::tasks_root`].
    pub tasks_root: Option<PathBuf>,
    /// Consult the session's task files before the transcript ledger.
    pub use_snapshot: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            tasks_root: None,
            use_snapshot: true,
        }
    }
}

impl CheckOptions {
    fn resolved_tasks_root(&self) -> PathBuf {
        self.tasks_root
            .clone()
            .unwrap_or_else(todogate_store::tasks_root)
    }
}

// ── Hook Result ──

/// Result from a hook run.
///
/// - `stdout`: report to print (blocking verdict only)
/// - `exit_code`: 0 to allow, 1 to block
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HookResult {
    pub stdout: Option<String>,
    pub exit_code: i32,
}

impl HookResult {
    /// Construct an empty result (no output, exit 0).
    pub fn empty() -> Self {
        Self::default()
    }
}

// ── Check ──

/// Collect every open todo and task for a hook input.
///
/// The transcript is scanned when a path is given. When a session id is
/// given and its snapshot directory exists, the snapshot replaces the
/// transcript ledger for tasks; todos always come from the transcript.
pub fn find_incomplete_items(input: &HookInput, opts: &CheckOptions) -> Vec<IncompleteItem> {
    let state = match input.transcript_path.as_deref() {
        Some(p) => scan_transcript(&todogate_store::expand_home(p)),
        None => TranscriptState::default(),
    };

    let snapshot: Option<TaskMap> = match (opts.use_snapshot, input.session_id.as_deref()) {
        (true, Some(sid)) => todogate_store::read_task_snapshot(&opts.resolved_tasks_root(), sid),
        _ => None,
    };

    let source = match &snapshot {
        Some(tasks) => TaskSource::Snapshot(tasks),
        None => TaskSource::Ledger(&state.tasks),
    };
    reconcile(&state.todos, source)
}

/// Main hook entrypoint: parse stdin, reconcile, decide.
///
/// Empty or whitespace-only stdin is "no usable input" and allows. Any
/// other stdin that does not decode as JSON (including non-UTF-8 bytes) is
/// an error.
pub fn check_todos_from_stdin(stdin: &[u8], opts: &CheckOptions) -> Result<HookResult, HookError> {
    if stdin.trim_ascii().is_empty() {
        return Ok(HookResult::empty());
    }
    let input = parse_hook_input(stdin)?;
    let items = find_incomplete_items(&input, opts);
    let decision = format_decision(&items);
    tracing::info!(
        event = input.hook_event_name.as_deref().unwrap_or(""),
        session = input.session_id.as_deref().unwrap_or(""),
        incomplete = items.len(),
        exit_code = decision.exit_code,
        "todo gate decided"
    );
    Ok(HookResult {
        stdout: decision.report,
        exit_code: decision.exit_code,
    })
}
