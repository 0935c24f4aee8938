use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use todogate_core::{Status, Task, TaskMap};

use crate::paths::session_dir;

/// Read the authoritative task snapshot for a session.
///
/// Returns `None` when the session has no snapshot directory, so callers
/// can fall back to the transcript ledger. Otherwise returns every task
/// whose status is neither `completed` nor `deleted`; a directory holding
/// only finished tasks yields an empty map.
///
/// Task ids come from file names. Unreadable or malformed files are skipped.
/// Tasks are ordered by numeric id, then by name for non-numeric ids.
pub fn read_task_snapshot(root: &Path, session_id: &str) -> Option<TaskMap> {
    let dir = session_dir(root, session_id)?;
    let entries = match fs::read_dir(&dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "no task snapshot");
            return None;
        }
    };

    let mut files: Vec<(String, PathBuf)> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                return None;
            }
            let id = path.file_stem()?.to_str()?.to_string();
            if id.is_empty() || !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                return None;
            }
            Some((id, path))
        })
        .collect();
    files.sort_by(|a, b| compare_ids(&a.0, &b.0));

    let mut tasks = TaskMap::new();
    for (id, path) in files {
        let Some(file) = load_task_file(&path) else {
            continue;
        };
        let status = field(&file, "status")
            .map(Status::parse)
            .unwrap_or_default();
        if status.is_terminal() {
            continue;
        }
        tasks.insert(Task::new(
            id,
            field(&file, "subject").unwrap_or(""),
            field(&file, "description").unwrap_or(""),
            status,
        ));
    }

    tracing::debug!(dir = %dir.display(), open = tasks.len(), "task snapshot read");
    Some(tasks)
}

/// Task file `<tasks-root>/<session>/<id>.json` as a JSON object. Anything
/// else (arrays, scalars, bad JSON) is skipped. Extra fields are ignored.
fn load_task_file(path: &Path) -> Option<Map<String, Value>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable task file");
            return None;
        }
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(_) => {
            tracing::debug!(path = %path.display(), "skipping non-object task file");
            None
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping malformed task file");
            None
        }
    }
}

/// String field of a task file; non-strings read as absent.
fn field<'a>(file: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    file.get(key).and_then(|v| v.as_str())
}

/// Numeric ids first in numeric order, then the rest lexicographically.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
