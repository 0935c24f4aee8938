use std::path::{Component, Path, PathBuf};

/// Overrides the snapshot root, mostly for test isolation.
pub const TASKS_DIR_ENV: &str = "TODOGATE_TASKS_DIR";

/// Return the task snapshot root: `$TODOGATE_TASKS_DIR`, else `~/.claude/tasks/`.
pub fn tasks_root() -> PathBuf {
    if let Ok(dir) = std::env::var(TASKS_DIR_ENV) {
        if !dir.trim().is_empty() {
            return expand_home(dir.trim());
        }
    }
    match dirs::home_dir() {
        Some(home) => home.join(".claude").join("tasks"),
        None => PathBuf::from(".claude").join("tasks"),
    }
}

/// Return `root/<session_id>/`, or `None` when the id is empty or would
/// escape the root (separators, `..`).
pub fn session_dir(root: &Path, session_id: &str) -> Option<PathBuf> {
    let mut components = Path::new(session_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == session_id => Some(root.join(name)),
        _ => None,
    }
}

/// Expand a leading `~` or `~/` to the home directory. Other paths,
/// including `~user/...`, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
            .or_else(|| path.strip_prefix("~\\"))
    };
    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
