mod paths;
mod snapshot;

pub use paths::{expand_home, session_dir, tasks_root, TASKS_DIR_ENV};
pub use snapshot::read_task_snapshot;
