use todogate_core::{IncompleteItem, Task, TaskMap, TodoItem};

/// Which task state is authoritative for one check.
#[derive(Debug, Clone, Copy)]
pub enum TaskSource<'a> {
    /// Rebuilt from `TaskCreate` / `TaskUpdate` calls in the transcript.
    Ledger(&'a TaskMap),
    /// Read from the session's task files; replaces the ledger wholesale.
    Snapshot(&'a TaskMap),
}

impl TaskSource<'_> {
    fn is_open(&self, task: &Task) -> bool {
        match self {
            TaskSource::Ledger(_) => !task.status.is_complete(),
            TaskSource::Snapshot(_) => !task.status.is_terminal(),
        }
    }

    /// Report text. Snapshot tasks always get something to show; ledger
    /// tasks created with neither subject nor description stay blank.
    fn content(&self, task: &Task) -> String {
        match self {
            TaskSource::Ledger(_) => task.subject_or_description().to_string(),
            TaskSource::Snapshot(_) => task.display_content(),
        }
    }

    fn tasks(&self) -> &TaskMap {
        match self {
            TaskSource::Ledger(t) | TaskSource::Snapshot(t) => t,
        }
    }
}

/// Merge the latest todo list and the authoritative tasks into the list of
/// open items: todos first in list order, then tasks in map order.
pub fn reconcile(todos: &[TodoItem], tasks: TaskSource<'_>) -> Vec<IncompleteItem> {
    let open_todos = todos
        .iter()
        .filter(|t| !t.status.is_complete())
        .map(IncompleteItem::from_todo);
    let open_tasks = tasks
        .tasks()
        .iter()
        .filter(|t| tasks.is_open(t))
        .map(|t| IncompleteItem {
            content: tasks.content(t),
            ..IncompleteItem::from_task(t)
        });
    open_todos.chain(open_tasks).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todogate_core::{ItemSource, Status};

    fn todo(status: &str, content: &str) -> TodoItem {
        TodoItem {
            status: Status::parse(status),
            content: content.into(),
        }
    }

    fn task_map(entries: &[(&str, &str, &str)]) -> TaskMap {
        entries
            .iter()
            .map(|(id, subject, status)| Task::new(*id, *subject, "", Status::parse(status)))
            .collect()
    }

    #[test]
    fn todos_precede_tasks_and_keep_order() {
        let todos = [
            todo("pending", "first"),
            todo("completed", "done"),
            todo("in_progress", "second"),
        ];
        let tasks = task_map(&[("3", "t3", "pending"), ("1", "t1", "in_progress")]);
        let items = reconcile(&todos, TaskSource::Ledger(&tasks));

        let summary: Vec<(ItemSource, &str)> = items
            .iter()
            .map(|i| (i.source, i.content.as_str()))
            .collect();
        assert_eq!(
            summary,
            [
                (ItemSource::Todo, "first"),
                (ItemSource::Todo, "second"),
                (ItemSource::Task, "t3"),
                (ItemSource::Task, "t1"),
            ]
        );
        assert_eq!(items[2].task_id.as_deref(), Some("3"));
        assert_eq!(items[0].task_id, None);
    }

    #[test]
    fn todo_with_unknown_or_empty_status_is_open() {
        let todos = [todo("", "no status"), todo("blocked", "odd status")];
        let items = reconcile(&todos, TaskSource::Ledger(&TaskMap::new()));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].status.as_str(), "");
    }

    #[test]
    fn ledger_only_drops_completed() {
        let tasks = task_map(&[("1", "a", "completed"), ("2", "b", "deleted")]);
        let items = reconcile(&[], TaskSource::Ledger(&tasks));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task_id.as_deref(), Some("2"));
    }

    #[test]
    fn snapshot_drops_completed_and_deleted() {
        let tasks = task_map(&[
            ("1", "a", "completed"),
            ("2", "b", "deleted"),
            ("3", "c", "in_progress"),
        ]);
        let items = reconcile(&[], TaskSource::Snapshot(&tasks));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task_id.as_deref(), Some("3"));
        assert_eq!(items[0].status, Status::InProgress);
    }

    #[test]
    fn blank_ledger_task_has_blank_content() {
        let tasks = task_map(&[("1", "", "pending")]);
        let items = reconcile(&[], TaskSource::Ledger(&tasks));
        assert_eq!(items[0].content, "");
        assert_eq!(items[0].task_id.as_deref(), Some("1"));
    }

    #[test]
    fn ledger_task_falls_back_to_description() {
        let tasks: TaskMap = [Task::new("2", "", "desc", Status::Pending)]
            .into_iter()
            .collect();
        let items = reconcile(&[], TaskSource::Ledger(&tasks));
        assert_eq!(items[0].content, "desc");
    }

    #[test]
    fn blank_snapshot_task_gets_placeholder() {
        let tasks = task_map(&[("9", "", "pending")]);
        let items = reconcile(&[], TaskSource::Snapshot(&tasks));
        assert_eq!(items[0].content, "Task 9");
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert!(reconcile(&[], TaskSource::Ledger(&TaskMap::new())).is_empty());
        assert!(reconcile(&[], TaskSource::Snapshot(&TaskMap::new())).is_empty());
    }
}
