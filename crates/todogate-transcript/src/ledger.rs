use serde_json::Value;
use todogate_core::{placeholder_subject, tool, Status, Task, TaskMap, ToolEvent};

/// Rebuilds task state from `TaskCreate` / `TaskUpdate` calls.
///
/// Real task ids are assigned by the agent host after the call is logged,
/// so creates are numbered locally from 1 in stream order. Updates for an
/// id never seen are kept: the transcript may start after the create.
#[derive(Debug)]
pub struct TaskLedger {
    tasks: TaskMap,
    next_id: u64,
}

impl Default for TaskLedger {
    fn default() -> Self {
        Self {
            tasks: TaskMap::new(),
            next_id: 1,
        }
    }
}

impl TaskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the ledger. Non-task events are ignored.
    pub fn apply(&mut self, event: &ToolEvent) {
        match event.name.as_str() {
            tool::TASK_CREATE => self.create(event),
            tool::TASK_UPDATE => self.update(event),
            _ => {}
        }
    }

    fn create(&mut self, event: &ToolEvent) {
        let id = self.next_id.to_string();
        self.next_id += 1;
        let task = Task::new(
            id,
            event.input_str("subject").unwrap_or(""),
            event.input_str("description").unwrap_or(""),
            Status::Pending,
        );
        tracing::trace!(task_id = %task.id, "task created");
        self.tasks.insert(task);
    }

    fn update(&mut self, event: &ToolEvent) {
        let Some(id) = task_id(&event.input) else {
            tracing::trace!("task update without taskId ignored");
            return;
        };
        if !self.tasks.contains(&id) {
            let subject = event
                .input_str("subject")
                .map(str::to_string)
                .unwrap_or_else(|| placeholder_subject(&id));
            let description = event.input_str("description").unwrap_or("");
            tracing::trace!(task_id = %id, "placeholder task for unseen id");
            self.tasks
                .insert(Task::new(id.clone(), subject, description, Status::Pending));
        }
        let Some(task) = self.tasks.get_mut(&id) else {
            return;
        };
        if let Some(status) = event.input_str("status") {
            task.status = Status::parse(status);
        }
        if let Some(subject) = event.input_str("subject") {
            task.subject = subject.to_string();
        }
        if let Some(description) = event.input_str("description") {
            task.description = description.to_string();
        }
    }

    pub fn finish(self) -> TaskMap {
        self.tasks
    }
}

/// `taskId` as text. Numbers are accepted; empty strings count as absent.
fn task_id(input: &Value) -> Option<String> {
    match input.get("taskId")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
