use serde::Serialize;
use serde_json::Value;

use crate::status::Status;
use crate::tasks::Task;

/// Tool names that carry todo/task state.
pub mod tool {
    /// Legacy bulk-replace of the whole todo list.
    pub const TODO_WRITE: &str = "TodoWrite";
    pub const TASK_CREATE: &str = "TaskCreate";
    pub const TASK_UPDATE: &str = "TaskUpdate";
}

/// One tool invocation pulled out of a transcript record.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolEvent {
    pub name: String,
    pub input: Value,
}

impl ToolEvent {
    pub fn new(name: impl Into<String>, input: Value) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    /// String field of the input, `None` when absent or not a string.
    pub fn input_str(&self, key: &str) -> Option<&str> {
        self.input.get(key).and_then(|v| v.as_str())
    }
}

/// An entry of a `TodoWrite` list. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub status: Status,
    pub content: String,
}

impl TodoItem {
    /// Lenient read of one list entry. Non-objects yield `None`; missing
    /// or non-string fields read as empty strings.
    pub fn from_value(v: &Value) -> Option<Self> {
        let obj = v.as_object()?;
        let status = obj.get("status").and_then(|s| s.as_str()).unwrap_or("");
        let content = obj.get("content").and_then(|s| s.as_str()).unwrap_or("");
        Some(Self {
            status: Status::parse(status),
            content: content.to_string(),
        })
    }
}

/// Where an incomplete item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    Todo,
    Task,
}

/// A todo or task that is not done yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncompleteItem {
    pub source: ItemSource,
    pub status: Status,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl IncompleteItem {
    pub fn from_todo(todo: &TodoItem) -> Self {
        Self {
            source: ItemSource::Todo,
            status: todo.status.clone(),
            content: todo.content.clone(),
            task_id: None,
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            source: ItemSource::Task,
            status: task.status.clone(),
            content: task.display_content(),
            task_id: Some(task.id.clone()),
        }
    }
}
