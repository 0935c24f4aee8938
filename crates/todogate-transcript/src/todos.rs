use todogate_core::{tool, TodoItem, ToolEvent};

/// Keeps the todo list from the most recent non-empty `TodoWrite`.
///
/// Each write replaces the whole list; an empty or missing `todos` array is
/// a no-op, never a clear.
#[derive(Debug, Default)]
pub struct TodoReducer {
    latest: Vec<TodoItem>,
}

impl TodoReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event. Returns true when it replaced the list.
    pub fn apply(&mut self, event: &ToolEvent) -> bool {
        if event.name != tool::TODO_WRITE {
            return false;
        }
        let todos = match event.input.get("todos").and_then(|t| t.as_array()) {
            Some(t) if !t.is_empty() => t,
            _ => return false,
        };
        self.latest = todos.iter().filter_map(TodoItem::from_value).collect();
        tracing::trace!(items = self.latest.len(), "todo list replaced");
        true
    }

    pub fn finish(self) -> Vec<TodoItem> {
        self.latest
    }
}
