use todogate_core::{IncompleteItem, ItemSource};

/// First line of a blocking report.
pub const INCOMPLETE_MARKER: &str = "INCOMPLETE_TODOS";

/// Gate verdict: exit code plus the stdout report when blocking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub exit_code: i32,
    pub report: Option<String>,
}

/// Render incomplete items into the hook verdict.
///
/// ```text
/// INCOMPLETE_TODOS
///   - [pending] write tests
///   - [in_progress] (Task #3) fix bug
/// ```
pub fn format_decision(items: &[IncompleteItem]) -> Decision {
    if items.is_empty() {
        return Decision {
            exit_code: 0,
            report: None,
        };
    }
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(INCOMPLETE_MARKER.to_string());
    lines.extend(items.iter().map(render_item));
    Decision {
        exit_code: 1,
        report: Some(lines.join("\n")),
    }
}

fn render_item(item: &IncompleteItem) -> String {
    match (item.source, item.task_id.as_deref()) {
        (ItemSource::Task, id) => format!(
            "  - [{}] (Task #{}) {}",
            item.status,
            id.unwrap_or("?"),
            item.content
        ),
        (ItemSource::Todo, _) => format!("  - [{}] {}", item.status, item.content),
    }
}
