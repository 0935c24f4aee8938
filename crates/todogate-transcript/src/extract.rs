use serde_json::Value;
use todogate_core::ToolEvent;

/// A record shape: appends the tool events it recognizes in `record`.
type ShapeMatcher = fn(&Value, &mut Vec<ToolEvent>);

/// Every known transcript record shape. Each one is tried on every record;
/// in practice the `type` discriminant makes them mutually exclusive.
const SHAPES: &[ShapeMatcher] = &[assistant_message, bare_message, flat_tool_use];

/// Extract tool invocations from one transcript record, in record order.
///
/// Recognized shapes:
/// ```json
/// {"type":"assistant","message":{"content":[{"type":"tool_use","name":"TodoWrite","input":{...}}]}}
/// {"type":"message","content":[{"type":"tool_use","name":"TaskCreate","input":{...}}]}
/// {"type":"tool_use","name":"TaskUpdate","input":{...}}
/// ```
///
/// The flat shape also accepts `tool_name` / `tool_input`. Anything else,
/// including non-object records, yields nothing.
pub fn extract_tool_events(record: &Value) -> Vec<ToolEvent> {
    let mut events = Vec::new();
    for shape in SHAPES {
        shape(record, &mut events);
    }
    events
}

fn record_type(record: &Value) -> Option<&str> {
    record.get("type").and_then(|t| t.as_str())
}

// ── Shapes ──

fn assistant_message(record: &Value, out: &mut Vec<ToolEvent>) {
    if record_type(record) != Some("assistant") {
        return;
    }
    if let Some(content) = record.get("message").and_then(|m| m.get("content")) {
        content_blocks(content, out);
    }
}

fn bare_message(record: &Value, out: &mut Vec<ToolEvent>) {
    if record_type(record) != Some("message") {
        return;
    }
    if let Some(content) = record.get("content") {
        content_blocks(content, out);
    }
}

fn flat_tool_use(record: &Value, out: &mut Vec<ToolEvent>) {
    if record_type(record) != Some("tool_use") {
        return;
    }
    let name = non_empty_str(record, "name").or_else(|| non_empty_str(record, "tool_name"));
    let Some(name) = name else {
        return;
    };
    let input = non_empty_input(record, "input")
        .or_else(|| non_empty_input(record, "tool_input"))
        .cloned()
        .unwrap_or_else(empty_input);
    out.push(ToolEvent::new(name, input));
}

/// `tool_use` blocks of a message content array. Text blocks, non-object
/// entries and a non-array `content` contribute nothing.
fn content_blocks(content: &Value, out: &mut Vec<ToolEvent>) {
    let Some(blocks) = content.as_array() else {
        return;
    };
    for block in blocks {
        if block.get("type").and_then(|t| t.as_str()) != Some("tool_use") {
            continue;
        }
        let Some(name) = non_empty_str(block, "name") else {
            continue;
        };
        let input = block.get("input").cloned().unwrap_or_else(empty_input);
        out.push(ToolEvent::new(name, input));
    }
}

fn non_empty_str<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key)
        .and_then(|x| x.as_str())
        .filter(|s| !s.is_empty())
}

/// Tool input under `key` when it is an object with at least one field.
fn non_empty_input<'a>(v: &'a Value, key: &str) -> Option<&'a Value> {
    v.get(key)
        .filter(|x| x.as_object().is_some_and(|m| !m.is_empty()))
}

fn empty_input() -> Value {
    Value::Object(serde_json::Map::new())
}
