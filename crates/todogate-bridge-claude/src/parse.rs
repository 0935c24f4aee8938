use serde_json::Value;

use crate::error::HookError;

/// The parts of the hook stdin payload the gate uses.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HookInput {
    pub session_id: Option<String>,
    pub transcript_path: Option<String>,
    pub hook_event_name: Option<String>,
}

/// Parse the stdin JSON from a Claude Code hook.
///
/// Takes raw bytes so non-UTF-8 input fails like any other bad JSON. Only
/// a decode error fails; a valid non-object payload reads as an input with
/// no fields.
pub fn parse_hook_input(stdin: &[u8]) -> Result<HookInput, HookError> {
    let raw: Value = serde_json::from_slice(stdin)?;
    Ok(HookInput {
        session_id: get_str(&raw, "session_id"),
        transcript_path: get_str(&raw, "transcript_path"),
        hook_event_name: get_str(&raw, "hook_event_name"),
    })
}

/// Non-empty string field, trying snake_case first then camelCase.
fn get_str(v: &Value, snake_key: &str) -> Option<String> {
    let found = v
        .get(snake_key)
        .and_then(|x| x.as_str())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            v.get(snake_to_camel(snake_key))
                .and_then(|x| x.as_str())
                .filter(|s| !s.is_empty())
        });
    found.map(str::to_string)
}

fn snake_to_camel(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_to_camel_converts_correctly() {
        assert_eq!(snake_to_camel("session_id"), "sessionId");
        assert_eq!(snake_to_camel("transcript_path"), "transcriptPath");
        assert_eq!(snake_to_camel("hook_event_name"), "hookEventName");
        assert_eq!(snake_to_camel("cwd"), "cwd");
    }

    #[test]
    fn reads_snake_case_fields() {
        let input = parse_hook_input(
            br#"{"session_id":"s1","transcript_path":"~/t.jsonl","hook_event_name":"Stop"}"#,
        )
        .unwrap();
        assert_eq!(input.session_id.as_deref(), Some("s1"));
        assert_eq!(input.transcript_path.as_deref(), Some("~/t.jsonl"));
        assert_eq!(input.hook_event_name.as_deref(), Some("Stop"));
    }

    #[test]
    fn falls_back_to_camel_case() {
        let input = parse_hook_input(br#"{"sessionId":"s2","transcriptPath":"/t.jsonl"}"#).unwrap();
        assert_eq!(input.session_id.as_deref(), Some("s2"));
        assert_eq!(input.transcript_path.as_deref(), Some("/t.jsonl"));
    }

    #[test]
    fn empty_and_non_string_fields_are_absent() {
        let input = parse_hook_input(br#"{"session_id":"","transcript_path":42}"#).unwrap();
        assert_eq!(input, HookInput::default());
    }

    #[test]
    fn non_object_payload_has_no_fields() {
        assert_eq!(parse_hook_input(b"[1,2]").unwrap(), HookInput::default());
        assert_eq!(parse_hook_input(b"\"x\"").unwrap(), HookInput::default());
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let err = parse_hook_input(b"{not json").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("PARSE_ERROR: "));
    }

    #[test]
    fn non_utf8_bytes_are_parse_error() {
        let err = parse_hook_input(&[b'{', 0xff, 0xfe, b'}']).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
