use todogate_bridge_claude::{find_incomplete_items, format_decision, CheckOptions, HookInput};

/// `todogate inspect` — print open items for a transcript/session. Never gates.
pub fn execute(
    transcript: Option<String>,
    session: Option<String>,
    opts: &CheckOptions,
    json: bool,
) -> anyhow::Result<i32> {
    let input = HookInput {
        session_id: session.filter(|s| !s.is_empty()),
        transcript_path: transcript.filter(|s| !s.is_empty()),
        ..HookInput::default()
    };
    let items = find_incomplete_items(&input, opts);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(0);
    }

    match format_decision(&items).report {
        Some(report) => println!("{report}"),
        None => println!("No incomplete todos or tasks."),
    }
    Ok(0)
}
