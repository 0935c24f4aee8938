use std::io::{Read, Write};
use todogate_bridge_claude::{check_todos_from_stdin, CheckOptions};

/// `todogate hook claude` — read stdin, decide, return the exit code.
///
/// 0 allows, 1 blocks with the report on stdout, 2 means the hook input
/// was not JSON (message on stderr, nothing on stdout).
pub fn hook_claude(opts: &CheckOptions) -> anyhow::Result<i32> {
    // Raw bytes: non-UTF-8 input must reach the JSON decoder and fail there.
    let mut stdin_buf = Vec::new();
    if let Err(e) = std::io::stdin().read_to_end(&mut stdin_buf) {
        tracing::debug!(error = %e, "stdin read failed");
        return Ok(0);
    }
    tracing::debug!(bytes = stdin_buf.len(), "hook input read");

    match check_todos_from_stdin(&stdin_buf, opts) {
        Ok(result) => {
            if let Some(report) = &result.stdout {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{report}")?;
                out.flush()?;
            }
            Ok(result.exit_code)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(e.exit_code())
        }
    }
}
