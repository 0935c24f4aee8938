use thiserror::Error;

/// Failures that stop a hook run. Everything below the hook input (bad
/// transcript lines, bad task files, missing paths) is absorbed instead.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("PARSE_ERROR: {0}")]
    Parse(#[from] serde_json::Error),
}

impl HookError {
    /// Process exit code reported to the hook runner.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::Parse(_) => 2,
        }
    }
}
