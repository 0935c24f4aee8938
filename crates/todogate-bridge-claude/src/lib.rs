mod dispatch;
mod error;
mod parse;
mod reconcile;
mod render;

pub use dispatch::{check_todos_from_stdin, find_incomplete_items, CheckOptions, HookResult};
pub use error::HookError;
pub use parse::{parse_hook_input, HookInput};
pub use reconcile::{reconcile, TaskSource};
pub use render::{format_decision, Decision, INCOMPLETE_MARKER};
