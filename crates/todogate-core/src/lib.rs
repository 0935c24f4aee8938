pub mod status;
pub mod tasks;
pub mod types;

pub use status::Status;
pub use tasks::{placeholder_subject, Task, TaskMap};
pub use types::*;
