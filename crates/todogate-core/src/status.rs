use serde::{Serialize, Serializer};
use std::fmt;

/// Status of a todo item or task, as written by the agent.
///
/// Known values get their own variant; anything else is kept verbatim in
/// `Other` so the report shows exactly what the log said.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    Deleted,
    Other(String),
}

impl Status {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Status::Pending,
            "in_progress" => Status::InProgress,
            "completed" => Status::Completed,
            "deleted" => Status::Deleted,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Deleted => "deleted",
            Status::Other(s) => s,
        }
    }

    /// Only `completed` counts as done for todos and ledger tasks.
    pub fn is_complete(&self) -> bool {
        matches!(self, Status::Completed)
    }

    /// `completed` or `deleted`: the snapshot drops these entirely.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Deleted)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Status::parse(raw)
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
