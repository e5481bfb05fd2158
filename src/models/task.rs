use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier. Kept in whatever JSON shape the service
/// used so it round-trips unchanged into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(u64),
    Text(String),
    /// Negative or fractional numeric ids, kept exactly as received.
    OtherNumber(serde_json::Number),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::OtherNumber(n) => write!(f, "{n}"),
        }
    }
}

impl TaskId {
    /// Match a user-typed reference against this id.
    pub fn matches(&self, reference: &str) -> bool {
        match self {
            Self::Number(n) => reference.parse::<u64>().is_ok_and(|r| r == *n),
            Self::Text(s) => s == reference,
            Self::OtherNumber(n) => n.to_string() == reference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    /// A status string this client does not know; rendered verbatim.
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Parse one of the known choices. Unknown strings yield `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Status the toggle control moves to. There is no path to `in-progress`.
    pub fn toggled(&self) -> Self {
        if self.is_completed() {
            Self::Pending
        } else {
            Self::Completed
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::InProgress => "⟳",
            _ => "⋯",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or(Self::Other(s))
    }
}

impl From<TaskStatus> for String {
    fn from(s: TaskStatus) -> Self {
        match s {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    /// A priority string this client does not know; rendered verbatim.
    Other(String),
}

impl TaskPriority {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(raw) => raw.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl From<String> for TaskPriority {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or(Self::Other(s))
    }
}

impl From<TaskPriority> for String {
    fn from(p: TaskPriority) -> Self {
        match p {
            TaskPriority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at: String,
}

/// Create payload. `id` and `createdAt` are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}
