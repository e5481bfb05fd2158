use chrono::NaiveDate;

use crate::error::{FormField, TaskdeckError};
use crate::models::{NewTask, TaskPriority, TaskStatus};
use crate::view::try_render;

/// Raw contents of the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub deadline: Option<NaiveDate>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            deadline: None,
        }
    }
}

impl TaskForm {
    /// Name and description are required; blank counts as missing.
    pub fn validate(&self) -> Result<(), TaskdeckError> {
        if self.name.trim().is_empty() {
            return Err(TaskdeckError::validation(FormField::Name));
        }
        if self.description.trim().is_empty() {
            return Err(TaskdeckError::validation(FormField::Description));
        }
        Ok(())
    }

    /// Validate and build the create payload. A deadline is folded into the
    /// description and never sent as a field of its own.
    pub fn to_new_task(&self, date_format: &str) -> Result<NewTask, TaskdeckError> {
        self.validate()?;
        let description = match self.deadline {
            Some(deadline) => annotate_deadline(&self.description, deadline, date_format),
            None => self.description.clone(),
        };
        Ok(NewTask {
            name: self.name.clone(),
            description,
            status: self.status.clone(),
            priority: self.priority.clone(),
        })
    }
}

/// Append the deadline line. Falls back to `YYYY-MM-DD` when `date_format`
/// cannot be applied.
pub fn annotate_deadline(description: &str, deadline: NaiveDate, date_format: &str) -> String {
    let date = try_render(deadline.format(date_format))
        .unwrap_or_else(|| deadline.format("%Y-%m-%d").to_string());
    format!("{description}\n\nDeadline: {date}")
}

/// Parse a date-input value (`YYYY-MM-DD`). Blank means no deadline.
pub fn parse_deadline(raw: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(Some)
}
