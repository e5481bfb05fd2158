use std::fmt::{self, Write};

use chrono::{DateTime, Local, NaiveDateTime};

use super::{ListView, ModalView, Tile, MARK_COMPLETE_LABEL, MARK_INCOMPLETE_LABEL};
use crate::config::DisplaySettings;
use crate::models::{TaskRecord, TaskStatus};

/// Map tasks to tiles, keeping service order. No tasks gives the placeholder.
pub fn render_tiles(tasks: &[TaskRecord]) -> ListView {
    if tasks.is_empty() {
        return ListView::Empty;
    }
    ListView::Tiles(
        tasks
            .iter()
            .map(|t| Tile {
                id: t.id.clone(),
                glyph: t.status.glyph(),
                name: t.name.clone(),
                status: t.status.as_str().to_string(),
            })
            .collect(),
    )
}

pub fn toggle_label(status: &TaskStatus) -> &'static str {
    if status.is_completed() {
        MARK_INCOMPLETE_LABEL
    } else {
        MARK_COMPLETE_LABEL
    }
}

pub fn modal_view(task: &TaskRecord, display: &DisplaySettings) -> ModalView {
    ModalView {
        id: task.id.clone(),
        name: task.name.clone(),
        description: task.description.clone(),
        status: task.status.as_str().to_string(),
        priority: task.priority.as_str().to_string(),
        created: format_created(&task.created_at, &display.datetime_format),
        toggle_label: toggle_label(&task.status),
    }
}

/// Render a service timestamp in local time. Input that does not parse, or a
/// format chrono cannot apply, shows the raw value.
pub fn format_created(raw: &str, format: &str) -> String {
    let local = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.with_timezone(&Local)
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        naive.and_utc().with_timezone(&Local)
    } else {
        return raw.to_string();
    };
    try_render(local.format(format)).unwrap_or_else(|| raw.to_string())
}

/// `to_string` for chrono's delayed formatters, which fail on bad specifiers.
pub fn try_render(value: impl fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{value}").ok()?;
    Some(out)
}

pub fn load_error_message(reason: &str) -> String {
    format!("Failed to load tasks: {reason}. Make sure the task service is running and reachable.")
}
