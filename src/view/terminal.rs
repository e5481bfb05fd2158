use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::warn;

use super::{ListRegion, ModalView, Screen, SUBMIT_IDLE_LABEL};
use crate::board::form::{parse_deadline, TaskForm};
use crate::models::{TaskPriority, TaskStatus};
use crate::output::text;

/// Line-oriented terminal surface: renders to `out`, reads events and answers
/// from `input`. Holds the draft of the creation form between attempts.
pub struct TerminalScreen<R, W> {
    input: Lines<R>,
    out: W,
    draft: TaskForm,
    submit_label: String,
    modal_open: bool,
}

impl<R, W> TerminalScreen<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: input.lines(),
            out,
            draft: TaskForm::default(),
            submit_label: SUBMIT_IDLE_LABEL.to_string(),
            modal_open: false,
        }
    }

    pub fn draft(&self) -> &TaskForm {
        &self.draft
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Next input line, or `None` at end of input.
    pub async fn next_line(&mut self) -> Option<String> {
        match self.input.next_line().await {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read input");
                None
            }
        }
    }

    pub fn print(&mut self, message: &str) {
        self.emit(|w| writeln!(w, "{message}"));
    }

    pub fn prompt(&mut self, prompt: &str) {
        self.emit(|w| {
            write!(w, "{prompt}")?;
            w.flush()
        });
    }

    /// Ask for a value, offering `current` as the default. Blank keeps the
    /// default, a lone `-` clears it. `None` at end of input.
    async fn ask(&mut self, label: &str, current: &str) -> Option<String> {
        if current.is_empty() {
            self.prompt(&format!("{label}: "));
        } else {
            self.prompt(&format!("{label} [{current}]: "));
        }
        let line = self.next_line().await?;
        let line = line.trim_end_matches('\r');
        Some(match line.trim() {
            "" => current.to_string(),
            "-" => String::new(),
            _ => line.to_string(),
        })
    }

    /// Walk the user through the creation form. Choices re-ask until valid,
    /// like a select widget. Each answer is kept in the draft as it is given.
    pub async fn fill_form(&mut self) -> Option<TaskForm> {
        let name = self.ask("Name*", &self.draft.name.clone()).await?;
        self.draft.name = name;

        let description = self
            .ask("Description*", &self.draft.description.clone())
            .await?;
        self.draft.description = description;

        loop {
            let current = self.draft.status.as_str().to_string();
            let raw = self
                .ask("Status (pending/in-progress/completed)", &current)
                .await?;
            match TaskStatus::from_str(raw.trim()) {
                Some(status) => {
                    self.draft.status = status;
                    break;
                }
                None => self.print("  choose one of: pending, in-progress, completed"),
            }
        }

        loop {
            let current = self.draft.priority.as_str().to_string();
            let raw = self.ask("Priority (low/medium/high)", &current).await?;
            match TaskPriority::from_str(raw.trim()) {
                Some(priority) => {
                    self.draft.priority = priority;
                    break;
                }
                None => self.print("  choose one of: low, medium, high"),
            }
        }

        loop {
            let current = self
                .draft
                .deadline
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            let raw = self.ask("Deadline (YYYY-MM-DD, optional)", &current).await?;
            match parse_deadline(&raw) {
                Ok(deadline) => {
                    self.draft.deadline = deadline;
                    break;
                }
                Err(_) => self.print("  dates look like 2025-12-31"),
            }
        }

        Some(self.draft.clone())
    }

    fn emit(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if let Err(e) = f(&mut self.out) {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

#[async_trait]
impl<R, W> Screen for TerminalScreen<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    fn show_region(&mut self, region: &ListRegion) {
        self.emit(|w| text::write_region(w, region));
    }

    fn show_modal(&mut self, modal: &ModalView) {
        self.modal_open = true;
        self.emit(|w| text::write_modal(w, modal));
    }

    fn hide_modal(&mut self) {
        if self.modal_open {
            self.modal_open = false;
            self.emit(|w| writeln!(w, "(closed)"));
        }
    }

    fn alert(&mut self, message: &str) {
        self.emit(|w| text::write_alert(w, message));
    }

    async fn confirm(&mut self, question: &str) -> bool {
        self.prompt(&format!("{question} [y/N] "));
        match self.next_line().await {
            Some(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    fn reset_form(&mut self) {
        self.draft = TaskForm::default();
    }

    fn set_submit_label(&mut self, label: &str) {
        if self.submit_label != label {
            self.submit_label = label.to_string();
            self.emit(|w| writeln!(w, "[{label}]"));
        }
    }
}
