//! The board: the last fetched task list, the open task, and the timers
//! that decorate the view. Every handler takes the [`Screen`] it draws on.

pub mod form;
mod intents;
mod selection;

pub use form::TaskForm;
pub use intents::IntentOutcome;

use tokio::time::Instant;
use tracing::{debug, error};

use crate::config::DisplaySettings;
use crate::error::TaskdeckError;
use crate::gateway::TaskGateway;
use crate::models::TaskRecord;
use crate::view::{self, ListRegion, Screen, SUBMIT_IDLE_LABEL};

pub struct TaskBoard<G> {
    gateway: G,
    display: DisplaySettings,
    /// Snapshot from the most recent successful list call. Never patched.
    tasks: Vec<TaskRecord>,
    /// The task shown in the modal; `None` while the modal is closed.
    current: Option<TaskRecord>,
    submit_revert_at: Option<Instant>,
}

impl<G: TaskGateway> TaskBoard<G> {
    pub fn new(gateway: G, display: DisplaySettings) -> Self {
        Self {
            gateway,
            display,
            tasks: Vec::new(),
            current: None,
            submit_revert_at: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn current(&self) -> Option<&TaskRecord> {
        self.current.as_ref()
    }

    /// Show loading, fetch the full list, then render it or the error panel.
    /// Used on entry and after every successful mutation.
    pub async fn load_tasks<S: Screen + ?Sized>(&mut self, screen: &mut S) -> bool {
        screen.show_region(&ListRegion::Loading);
        match self.gateway.list().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                let rendered = view::render_tiles(&tasks);
                self.tasks = tasks;
                screen.show_region(&ListRegion::Content(rendered));
                true
            }
            Err(e) => {
                error!(error = %e, "failed to load tasks");
                self.tasks.clear();
                screen.show_region(&ListRegion::Error(view::load_error_message(&e.to_string())));
                false
            }
        }
    }

    /// Fetch the list into the snapshot without drawing anything.
    pub async fn fetch_tasks(&mut self) -> Result<&[TaskRecord], TaskdeckError> {
        self.tasks = self.gateway.list().await?;
        Ok(&self.tasks)
    }

    /// When the submit control's success label is due to revert.
    pub fn submit_revert_at(&self) -> Option<Instant> {
        self.submit_revert_at
    }

    /// Fire any timer that is due at `now`.
    pub fn poll_timers<S: Screen + ?Sized>(&mut self, now: Instant, screen: &mut S) {
        if self.submit_revert_at.is_some_and(|at| now >= at) {
            self.submit_revert_at = None;
            screen.set_submit_label(SUBMIT_IDLE_LABEL);
        }
    }
}
