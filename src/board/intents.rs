use tokio::time::Instant;
use tracing::{error, info, warn};

use super::{TaskBoard, TaskForm};
use crate::gateway::TaskGateway;
use crate::view::{self, Screen, SUBMIT_SUCCESS_LABEL};

/// How an intent ended. Failures have already been reported on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Completed,
    /// Local validation blocked the request.
    Rejected,
    /// The task service failed.
    Failed,
    /// The user declined the confirmation.
    Cancelled,
    /// No task is open.
    NoSelection,
}

impl IntentOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::Rejected | Self::Failed => 1,
            Self::Cancelled | Self::NoSelection => 2,
        }
    }
}

impl<G: TaskGateway> TaskBoard<G> {
    /// Submit the creation form. On failure the form is left as it was.
    pub async fn create<S: Screen + ?Sized>(&mut self, form: &TaskForm, screen: &mut S) -> IntentOutcome {
        let new_task = match form.to_new_task(&self.display.date_format) {
            Ok(task) => task,
            Err(e) => {
                warn!(error = %e, "create rejected");
                screen.alert(&format!("Please fill in all required fields. {e}"));
                return IntentOutcome::Rejected;
            }
        };

        match self.gateway.create(&new_task).await {
            Ok(created) => {
                info!(id = %created.id, name = %created.name, "task created");
                screen.reset_form();
                self.load_tasks(screen).await;
                screen.set_submit_label(SUBMIT_SUCCESS_LABEL);
                let now = Instant::now();
                self.submit_revert_at =
                    Some(now.checked_add(self.display.success_flash()).unwrap_or(now));
                IntentOutcome::Completed
            }
            Err(e) => {
                error!(error = %e, "failed to create task");
                screen.alert(&format!("Failed to create task: {e}"));
                IntentOutcome::Failed
            }
        }
    }

    /// `completed` goes back to `pending`; anything else becomes `completed`.
    pub async fn toggle_status<S: Screen + ?Sized>(&mut self, screen: &mut S) -> IntentOutcome {
        let Some(task) = self.current.as_ref() else {
            return IntentOutcome::NoSelection;
        };
        let id = task.id.clone();
        let status = task.status.toggled();

        if let Err(e) = self.gateway.patch_status(&id, &status).await {
            error!(error = %e, %id, "failed to update task status");
            screen.alert(&format!("Failed to update task: {e}"));
            return IntentOutcome::Failed;
        }

        info!(%id, %status, "task status updated");
        if let Some(current) = self.current.as_mut() {
            current.status = status;
            screen.show_modal(&view::modal_view(current, &self.display));
        }
        self.load_tasks(screen).await;
        IntentOutcome::Completed
    }

    /// Delete the open task after the user confirms it by name.
    pub async fn delete<S: Screen + ?Sized>(&mut self, screen: &mut S) -> IntentOutcome {
        let Some(task) = self.current.as_ref() else {
            return IntentOutcome::NoSelection;
        };
        let id = task.id.clone();
        let question = format!("Are you sure you want to delete \"{}\"?", task.name);

        if !screen.confirm(&question).await {
            info!(%id, "delete declined");
            return IntentOutcome::Cancelled;
        }

        if let Err(e) = self.gateway.delete(&id).await {
            error!(error = %e, %id, "failed to delete task");
            screen.alert(&format!("Failed to delete task: {e}"));
            return IntentOutcome::Failed;
        }

        info!(%id, "task deleted");
        self.close(screen);
        self.load_tasks(screen).await;
        IntentOutcome::Completed
    }
}
