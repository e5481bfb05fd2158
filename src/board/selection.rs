use tracing::debug;

use super::TaskBoard;
use crate::gateway::TaskGateway;
use crate::models::TaskRecord;
use crate::view::{self, Screen};

impl<G: TaskGateway> TaskBoard<G> {
    /// Make `task` the open task and show its details.
    pub fn open<S: Screen + ?Sized>(&mut self, task: TaskRecord, screen: &mut S) {
        debug!(id = %task.id, "opening task");
        screen.show_modal(&view::modal_view(&task, &self.display));
        self.current = Some(task);
    }

    /// Open the `n`th tile (1-based) of the current snapshot.
    pub fn open_tile<S: Screen + ?Sized>(&mut self, n: usize, screen: &mut S) -> bool {
        let Some(task) = n.checked_sub(1).and_then(|i| self.tasks.get(i)).cloned() else {
            return false;
        };
        self.open(task, screen);
        true
    }

    /// Open the task whose id matches `reference` in the current snapshot.
    pub fn open_by_id<S: Screen + ?Sized>(&mut self, reference: &str, screen: &mut S) -> bool {
        let Some(task) = self.tasks.iter().find(|t| t.id.matches(reference)).cloned() else {
            return false;
        };
        self.open(task, screen);
        true
    }

    pub fn close<S: Screen + ?Sized>(&mut self, screen: &mut S) {
        screen.hide_modal();
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Escape key. Closes only an open modal.
    pub fn escape<S: Screen + ?Sized>(&mut self, screen: &mut S) -> bool {
        self.close_if_open(screen)
    }

    /// A click outside the modal's content area.
    pub fn click_outside<S: Screen + ?Sized>(&mut self, screen: &mut S) -> bool {
        self.close_if_open(screen)
    }

    fn close_if_open<S: Screen + ?Sized>(&mut self, screen: &mut S) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close(screen);
        true
    }
}
