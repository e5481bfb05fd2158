//! What the board shows, and the surface it shows it on.

mod render;
mod terminal;

pub use render::*;
pub use terminal::TerminalScreen;

use async_trait::async_trait;

use crate::models::TaskId;

pub const SUBMIT_IDLE_LABEL: &str = "Create Task";
pub const SUBMIT_SUCCESS_LABEL: &str = "✓ Task Created!";
pub const MARK_COMPLETE_LABEL: &str = "Mark Complete";
pub const MARK_INCOMPLETE_LABEL: &str = "Mark Incomplete";

/// The list container. Exactly one of loading, error or content is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRegion {
    Loading,
    Error(String),
    Content(ListView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Placeholder shown instead of an empty list.
    Empty,
    Tiles(Vec<Tile>),
}

impl ListView {
    pub fn tiles(&self) -> &[Tile] {
        match self {
            Self::Empty => &[],
            Self::Tiles(tiles) => tiles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TaskId,
    pub glyph: &'static str,
    pub name: String,
    pub status: String,
}

/// Detail fields of the open task as displayed in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub created: String,
    pub toggle_label: &'static str,
}

/// Everything the board can do to the user interface.
///
/// Implementations own the widgets; the board owns the state.
#[async_trait]
pub trait Screen: Send {
    /// Replace the whole list container.
    fn show_region(&mut self, region: &ListRegion);

    /// Populate and reveal the detail modal.
    fn show_modal(&mut self, modal: &ModalView);

    fn hide_modal(&mut self);

    /// Blocking, user-visible notice.
    fn alert(&mut self, message: &str);

    /// Yes/no question. Anything but an explicit yes is a no.
    async fn confirm(&mut self, question: &str) -> bool;

    /// Clear the creation form back to its blank state.
    fn reset_form(&mut self);

    fn set_submit_label(&mut self, label: &str);
}
