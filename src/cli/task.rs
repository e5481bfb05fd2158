use async_trait::async_trait;

use crate::board::TaskForm;
use crate::config::Settings;
use crate::error::TaskdeckError;
use crate::view::{ListRegion, ModalView, Screen};

pub async fn run_add(settings: &Settings, form: TaskForm) -> i32 {
    super::report(add(settings, &form).await, false)
}

pub async fn run_toggle(settings: &Settings, id: &str) -> i32 {
    super::report(toggle(settings, id).await, false)
}

pub async fn run_delete(settings: &Settings, id: &str, assume_yes: bool) -> i32 {
    super::report(delete(settings, id, assume_yes).await, false)
}

async fn add(settings: &Settings, form: &TaskForm) -> Result<i32, TaskdeckError> {
    let mut board = super::connect(settings)?;
    let mut screen = super::stdio_screen();
    Ok(board.create(form, &mut screen).await.exit_code())
}

async fn toggle(settings: &Settings, id: &str) -> Result<i32, TaskdeckError> {
    let mut board = super::connect(settings)?;
    let mut screen = super::stdio_screen();
    board.fetch_tasks().await?;
    if !board.open_by_id(id, &mut screen) {
        return Err(TaskdeckError::task_not_found(id));
    }
    Ok(board.toggle_status(&mut screen).await.exit_code())
}

async fn delete(settings: &Settings, id: &str, assume_yes: bool) -> Result<i32, TaskdeckError> {
    let mut board = super::connect(settings)?;
    let mut screen = super::stdio_screen();
    board.fetch_tasks().await?;
    if !board.open_by_id(id, &mut screen) {
        return Err(TaskdeckError::task_not_found(id));
    }
    let outcome = if assume_yes {
        board.delete(&mut Preconfirmed(&mut screen)).await
    } else {
        board.delete(&mut screen).await
    };
    Ok(outcome.exit_code())
}

/// Answers every confirmation with yes; everything else goes to the inner screen.
struct Preconfirmed<'a, S>(&'a mut S);

#[async_trait]
impl<'a, S: Screen> Screen for Preconfirmed<'a, S> {
    fn show_region(&mut self, region: &ListRegion) {
        self.0.show_region(region);
    }

    fn show_modal(&mut self, modal: &ModalView) {
        self.0.show_modal(modal);
    }

    fn hide_modal(&mut self) {
        self.0.hide_modal();
    }

    fn alert(&mut self, message: &str) {
        self.0.alert(message);
    }

    async fn confirm(&mut self, _question: &str) -> bool {
        true
    }

    fn reset_form(&mut self) {
        self.0.reset_form();
    }

    fn set_submit_label(&mut self, label: &str) {
        self.0.set_submit_label(label);
    }
}
