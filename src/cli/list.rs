use serde_json::json;

use crate::config::Settings;
use crate::error::TaskdeckError;
use crate::output;

pub async fn run_list(settings: &Settings, json_output: bool) -> i32 {
    super::report(list(settings, json_output).await, json_output)
}

pub async fn run_show(settings: &Settings, id: &str, json_output: bool) -> i32 {
    super::report(show(settings, id, json_output).await, json_output)
}

async fn list(settings: &Settings, json_output: bool) -> Result<i32, TaskdeckError> {
    let mut board = super::connect(settings)?;

    if json_output {
        let tasks = board.fetch_tasks().await?;
        println!(
            "{}",
            output::json::to_pretty(&output::json::success(output::json::task_list_json(tasks)))
        );
        return Ok(0);
    }

    let mut screen = super::stdio_screen();
    Ok(if board.load_tasks(&mut screen).await { 0 } else { 1 })
}

async fn show(settings: &Settings, id: &str, json_output: bool) -> Result<i32, TaskdeckError> {
    let mut board = super::connect(settings)?;
    board.fetch_tasks().await?;

    if json_output {
        let task = board
            .tasks()
            .iter()
            .find(|t| t.id.matches(id))
            .ok_or_else(|| TaskdeckError::task_not_found(id))?;
        println!(
            "{}",
            output::json::to_pretty(&output::json::success(json!({
                "task": output::json::task_json(task)
            })))
        );
        return Ok(0);
    }

    let mut screen = super::stdio_screen();
    if !board.open_by_id(id, &mut screen) {
        return Err(TaskdeckError::task_not_found(id));
    }
    Ok(0)
}
