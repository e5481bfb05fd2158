pub mod commands;
pub mod list;
pub mod shell;
pub mod task;

pub use commands::*;

use std::io::{self, Stdout};

use tokio::io::{BufReader, Stdin};

use crate::board::TaskBoard;
use crate::config::Settings;
use crate::error::{ErrorCode, TaskdeckError};
use crate::gateway::HttpGateway;
use crate::output;
use crate::view::TerminalScreen;

pub type StdioScreen = TerminalScreen<BufReader<Stdin>, Stdout>;

pub fn connect(settings: &Settings) -> Result<TaskBoard<HttpGateway>, TaskdeckError> {
    let gateway = HttpGateway::new(settings)?;
    Ok(TaskBoard::new(gateway, settings.display.clone()))
}

pub fn stdio_screen() -> StdioScreen {
    TerminalScreen::new(BufReader::new(tokio::io::stdin()), io::stdout())
}

/// Turn a command result into an exit code, printing the error if any.
pub fn report(result: Result<i32, TaskdeckError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                println!("{}", output::json::to_pretty(&output::json::error(&e)));
            } else {
                eprintln!("Error: {e}");
            }
            match e.code() {
                ErrorCode::TaskNotFound => 2,
                _ => 1,
            }
        }
    }
}
