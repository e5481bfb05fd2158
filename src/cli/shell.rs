use std::io::Write;

use tokio::io::AsyncBufRead;
use tokio::time::{sleep_until, Instant};

use crate::board::{IntentOutcome, TaskBoard};
use crate::config::Settings;
use crate::gateway::TaskGateway;
use crate::view::TerminalScreen;

const HELP: &str = "\
Commands:
  list | reload        reload the task list
  open <n> | <n>       open task number n
  toggle               mark the open task complete / incomplete
  delete               delete the open task (asks first)
  close                close the open task
  esc                  press Escape
  outside              click outside the open task
  new                  fill in the new-task form (blank keeps, - clears)
  help                 show this help
  quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Reload,
    Open(usize),
    Toggle,
    Delete,
    Close,
    Escape,
    ClickOutside,
    New,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    let command = match head.to_ascii_lowercase().as_str() {
        "list" | "ls" | "reload" => ShellCommand::Reload,
        "open" | "o" => {
            let n = arg.ok_or("usage: open <n>")?;
            ShellCommand::Open(n.parse().map_err(|_| format!("not a task number: {n}"))?)
        }
        "toggle" | "t" => ShellCommand::Toggle,
        "delete" | "rm" => ShellCommand::Delete,
        "close" | "x" => ShellCommand::Close,
        "esc" | "escape" => ShellCommand::Escape,
        "outside" | "backdrop" => ShellCommand::ClickOutside,
        "new" | "add" => ShellCommand::New,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => match other.parse::<usize>() {
            Ok(n) => ShellCommand::Open(n),
            Err(_) => return Err(format!("unknown command: {other} (try `help`)")),
        },
    };
    Ok(Some(command))
}

pub async fn run(settings: &Settings) -> i32 {
    let mut board = match super::connect(settings) {
        Ok(board) => board,
        Err(e) => return super::report(Err(e), false),
    };
    let mut screen = super::stdio_screen();
    run_session(&mut board, &mut screen).await;
    0
}

enum Step {
    Line(Option<String>),
    Timer,
}

/// Drive the board from `screen`'s input until `quit` or end of input.
/// Events are handled one at a time; timers fire while waiting for input.
pub async fn run_session<G, R, W>(board: &mut TaskBoard<G>, screen: &mut TerminalScreen<R, W>)
where
    G: TaskGateway,
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    screen.print("taskdeck: type `help` for commands");
    board.load_tasks(screen).await;

    let mut prompt = true;
    loop {
        if prompt {
            screen.prompt("> ");
        }
        let revert_at = board.submit_revert_at();
        let step = tokio::select! {
            line = screen.next_line() => Step::Line(line),
            _ = sleep_until(revert_at.unwrap_or_else(Instant::now)), if revert_at.is_some() => Step::Timer,
        };

        let line = match step {
            Step::Timer => {
                board.poll_timers(Instant::now(), screen);
                prompt = false;
                continue;
            }
            Step::Line(None) => break,
            Step::Line(Some(line)) => line,
        };
        prompt = true;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                screen.print(&message);
                continue;
            }
        };

        match command {
            ShellCommand::Reload => {
                board.load_tasks(screen).await;
            }
            ShellCommand::Open(n) => {
                if !board.open_tile(n, screen) {
                    screen.print(&format!("no task number {n}"));
                }
            }
            ShellCommand::Toggle => {
                if board.toggle_status(screen).await == IntentOutcome::NoSelection {
                    screen.print("open a task first");
                }
            }
            ShellCommand::Delete => {
                if board.delete(screen).await == IntentOutcome::NoSelection {
                    screen.print("open a task first");
                }
            }
            ShellCommand::Close => board.close(screen),
            ShellCommand::Escape => {
                board.escape(screen);
            }
            ShellCommand::ClickOutside => {
                board.click_outside(screen);
            }
            ShellCommand::New => match screen.fill_form().await {
                Some(form) => {
                    board.create(&form, screen).await;
                }
                None => break,
            },
            ShellCommand::Help => screen.print(HELP),
            ShellCommand::Quit => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_bare_numbers() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("open 3"), Ok(Some(ShellCommand::Open(3))));
        assert_eq!(parse_command("2"), Ok(Some(ShellCommand::Open(2))));
        assert_eq!(parse_command("ESC"), Ok(Some(ShellCommand::Escape)));
        assert_eq!(parse_command("outside"), Ok(Some(ShellCommand::ClickOutside)));
        assert!(parse_command("open").is_err());
        assert!(parse_command("open two").is_err());
        assert!(parse_command("fly").unwrap_err().contains("unknown command"));
    }
}
