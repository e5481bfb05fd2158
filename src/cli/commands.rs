use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::board::form::parse_deadline;
use crate::models::{TaskPriority, TaskStatus};

pub const VERSION: &str = env!("TASKDECK_VERSION");

#[derive(Parser)]
#[command(
    name = "taskdeck",
    version = VERSION,
    about = "Terminal client for a remote task list service",
    after_help = "\
CONFIG:
  Settings come from (highest first): --api-url, TASKDECK_* environment
  variables, ./.taskdeck.toml, <config dir>/taskdeck/config.toml.
  Log level: TASKDECK_LOG (e.g. TASKDECK_LOG=debug).

EXIT CODES:
  0  Success
  1  Error (service failure, missing required field, bad config)
  2  Nothing done (delete declined, or no such task)

BEHAVIOR NOTES:
  Without a command, starts the interactive board (`shell`).
  `toggle` flips completed -> pending, anything else -> completed.
  A --deadline is appended to the description; it is not stored separately."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the task service (e.g. http://localhost:3000/api)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and print all tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one task's details
    Show {
        /// Task ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a task
    Add {
        /// Task name
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "pending", value_parser = parse_status)]
        status: TaskStatus,
        #[arg(long, default_value = "medium", value_parser = parse_priority)]
        priority: TaskPriority,
        /// Deadline as YYYY-MM-DD, appended to the description
        #[arg(long, value_parser = parse_deadline_arg)]
        deadline: Option<NaiveDate>,
    },

    /// Flip a task between completed and pending
    Toggle {
        /// Task ID
        id: String,
    },

    /// Delete a task (asks for confirmation)
    Delete {
        /// Task ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Interactive board (default)
    Shell,
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::from_str(s)
        .ok_or_else(|| format!("'{s}' is not one of: pending, in-progress, completed"))
}

fn parse_priority(s: &str) -> Result<TaskPriority, String> {
    TaskPriority::from_str(s).ok_or_else(|| format!("'{s}' is not one of: low, medium, high"))
}

fn parse_deadline_arg(s: &str) -> Result<NaiveDate, String> {
    match parse_deadline(s) {
        Ok(Some(date)) => Ok(date),
        Ok(None) => Err("deadline must not be empty".to_string()),
        Err(e) => Err(format!("expected YYYY-MM-DD: {e}")),
    }
}
