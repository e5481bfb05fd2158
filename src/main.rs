use clap::Parser;
use std::process;

use taskdeck::board::TaskForm;
use taskdeck::cli::{self, Cli, Commands};
use taskdeck::config::Settings;

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();

    if let Err(e) = init_tracing(cli_args.quiet, cli_args.verbose) {
        eprintln!("Warning: {e}");
    }

    let settings = match Settings::load(cli_args.api_url.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let exit_code = match cli_args.command.unwrap_or(Commands::Shell) {
        Commands::List { json } => cli::list::run_list(&settings, json).await,
        Commands::Show { id, json } => cli::list::run_show(&settings, &id, json).await,
        Commands::Add {
            name,
            description,
            status,
            priority,
            deadline,
        } => {
            let form = TaskForm {
                name,
                description,
                status,
                priority,
                deadline,
            };
            cli::task::run_add(&settings, form).await
        }
        Commands::Toggle { id } => cli::task::run_toggle(&settings, &id).await,
        Commands::Delete { id, yes } => cli::task::run_delete(&settings, &id, yes).await,
        Commands::Shell => cli::shell::run(&settings).await,
    };

    process::exit(exit_code);
}

/// Logs go to stderr so they never mix with rendered output.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TASKDECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
