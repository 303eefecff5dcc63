//! HYFI Launcher CLI - bootstrap and run the flood monitoring dashboard
//!
//! Usage: hyfi-launcher [COMMAND]
//!
//! Commands:
//!   run     Set up if needed, then start the dashboard (the default)
//!   setup   Create the environment and install dependencies
//!   check   Report launch prerequisites
//!   clean   Remove the virtual environment

mod cli;
mod commands;

use clap::Parser;
use is_terminal::IsTerminal;

use cli::{Cli, Commands};
use hyfi_launcher::LaunchError;

fn main() {
    let cli = Cli::parse();
    let yes = cli.yes || std::env::var_os("HYFI_YES").is_some();

    let result = run(cli);

    if let Err(err) = result {
        eprintln!();
        eprintln!("✗ Error: {err:#}");

        let code = err
            .downcast_ref::<LaunchError>()
            .map(LaunchError::exit_code)
            .unwrap_or(1);

        pause_for_ack(yes);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = commands::project_root(cli.project)?;

    match cli.command {
        None => commands::cmd_run(&root, None, cli.verbose),
        Some(Commands::Run { port }) => commands::cmd_run(&root, port, cli.verbose),
        Some(Commands::Setup) => commands::cmd_setup(&root, cli.verbose),
        Some(Commands::Check) => commands::cmd_check(&root, cli.json),
        Some(Commands::Clean) => {
            let yes = cli.yes || std::env::var_os("HYFI_YES").is_some();
            commands::cmd_clean(&root, yes)
        }
    }
}

/// Hold the window open so an operator who double-clicked the launcher can
/// read the error. Skipped when stdin is not a terminal or --yes was given.
fn pause_for_ack(yes: bool) {
    if yes || !std::io::stdin().is_terminal() {
        return;
    }

    eprint!("Press Enter to close...");
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
