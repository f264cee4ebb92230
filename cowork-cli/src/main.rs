//! Main entry point for the cowork CLI.
//!
//! This is the command-line interface for the cowork room reservation
//! system. It provides commands for the daily workflows:
//! - `book`: Book a room for a client
//! - `edit-event`: Rename the event of a reservation
//! - `report`: Show or export the daily report
//! - `register-client` / `register-room`: Add records
//! - `menu` (or no subcommand): Interactive menu

mod cli;
mod commands;
mod error;
mod prompt;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::MenuCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = cowork::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command; no subcommand opens the interactive menu
    let result = match cli.command {
        Some(cli::Command::Book(cmd)) => cmd.execute(&global),
        Some(cli::Command::EditEvent(cmd)) => cmd.execute(&global),
        Some(cli::Command::Report(cmd)) => cmd.execute(&global),
        Some(cli::Command::RegisterClient(cmd)) => cmd.execute(&global),
        Some(cli::Command::RegisterRoom(cmd)) => cmd.execute(&global),
        Some(cli::Command::Menu(cmd)) => cmd.execute(&global),
        None => MenuCommand::default().execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
