//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive
//! macros, including global options and subcommands. Running the binary
//! without a subcommand opens the interactive menu.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    BookCommand, EditEventCommand, MenuCommand, RegisterClientCommand, RegisterRoomCommand,
    ReportCommand,
};

/// Command-line tool for managing coworking room reservations.
#[derive(Parser)]
#[command(name = "cowork")]
#[command(version, about = "Manage coworking room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "COWORK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "COWORK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "COWORK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Subcommand to run; the interactive menu opens when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a room for a client
    Book(BookCommand),

    /// Edit the event name of a reservation
    EditEvent(EditEventCommand),

    /// Show or export the daily report
    Report(ReportCommand),

    /// Register a new client
    RegisterClient(RegisterClientCommand),

    /// Register a new room
    RegisterRoom(RegisterRoomCommand),

    /// Open the interactive menu
    Menu(MenuCommand),
}
