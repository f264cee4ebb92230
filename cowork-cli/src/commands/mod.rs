//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `book`: Book a room for a client
//! - `edit_event`: Rename the event of a reservation, or list a window
//! - `report`: Show or export the daily report
//! - `register_client`: Register a new client
//! - `register_room`: Register a new room
//! - `menu`: The interactive menu covering all of the above

pub mod book;
pub mod edit_event;
pub mod menu;
pub mod register_client;
pub mod register_room;
pub mod report;

pub use book::BookCommand;
pub use edit_event::EditEventCommand;
pub use menu::MenuCommand;
pub use register_client::RegisterClientCommand;
pub use register_room::RegisterRoomCommand;
pub use report::ReportCommand;
