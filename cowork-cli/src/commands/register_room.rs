//! Register-room command implementation.

use clap::Args;

use cowork::operations::RegisterRoom;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Register a new room.
#[derive(Args)]
pub struct RegisterRoomCommand {
    /// Room name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Maximum occupancy (must be positive)
    #[arg(long, value_name = "COUNT")]
    pub capacity: u32,
}

impl RegisterRoomCommand {
    /// Execute the register-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let room = RegisterRoom {
            name: self.name,
            capacity: self.capacity,
        }
        .execute(&mut db)?;

        println!("Registered room {} with id {}", room.name(), room.id());
        Ok(())
    }
}
