//! Registration of clients and rooms.

use crate::client::Client;
use crate::database::Database;
use crate::error::Result;
use crate::room::Room;

/// A request to register a new client.
#[derive(Debug, Clone)]
pub struct RegisterClient {
    /// The client's first name.
    pub first_name: String,
    /// The client's last name.
    pub last_name: String,
}

impl RegisterClient {
    /// Registers the client and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either name is empty, or a
    /// database error if the insert fails.
    pub fn execute(&self, db: &mut Database) -> Result<Client> {
        let client = db.create_client(&self.first_name, &self.last_name)?;
        log::info!("registered client {} ({})", client.full_name(), client.id());
        Ok(client)
    }
}

/// A request to register a new room.
#[derive(Debug, Clone)]
pub struct RegisterRoom {
    /// The room name.
    pub name: String,
    /// The maximum occupancy; must be positive.
    pub capacity: u32,
}

impl RegisterRoom {
    /// Registers the room and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty or the capacity
    /// is zero, or a database error if the insert fails.
    pub fn execute(&self, db: &mut Database) -> Result<Room> {
        let room = db.create_room(&self.name, self.capacity)?;
        log::info!("registered room {} ({})", room.name(), room.id());
        Ok(room)
    }
}
