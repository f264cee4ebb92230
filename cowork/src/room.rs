//! Room records.
//!
//! Rooms are registered once with a name and positive capacity, and are
//! never mutated or deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::non_empty;
use crate::error::Error;

/// A system-assigned room identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i64);

impl RoomId {
    /// Wraps a raw database id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered room.
///
/// # Examples
///
/// ```
/// use cowork::{Room, RoomId};
///
/// let room = Room::new(RoomId::new(1), "Boardroom", 12).unwrap();
/// assert_eq!(room.capacity(), 12);
///
/// // Capacity must be positive
/// assert!(Room::new(RoomId::new(2), "Closet", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    capacity: u32,
}

impl Room {
    /// Creates a room record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty after trimming
    /// or the capacity is zero.
    pub fn new(id: RoomId, name: impl Into<String>, capacity: u32) -> Result<Self, Error> {
        let name = non_empty("room_name", name.into())?;
        if capacity == 0 {
            return Err(Error::Validation {
                field: "capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(Self { id, name, capacity })
    }

    /// Returns the room id.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum occupancy of the room.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }
}
