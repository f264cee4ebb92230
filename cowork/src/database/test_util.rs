//! Shared helpers for database tests.

use chrono::NaiveDate;

use crate::client::ClientId;
use crate::folio::Folio;
use crate::reservation::Reservation;
use crate::room::RoomId;
use crate::shift::Shift;

use super::connection::Database;

/// Opens a fresh in-memory database with the schema initialized.
pub(crate) fn test_database() -> Database {
    Database::open_in_memory().unwrap()
}

/// Builds a reservation with a placeholder event name.
pub(crate) fn test_reservation(
    folio: u16,
    client_id: ClientId,
    room_id: RoomId,
    date: NaiveDate,
    shift: Shift,
) -> Reservation {
    Reservation::new(
        Folio::try_from(folio).unwrap(),
        client_id,
        room_id,
        date,
        shift,
        "Test event",
    )
    .unwrap()
}
