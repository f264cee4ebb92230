//! Room availability computation.
//!
//! Availability for a date is derived, never stored: a shift is open
//! exactly when no committed reservation holds it for that room and
//! date.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::room::Room;
use crate::shift::Shift;

/// A room together with its open shifts on a particular date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomAvailability {
    /// The room in question.
    pub room: Room,
    /// Shifts still open on the queried date, in enumeration order.
    pub open_shifts: Vec<Shift>,
}

/// Computes per-room availability for a date.
///
/// Rooms with no open shift are omitted; rooms are returned in id
/// order and each room's open shifts in enumeration order.
///
/// # Errors
///
/// Returns [`Error::NoAvailability`] if every shift of every room is
/// booked (or no rooms are registered), or a database error if a query
/// fails.
pub fn available_rooms(conn: &Connection, date: NaiveDate) -> Result<Vec<RoomAvailability>> {
    let mut available = Vec::new();

    for room in Database::list_rooms(conn)? {
        let booked = Database::booked_shifts(conn, room.id(), date)?;
        let open_shifts: Vec<Shift> = Shift::ALL
            .into_iter()
            .filter(|shift| !booked.contains(shift))
            .collect();
        if !open_shifts.is_empty() {
            available.push(RoomAvailability { room, open_shifts });
        }
    }

    if available.is_empty() {
        return Err(Error::NoAvailability { date });
    }
    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{test_database, test_reservation};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_shifts_open_when_nothing_booked() {
        let mut db = test_database();
        db.create_room("Boardroom", 12).unwrap();
        db.create_room("Studio", 4).unwrap();

        let rooms = available_rooms(db.connection(), date(2025, 11, 17)).unwrap();
        assert_eq!(rooms.len(), 2);
        for entry in &rooms {
            assert_eq!(entry.open_shifts, Shift::ALL);
        }
    }

    #[test]
    fn test_booked_shift_removed() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();
        let d = date(2025, 11, 17);

        db.create_reservation(&test_reservation(
            1000,
            client.id(),
            room.id(),
            d,
            Shift::Afternoon,
        ))
        .unwrap();

        let rooms = available_rooms(db.connection(), d).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].open_shifts, [Shift::Morning, Shift::Evening]);

        // Other dates are unaffected
        let rooms = available_rooms(db.connection(), date(2025, 11, 18)).unwrap();
        assert_eq!(rooms[0].open_shifts, Shift::ALL);
    }

    #[test]
    fn test_two_booked_shifts_leave_exactly_one_open() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();
        let d = date(2025, 11, 17);

        for (folio, shift) in [(1000, Shift::Morning), (1001, Shift::Afternoon)] {
            db.create_reservation(&test_reservation(folio, client.id(), room.id(), d, shift))
                .unwrap();
        }

        let rooms = available_rooms(db.connection(), d).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].open_shifts, [Shift::Evening]);
    }

    #[test]
    fn test_fully_booked_room_omitted() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let full = db.create_room("Boardroom", 12).unwrap();
        let open = db.create_room("Studio", 4).unwrap();
        let d = date(2025, 11, 17);

        for (i, shift) in Shift::ALL.into_iter().enumerate() {
            let folio = u16::try_from(1000 + i).unwrap();
            db.create_reservation(&test_reservation(folio, client.id(), full.id(), d, shift))
                .unwrap();
        }

        let rooms = available_rooms(db.connection(), d).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room.id(), open.id());
    }

    #[test]
    fn test_no_availability_error() {
        let mut db = test_database();
        let d = date(2025, 11, 17);

        // No rooms registered at all
        let err = available_rooms(db.connection(), d).unwrap_err();
        assert!(matches!(err, Error::NoAvailability { .. }));

        // Single room, every shift taken
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();
        for (i, shift) in Shift::ALL.into_iter().enumerate() {
            let folio = u16::try_from(1000 + i).unwrap();
            db.create_reservation(&test_reservation(folio, client.id(), room.id(), d, shift))
                .unwrap();
        }
        let err = available_rooms(db.connection(), d).unwrap_err();
        assert!(matches!(err, Error::NoAvailability { .. }));
    }
}
