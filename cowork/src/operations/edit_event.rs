//! Editing the event name of an existing reservation.
//!
//! This is the only permitted modification of a committed reservation.
//! The workflow is two-step: list the reservations in a date window so
//! the caller can pick a folio, then rename the chosen event.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::folio::Folio;
use crate::reservation::Reservation;

/// An inclusive date window for selecting reservations to edit.
#[derive(Debug, Clone, Copy)]
pub struct EditWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl EditWindow {
    /// Creates a window, rejecting inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::Validation {
                field: "date_range".into(),
                message: format!("start {start} is after end {end}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Lists the reservations inside the window, ordered by date then
    /// folio.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservations(&self, conn: &Connection) -> Result<Vec<Reservation>> {
        Database::reservations_in_range(conn, self.start, self.end)
    }
}

/// Renames the event of the reservation identified by folio.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no reservation carries the folio, a
/// validation error if the new name is empty, or a database error if
/// the update fails.
pub fn rename_event(db: &mut Database, folio: Folio, new_name: &str) -> Result<()> {
    if db.update_event_name(folio, new_name)? {
        log::info!("renamed event of folio {folio}");
        Ok(())
    } else {
        Err(Error::NotFound {
            resource: format!("reservation with folio {folio}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{test_database, test_reservation};
    use crate::shift::Shift;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        assert!(EditWindow::new(date(2025, 11, 20), date(2025, 11, 18)).is_err());
        assert!(EditWindow::new(date(2025, 11, 18), date(2025, 11, 18)).is_ok());
    }

    #[test]
    fn test_window_lists_only_contained_reservations() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();

        for (folio, day) in [(1000, 15), (1001, 18), (1002, 21)] {
            db.create_reservation(&test_reservation(
                folio,
                client.id(),
                room.id(),
                date(2025, 11, day),
                Shift::Morning,
            ))
            .unwrap();
        }

        let window = EditWindow::new(date(2025, 11, 16), date(2025, 11, 20)).unwrap();
        let rows = window.reservations(db.connection()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].folio().value(), 1001);
    }

    #[test]
    fn test_rename_event() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();
        let reservation = test_reservation(
            1234,
            client.id(),
            room.id(),
            date(2025, 11, 17),
            Shift::Morning,
        );
        db.create_reservation(&reservation).unwrap();

        rename_event(&mut db, reservation.folio(), "Retrospective").unwrap();
        let stored = Database::get_reservation(db.connection(), reservation.folio())
            .unwrap()
            .unwrap();
        assert_eq!(stored.event_name(), "Retrospective");
    }

    #[test]
    fn test_rename_unknown_folio_is_not_found() {
        let mut db = test_database();
        let err = rename_event(&mut db, Folio::try_from(5555u16).unwrap(), "New").unwrap_err();
        assert!(err.is_not_found());
    }
}
