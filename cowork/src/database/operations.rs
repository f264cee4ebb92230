//! Database CRUD operations for clients, rooms and reservations.
//!
//! This module implements the storage contract of the reservation
//! system: record creation, the filtered reads that back availability
//! and reporting, and the single permitted update (a reservation's
//! event name, keyed by folio).

use chrono::NaiveDate;
use rusqlite::{params, Connection, TransactionBehavior};

use crate::client::{Client, ClientId};
use crate::error::{Error, Result};
use crate::folio::Folio;
use crate::reservation::{Reservation, ReservationSummary};
use crate::room::{Room, RoomId};
use crate::shift::Shift;

use super::connection::Database;
use super::schema::INSERT_RESERVATION;

/// Converts a date to its stored ISO-8601 text form.
pub(crate) fn date_to_sql(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a stored ISO-8601 date column.
fn sql_to_date(text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Parses a stored shift column.
fn sql_to_shift(text: &str) -> rusqlite::Result<Shift> {
    text.parse::<Shift>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Helper function to deserialize a client from a database row.
///
/// Expects row fields in this order: id, `first_name`, `last_name`.
fn row_to_client(row: &rusqlite::Row<'_>) -> rusqlite::Result<Client> {
    let id: i64 = row.get(0)?;
    let first_name: String = row.get(1)?;
    let last_name: String = row.get(2)?;
    Client::new(ClientId::new(id), first_name, last_name)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Helper function to deserialize a room from a database row.
///
/// Expects row fields in this order: id, name, capacity.
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let capacity: u32 = row.get(2)?;
    Room::new(RoomId::new(id), name, capacity)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: folio, `client_id`, `room_id`,
/// date, shift, `event_name`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let folio: i64 = row.get(0)?;
    let client_id: i64 = row.get(1)?;
    let room_id: i64 = row.get(2)?;
    let date: String = row.get(3)?;
    let shift: String = row.get(4)?;
    let event_name: String = row.get(5)?;

    let folio =
        Folio::try_from(folio).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Reservation::new(
        folio,
        ClientId::new(client_id),
        RoomId::new(room_id),
        sql_to_date(&date)?,
        sql_to_shift(&shift)?,
        event_name,
    )
    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

// SQL statements for CRUD operations

const INSERT_CLIENT: &str = "INSERT INTO clients (first_name, last_name) VALUES (?, ?)";

const INSERT_ROOM: &str = "INSERT INTO rooms (name, capacity) VALUES (?, ?)";

const LIST_CLIENTS: &str = r"
    SELECT id, first_name, last_name
    FROM clients
    ORDER BY last_name, first_name
";

const LIST_ROOMS: &str = r"
    SELECT id, name, capacity
    FROM rooms
    ORDER BY id
";

const SELECT_CLIENT: &str = "SELECT id, first_name, last_name FROM clients WHERE id = ?";

const SELECT_ROOM: &str = "SELECT id, name, capacity FROM rooms WHERE id = ?";

const SELECT_BOOKED_SHIFTS: &str = r"
    SELECT shift
    FROM reservations
    WHERE room_id = ? AND date = ?
";

const CHECK_FOLIO: &str = "SELECT COUNT(*) FROM reservations WHERE folio = ?";

const CHECK_SHIFT_TAKEN: &str = r"
    SELECT COUNT(*) FROM reservations
    WHERE room_id = ? AND date = ? AND shift = ?
";

const SELECT_BY_FOLIO: &str = r"
    SELECT folio, client_id, room_id, date, shift, event_name
    FROM reservations
    WHERE folio = ?
";

const SELECT_DAILY_SUMMARIES: &str = r"
    SELECT R.folio, C.first_name || ' ' || C.last_name, S.name, R.shift, R.event_name
    FROM reservations R
    JOIN clients C ON R.client_id = C.id
    JOIN rooms S ON R.room_id = S.id
    WHERE R.date = ?
    ORDER BY R.folio
";

const SELECT_BY_DATE_RANGE: &str = r"
    SELECT folio, client_id, room_id, date, shift, event_name
    FROM reservations
    WHERE date BETWEEN ? AND ?
    ORDER BY date, folio
";

const UPDATE_EVENT_NAME: &str = "UPDATE reservations SET event_name = ? WHERE folio = ?";

impl Database {
    /// Registers a new client and returns the stored record with its
    /// assigned id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either name is empty after
    /// trimming, or a database error if the insert fails.
    pub fn create_client(&mut self, first_name: &str, last_name: &str) -> Result<Client> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(Error::Validation {
                field: "client_name".into(),
                message: "first and last name must be non-empty".into(),
            });
        }

        self.conn.execute(INSERT_CLIENT, params![first_name, last_name])?;
        let id = self.conn.last_insert_rowid();
        Client::new(ClientId::new(id), first_name, last_name)
    }

    /// Registers a new room and returns the stored record with its
    /// assigned id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty or the capacity
    /// is zero, or a database error if the insert fails.
    pub fn create_room(&mut self, name: &str, capacity: u32) -> Result<Room> {
        // Validate before touching storage
        Room::new(RoomId::new(0), name, capacity)?;

        self.conn.execute(INSERT_ROOM, params![name.trim(), capacity])?;
        let id = self.conn.last_insert_rowid();
        Room::new(RoomId::new(id), name, capacity)
    }

    /// Lists all registered clients, ordered by last then first name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_clients(conn: &Connection) -> Result<Vec<Client>> {
        let mut stmt = conn.prepare(LIST_CLIENTS)?;
        let clients = stmt
            .query_map([], row_to_client)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(clients)
    }

    /// Lists all registered rooms, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Retrieves a client by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not
    /// found").
    pub fn get_client(conn: &Connection, id: ClientId) -> Result<Option<Client>> {
        let mut stmt = conn.prepare(SELECT_CLIENT)?;
        match stmt.query_row(params![id.value()], row_to_client) {
            Ok(client) => Ok(Some(client)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Checks whether a client with the given id is registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn client_exists(conn: &Connection, id: ClientId) -> Result<bool> {
        Ok(Self::get_client(conn, id)?.is_some())
    }

    /// Retrieves a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not
    /// found").
    pub fn get_room(conn: &Connection, id: RoomId) -> Result<Option<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOM)?;
        match stmt.query_row(params![id.value()], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the shifts already booked for a room on a date, in
    /// enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored shift value
    /// cannot be parsed.
    pub fn booked_shifts(conn: &Connection, room_id: RoomId, date: NaiveDate) -> Result<Vec<Shift>> {
        let mut stmt = conn.prepare(SELECT_BOOKED_SHIFTS)?;
        let mut shifts = stmt
            .query_map(params![room_id.value(), date_to_sql(date)], |row| {
                let text: String = row.get(0)?;
                sql_to_shift(&text)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        shifts.sort_unstable();
        Ok(shifts)
    }

    /// Checks whether a folio is already assigned to a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn folio_exists(conn: &Connection, folio: Folio) -> Result<bool> {
        let count: i64 = conn.query_row(CHECK_FOLIO, params![folio.value()], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Commits a new reservation.
    ///
    /// The insert runs in an IMMEDIATE transaction that first re-checks
    /// that the requested shift is still open for the room and date.
    /// This closes the window between the availability read and the
    /// commit: if another session took the shift in the interim, the
    /// commit fails with [`Error::ShiftUnavailable`] instead of
    /// double-booking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The shift has been taken since availability was computed
    /// - The transaction cannot be started or committed
    /// - The insert fails (including folio collisions)
    pub fn create_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let taken: i64 = tx.query_row(
            CHECK_SHIFT_TAKEN,
            params![
                reservation.room_id().value(),
                date_to_sql(reservation.date()),
                reservation.shift().as_str(),
            ],
            |row| row.get(0),
        )?;
        if taken > 0 {
            return Err(Error::ShiftUnavailable {
                room_id: reservation.room_id(),
                date: reservation.date(),
                shift: reservation.shift(),
            });
        }

        tx.execute(
            INSERT_RESERVATION,
            params![
                reservation.folio().value(),
                reservation.client_id().value(),
                reservation.room_id().value(),
                date_to_sql(reservation.date()),
                reservation.shift().as_str(),
                reservation.event_name(),
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Retrieves a reservation by folio.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not
    /// found").
    pub fn get_reservation(conn: &Connection, folio: Folio) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_BY_FOLIO)?;
        match stmt.query_row(params![folio.value()], row_to_reservation) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists the reservations of a single date joined with client and
    /// room names, ordered by folio.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn daily_summaries(conn: &Connection, date: NaiveDate) -> Result<Vec<ReservationSummary>> {
        let mut stmt = conn.prepare(SELECT_DAILY_SUMMARIES)?;
        let rows = stmt
            .query_map(params![date_to_sql(date)], |row| {
                let folio: i64 = row.get(0)?;
                let folio = Folio::try_from(folio)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                let shift: String = row.get(3)?;
                Ok(ReservationSummary {
                    folio,
                    client_name: row.get(1)?,
                    room_name: row.get(2)?,
                    shift: sql_to_shift(&shift)?,
                    event_name: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Lists all reservations whose date falls in the inclusive range,
    /// ordered by date then folio.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservations_in_range(
        conn: &Connection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(SELECT_BY_DATE_RANGE)?;
        let rows = stmt
            .query_map(
                params![date_to_sql(start), date_to_sql(end)],
                row_to_reservation,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Updates the event name of the reservation identified by folio.
    ///
    /// All other fields are untouched; the folio itself never changes.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the new name is empty after
    /// trimming, or a database error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if no reservation carries the folio
    pub fn update_event_name(&mut self, folio: Folio, new_name: &str) -> Result<bool> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(Error::Validation {
                field: "event_name".into(),
                message: "must be non-empty".into(),
            });
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows_affected = tx.execute(UPDATE_EVENT_NAME, params![new_name, folio.value()])?;
        tx.commit()?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{test_database, test_reservation};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_and_list_clients() {
        let mut db = test_database();
        db.create_client("Grace", "Hopper").unwrap();
        db.create_client("Ada", "Lovelace").unwrap();
        db.create_client("Annie", "Easley").unwrap();

        let clients = Database::list_clients(db.connection()).unwrap();
        assert_eq!(clients.len(), 3);
        // Ordered by last name, then first name
        let last_names: Vec<&str> = clients.iter().map(Client::last_name).collect();
        assert_eq!(last_names, ["Easley", "Hopper", "Lovelace"]);
    }

    #[test]
    fn test_create_client_rejects_blank_names() {
        let mut db = test_database();
        assert!(db.create_client("  ", "Hopper").is_err());
        assert!(db.create_client("Grace", "").is_err());
        assert!(Database::list_clients(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_create_and_list_rooms() {
        let mut db = test_database();
        let a = db.create_room("Boardroom", 12).unwrap();
        let b = db.create_room("Studio", 6).unwrap();
        assert!(a.id() < b.id());

        let rooms = Database::list_rooms(db.connection()).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name(), "Boardroom");
    }

    #[test]
    fn test_create_room_rejects_zero_capacity() {
        let mut db = test_database();
        assert!(db.create_room("Closet", 0).is_err());
    }

    #[test]
    fn test_client_lookup() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();

        assert!(Database::client_exists(db.connection(), client.id()).unwrap());
        assert!(!Database::client_exists(db.connection(), ClientId::new(999)).unwrap());

        let fetched = Database::get_client(db.connection(), client.id())
            .unwrap()
            .unwrap();
        assert_eq!(fetched, client);
    }

    #[test]
    fn test_create_and_get_reservation() {
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

        let fetched = Database::get_reservation(db.connection(), reservation.folio())
            .unwrap()
            .unwrap();
        assert_eq!(fetched, reservation);
        assert!(Database::folio_exists(db.connection(), reservation.folio()).unwrap());
    }

    #[test]
    fn test_booked_shifts_in_enumeration_order() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();
        let d = date(2025, 11, 17);

        // Book evening before morning; the read must still report
        // enumeration order.
        for (folio, shift) in [(1000, Shift::Evening), (1001, Shift::Morning)] {
            db.create_reservation(&test_reservation(folio, client.id(), room.id(), d, shift))
                .unwrap();
        }

        let shifts = Database::booked_shifts(db.connection(), room.id(), d).unwrap();
        assert_eq!(shifts, [Shift::Morning, Shift::Evening]);
    }

    #[test]
    fn test_double_booking_rejected_in_commit() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();
        let d = date(2025, 11, 17);

        db.create_reservation(&test_reservation(
            1000,
            client.id(),
            room.id(),
            d,
            Shift::Morning,
        ))
        .unwrap();

        let err = db
            .create_reservation(&test_reservation(
                1001,
                client.id(),
                room.id(),
                d,
                Shift::Morning,
            ))
            .unwrap_err();
        assert!(matches!(err, Error::ShiftUnavailable { .. }));

        // Same shift in a different room is fine
        let other = db.create_room("Studio", 4).unwrap();
        db.create_reservation(&test_reservation(
            1002,
            client.id(),
            other.id(),
            d,
            Shift::Morning,
        ))
        .unwrap();
    }

    #[test]
    fn test_daily_summaries_joined_and_ordered() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();
        let d = date(2025, 11, 17);

        db.create_reservation(&test_reservation(
            2000,
            client.id(),
            room.id(),
            d,
            Shift::Afternoon,
        ))
        .unwrap();
        db.create_reservation(&test_reservation(
            1500,
            client.id(),
            room.id(),
            d,
            Shift::Morning,
        ))
        .unwrap();

        let rows = Database::daily_summaries(db.connection(), d).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].folio.value(), 1500);
        assert_eq!(rows[0].client_name, "Ada Lovelace");
        assert_eq!(rows[0].room_name, "Boardroom");
        assert_eq!(rows[1].folio.value(), 2000);

        assert!(Database::daily_summaries(db.connection(), date(2025, 11, 18))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_reservations_in_range_ordering() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();

        db.create_reservation(&test_reservation(
            3000,
            client.id(),
            room.id(),
            date(2025, 11, 20),
            Shift::Morning,
        ))
        .unwrap();
        db.create_reservation(&test_reservation(
            2000,
            client.id(),
            room.id(),
            date(2025, 11, 18),
            Shift::Morning,
        ))
        .unwrap();
        db.create_reservation(&test_reservation(
            1000,
            client.id(),
            room.id(),
            date(2025, 11, 18),
            Shift::Evening,
        ))
        .unwrap();

        let rows =
            Database::reservations_in_range(db.connection(), date(2025, 11, 18), date(2025, 11, 19))
                .unwrap();
        // Range is inclusive and excludes the 11-20 booking; ties on
        // date break by folio.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].folio().value(), 1000);
        assert_eq!(rows[1].folio().value(), 2000);
    }

    #[test]
    fn test_range_query_spans_year_boundary() {
        let mut db = test_database();
        let client = db.create_client("Ada", "Lovelace").unwrap();
        let room = db.create_room("Boardroom", 12).unwrap();

        db.create_reservation(&test_reservation(
            1000,
            client.id(),
            room.id(),
            date(2025, 12, 30),
            Shift::Morning,
        ))
        .unwrap();
        db.create_reservation(&test_reservation(
            1001,
            client.id(),
            room.id(),
            date(2026, 1, 2),
            Shift::Morning,
        ))
        .unwrap();

        let rows =
            Database::reservations_in_range(db.connection(), date(2025, 12, 29), date(2026, 1, 3))
                .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date(), date(2025, 12, 30));
        assert_eq!(rows[1].date(), date(2026, 1, 2));
    }

    #[test]
    fn test_update_event_name() {
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

        let updated = db
            .update_event_name(reservation.folio(), "Quarterly review")
            .unwrap();
        assert!(updated);

        let fetched = Database::get_reservation(db.connection(), reservation.folio())
            .unwrap()
            .unwrap();
        assert_eq!(fetched.event_name(), "Quarterly review");
        // Everything else is untouched
        assert_eq!(fetched.folio(), reservation.folio());
        assert_eq!(fetched.date(), reservation.date());
        assert_eq!(fetched.shift(), reservation.shift());
    }

    #[test]
    fn test_update_event_name_unknown_folio() {
        let mut db = test_database();
        let updated = db
            .update_event_name(Folio::try_from(4321u16).unwrap(), "New name")
            .unwrap();
        assert!(!updated);
    }

    #[test]
    fn test_update_event_name_rejects_empty() {
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

        assert!(db.update_event_name(reservation.folio(), "   ").is_err());

        let fetched = Database::get_reservation(db.connection(), reservation.folio())
            .unwrap()
            .unwrap();
        assert_eq!(fetched.event_name(), reservation.event_name());
    }
}
