//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices and
//! constants related to the database schema for the cowork reservation
//! system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the clients table.
pub const CREATE_CLIENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS clients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// The folio is the primary key. Dates are stored as ISO-8601 text so
/// that lexicographic range comparisons order chronologically. The
/// UNIQUE constraint on (room_id, date, shift) is the hard backstop for
/// the no-double-booking invariant: even if two sessions race past the
/// availability read, only one insert can commit.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        folio INTEGER PRIMARY KEY,
        client_id INTEGER NOT NULL REFERENCES clients(id),
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        date TEXT NOT NULL,
        shift TEXT NOT NULL,
        event_name TEXT NOT NULL,
        UNIQUE (room_id, date, shift)
    )";

/// SQL statement to create an index on the reservation date column.
///
/// This index speeds up daily reports and range queries.
pub const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(date)";

/// SQL statement to create an index on (`room_id`, date).
///
/// This index speeds up availability computation for a single room and
/// date.
pub const CREATE_ROOM_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_room_date ON reservations(room_id, date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (folio, client_id, room_id, date, shift, event_name)
    VALUES (?, ?, ?, ?, ?, ?)
";
