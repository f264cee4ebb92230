//! Common test utilities for integration tests.

use chrono::NaiveDate;

use cowork::database::{Database, DatabaseConfig};
use cowork::{Client, Room, Shift};

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Opens a database file under the given directory.
#[allow(dead_code)]
pub fn open_database(dir: &std::path::Path) -> Database {
    Database::open(DatabaseConfig::new(dir.join("test.db"))).unwrap()
}

/// Registers a default client for booking tests.
#[allow(dead_code)]
pub fn seed_client(db: &mut Database) -> Client {
    db.create_client("Ada", "Lovelace").unwrap()
}

/// Registers a default room for booking tests.
#[allow(dead_code)]
pub fn seed_room(db: &mut Database) -> Room {
    db.create_room("Boardroom", 12).unwrap()
}

/// Shorthand date constructor.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// All shifts in display order, re-exported for fixtures.
#[allow(dead_code)]
pub const ALL_SHIFTS: [Shift; 3] = Shift::ALL;
