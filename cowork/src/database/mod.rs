//! Database layer for persistent storage of clients, rooms and
//! reservations.
//!
//! This module provides a SQLite-based storage layer, including
//! connection management, schema versioning and CRUD operations over
//! the three record kinds.
//!
//! # Examples
//!
//! ```no_run
//! use cowork::database::{Database, DatabaseConfig};
//!
//! let config = DatabaseConfig::new("/tmp/cowork.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let client = db.create_client("Ada", "Lovelace").unwrap();
//! println!("registered client {}", client.id());
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
