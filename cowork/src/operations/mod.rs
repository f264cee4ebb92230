//! High-level reservation operations.
//!
//! Each operation is a request struct that validates its inputs and
//! executes against the database. Interactive concerns (prompting,
//! re-asking, substitution offers) live with the caller; by the time a
//! request reaches this layer its fields are already structured, and
//! the operation enforces every stored-data rule once more before
//! touching storage.

pub mod book;
pub mod edit_event;
pub mod register;
pub mod report;

pub use book::BookingRequest;
pub use edit_event::{rename_event, EditWindow};
pub use register::{RegisterClient, RegisterRoom};
pub use report::{export_report, DailyReport, ExportFormat};
