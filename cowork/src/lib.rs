#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cowork
//!
//! A library for managing coworking room reservations.
//!
//! This library provides core types and functionality for registering
//! clients and rooms, booking shifts with unique folio identifiers,
//! computing availability, and producing daily reports.
//!
//! ## Core Types
//!
//! - [`Client`] and [`Room`]: The registered parties and spaces
//! - [`Reservation`] and [`Folio`]: Committed bookings and their identifiers
//! - [`Shift`]: The three bookable time windows per day
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cowork::{Folio, Shift};
//!
//! // Folios live in a fixed four-digit range
//! let folio = Folio::try_from(1234u16).unwrap();
//! assert_eq!(folio.value(), 1234);
//!
//! // Three shifts per day, in display order
//! assert_eq!(Shift::ALL.len(), 3);
//! assert_eq!(Shift::ALL[0], Shift::Morning);
//! ```

pub mod availability;
pub mod client;
pub mod config;
pub mod database;
pub mod date;
pub mod error;
pub mod folio;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod room;
pub mod shift;

// Re-export key types at crate root for convenience
pub use availability::{available_rooms, RoomAvailability};
pub use client::{Client, ClientId};
pub use config::Config;
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use folio::{generate_unique_folio, Folio};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    export_report, rename_event, BookingRequest, DailyReport, EditWindow, ExportFormat,
    RegisterClient, RegisterRoom,
};
pub use reservation::{Reservation, ReservationSummary};
pub use room::{Room, RoomId};
pub use shift::Shift;
