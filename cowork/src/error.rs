//! Error types for the cowork library.
//!
//! This module provides the error hierarchy for all operations in the
//! cowork library, using `thiserror` for ergonomic error handling.

use chrono::NaiveDate;

use thiserror::Error;

use crate::room::RoomId;
use crate::shift::Shift;

/// Result type alias for operations that may fail with a cowork error.
///
/// # Examples
///
/// ```
/// use cowork::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(1234)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cowork library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A date string could not be parsed in the expected format.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The raw input that failed to parse.
        input: String,
        /// The reason the input is invalid.
        reason: String,
    },

    /// A reservation date does not satisfy the minimum lead time.
    #[error("date {date} is too soon: reservations must be made for {earliest} or later")]
    DateTooSoon {
        /// The rejected date.
        date: NaiveDate,
        /// The earliest acceptable date at the moment of the check.
        earliest: NaiveDate,
    },

    /// A reservation date falls on a Sunday.
    #[error("date {date} is a Sunday: reservations are not taken on Sundays")]
    SundayNotAllowed {
        /// The rejected date.
        date: NaiveDate,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The referenced client does not exist.
    #[error("unknown client id {id}")]
    UnknownClient {
        /// The client id that was not found.
        id: i64,
    },

    /// No room has any open shift on the requested date.
    #[error("no rooms available on {date}")]
    NoAvailability {
        /// The fully booked date.
        date: NaiveDate,
    },

    /// The requested shift is already booked for the room and date.
    #[error("shift {shift} is no longer available for room {room_id} on {date}")]
    ShiftUnavailable {
        /// The room that was requested.
        room_id: RoomId,
        /// The requested date.
        date: NaiveDate,
        /// The shift that is taken.
        shift: Shift,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The folio generator could not find a free value.
    #[error("folio space exhausted after {attempts} attempts")]
    FolioExhausted {
        /// The number of candidate folios examined before giving up.
        attempts: u32,
    },
}

impl From<crate::folio::InvalidFolioError> for Error {
    fn from(err: crate::folio::InvalidFolioError) -> Self {
        Self::Validation {
            field: "folio".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::shift::InvalidShiftError> for Error {
    fn from(err: crate::shift::InvalidShiftError) -> Self {
        Self::Validation {
            field: "shift".into(),
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Check if error indicates that a queried resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a local validation failure that the caller can
    /// recover from by re-prompting (as opposed to a storage failure).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::DateTooSoon { .. }
                | Self::SundayNotAllowed { .. }
                | Self::Validation { .. }
                | Self::UnknownClient { .. }
                | Self::ShiftUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_error() {
        let err = Error::InvalidDate {
            input: "13-45-2025".to_string(),
            reason: "month out of range".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid date"));
        assert!(display.contains("13-45-2025"));
    }

    #[test]
    fn test_date_too_soon_error() {
        let err = Error::DateTooSoon {
            date: NaiveDate::from_ymd_opt(2025, 11, 17).unwrap(),
            earliest: NaiveDate::from_ymd_opt(2025, 11, 19).unwrap(),
        };
        let display = format!("{err}");
        assert!(display.contains("too soon"));
        assert!(display.contains("2025-11-19"));
    }

    #[test]
    fn test_sunday_error() {
        let err = Error::SundayNotAllowed {
            date: NaiveDate::from_ymd_opt(2025, 11, 16).unwrap(),
        };
        assert!(format!("{err}").contains("Sunday"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "event_name".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("event_name"));
    }

    #[test]
    fn test_unknown_client_error() {
        let err = Error::UnknownClient { id: 42 };
        assert!(format!("{err}").contains("42"));
    }

    #[test]
    fn test_not_found_helper() {
        let err = Error::NotFound {
            resource: "reservation 1234".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!Error::FolioExhausted { attempts: 10 }.is_not_found());
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(Error::UnknownClient { id: 1 }.is_recoverable());
        assert!(!Error::FolioExhausted { attempts: 1 }.is_recoverable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
