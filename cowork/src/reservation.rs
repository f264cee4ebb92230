//! Reservation records.
//!
//! A reservation binds a client, a room, a date and a shift under a
//! unique folio. All fields except the event name are immutable once
//! the reservation is committed; the event name is edited through the
//! database layer, keyed by folio.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::{non_empty, ClientId};
use crate::error::Error;
use crate::folio::Folio;
use crate::room::RoomId;
use crate::shift::Shift;

/// A committed (or about to be committed) reservation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::{ClientId, Folio, Reservation, RoomId, Shift};
///
/// let reservation = Reservation::new(
///     Folio::try_from(1234u16).unwrap(),
///     ClientId::new(1),
///     RoomId::new(2),
///     NaiveDate::from_ymd_opt(2025, 11, 17).unwrap(),
///     Shift::Morning,
///     "Design review",
/// )
/// .unwrap();
///
/// assert_eq!(reservation.event_name(), "Design review");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    folio: Folio,
    client_id: ClientId,
    room_id: RoomId,
    date: NaiveDate,
    shift: Shift,
    event_name: String,
}

impl Reservation {
    /// Creates a reservation record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the event name is empty after
    /// trimming whitespace.
    pub fn new(
        folio: Folio,
        client_id: ClientId,
        room_id: RoomId,
        date: NaiveDate,
        shift: Shift,
        event_name: impl Into<String>,
    ) -> Result<Self, Error> {
        let event_name = non_empty("event_name", event_name.into())?;
        Ok(Self {
            folio,
            client_id,
            room_id,
            date,
            shift,
            event_name,
        })
    }

    /// Returns the folio identifying this reservation.
    #[must_use]
    pub const fn folio(&self) -> Folio {
        self.folio
    }

    /// Returns the id of the client the reservation belongs to.
    #[must_use]
    pub const fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the id of the reserved room.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the reserved date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the reserved shift.
    #[must_use]
    pub const fn shift(&self) -> Shift {
        self.shift
    }

    /// Returns the event name.
    #[must_use]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }
}

/// A reservation row joined with client and room names, as listed in
/// the daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSummary {
    /// The reservation folio.
    pub folio: Folio,
    /// The client's full name.
    pub client_name: String,
    /// The room name.
    pub room_name: String,
    /// The reserved shift.
    pub shift: Shift,
    /// The event name.
    pub event_name: String,
}
