//! The booking operation.

use chrono::NaiveDate;
use rand::Rng;

use crate::client::ClientId;
use crate::database::Database;
use crate::date::validate_booking_date;
use crate::error::{Error, Result};
use crate::folio::{generate_unique_folio, Folio};
use crate::reservation::Reservation;
use crate::room::RoomId;
use crate::shift::Shift;

/// A fully-specified booking, ready to commit.
///
/// The date carried here is the final one: if the caller offered a
/// Sunday-to-Monday substitution, the accepted Monday goes in this
/// struct, and execution re-validates it like any other date.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use cowork::operations::BookingRequest;
/// use cowork::{ClientId, Database, RoomId, Shift};
///
/// let mut db = Database::open_in_memory().unwrap();
/// let request = BookingRequest {
///     client_id: ClientId::new(1),
///     room_id: RoomId::new(1),
///     date: NaiveDate::from_ymd_opt(2025, 11, 17).unwrap(),
///     shift: Shift::Morning,
///     event_name: "Design review".to_string(),
/// };
/// let today = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
/// let folio = request.execute(&mut db, &mut rand::thread_rng(), today).unwrap();
/// println!("booked under folio {folio}");
/// ```
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// The client the room is booked for.
    pub client_id: ClientId,
    /// The room to book.
    pub room_id: RoomId,
    /// The reservation date.
    pub date: NaiveDate,
    /// The shift to book.
    pub shift: Shift,
    /// A name for the event.
    pub event_name: String,
}

impl BookingRequest {
    /// Validates the request and commits the reservation, returning the
    /// assigned folio.
    ///
    /// Validation order: date policy first, then client and room
    /// existence, then folio assignment, then the transactional insert
    /// with its availability re-check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The date is a Sunday or violates the lead-time rule
    /// - The client or room is not registered
    /// - The event name is empty
    /// - No free folio remains
    /// - The shift was taken between availability display and commit
    pub fn execute<R: Rng>(
        &self,
        db: &mut Database,
        rng: &mut R,
        today: NaiveDate,
    ) -> Result<Folio> {
        validate_booking_date(self.date, today)?;

        if !Database::client_exists(db.connection(), self.client_id)? {
            return Err(Error::UnknownClient {
                id: self.client_id.value(),
            });
        }
        if Database::get_room(db.connection(), self.room_id)?.is_none() {
            return Err(Error::NotFound {
                resource: format!("room {}", self.room_id),
            });
        }

        let folio = generate_unique_folio(db.connection(), rng)?;
        let reservation = Reservation::new(
            folio,
            self.client_id,
            self.room_id,
            self.date,
            self.shift,
            self.event_name.clone(),
        )?;

        db.create_reservation(&reservation)?;
        log::info!(
            "booked room {} on {} ({}) under folio {}",
            self.room_id,
            self.date,
            self.shift,
            folio
        );
        Ok(folio)
    }
}
