//! Folio identifiers and unique folio generation.
//!
//! Every reservation is identified by a folio: a short numeric value
//! drawn from a fixed four-digit range. Folios are assigned at booking
//! time and never change.

use std::fmt;

use rand::Rng;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A reservation folio in the range [1000, 9999].
///
/// # Examples
///
/// ```
/// use cowork::Folio;
///
/// let folio = Folio::try_from(1234u16).unwrap();
/// assert_eq!(folio.value(), 1234);
///
/// // Out of range
/// assert!(Folio::try_from(999u16).is_err());
/// assert!(Folio::try_from(10000u16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Folio(u16);

impl Folio {
    /// The smallest valid folio.
    pub const MIN: u16 = 1000;

    /// The largest valid folio.
    pub const MAX: u16 = 9999;

    /// The number of distinct folio values.
    pub const SPACE: u32 = (Self::MAX - Self::MIN + 1) as u32;

    /// Returns the underlying folio number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Folio {
    type Error = InvalidFolioError;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        if value < Self::MIN || value > Self::MAX {
            Err(InvalidFolioError { value: i64::from(value) })
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<i64> for Folio {
    type Error = InvalidFolioError;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        u16::try_from(value)
            .map_err(|_| InvalidFolioError { value })
            .and_then(Self::try_from)
            .map_err(|_| InvalidFolioError { value })
    }
}

impl fmt::Display for Folio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for out-of-range folio values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFolioError {
    /// The invalid value.
    pub value: i64,
}

impl fmt::Display for InvalidFolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "folio {} is outside the valid range {}-{}",
            self.value,
            Folio::MIN,
            Folio::MAX
        )
    }
}

impl std::error::Error for InvalidFolioError {}

/// Number of purely random draws before falling back to a sweep.
///
/// Random probing is cheap while the space is sparse; once occupancy is
/// high the sweep guarantees termination in at most one pass over the
/// range.
const RANDOM_PROBE_BUDGET: u32 = 64;

/// Generates a folio that is not used by any existing reservation.
///
/// The generator first draws random candidates from the folio range and
/// checks each against the database. If every draw in the probe budget
/// collides, it sweeps the whole range starting from a random offset,
/// which finds a free value whenever one exists. A fully occupied range
/// yields [`Error::FolioExhausted`].
///
/// # Errors
///
/// Returns an error if the database lookup fails or every folio in the
/// range is already in use.
pub fn generate_unique_folio<R: Rng>(conn: &Connection, rng: &mut R) -> Result<Folio> {
    let mut attempts = 0;

    for _ in 0..RANDOM_PROBE_BUDGET {
        attempts += 1;
        let candidate = Folio(rng.gen_range(Folio::MIN..=Folio::MAX));
        if !crate::database::Database::folio_exists(conn, candidate)? {
            return Ok(candidate);
        }
    }

    // Sweep from a random starting point so consecutive bookings near
    // exhaustion do not all fight over the same low values.
    let start = rng.gen_range(0..Folio::SPACE);
    for offset in 0..Folio::SPACE {
        attempts += 1;
        let value = Folio::MIN + u16::try_from((start + offset) % Folio::SPACE).unwrap_or(0);
        let candidate = Folio(value);
        if !crate::database::Database::folio_exists(conn, candidate)? {
            return Ok(candidate);
        }
    }

    Err(Error::FolioExhausted { attempts })
}
