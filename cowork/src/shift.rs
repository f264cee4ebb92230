//! The daily shift enumeration.
//!
//! A room is booked for a whole shift on a given date. There are exactly
//! three shifts per day, and availability is always computed as a
//! set-difference against this fixed enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three daily time windows a room may be booked for.
///
/// Shifts are ordered Morning < Afternoon < Evening, and are always
/// displayed in that order.
///
/// # Examples
///
/// ```
/// use cowork::Shift;
///
/// let shift: Shift = "afternoon".parse().unwrap();
/// assert_eq!(shift, Shift::Afternoon);
/// assert_eq!(shift.to_string(), "Afternoon");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// The morning time window.
    Morning,
    /// The afternoon time window.
    Afternoon,
    /// The evening time window.
    Evening,
}

impl Shift {
    /// All shifts, in display order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Returns the canonical name of the shift.
    ///
    /// This is the exact string stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = InvalidShiftError;

    /// Parses a shift name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowork::Shift;
    ///
    /// assert_eq!("MORNING".parse::<Shift>().unwrap(), Shift::Morning);
    /// assert_eq!("evening".parse::<Shift>().unwrap(), Shift::Evening);
    /// assert!("midnight".parse::<Shift>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            _ => Err(InvalidShiftError {
                input: s.to_string(),
            }),
        }
    }
}

/// Error type for unrecognized shift names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidShiftError {
    /// The unrecognized input.
    pub input: String,
}

impl fmt::Display for InvalidShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized shift '{}': expected Morning, Afternoon or Evening",
            self.input
        )
    }
}

impl std::error::Error for InvalidShiftError {}
