//! Date parsing and the reservation date policy.
//!
//! Dates cross the interactive boundary in `mm-dd-yyyy` form and are
//! stored in ISO `yyyy-mm-dd` form so that SQL range comparisons order
//! chronologically. Two policy rules apply to booking dates:
//!
//! 1. Sundays are not bookable. A Sunday may be substituted by the
//!    following Monday if the caller accepts the substitute.
//! 2. A booking date must be strictly more than two calendar days after
//!    the day of booking. This check runs after any Sunday substitution,
//!    so a substituted Monday inside the window still fails.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Error, Result};

/// The date format used at every interactive boundary.
pub const INPUT_DATE_FORMAT: &str = "%m-%d-%Y";

/// Minimum number of whole days between booking and reservation date.
pub const MIN_LEAD_DAYS: u64 = 2;

/// Parses a date in the interactive `mm-dd-yyyy` format.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the input does not match the
/// format or names an impossible calendar date.
///
/// # Examples
///
/// ```
/// use cowork::date::parse_input_date;
///
/// let date = parse_input_date("01-15-2025").unwrap();
/// assert_eq!(date.to_string(), "2025-01-15");
///
/// assert!(parse_input_date("2025-01-15").is_err());
/// assert!(parse_input_date("02-30-2025").is_err());
/// ```
pub fn parse_input_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT).map_err(|e| Error::InvalidDate {
        input: input.trim().to_string(),
        reason: format!("expected mm-dd-yyyy ({e})"),
    })
}

/// Formats a date in the interactive `mm-dd-yyyy` format.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::date::format_input_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 17).unwrap();
/// assert_eq!(format_input_date(date), "11-17-2025");
/// ```
#[must_use]
pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Returns the following Monday if `date` is a Sunday.
///
/// Sundays are never stored; the caller offers the returned Monday as a
/// substitute and discards the attempt if it is declined.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::date::sunday_substitute;
///
/// // 2025-11-16 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 11, 17).unwrap();
/// assert_eq!(sunday_substitute(sunday), Some(monday));
/// assert_eq!(sunday_substitute(monday), None);
/// ```
#[must_use]
pub fn sunday_substitute(date: NaiveDate) -> Option<NaiveDate> {
    if date.weekday() == Weekday::Sun {
        date.checked_add_days(Days::new(1))
    } else {
        None
    }
}

/// Returns the earliest bookable date as of `today`.
#[must_use]
pub fn earliest_bookable(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(MIN_LEAD_DAYS + 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Checks the minimum lead time rule.
///
/// The date must be strictly later than `today + 2 days`. This check is
/// applied to the final date, after any Sunday substitution.
///
/// # Errors
///
/// Returns [`Error::DateTooSoon`] when the rule is violated.
pub fn check_lead_time(date: NaiveDate, today: NaiveDate) -> Result<()> {
    let earliest = earliest_bookable(today);
    if date < earliest {
        return Err(Error::DateTooSoon { date, earliest });
    }
    Ok(())
}

/// Validates a date for storage: not a Sunday and within lead time.
///
/// This is the non-interactive form of the policy used when committing
/// a booking; substitution proposals are the interactive caller's job.
///
/// # Errors
///
/// Returns [`Error::SundayNotAllowed`] or [`Error::DateTooSoon`].
pub fn validate_booking_date(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date.weekday() == Weekday::Sun {
        return Err(Error::SundayNotAllowed { date });
    }
    check_lead_time(date, today)
}
