//! Calendar date parsing and validation.
//!
//! The API takes dates in `MM/DD/YYYY` form and splits each into separate
//! month/day/year query parameters.

use chrono::{Datelike, NaiveDate};

use crate::InvalidParameterError;

/// Parses a date in `MM/DD/YYYY` form.
///
/// The month must fall in 1..=12 and the day must exist in that month for
/// that year, leap years included.
///
/// # Errors
///
/// Returns [`InvalidParameterError::Date`] if the input is not a valid
/// calendar date.
///
/// # Example
///
/// ```
/// use statcounter_types::parse_mdy;
///
/// let date = parse_mdy("02/29/2020").unwrap();
/// assert_eq!(date.to_string(), "2020-02-29");
/// assert!(parse_mdy("02/29/2019").is_err());
/// ```
pub fn parse_mdy(input: &str) -> Result<NaiveDate, InvalidParameterError> {
    let invalid = || InvalidParameterError::Date {
        given: input.to_string(),
    };

    let mut parts = input.split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Rejects dates whose year lies beyond `today`'s year.
///
/// The remote service refuses future dates; the comparison is on the year
/// alone. `today` is injected so callers and tests share one code path.
///
/// # Errors
///
/// Returns [`InvalidParameterError::Date`] if `date` is in a future year.
pub fn validate_not_future(
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), InvalidParameterError> {
    if date.year() > today.year() {
        return Err(InvalidParameterError::Date {
            given: date.to_string(),
        });
    }
    Ok(())
}

/// An inclusive range of calendar dates for a statistics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::InvertedRange`] if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidParameterError> {
        if start > end {
            return Err(InvalidParameterError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parses a range from two `MM/DD/YYYY` strings.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::Date`] if either date is malformed,
    /// or [`InvalidParameterError::InvertedRange`] if start > end.
    pub fn from_mdy(start: &str, end: &str) -> Result<Self, InvalidParameterError> {
        Self::new(parse_mdy(start)?, parse_mdy(end)?)
    }

    /// Rejects ranges that touch a future year.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::Date`] if either endpoint is in a
    /// future year.
    pub fn validate_not_future(&self, today: NaiveDate) -> Result<(), InvalidParameterError> {
        validate_not_future(self.start, today)?;
        validate_not_future(self.end, today)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
