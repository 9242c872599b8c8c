//! Parameter validation errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by local parameter validation, before any request is sent.
///
/// The message texts are part of the client's observable contract; calling
/// code may branch on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameterError {
    /// Device filter outside the allowed set of `all`, `desktop`, `mobile`.
    #[error("Invalid device entered.")]
    Device {
        /// The rejected device string.
        given: String,
    },

    /// Not a valid `MM/DD/YYYY` calendar date, or a date in a future year.
    #[error("Invalid date(s) entered.")]
    Date {
        /// The rejected date input.
        given: String,
    },

    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvertedRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// Timezone is not a canonical IANA identifier.
    #[error("Invalid timezone entered")]
    Timezone {
        /// The rejected timezone string.
        given: String,
    },
}
