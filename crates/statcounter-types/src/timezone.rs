//! Timezone validation for project creation.

use chrono_tz::Tz;

use crate::InvalidParameterError;

/// Checks that `timezone` is a canonical IANA identifier, e.g.
/// `America/Chicago`.
///
/// # Errors
///
/// Returns [`InvalidParameterError::Timezone`] if the identifier is unknown.
pub fn validate_timezone(timezone: &str) -> Result<(), InvalidParameterError> {
    if timezone.parse::<Tz>().is_ok() {
        return Ok(());
    }
    Err(InvalidParameterError::Timezone {
        given: timezone.to_string(),
    })
}
