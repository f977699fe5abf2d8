//! Input validation errors.

use std::error::Error;
use std::fmt;

/// Rejection reason for a malformed chart request.
///
/// Every variant is a caller error: correct the input and retry. The
/// engine never fails after validation passes.
#[derive(Debug, Clone, PartialEq)]
pub enum KundaliError {
    /// Birth date was not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Birth time was not a valid `HH:MM` 24-hour time.
    InvalidTime(String),
    /// Latitude outside [-90, 90].
    LatitudeOutOfRange(f64),
    /// Longitude outside [-180, 180].
    LongitudeOutOfRange(f64),
}

impl fmt::Display for KundaliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KundaliError::InvalidDate(s) => {
                write!(f, "invalid date {s:?}: expected YYYY-MM-DD")
            }
            KundaliError::InvalidTime(s) => {
                write!(f, "invalid time {s:?}: expected HH:MM (24-hour)")
            }
            KundaliError::LatitudeOutOfRange(v) => {
                write!(f, "latitude {v} out of range [-90, 90]")
            }
            KundaliError::LongitudeOutOfRange(v) => {
                write!(f, "longitude {v} out of range [-180, 180]")
            }
        }
    }
}

impl Error for KundaliError {}
