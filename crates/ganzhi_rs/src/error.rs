//! Error types for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_base::BaziError;

/// Errors raised at the input boundary, before the pure engine runs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GanzhiError {
    /// The date-time text could not be parsed.
    InvalidDateTimeFormat(String),
    /// The year lies outside the supported range of the active policy.
    DateOutOfSupportedRange { year: i32, min: i32, max: i32 },
    /// Gender was neither "male" nor "female".
    InvalidGender(String),
    /// A JSON request could not be decoded.
    InvalidRequest(String),
    /// A response could not be encoded.
    Serialization(String),
    /// Error from the base calculations.
    Base(BaziError),
}

impl Display for GanzhiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateTimeFormat(s) => write!(
                f,
                "invalid date-time '{s}': expected YYYY-MM-DDThh:mm[:ss] or RFC 3339"
            ),
            Self::DateOutOfSupportedRange { year, min, max } => {
                write!(f, "year {year} outside supported range {min}-{max}")
            }
            Self::InvalidGender(s) => write!(f, "invalid gender '{s}': expected male or female"),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
            Self::Base(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GanzhiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BaziError> for GanzhiError {
    fn from(e: BaziError) -> Self {
        Self::Base(e)
    }
}

impl From<serde_json::Error> for GanzhiError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Serialization(e.to_string())
        }
    }
}
