//! Civil date-time input parsing.
//!
//! The engine works on local wall-clock time that the caller has already
//! corrected (time zone, true solar time). Text carrying an explicit
//! offset is read as the wall-clock time in that offset; no conversion
//! to another zone takes place.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::GanzhiError;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A civil (local wall-clock) date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime(NaiveDateTime);

impl CivilDateTime {
    /// Build from calendar fields, rejecting impossible dates and times.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, GanzhiError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .map(Self)
            .ok_or_else(|| {
                GanzhiError::InvalidDateTimeFormat(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}"
                ))
            })
    }

    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl FromStr for CivilDateTime {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(dt) = DateTime::parse_from_rfc3339(s).ok().or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
        }) {
            return Ok(Self(dt.naive_local()));
        }
        let bare = s.strip_suffix('Z').unwrap_or(s);
        if let Some(dt) = NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(bare, fmt).ok())
        {
            return Ok(Self(dt));
        }
        NaiveDate::parse_from_str(bare, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| GanzhiError::InvalidDateTimeFormat(s.to_string()))
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minutes_only() {
        let dt: CivilDateTime = "2025-12-31T19:01".parse().unwrap();
        assert_eq!(
            (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()),
            (2025, 12, 31, 19, 1)
        );
    }

    #[test]
    fn parse_with_seconds_and_zulu() {
        let dt: CivilDateTime = "2024-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(dt.to_string(), "2024-01-01T00:00:00");
        let dt: CivilDateTime = "2024-01-01T00:00Z".parse().unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn offset_keeps_wall_clock() {
        let dt: CivilDateTime = "1990-06-15T14:30:00+08:00".parse().unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
        let dt: CivilDateTime = "2025-12-31T19:01+08:00".parse().unwrap();
        assert_eq!(dt.to_string(), "2025-12-31T19:01:00");
        let dt: CivilDateTime = "2025-12-31 19:01-05:00".parse().unwrap();
        assert_eq!((dt.day(), dt.hour(), dt.minute()), (31, 19, 1));
    }

    #[test]
    fn space_separator_and_bare_date() {
        let dt: CivilDateTime = "1990-06-15 14:30".parse().unwrap();
        assert_eq!(dt.hour(), 14);
        let dt: CivilDateTime = "1990-06-15".parse().unwrap();
        assert_eq!((dt.day(), dt.hour()), (15, 0));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "yesterday", "2024-13-01T00:00", "2024-02-30", "2024-01-01T25:00"] {
            let err = bad.parse::<CivilDateTime>().unwrap_err();
            assert!(
                matches!(err, GanzhiError::InvalidDateTimeFormat(_)),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn new_validates_fields() {
        assert!(CivilDateTime::new(2024, 2, 29, 12, 0).is_ok());
        assert!(CivilDateTime::new(2023, 2, 29, 12, 0).is_err());
        assert!(CivilDateTime::new(2023, 1, 1, 24, 0).is_err());
    }
}
