//! Supported date-range policy.
//!
//! The calculators extrapolate to any year, but the approximate solar-term
//! table drifts by a day or more far from the present. The documented
//! range is 1900-2100; callers choose whether to enforce it.

use tracing::warn;

use crate::date::CivilDateTime;
use crate::error::GanzhiError;

/// Earliest supported year by default.
pub const DEFAULT_MIN_YEAR: i32 = 1900;

/// Latest supported year by default.
pub const DEFAULT_MAX_YEAR: i32 = 2100;

/// Which input years are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePolicy {
    pub min_year: i32,
    pub max_year: i32,
    /// Reject out-of-range years; when false, only log a warning.
    pub enforce: bool,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            enforce: true,
        }
    }
}

impl RangePolicy {
    /// Accept every year.
    pub const fn unrestricted() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            enforce: false,
        }
    }

    pub const fn contains(&self, year: i32) -> bool {
        self.min_year <= year && year <= self.max_year
    }

    /// Check an input against the policy.
    pub fn check(&self, dt: &CivilDateTime) -> Result<(), GanzhiError> {
        self.check_year(dt.year())
    }

    /// Check a bare calendar year against the policy.
    pub fn check_year(&self, year: i32) -> Result<(), GanzhiError> {
        if self.contains(year) {
            return Ok(());
        }
        if self.enforce {
            return Err(GanzhiError::DateOutOfSupportedRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        warn!(
            year,
            min = self.min_year,
            max = self.max_year,
            "year outside supported range, extrapolating"
        );
        Ok(())
    }
}
