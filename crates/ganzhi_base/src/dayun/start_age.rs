//! Start-of-luck age from the distance to the nearest sectional term.
//!
//! Forward sequences measure to the next term boundary after birth,
//! backward sequences to the last boundary at or before birth. Every
//! three days of distance count as one year of age.

use chrono::NaiveDateTime;

use crate::solar_term::{SolarTermSource, next_term, prev_term};
use crate::util::round1;

use super::types::{DAYS_PER_LUCK_YEAR, LuckDirection, MAX_START_AGE};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Absolute distance in (fractional) days from birth to the term boundary
/// in the direction of travel. `None` if the source has no such boundary.
pub fn days_to_boundary<S: SolarTermSource + ?Sized>(
    birth: NaiveDateTime,
    direction: LuckDirection,
    source: &S,
) -> Option<f64> {
    let (_, boundary) = match direction {
        LuckDirection::Forward => next_term(birth, source)?,
        LuckDirection::Backward => prev_term(birth, source)?,
    };
    let seconds = (boundary - birth).num_seconds().abs() as f64;
    Some(seconds / SECONDS_PER_DAY)
}

/// Start-of-luck age in years, unrounded, clamped to `[0, MAX_START_AGE]`.
/// A source without a usable boundary yields 0.
///
/// The start year and the period age spans derive from this value; only
/// reported ages are rounded.
pub fn raw_start_age<S: SolarTermSource + ?Sized>(
    birth: NaiveDateTime,
    direction: LuckDirection,
    source: &S,
) -> f64 {
    let days = days_to_boundary(birth, direction, source).unwrap_or(0.0);
    (days / DAYS_PER_LUCK_YEAR).clamp(0.0, MAX_START_AGE)
}

/// Start-of-luck age in years as reported, rounded to one decimal.
pub fn start_age<S: SolarTermSource + ?Sized>(
    birth: NaiveDateTime,
    direction: LuckDirection,
    source: &S,
) -> f64 {
    round1(raw_start_age(birth, direction, source))
}
