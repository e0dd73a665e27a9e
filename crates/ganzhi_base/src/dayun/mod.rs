//! Dayun (大运), the decade luck pillars.
//!
//! The sequence starts from the month pillar and steps one place per
//! decade through the 60-cycle, forward or backward depending on the
//! year stem's polarity and the declared gender. The first period begins
//! at a fractional "start-of-luck" age derived from the distance to the
//! nearest sectional solar term, at three days per year.

pub mod sequence;
pub mod start_age;
pub mod types;

pub use sequence::{active_dayun, dayun_for_chart, dayun_from_pillars, dayun_sequence};
pub use start_age::{days_to_boundary, raw_start_age, start_age};
pub use types::{
    DAYS_PER_LUCK_YEAR, DEFAULT_DAYUN_PERIODS, DayunConfig, DayunPillar, DayunSequence, Gender,
    LuckDirection, MAX_START_AGE, YEARS_PER_PERIOD,
};
