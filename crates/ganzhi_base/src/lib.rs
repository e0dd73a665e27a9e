//! Sexagenary (stem-branch) calendar calculations.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches, elements, polarity, zodiac animals
//! - An approximate sectional solar-term table behind [`SolarTermSource`]
//! - Year, Month, Day, and Hour pillar calculators
//! - BaZi (four pillars) chart assembly with a Five-Element tally
//! - Dayun (decade luck) sequence generation
//!
//! Everything here is a pure function over value inputs and constant
//! tables; nothing performs I/O or holds mutable state.

pub mod branch;
pub mod chart;
pub mod dayun;
pub mod element;
pub mod error;
pub mod pillar;
pub mod pillars;
pub mod solar_term;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, ALL_ZODIACS, BRANCH_COUNT, EarthlyBranch, Zodiac};
pub use chart::{BaziChart, CHART_SYMBOLS, ChartConfig, ElementTally, bazi_chart, bazi_chart_with};
pub use dayun::{
    DEFAULT_DAYUN_PERIODS, DayunConfig, DayunPillar, DayunSequence, Gender, LuckDirection,
    MAX_START_AGE, active_dayun, dayun_for_chart, dayun_from_pillars, dayun_sequence,
    raw_start_age, start_age,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::BaziError;
pub use pillar::{CYCLE_LENGTH, Pillar};
pub use pillars::{
    FIVE_RATS, FIVE_TIGERS, YearBoundary, ZiHourRule, day_pillar, days_from_anchor,
    effective_year, effective_year_for_date, hour_branch, hour_pillar, hour_pillar_from,
    hour_stem, month_branch, month_pillar, month_pillar_with, month_stem, pillar_of_year,
    year_pillar, year_pillar_for_date,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, APPROXIMATE_TERM_BOUNDARIES, ApproximateSolarTerms, SolarTerm,
    SolarTermSource, TermBoundary, governing_term, next_term, prev_term, terms_in_year,
};
pub use stem::{ALL_STEMS, HeavenlyStem, STEM_COUNT};
pub use util::floor_mod;
