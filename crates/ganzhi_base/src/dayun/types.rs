//! Core types for decade luck (Dayun) calculations.

use chrono::NaiveDateTime;

use crate::element::Polarity;
use crate::pillar::Pillar;

/// Number of luck periods generated by default (~90 years).
pub const DEFAULT_DAYUN_PERIODS: u8 = 9;

/// Calendar years covered by one luck period.
pub const YEARS_PER_PERIOD: i32 = 10;

/// Days of distance to the solar term that count as one year of age.
pub const DAYS_PER_LUCK_YEAR: f64 = 3.0;

/// Largest start-of-luck age (exclusive bound 10, one decimal place).
pub const MAX_START_AGE: f64 = 9.9;

/// Declared gender for luck direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse `"male"`/`"female"` (or `"m"`/`"f"`), ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Direction the luck pillars travel through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Yang year with male, or Yin year with female, runs forward.
    pub const fn from_polarity(year_stem: Polarity, gender: Gender) -> Self {
        match (year_stem, gender) {
            (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Self::Forward,
            (Polarity::Yin, Gender::Male) | (Polarity::Yang, Gender::Female) => Self::Backward,
        }
    }

    /// +1 forward, -1 backward.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Luck-sequence options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayunConfig {
    /// How many ten-year periods to generate.
    pub periods: u8,
}

impl Default for DayunConfig {
    fn default() -> Self {
        Self {
            periods: DEFAULT_DAYUN_PERIODS,
        }
    }
}

/// One ten-year luck period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayunPillar {
    /// 1-based position in the sequence.
    pub index: u8,
    pub pillar: Pillar,
    /// First calendar year, inclusive.
    pub start_year: i32,
    /// Last calendar year, inclusive.
    pub end_year: i32,
    /// Age at start, one decimal place.
    pub start_age: f64,
    /// Age at end, one decimal place.
    pub end_age: f64,
}

impl DayunPillar {
    pub const fn contains_year(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// A complete luck sequence for one birth.
#[derive(Debug, Clone, PartialEq)]
pub struct DayunSequence {
    pub birth: NaiveDateTime,
    pub direction: LuckDirection,
    /// Start-of-luck age in years, one decimal place, in `[0, MAX_START_AGE]`.
    pub start_age: f64,
    /// Calendar year the first period begins.
    pub start_year: i32,
    /// Periods in chronological order.
    pub periods: Vec<DayunPillar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_table() {
        use LuckDirection::*;
        assert_eq!(LuckDirection::from_polarity(Polarity::Yang, Gender::Male), Forward);
        assert_eq!(LuckDirection::from_polarity(Polarity::Yin, Gender::Male), Backward);
        assert_eq!(LuckDirection::from_polarity(Polarity::Yang, Gender::Female), Backward);
        assert_eq!(LuckDirection::from_polarity(Polarity::Yin, Gender::Female), Forward);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(LuckDirection::Forward.sign(), 1);
        assert_eq!(LuckDirection::Backward.sign(), -1);
    }

    #[test]
    fn gender_parse() {
        assert_eq!(Gender::from_name("male"), Some(Gender::Male));
        assert_eq!(Gender::from_name(" Female "), Some(Gender::Female));
        assert_eq!(Gender::from_name("F"), Some(Gender::Female));
        assert_eq!(Gender::from_name("other"), None);
    }

    #[test]
    fn default_config_nine_periods() {
        assert_eq!(DayunConfig::default().periods, 9);
    }
}
