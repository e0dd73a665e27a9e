//! The four pillar calculators: Year, Month, Day, Hour.
//!
//! Each is a total function of calendar fields. Every rule derives stem
//! and branch from the same step count, so the stem/branch parity
//! invariant of [`Pillar`] holds by construction.
//!
//! - Year: epoch CE 4 = 甲子; January belongs to the previous year.
//! - Month: branch from the governing sectional term, stem by the
//!   "Five Tigers" table keyed on the year stem.
//! - Day: fixed offset from the anchor day 2025-12-31 = 甲戌.
//! - Hour: branch from the double-hour, stem by the "Five Rats" table
//!   keyed on the day stem.

use chrono::{Datelike, NaiveDate};

use crate::branch::EarthlyBranch;
use crate::pillar::Pillar;
use crate::solar_term::{ApproximateSolarTerms, SolarTerm, SolarTermSource, governing_term};
use crate::stem::HeavenlyStem;
use crate::util::floor_mod;

/// CE year whose pillar is 甲子 (stem 0, branch 0).
pub const YEAR_EPOCH: i64 = 4;

/// Days-from-CE ordinal of the day-pillar anchor, 2025-12-31.
pub const DAY_ANCHOR_CE_DAYS: i64 = 739_616;

/// Stem index of the anchor day (甲).
pub const DAY_ANCHOR_STEM: i64 = 0;

/// Branch index of the anchor day (戌).
pub const DAY_ANCHOR_BRANCH: i64 = 10;

/// Five Tigers: stem index of the Yin (寅) month, keyed by year-stem pair
/// class (甲己 → 丙, 乙庚 → 戊, 丙辛 → 庚, 丁壬 → 壬, 戊癸 → 甲).
pub const FIVE_TIGERS: [u8; 5] = [2, 4, 6, 8, 0];

/// Five Rats: stem index of the Zi (子) hour, keyed by day stem.
pub const FIVE_RATS: [u8; 10] = [0, 2, 4, 6, 8, 0, 2, 4, 6, 8];

/// Where the sexagenary year turns over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearBoundary {
    /// All of January belongs to the previous year; month-level precision.
    #[default]
    January,
    /// The year turns on the Lichun (立春) boundary date.
    StartOfSpring,
}

/// Which day the late Zi hour (23:00-24:00) reads its stems from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZiHourRule {
    /// 23:00 keeps the current date's day pillar.
    #[default]
    SameDay,
    /// From 23:00 the day pillar (and the hour stem) come from the next date.
    NextDay,
}

// ── Year ─────────────────────────────────────────────────────────────

/// Sexagenary year for a civil year/month under the January rule.
pub const fn effective_year(year: i32, month: u32) -> i32 {
    if month < 2 { year - 1 } else { year }
}

/// Pillar of an already-resolved sexagenary year.
pub const fn pillar_of_year(effective_year: i32) -> Pillar {
    let offset = effective_year as i64 - YEAR_EPOCH;
    Pillar::from_indices(floor_mod(offset, 10), floor_mod(offset, 12))
}

/// Year pillar from civil year and month (day is not consulted).
pub const fn year_pillar(year: i32, month: u32) -> Pillar {
    pillar_of_year(effective_year(year, month))
}

/// Sexagenary year of a date under the chosen boundary rule.
///
/// `StartOfSpring` falls back to the January rule if the source cannot
/// place Lichun for the date's year.
pub fn effective_year_for_date<S: SolarTermSource + ?Sized>(
    date: NaiveDate,
    boundary: YearBoundary,
    source: &S,
) -> i32 {
    match boundary {
        YearBoundary::January => effective_year(date.year(), date.month()),
        YearBoundary::StartOfSpring => match source.term_start(date.year(), SolarTerm::Lichun) {
            Some(lichun) if date < lichun.date() => date.year() - 1,
            Some(_) => date.year(),
            None => effective_year(date.year(), date.month()),
        },
    }
}

/// Year pillar of a date under the chosen boundary rule.
pub fn year_pillar_for_date<S: SolarTermSource + ?Sized>(
    date: NaiveDate,
    boundary: YearBoundary,
    source: &S,
) -> Pillar {
    pillar_of_year(effective_year_for_date(date, boundary, source))
}

// ── Month ────────────────────────────────────────────────────────────

/// Month branch: the branch opened by the governing sectional term.
pub fn month_branch<S: SolarTermSource + ?Sized>(date: NaiveDate, source: &S) -> EarthlyBranch {
    governing_term(date, source).month_branch()
}

/// Month stem from the year stem and month branch (Five Tigers).
pub const fn month_stem(year_stem: HeavenlyStem, month_branch: EarthlyBranch) -> HeavenlyStem {
    let start = FIVE_TIGERS[(year_stem.index() % 5) as usize] as i64;
    let from_yin = floor_mod(month_branch.index() as i64 - 2, 12);
    HeavenlyStem::from_index(start + from_yin)
}

/// Month pillar given the year stem it belongs to.
pub fn month_pillar_with<S: SolarTermSource + ?Sized>(
    date: NaiveDate,
    year_stem: HeavenlyStem,
    source: &S,
) -> Pillar {
    let branch = month_branch(date, source);
    let stem = month_stem(year_stem, branch);
    Pillar::from_indices(stem.index() as i64, branch.index() as i64)
}

/// Month pillar using the approximate term table and the January year rule.
pub fn month_pillar(date: NaiveDate) -> Pillar {
    let year_stem = year_pillar(date.year(), date.month()).stem();
    month_pillar_with(date, year_stem, &ApproximateSolarTerms)
}

// ── Day ──────────────────────────────────────────────────────────────

/// Whole calendar days from the anchor day to `date` (negative before it).
pub fn days_from_anchor(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - DAY_ANCHOR_CE_DAYS
}

/// Day pillar; exactly periodic with period 60 days.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let delta = days_from_anchor(date);
    Pillar::from_indices(
        floor_mod(DAY_ANCHOR_STEM + delta, 10),
        floor_mod(DAY_ANCHOR_BRANCH + delta, 12),
    )
}

// ── Hour ─────────────────────────────────────────────────────────────

/// Branch of a civil hour (23 and 0 → Zi).
pub const fn hour_branch(hour: u32) -> EarthlyBranch {
    EarthlyBranch::from_hour(hour)
}

/// Hour stem from the day stem and hour branch (Five Rats).
pub const fn hour_stem(day_stem: HeavenlyStem, hour_branch: EarthlyBranch) -> HeavenlyStem {
    let start = FIVE_RATS[day_stem.index() as usize] as i64;
    HeavenlyStem::from_index(start + hour_branch.index() as i64)
}

/// Hour pillar given the day stem it belongs to.
pub const fn hour_pillar_from(day_stem: HeavenlyStem, hour: u32) -> Pillar {
    let branch = hour_branch(hour);
    let stem = hour_stem(day_stem, branch);
    Pillar::from_indices(stem.index() as i64, branch.index() as i64)
}

/// Hour pillar for a civil date and hour, using that date's day stem.
pub fn hour_pillar(date: NaiveDate, hour: u32) -> Pillar {
    hour_pillar_from(day_pillar(date).stem(), hour)
}

/// The date whose day pillar governs `hour` on `date` under `rule`.
pub fn day_for_hour(date: NaiveDate, hour: u32, rule: ZiHourRule) -> NaiveDate {
    match rule {
        ZiHourRule::NextDay if hour >= 23 => date.succ_opt().unwrap_or(date),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_ordinal_matches_calendar() {
        assert_eq!(date(2025, 12, 31).num_days_from_ce() as i64, DAY_ANCHOR_CE_DAYS);
    }

    #[test]
    fn year_epoch_is_jia_zi() {
        assert_eq!(pillar_of_year(4).to_string(), "甲子");
        assert_eq!(pillar_of_year(1984).to_string(), "甲子");
    }

    #[test]
    fn known_years() {
        assert_eq!(year_pillar(2024, 3).to_string(), "甲辰");
        assert_eq!(year_pillar(2025, 6).to_string(), "乙巳");
        assert_eq!(year_pillar(2000, 5).to_string(), "庚辰");
        assert_eq!(year_pillar(1900, 7).to_string(), "庚子");
    }

    #[test]
    fn january_rolls_back() {
        assert_eq!(effective_year(2024, 1), 2023);
        assert_eq!(effective_year(2024, 2), 2024);
        assert_eq!(year_pillar(2024, 1), year_pillar(2023, 6));
    }

    #[test]
    fn years_before_epoch_wrap() {
        // 3 CE is one before 甲子: 癸亥
        assert_eq!(pillar_of_year(3).to_string(), "癸亥");
        assert_eq!(pillar_of_year(-56).to_string(), "甲子");
    }

    #[test]
    fn start_of_spring_boundary() {
        let src = ApproximateSolarTerms;
        let y = |d| effective_year_for_date(d, YearBoundary::StartOfSpring, &src);
        assert_eq!(y(date(2024, 2, 3)), 2023);
        assert_eq!(y(date(2024, 2, 4)), 2024);
        assert_eq!(y(date(2024, 1, 20)), 2023);
        // January rule ignores the day: Feb 3 already counts as the new year.
        assert_eq!(
            effective_year_for_date(date(2024, 2, 3), YearBoundary::January, &src),
            2024
        );
    }

    #[test]
    fn five_tigers_yin_month() {
        let expected = ["丙寅", "戊寅", "庚寅", "壬寅", "甲寅"];
        for (s, want) in expected.iter().enumerate() {
            let stem = HeavenlyStem::from_index(s as i64);
            let got = month_stem(stem, EarthlyBranch::Yin);
            assert_eq!(format!("{got}寅"), *want);
            let paired = HeavenlyStem::from_index(s as i64 + 5);
            assert_eq!(month_stem(paired, EarthlyBranch::Yin), got);
        }
    }

    #[test]
    fn month_pillar_known_dates() {
        // 2024 is 甲辰: Yin month 丙寅 from Feb 4
        assert_eq!(month_pillar(date(2024, 2, 10)).to_string(), "丙寅");
        assert_eq!(month_pillar(date(2024, 3, 10)).to_string(), "丁卯");
        assert_eq!(month_pillar(date(2024, 12, 10)).to_string(), "丙子");
        // Early January still uses the 2023 (癸卯) year stem: 甲子 month
        assert_eq!(month_pillar(date(2024, 1, 1)).to_string(), "甲子");
        assert_eq!(month_pillar(date(2024, 1, 10)).to_string(), "乙丑");
    }

    #[test]
    fn anchor_day() {
        assert_eq!(day_pillar(date(2025, 12, 31)).to_string(), "甲戌");
        assert_eq!(day_pillar(date(2026, 1, 1)).to_string(), "乙亥");
        assert_eq!(day_pillar(date(2025, 12, 30)).to_string(), "癸酉");
    }

    #[test]
    fn known_days() {
        assert_eq!(day_pillar(date(2000, 1, 1)).to_string(), "戊午");
        assert_eq!(day_pillar(date(1949, 10, 1)).to_string(), "甲子");
    }

    #[test]
    fn day_period_60() {
        let d = date(1990, 5, 17);
        let later = d + chrono::Duration::days(60);
        assert_eq!(day_pillar(d), day_pillar(later));
        assert_ne!(day_pillar(d), day_pillar(d + chrono::Duration::days(30)));
    }

    #[test]
    fn five_rats_zi_hour() {
        for s in 0..10 {
            let stem = HeavenlyStem::from_index(s);
            let p = hour_pillar_from(stem, 0);
            assert_eq!(p.stem().index(), FIVE_RATS[s as usize]);
            assert_eq!(p.branch(), EarthlyBranch::Zi);
        }
    }

    #[test]
    fn hour_pillar_on_anchor_day() {
        // 甲 day: 甲子 at midnight, 甲戌 at 19:00
        let d = date(2025, 12, 31);
        assert_eq!(hour_pillar(d, 0).to_string(), "甲子");
        assert_eq!(hour_pillar(d, 19).to_string(), "甲戌");
        assert_eq!(hour_pillar(d, 23).to_string(), "甲子");
    }

    #[test]
    fn next_day_rule_only_moves_late_zi() {
        let d = date(2025, 12, 31);
        assert_eq!(day_for_hour(d, 23, ZiHourRule::NextDay), date(2026, 1, 1));
        assert_eq!(day_for_hour(d, 22, ZiHourRule::NextDay), d);
        assert_eq!(day_for_hour(d, 23, ZiHourRule::SameDay), d);
    }
}
