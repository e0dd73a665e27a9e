//! Dayun sequence generation and active-period lookup.

use chrono::{Datelike, NaiveDateTime};

use crate::chart::{BaziChart, ChartConfig, bazi_chart_with};
use crate::pillar::Pillar;
use crate::solar_term::{ApproximateSolarTerms, SolarTermSource};
use crate::stem::HeavenlyStem;
use crate::util::round1;

use super::start_age::raw_start_age;
use super::types::{DayunConfig, DayunPillar, DayunSequence, Gender, LuckDirection, YEARS_PER_PERIOD};

/// Generate the luck sequence from an already-cast year stem and month
/// pillar.
///
/// Period `i` (1-based) is the month pillar stepped `direction × i`
/// places, spans calendar years `[start + (i-1)·10, start + i·10 - 1]`
/// and ages `[age + (i-1)·10, age + i·10]`.
pub fn dayun_from_pillars<S: SolarTermSource + ?Sized>(
    birth: NaiveDateTime,
    gender: Gender,
    year_stem: HeavenlyStem,
    month: Pillar,
    config: &DayunConfig,
    source: &S,
) -> DayunSequence {
    let direction = LuckDirection::from_polarity(year_stem.polarity(), gender);
    let age = raw_start_age(birth, direction, source);
    let start_year = birth.year() + age.round() as i32;

    let periods = (1..=config.periods)
        .map(|index| {
            let i = index as i32;
            let offset = (i - 1) as f64 * YEARS_PER_PERIOD as f64;
            DayunPillar {
                index,
                pillar: month.step(direction.sign() * index as i64),
                start_year: start_year + (i - 1) * YEARS_PER_PERIOD,
                end_year: start_year + i * YEARS_PER_PERIOD - 1,
                start_age: round1(age + offset),
                end_age: round1(age + offset + YEARS_PER_PERIOD as f64),
            }
        })
        .collect();

    DayunSequence {
        birth,
        direction,
        start_age: round1(age),
        start_year,
        periods,
    }
}

/// Generate the luck sequence for a cast chart.
pub fn dayun_for_chart<S: SolarTermSource + ?Sized>(
    chart: &BaziChart,
    gender: Gender,
    config: &DayunConfig,
    source: &S,
) -> DayunSequence {
    dayun_from_pillars(
        chart.datetime,
        gender,
        chart.year.stem(),
        chart.month,
        config,
        source,
    )
}

/// Luck sequence with default chart rules, nine periods, and the
/// approximate term table.
pub fn dayun_sequence(birth: NaiveDateTime, gender: Gender) -> DayunSequence {
    let source = ApproximateSolarTerms;
    let chart = bazi_chart_with(birth, &ChartConfig::default(), &source);
    dayun_for_chart(&chart, gender, &DayunConfig::default(), &source)
}

/// The luck period covering a calendar year, if any.
///
/// Years before the first period (childhood before luck starts) or past
/// the last generated period return `None`.
pub fn active_dayun(sequence: &DayunSequence, year: i32) -> Option<&DayunPillar> {
    sequence.periods.iter().find(|p| p.contains_year(year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn yang_male_runs_forward() {
        // 2024-02-10 is 甲辰 year (Yang), month 丙寅
        let seq = dayun_sequence(at(2024, 2, 10, 12), Gender::Male);
        assert_eq!(seq.direction, LuckDirection::Forward);
        assert_eq!(seq.periods.len(), 9);
        assert_eq!(seq.periods[0].pillar.to_string(), "丁卯");
        assert_eq!(seq.periods[1].pillar.to_string(), "戊辰");
    }

    #[test]
    fn yang_female_runs_backward() {
        let seq = dayun_sequence(at(2024, 2, 10, 12), Gender::Female);
        assert_eq!(seq.direction, LuckDirection::Backward);
        assert_eq!(seq.periods[0].pillar.to_string(), "乙丑");
        assert_eq!(seq.periods[1].pillar.to_string(), "甲子");
        assert_eq!(seq.periods[2].pillar.to_string(), "癸亥");
        // 6.5 days back to Lichun → 2.2 years → starts 2026
        assert!((seq.start_age - 2.2).abs() < 1e-12);
        assert_eq!(seq.start_year, 2026);
    }

    #[test]
    fn year_and_age_spans() {
        let seq = dayun_sequence(at(2024, 2, 10, 12), Gender::Female);
        let first = &seq.periods[0];
        assert_eq!((first.start_year, first.end_year), (2026, 2035));
        assert!((first.start_age - 2.2).abs() < 1e-12);
        assert!((first.end_age - 12.2).abs() < 1e-12);
        let third = &seq.periods[2];
        assert_eq!((third.start_year, third.end_year), (2046, 2055));
        assert!((third.start_age - 22.2).abs() < 1e-12);
        for w in seq.periods.windows(2) {
            assert_eq!(w[1].start_year, w[0].end_year + 1);
            assert_eq!(w[1].index, w[0].index + 1);
        }
    }

    #[test]
    fn custom_period_count() {
        let birth = at(1990, 6, 15, 8);
        let chart = bazi_chart_with(birth, &ChartConfig::default(), &ApproximateSolarTerms);
        let config = DayunConfig { periods: 12 };
        let seq = dayun_for_chart(&chart, Gender::Male, &config, &ApproximateSolarTerms);
        assert_eq!(seq.periods.len(), 12);
        assert_eq!(seq.periods[11].index, 12);
        let empty = dayun_for_chart(&chart, Gender::Male, &DayunConfig { periods: 0 }, &ApproximateSolarTerms);
        assert!(empty.periods.is_empty());
    }

    #[test]
    fn active_period_lookup() {
        let seq = dayun_sequence(at(2024, 2, 10, 12), Gender::Female);
        assert!(active_dayun(&seq, 2025).is_none());
        assert_eq!(active_dayun(&seq, 2026).unwrap().index, 1);
        assert_eq!(active_dayun(&seq, 2035).unwrap().index, 1);
        assert_eq!(active_dayun(&seq, 2036).unwrap().index, 2);
        assert_eq!(active_dayun(&seq, 2115).unwrap().index, 9);
        assert!(active_dayun(&seq, 2116).is_none());
    }
}
