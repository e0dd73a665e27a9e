//! Sectional solar terms (jie) that open each sexagenary month.
//!
//! The twelve "sectional" terms start the twelve branch-months, from
//! Xiaohan (小寒, opens the Chou month in early January) to Daxue (大雪,
//! opens the Zi month in early December).
//!
//! Boundary dates come from a [`SolarTermSource`]. The built-in
//! [`ApproximateSolarTerms`] uses a fixed `(month, day)` per term that
//! ignores year-to-year drift of a day or so. An ephemeris-backed source
//! can implement the same trait without touching the calculators.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::branch::EarthlyBranch;

/// The 12 sectional solar terms in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Xiaohan,
    Lichun,
    Jingzhe,
    Qingming,
    Lixia,
    Mangzhong,
    Xiaoshu,
    Liqiu,
    Bailu,
    Hanlu,
    Lidong,
    Daxue,
}

/// All 12 sectional terms in calendar order (index 0 = Xiaohan, January).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Xiaohan,
    SolarTerm::Lichun,
    SolarTerm::Jingzhe,
    SolarTerm::Qingming,
    SolarTerm::Lixia,
    SolarTerm::Mangzhong,
    SolarTerm::Xiaoshu,
    SolarTerm::Liqiu,
    SolarTerm::Bailu,
    SolarTerm::Hanlu,
    SolarTerm::Lidong,
    SolarTerm::Daxue,
];

impl SolarTerm {
    /// 0-based calendar-order index (Xiaohan=0 .. Daxue=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Xiaohan => 0,
            Self::Lichun => 1,
            Self::Jingzhe => 2,
            Self::Qingming => 3,
            Self::Lixia => 4,
            Self::Mangzhong => 5,
            Self::Xiaoshu => 6,
            Self::Liqiu => 7,
            Self::Bailu => 8,
            Self::Hanlu => 9,
            Self::Lidong => 10,
            Self::Daxue => 11,
        }
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xiaohan => "小寒",
            Self::Lichun => "立春",
            Self::Jingzhe => "惊蛰",
            Self::Qingming => "清明",
            Self::Lixia => "立夏",
            Self::Mangzhong => "芒种",
            Self::Xiaoshu => "小暑",
            Self::Liqiu => "立秋",
            Self::Bailu => "白露",
            Self::Hanlu => "寒露",
            Self::Lidong => "立冬",
            Self::Daxue => "大雪",
        }
    }

    /// Pinyin transliteration.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Xiaohan => "Xiaohan",
            Self::Lichun => "Lichun",
            Self::Jingzhe => "Jingzhe",
            Self::Qingming => "Qingming",
            Self::Lixia => "Lixia",
            Self::Mangzhong => "Mangzhong",
            Self::Xiaoshu => "Xiaoshu",
            Self::Liqiu => "Liqiu",
            Self::Bailu => "Bailu",
            Self::Hanlu => "Hanlu",
            Self::Lidong => "Lidong",
            Self::Daxue => "Daxue",
        }
    }

    /// Branch of the month this term opens (Xiaohan → Chou .. Daxue → Zi).
    pub const fn month_branch(self) -> EarthlyBranch {
        EarthlyBranch::from_index(self.index() as i64 + 1)
    }
}

/// A fixed civil-calendar boundary for one sectional term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermBoundary {
    pub term: SolarTerm,
    pub month: u32,
    pub day: u32,
}

/// Approximate boundary dates, one per sectional term, in calendar order.
pub const APPROXIMATE_TERM_BOUNDARIES: [TermBoundary; 12] = [
    TermBoundary { term: SolarTerm::Xiaohan, month: 1, day: 6 },
    TermBoundary { term: SolarTerm::Lichun, month: 2, day: 4 },
    TermBoundary { term: SolarTerm::Jingzhe, month: 3, day: 6 },
    TermBoundary { term: SolarTerm::Qingming, month: 4, day: 5 },
    TermBoundary { term: SolarTerm::Lixia, month: 5, day: 6 },
    TermBoundary { term: SolarTerm::Mangzhong, month: 6, day: 6 },
    TermBoundary { term: SolarTerm::Xiaoshu, month: 7, day: 7 },
    TermBoundary { term: SolarTerm::Liqiu, month: 8, day: 8 },
    TermBoundary { term: SolarTerm::Bailu, month: 9, day: 8 },
    TermBoundary { term: SolarTerm::Hanlu, month: 10, day: 8 },
    TermBoundary { term: SolarTerm::Lidong, month: 11, day: 7 },
    TermBoundary { term: SolarTerm::Daxue, month: 12, day: 7 },
];

/// Supplies the civil start instant of each sectional term.
pub trait SolarTermSource {
    /// Start of `term` within civil year `year`, or `None` if the year is
    /// outside what the source can represent.
    fn term_start(&self, year: i32, term: SolarTerm) -> Option<NaiveDateTime>;
}

/// Fixed-table source: every term starts at local midnight on its
/// [`APPROXIMATE_TERM_BOUNDARIES`] date, every year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproximateSolarTerms;

impl SolarTermSource for ApproximateSolarTerms {
    fn term_start(&self, year: i32, term: SolarTerm) -> Option<NaiveDateTime> {
        let b = APPROXIMATE_TERM_BOUNDARIES[term.index() as usize];
        NaiveDate::from_ymd_opt(year, b.month, b.day)?.and_hms_opt(0, 0, 0)
    }
}

/// The sectional term in force on `date`: the latest boundary at or
/// before it. Dates before the year's first boundary fall in the previous
/// cycle's Daxue (Zi) month.
pub fn governing_term<S: SolarTermSource + ?Sized>(date: NaiveDate, source: &S) -> SolarTerm {
    let year = date.year();
    ALL_SOLAR_TERMS
        .iter()
        .rev()
        .find(|&&term| {
            source
                .term_start(year, term)
                .is_some_and(|start| start.date() <= date)
        })
        .copied()
        .unwrap_or(SolarTerm::Daxue)
}

/// All term starts of one civil year, in calendar order.
pub fn terms_in_year<S: SolarTermSource + ?Sized>(
    year: i32,
    source: &S,
) -> Vec<(SolarTerm, NaiveDateTime)> {
    ALL_SOLAR_TERMS
        .iter()
        .filter_map(|&term| source.term_start(year, term).map(|start| (term, start)))
        .collect()
}

/// Term starts of the surrounding three civil years, chronologically.
fn terms_around<S: SolarTermSource + ?Sized>(
    year: i32,
    source: &S,
) -> Vec<(SolarTerm, NaiveDateTime)> {
    let mut all: Vec<_> = (year - 1..=year + 1)
        .flat_map(|y| terms_in_year(y, source))
        .collect();
    all.sort_by_key(|&(_, start)| start);
    all
}

/// First term boundary strictly after `instant`.
pub fn next_term<S: SolarTermSource + ?Sized>(
    instant: NaiveDateTime,
    source: &S,
) -> Option<(SolarTerm, NaiveDateTime)> {
    terms_around(instant.year(), source)
        .into_iter()
        .find(|&(_, start)| start > instant)
}

/// Latest term boundary at or before `instant`.
pub fn prev_term<S: SolarTermSource + ?Sized>(
    instant: NaiveDateTime,
    source: &S,
) -> Option<(SolarTerm, NaiveDateTime)> {
    terms_around(instant.year(), source)
        .into_iter()
        .rev()
        .find(|&(_, start)| start <= instant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn table_is_in_calendar_order() {
        for (i, b) in APPROXIMATE_TERM_BOUNDARIES.iter().enumerate() {
            assert_eq!(b.term, ALL_SOLAR_TERMS[i]);
            assert_eq!(b.term.index() as usize, i);
            assert_eq!(b.month as usize, i + 1);
        }
    }

    #[test]
    fn month_branches() {
        assert_eq!(SolarTerm::Xiaohan.month_branch(), EarthlyBranch::Chou);
        assert_eq!(SolarTerm::Lichun.month_branch(), EarthlyBranch::Yin);
        assert_eq!(SolarTerm::Lidong.month_branch(), EarthlyBranch::Hai);
        assert_eq!(SolarTerm::Daxue.month_branch(), EarthlyBranch::Zi);
    }

    #[test]
    fn governing_before_first_boundary_is_daxue() {
        let src = ApproximateSolarTerms;
        assert_eq!(governing_term(date(2024, 1, 1), &src), SolarTerm::Daxue);
        assert_eq!(governing_term(date(2024, 1, 5), &src), SolarTerm::Daxue);
    }

    #[test]
    fn governing_on_boundary_day_is_new_term() {
        let src = ApproximateSolarTerms;
        assert_eq!(governing_term(date(2024, 1, 6), &src), SolarTerm::Xiaohan);
        assert_eq!(governing_term(date(2024, 2, 3), &src), SolarTerm::Xiaohan);
        assert_eq!(governing_term(date(2024, 2, 4), &src), SolarTerm::Lichun);
        assert_eq!(governing_term(date(2024, 12, 6), &src), SolarTerm::Lidong);
        assert_eq!(governing_term(date(2024, 12, 7), &src), SolarTerm::Daxue);
        assert_eq!(governing_term(date(2024, 12, 31), &src), SolarTerm::Daxue);
    }

    #[test]
    fn next_term_crosses_year_end() {
        let src = ApproximateSolarTerms;
        let (term, start) = next_term(at(2024, 12, 20, 12), &src).unwrap();
        assert_eq!(term, SolarTerm::Xiaohan);
        assert_eq!(start, at(2025, 1, 6, 0));
    }

    #[test]
    fn prev_term_crosses_year_start() {
        let src = ApproximateSolarTerms;
        let (term, start) = prev_term(at(2024, 1, 3, 8), &src).unwrap();
        assert_eq!(term, SolarTerm::Daxue);
        assert_eq!(start, at(2023, 12, 7, 0));
    }

    #[test]
    fn boundary_instant_counts_as_previous() {
        let src = ApproximateSolarTerms;
        let instant = at(2024, 2, 4, 0);
        assert_eq!(prev_term(instant, &src).unwrap().0, SolarTerm::Lichun);
        assert_eq!(next_term(instant, &src).unwrap().0, SolarTerm::Jingzhe);
    }

    #[test]
    fn terms_in_year_has_twelve() {
        let terms = terms_in_year(2025, &ApproximateSolarTerms);
        assert_eq!(terms.len(), 12);
        assert_eq!(terms[1], (SolarTerm::Lichun, at(2025, 2, 4, 0)));
    }
}
