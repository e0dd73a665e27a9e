//! BaZi (four pillars) chart assembly and the Five-Element tally.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::branch::Zodiac;
use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::Pillar;
use crate::pillars::{
    YearBoundary, ZiHourRule, day_for_hour, day_pillar, effective_year_for_date, hour_pillar_from,
    month_pillar_with, pillar_of_year,
};
use crate::solar_term::{ApproximateSolarTerms, SolarTermSource};

/// Number of symbols in a chart (4 stems + 4 branches).
pub const CHART_SYMBOLS: u8 = 8;

/// Chart assembly options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartConfig {
    pub year_boundary: YearBoundary,
    pub zi_hour: ZiHourRule,
}

/// Count of each element across a chart's stems and branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    /// Tally the stems and branches of a chart's four pillars.
    pub fn from_pillars(pillars: &[Pillar; 4]) -> Self {
        let mut counts = [0u8; 5];
        for p in pillars {
            counts[p.stem().element().index() as usize] += 1;
            counts[p.branch().element().index() as usize] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// `(element, count)` for all five elements, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }

    /// Elements with a zero count.
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|&(_, n)| n == 0).map(|(e, _)| e).collect()
    }
}

/// Four pillars for one civil instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaziChart {
    /// The civil date-time the chart was cast for.
    pub datetime: NaiveDateTime,
    /// Sexagenary year the year pillar belongs to.
    pub effective_year: i32,
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub elements: ElementTally,
}

impl BaziChart {
    /// Year, Month, Day, Hour.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Zodiac animal of the year branch.
    pub const fn zodiac(&self) -> Zodiac {
        self.year.branch().zodiac()
    }

    /// Space-joined `"Year Month Day Hour"`, e.g. `"乙巳 戊子 甲戌 甲戌"`.
    pub fn formatted(&self) -> String {
        self.pillars()
            .iter()
            .map(Pillar::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for BaziChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Cast a chart with default rules and the approximate term table.
pub fn bazi_chart(datetime: NaiveDateTime) -> BaziChart {
    bazi_chart_with(datetime, &ChartConfig::default(), &ApproximateSolarTerms)
}

/// Cast a chart with explicit rules and solar-term source.
pub fn bazi_chart_with<S: SolarTermSource + ?Sized>(
    datetime: NaiveDateTime,
    config: &ChartConfig,
    source: &S,
) -> BaziChart {
    let date = datetime.date();
    let hour = datetime.hour();

    let effective_year = effective_year_for_date(date, config.year_boundary, source);
    let year = pillar_of_year(effective_year);
    let month = month_pillar_with(date, year.stem(), source);
    let day = day_pillar(day_for_hour(date, hour, config.zi_hour));
    let hour = hour_pillar_from(day.stem(), hour);
    let elements = ElementTally::from_pillars(&[year, month, day, hour]);

    debug_assert_eq!(elements.total(), CHART_SYMBOLS);
    debug_assert!(effective_year <= date.year());

    BaziChart {
        datetime,
        effective_year,
        year,
        month,
        day,
        hour,
        elements,
    }
}
