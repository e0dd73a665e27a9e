//! Serializable request/response shapes for the JSON contract.
//!
//! Field names are camelCase; element counts are keyed by the element's
//! Chinese character (木火土金水).

use ganzhi_base::{BaziChart, DayunPillar, DayunSequence, Element, Pillar};
use serde::{Deserialize, Serialize};

/// Input: `{ "civilDateTime": "...", "gender": "male" | "female" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub civil_date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// One pillar as characters. Only the year pillar carries a zodiac.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarReport {
    pub stem: String,
    pub branch: String,
    pub pillar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
}

impl PillarReport {
    fn from_pillar(p: &Pillar, with_zodiac: bool) -> Self {
        Self {
            stem: p.stem().name().to_string(),
            branch: p.branch().name().to_string(),
            pillar: p.to_string(),
            zodiac: with_zodiac.then(|| p.branch().zodiac().name().to_string()),
        }
    }
}

/// Element counts across the 8 chart symbols; all five keys always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementsCount {
    #[serde(rename = "木")]
    pub wood: u8,
    #[serde(rename = "火")]
    pub fire: u8,
    #[serde(rename = "土")]
    pub earth: u8,
    #[serde(rename = "金")]
    pub metal: u8,
    #[serde(rename = "水")]
    pub water: u8,
}

impl ElementsCount {
    pub fn total(&self) -> u32 {
        [self.wood, self.fire, self.earth, self.metal, self.water]
            .iter()
            .map(|&n| n as u32)
            .sum()
    }
}

/// Element names of one pillar's stem and branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarElements {
    pub stem: String,
    pub branch: String,
}

impl From<&Pillar> for PillarElements {
    fn from(p: &Pillar) -> Self {
        Self {
            stem: p.stem().element().name().to_string(),
            branch: p.branch().element().name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartElements {
    pub year: PillarElements,
    pub month: PillarElements,
    pub day: PillarElements,
    pub hour: PillarElements,
}

/// Chart output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub year: PillarReport,
    pub month: PillarReport,
    pub day: PillarReport,
    pub hour: PillarReport,
    pub formatted: String,
    pub elements_count: ElementsCount,
    pub elements: ChartElements,
}

impl From<&BaziChart> for ChartReport {
    fn from(chart: &BaziChart) -> Self {
        let tally = chart.elements;
        Self {
            year: PillarReport::from_pillar(&chart.year, true),
            month: PillarReport::from_pillar(&chart.month, false),
            day: PillarReport::from_pillar(&chart.day, false),
            hour: PillarReport::from_pillar(&chart.hour, false),
            formatted: chart.formatted(),
            elements_count: ElementsCount {
                wood: tally.get(Element::Wood),
                fire: tally.get(Element::Fire),
                earth: tally.get(Element::Earth),
                metal: tally.get(Element::Metal),
                water: tally.get(Element::Water),
            },
            elements: ChartElements {
                year: (&chart.year).into(),
                month: (&chart.month).into(),
                day: (&chart.day).into(),
                hour: (&chart.hour).into(),
            },
        }
    }
}

/// One luck period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckItem {
    pub index: u8,
    pub pillar: String,
    pub stem: String,
    pub branch: String,
    pub start_year: i32,
    pub end_year: i32,
    pub start_age: f64,
    pub end_age: f64,
}

impl From<&DayunPillar> for LuckItem {
    fn from(p: &DayunPillar) -> Self {
        Self {
            index: p.index,
            pillar: p.pillar.to_string(),
            stem: p.pillar.stem().name().to_string(),
            branch: p.pillar.branch().name().to_string(),
            start_year: p.start_year,
            end_year: p.end_year,
            start_age: p.start_age,
            end_age: p.end_age,
        }
    }
}

/// Luck output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckReport {
    /// `"forward"` or `"backward"`.
    pub direction: String,
    pub start_age_years: f64,
    pub items: Vec<LuckItem>,
}

impl From<&DayunSequence> for LuckReport {
    fn from(seq: &DayunSequence) -> Self {
        Self {
            direction: seq.direction.name().to_string(),
            start_age_years: seq.start_age,
            items: seq.periods.iter().map(LuckItem::from).collect(),
        }
    }
}

/// Chart plus (when a gender was supplied) the luck sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub civil_date_time: String,
    pub chart: ChartReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luck: Option<LuckReport>,
}
