//! High-level functions that take date-time text and return pillars,
//! luck sequences, or the JSON contract.

use ganzhi_base::{
    ApproximateSolarTerms, BaziChart, ChartConfig, DayunConfig, DayunSequence, Gender,
    bazi_chart_with, dayun_for_chart,
};
use tracing::debug;

use crate::date::CivilDateTime;
use crate::error::GanzhiError;
use crate::policy::RangePolicy;
use crate::report::{AnalysisReport, AnalysisRequest, ChartReport, LuckReport};

/// Rules applied by the convenience functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub chart: ChartConfig,
    pub dayun: DayunConfig,
    pub range: RangePolicy,
}

/// Parse a gender name ("male", "female", "m", "f"; any case).
pub fn parse_gender(s: &str) -> Result<Gender, GanzhiError> {
    Gender::from_name(s).ok_or_else(|| GanzhiError::InvalidGender(s.to_string()))
}

/// Parse text and check it against the range policy.
pub fn parse_checked(text: &str, policy: &RangePolicy) -> Result<CivilDateTime, GanzhiError> {
    let dt: CivilDateTime = text.parse()?;
    policy.check(&dt)?;
    Ok(dt)
}

/// Cast a chart for an already-parsed date-time.
pub fn chart_at(dt: CivilDateTime, config: &EngineConfig) -> Result<BaziChart, GanzhiError> {
    config.range.check(&dt)?;
    let chart = bazi_chart_with(dt.naive(), &config.chart, &ApproximateSolarTerms);
    debug!(datetime = %dt, chart = %chart, "cast chart");
    Ok(chart)
}

/// Cast a chart from date-time text with default rules.
pub fn chart(text: &str) -> Result<BaziChart, GanzhiError> {
    chart_with(text, &EngineConfig::default())
}

pub fn chart_with(text: &str, config: &EngineConfig) -> Result<BaziChart, GanzhiError> {
    chart_at(text.parse()?, config)
}

/// Luck sequence from date-time text and a gender name, default rules.
pub fn luck(text: &str, gender: &str) -> Result<DayunSequence, GanzhiError> {
    luck_with(text, gender, &EngineConfig::default())
}

pub fn luck_with(
    text: &str,
    gender: &str,
    config: &EngineConfig,
) -> Result<DayunSequence, GanzhiError> {
    let gender = parse_gender(gender)?;
    let chart = chart_with(text, config)?;
    Ok(luck_for_chart(&chart, gender, config))
}

fn luck_for_chart(chart: &BaziChart, gender: Gender, config: &EngineConfig) -> DayunSequence {
    let seq = dayun_for_chart(chart, gender, &config.dayun, &ApproximateSolarTerms);
    debug!(
        gender = gender.name(),
        direction = seq.direction.name(),
        start_age = seq.start_age,
        start_year = seq.start_year,
        "generated luck sequence"
    );
    seq
}

/// Chart plus optional luck for a decoded request.
pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisReport, GanzhiError> {
    analyze_with(request, &EngineConfig::default())
}

pub fn analyze_with(
    request: &AnalysisRequest,
    config: &EngineConfig,
) -> Result<AnalysisReport, GanzhiError> {
    // Gender is validated before any calculation.
    let gender = request.gender.as_deref().map(parse_gender).transpose()?;
    let dt: CivilDateTime = request.civil_date_time.parse()?;
    let chart = chart_at(dt, config)?;
    let luck = gender.map(|g| LuckReport::from(&luck_for_chart(&chart, g, config)));
    Ok(AnalysisReport {
        civil_date_time: dt.to_string(),
        chart: ChartReport::from(&chart),
        luck,
    })
}

/// JSON in, JSON out.
pub fn analyze_json(json: &str) -> Result<String, GanzhiError> {
    analyze_json_with(json, &EngineConfig::default())
}

pub fn analyze_json_with(json: &str, config: &EngineConfig) -> Result<String, GanzhiError> {
    let request: AnalysisRequest = serde_json::from_str(json)?;
    let report = analyze_with(&request, config)?;
    Ok(serde_json::to_string(&report)?)
}
