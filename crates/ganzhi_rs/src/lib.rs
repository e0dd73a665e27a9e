//! Convenience wrapper for the ganzhi sexagenary calendar engine.
//!
//! Accepts date-time text, applies the supported-range policy, and
//! returns BaZi charts, Dayun sequences, or the JSON analysis contract.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ganzhi_rs::*;
//!
//! let c = chart("2025-12-31T19:01").unwrap();
//! assert_eq!(c.formatted(), "乙巳 戊子 甲戌 甲戌");
//!
//! let json = analyze_json(r#"{"civilDateTime":"2024-02-10T12:00","gender":"female"}"#).unwrap();
//! println!("{json}");
//! ```

pub mod convenience;
pub mod date;
pub mod error;
pub mod policy;
pub mod report;

pub use convenience::{
    EngineConfig, analyze, analyze_json, analyze_json_with, analyze_with, chart, chart_at,
    chart_with, luck, luck_with, parse_checked, parse_gender,
};
pub use date::CivilDateTime;
pub use error::GanzhiError;
pub use policy::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, RangePolicy};
pub use report::{
    AnalysisReport, AnalysisRequest, ChartElements, ChartReport, ElementsCount, LuckItem,
    LuckReport, PillarElements, PillarReport,
};

// Re-export base types so callers don't need to depend on ganzhi_base directly.
pub use ganzhi_base::{
    BaziChart, ChartConfig, DayunConfig, DayunPillar, DayunSequence, EarthlyBranch, Element,
    Gender, HeavenlyStem, LuckDirection, Pillar, Polarity, YearBoundary, ZiHourRule, Zodiac,
    active_dayun,
};
