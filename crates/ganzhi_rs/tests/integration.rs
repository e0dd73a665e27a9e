//! End-to-end tests for the text and JSON entry points.

use ganzhi_rs::*;
use serde_json::Value;

#[test]
fn chart_for_anchor_evening() {
    let c = chart("2025-12-31T19:01").unwrap();
    assert_eq!(c.formatted(), "乙巳 戊子 甲戌 甲戌");
    assert_eq!(c.zodiac(), Zodiac::Snake);
}

#[test]
fn chart_accepts_offset_without_seconds() {
    let c = chart("2025-12-31T19:01+08:00").unwrap();
    assert_eq!(c.formatted(), "乙巳 戊子 甲戌 甲戌");
}

#[test]
fn chart_for_lantern_festival_week() {
    // 2024-02-10 12:00: after Lichun, Jia year, Yin month
    let c = chart("2024-02-10T12:00").unwrap();
    assert_eq!(c.formatted(), "甲辰 丙寅 甲辰 庚午");
    let t = c.elements;
    assert_eq!(t.get(Element::Wood), 3);
    assert_eq!(t.get(Element::Fire), 2);
    assert_eq!(t.get(Element::Earth), 2);
    assert_eq!(t.get(Element::Metal), 1);
    assert_eq!(t.get(Element::Water), 0);
}

#[test]
fn luck_female_jia_year_runs_backward() {
    let seq = luck("2024-02-10T12:00", "female").unwrap();
    assert_eq!(seq.direction, LuckDirection::Backward);
    assert!((seq.start_age - 2.2).abs() < 1e-12);
    assert_eq!(seq.start_year, 2026);
    let first: Vec<String> = seq.periods[..3].iter().map(|p| p.pillar.to_string()).collect();
    assert_eq!(first, ["乙丑", "甲子", "癸亥"]);
    assert_eq!(seq.periods.len(), 9);
}

#[test]
fn luck_rejects_unknown_gender() {
    assert!(matches!(
        luck("2024-02-10T12:00", "unknown"),
        Err(GanzhiError::InvalidGender(_))
    ));
}

#[test]
fn bad_text_is_format_error() {
    assert!(matches!(
        chart("10/02/2024 12:00"),
        Err(GanzhiError::InvalidDateTimeFormat(_))
    ));
}

#[test]
fn analyze_json_contract_keys() {
    let out = analyze_json(r#"{"civilDateTime":"2024-02-10T12:00","gender":"female"}"#).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["civilDateTime"], "2024-02-10T12:00:00");
    let chart = &v["chart"];
    assert_eq!(chart["year"]["pillar"], "甲辰");
    assert_eq!(chart["year"]["stem"], "甲");
    assert_eq!(chart["year"]["branch"], "辰");
    assert_eq!(chart["year"]["zodiac"], "龙");
    assert!(chart["month"].get("zodiac").is_none());
    assert_eq!(chart["formatted"], "甲辰 丙寅 甲辰 庚午");

    let counts = chart["elementsCount"].as_object().unwrap();
    assert_eq!(counts.len(), 5);
    let total: u64 = counts.values().map(|n| n.as_u64().unwrap()).sum();
    assert_eq!(total, 8);
    assert_eq!(counts["水"], 0);

    assert_eq!(chart["elements"]["hour"]["stem"], "金");
    assert_eq!(chart["elements"]["hour"]["branch"], "火");

    let luck = &v["luck"];
    assert_eq!(luck["direction"], "backward");
    assert_eq!(luck["startAgeYears"], 2.2);
    let items = luck["items"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["index"], 1);
    assert_eq!(items[0]["pillar"], "乙丑");
    assert_eq!(items[0]["startYear"], 2026);
    assert_eq!(items[0]["endYear"], 2035);
    assert_eq!(items[0]["startAge"], 2.2);
    assert_eq!(items[0]["endAge"], 12.2);
}

#[test]
fn analyze_json_without_gender_omits_luck() {
    let out = analyze_json(r#"{"civilDateTime":"2025-12-31T19:01"}"#).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert!(v.get("luck").is_none());
    assert_eq!(v["chart"]["day"]["pillar"], "甲戌");
}

#[test]
fn analyze_json_round_trips_report() {
    let out = analyze_json(r#"{"civilDateTime":"1990-06-15T14:30","gender":"male"}"#).unwrap();
    let report: AnalysisReport = serde_json::from_str(&out).unwrap();
    assert_eq!(report.chart.formatted, "庚午 壬午 辛亥 乙未");
    assert_eq!(report.chart.elements_count.total(), 8);
    assert_eq!(report.luck.unwrap().direction, "forward");
}

#[test]
fn analyze_json_malformed_request() {
    for bad in ["", "{", r#"{"gender":"male"}"#, r#"{"civilDateTime":42}"#] {
        assert!(
            matches!(analyze_json(bad), Err(GanzhiError::InvalidRequest(_))),
            "{bad}"
        );
    }
}

#[test]
fn analyze_json_out_of_range() {
    let err = analyze_json(r#"{"civilDateTime":"2150-01-01T00:00"}"#).unwrap_err();
    assert_eq!(
        err,
        GanzhiError::DateOutOfSupportedRange {
            year: 2150,
            min: 1900,
            max: 2100
        }
    );
    let config = EngineConfig {
        range: RangePolicy::unrestricted(),
        ..EngineConfig::default()
    };
    assert!(analyze_json_with(r#"{"civilDateTime":"2150-01-01T00:00"}"#, &config).is_ok());
}

#[test]
fn start_of_spring_rule_through_config() {
    let config = EngineConfig {
        chart: ChartConfig {
            year_boundary: YearBoundary::StartOfSpring,
            ..ChartConfig::default()
        },
        ..EngineConfig::default()
    };
    let c = chart_with("2024-02-02T10:00", &config).unwrap();
    assert_eq!(c.year.to_string(), "癸卯");
}
