//! End-to-end chart pipeline against the bundled analytic ephemeris.

use chrono::{NaiveDate, TimeZone, Utc};
use jataka_rs::*;

fn new_york() -> BirthDetails {
    BirthDetails {
        name: "New York".into(),
        date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        time: "12:00".into(),
        latitude: 40.7128,
        longitude: -74.0060,
        utc_offset_hours: -5.0,
    }
}

fn delhi() -> BirthDetails {
    BirthDetails {
        name: "New Delhi".into(),
        date: NaiveDate::from_ymd_opt(1950, 1, 26).unwrap(),
        time: "10:18".into(),
        latitude: 28.6139,
        longitude: 77.2090,
        utc_offset_hours: 5.5,
    }
}

fn as_of() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn compute(birth: &BirthDetails, config: &ChartConfig) -> Result<Chart, JatakaError> {
    compute_chart(
        birth,
        &AnalyticEphemeris::new(),
        &KnowledgeBase::classical(),
        config,
        as_of(),
    )
}

#[test]
fn new_york_chart() {
    let chart = compute(&new_york(), &ChartConfig::default()).unwrap();
    assert_eq!(chart.d1.planets.len(), 9);
    assert_eq!(chart.d1.houses.len(), 12);
    assert_eq!(chart.d9.planets.len(), 9);
    assert!(!chart.dashas.is_empty());
    assert_eq!(chart.dashas[0].level, DashaLevel::Mahadasha);
    assert_eq!(chart.doshas.len(), 3);
    assert_eq!(chart.strengths.len(), 9);
    assert!(chart.outer_planets.is_empty());
}

#[test]
fn delhi_moon_in_ashwini() {
    let chart = compute(&delhi(), &ChartConfig::default()).unwrap();
    let moon = chart.d1.planet(Graha::Chandra);
    assert_eq!(moon.rashi, Rashi::Mesha);
    assert_eq!(moon.nakshatra, Nakshatra::Ashwini);
}

#[test]
fn serialization_is_byte_identical() {
    let a = compute(&delhi(), &ChartConfig::default()).unwrap().to_json().unwrap();
    let b = compute(&delhi(), &ChartConfig::default()).unwrap().to_json().unwrap();
    assert_eq!(a, b);
    assert!(!a.contains("outer_planets"));
}

#[test]
fn outer_planets_on_request() {
    let config = ChartConfig {
        include_outer_planets: true,
        ..ChartConfig::default()
    };
    let chart = compute(&new_york(), &config).unwrap();
    assert_eq!(chart.outer_planets.len(), 2);
    assert_eq!(chart.outer_planets[0].body, Body::Uranus);
}

#[test]
fn invalid_birth_fails_fast() {
    let mut birth = new_york();
    birth.time = "25:00".into();
    let err = compute(&birth, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, JatakaError::Search(SearchError::InvalidInput(_))));
}

#[test]
fn invalid_config_rejected() {
    let config = ChartConfig {
        retrograde_step_days: -1.0,
        ..ChartConfig::default()
    };
    let err = compute(&new_york(), &config).unwrap_err();
    assert!(matches!(err, JatakaError::Config(_)));
}

#[test]
fn knowledge_file_round_trip() {
    let path = std::env::temp_dir().join(format!("jataka_kb_{}.json", std::process::id()));
    let kb = KnowledgeBase::classical();
    std::fs::write(&path, serde_json::to_string(&kb).unwrap()).unwrap();
    let loaded = load_knowledge(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, kb);
}
