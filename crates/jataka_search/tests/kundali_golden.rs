//! End-to-end chart assembly against the bundled analytic ephemeris.

use chrono::{NaiveDate, TimeZone, Utc};
use jataka_core::AnalyticEphemeris;
use jataka_search::{
    BirthDetails, GrahaPositionsConfig, SearchError, kundali_for_birth, vimshottari_for_chart,
};
use jataka_vedic_base::{DashaLevel, Graha, Nakshatra, Rashi, normalize_180};
use proptest::prelude::*;

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

#[test]
fn new_york_chart_shape() {
    let k = kundali_for_birth(
        &new_york(),
        &AnalyticEphemeris::new(),
        &GrahaPositionsConfig::default(),
    )
    .unwrap();
    assert_eq!(k.utc, Utc.with_ymd_and_hms(1990, 1, 1, 17, 0, 0).unwrap());
    assert_eq!(k.d1.planets.len(), 9);
    assert_eq!(k.d1.houses.len(), 12);
    assert_eq!(k.d1.ascendant.rashi, Rashi::Meena);
    assert_eq!(k.d9.planets.len(), 9);

    let as_of = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let dashas = vimshottari_for_chart(&k.d1, k.jd_utc, as_of).unwrap();
    assert_eq!(dashas.len(), 9);
    assert_eq!(dashas[0].level, DashaLevel::Mahadasha);
    assert_eq!(dashas[0].start, k.utc);
    assert_eq!(dashas[0].lord, k.d1.planet(Graha::Chandra).nakshatra_lord);
    assert_eq!(dashas.iter().filter(|d| d.is_current).count(), 1);
}

#[test]
fn new_york_retrograde_flags() {
    let k = kundali_for_birth(
        &new_york(),
        &AnalyticEphemeris::new(),
        &GrahaPositionsConfig::default(),
    )
    .unwrap();
    assert!(!k.d1.planet(Graha::Surya).retrograde);
    assert!(!k.d1.planet(Graha::Chandra).retrograde);
    assert!(k.d1.planet(Graha::Guru).retrograde);
    assert!(!k.d1.planet(Graha::Shani).retrograde);
    assert!(k.d1.planet(Graha::Rahu).retrograde);
}

#[test]
fn delhi_moon_in_ashwini() {
    let k = kundali_for_birth(&delhi(), &AnalyticEphemeris::new(), &GrahaPositionsConfig::default())
        .unwrap();
    let moon = k.d1.planet(Graha::Chandra);
    assert_eq!(moon.rashi, Rashi::Mesha);
    assert_eq!(moon.nakshatra, Nakshatra::Ashwini);
    assert_eq!(moon.nakshatra_lord, Graha::Ketu);
    assert_eq!(k.d1.ascendant.rashi, Rashi::Meena);
    // Moon in Mesha with Meena lagna → 2nd house
    assert_eq!(moon.house, 2);
}

#[test]
fn invalid_input_fails_fast() {
    let mut b = new_york();
    b.latitude = 95.0;
    let err = kundali_for_birth(&b, &AnalyticEphemeris::new(), &GrahaPositionsConfig::default())
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(_)));

    let mut b = new_york();
    b.time = "noon".into();
    assert!(kundali_for_birth(&b, &AnalyticEphemeris::new(), &GrahaPositionsConfig::default()).is_err());
}

#[test]
fn provider_range_error_propagates() {
    let mut b = new_york();
    b.date = NaiveDate::from_ymd_opt(1700, 1, 1).unwrap();
    let err = kundali_for_birth(&b, &AnalyticEphemeris::new(), &GrahaPositionsConfig::default())
        .unwrap_err();
    assert!(matches!(err, SearchError::Engine(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn chart_invariants(
        days in 0u32..60_000,
        minutes in 0u32..1440,
        lat in -66.0..66.0f64,
        lon in -180.0..180.0f64,
    ) {
        let date = NaiveDate::from_ymd_opt(1920, 1, 1).unwrap() + chrono::Days::new(days as u64);
        let birth = BirthDetails {
            name: "p".into(),
            date,
            time: format!("{:02}:{:02}", minutes / 60, minutes % 60),
            latitude: lat,
            longitude: lon,
            utc_offset_hours: 0.0,
        };
        let k = kundali_for_birth(&birth, &AnalyticEphemeris::new(), &GrahaPositionsConfig::default())
            .unwrap();
        let a = k.d1.lagna_rashi_index();
        for p in &k.d1.planets {
            prop_assert!((0.0..360.0).contains(&p.sidereal_longitude));
            prop_assert!((0.0..30.0).contains(&p.degrees_in_rashi));
            prop_assert!((1..=4).contains(&p.pada));
            prop_assert!((1..=12).contains(&p.house));
            prop_assert_eq!(p.house, ((p.rashi_index() + 12 - a) % 12) + 1);
        }
        let rahu = k.d1.planet(Graha::Rahu).sidereal_longitude;
        let ketu = k.d1.planet(Graha::Ketu).sidereal_longitude;
        prop_assert!((normalize_180(ketu - rahu).abs() - 180.0).abs() < 0.01);
    }
}
