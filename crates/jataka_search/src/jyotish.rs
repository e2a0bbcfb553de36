//! Sidereal position resolution against a [`PositionProvider`].
//!
//! The 7 sapta grahas come from the provider; Rahu/Ketu from the mean-node
//! polynomial. Speed is sampled as the sidereal longitude one step later
//! minus the longitude now, wrapped to (-180, 180]; negative means
//! retrograde. Nodes carry a fixed configured speed.

use jataka_core::{Body, GeoLocation, OUTER_BODIES, PositionProvider};
use jataka_time::jd_to_centuries;
use jataka_vedic_base::{
    ALL_GRAHAS, Graha, LinearAyanamsha, mean_ketu_deg, mean_rahu_deg, normalize_180,
    rashi_from_longitude,
};

use crate::error::SearchError;
use crate::jyotish_types::{
    GrahaLongitudes, GrahaPositionsConfig, GrahaState, GrahaStates, OuterPlanet,
};

/// Map a sapta graha to its provider body. None for Rahu/Ketu.
pub(crate) fn graha_to_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal mean node at a UTC Julian Date.
fn sidereal_node(graha: Graha, jd_utc: f64, ayanamsha: &LinearAyanamsha) -> f64 {
    let t = jd_to_centuries(jd_utc);
    let tropical = if graha == Graha::Ketu {
        mean_ketu_deg(t)
    } else {
        mean_rahu_deg(t)
    };
    ayanamsha.to_sidereal(tropical, jd_utc)
}

/// Sidereal longitude of a single graha.
pub fn graha_sidereal_longitude(
    provider: &dyn PositionProvider,
    graha: Graha,
    jd_utc: f64,
    observer: &GeoLocation,
    ayanamsha: &LinearAyanamsha,
) -> Result<f64, SearchError> {
    match graha_to_body(graha) {
        Some(body) => {
            let pos = provider.ecliptic_position(body, jd_utc, observer)?;
            Ok(ayanamsha.to_sidereal(pos.longitude_deg, jd_utc))
        }
        None => Ok(sidereal_node(graha, jd_utc, ayanamsha)),
    }
}

/// Sidereal longitudes for all 9 grahas (no speed sampling).
pub fn graha_sidereal_longitudes(
    provider: &dyn PositionProvider,
    jd_utc: f64,
    observer: &GeoLocation,
    ayanamsha: &LinearAyanamsha,
) -> Result<GrahaLongitudes, SearchError> {
    let mut longitudes = [0.0f64; 9];
    for graha in ALL_GRAHAS {
        longitudes[graha.index() as usize] =
            graha_sidereal_longitude(provider, graha, jd_utc, observer, ayanamsha)?;
    }
    Ok(GrahaLongitudes { longitudes })
}

/// Full sidereal state for all 9 grahas.
pub fn graha_states(
    provider: &dyn PositionProvider,
    jd_utc: f64,
    observer: &GeoLocation,
    config: &GrahaPositionsConfig,
) -> Result<GrahaStates, SearchError> {
    let step = config.retrograde_step_days;
    if !step.is_finite() || step <= 0.0 {
        return Err(SearchError::InvalidInput(format!(
            "retrograde step {step} must be a positive number of days"
        )));
    }
    let aya = &config.ayanamsha;
    let ayanamsha_deg = aya.at(jd_utc);
    log::debug!(
        "resolving grahas via {} at JD {jd_utc:.6}, ayanamsha {ayanamsha_deg:.6}",
        provider.name()
    );

    let node = |graha| GrahaState {
        graha,
        sidereal_longitude: sidereal_node(graha, jd_utc, aya),
        latitude_deg: 0.0,
        distance_au: 0.0,
        speed_deg_per_day: config.node_speed_deg_per_day,
        retrograde: config.node_speed_deg_per_day < 0.0,
    };

    let mut states = [node(Graha::Rahu); 9];
    for graha in ALL_GRAHAS {
        let state = match graha_to_body(graha) {
            Some(body) => {
                let now = provider.ecliptic_position(body, jd_utc, observer)?;
                let next = provider.ecliptic_position(body, jd_utc + step, observer)?;
                let lon_now = aya.to_sidereal(now.longitude_deg, jd_utc);
                let lon_next = aya.to_sidereal(next.longitude_deg, jd_utc + step);
                let delta = normalize_180(lon_next - lon_now);
                GrahaState {
                    graha,
                    sidereal_longitude: lon_now,
                    latitude_deg: now.latitude_deg,
                    distance_au: now.distance_au,
                    speed_deg_per_day: delta / step,
                    retrograde: delta < 0.0,
                }
            }
            None => node(graha),
        };
        log::trace!(
            "{}: {:.4}° speed {:+.4}°/day{}",
            graha.english_name(),
            state.sidereal_longitude,
            state.speed_deg_per_day,
            if state.retrograde { " (R)" } else { "" }
        );
        states[graha.index() as usize] = state;
    }

    Ok(GrahaStates {
        states,
        ayanamsha_deg,
    })
}

/// Sidereal positions of Uranus and Neptune.
pub fn outer_planet_positions(
    provider: &dyn PositionProvider,
    jd_utc: f64,
    observer: &GeoLocation,
    config: &GrahaPositionsConfig,
) -> Result<Vec<OuterPlanet>, SearchError> {
    let aya = &config.ayanamsha;
    let step = config.retrograde_step_days;
    OUTER_BODIES
        .iter()
        .map(|&body| {
            let now = provider.ecliptic_position(body, jd_utc, observer)?;
            let next = provider.ecliptic_position(body, jd_utc + step, observer)?;
            let lon = aya.to_sidereal(now.longitude_deg, jd_utc);
            let delta = normalize_180(aya.to_sidereal(next.longitude_deg, jd_utc + step) - lon);
            let info = rashi_from_longitude(lon);
            Ok(OuterPlanet {
                body,
                sidereal_longitude: lon,
                rashi: info.rashi,
                degrees_in_rashi: info.degrees_in_rashi,
                retrograde: delta < 0.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_core::{AnalyticEphemeris, EclipticPosition, EngineError};
    use jataka_vedic_base::normalize_360;

    /// Fixed-position provider: every body sits at `lon + rate·(jd − 2451545)`.
    struct Linear {
        lon: f64,
        rate: f64,
    }

    impl PositionProvider for Linear {
        fn name(&self) -> &'static str {
            "linear"
        }

        fn ecliptic_position(
            &self,
            _body: Body,
            jd_utc: f64,
            _observer: &GeoLocation,
        ) -> Result<EclipticPosition, EngineError> {
            Ok(EclipticPosition {
                longitude_deg: normalize_360(self.lon + self.rate * (jd_utc - 2_451_545.0)),
                latitude_deg: 1.0,
                distance_au: 2.0,
            })
        }
    }

    #[test]
    fn graha_to_body_mapping() {
        assert_eq!(graha_to_body(Graha::Surya), Some(Body::Sun));
        assert_eq!(graha_to_body(Graha::Chandra), Some(Body::Moon));
        assert_eq!(graha_to_body(Graha::Mangal), Some(Body::Mars));
        assert_eq!(graha_to_body(Graha::Buddh), Some(Body::Mercury));
        assert_eq!(graha_to_body(Graha::Guru), Some(Body::Jupiter));
        assert_eq!(graha_to_body(Graha::Shukra), Some(Body::Venus));
        assert_eq!(graha_to_body(Graha::Shani), Some(Body::Saturn));
        assert_eq!(graha_to_body(Graha::Rahu), None);
        assert_eq!(graha_to_body(Graha::Ketu), None);
    }

    #[test]
    fn backwards_motion_is_retrograde() {
        let p = Linear {
            lon: 100.0,
            rate: -0.5,
        };
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let s = graha_states(&p, 2_451_545.0, &loc, &GrahaPositionsConfig::default()).unwrap();
        let mars = s.get(Graha::Mangal);
        assert!(mars.retrograde);
        assert!((mars.speed_deg_per_day + 0.5).abs() < 0.01);
        assert_eq!(mars.latitude_deg, 1.0);
    }

    #[test]
    fn motion_across_zero_is_direct() {
        // 359.8 → 0.2 wraps, still direct
        let aya = LinearAyanamsha::default().at(2_451_545.0);
        let p = Linear {
            lon: normalize_360(359.8 + aya),
            rate: 0.4,
        };
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let s = graha_states(&p, 2_451_545.0, &loc, &GrahaPositionsConfig::default()).unwrap();
        assert!(!s.get(Graha::Surya).retrograde);
        assert!((s.get(Graha::Surya).speed_deg_per_day - 0.4).abs() < 0.01);
    }

    #[test]
    fn nodes_opposed_and_retrograde() {
        let loc = GeoLocation::new(28.6, 77.2, 0.0);
        let s = graha_states(
            &AnalyticEphemeris::new(),
            2_433_307.7,
            &loc,
            &GrahaPositionsConfig::default(),
        )
        .unwrap();
        let rahu = s.get(Graha::Rahu);
        let ketu = s.get(Graha::Ketu);
        let sep = normalize_180(ketu.sidereal_longitude - rahu.sidereal_longitude).abs();
        assert!((sep - 180.0).abs() < 1e-9);
        assert!(rahu.retrograde && ketu.retrograde);
        assert_eq!(rahu.speed_deg_per_day, ketu.speed_deg_per_day);
    }

    #[test]
    fn ketu_follows_mean_node_formula() {
        let jd = 2_433_307.7;
        let aya = LinearAyanamsha::default();
        let loc = GeoLocation::new(28.6, 77.2, 0.0);
        let eph = AnalyticEphemeris::new();
        let expected = aya.to_sidereal(mean_ketu_deg(jd_to_centuries(jd)), jd);
        let ketu = graha_sidereal_longitude(&eph, Graha::Ketu, jd, &loc, &aya).unwrap();
        assert_eq!(ketu, expected);
        let states = graha_states(&eph, jd, &loc, &GrahaPositionsConfig::default()).unwrap();
        assert_eq!(states.get(Graha::Ketu).sidereal_longitude, expected);
    }

    #[test]
    fn longitudes_match_states() {
        let loc = GeoLocation::new(40.7, -74.0, 0.0);
        let eph = AnalyticEphemeris::new();
        let cfg = GrahaPositionsConfig::default();
        let states = graha_states(&eph, 2_447_893.2, &loc, &cfg).unwrap();
        let lons = graha_sidereal_longitudes(&eph, 2_447_893.2, &loc, &cfg.ayanamsha).unwrap();
        assert_eq!(states.longitudes(), lons);
    }

    #[test]
    fn rejects_non_positive_step() {
        let cfg = GrahaPositionsConfig {
            retrograde_step_days: 0.0,
            ..GrahaPositionsConfig::default()
        };
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        assert!(matches!(
            graha_states(&AnalyticEphemeris::new(), 2_451_545.0, &loc, &cfg),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn outer_planets_resolved() {
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let outer = outer_planet_positions(
            &AnalyticEphemeris::new(),
            2_451_545.0,
            &loc,
            &GrahaPositionsConfig::default(),
        )
        .unwrap();
        assert_eq!(outer.len(), 2);
        assert_eq!(outer[0].body, Body::Uranus);
        // Uranus ~314.8° tropical at J2000 → ~291° sidereal (Makara)
        assert_eq!(outer[0].rashi, jataka_vedic_base::Rashi::Makara);
    }
}
