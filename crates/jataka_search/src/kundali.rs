//! Chart assembly: ascendant, D1 with whole-sign houses, D9.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jataka_core::{GeoLocation, PositionProvider};
use jataka_time::datetime_to_jd_utc;
use jataka_vedic_base::{
    ALL_GRAHAS, Amsha, LinearAyanamsha, amsha_position, lagna_and_mc_deg,
    nakshatra_from_longitude, porphyry_cusps, rashi_from_longitude, whole_sign_bhavas,
    whole_sign_house,
};

use crate::birth::BirthDetails;
use crate::error::SearchError;
use crate::jyotish::graha_states;
use crate::jyotish_types::{
    Ascendant, D1Chart, D9Chart, GrahaPositionsConfig, GrahaStates, PlanetPosition, VargaPosition,
};

/// Birth instant with both charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kundali {
    pub utc: DateTime<Utc>,
    pub jd_utc: f64,
    pub d1: D1Chart,
    pub d9: D9Chart,
}

fn ascendant_from_longitude(sidereal_lon: f64) -> Ascendant {
    let rashi = rashi_from_longitude(sidereal_lon);
    let nak = nakshatra_from_longitude(sidereal_lon);
    Ascendant {
        sidereal_longitude: sidereal_lon,
        rashi: rashi.rashi,
        degrees_in_rashi: rashi.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
    }
}

/// Sidereal ascendant and midheaven (degrees) at a UTC Julian Date.
pub fn ascendant_at(
    provider: &dyn PositionProvider,
    jd_utc: f64,
    location: &GeoLocation,
    ayanamsha: &LinearAyanamsha,
) -> Result<(Ascendant, f64), SearchError> {
    let angles = lagna_and_mc_deg(
        jd_utc,
        provider.sidereal_time_deg(jd_utc),
        location.latitude_deg,
        location.longitude_deg,
    )?;
    let asc = ayanamsha.to_sidereal(angles.lagna_deg, jd_utc);
    let mc = ayanamsha.to_sidereal(angles.mc_deg, jd_utc);
    log::debug!(
        "lagna {asc:.4}° mc {mc:.4}° (lst {:.4}°, obliquity {:.5}°)",
        angles.lst_deg,
        angles.obliquity_deg
    );
    Ok((ascendant_from_longitude(asc), mc))
}

/// Place resolved grahas into a whole-sign D1 chart.
pub fn assemble_d1(ascendant: Ascendant, midheaven: f64, states: &GrahaStates) -> D1Chart {
    let lagna_idx = ascendant.rashi.index();
    let planets = ALL_GRAHAS
        .iter()
        .map(|&graha| {
            let s = states.get(graha);
            let rashi = rashi_from_longitude(s.sidereal_longitude);
            let nak = nakshatra_from_longitude(s.sidereal_longitude);
            PlanetPosition {
                graha,
                name: graha.name(),
                english_name: graha.english_name(),
                sidereal_longitude: s.sidereal_longitude,
                latitude_deg: s.latitude_deg,
                distance_au: s.distance_au,
                speed_deg_per_day: s.speed_deg_per_day,
                rashi: rashi.rashi,
                degrees_in_rashi: rashi.degrees_in_rashi,
                house: whole_sign_house(rashi.rashi_index, lagna_idx),
                retrograde: s.retrograde,
                nakshatra: nak.nakshatra,
                nakshatra_lord: nak.lord,
                pada: nak.pada,
            }
        })
        .collect();

    let cusps = porphyry_cusps(ascendant.sidereal_longitude, midheaven);
    D1Chart {
        ascendant,
        midheaven,
        ayanamsha_deg: states.ayanamsha_deg,
        planets,
        houses: whole_sign_bhavas(lagna_idx, &cusps).to_vec(),
    }
}

/// Resolve and assemble the D1 chart at a UTC Julian Date.
pub fn d1_chart(
    provider: &dyn PositionProvider,
    jd_utc: f64,
    location: &GeoLocation,
    config: &GrahaPositionsConfig,
) -> Result<D1Chart, SearchError> {
    let (ascendant, mc) = ascendant_at(provider, jd_utc, location, &config.ayanamsha)?;
    let states = graha_states(provider, jd_utc, location, config)?;
    Ok(assemble_d1(ascendant, mc, &states))
}

/// Navamsa chart derived from a D1 chart.
pub fn d9_chart(d1: &D1Chart) -> D9Chart {
    let asc = amsha_position(d1.ascendant.sidereal_longitude, Amsha::D9);
    let planets = d1
        .planets
        .iter()
        .map(|p| {
            let pos = amsha_position(p.sidereal_longitude, Amsha::D9);
            VargaPosition {
                graha: p.graha,
                rashi: pos.rashi,
                degrees_in_rashi: pos.degrees_in_rashi,
                longitude: pos.longitude,
                retrograde: p.retrograde,
            }
        })
        .collect();
    D9Chart {
        amsha: Amsha::D9,
        ascendant_rashi: asc.rashi,
        ascendant_longitude: asc.longitude,
        planets,
    }
}

/// Normalize a birth record and build both charts.
pub fn kundali_for_birth(
    birth: &BirthDetails,
    provider: &dyn PositionProvider,
    config: &GrahaPositionsConfig,
) -> Result<Kundali, SearchError> {
    let utc = birth.utc_instant()?;
    let jd_utc = datetime_to_jd_utc(&utc);
    let d1 = d1_chart(provider, jd_utc, &birth.location(), config)?;
    let d9 = d9_chart(&d1);
    Ok(Kundali { utc, jd_utc, d1, d9 })
}
