//! Low-precision analytic ephemeris.
//!
//! Keplerian mean elements with linear rates, counted in days from
//! 1999-12-31 0h (JD 2451543.5), plus the principal periodic terms for the
//! Moon and for Jupiter, Saturn and Uranus. Elements and terms follow
//! P. Schlyter, "How to compute planetary positions" (public domain).
//!
//! Output is geocentric ecliptic of date. Typical error is 1–2′ for the Sun
//! and Moon and a few arcminutes for the planets between 1800 and 2200,
//! which is far below the 3°20′ pada resolution the chart needs.
//! The observer location is accepted but no parallax is applied.

use jataka_frames::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};

use crate::{Body, EclipticPosition, EngineError, GeoLocation, PositionProvider};

/// Day zero of the element polynomials.
pub const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;

/// Earliest supported UTC Julian Date (1800-01-01).
pub const MIN_JD: f64 = 2_378_496.5;

/// Latest supported UTC Julian Date (2200-01-01).
pub const MAX_JD: f64 = 2_524_593.5;

/// Earth equatorial radius in AU (Moon distances are computed in Earth radii).
const EARTH_RADIUS_AU: f64 = 6_378.14 / 149_597_870.7;

/// `(value at day 0, rate per day)` for each Keplerian element.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    node: (f64, f64),
    inclination: (f64, f64),
    perihelion: (f64, f64),
    semi_major: (f64, f64),
    eccentricity: (f64, f64),
    mean_anomaly: (f64, f64),
}

/// Elements evaluated at a given day.
#[derive(Debug, Clone, Copy)]
struct Elements {
    node: f64,
    inclination: f64,
    perihelion: f64,
    semi_major: f64,
    eccentricity: f64,
    mean_anomaly: f64,
}

impl OrbitalElements {
    fn at(&self, d: f64) -> Elements {
        let lin = |(v0, v1): (f64, f64)| v0 + v1 * d;
        Elements {
            node: lin(self.node).rem_euclid(360.0),
            inclination: lin(self.inclination),
            perihelion: lin(self.perihelion).rem_euclid(360.0),
            semi_major: lin(self.semi_major),
            eccentricity: lin(self.eccentricity),
            mean_anomaly: lin(self.mean_anomaly).rem_euclid(360.0),
        }
    }
}

#[rustfmt::skip]
const SUN: OrbitalElements = OrbitalElements {
    node: (0.0, 0.0),
    inclination: (0.0, 0.0),
    perihelion: (282.9404, 4.70935e-5),
    semi_major: (1.0, 0.0),
    eccentricity: (0.016709, -1.151e-9),
    mean_anomaly: (356.0470, 0.985_600_258_5),
};

/// Semi-major axis in Earth radii.
#[rustfmt::skip]
const MOON: OrbitalElements = OrbitalElements {
    node: (125.1228, -0.052_953_808_3),
    inclination: (5.1454, 0.0),
    perihelion: (318.0634, 0.164_357_322_3),
    semi_major: (60.2666, 0.0),
    eccentricity: (0.054900, 0.0),
    mean_anomaly: (115.3654, 13.064_992_950_9),
};

#[rustfmt::skip]
const MERCURY: OrbitalElements = OrbitalElements {
    node: (48.3313, 3.24587e-5),
    inclination: (7.0047, 5.00e-8),
    perihelion: (29.1241, 1.01444e-5),
    semi_major: (0.387098, 0.0),
    eccentricity: (0.205635, 5.59e-10),
    mean_anomaly: (168.6562, 4.092_334_436_8),
};

#[rustfmt::skip]
const VENUS: OrbitalElements = OrbitalElements {
    node: (76.6799, 2.46590e-5),
    inclination: (3.3946, 2.75e-8),
    perihelion: (54.8910, 1.38374e-5),
    semi_major: (0.723330, 0.0),
    eccentricity: (0.006773, -1.302e-9),
    mean_anomaly: (48.0052, 1.602_130_224_4),
};

#[rustfmt::skip]
const MARS: OrbitalElements = OrbitalElements {
    node: (49.5574, 2.11081e-5),
    inclination: (1.8497, -1.78e-8),
    perihelion: (286.5016, 2.92961e-5),
    semi_major: (1.523688, 0.0),
    eccentricity: (0.093405, 2.516e-9),
    mean_anomaly: (18.6021, 0.524_020_776_6),
};

#[rustfmt::skip]
const JUPITER: OrbitalElements = OrbitalElements {
    node: (100.4542, 2.76854e-5),
    inclination: (1.3030, -1.557e-7),
    perihelion: (273.8777, 1.64505e-5),
    semi_major: (5.20256, 0.0),
    eccentricity: (0.048498, 4.469e-9),
    mean_anomaly: (19.8950, 0.083_085_300_1),
};

#[rustfmt::skip]
const SATURN: OrbitalElements = OrbitalElements {
    node: (113.6634, 2.38980e-5),
    inclination: (2.4886, -1.081e-7),
    perihelion: (339.3939, 2.97661e-5),
    semi_major: (9.55475, 0.0),
    eccentricity: (0.055546, -9.499e-9),
    mean_anomaly: (316.9670, 0.033_444_228_2),
};

#[rustfmt::skip]
const URANUS: OrbitalElements = OrbitalElements {
    node: (74.0005, 1.3978e-5),
    inclination: (0.7733, 1.9e-8),
    perihelion: (96.6612, 3.0565e-5),
    semi_major: (19.18171, -1.55e-8),
    eccentricity: (0.047318, 7.45e-9),
    mean_anomaly: (142.5905, 0.011_725_806),
};

#[rustfmt::skip]
const NEPTUNE: OrbitalElements = OrbitalElements {
    node: (131.7806, 3.0173e-5),
    inclination: (1.7700, -2.55e-7),
    perihelion: (272.8461, -6.027e-6),
    semi_major: (30.05826, 3.313e-8),
    eccentricity: (0.008606, 2.15e-9),
    mean_anomaly: (260.2471, 0.005_995_147),
};

fn sin_d(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cos_d(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Solve Kepler's equation `M = E − e·sin E` for E (degrees).
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.to_radians();
    let mut ea = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..30 {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea.to_degrees()
}

/// Heliocentric (geocentric for the Moon) ecliptic `[x, y, z]` from elements.
fn orbit_position(el: &Elements) -> [f64; 3] {
    let e = el.eccentricity;
    let ea = eccentric_anomaly(el.mean_anomaly, e);
    let xv = el.semi_major * (cos_d(ea) - e);
    let yv = el.semi_major * (1.0 - e * e).sqrt() * sin_d(ea);
    let v = yv.atan2(xv).to_degrees();
    let r = xv.hypot(yv);

    let u = v + el.perihelion;
    let (sn, cn) = (sin_d(el.node), cos_d(el.node));
    let (su, cu) = (sin_d(u), cos_d(u));
    let ci = cos_d(el.inclination);
    [
        r * (cn * cu - sn * su * ci),
        r * (sn * cu + cn * su * ci),
        r * su * sin_d(el.inclination),
    ]
}

/// Bundled analytic [`PositionProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric Sun: `(longitude, distance_au, mean_anomaly, perihelion)`.
    fn sun(d: f64) -> (f64, f64, f64, f64) {
        let el = SUN.at(d);
        let e = el.eccentricity;
        let ea = eccentric_anomaly(el.mean_anomaly, e);
        let xv = cos_d(ea) - e;
        let yv = (1.0 - e * e).sqrt() * sin_d(ea);
        let v = yv.atan2(xv).to_degrees();
        let r = xv.hypot(yv);
        (
            (v + el.perihelion).rem_euclid(360.0),
            r,
            el.mean_anomaly,
            el.perihelion,
        )
    }

    fn moon(d: f64) -> EclipticPosition {
        let el = MOON.at(d);
        let geo = cartesian_to_spherical(&orbit_position(&el));
        let (_, _, ms, ws) = Self::sun(d);

        let mm = el.mean_anomaly;
        let ls = ms + ws;
        let lm = mm + el.perihelion + el.node;
        let dd = lm - ls;
        let f = lm - el.node;

        let dlon = -1.274 * sin_d(mm - 2.0 * dd) + 0.658 * sin_d(2.0 * dd)
            - 0.186 * sin_d(ms)
            - 0.059 * sin_d(2.0 * mm - 2.0 * dd)
            - 0.057 * sin_d(mm - 2.0 * dd + ms)
            + 0.053 * sin_d(mm + 2.0 * dd)
            + 0.046 * sin_d(2.0 * dd - ms)
            + 0.041 * sin_d(mm - ms)
            - 0.035 * sin_d(dd)
            - 0.031 * sin_d(mm + ms)
            - 0.015 * sin_d(2.0 * f - 2.0 * dd)
            + 0.011 * sin_d(mm - 4.0 * dd);
        let dlat = -0.173 * sin_d(f - 2.0 * dd)
            - 0.055 * sin_d(mm - f - 2.0 * dd)
            - 0.046 * sin_d(mm + f - 2.0 * dd)
            + 0.033 * sin_d(f + 2.0 * dd)
            + 0.017 * sin_d(2.0 * mm + f);
        let dr = -0.58 * cos_d(mm - 2.0 * dd) - 0.46 * cos_d(2.0 * dd);

        EclipticPosition {
            longitude_deg: (geo.lon_deg + dlon).rem_euclid(360.0),
            latitude_deg: geo.lat_deg + dlat,
            distance_au: (geo.distance + dr) * EARTH_RADIUS_AU,
        }
    }

    fn planet(body: Body, d: f64) -> Result<EclipticPosition, EngineError> {
        let elements = match body {
            Body::Mercury => MERCURY,
            Body::Venus => VENUS,
            Body::Mars => MARS,
            Body::Jupiter => JUPITER,
            Body::Saturn => SATURN,
            Body::Uranus => URANUS,
            Body::Neptune => NEPTUNE,
            Body::Sun | Body::Moon => return Err(EngineError::UnsupportedBody(body)),
        };
        let mut helio = cartesian_to_spherical(&orbit_position(&elements.at(d)));

        let mj = JUPITER.at(d).mean_anomaly;
        let msa = SATURN.at(d).mean_anomaly;
        match body {
            Body::Jupiter => {
                helio.lon_deg += -0.332 * sin_d(2.0 * mj - 5.0 * msa - 67.6)
                    - 0.056 * sin_d(2.0 * mj - 2.0 * msa + 21.0)
                    + 0.042 * sin_d(3.0 * mj - 5.0 * msa + 21.0)
                    - 0.036 * sin_d(mj - 2.0 * msa)
                    + 0.022 * cos_d(mj - msa)
                    + 0.023 * sin_d(2.0 * mj - 3.0 * msa + 52.0)
                    - 0.016 * sin_d(mj - 5.0 * msa - 69.0);
            }
            Body::Saturn => {
                helio.lon_deg += 0.812 * sin_d(2.0 * mj - 5.0 * msa - 67.6)
                    - 0.229 * cos_d(2.0 * mj - 4.0 * msa - 2.0)
                    + 0.119 * sin_d(mj - 2.0 * msa - 3.0)
                    + 0.046 * sin_d(2.0 * mj - 6.0 * msa - 69.0)
                    + 0.014 * sin_d(mj - 3.0 * msa + 32.0);
                helio.lat_deg += -0.020 * cos_d(2.0 * mj - 4.0 * msa - 2.0)
                    + 0.018 * sin_d(2.0 * mj - 6.0 * msa - 49.0);
            }
            Body::Uranus => {
                let mu = URANUS.at(d).mean_anomaly;
                helio.lon_deg += 0.040 * sin_d(msa - 2.0 * mu + 6.0)
                    + 0.035 * sin_d(msa - 3.0 * mu + 33.0)
                    - 0.015 * sin_d(mj - mu + 20.0);
            }
            _ => {}
        }

        let [x, y, z] = spherical_to_cartesian(&helio);
        let (ls, rs, _, _) = Self::sun(d);
        let sun_xyz = spherical_to_cartesian(&SphericalCoords {
            lon_deg: ls,
            lat_deg: 0.0,
            distance: rs,
        });
        let geo = cartesian_to_spherical(&[x + sun_xyz[0], y + sun_xyz[1], z + sun_xyz[2]]);
        Ok(EclipticPosition {
            longitude_deg: geo.lon_deg,
            latitude_deg: geo.lat_deg,
            distance_au: geo.distance,
        })
    }
}

impl PositionProvider for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn ecliptic_position(
        &self,
        body: Body,
        jd_utc: f64,
        _observer: &GeoLocation,
    ) -> Result<EclipticPosition, EngineError> {
        if !jd_utc.is_finite() {
            return Err(EngineError::InvalidQuery("epoch must be finite"));
        }
        if !(MIN_JD..=MAX_JD).contains(&jd_utc) {
            return Err(EngineError::EpochOutOfRange { jd_utc });
        }
        let d = jd_utc - ELEMENT_EPOCH_JD;
        let pos = match body {
            Body::Sun => {
                let (lon, r, _, _) = Self::sun(d);
                EclipticPosition {
                    longitude_deg: lon,
                    latitude_deg: 0.0,
                    distance_au: r,
                }
            }
            Body::Moon => Self::moon(d),
            _ => Self::planet(body, d)?,
        };
        log::trace!(
            "{} at JD {jd_utc:.6}: lon {:.4} lat {:.4}",
            body.name(),
            pos.longitude_deg,
            pos.latitude_deg
        );
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000: f64 = 2_451_545.0;

    fn lon(body: Body, jd: f64) -> f64 {
        AnalyticEphemeris
            .ecliptic_position(body, jd, &GeoLocation::new(0.0, 0.0, 0.0))
            .unwrap()
            .longitude_deg
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((eccentric_anomaly(123.0, 0.0) - 123.0).abs() < 1e-9);
    }

    #[test]
    fn kepler_satisfies_equation() {
        let e = 0.2056;
        let ea = eccentric_anomaly(40.0, e).to_radians();
        let m = ea - e * ea.sin();
        assert!((m.to_degrees() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn sun_at_j2000() {
        let l = lon(Body::Sun, J2000);
        assert!((l - 280.38).abs() < 0.05, "Sun = {l}");
    }

    #[test]
    fn moon_at_j2000() {
        let l = lon(Body::Moon, J2000);
        assert!((l - 223.35).abs() < 0.3, "Moon = {l}");
    }

    #[test]
    fn moon_distance_is_about_sixty_earth_radii() {
        let p = AnalyticEphemeris
            .ecliptic_position(Body::Moon, J2000, &GeoLocation::new(0.0, 0.0, 0.0))
            .unwrap();
        let er = p.distance_au / EARTH_RADIUS_AU;
        assert!((55.0..65.0).contains(&er), "Moon distance = {er} Earth radii");
    }

    #[test]
    fn out_of_range_epoch() {
        let r = AnalyticEphemeris.ecliptic_position(
            Body::Mars,
            MAX_JD + 1.0,
            &GeoLocation::new(0.0, 0.0, 0.0),
        );
        assert!(matches!(r, Err(EngineError::EpochOutOfRange { .. })));
    }

    #[test]
    fn nan_epoch() {
        let r = AnalyticEphemeris.ecliptic_position(
            Body::Sun,
            f64::NAN,
            &GeoLocation::new(0.0, 0.0, 0.0),
        );
        assert_eq!(r, Err(EngineError::InvalidQuery("epoch must be finite")));
    }
}
