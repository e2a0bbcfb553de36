//! Cartesian ↔ spherical coordinate conversion.

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees [0, 360), from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees [-90, 90], elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from the origin, in the input's length unit.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// The origin maps to all-zero coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance * cos_lat * cos_lon,
        s.distance * cos_lat * sin_lon,
        s.distance * sin_lat,
    ]
}
