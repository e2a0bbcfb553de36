//! Birth input record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use jataka_core::GeoLocation;
use jataka_time::{MAX_UTC_OFFSET_HOURS, local_to_utc, parse_clock_time};

use crate::error::SearchError;

/// Local birth date/time and place.
///
/// `time` is the wall-clock reading at the birthplace (`HH:MM`), and
/// `utc_offset_hours` the offset in force there, fractional allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    pub utc_offset_hours: f64,
}

impl BirthDetails {
    /// Reject malformed or out-of-range fields.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.latitude.is_finite() || self.latitude.abs() >= 90.0 {
            return Err(SearchError::InvalidInput(format!(
                "latitude {} outside (-90, 90)",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(SearchError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(SearchError::InvalidInput(format!(
                "UTC offset {} outside [-14, 14]",
                self.utc_offset_hours
            )));
        }
        parse_clock_time(&self.time)?;
        Ok(())
    }

    /// The birth instant in UTC.
    pub fn utc_instant(&self) -> Result<DateTime<Utc>, SearchError> {
        self.validate()?;
        let time = parse_clock_time(&self.time)?;
        Ok(local_to_utc(self.date, time, self.utc_offset_hours)?)
    }

    /// Observer location at sea level.
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn delhi() -> BirthDetails {
        BirthDetails {
            name: "Delhi".into(),
            date: NaiveDate::from_ymd_opt(1950, 1, 26).unwrap(),
            time: "10:18".into(),
            latitude: 28.6139,
            longitude: 77.2090,
            utc_offset_hours: 5.5,
        }
    }

    #[test]
    fn utc_instant_subtracts_offset() {
        let utc = delhi().utc_instant().unwrap();
        assert_eq!((utc.hour(), utc.minute()), (4, 48));
    }

    #[test]
    fn rejects_bad_fields() {
        let mut b = delhi();
        b.latitude = 90.0;
        assert!(matches!(b.validate(), Err(SearchError::InvalidInput(_))));

        let mut b = delhi();
        b.longitude = f64::NAN;
        assert!(b.validate().is_err());

        let mut b = delhi();
        b.utc_offset_hours = -14.5;
        assert!(b.validate().is_err());

        let mut b = delhi();
        b.time = "25:00".into();
        assert!(b.utc_instant().is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{"name":"x","date":"1990-01-01","time":"12:00",
            "latitude":40.7128,"longitude":-74.006,"utc_offset_hours":-5.0}"#;
        let b: BirthDetails = serde_json::from_str(json).unwrap();
        assert_eq!(b.date, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert!(b.validate().is_ok());
    }
}
