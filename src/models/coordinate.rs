//! Geographic coordinate supplied by the caller

use serde::{Deserialize, Serialize};

use crate::{Result, TravelError};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, positive north
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse form values, silently using 0.0 for anything that is not a finite number
    #[must_use]
    pub fn parse_lenient(latitude: &str, longitude: &str) -> Self {
        Self::new(
            parse_degrees(latitude).unwrap_or(0.0),
            parse_degrees(longitude).unwrap_or(0.0),
        )
    }

    /// Parse and range-check values, reporting the first offending field
    pub fn parse_strict(latitude: &str, longitude: &str) -> Result<Self> {
        let lat = parse_degrees(latitude)
            .ok_or_else(|| TravelError::validation(format!("lat '{latitude}' is not a number")))?;
        let lon = parse_degrees(longitude)
            .ok_or_else(|| TravelError::validation(format!("lon '{longitude}' is not a number")))?;
        let coordinate = Self::new(lat, lon);
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check the WGS84 ranges
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TravelError::validation(format!(
                "lat {} must be between -90 and 90",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TravelError::validation(format!(
                "lon {} must be between -180 and 180",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Coordinates rounded to two decimals, as shown to users
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self::new(round2(self.latitude), round2(self.longitude))
    }

    #[must_use]
    pub fn is_northern(&self) -> bool {
        self.latitude > 0.0
    }
}

fn parse_degrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("48.8566", "2.3522", 48.8566, 2.3522)]
    #[case(" -33.86 ", "151.2", -33.86, 151.2)]
    #[case("abc", "2.0", 0.0, 2.0)]
    #[case("", "", 0.0, 0.0)]
    #[case("NaN", "inf", 0.0, 0.0)]
    fn test_parse_lenient(
        #[case] lat: &str,
        #[case] lon: &str,
        #[case] expected_lat: f64,
        #[case] expected_lon: f64,
    ) {
        let coordinate = Coordinate::parse_lenient(lat, lon);
        assert_eq!(coordinate.latitude, expected_lat);
        assert_eq!(coordinate.longitude, expected_lon);
    }

    #[test]
    fn test_parse_strict_rejects_out_of_range() {
        let err = Coordinate::parse_strict("91", "0").unwrap_err();
        assert!(err.to_string().contains("between -90 and 90"));

        let err = Coordinate::parse_strict("0", "-200").unwrap_err();
        assert!(err.to_string().contains("between -180 and 180"));

        let err = Coordinate::parse_strict("north", "0").unwrap_err();
        assert!(matches!(err, TravelError::Validation { .. }));
    }

    #[test]
    fn test_rounded_coordinates() {
        let coordinate = Coordinate::new(46.818_234, 8.227_456).rounded();
        assert_eq!(coordinate.latitude, 46.82);
        assert_eq!(coordinate.longitude, 8.23);
    }

    #[test]
    fn test_equator_is_not_northern() {
        assert!(!Coordinate::new(0.0, 10.0).is_northern());
        assert!(Coordinate::new(0.01, 10.0).is_northern());
    }
}
