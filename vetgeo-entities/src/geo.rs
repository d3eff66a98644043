use std::{fmt, num::ParseFloatError};
use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Error)]
pub enum MapPointError {
    #[error("Invalid latitude degrees: {0}")]
    LatitudeOutOfRange(f64),
    #[error("Invalid longitude degrees: {0}")]
    LongitudeOutOfRange(f64),
    #[error("Invalid latitude '{input}': {source}")]
    LatitudeSyntax {
        input: String,
        source: ParseFloatError,
    },
    #[error("Invalid longitude '{input}': {source}")]
    LongitudeSyntax {
        input: String,
        source: ParseFloatError,
    },
}

/// A geographical position in WGS84 degrees.
///
/// The degrees are stored exactly as they were received so that
/// coordinates read from a file are written back without any loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

fn is_valid_lat_deg(deg: f64) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

impl MapPoint {
    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, MapPointError> {
        let lat = lat.into();
        let lng = lng.into();
        // NaN is rejected by the range checks
        if !is_valid_lat_deg(lat) {
            return Err(MapPointError::LatitudeOutOfRange(lat));
        }
        if !is_valid_lng_deg(lng) {
            return Err(MapPointError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Create a position without range checks.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Combine two optional coordinates into a position.
    ///
    /// Returns `None` unless both values are present,
    /// i.e. a partial pair never yields a position.
    /// Previously stored values are taken as they are.
    pub fn from_optional_lat_lng(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Self::from_lat_lng_deg(lat, lng)),
            _ => None,
        }
    }

    pub fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|source| MapPointError::LatitudeSyntax {
                input: lat_deg_str.to_owned(),
                source,
            })?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|source| MapPointError::LongitudeSyntax {
                input: lng_deg_str.to_owned(),
                source,
            })?;
        Self::try_from_lat_lng_deg(lat, lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
