use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoordinatesError;

/// Loveland, CO.
pub const DEFAULT_LATITUDE: f64 = 40.386642;
pub const DEFAULT_LONGITUDE: f64 = -105.084520;

pub const NO_DATA_MESSAGE: &str = "Weather unavailable for this date.";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validated constructor used by the coordinates override.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinatesError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinatesError::Longitude(longitude));
        }

        Ok(Self { latitude, longitude })
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self { latitude: DEFAULT_LATITUDE, longitude: DEFAULT_LONGITUDE }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"`.
impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.split_once(',').ok_or_else(|| CoordinatesError::Format(s.to_string()))?;

        let latitude: f64 =
            lat.trim().parse().map_err(|_| CoordinatesError::Format(s.to_string()))?;
        let longitude: f64 =
            lon.trim().parse().map_err(|_| CoordinatesError::Format(s.to_string()))?;

        Self::new(latitude, longitude)
    }
}

/// One day of aggregated weather as reported by the archive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySummary {
    pub code: i32,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub precipitation_mm: f64,
    pub snowfall_mm: f64,
    pub wind_speed_kmh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    Ok,
    NoData,
    TransportError,
}

/// Normalized outcome of a single-day fetch.
///
/// Failures are values, not errors: the numeric fields only exist on the `Ok`
/// variant, so nothing downstream can display measurements for a failed day.
#[derive(Debug, Clone, PartialEq)]
pub enum DayWeather {
    Ok(DailySummary),
    NoData { message: String },
    TransportError { message: String },
}

impl DayWeather {
    pub fn no_data() -> Self {
        DayWeather::NoData { message: NO_DATA_MESSAGE.to_string() }
    }

    pub fn transport_error(message: impl Into<String>) -> Self {
        DayWeather::TransportError { message: message.into() }
    }

    pub fn status(&self) -> FetchStatus {
        match self {
            DayWeather::Ok(_) => FetchStatus::Ok,
            DayWeather::NoData { .. } => FetchStatus::NoData,
            DayWeather::TransportError { .. } => FetchStatus::TransportError,
        }
    }

    /// Populated only when the status is not `Ok`.
    pub fn message(&self) -> Option<&str> {
        match self {
            DayWeather::Ok(_) => None,
            DayWeather::NoData { message } | DayWeather::TransportError { message } => {
                Some(message)
            }
        }
    }

    pub fn summary(&self) -> Option<&DailySummary> {
        match self {
            DayWeather::Ok(summary) => Some(summary),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_coordinates_are_loveland() {
        let c = Coordinates::default();
        assert_eq!(c.latitude, 40.386642);
        assert_eq!(c.longitude, -105.084520);
        assert_eq!(c.to_string(), "40.386642, -105.084520");
    }

    #[test]
    fn coordinates_out_of_range_are_rejected() {
        assert!(matches!(Coordinates::new(91.0, 0.0), Err(CoordinatesError::Latitude(_))));
        assert!(matches!(Coordinates::new(0.0, -180.5), Err(CoordinatesError::Longitude(_))));
        assert!(matches!(Coordinates::new(f64::NAN, 0.0), Err(CoordinatesError::Latitude(_))));
        assert!(Coordinates::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn coordinates_parse_from_pair() {
        let c: Coordinates = " 51.5 , -0.12 ".parse().expect("valid pair");
        assert_eq!(c, Coordinates { latitude: 51.5, longitude: -0.12 });

        let err = "51.5".parse::<Coordinates>().unwrap_err();
        assert!(err.to_string().contains("latitude,longitude"));

        assert!("abc,1".parse::<Coordinates>().is_err());
    }

    #[test]
    fn message_and_summary_follow_status() {
        let ok = DayWeather::Ok(DailySummary::default());
        assert_eq!(ok.status(), FetchStatus::Ok);
        assert!(ok.message().is_none());
        assert!(ok.summary().is_some());

        let none = DayWeather::no_data();
        assert_eq!(none.status(), FetchStatus::NoData);
        assert_eq!(none.message(), Some(NO_DATA_MESSAGE));
        assert!(none.summary().is_none());

        let err = DayWeather::transport_error("API Error: boom");
        assert_eq!(err.status(), FetchStatus::TransportError);
        assert_eq!(err.message(), Some("API Error: boom"));
    }
}
