use chrono::NaiveDate;
use thiserror::Error;

/// Why a selected date cannot be fetched. Raised before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Are you a time traveler? This date hasn't happened yet!")]
    FutureDate(NaiveDate),

    #[error("Please select a date AFTER Dec 31, 1939. ERA5 begins in 1940.")]
    BeforeMinimum(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinatesError {
    #[error("Latitude {0} is out of range; expected a value between -90 and 90.")]
    Latitude(f64),

    #[error("Longitude {0} is out of range; expected a value between -180 and 180.")]
    Longitude(f64),

    #[error("Cannot parse '{0}'. Enter valid numeric latitude,longitude.")]
    Format(String),
}
