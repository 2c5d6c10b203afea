use crate::{Config, Coordinates, DayWeather, provider::archive::ArchiveClient};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Url;
use std::fmt::Debug;

pub mod archive;

pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/era5";

/// Daily aggregates requested from the archive, in request order.
pub const DAILY_FIELDS: [&str; 6] = [
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "snowfall_sum",
    "wind_speed_10m_max",
];

/// Source of one day of historical weather.
///
/// Implementations never fail: every transport or decoding problem is
/// reported through [`DayWeather::TransportError`].
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_day(&self, date: NaiveDate, coordinates: Coordinates) -> DayWeather;
}

/// Build the single-day request URL (`start_date == end_date == date`).
pub fn request_url(base: &str, date: NaiveDate, coordinates: Coordinates) -> anyhow::Result<Url> {
    let day = date.format(crate::date::DATE_FORMAT).to_string();
    let latitude = format!("{:.6}", coordinates.latitude);
    let longitude = format!("{:.6}", coordinates.longitude);
    let daily = DAILY_FIELDS.join(",");

    Url::parse_with_params(
        base,
        &[
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("start_date", day.as_str()),
            ("end_date", day.as_str()),
            ("daily", daily.as_str()),
            ("timezone", "auto"),
        ],
    )
    .with_context(|| format!("Invalid archive URL '{base}'"))
}

/// Construct the archive-backed source described by config.
pub fn source_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherSource>> {
    Ok(Box::new(ArchiveClient::from_config(config)?))
}
