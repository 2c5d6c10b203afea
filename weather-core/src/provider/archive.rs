use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    Config,
    model::{Coordinates, DailySummary, DayWeather},
    provider::{ARCHIVE_URL, request_url},
};

use super::WeatherSource;

/// Client for the Open-Meteo ERA5 archive.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    base_url: String,
    http: Client,
}

impl ArchiveClient {
    pub fn new() -> Self {
        Self::with_base_url(ARCHIVE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    /// Uses the configured archive URL and transport timeout, if any.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { base_url: config.archive_url().to_string(), http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, date: NaiveDate, coordinates: Coordinates) -> Result<DayWeather> {
        let url = request_url(&self.base_url, date, coordinates)?;
        debug!("ERA5 archive request: {url}");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to send request to the ERA5 archive")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read ERA5 archive response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "ERA5 archive request failed with status {}: {}",
                status,
                error_reason(&body),
            ));
        }

        parse_daily(&body)
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for ArchiveClient {
    async fn fetch_day(&self, date: NaiveDate, coordinates: Coordinates) -> DayWeather {
        match self.fetch(date, coordinates).await {
            Ok(day) => day,
            Err(err) => {
                warn!("ERA5 archive fetch for {date} failed: {err:#}");
                DayWeather::transport_error(format!("API Error: {err:#}"))
            }
        }
    }
}

/// Arrays are `None` when the member is absent; elements are `None` when `null`.
#[derive(Debug, Deserialize)]
struct ArchiveDaily {
    weather_code: Option<Vec<Option<f64>>>,
    temperature_2m_max: Option<Vec<Option<f64>>>,
    temperature_2m_min: Option<Vec<Option<f64>>>,
    precipitation_sum: Option<Vec<Option<f64>>>,
    snowfall_sum: Option<Vec<Option<f64>>>,
    wind_speed_10m_max: Option<Vec<Option<f64>>>,
}

impl ArchiveDaily {
    fn columns(&self) -> [&Option<Vec<Option<f64>>>; 6] {
        [
            &self.weather_code,
            &self.temperature_2m_max,
            &self.temperature_2m_min,
            &self.precipitation_sum,
            &self.snowfall_sum,
            &self.wind_speed_10m_max,
        ]
    }

    fn any_empty(&self) -> bool {
        self.columns().iter().any(|col| matches!(col, Some(values) if values.is_empty()))
    }
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<ArchiveDaily>,
}

#[derive(Debug, Deserialize)]
struct ArchiveErrorBody {
    reason: String,
}

/// Decode a successful archive body into a day of weather.
///
/// The request window is one day, so each array holds at most one element and
/// index 0 is the selected date. An empty array means the archive has nothing
/// for that date; an absent array or a `null` element reads as zero.
pub fn parse_daily(body: &str) -> Result<DayWeather> {
    let parsed: ArchiveResponse =
        serde_json::from_str(body).context("Failed to parse ERA5 archive JSON")?;

    let daily =
        parsed.daily.ok_or_else(|| anyhow!("ERA5 archive response contained no daily data"))?;

    if daily.any_empty() {
        return Ok(DayWeather::no_data());
    }

    Ok(DayWeather::Ok(DailySummary {
        code: first(&daily.weather_code) as i32,
        max_temp_c: first(&daily.temperature_2m_max),
        min_temp_c: first(&daily.temperature_2m_min),
        precipitation_mm: first(&daily.precipitation_sum),
        snowfall_mm: first(&daily.snowfall_sum),
        wind_speed_kmh: first(&daily.wind_speed_10m_max),
    }))
}

fn first(column: &Option<Vec<Option<f64>>>) -> f64 {
    column.as_ref().and_then(|values| values.first().copied().flatten()).unwrap_or(0.0)
}

fn error_reason(body: &str) -> String {
    serde_json::from_str::<ArchiveErrorBody>(body)
        .map(|e| e.reason)
        .unwrap_or_else(|_| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
