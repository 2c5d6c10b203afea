//! WMO weather interpretation codes as used by the Open-Meteo archive.
//!
//! [`describe`] gives the short label shown to the user and [`categorize`]
//! picks the coarse [`WeatherCategory`] a renderer draws. Both tables cover the
//! same set of codes: a code is `Unknown` in one exactly when it is `Unknown`
//! in the other.

use std::{fmt, str::FromStr};

use anyhow::anyhow;

pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    Sun,
    Cloud,
    Rain,
    Snow,
    Storm,
    Unknown,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Sun => "sun",
            WeatherCategory::Cloud => "cloud",
            WeatherCategory::Rain => "rain",
            WeatherCategory::Snow => "snow",
            WeatherCategory::Storm => "storm",
            WeatherCategory::Unknown => "unknown",
        }
    }

    pub const fn all() -> &'static [WeatherCategory] {
        &[
            WeatherCategory::Sun,
            WeatherCategory::Cloud,
            WeatherCategory::Rain,
            WeatherCategory::Snow,
            WeatherCategory::Storm,
            WeatherCategory::Unknown,
        ]
    }

    /// A representative code, used when forcing a category from the preview tool.
    pub fn sample_code(&self) -> i32 {
        match self {
            WeatherCategory::Sun => 0,
            WeatherCategory::Cloud => 3,
            WeatherCategory::Rain => 61,
            WeatherCategory::Snow => 75,
            WeatherCategory::Storm => 95,
            WeatherCategory::Unknown => -1,
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();

        WeatherCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                anyhow!("Unknown category '{s}'. Supported: sun, cloud, rain, snow, storm, unknown.")
            })
    }
}

pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",

        45 | 48 => "Fog",

        51..=55 => "Drizzle",
        56 | 57 | 66 | 67 => "Freezing Rain / Ice",
        58..=65 => "Rain",
        80..=82 => "Rain Showers",

        71..=77 => "Snow",
        85 | 86 => "Snow Showers",

        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm w/ Hail",

        _ => UNKNOWN_DESCRIPTION,
    }
}

pub fn categorize(code: i32) -> WeatherCategory {
    match code {
        0..=2 => WeatherCategory::Sun,
        3 | 45 | 48 => WeatherCategory::Cloud,
        51..=67 | 80..=82 => WeatherCategory::Rain,
        71..=77 | 85 | 86 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Storm,
        _ => WeatherCategory::Unknown,
    }
}
