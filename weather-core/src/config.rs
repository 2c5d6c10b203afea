use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{model::Coordinates, provider::ARCHIVE_URL};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// latitude = 40.386642
/// longitude = -105.08452
/// timeout_secs = 30
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides the default location; both halves must be set to take effect.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Alternate archive endpoint, e.g. a self-hosted Open-Meteo instance.
    pub archive_url: Option<String>,

    /// Transport timeout for the archive request. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Configured location, or the built-in default.
    pub fn coordinates(&self) -> Coordinates {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon).unwrap_or_else(|err| {
                log::warn!("Ignoring configured location: {err}");
                Coordinates::default()
            }),
            _ => Coordinates::default(),
        }
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.latitude = Some(coordinates.latitude);
        self.longitude = Some(coordinates.longitude);
    }

    pub fn archive_url(&self) -> &str {
        self.archive_url.as_deref().unwrap_or(ARCHIVE_URL)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-history", "weather-history")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.coordinates(), Coordinates::default());
        assert_eq!(cfg.archive_url(), ARCHIVE_URL);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn set_coordinates_overrides_default() {
        let mut cfg = Config::default();
        let paris = Coordinates::new(48.8566, 2.3522).unwrap();

        cfg.set_coordinates(paris);
        assert_eq!(cfg.coordinates(), paris);
    }

    #[test]
    fn half_or_invalid_location_falls_back() {
        let cfg = Config { latitude: Some(10.0), ..Config::default() };
        assert_eq!(cfg.coordinates(), Coordinates::default());

        let cfg = Config { latitude: Some(120.0), longitude: Some(0.0), ..Config::default() };
        assert_eq!(cfg.coordinates(), Coordinates::default());
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = Config {
            archive_url: Some("http://localhost:8080/v1/era5".into()),
            timeout_secs: Some(15),
            ..Config::default()
        };
        cfg.set_coordinates(Coordinates::new(-33.8688, 151.2093).unwrap());

        let text = cfg.to_toml().unwrap();
        assert!(text.contains("timeout_secs = 15"));

        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_toml_parses() {
        let cfg = Config::from_toml("timeout_secs = 5\n").unwrap();
        assert_eq!(cfg.timeout_secs, Some(5));
        assert_eq!(cfg.coordinates(), Coordinates::default());

        assert!(Config::from_toml("timeout_secs = \"soon\"").is_err());
    }
}
