//! Core library for the `weather-history` CLI.
//!
//! This crate defines:
//! - Date validation against the ERA5 coverage window
//! - The Open-Meteo archive client and response normalization
//! - Weather code labels and coarse categories
//! - The fetch controller and the presentation states it emits
//!
//! It is used by `weather-history`, but any front end that implements
//! [`Renderer`] can drive it.

pub mod codes;
pub mod config;
pub mod controller;
pub mod date;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;

pub use codes::{WeatherCategory, categorize, describe};
pub use config::Config;
pub use controller::{
    FailureKind, FetchController, FetchFailure, FetchTicket, PresentationState, Renderer,
};
pub use date::{ERA5_MIN, validate};
pub use error::{CoordinatesError, DateError};
pub use location::SharedLocation;
pub use model::{Coordinates, DailySummary, DayWeather, FetchStatus};
pub use provider::{WeatherSource, archive::ArchiveClient};
