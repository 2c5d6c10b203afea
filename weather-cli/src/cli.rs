use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::CustomType;
use weather_history_core::{
    ArchiveClient, Config, Coordinates, FetchController, PresentationState, SharedLocation,
    WeatherCategory, date, provider,
};

use crate::render::TerminalRenderer;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-history", version, about = "Historical daily weather for a past date")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the weather for a past date (1940-01-01 up to today).
    Show {
        /// Date as YYYY-MM-DD.
        date: String,

        /// Latitude for this lookup only; requires --lon.
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude for this lookup only; requires --lat.
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },

    /// Change the saved location. Prompts when no flags are given.
    Location {
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },

    /// Draw a weather code or category without fetching anything.
    Preview {
        /// A weather code (e.g. 61) or a category: sun, cloud, rain, snow, storm, unknown.
        target: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Show { date, lat, lon } => show(&date, lat.zip(lon)).await,
            Command::Location { lat, lon } => {
                set_location(lat.zip(lon))?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Preview { target } => {
                preview(&target)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn show(date: &str, coordinates: Option<(f64, f64)>) -> anyhow::Result<ExitCode> {
    let date = date::parse_date(date)?;
    let config = Config::load()?;

    let location = SharedLocation::new(config.coordinates());
    if let Some((lat, lon)) = coordinates {
        location.set(Coordinates::new(lat, lon)?);
    }

    let source = provider::source_from_config(&config)?;
    let mut controller = FetchController::new(source, TerminalRenderer::stdout(), location);

    match controller.fetch(date).await {
        PresentationState::Error(_) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn set_location(coordinates: Option<(f64, f64)>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let coordinates = match coordinates {
        Some((lat, lon)) => Coordinates::new(lat, lon)?,
        None => prompt_coordinates(config.coordinates())?,
    };

    config.set_coordinates(coordinates);
    config.save()?;

    println!("Location set to {coordinates}");
    Ok(())
}

fn prompt_coordinates(current: Coordinates) -> anyhow::Result<Coordinates> {
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(current.latitude)
        .with_error_message("Enter a valid numeric latitude.")
        .prompt()
        .context("Latitude prompt was cancelled")?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(current.longitude)
        .with_error_message("Enter a valid numeric longitude.")
        .prompt()
        .context("Longitude prompt was cancelled")?;

    Ok(Coordinates::new(latitude, longitude)?)
}

fn preview(target: &str) -> anyhow::Result<()> {
    let code = match target.trim().parse::<i32>() {
        Ok(code) => code,
        Err(_) => target.parse::<WeatherCategory>()?.sample_code(),
    };

    let mut controller = FetchController::new(
        Box::new(ArchiveClient::new()),
        TerminalRenderer::stdout(),
        SharedLocation::default(),
    );

    let (category, description) = controller.preview(code);
    println!("Preview: code {code} ({description}), category {category}");
    Ok(())
}
