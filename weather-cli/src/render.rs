use std::io::{self, Write};

use log::{debug, warn};
use weather_history_core::{PresentationState, Renderer, WeatherCategory};

const SUN: &str = r"
      \   |   /
        .---.
   --- (     ) ---
        '---'
      /   |   \
";

const CLOUD: &str = r"
        .--.          .-.
     .-(    ).     .-(   ).
    (___.__)__)   (__.__)__)
";

const RAIN: &str = r"
       .--.
    .-(    ).
   (___.__)__)
    ' ' ' ' '
   ' ' ' ' '
";

const SNOW: &str = r"
       .--.
    .-(    ).
   (___.__)__)
    *  *  *  *
   *  *  *  *
";

const STORM: &str = r"
       .--.
    .-(    ).
   (___.__)__)
    ' /_ ' '
   ' ' /' '
";

const UNKNOWN: &str = "\n   No Data\n";

fn art(category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Sun => SUN,
        WeatherCategory::Cloud => CLOUD,
        WeatherCategory::Rain => RAIN,
        WeatherCategory::Snow => SNOW,
        WeatherCategory::Storm => STORM,
        WeatherCategory::Unknown => UNKNOWN,
    }
}

/// Text front end: one status block per state, one static frame per category.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_state(&mut self, state: &PresentationState) -> io::Result<()> {
        match state {
            PresentationState::Idle => writeln!(self.out, "Select a date first."),
            PresentationState::Loading { date } => {
                writeln!(self.out, "Fetching {}…", date.format("%Y-%m-%d"))
            }
            PresentationState::Success { date, weather, description, .. } => {
                writeln!(self.out, "Weather on {}: {description}", date.format("%Y-%m-%d"))?;
                writeln!(self.out, "Code: {} ({description})", weather.code)?;
                writeln!(
                    self.out,
                    "Max: {:.1}°C  Min: {:.1}°C",
                    weather.max_temp_c, weather.min_temp_c
                )?;
                writeln!(self.out, "Precip: {:.2} mm", weather.precipitation_mm)?;
                writeln!(self.out, "Snow: {:.2} mm", weather.snowfall_mm)?;
                writeln!(self.out, "Wind: {:.1} km/h", weather.wind_speed_kmh)
            }
            PresentationState::Error(failure) => writeln!(self.out, "{}", failure.message),
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, state: &PresentationState) {
        if let Err(err) = self.write_state(state).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {err}");
        }
    }

    fn render_category(&mut self, category: WeatherCategory) {
        if let Err(err) = write!(self.out, "{}", art(category)).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {err}");
        }
    }

    fn set_fetch_enabled(&mut self, enabled: bool) {
        debug!("fetch enabled: {enabled}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weather_history_core::{DailySummary, FailureKind, FetchFailure};

    fn rendered(state: &PresentationState) -> String {
        let mut r = TerminalRenderer::new(Vec::new());
        r.render(state);
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn success_block_lists_measurements() {
        let state = PresentationState::Success {
            date: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
            weather: DailySummary {
                code: 0,
                max_temp_c: 25.0,
                min_temp_c: 12.04,
                precipitation_mm: 0.0,
                snowfall_mm: 0.0,
                wind_speed_kmh: 10.0,
            },
            category: WeatherCategory::Sun,
            description: "Clear",
        };

        let text = rendered(&state);
        assert!(text.starts_with("Weather on 2020-06-15: Clear\n"));
        assert!(text.contains("Code: 0 (Clear)"));
        assert!(text.contains("Max: 25.0°C  Min: 12.0°C"));
        assert!(text.contains("Precip: 0.00 mm"));
        assert!(text.contains("Wind: 10.0 km/h"));
    }

    #[test]
    fn error_message_is_printed_verbatim() {
        let state = PresentationState::Error(FetchFailure {
            kind: FailureKind::Transport,
            message: "API Error: connection refused".into(),
        });

        assert_eq!(rendered(&state), "API Error: connection refused\n");
    }

    #[test]
    fn loading_names_the_date() {
        let state =
            PresentationState::Loading { date: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap() };
        assert_eq!(rendered(&state), "Fetching 1999-12-31…\n");
    }

    #[test]
    fn every_category_has_a_frame() {
        for category in WeatherCategory::all() {
            let mut r = TerminalRenderer::new(Vec::new());
            r.render_category(*category);
            assert!(!r.into_inner().is_empty(), "{category} drew nothing");
        }
        assert!(art(WeatherCategory::Snow).contains('*'));
        assert!(art(WeatherCategory::Unknown).contains("No Data"));
    }
}
