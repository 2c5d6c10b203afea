//! The fetch pipeline and the presentation state it drives.
//!
//! [`FetchController`] validates a date, asks a [`WeatherSource`] for that
//! day, classifies the result and hands every new [`PresentationState`] to a
//! [`Renderer`]. It is meant to be driven from a single task.

use chrono::NaiveDate;
use log::{debug, info};

use crate::{
    codes::{self, WeatherCategory},
    date::{self, ERA5_MIN},
    error::DateError,
    location::SharedLocation,
    model::{Coordinates, DailySummary, DayWeather},
    provider::WeatherSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    FutureDate,
    BeforeMinimum,
    NoData,
    Transport,
}

/// A failed fetch, with the text to show the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<DateError> for FetchFailure {
    fn from(err: DateError) -> Self {
        let kind = match err {
            DateError::FutureDate(_) => FailureKind::FutureDate,
            DateError::BeforeMinimum(_) => FailureKind::BeforeMinimum,
        };

        Self { kind, message: err.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresentationState {
    Idle,
    Loading {
        date: NaiveDate,
    },
    Success {
        date: NaiveDate,
        weather: DailySummary,
        category: WeatherCategory,
        description: &'static str,
    },
    Error(FetchFailure),
}

impl PresentationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PresentationState::Loading { .. })
    }
}

/// Consumer of presentation states.
///
/// Implementations must tolerate being handed the same state more than once.
/// `render_category` replaces whatever the previous call drew.
pub trait Renderer {
    fn render(&mut self, state: &PresentationState);

    fn render_category(&mut self, category: WeatherCategory);

    /// Whether the user may start another fetch.
    fn set_fetch_enabled(&mut self, _enabled: bool) {}
}

/// An outstanding fetch: the validated date and the coordinates captured when
/// it began.
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
    date: NaiveDate,
    coordinates: Coordinates,
}

impl FetchTicket {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

pub struct FetchController<R: Renderer> {
    source: Box<dyn WeatherSource>,
    renderer: R,
    location: SharedLocation,
    today: fn() -> NaiveDate,
    state: PresentationState,
    seq: u64,
}

impl<R: Renderer> FetchController<R> {
    pub fn new(source: Box<dyn WeatherSource>, renderer: R, location: SharedLocation) -> Self {
        Self {
            source,
            renderer,
            location,
            today: date::local_today,
            state: PresentationState::Idle,
            seq: 0,
        }
    }

    /// Replace the clock used to reject future dates.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn fetch_enabled(&self) -> bool {
        !self.state.is_loading()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn location(&self) -> &SharedLocation {
        &self.location
    }

    /// Run the whole pipeline for `date` and return the resulting state.
    pub async fn fetch(&mut self, date: NaiveDate) -> &PresentationState {
        if let Some(ticket) = self.begin(date) {
            let weather = self.source.fetch_day(ticket.date, ticket.coordinates).await;
            self.complete(ticket, weather);
        }

        &self.state
    }

    /// Start a fetch for `date`, superseding any fetch still outstanding.
    ///
    /// A rejected date moves straight to `Error` and yields no ticket.
    pub fn begin(&mut self, date: NaiveDate) -> Option<FetchTicket> {
        self.seq += 1;

        match date::validate(date, (self.today)(), ERA5_MIN) {
            Err(err) => {
                info!("Rejected {date}: {err}");
                self.transition(PresentationState::Error(err.into()));
                None
            }
            Ok(date) => {
                let coordinates = self.location.get();
                info!("Fetching {date} at {coordinates}");
                self.transition(PresentationState::Loading { date });
                Some(FetchTicket { seq: self.seq, date, coordinates })
            }
        }
    }

    /// Apply the result of a fetch. Returns `false` if the ticket was superseded
    /// and the result discarded.
    pub fn complete(&mut self, ticket: FetchTicket, weather: DayWeather) -> bool {
        if ticket.seq != self.seq {
            debug!("Discarding superseded result for {}", ticket.date);
            return false;
        }

        let next = match weather {
            DayWeather::Ok(summary) => PresentationState::Success {
                date: ticket.date,
                weather: summary,
                category: codes::categorize(summary.code),
                description: codes::describe(summary.code),
            },
            DayWeather::NoData { message } => {
                PresentationState::Error(FetchFailure { kind: FailureKind::NoData, message })
            }
            DayWeather::TransportError { message } => {
                PresentationState::Error(FetchFailure { kind: FailureKind::Transport, message })
            }
        };

        self.transition(next);

        if let PresentationState::Success { category, .. } = self.state {
            self.renderer.render_category(category);
        }

        true
    }

    /// Draw the category for `code` without fetching or changing state.
    pub fn preview(&mut self, code: i32) -> (WeatherCategory, &'static str) {
        let category = codes::categorize(code);
        self.renderer.render_category(category);
        (category, codes::describe(code))
    }

    fn transition(&mut self, next: PresentationState) {
        self.state = next;
        self.renderer.set_fetch_enabled(!self.state.is_loading());
        self.renderer.render(&self.state);
    }
}
