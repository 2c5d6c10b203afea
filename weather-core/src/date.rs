use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::error::DateError;

/// First day covered by the ERA5 reanalysis.
pub const ERA5_MIN: NaiveDate = match NaiveDate::from_ymd_opt(1940, 1, 1) {
    Some(d) => d,
    None => panic!("1940-01-01 is a valid date"),
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts `selected` when `min <= selected <= today`, returning it unchanged.
pub fn validate(
    selected: NaiveDate,
    today: NaiveDate,
    min: NaiveDate,
) -> Result<NaiveDate, DateError> {
    if selected > today {
        return Err(DateError::FutureDate(selected));
    }
    if selected < min {
        return Err(DateError::BeforeMinimum(selected));
    }

    Ok(selected)
}

/// The current calendar date in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .with_context(|| format!("Invalid date '{s}'. Expected format YYYY-MM-DD."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn future_dates_are_rejected() {
        let today = d(2025, 12, 14);
        for date in [d(2025, 12, 15), d(2026, 1, 1), d(2030, 1, 1)] {
            assert_eq!(validate(date, today, ERA5_MIN), Err(DateError::FutureDate(date)));
        }
    }

    #[test]
    fn dates_before_era5_are_rejected() {
        let today = d(2025, 12, 14);
        for date in [d(1939, 12, 31), d(1900, 1, 1)] {
            assert_eq!(validate(date, today, ERA5_MIN), Err(DateError::BeforeMinimum(date)));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let today = d(2025, 12, 14);
        assert_eq!(validate(ERA5_MIN, today, ERA5_MIN), Ok(ERA5_MIN));
        assert_eq!(validate(today, today, ERA5_MIN), Ok(today));

        let mut date = ERA5_MIN;
        while date <= today {
            assert_eq!(validate(date, today, ERA5_MIN), Ok(date));
            date = date + chrono::Days::new(97);
        }
    }

    #[test]
    fn error_messages() {
        let future = validate(d(2030, 1, 1), d(2025, 1, 1), ERA5_MIN).unwrap_err();
        assert!(future.to_string().contains("time traveler"));

        let early = validate(d(1900, 1, 1), d(2025, 1, 1), ERA5_MIN).unwrap_err();
        assert!(early.to_string().contains("1940"));
    }

    #[test]
    fn parse_date_accepts_iso_days() {
        assert_eq!(parse_date("2020-06-15").unwrap(), d(2020, 6, 15));
        assert_eq!(parse_date(" 1940-01-01 ").unwrap(), ERA5_MIN);

        let err = parse_date("15/06/2020").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
