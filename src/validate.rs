// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::types::BirthData;

/// Checks the shape of birth data before it reaches an engine.
pub fn validate_birth_data(birth: &BirthData) -> Result<(), ValidationError> {
    parse_date(&birth.date)?;
    parse_time(&birth.time)?;

    let loc = &birth.location;
    if !loc.lat.is_finite() || !(-90.0..=90.0).contains(&loc.lat) {
        return Err(ValidationError::Latitude(loc.lat));
    }
    if !loc.lon.is_finite() || !(-180.0..=180.0).contains(&loc.lon) {
        return Err(ValidationError::Longitude(loc.lon));
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValidationError::Date(s.to_string()))
}

pub fn parse_time(s: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| ValidationError::Time(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, TimeAccuracy};

    fn sample() -> BirthData {
        BirthData {
            date: "1985-11-02".into(),
            time: "06:45".into(),
            time_accuracy: TimeAccuracy::Exact,
            location: Location {
                lat: 48.135125,
                lon: 11.581981,
                name: "München".into(),
                timezone: "Europe/Berlin".into(),
            },
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        assert_eq!(validate_birth_data(&sample()), Ok(()));
        let mut b = sample();
        b.time = "23:59:59".into();
        b.date = "1985-11-02T00:00:00Z".into();
        assert_eq!(validate_birth_data(&b), Ok(()));
    }

    #[test]
    fn rejects_bad_date_and_time() {
        let mut b = sample();
        b.date = "1985-02-30".into();
        assert!(matches!(validate_birth_data(&b), Err(ValidationError::Date(_))));

        let mut b = sample();
        b.time = "25:00".into();
        assert!(matches!(validate_birth_data(&b), Err(ValidationError::Time(_))));

        let mut b = sample();
        b.time = "".into();
        assert!(matches!(validate_birth_data(&b), Err(ValidationError::Time(_))));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut b = sample();
        b.location.lat = 90.5;
        assert_eq!(validate_birth_data(&b), Err(ValidationError::Latitude(90.5)));

        let mut b = sample();
        b.location.lon = -180.01;
        assert_eq!(validate_birth_data(&b), Err(ValidationError::Longitude(-180.01)));

        let mut b = sample();
        b.location.lat = f64::NAN;
        assert!(matches!(validate_birth_data(&b), Err(ValidationError::Latitude(_))));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let mut b = sample();
        b.location.lat = -90.0;
        b.location.lon = 180.0;
        assert_eq!(validate_birth_data(&b), Ok(()));
    }

    #[test]
    fn blank_location_fields_are_accepted() {
        // Name and timezone are free text; only their presence is required.
        let mut b = sample();
        b.location.name = "  ".into();
        b.location.timezone = String::new();
        assert_eq!(validate_birth_data(&b), Ok(()));
    }
}
