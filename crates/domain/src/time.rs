//! Calendar-date helpers.
//!
//! All production data is keyed by calendar day; the backend formats dates
//! as `YYYY-MM-DD` in query strings and JSON payloads alike.

use chrono::NaiveDate;

use crate::error::{DataUnavailableError, HelioDashError};

/// Calendar date used for readings, bounds, and chart axes.
pub type ProductionDate = NaiveDate;

/// Wire format for dates, shared by query parameters and JSON bodies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date in the backend's `YYYY-MM-DD` wire format.
#[must_use]
pub fn format_date(date: ProductionDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date from a wire payload.
///
/// # Errors
///
/// Returns [`HelioDashError::DataUnavailable`] when the payload is not a
/// valid calendar date, since that means the backend response is unusable.
pub fn parse_date(text: &str) -> Result<ProductionDate, HelioDashError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| DataUnavailableError::new(format!("unparseable date: {text}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_date_as_iso_calendar_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(format_date(date), "2024-03-02");
    }

    #[test]
    fn should_roundtrip_through_parse_and_format() {
        let date = parse_date("2021-10-11").unwrap();
        assert_eq!(format_date(date), "2021-10-11");
    }

    #[test]
    fn should_return_data_unavailable_when_date_is_malformed() {
        let result = parse_date("11.10.2021");
        assert!(matches!(result, Err(HelioDashError::DataUnavailable(_))));
    }
}
