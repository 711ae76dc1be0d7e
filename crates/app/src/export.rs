//! Export link construction — pure string formatting of the backend's
//! CSV-export endpoint.

use heliodash_domain::id::StationId;
use heliodash_domain::time::{ProductionDate, format_date};

/// Build the download URL for a CSV export of the given stations over an
/// inclusive date window.
///
/// The browser navigates to this URL; nothing is fetched or parsed here.
#[must_use]
pub fn excel_export_url(
    station_ids: &[StationId],
    start: ProductionDate,
    end: ProductionDate,
) -> String {
    let stations = station_ids
        .iter()
        .map(StationId::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "/api/export/excel?stations={stations}&start_date={}&end_date={}",
        format_date(start),
        format_date(end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn should_join_station_ids_and_format_dates() {
        let url = excel_export_url(
            &[StationId::new("SS001"), StationId::new("SS002")],
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        assert_eq!(
            url,
            "/api/export/excel?stations=SS001,SS002&start_date=2024-03-02&end_date=2024-03-31"
        );
    }

    #[test]
    fn should_build_url_for_single_station() {
        let url = excel_export_url(
            &[StationId::new("SS007")],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        );
        assert_eq!(
            url,
            "/api/export/excel?stations=SS007&start_date=2024-01-01&end_date=2024-01-07"
        );
    }
}
