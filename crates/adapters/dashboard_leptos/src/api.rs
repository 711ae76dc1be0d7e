//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.
//!
//! The backend wraps every payload in an envelope carrying a `success` flag;
//! a non-2xx status or `success: false` both surface as [`ApiError`].

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use heliodash_app::ports::ProductionProvider;
use heliodash_domain::error::{DataUnavailableError, HelioDashError};
use heliodash_domain::id::StationId;
use heliodash_domain::production::{DateBound, StationSeries};
use heliodash_domain::station::Station;
use heliodash_domain::statistics::Statistics;
use heliodash_domain::time::{ProductionDate, format_date, parse_date};

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<HelioDashError> for ApiError {
    fn from(err: HelioDashError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Reject an envelope whose `success` flag is false.
fn check_success(success: bool) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError {
            message: "backend reported failure".to_owned(),
        })
    }
}

/// Percent-encode a query parameter value (handles `+`, `&`, `=`, spaces, etc.).
fn encode_query_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace(' ', "%20")
}

#[derive(Deserialize)]
struct DateRangeEnvelope {
    success: bool,
    min_date: String,
    max_date: String,
}

#[derive(Deserialize)]
struct StationsEnvelope {
    success: bool,
    stations: Vec<Station>,
}

#[derive(Deserialize)]
struct ProductionEnvelope {
    success: bool,
    data: StationSeries,
}

#[derive(Deserialize)]
struct StatisticsEnvelope {
    success: bool,
    #[serde(flatten)]
    statistics: Statistics,
}

/// Fetch the inclusive range of dates for which data exists.
pub async fn fetch_date_bound() -> Result<DateBound, ApiError> {
    let resp = check_response(Request::get("/api/date-range").send().await?).await?;
    let body: DateRangeEnvelope = resp.json().await?;
    check_success(body.success)?;

    let min = parse_date(&body.min_date)?;
    let max = parse_date(&body.max_date)?;
    Ok(DateBound::new(min, max)?)
}

/// Fetch metadata for every station in the fleet.
pub async fn fetch_stations() -> Result<Vec<Station>, ApiError> {
    let resp = check_response(Request::get("/api/stations").send().await?).await?;
    let body: StationsEnvelope = resp.json().await?;
    check_success(body.success)?;
    Ok(body.stations)
}

/// Fetch daily production for the given stations over an inclusive window.
pub async fn fetch_production(
    station_ids: &[StationId],
    start: ProductionDate,
    end: ProductionDate,
) -> Result<StationSeries, ApiError> {
    let stations_param = station_ids
        .iter()
        .map(StationId::as_str)
        .collect::<Vec<_>>()
        .join(",");
    let url = format!(
        "/api/production?stations={}&start_date={}&end_date={}",
        encode_query_value(&stations_param),
        format_date(start),
        format_date(end)
    );
    let resp = check_response(Request::get(&url).send().await?).await?;
    let body: ProductionEnvelope = resp.json().await?;
    check_success(body.success)?;
    Ok(body.data)
}

/// Fetch fleet-wide statistics for the home page.
pub async fn fetch_statistics() -> Result<Statistics, ApiError> {
    let resp = check_response(Request::get("/api/statistics").send().await?).await?;
    let body: StatisticsEnvelope = resp.json().await?;
    check_success(body.success)?;
    Ok(body.statistics)
}

/// [`ProductionProvider`] implementation backed by the REST API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiClient;

fn unavailable(err: ApiError) -> HelioDashError {
    DataUnavailableError::new(err.message).into()
}

impl ProductionProvider for ApiClient {
    async fn date_bound(&self) -> Result<DateBound, HelioDashError> {
        fetch_date_bound().await.map_err(unavailable)
    }

    async fn stations(&self) -> Result<Vec<Station>, HelioDashError> {
        fetch_stations().await.map_err(unavailable)
    }

    async fn production(
        &self,
        station_ids: &[StationId],
        start: ProductionDate,
        end: ProductionDate,
    ) -> Result<StationSeries, HelioDashError> {
        fetch_production(station_ids, start, end)
            .await
            .map_err(unavailable)
    }
}
