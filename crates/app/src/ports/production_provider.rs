//! Production provider port — the backend fetch surface consumed by the core.

use std::future::Future;

use heliodash_domain::error::HelioDashError;
use heliodash_domain::id::StationId;
use heliodash_domain::production::{DateBound, StationSeries};
use heliodash_domain::station::Station;
use heliodash_domain::time::ProductionDate;

/// Read-only access to the monitoring backend.
///
/// Futures carry no `Send` bound: the only runtime is a single-threaded
/// browser event loop, and the WASM fetch futures are `!Send`.
pub trait ProductionProvider {
    /// Fetch the inclusive range of dates for which data exists.
    fn date_bound(&self) -> impl Future<Output = Result<DateBound, HelioDashError>>;

    /// Fetch metadata for every station in the fleet.
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>, HelioDashError>>;

    /// Fetch daily production for the given stations over an inclusive
    /// calendar-date window.
    ///
    /// Stations unknown to the backend are simply absent from the result,
    /// never an error.
    fn production(
        &self,
        station_ids: &[StationId],
        start: ProductionDate,
        end: ProductionDate,
    ) -> impl Future<Output = Result<StationSeries, HelioDashError>>;
}
