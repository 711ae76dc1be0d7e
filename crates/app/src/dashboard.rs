//! Dashboard controller — UI state machine driving the chart pipeline.
//!
//! The controller owns all mutable UI state (`DashboardState`) and calls the
//! pure pipeline functions on refresh; the pipeline itself holds no state.
//! Fetching is split-phase so the single-threaded adapter owns the `await`:
//! [`DashboardController::begin_refresh`] issues a generation-stamped
//! request, the adapter performs the fetch, and
//! [`DashboardController::complete_refresh`] applies (or discards) the
//! outcome. [`DashboardController::refresh_with`] drives all three steps
//! against a [`ProductionProvider`] for callers that can await in place.

use std::collections::BTreeMap;

use tracing::{debug, info};

use heliodash_domain::error::{HelioDashError, InvalidArgumentError};
use heliodash_domain::id::StationId;
use heliodash_domain::production::{DateBound, StationSeries};
use heliodash_domain::station::Station;
use heliodash_domain::time::ProductionDate;

use crate::chart::{CHART_COLORS, Period, align, project};
use crate::export::excel_export_url;
use crate::ports::{ChartRenderer, ProductionProvider};

/// Where the dashboard is in its fetch/display lifecycle.
///
/// `Empty -> Loading -> Displayed`, back to `Loading` on any user action,
/// `Loading -> Error` on fetch failure, `Error -> Loading` on the next
/// action. There is no automatic retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Empty,
    Loading,
    Displayed,
    Error(String),
}

/// All mutable UI state, owned by the controller.
#[derive(Debug, Default)]
pub struct DashboardState {
    stations: Vec<Station>,
    station_names: BTreeMap<StationId, String>,
    bound: Option<DateBound>,
    selection: Vec<StationId>,
    period: Period,
    phase: Phase,
    issued_generation: u64,
}

/// A generation-stamped production fetch the adapter must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    pub generation: u64,
    pub station_ids: Vec<StationId>,
    pub start: ProductionDate,
    pub end: ProductionDate,
}

/// Dashboard use-case controller, generic over the rendering surface.
pub struct DashboardController<R> {
    state: DashboardState,
    renderer: R,
}

impl<R: ChartRenderer> DashboardController<R> {
    /// Create a controller with empty state and a 30-day default period.
    pub fn new(renderer: R) -> Self {
        Self {
            state: DashboardState::default(),
            renderer,
        }
    }

    /// Store the session-immutable metadata: date bound and station list.
    pub fn load_metadata(&mut self, bound: DateBound, stations: Vec<Station>) {
        info!(stations = stations.len(), "dashboard metadata loaded");
        self.state.station_names = stations
            .iter()
            .map(|s| (s.id.clone(), s.name.clone()))
            .collect();
        self.state.stations = stations;
        self.state.bound = Some(bound);
    }

    /// Fetch and store metadata through a [`ProductionProvider`].
    ///
    /// # Errors
    ///
    /// Propagates [`HelioDashError::DataUnavailable`] from either fetch.
    pub async fn initialize_with<P: ProductionProvider>(
        &mut self,
        provider: &P,
    ) -> Result<(), HelioDashError> {
        let bound = provider.date_bound().await?;
        let stations = provider.stations().await?;
        self.load_metadata(bound, stations);
        Ok(())
    }

    /// The loaded station list, in server order.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.state.stations
    }

    /// The available date bound, if metadata has been loaded.
    #[must_use]
    pub fn bound(&self) -> Option<DateBound> {
        self.state.bound
    }

    /// The current selection, in toggle order.
    #[must_use]
    pub fn selection(&self) -> &[StationId] {
        &self.state.selection
    }

    /// Whether a station is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: &StationId) -> bool {
        self.state.selection.contains(id)
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase.clone()
    }

    /// The currently selected period.
    #[must_use]
    pub fn period(&self) -> Period {
        self.state.period
    }

    /// Access the rendering surface.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Add a station to the selection, or remove it if already present.
    ///
    /// Selection order is toggle order; it drives legend order and color
    /// assignment downstream.
    pub fn toggle_station(&mut self, id: StationId) {
        if let Some(index) = self.state.selection.iter().position(|s| *s == id) {
            self.state.selection.remove(index);
        } else {
            self.state.selection.push(id);
        }
    }

    /// Select every known station, in server order.
    pub fn select_all(&mut self) {
        self.state.selection = self.state.stations.iter().map(|s| s.id.clone()).collect();
    }

    /// Clear the selection and the chart.
    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
        self.renderer.clear();
        self.state.phase = Phase::Empty;
    }

    /// Switch to a fixed day-count preset.
    pub fn set_period_days(&mut self, days: u32) {
        self.state.period = Period::Days(days);
    }

    /// Switch to an explicit custom window.
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::InvalidRange`] when `start > end`; state is
    /// untouched in that case and no fetch will be issued.
    pub fn apply_custom_range(
        &mut self,
        start: ProductionDate,
        end: ProductionDate,
    ) -> Result<(), HelioDashError> {
        let period = Period::Custom { start, end };
        if let Some(bound) = self.state.bound {
            // Resolving validates start <= end before any state mutation.
            period.resolve(bound)?;
        }
        self.state.period = period;
        Ok(())
    }

    /// The concrete inclusive window the current period resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::InvalidArgument`] before metadata is
    /// loaded, or a resolution error from the period itself.
    pub fn resolved_range(&self) -> Result<(ProductionDate, ProductionDate), HelioDashError> {
        let bound = self.state.bound.ok_or(InvalidArgumentError {
            reason: "date bound not loaded",
        })?;
        self.state.period.resolve(bound)
    }

    /// Start a refresh: resolve the window, stamp a new generation, and
    /// enter `Loading`.
    ///
    /// An empty selection clears the chart instead and yields no request.
    ///
    /// # Errors
    ///
    /// Propagates range-resolution failures; state is unchanged on error.
    pub fn begin_refresh(&mut self) -> Result<Option<RefreshRequest>, HelioDashError> {
        if self.state.selection.is_empty() {
            self.clear_selection();
            return Ok(None);
        }

        let (start, end) = self.resolved_range()?;
        self.state.issued_generation += 1;
        self.state.phase = Phase::Loading;
        debug!(
            generation = self.state.issued_generation,
            %start,
            %end,
            stations = self.state.selection.len(),
            "refresh issued"
        );
        Ok(Some(RefreshRequest {
            generation: self.state.issued_generation,
            station_ids: self.state.selection.clone(),
            start,
            end,
        }))
    }

    /// Apply the outcome of a fetch issued by [`Self::begin_refresh`].
    ///
    /// A response whose generation is behind the latest issued request is
    /// discarded (returns `false`): last-write-wins by issuance order, not
    /// resolution order. On success the pipeline runs and the renderer is
    /// updated; on failure the previous chart is left untouched
    /// (stale-but-visible) and only the phase carries the error message.
    pub fn complete_refresh(
        &mut self,
        generation: u64,
        result: Result<StationSeries, HelioDashError>,
    ) -> bool {
        if generation < self.state.issued_generation {
            debug!(
                generation,
                latest = self.state.issued_generation,
                "discarding stale production response"
            );
            return false;
        }

        match result {
            Ok(raw) => {
                let aligned = align(&self.state.selection, &raw);
                let datasets = project(
                    &self.state.selection,
                    &self.state.station_names,
                    &aligned,
                    &CHART_COLORS,
                );
                self.renderer.set_data(aligned.dates, datasets);
                self.state.phase = Phase::Displayed;
            }
            Err(err) => {
                self.state.phase = Phase::Error(err.to_string());
            }
        }
        true
    }

    /// Run a full refresh cycle against a provider.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::begin_refresh`] failures. Fetch failures do not
    /// error; they land in [`Phase::Error`] via [`Self::complete_refresh`].
    pub async fn refresh_with<P: ProductionProvider>(
        &mut self,
        provider: &P,
    ) -> Result<(), HelioDashError> {
        let Some(request) = self.begin_refresh()? else {
            return Ok(());
        };
        let result = provider
            .production(&request.station_ids, request.start, request.end)
            .await;
        self.complete_refresh(request.generation, result);
        Ok(())
    }

    /// Build the CSV-export link for the current selection and window.
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::InvalidArgument`] for an empty selection,
    /// or a range-resolution failure.
    pub fn export_url(&self) -> Result<String, HelioDashError> {
        if self.state.selection.is_empty() {
            return Err(InvalidArgumentError {
                reason: "export requires at least one selected station",
            }
            .into());
        }
        let (start, end) = self.resolved_range()?;
        Ok(excel_export_url(&self.state.selection, start, end))
    }
}
