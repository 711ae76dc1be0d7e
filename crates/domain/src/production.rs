//! Production — daily readings, per-station series, and the available date bound.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{HelioDashError, ValidationError};
use crate::id::StationId;
use crate::time::ProductionDate;

/// One station-day reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionPoint {
    pub date: ProductionDate,
    pub production_kwh: f64,
}

impl ProductionPoint {
    /// Create a reading after checking the non-negativity invariant.
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::Validation`] when `production_kwh` is negative.
    pub fn new(date: ProductionDate, production_kwh: f64) -> Result<Self, HelioDashError> {
        if production_kwh < 0.0 {
            return Err(ValidationError::NegativeProduction.into());
        }
        Ok(Self {
            date,
            production_kwh,
        })
    }
}

/// Per-station production series, keyed by station id.
///
/// Iteration order is deterministic (sorted by id); each series is ordered
/// by date but not necessarily contiguous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationSeries(BTreeMap<StationId, Vec<ProductionPoint>>);

impl StationSeries {
    /// Create an empty series collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the series for one station, sorting it by date.
    pub fn insert(&mut self, id: StationId, mut points: Vec<ProductionPoint>) {
        points.sort_by_key(|p| p.date);
        self.0.insert(id, points);
    }

    /// Look up the series for one station.
    #[must_use]
    pub fn get(&self, id: &StationId) -> Option<&[ProductionPoint]> {
        self.0.get(id).map(Vec::as_slice)
    }

    /// Ids with at least one series entry, in sorted order.
    pub fn station_ids(&self) -> impl Iterator<Item = &StationId> {
        self.0.keys()
    }

    /// Number of stations with a series entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no station has a series entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StationId, Vec<ProductionPoint>)> for StationSeries {
    fn from_iter<I: IntoIterator<Item = (StationId, Vec<ProductionPoint>)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (id, points) in iter {
            series.insert(id, points);
        }
        series
    }
}

/// The inclusive range of dates for which data exists.
///
/// Fetched once per session and treated as immutable afterwards. The
/// dataset may be stale, so period presets anchor at `max`, never "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBound {
    pub min: ProductionDate,
    pub max: ProductionDate,
}

impl DateBound {
    /// Create a bound after checking `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::Validation`] when the bound is inverted.
    pub fn new(min: ProductionDate, max: ProductionDate) -> Result<Self, HelioDashError> {
        if min > max {
            return Err(ValidationError::InvertedBound.into());
        }
        Ok(Self { min, max })
    }

    /// Whether a date falls inside the bound (inclusive on both ends).
    #[must_use]
    pub fn contains(&self, date: ProductionDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Total number of calendar days covered, inclusive.
    #[must_use]
    pub fn span_days(&self) -> u32 {
        u32::try_from((self.max - self.min).num_days() + 1).unwrap_or(0)
    }
}
