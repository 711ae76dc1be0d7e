//! Series alignment — merge sparse per-station series onto one date axis.

use std::collections::{BTreeMap, BTreeSet};

use heliodash_domain::id::StationId;
use heliodash_domain::production::StationSeries;
use heliodash_domain::time::ProductionDate;

/// Multiple station series re-sampled onto a shared, strictly increasing
/// date axis.
///
/// Invariant: `values[id].len() == dates.len()` for every id in the map;
/// readings missing on an axis date are `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub dates: Vec<ProductionDate>,
    pub values: BTreeMap<StationId, Vec<f64>>,
}

impl AlignedSeries {
    /// An empty axis with no series.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            values: BTreeMap::new(),
        }
    }
}

/// Align the raw series of the selected stations onto a common date axis.
///
/// The axis is the sorted, deduplicated union of all dates appearing in any
/// selected station's series; two stations reporting the same calendar date
/// collapse to one axis point. Stations absent from `raw` (or with no
/// readings) get an all-zero value vector. The output depends only on
/// `(selection order, raw contents)`.
#[must_use]
pub fn align(selection: &[StationId], raw: &StationSeries) -> AlignedSeries {
    if selection.is_empty() {
        return AlignedSeries::empty();
    }

    let mut axis: BTreeSet<ProductionDate> = BTreeSet::new();
    for id in selection {
        if let Some(points) = raw.get(id) {
            axis.extend(points.iter().map(|p| p.date));
        }
    }
    let dates: Vec<ProductionDate> = axis.into_iter().collect();

    let mut values = BTreeMap::new();
    for id in selection {
        let by_date: BTreeMap<ProductionDate, f64> = raw
            .get(id)
            .map(|points| {
                points
                    .iter()
                    .map(|p| (p.date, p.production_kwh))
                    .collect()
            })
            .unwrap_or_default();

        let series: Vec<f64> = dates
            .iter()
            .map(|date| by_date.get(date).copied().unwrap_or(0.0))
            .collect();
        values.insert(id.clone(), series);
    }

    AlignedSeries { dates, values }
}
