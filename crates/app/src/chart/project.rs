//! Chart projection — aligned series to renderer-ready datasets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use heliodash_domain::id::StationId;

use crate::chart::align::AlignedSeries;
use crate::chart::palette::CHART_COLORS;

/// One renderable line: display label, stroke color, and per-axis-date values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Project aligned series into one dataset per selected station, in
/// selection order.
///
/// Selection order controls both legend order and color assignment: the
/// color at index `i` is `palette[i % palette.len()]`, independent of
/// station identity. Re-selecting stations in a different order therefore
/// changes their colors — an accepted, observable quirk. Unknown ids keep
/// the raw id as label and an all-zero value vector; an empty `palette`
/// falls back to [`CHART_COLORS`].
#[must_use]
pub fn project(
    selection: &[StationId],
    station_names: &BTreeMap<StationId, String>,
    aligned: &AlignedSeries,
    palette: &[&str],
) -> Vec<ChartDataset> {
    let palette: &[&str] = if palette.is_empty() {
        &CHART_COLORS
    } else {
        palette
    };

    selection
        .iter()
        .enumerate()
        .map(|(index, id)| ChartDataset {
            label: station_names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            color: palette[index % palette.len()].to_owned(),
            values: aligned
                .values
                .get(id)
                .cloned()
                .unwrap_or_else(|| vec![0.0; aligned.dates.len()]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aligned_fixture() -> AlignedSeries {
        AlignedSeries {
            dates: vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ],
            values: [
                (StationId::new("A"), vec![5.0, 0.0]),
                (StationId::new("B"), vec![0.0, 7.0]),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn names() -> BTreeMap<StationId, String> {
        [
            (StationId::new("A"), "Boryspil-1".to_owned()),
            (StationId::new("B"), "Vinnytsia-1".to_owned()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn should_emit_datasets_in_selection_order() {
        let selection = [StationId::new("B"), StationId::new("A")];
        let datasets = project(&selection, &names(), &aligned_fixture(), &CHART_COLORS);

        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].label, "Vinnytsia-1");
        assert_eq!(datasets[1].label, "Boryspil-1");
        assert_eq!(datasets[0].values, vec![0.0, 7.0]);
    }

    #[test]
    fn should_cycle_palette_by_selection_position() {
        let palette = ["#111111", "#222222"];
        let selection = [
            StationId::new("A"),
            StationId::new("B"),
            StationId::new("C"),
        ];
        let datasets = project(&selection, &names(), &aligned_fixture(), &palette);

        assert_eq!(datasets[0].color, "#111111");
        assert_eq!(datasets[1].color, "#222222");
        assert_eq!(datasets[2].color, "#111111");
    }

    #[test]
    fn should_assign_colors_by_position_not_identity() {
        let palette = ["#111111", "#222222"];
        let first = project(
            &[StationId::new("A"), StationId::new("B")],
            &names(),
            &aligned_fixture(),
            &palette,
        );
        let second = project(
            &[StationId::new("B"), StationId::new("A")],
            &names(),
            &aligned_fixture(),
            &palette,
        );

        // Same station, different position, different color.
        assert_eq!(first[0].label, second[1].label);
        assert_ne!(first[0].color, second[1].color);
    }

    #[test]
    fn should_fall_back_to_raw_id_for_unknown_station() {
        let selection = [StationId::new("SS999")];
        let datasets = project(&selection, &names(), &aligned_fixture(), &CHART_COLORS);

        assert_eq!(datasets[0].label, "SS999");
        assert_eq!(datasets[0].values, vec![0.0, 0.0]);
    }

    #[test]
    fn should_be_idempotent_for_identical_inputs() {
        let selection = [StationId::new("A"), StationId::new("B")];
        let aligned = aligned_fixture();
        let first = project(&selection, &names(), &aligned, &CHART_COLORS);
        let second = project(&selection, &names(), &aligned, &CHART_COLORS);
        assert_eq!(first, second);
    }
}
