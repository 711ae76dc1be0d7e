//! Statistics — fleet-wide aggregates derived from a station list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::station::Station;

/// Summary figures for the whole fleet, shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_stations: usize,
    pub total_capacity_kw: f64,
    pub total_locations: usize,
    pub total_monitoring_systems: usize,
}

impl Statistics {
    /// Aggregate a station list into fleet statistics.
    #[must_use]
    pub fn from_stations(stations: &[Station]) -> Self {
        let locations: BTreeSet<&str> = stations.iter().map(|s| s.location.as_str()).collect();
        let systems: BTreeSet<&str> = stations
            .iter()
            .map(|s| s.monitoring_system.as_str())
            .collect();

        Self {
            total_stations: stations.len(),
            total_capacity_kw: stations.iter().map(|s| s.total_capacity_kw).sum(),
            total_locations: locations.len(),
            total_monitoring_systems: systems.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::MountingType;
    use chrono::NaiveDate;

    fn station(id: &str, location: &str, capacity: f64, system: &str) -> Station {
        Station::builder()
            .id(id)
            .name(format!("Station {id}"))
            .location(location)
            .commissioning_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
            .total_capacity_kw(capacity)
            .mounting_type(MountingType::Rooftop)
            .monitoring_system(system)
            .build()
            .unwrap()
    }

    #[test]
    fn should_count_distinct_locations_and_systems() {
        let stations = vec![
            station("SS001", "Kyiv", 250.0, "Huawei FusionSolar"),
            station("SS002", "Kyiv", 280.0, "Huawei FusionSolar"),
            station("SS003", "Odesa", 200.0, "SolarEdge Monitoring"),
        ];

        let stats = Statistics::from_stations(&stations);
        assert_eq!(stats.total_stations, 3);
        assert!((stats.total_capacity_kw - 730.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_locations, 2);
        assert_eq!(stats.total_monitoring_systems, 2);
    }

    #[test]
    fn should_return_zeroes_for_empty_fleet() {
        let stats = Statistics::from_stations(&[]);
        assert_eq!(stats.total_stations, 0);
        assert_eq!(stats.total_capacity_kw, 0.0);
        assert_eq!(stats.total_locations, 0);
    }
}
