//! Station — one solar generation site with fixed metadata.

use serde::{Deserialize, Serialize};

use crate::error::{HelioDashError, ValidationError};
use crate::id::StationId;
use crate::time::ProductionDate;

/// How a station's panels are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountingType {
    #[serde(rename = "rooftop")]
    Rooftop,
    #[serde(rename = "ground-mounted")]
    GroundMounted,
}

impl MountingType {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rooftop => "Rooftop",
            Self::GroundMounted => "Ground-mounted",
        }
    }
}

/// A solar generation site: identity, location, and installed equipment.
///
/// Field names mirror the backend's JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "station_id")]
    pub id: StationId,
    #[serde(rename = "station_name")]
    pub name: String,
    /// Pairing group used by operations to compare sibling sites.
    #[serde(rename = "station_pair", default)]
    pub pair: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub commissioning_date: ProductionDate,
    pub total_capacity_kw: f64,
    pub panel_type: String,
    pub panel_power_w: u32,
    pub panel_count: u32,
    pub inverter_brand: String,
    pub inverter_model: String,
    pub inverter_count: u32,
    pub inverter_power_kw: f64,
    pub mounting_type: MountingType,
    pub monitoring_system: String,
}

impl Station {
    /// Create a builder for constructing a [`Station`].
    #[must_use]
    pub fn builder() -> StationBuilder {
        StationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::Validation`] when the id or name is empty,
    /// or when the installed capacity is negative.
    pub fn validate(&self) -> Result<(), HelioDashError> {
        if self.id.as_str().is_empty() {
            return Err(ValidationError::EmptyStationId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.total_capacity_kw < 0.0 {
            return Err(ValidationError::NegativeCapacity.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Station`].
#[derive(Debug, Default)]
pub struct StationBuilder {
    id: Option<StationId>,
    name: Option<String>,
    pair: String,
    location: String,
    latitude: f64,
    longitude: f64,
    commissioning_date: Option<ProductionDate>,
    total_capacity_kw: f64,
    panel_type: String,
    panel_power_w: u32,
    panel_count: u32,
    inverter_brand: String,
    inverter_model: String,
    inverter_count: u32,
    inverter_power_kw: f64,
    mounting_type: Option<MountingType>,
    monitoring_system: String,
}

impl StationBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<StationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn pair(mut self, pair: impl Into<String>) -> Self {
        self.pair = pair.into();
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    #[must_use]
    pub fn commissioning_date(mut self, date: ProductionDate) -> Self {
        self.commissioning_date = Some(date);
        self
    }

    #[must_use]
    pub fn total_capacity_kw(mut self, capacity: f64) -> Self {
        self.total_capacity_kw = capacity;
        self
    }

    #[must_use]
    pub fn panels(mut self, panel_type: impl Into<String>, power_w: u32, count: u32) -> Self {
        self.panel_type = panel_type.into();
        self.panel_power_w = power_w;
        self.panel_count = count;
        self
    }

    #[must_use]
    pub fn inverters(
        mut self,
        brand: impl Into<String>,
        model: impl Into<String>,
        count: u32,
        power_kw: f64,
    ) -> Self {
        self.inverter_brand = brand.into();
        self.inverter_model = model.into();
        self.inverter_count = count;
        self.inverter_power_kw = power_kw;
        self
    }

    #[must_use]
    pub fn mounting_type(mut self, mounting_type: MountingType) -> Self {
        self.mounting_type = Some(mounting_type);
        self
    }

    #[must_use]
    pub fn monitoring_system(mut self, system: impl Into<String>) -> Self {
        self.monitoring_system = system.into();
        self
    }

    /// Consume the builder, validate, and return a [`Station`].
    ///
    /// # Errors
    ///
    /// Returns [`HelioDashError::Validation`] if the id or name is missing
    /// or empty, or if the capacity is negative.
    pub fn build(self) -> Result<Station, HelioDashError> {
        let station = Station {
            id: self.id.unwrap_or_else(|| StationId::new("")),
            name: self.name.unwrap_or_default(),
            pair: self.pair,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            commissioning_date: self
                .commissioning_date
                .unwrap_or(ProductionDate::MIN),
            total_capacity_kw: self.total_capacity_kw,
            panel_type: self.panel_type,
            panel_power_w: self.panel_power_w,
            panel_count: self.panel_count,
            inverter_brand: self.inverter_brand,
            inverter_model: self.inverter_model,
            inverter_count: self.inverter_count,
            inverter_power_kw: self.inverter_power_kw,
            mounting_type: self.mounting_type.unwrap_or(MountingType::Rooftop),
            monitoring_system: self.monitoring_system,
        };
        station.validate()?;
        Ok(station)
    }
}

/// Conjunctive client-side filter over a loaded station list.
///
/// An empty search term and `None` selectors match everything.
#[derive(Debug, Clone, Default)]
pub struct StationFilter {
    pub search: String,
    pub mounting_type: Option<MountingType>,
    pub monitoring_system: Option<String>,
}

impl StationFilter {
    /// Check whether a station passes every active criterion.
    ///
    /// The search term matches case-insensitively against the station name
    /// and its location.
    #[must_use]
    pub fn matches(&self, station: &Station) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || station.name.to_lowercase().contains(&term)
            || station.location.to_lowercase().contains(&term);

        let matches_mounting = self
            .mounting_type
            .is_none_or(|mounting| station.mounting_type == mounting);

        let matches_monitoring = self
            .monitoring_system
            .as_deref()
            .is_none_or(|system| station.monitoring_system == system);

        matches_search && matches_mounting && matches_monitoring
    }

    /// Apply the filter to a slice, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, stations: &'a [Station]) -> Vec<&'a Station> {
        stations.iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_station() -> Station {
        Station::builder()
            .id("SS001")
            .name("Boryspil-1")
            .pair("A")
            .location("Kyiv region, Boryspil")
            .coordinates(50.3547, 30.9508)
            .commissioning_date(NaiveDate::from_ymd_opt(2019, 5, 15).unwrap())
            .total_capacity_kw(250.0)
            .panels("JA Solar", 450, 556)
            .inverters("Huawei", "SUN2000-100KTL-M1", 3, 100.0)
            .mounting_type(MountingType::GroundMounted)
            .monitoring_system("Huawei FusionSolar")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_station_when_required_fields_provided() {
        let station = sample_station();
        assert_eq!(station.id.as_str(), "SS001");
        assert_eq!(station.panel_count, 556);
        assert_eq!(station.mounting_type, MountingType::GroundMounted);
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = Station::builder().id("SS001").build();
        assert!(matches!(
            result,
            Err(HelioDashError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_capacity_is_negative() {
        let result = Station::builder()
            .id("SS001")
            .name("Boryspil-1")
            .total_capacity_kw(-1.0)
            .build();
        assert!(matches!(
            result,
            Err(HelioDashError::Validation(ValidationError::NegativeCapacity))
        ));
    }

    #[test]
    fn should_deserialize_station_from_backend_schema() {
        let json = r#"{
            "station_id": "SS003",
            "station_name": "Vinnytsia-1",
            "station_pair": "B",
            "location": "Vinnytsia region",
            "latitude": 49.8397,
            "longitude": 24.0297,
            "commissioning_date": "2019-08-10",
            "total_capacity_kw": 150.0,
            "panel_type": "Trina Solar",
            "panel_power_w": 400,
            "panel_count": 375,
            "inverter_brand": "SMA",
            "inverter_model": "Sunny Tripower 50",
            "inverter_count": 3,
            "inverter_power_kw": 50.0,
            "mounting_type": "rooftop",
            "monitoring_system": "SMA Sunny Portal"
        }"#;

        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.id, StationId::new("SS003"));
        assert_eq!(station.mounting_type, MountingType::Rooftop);
        assert_eq!(
            station.commissioning_date,
            NaiveDate::from_ymd_opt(2019, 8, 10).unwrap()
        );
    }

    #[test]
    fn should_match_search_term_against_name_and_location() {
        let station = sample_station();

        let by_name = StationFilter {
            search: "boryspil".into(),
            ..StationFilter::default()
        };
        assert!(by_name.matches(&station));

        let by_location = StationFilter {
            search: "kyiv".into(),
            ..StationFilter::default()
        };
        assert!(by_location.matches(&station));

        let miss = StationFilter {
            search: "odesa".into(),
            ..StationFilter::default()
        };
        assert!(!miss.matches(&station));
    }

    #[test]
    fn should_combine_filter_criteria_conjunctively() {
        let station = sample_station();

        let filter = StationFilter {
            search: "boryspil".into(),
            mounting_type: Some(MountingType::Rooftop),
            monitoring_system: None,
        };
        assert!(!filter.matches(&station));

        let filter = StationFilter {
            search: "boryspil".into(),
            mounting_type: Some(MountingType::GroundMounted),
            monitoring_system: Some("Huawei FusionSolar".into()),
        };
        assert!(filter.matches(&station));
    }

    #[test]
    fn should_preserve_order_when_applying_filter() {
        let mut second = sample_station();
        second.id = StationId::new("SS002");
        second.name = "Boryspil-2".into();
        let stations = vec![sample_station(), second];

        let filter = StationFilter {
            search: "boryspil".into(),
            ..StationFilter::default()
        };
        let matched = filter.apply(&stations);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id.as_str(), "SS001");
        assert_eq!(matched[1].id.as_str(), "SS002");
    }
}
