//! Station card component for the stations overview grid.

use leptos::prelude::*;

use heliodash_domain::station::{MountingType, Station};
use heliodash_domain::time::format_date;

/// A card summarizing one station's metadata and equipment.
#[component]
pub fn StationCard(
    /// The station to display.
    station: Station,
) -> impl IntoView {
    let mounting_class = match station.mounting_type {
        MountingType::Rooftop => "tag rooftop",
        MountingType::GroundMounted => "tag ground",
    };
    let mounting_label = station.mounting_type.label();
    let monitoring = station.monitoring_system.clone();

    view! {
        <div class="station-card">
            <div class="station-header">
                <div class="station-title">
                    <h3>{station.name.clone()}</h3>
                    <p>{station.location.clone()}</p>
                </div>
            </div>

            <div class="station-details">
                <DetailItem label="Capacity" value=format!("{} kW", station.total_capacity_kw)/>
                <DetailItem label="Panels" value=format!("{} pcs", station.panel_count)/>
                <DetailItem label="Panel type" value=station.panel_type.clone()/>
                <DetailItem label="Inverters" value=station.inverter_brand.clone()/>
                <DetailItem
                    label="Commissioned"
                    value=format_date(station.commissioning_date)
                />
                <DetailItem label="Monitoring" value=monitoring.clone()/>
            </div>

            <div class="station-tags">
                <span class=mounting_class>{mounting_label}</span>
                <span class="tag monitoring">{monitoring}</span>
            </div>
        </div>
    }
}

/// One label/value pair in the details grid.
#[component]
fn DetailItem(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The value to display.
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="detail-item">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}
