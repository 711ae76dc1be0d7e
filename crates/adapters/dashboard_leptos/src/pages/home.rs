use leptos::prelude::*;

use crate::api;
use crate::components::StatCard;

/// Home page with the fleet-wide statistics cards.
#[component]
pub fn Home() -> impl IntoView {
    let statistics = LocalResource::new(|| api::fetch_statistics());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Solar fleet monitoring"</h1>
                <p>"Daily production across the whole station fleet, in one place."</p>
            </section>

            <Suspense fallback=move || view! { <p>"Loading statistics…"</p> }>
                {move || {
                    statistics.read().as_deref().map(|result| match result {
                        Ok(stats) => view! {
                            <div class="stat-grid">
                                <StatCard label="Stations" value=stats.total_stations.to_string()/>
                                <StatCard
                                    label="Installed capacity"
                                    value=format!("{} kW", stats.total_capacity_kw)
                                />
                                <StatCard label="Locations" value=stats.total_locations.to_string()/>
                                <StatCard
                                    label="Monitoring systems"
                                    value=stats.total_monitoring_systems.to_string()
                                />
                            </div>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load statistics: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
