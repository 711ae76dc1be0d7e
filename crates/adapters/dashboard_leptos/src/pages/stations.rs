use leptos::prelude::*;

use heliodash_domain::station::{MountingType, Station, StationFilter};

use crate::api;
use crate::components::StationCard;

/// Stations page: card grid with client-side search and filters.
#[component]
pub fn Stations() -> impl IntoView {
    let stations = LocalResource::new(|| api::fetch_stations());

    let (search, set_search) = signal(String::new());
    let (mounting, set_mounting) = signal("all".to_owned());
    let (monitoring, set_monitoring) = signal("all".to_owned());

    let filter = move || StationFilter {
        search: search.get(),
        mounting_type: match mounting.get().as_str() {
            "rooftop" => Some(MountingType::Rooftop),
            "ground-mounted" => Some(MountingType::GroundMounted),
            _ => None,
        },
        monitoring_system: match monitoring.get().as_str() {
            "all" => None,
            system => Some(system.to_owned()),
        },
    };

    view! {
        <div class="stations-page">
            <h1>"Stations"</h1>

            <div class="station-filters">
                <input
                    type="search"
                    placeholder="Search by name or location…"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_mounting.set(event_target_value(&ev))>
                    <option value="all">"All mounting types"</option>
                    <option value="rooftop">"Rooftop"</option>
                    <option value="ground-mounted">"Ground-mounted"</option>
                </select>
                <select on:change=move |ev| set_monitoring.set(event_target_value(&ev))>
                    <option value="all">"All monitoring systems"</option>
                    {move || {
                        monitoring_systems(stations.read().as_deref())
                            .into_iter()
                            .map(|system| view! {
                                <option value=system.clone()>{system}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <Suspense fallback=move || view! { <p>"Loading stations…"</p> }>
                {move || {
                    stations.read().as_deref().map(|result| match result {
                        Ok(list) => {
                            let matched: Vec<Station> = list
                                .iter()
                                .filter(|station| filter().matches(station))
                                .cloned()
                                .collect();
                            if matched.is_empty() {
                                view! {
                                    <p class="empty-state">"No stations match the filters."</p>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="station-grid">
                                        {matched
                                            .into_iter()
                                            .map(|station| view! { <StationCard station/> })
                                            .collect_view()}
                                    </div>
                                }.into_any()
                            }
                        }
                        Err(err) => view! {
                            <p class="error">{"Failed to load stations: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Distinct monitoring systems present in the loaded list, sorted.
fn monitoring_systems(stations: Option<&Result<Vec<Station>, api::ApiError>>) -> Vec<String> {
    let Some(Ok(list)) = stations else {
        return Vec::new();
    };
    let mut systems: Vec<String> = list.iter().map(|s| s.monitoring_system.clone()).collect();
    systems.sort();
    systems.dedup();
    systems
}
