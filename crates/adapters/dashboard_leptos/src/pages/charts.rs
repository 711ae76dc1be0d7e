use leptos::prelude::*;
use leptos::task::spawn_local;

use heliodash_app::chart::Period;
use heliodash_app::dashboard::{DashboardController, Phase};
use heliodash_app::ports::ProductionProvider;
use heliodash_domain::id::StationId;
use heliodash_domain::production::DateBound;
use heliodash_domain::station::Station;
use heliodash_domain::time::{ProductionDate, format_date};

use crate::api::ApiClient;
use crate::components::{
    ChartView, PeriodSelector, ProductionChart, SignalRenderer, StationPicker,
};

/// Charts page: station picker, period controls, and the production chart.
///
/// The page owns a [`DashboardController`] in non-reactive storage and
/// mirrors the pieces of its state the view needs into signals after every
/// controller interaction. Fetches run through the controller's split-phase
/// refresh so a superseded response can never overwrite a newer one.
#[component]
pub fn Charts() -> impl IntoView {
    let chart_view = RwSignal::new(None::<ChartView>);
    let controller = StoredValue::new(DashboardController::new(SignalRenderer::new(chart_view)));

    let (stations, set_stations) = signal(Vec::<Station>::new());
    let (selection, set_selection) = signal(Vec::<StationId>::new());
    let (phase, set_phase) = signal(Phase::Empty);
    let (period, set_period) = signal(Period::default());
    let (bound, set_bound) = signal(None::<DateBound>);
    let (window_range, set_window_range) = signal(None::<(ProductionDate, ProductionDate)>);
    let (init_error, set_init_error) = signal(None::<String>);
    let (range_error, set_range_error) = signal(None::<String>);

    let sync_ui = move || {
        controller.with_value(|c| {
            set_selection.set(c.selection().to_vec());
            set_phase.set(c.phase());
            set_period.set(c.period());
            set_bound.set(c.bound());
            set_window_range.set(c.resolved_range().ok());
        });
    };

    let refresh = move || {
        let Some(begin) = controller.try_update_value(|c| c.begin_refresh()) else {
            return;
        };
        match begin {
            Ok(Some(request)) => {
                sync_ui();
                spawn_local(async move {
                    let result = ApiClient
                        .production(&request.station_ids, request.start, request.end)
                        .await;
                    controller.update_value(|c| {
                        c.complete_refresh(request.generation, result);
                    });
                    sync_ui();
                });
            }
            Ok(None) => sync_ui(),
            Err(err) => leptos::logging::warn!("refresh not started: {err}"),
        }
    };

    // One-shot metadata load; the picker and date inputs stay empty until
    // both fetches resolve.
    spawn_local(async move {
        let bound = ApiClient.date_bound().await;
        let station_list = ApiClient.stations().await;
        match (bound, station_list) {
            (Ok(bound), Ok(list)) => {
                controller.update_value(|c| c.load_metadata(bound, list.clone()));
                set_stations.set(list);
                sync_ui();
            }
            (Err(err), _) | (_, Err(err)) => set_init_error.set(Some(err.to_string())),
        }
    });

    let on_toggle = move |id: StationId| {
        controller.update_value(|c| c.toggle_station(id));
        refresh();
    };
    let on_select_all = move |()| {
        controller.update_value(DashboardController::select_all);
        refresh();
    };
    let on_clear = move |()| {
        controller.update_value(DashboardController::clear_selection);
        sync_ui();
    };
    let on_preset = move |days: u32| {
        set_range_error.set(None);
        controller.update_value(|c| c.set_period_days(days));
        refresh();
    };
    let on_custom = move |(start, end): (ProductionDate, ProductionDate)| {
        let Some(applied) = controller.try_update_value(|c| c.apply_custom_range(start, end))
        else {
            return;
        };
        match applied {
            Ok(()) => {
                set_range_error.set(None);
                refresh();
            }
            Err(err) => set_range_error.set(Some(err.to_string())),
        }
    };
    let on_export = move |_| {
        let Some(Ok(url)) = controller.try_with_value(DashboardController::export_url) else {
            return;
        };
        if let Err(err) = window().location().set_href(&url) {
            leptos::logging::error!("export navigation failed: {err:?}");
        }
    };

    let status = move || match phase.get() {
        Phase::Empty => "Select stations to display data".to_owned(),
        Phase::Loading => "Loading production data…".to_owned(),
        Phase::Displayed => {
            let count = selection.get().len();
            window_range.get().map_or_else(
                || format!("Stations: {count}"),
                |(start, end)| {
                    format!(
                        "Stations: {count} | Period: {} – {}",
                        format_date(start),
                        format_date(end)
                    )
                },
            )
        }
        Phase::Error(message) => {
            format!("Failed to load data: {message} (showing last loaded chart)")
        }
    };

    view! {
        <div class="charts-page">
            <h1>"Production charts"</h1>

            <Show when=move || init_error.get().is_some()>
                <p class="error">
                    {"Failed to load dashboard metadata: "}
                    {move || init_error.get().unwrap_or_default()}
                </p>
            </Show>

            <div class="charts-layout">
                <aside class="charts-sidebar">
                    <h2>"Stations"</h2>
                    <StationPicker
                        stations=stations
                        selected=selection
                        on_toggle=on_toggle
                        on_select_all=on_select_all
                        on_clear=on_clear
                    />
                </aside>

                <section class="charts-main">
                    <PeriodSelector
                        period=period
                        bound=bound
                        on_preset=on_preset
                        on_custom=on_custom
                    />
                    <Show when=move || range_error.get().is_some()>
                        <p class="error">{move || range_error.get().unwrap_or_default()}</p>
                    </Show>

                    <p class="chart-status">{status}</p>
                    <ProductionChart view=chart_view/>

                    <button
                        class="export-btn"
                        prop:disabled=move || selection.get().is_empty()
                        on:click=on_export
                    >
                        "Export CSV"
                    </button>
                </section>
            </div>
        </div>
    }
}
