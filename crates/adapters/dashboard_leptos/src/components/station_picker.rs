//! Station picker — checkbox list controlling the chart selection.

use leptos::prelude::*;

use heliodash_domain::id::StationId;
use heliodash_domain::station::Station;

/// Checkbox list of stations with select-all/clear shortcuts.
///
/// The picker owns no state: the current selection comes in as a signal and
/// every interaction is reported through the callbacks.
#[component]
pub fn StationPicker(
    /// All known stations, in server order.
    #[prop(into)]
    stations: Signal<Vec<Station>>,
    /// The current selection, in toggle order.
    #[prop(into)]
    selected: Signal<Vec<StationId>>,
    /// Called with the station id when a checkbox is toggled.
    #[prop(into)]
    on_toggle: Callback<StationId>,
    /// Called when "Select all" is pressed.
    #[prop(into)]
    on_select_all: Callback<()>,
    /// Called when "Clear" is pressed.
    #[prop(into)]
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="station-picker">
            <div class="picker-actions">
                <button on:click=move |_| on_select_all.run(())>"Select all"</button>
                <button on:click=move |_| on_clear.run(())>"Clear"</button>
            </div>
            <For
                each=move || stations.get()
                key=|station| station.id.clone()
                let(station)
            >
                <StationRow station selected on_toggle/>
            </For>
        </div>
    }
}

/// A single selectable row in the picker.
#[component]
fn StationRow(
    /// The station shown in this row.
    station: Station,
    /// The current selection.
    selected: Signal<Vec<StationId>>,
    /// Toggle callback forwarded from the picker.
    on_toggle: Callback<StationId>,
) -> impl IntoView {
    let id = station.id.clone();
    let is_selected = {
        let id = id.clone();
        move || selected.get().contains(&id)
    };
    let toggle_id = id.clone();

    view! {
        <label class="picker-row" class:selected=is_selected.clone()>
            <input
                type="checkbox"
                prop:checked=is_selected
                on:change=move |_| on_toggle.run(toggle_id.clone())
            />
            <span class="picker-name">{station.name.clone()}</span>
            <span class="picker-location">{station.location.clone()}</span>
        </label>
    }
}
