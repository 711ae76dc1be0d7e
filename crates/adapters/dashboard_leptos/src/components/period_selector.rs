//! Period selector — preset day-count buttons and a custom date range form.

use leptos::prelude::*;

use heliodash_app::chart::{PERIOD_PRESETS, Period};
use heliodash_domain::production::DateBound;
use heliodash_domain::time::{ProductionDate, format_date, parse_date};

/// Period controls: one button per preset plus a custom start/end pair.
///
/// Date parsing happens here; only well-formed pairs reach `on_custom`.
/// Ordering (`start <= end`) is validated again by the controller before any
/// fetch is issued.
#[component]
pub fn PeriodSelector(
    /// The currently active period.
    #[prop(into)]
    period: Signal<Period>,
    /// The available date bound, used for the inputs' min/max attributes.
    #[prop(into)]
    bound: Signal<Option<DateBound>>,
    /// Called with the day count when a preset is pressed.
    #[prop(into)]
    on_preset: Callback<u32>,
    /// Called with the parsed pair when a custom range is applied.
    #[prop(into)]
    on_custom: Callback<(ProductionDate, ProductionDate)>,
) -> impl IntoView {
    let (start_text, set_start_text) = signal(String::new());
    let (end_text, set_end_text) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let min_attr = move || bound.get().map(|b| format_date(b.min)).unwrap_or_default();
    let max_attr = move || bound.get().map(|b| format_date(b.max)).unwrap_or_default();

    let apply_custom = move |_| {
        let start = start_text.get();
        let end = end_text.get();
        if start.is_empty() || end.is_empty() {
            set_form_error.set(Some("Please choose both dates".to_owned()));
            return;
        }
        match (parse_date(&start), parse_date(&end)) {
            (Ok(start), Ok(end)) => {
                set_form_error.set(None);
                on_custom.run((start, end));
            }
            _ => set_form_error.set(Some("Dates must be YYYY-MM-DD".to_owned())),
        }
    };

    view! {
        <div class="period-selector">
            <div class="period-presets">
                {PERIOD_PRESETS
                    .into_iter()
                    .map(|days| {
                        let is_active = move || period.get() == Period::Days(days);
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "period-btn active" } else { "period-btn" }
                                }
                                on:click=move |_| on_preset.run(days)
                            >
                                {format!("{days} d")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="period-custom">
                <input
                    type="date"
                    prop:value=start_text
                    attr:min=min_attr
                    attr:max=max_attr
                    on:input=move |ev| set_start_text.set(event_target_value(&ev))
                />
                <span>"–"</span>
                <input
                    type="date"
                    prop:value=end_text
                    attr:min=min_attr
                    attr:max=max_attr
                    on:input=move |ev| set_end_text.set(event_target_value(&ev))
                />
                <button on:click=apply_custom>"Apply"</button>
            </div>

            <Show when=move || form_error.get().is_some()>
                <p class="error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
