//! Production chart — canvas line chart drawn with `plotters`.

use leptos::prelude::*;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;

use heliodash_app::chart::ChartDataset;
use heliodash_app::ports::ChartRenderer;
use heliodash_domain::time::ProductionDate;

/// Chart-ready contents: the shared date axis and one dataset per station.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub categories: Vec<ProductionDate>,
    pub datasets: Vec<ChartDataset>,
}

/// [`ChartRenderer`] that publishes into a reactive signal.
///
/// The controller stays presentation-agnostic; the canvas component watches
/// the signal and redraws.
#[derive(Debug, Clone, Copy)]
pub struct SignalRenderer {
    view: RwSignal<Option<ChartView>>,
}

impl SignalRenderer {
    /// Wrap the signal the chart component watches.
    #[must_use]
    pub fn new(view: RwSignal<Option<ChartView>>) -> Self {
        Self { view }
    }
}

impl ChartRenderer for SignalRenderer {
    fn set_data(&mut self, categories: Vec<ProductionDate>, datasets: Vec<ChartDataset>) {
        self.view.set(Some(ChartView {
            categories,
            datasets,
        }));
    }

    fn clear(&mut self) {
        self.view.set(None);
    }
}

/// Parse a `#rrggbb` palette entry; unparseable input falls back to grey.
fn parse_hex_color(hex: &str) -> RGBColor {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return RGBColor(128, 128, 128);
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => RGBColor(r, g, b),
        _ => RGBColor(128, 128, 128),
    }
}

/// Draw the chart, or a blank surface when there is nothing to show.
fn draw_chart(
    canvas: HtmlCanvasElement,
    view: Option<&ChartView>,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend =
        CanvasBackend::with_canvas_object(canvas).ok_or("canvas 2d context unavailable")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let Some(view) = view else {
        root.present()?;
        return Ok(());
    };
    let (Some(&first), Some(&last)) = (view.categories.first(), view.categories.last()) else {
        root.present()?;
        return Ok(());
    };

    let y_max = view
        .datasets
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(56)
        .build_cartesian_2d(first..last, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Production (kWh)")
        .x_labels(8)
        .x_label_formatter(&|date| date.format("%Y-%m-%d").to_string())
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()?;

    for dataset in &view.datasets {
        let color = parse_hex_color(&dataset.color);
        chart
            .draw_series(LineSeries::new(
                view.categories
                    .iter()
                    .copied()
                    .zip(dataset.values.iter().copied()),
                color.stroke_width(2),
            ))?
            .label(dataset.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.2))
        .background_style(WHITE.mix(0.9))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Canvas component that redraws whenever the chart view signal changes.
#[component]
pub fn ProductionChart(
    /// The chart contents published by the controller's renderer.
    view: RwSignal<Option<ChartView>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move |_| {
        let current = view.get();
        if let Some(canvas) = canvas_ref.get() {
            if let Err(err) = draw_chart(canvas, current.as_ref()) {
                leptos::logging::error!("chart rendering failed: {err}");
            }
        }
    });

    view! {
        <div class="chart-surface">
            <canvas node_ref=canvas_ref width="960" height="420"></canvas>
        </div>
    }
}
