//! Chart renderer port — the presentation surface the controller pushes to.

use heliodash_domain::time::ProductionDate;

use crate::chart::project::ChartDataset;

/// A rendering sink for the production chart.
///
/// The controller never touches presentation directly; adapters implement
/// this trait on top of whatever surface they draw to (canvas, SVG, a test
/// recorder). Calls are fire-and-forget from the core's perspective.
pub trait ChartRenderer {
    /// Replace the chart contents with a new category axis and datasets.
    fn set_data(&mut self, categories: Vec<ProductionDate>, datasets: Vec<ChartDataset>);

    /// Remove all chart contents.
    fn clear(&mut self);
}
