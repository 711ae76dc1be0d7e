//! # heliodash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProductionProvider` — fetch the date bound, station list, and production series
//!   - `ChartRenderer` — push chart-ready data to a presentation surface
//! - Provide the pure **chart pipeline**:
//!   - `chart::date_range` — resolve a period preset into a start date, clamped to the bound
//!   - `chart::align` — merge sparse per-station series onto a shared date axis
//!   - `chart::project` — map aligned series into renderer-ready datasets
//! - Own the **`DashboardController`** state machine (selection, period,
//!   refresh generations) that drives the pipeline and the renderer
//! - Build backend export links (pure string formatting)
//!
//! ## Dependency rule
//! Depends on `heliodash-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod chart;
pub mod dashboard;
pub mod export;
pub mod ports;
