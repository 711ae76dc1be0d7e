//! # heliodash-domain
//!
//! Pure domain model for the heliodash solar-station monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed station identifiers, error conventions, calendar dates
//! - Define **Stations** (one generation site with fixed metadata: capacity, panels, inverters, …)
//! - Define **Production** value objects (daily readings, per-station series, the available date bound)
//! - Define **Statistics** (fleet-wide aggregates derived from a station list)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod production;
pub mod station;
pub mod statistics;
