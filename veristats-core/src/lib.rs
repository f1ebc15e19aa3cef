//! veristats-core
//!
//! Core types, traits, and the chart engine shared across the veristats
//! ecosystem.
//!
//! - `types`: common data structures (snapshots, chains, chart rows, config).
//! - `connector`: the `StatsConnector` trait and capability provider traits.
//! - `chart`: the pure ranking/aggregation engine that turns a snapshot into
//!   chart-ready output.
//!
//! The engine in `chart` is synchronous and stateless: every call takes its
//! full input and returns a fresh result, so repeated or concurrent
//! invocation with different inputs never interferes. Only the connector
//! boundary is asynchronous.
#![warn(missing_docs)]

/// The pure chart ranking/aggregation engine.
pub mod chart;
/// Connector capability traits and the primary `StatsConnector` interface.
pub mod connector;
pub mod types;

pub use chart::{
    compute_chart, format_row, grand_total, rank_chains, rounded_ceiling, selected_total,
};
pub use connector::StatsConnector;
pub use types::*;
