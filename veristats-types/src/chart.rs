//! Chart-ready output shapes produced by the ranking engine.

use serde::{Deserialize, Serialize};

use crate::chain::ChainId;

/// One bar of the chart: a chain with its resolved label and counts.
///
/// `total` always equals `full_match + partial_match`. `label` is `None`
/// when the chain has no metadata entry; the engine does not invent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Chain this row describes; renderers feed it back as the next selection.
    pub id: ChainId,
    /// Resolved display label, absent for chains unknown to the registry.
    pub label: Option<String>,
    /// Exact bytecode matches.
    pub full_match: u64,
    /// Behavior matches with differing metadata.
    pub partial_match: u64,
    /// `full_match + partial_match`.
    pub total: u64,
}

/// Everything a bar/stacked-bar renderer needs for one refresh cycle.
///
/// `rows` is ordered and bounded by the configured limit; `grand_total`
/// covers the *full* snapshot, not just the displayed subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Ordered chart rows, at most `limit` entries.
    pub rows: Vec<ChartRow>,
    /// Sum of all verification counts across every chain in the snapshot.
    pub grand_total: u64,
    /// The chain occupying the first display slot.
    pub selected: ChainId,
    /// The selected chain's combined count, zero if absent from the snapshot.
    pub selected_total: u64,
}

impl ChartData {
    /// Largest row total, the input to the axis ceiling; zero when no rows.
    #[must_use]
    pub fn max_total(&self) -> u64 {
        self.rows.iter().map(|row| row.total).max().unwrap_or(0)
    }
}
