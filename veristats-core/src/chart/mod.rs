//! Chart engine: ranking, aggregation, and axis utilities.
//!
//! Pure functions over an in-memory snapshot. The engine owns no state; the
//! currently selected chain is an input supplied by the caller, and every
//! call recomputes its output from scratch.

/// Axis ceiling rounding for value axes.
pub mod axis;
/// Row formatting and chain ranking/selection.
pub mod rank;
/// Aggregate totals over the full snapshot.
pub mod totals;

pub use axis::rounded_ceiling;
pub use rank::{format_row, rank_chains};
pub use totals::{grand_total, selected_total};

use veristats_types::{ChainId, ChainRegistry, ChartConfig, ChartData, StatsSnapshot};

/// Compute the full chart dataset for one refresh cycle.
///
/// Ranks the snapshot's chains under the configured pin list and limit (see
/// [`rank_chains`]), formats each retained chain into a row (see
/// [`format_row`]), and attaches the grand and selected totals, which are
/// computed over the *full* snapshot and are unaffected by truncation.
#[must_use]
pub fn compute_chart(
    snapshot: &StatsSnapshot,
    chains: &ChainRegistry,
    selected: ChainId,
    cfg: &ChartConfig,
) -> ChartData {
    let ranked = rank_chains(snapshot, selected, &cfg.pinned, cfg.limit);
    let rows = ranked
        .into_iter()
        .map(|id| format_row(id, snapshot, chains))
        .collect();

    ChartData {
        rows,
        grand_total: grand_total(snapshot),
        selected,
        selected_total: selected_total(snapshot, selected),
    }
}
