use std::cmp::Reverse;

use veristats_types::{ChainId, ChainRegistry, ChartRow, StatsSnapshot};

/// Format one chain into a chart row.
///
/// - Label resolution prefers the chain's short `name`, falling back to its
///   `title`; a chain unknown to the registry yields `label: None`.
/// - A chain absent from the snapshot resolves to zero counts; the formatter
///   is total on its key domain and never fails.
#[must_use]
pub fn format_row(id: ChainId, snapshot: &StatsSnapshot, chains: &ChainRegistry) -> ChartRow {
    let counts = snapshot.counts(id);
    ChartRow {
        id,
        label: chains.label(id).map(str::to_owned),
        full_match: counts.full_match,
        partial_match: counts.partial_match,
        total: counts.total(),
    }
}

/// Order the snapshot's chains for display and truncate to `limit`.
///
/// Ordering is a strict total order:
/// 1. `selected` sorts first, ahead of every other chain. It occupies the
///    first slot even when absent from the snapshot (it then renders with
///    zero counts via [`format_row`]).
/// 2. Chains in `pinned` come next, in pin-list order regardless of their
///    counts. A pinned `selected` is not repeated here, and pinned chains
///    absent from the snapshot are not synthesized.
/// 3. The remainder sorts by descending combined count; equal totals keep
///    ascending chain id order (the snapshot's iteration order, preserved
///    by the stable sort).
///
/// Chains beyond `limit` are dropped from the chart but still contribute to
/// [`grand_total`](crate::chart::grand_total).
#[must_use]
pub fn rank_chains(
    snapshot: &StatsSnapshot,
    selected: ChainId,
    pinned: &[ChainId],
    limit: usize,
) -> Vec<ChainId> {
    let mut ordered = Vec::with_capacity(snapshot.len() + 1);
    ordered.push(selected);

    for &pin in pinned {
        if pin != selected && snapshot.contains(pin) && !ordered.contains(&pin) {
            ordered.push(pin);
        }
    }

    let mut rest: Vec<ChainId> = snapshot
        .chain_ids()
        .filter(|id| *id != selected && !pinned.contains(id))
        .collect();
    rest.sort_by_key(|id| Reverse(snapshot.counts(*id).total()));
    ordered.extend(rest);

    ordered.truncate(limit);
    ordered
}
