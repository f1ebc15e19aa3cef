use veristats_types::{ChainId, StatsSnapshot};

/// Sum of `full_match + partial_match` over **every** chain in the snapshot.
///
/// Unbounded by the chart limit: chains truncated out of the display still
/// count here.
#[must_use]
pub fn grand_total(snapshot: &StatsSnapshot) -> u64 {
    snapshot.iter().map(|(_, counts)| counts.total()).sum()
}

/// Combined verification count of a single chain, zero if absent.
#[must_use]
pub fn selected_total(snapshot: &StatsSnapshot, selected: ChainId) -> u64 {
    snapshot.counts(selected).total()
}
