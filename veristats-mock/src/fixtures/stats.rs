use veristats_core::{ChainId, StatsSnapshot, VerifiedCounts};

/// Deterministic snapshot covering the fixture chains plus one chain
/// (31337) that is absent from the fixture registry, so label-less rows
/// are exercised end to end.
#[must_use]
pub fn snapshot() -> StatsSnapshot {
    [
        (1, 120_345, 80_101),
        (10, 9_876, 4_321),
        (100, 7_300, 2_111),
        (137, 55_000, 21_000),
        (8453, 14_200, 6_050),
        (42161, 18_400, 9_900),
        (31337, 12, 3),
    ]
    .into_iter()
    .map(|(id, full, partial)| (ChainId::new(id), VerifiedCounts::new(full, partial)))
    .collect()
}
