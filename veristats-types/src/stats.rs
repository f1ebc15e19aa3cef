//! Raw verification-count snapshot types.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::chain::ChainId;

/// Verification counts for a single chain.
///
/// `full_match`: submitted source reproduces the on-chain bytecode exactly.
/// `partial_match`: matching behavior with differing metadata.
///
/// Counts are unsigned; a document carrying negative or fractional values
/// fails deserialization instead of propagating garbage into sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedCounts {
    /// Exact bytecode matches.
    pub full_match: u64,
    /// Behavior matches with differing metadata.
    pub partial_match: u64,
}

impl VerifiedCounts {
    /// Construct from the two match counts.
    #[must_use]
    pub const fn new(full_match: u64, partial_match: u64) -> Self {
        Self {
            full_match,
            partial_match,
        }
    }

    /// Combined verification count.
    #[must_use]
    pub const fn total(self) -> u64 {
        self.full_match + self.partial_match
    }
}

/// Per-chain verification count snapshot, keyed by chain id.
///
/// Received whole once per refresh cycle; consumers recompute all derived
/// data from scratch on every call, so no derived state is cached here.
/// Iteration order is ascending chain id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsSnapshot(BTreeMap<ChainId, VerifiedCounts>);

impl StatsSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts for a chain; a chain absent from the snapshot resolves to
    /// zero counts rather than failing.
    #[must_use]
    pub fn counts(&self, id: ChainId) -> VerifiedCounts {
        self.0.get(&id).copied().unwrap_or_default()
    }

    /// Counts for a chain, if present.
    #[must_use]
    pub fn get(&self, id: ChainId) -> Option<VerifiedCounts> {
        self.0.get(&id).copied()
    }

    /// Whether the snapshot carries an entry for the chain.
    #[must_use]
    pub fn contains(&self, id: ChainId) -> bool {
        self.0.contains_key(&id)
    }

    /// Insert or replace the counts for a chain.
    pub fn insert(&mut self, id: ChainId, counts: VerifiedCounts) {
        self.0.insert(id, counts);
    }

    /// Number of chains in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(chain, counts)` pairs in ascending chain id order.
    pub fn iter(&self) -> impl Iterator<Item = (ChainId, VerifiedCounts)> + '_ {
        self.0.iter().map(|(id, counts)| (*id, *counts))
    }

    /// Iterate over chain ids in ascending order.
    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(ChainId, VerifiedCounts)> for StatsSnapshot {
    fn from_iter<I: IntoIterator<Item = (ChainId, VerifiedCounts)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StatsSnapshot {
    type Item = (ChainId, VerifiedCounts);
    type IntoIter = btree_map::IntoIter<ChainId, VerifiedCounts>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
