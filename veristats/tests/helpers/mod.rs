#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::{MockConnector, m_chains, m_fail, m_stats, m_stats_chains};

use veristats_core::{Chain, ChainId, ChainRegistry, StatsSnapshot, VerifiedCounts};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Build a snapshot from `(chain, full, partial)` triples.
pub fn snapshot(entries: &[(u64, u64, u64)]) -> StatsSnapshot {
    entries
        .iter()
        .map(|&(chain, full, partial)| (ChainId::new(chain), VerifiedCounts::new(full, partial)))
        .collect()
}

/// Build a registry from `(chain, name, title)` triples.
pub fn registry(entries: &[(u64, Option<&str>, &str)]) -> ChainRegistry {
    entries
        .iter()
        .map(|&(chain, name, title)| Chain {
            id: ChainId::new(chain),
            name: name.map(str::to_owned),
            title: title.to_owned(),
        })
        .collect()
}

/// Registry of the networks used across router tests.
pub fn default_registry() -> ChainRegistry {
    registry(&[
        (1, Some("Ethereum"), "Ethereum Mainnet"),
        (10, Some("Optimism"), "OP Mainnet"),
        (137, Some("Polygon"), "Polygon Mainnet"),
    ])
}

pub const fn id(n: u64) -> ChainId {
    ChainId::new(n)
}
