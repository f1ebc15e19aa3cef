use async_trait::async_trait;

use crate::VeristatsError;
pub use veristats_types::ConnectorKey;
use veristats_types::{ChainRegistry, StatsSnapshot};

/// Focused role trait for connectors that provide verification count snapshots.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch the per-chain verification count snapshot.
    ///
    /// The snapshot is fetched whole, once per refresh cycle; providers do
    /// not stream increments.
    async fn stats(&self) -> Result<StatsSnapshot, VeristatsError>;
}

/// Focused role trait for connectors that provide chain metadata.
#[async_trait]
pub trait ChainsProvider: Send + Sync {
    /// Fetch the chain metadata lookup and the ordered known-chain list.
    async fn chains(&self) -> Result<ChainRegistry, VeristatsError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait StatsConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "veristats-sourcify").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    ///
    /// Use this helper when configuring priority lists.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise stats capability by returning a usable trait object reference when supported.
    fn as_stats_provider(&self) -> Option<&dyn StatsProvider> {
        None
    }

    /// Advertise chains capability by returning a usable trait object reference when supported.
    fn as_chains_provider(&self) -> Option<&dyn ChainsProvider> {
        None
    }
}
