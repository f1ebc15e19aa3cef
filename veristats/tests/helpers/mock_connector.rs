#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use veristats_core::connector::{ChainsProvider, StatsConnector, StatsProvider};
use veristats_core::{ChainRegistry, StatsSnapshot, VeristatsError};

/// Simple in-memory connector used by integration tests.
/// Tailor behavior (success/fail, capabilities, latency) via fields below.
pub struct MockConnector {
    pub name: &'static str,
    pub stats: Option<StatsSnapshot>,
    pub chains: Option<ChainRegistry>,
    pub delay_ms: u64,

    // Optional closures to customize behavior per test
    pub stats_fn: Option<Arc<dyn Fn() -> Result<StatsSnapshot, VeristatsError> + Send + Sync>>,
    pub chains_fn: Option<Arc<dyn Fn() -> Result<ChainRegistry, VeristatsError> + Send + Sync>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            stats: None,
            chains: None,
            delay_ms: 0,
            stats_fn: None,
            chains_fn: None,
        }
    }
}

impl MockConnector {
    async fn maybe_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl StatsProvider for MockConnector {
    async fn stats(&self) -> Result<StatsSnapshot, VeristatsError> {
        self.maybe_delay().await;
        if let Some(f) = &self.stats_fn {
            return f();
        }
        self.stats
            .clone()
            .ok_or_else(|| VeristatsError::not_found("stats document"))
    }
}

#[async_trait]
impl ChainsProvider for MockConnector {
    async fn chains(&self) -> Result<ChainRegistry, VeristatsError> {
        self.maybe_delay().await;
        if let Some(f) = &self.chains_fn {
            return f();
        }
        self.chains
            .clone()
            .ok_or_else(|| VeristatsError::not_found("chain listing"))
    }
}

impl StatsConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_stats_provider(&self) -> Option<&dyn StatsProvider> {
        if self.stats.is_some() || self.stats_fn.is_some() {
            Some(self as &dyn StatsProvider)
        } else {
            None
        }
    }

    fn as_chains_provider(&self) -> Option<&dyn ChainsProvider> {
        if self.chains.is_some() || self.chains_fn.is_some() {
            Some(self as &dyn ChainsProvider)
        } else {
            None
        }
    }
}

/// Connector serving only the stats capability.
pub fn m_stats(name: &'static str, stats: StatsSnapshot) -> Arc<dyn StatsConnector> {
    Arc::new(MockConnector {
        name,
        stats: Some(stats),
        ..MockConnector::default()
    })
}

/// Connector serving only the chains capability.
pub fn m_chains(name: &'static str, chains: ChainRegistry) -> Arc<dyn StatsConnector> {
    Arc::new(MockConnector {
        name,
        chains: Some(chains),
        ..MockConnector::default()
    })
}

/// Connector serving both capabilities.
pub fn m_stats_chains(
    name: &'static str,
    stats: StatsSnapshot,
    chains: ChainRegistry,
) -> Arc<dyn StatsConnector> {
    Arc::new(MockConnector {
        name,
        stats: Some(stats),
        chains: Some(chains),
        ..MockConnector::default()
    })
}

/// Connector advertising both capabilities but failing every call.
pub fn m_fail(name: &'static str) -> Arc<dyn StatsConnector> {
    let fail_stats = move || Err(VeristatsError::connector(name, "forced failure"));
    let fail_chains = move || Err(VeristatsError::connector(name, "forced failure"));
    Arc::new(MockConnector {
        name,
        stats_fn: Some(Arc::new(fail_stats)),
        chains_fn: Some(Arc::new(fail_chains)),
        ..MockConnector::default()
    })
}
