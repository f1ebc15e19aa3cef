use std::time::Duration;

use async_trait::async_trait;
use veristats_core::connector::{ChainsProvider, StatsConnector, StatsProvider};
use veristats_core::{ChainRegistry, StatsSnapshot, VeristatsError};

mod fixtures;

/// Behavior of the mock connector for a given call.
#[derive(Debug, Clone, Copy, Default)]
enum Mode {
    /// Serve the deterministic fixtures.
    #[default]
    Fixtures,
    /// Fail every call with a connector error.
    Fail,
    /// Sleep before serving fixtures; the orchestrator may time out first.
    Delay(Duration),
}

/// Mock connector for CI-safe examples and router tests. Provides
/// deterministic data from static fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockConnector {
    mode: Mode,
}

impl MockConnector {
    /// Connector serving the fixture snapshot and chain registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: Mode::Fixtures,
        }
    }

    /// Connector that fails every call, for fallback/error-path tests.
    #[must_use]
    pub const fn failing() -> Self {
        Self { mode: Mode::Fail }
    }

    /// Connector that sleeps before answering, for timeout tests.
    #[must_use]
    pub const fn delayed(delay: Duration) -> Self {
        Self {
            mode: Mode::Delay(delay),
        }
    }

    async fn gate(&self, capability: &'static str) -> Result<(), VeristatsError> {
        match self.mode {
            Mode::Fixtures => Ok(()),
            Mode::Fail => Err(VeristatsError::connector(
                "veristats-mock",
                format!("forced failure: {capability}"),
            )),
            Mode::Delay(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl StatsProvider for MockConnector {
    async fn stats(&self) -> Result<StatsSnapshot, VeristatsError> {
        self.gate("stats").await?;
        Ok(fixtures::stats::snapshot())
    }
}

#[async_trait]
impl ChainsProvider for MockConnector {
    async fn chains(&self) -> Result<ChainRegistry, VeristatsError> {
        self.gate("chains").await?;
        Ok(fixtures::chains::registry())
    }
}

impl StatsConnector for MockConnector {
    fn name(&self) -> &'static str {
        "veristats-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_stats_provider(&self) -> Option<&dyn StatsProvider> {
        Some(self as &dyn StatsProvider)
    }

    fn as_chains_provider(&self) -> Option<&dyn ChainsProvider> {
        Some(self as &dyn ChainsProvider)
    }
}
