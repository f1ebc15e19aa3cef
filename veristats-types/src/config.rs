//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chain::ChainId;
use crate::connector::ConnectorKey;

/// Default number of chains retained for charting.
pub const DEFAULT_TOP_CHAINS: usize = 10;

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Use priority order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// Ranking and truncation parameters for the chart engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Maximum number of rows retained for charting. Chains beyond the
    /// limit are dropped from the chart but still count toward totals.
    pub limit: usize,
    /// Chains given fixed display priority regardless of their counts,
    /// kept in this order among themselves.
    pub pinned: Vec<ChainId>,
    /// Chain occupying the first display slot when the caller supplies
    /// no selection.
    pub default_selected: ChainId,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOP_CHAINS,
            pinned: Vec::new(),
            default_selected: ChainId::ETHEREUM,
        }
    }
}

/// Global configuration for the `Veristats` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeristatsConfig {
    /// Ranking and truncation parameters for chart output.
    pub chart: ChartConfig,
    /// Preferred connector order; unknown keys are rejected during the
    /// orchestrator's build step. Empty means registration order.
    #[serde(skip)]
    pub priority: Vec<ConnectorKey>,
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for operations that aggregate multiple
    /// provider calls (e.g. the combined snapshot + chains fetch).
    pub request_timeout: Option<Duration>,
}

impl Default for VeristatsConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            priority: Vec::new(),
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
