//! veristats-sourcify
//!
//! Public connector that implements `StatsConnector` on top of the Sourcify
//! repository/server HTTP API. Exposes the verification count snapshot and
//! the chain metadata listing.
#![warn(missing_docs)]

/// Raw HTTP client for the Sourcify endpoints.
pub mod client;

use async_trait::async_trait;
use veristats_core::{
    ChainRegistry, StatsSnapshot, VeristatsError,
    connector::{ChainsProvider, ConnectorKey, StatsConnector, StatsProvider},
};

pub use client::{DEFAULT_REPO_URL, DEFAULT_SERVER_URL, SourcifyClient, SourcifyClientBuilder};

/// Public connector type. Production users will construct with
/// `SourcifyConnector::new_default()`.
pub struct SourcifyConnector {
    client: SourcifyClient,
}

impl SourcifyConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("veristats-sourcify");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data")
    }

    fn normalize_error(e: VeristatsError, what: &str) -> VeristatsError {
        match e {
            VeristatsError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    VeristatsError::not_found(what.to_string())
                } else {
                    VeristatsError::connector("veristats-sourcify", msg)
                }
            }
            VeristatsError::Other(msg) => VeristatsError::connector("veristats-sourcify", msg),
            other => other,
        }
    }

    /// Build with a fresh client against the public Sourcify endpoints.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new_with_client(SourcifyClient::new_default())
    }

    /// Build from an existing [`SourcifyClient`] (custom endpoints, shared
    /// HTTP client).
    #[must_use]
    pub const fn new_with_client(client: SourcifyClient) -> Self {
        Self { client }
    }

    /// Build from a provided `reqwest::Client` against the public endpoints.
    ///
    /// # Errors
    /// Returns an error if the internal client cannot be constructed.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, VeristatsError> {
        let client = SourcifyClient::builder().http_client(http).build()?;
        Ok(Self::new_with_client(client))
    }
}

#[async_trait]
impl StatsProvider for SourcifyConnector {
    async fn stats(&self) -> Result<StatsSnapshot, VeristatsError> {
        self.client
            .stats()
            .await
            .map_err(|e| Self::normalize_error(e, "stats document"))
    }
}

#[async_trait]
impl ChainsProvider for SourcifyConnector {
    async fn chains(&self) -> Result<ChainRegistry, VeristatsError> {
        self.client
            .chains()
            .await
            .map_err(|e| Self::normalize_error(e, "chain listing"))
    }
}

impl StatsConnector for SourcifyConnector {
    fn name(&self) -> &'static str {
        "veristats-sourcify"
    }

    fn vendor(&self) -> &'static str {
        "Sourcify"
    }

    fn as_stats_provider(&self) -> Option<&dyn StatsProvider> {
        Some(self as &dyn StatsProvider)
    }

    fn as_chains_provider(&self) -> Option<&dyn ChainsProvider> {
        Some(self as &dyn ChainsProvider)
    }
}
