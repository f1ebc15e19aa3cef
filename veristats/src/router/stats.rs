use std::sync::Arc;

use veristats_core::connector::ConnectorKey;
use veristats_core::{StatsSnapshot, VeristatsError};

use crate::Veristats;

impl Veristats {
    /// Fetch the per-chain verification count snapshot.
    ///
    /// Behavior and trade-offs:
    /// - Honors the builder's `FetchStrategy`: `PriorityWithFallback` applies
    ///   the per-provider timeout and aggregates errors; `Latency` races
    ///   providers and returns the first success.
    /// - One-shot: the snapshot is fetched whole, with no polling or retry;
    ///   a failed fetch surfaces as an error and the caller decides whether
    ///   to stay in its pending state.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "veristats::router", skip(self))
    )]
    pub async fn stats(&self) -> Result<StatsSnapshot, VeristatsError> {
        self.stats_with_source().await.map(|(_, snapshot)| snapshot)
    }

    pub(crate) async fn stats_with_source(
        &self,
    ) -> Result<(ConnectorKey, StatsSnapshot), VeristatsError> {
        self.fetch_single("stats", "stats document", |c| {
            c.as_stats_provider()?;
            let c2 = Arc::clone(&c);
            Some(async move {
                match c2.as_stats_provider() {
                    Some(p) => p.stats().await,
                    None => Err(VeristatsError::connector(
                        c2.name(),
                        "missing stats capability during call",
                    )),
                }
            })
        })
        .await
    }
}
