use std::sync::Arc;

use veristats_core::connector::ConnectorKey;
use veristats_core::{ChainRegistry, VeristatsError};

use crate::Veristats;

impl Veristats {
    /// Fetch the chain metadata lookup and the ordered known-chain list.
    ///
    /// Routing behavior matches [`stats`](Self::stats): per-provider timeout,
    /// priority order or latency race per the configured strategy.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "veristats::router", skip(self))
    )]
    pub async fn chains(&self) -> Result<ChainRegistry, VeristatsError> {
        self.chains_with_source().await.map(|(_, registry)| registry)
    }

    pub(crate) async fn chains_with_source(
        &self,
    ) -> Result<(ConnectorKey, ChainRegistry), VeristatsError> {
        self.fetch_single("chains", "chain listing", |c| {
            c.as_chains_provider()?;
            let c2 = Arc::clone(&c);
            Some(async move {
                match c2.as_chains_provider() {
                    Some(p) => p.chains().await,
                    None => Err(VeristatsError::connector(
                        c2.name(),
                        "missing chains capability during call",
                    )),
                }
            })
        })
        .await
    }
}
