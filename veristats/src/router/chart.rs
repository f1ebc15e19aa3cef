use veristats_core::{ChainId, ChartReport, VeristatsError, compute_chart};

use crate::Veristats;

impl Veristats {
    /// Produce the ranked, bounded, chart-ready dataset for one refresh cycle.
    ///
    /// Behavior and trade-offs:
    /// - Fetches the verification snapshot and the chain listing
    ///   concurrently; each document is routed independently, so they may be
    ///   served by different connectors (the report attributes both).
    /// - `selected` is the caller-owned selection state; `None` falls back
    ///   to the configured default chain. The returned report echoes the
    ///   effective selection so the caller can persist it.
    /// - Ranking, truncation, and totals are computed locally by the pure
    ///   engine; a renderer never needs to re-derive them.
    /// - When a request timeout is configured, it bounds the combined fetch.
    ///
    /// # Errors
    /// Returns an error if either document cannot be fetched from any
    /// eligible provider, or on overall request timeout.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "veristats::router",
            skip(self),
            fields(selected = ?selected),
        )
    )]
    pub async fn chart(&self, selected: Option<ChainId>) -> Result<ChartReport, VeristatsError> {
        let selected = selected.unwrap_or(self.cfg.chart.default_selected);

        let fetch = futures::future::try_join(self.stats_with_source(), self.chains_with_source());
        let ((stats_source, snapshot), (chains_source, registry)) = match self.cfg.request_timeout {
            Some(deadline) => tokio::time::timeout(deadline, fetch)
                .await
                .map_err(|_| VeristatsError::request_timeout("chart"))??,
            None => fetch.await?,
        };

        let chart = compute_chart(&snapshot, &registry, selected, &self.cfg.chart);
        Ok(ChartReport {
            chart,
            stats_source,
            chains_source,
        })
    }
}
