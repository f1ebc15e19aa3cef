use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use veristats_core::connector::ConnectorKey;
use veristats_core::{ChainId, FetchStrategy, StatsConnector, VeristatsConfig, VeristatsError};

/// Orchestrator that routes requests across registered providers.
pub struct Veristats {
    pub(crate) connectors: Vec<Arc<dyn StatsConnector>>,
    pub(crate) cfg: VeristatsConfig,
}

impl std::fmt::Debug for Veristats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `StatsConnector` is not `Debug`; expose the stable connector names
        // rather than the trait objects themselves.
        f.debug_struct("Veristats")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Veristats` orchestrator with custom configuration.
pub struct VeristatsBuilder {
    connectors: Vec<Arc<dyn StatsConnector>>,
    cfg: VeristatsConfig,
}

impl Default for VeristatsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VeristatsBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults are conservative: top-10 chart, no pinned chains, Ethereum
    ///   as the default selection, priority-with-fallback fetches, 5s
    ///   provider timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: VeristatsConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - The order in which you register connectors is used when no explicit
    ///   priority list is set via [`prefer`](Self::prefer).
    /// - Multiple connectors can support the same capability; the
    ///   orchestrator routes based on priority and the fetch strategy.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn StatsConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the preferred provider order using connector instances.
    ///
    /// Influences ordering among registered providers; it does not filter
    /// out unlisted connectors (they remain after the listed ones, in
    /// registration order). Unknown keys are dropped during `build()`.
    #[must_use]
    pub fn prefer(mut self, connectors_desc: &[Arc<dyn StatsConnector>]) -> Self {
        self.cfg.priority = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self
    }

    /// Set the maximum number of chart rows (default 10).
    ///
    /// Chains beyond the limit are dropped from the chart but still count
    /// toward the grand total.
    #[must_use]
    pub fn top_chains(mut self, limit: usize) -> Self {
        self.cfg.chart.limit = limit;
        self
    }

    /// Pin chains to fixed display priority, in the given order.
    ///
    /// Pinned chains sort directly after the selected chain regardless of
    /// their verification counts.
    #[must_use]
    pub fn pin_chains(mut self, pinned: &[ChainId]) -> Self {
        self.cfg.chart.pinned = pinned.to_vec();
        self
    }

    /// Set the chain shown first when the caller supplies no selection
    /// (default: Ethereum).
    #[must_use]
    pub const fn default_chain(mut self, chain: ChainId) -> Self {
        self.cfg.chart.default_selected = chain;
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// Behavior and trade-offs:
    /// - `PriorityWithFallback`: deterministic order, applies per-provider
    ///   timeout, aggregates errors; may be slower but predictable and
    ///   economical on rate limits.
    /// - `Latency`: race all eligible providers and return the first
    ///   success; fastest typical latency but higher request fanout.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall request timeout for aggregate operations (the combined
    /// snapshot + chains fetch behind [`Veristats::chart`]).
    ///
    /// When exceeded, returns a `RequestTimeout` error for the capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Veristats` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(mut self) -> Result<Veristats, VeristatsError> {
        // Validate priority keys against registered connectors; drop unknowns and dedup.
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();

        let mut priority: Vec<ConnectorKey> = Vec::new();
        let mut seen: std::collections::HashSet<&'static str> = std::collections::HashSet::new();
        for k in self.cfg.priority.iter().copied() {
            let n = k.as_str();
            if known.contains(n) && seen.insert(n) {
                priority.push(k);
            }
        }
        self.cfg.priority = priority;

        if self.connectors.is_empty() {
            return Err(VeristatsError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Veristats {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub fn tag_err(connector: &str, e: VeristatsError) -> VeristatsError {
    match e {
        e @ (VeristatsError::NotFound { .. }
        | VeristatsError::ProviderTimeout { .. }
        | VeristatsError::Connector { .. }
        | VeristatsError::RequestTimeout { .. }
        | VeristatsError::AllProvidersTimedOut { .. }
        | VeristatsError::AllProvidersFailed(_)) => e,
        other => VeristatsError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Veristats {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "veristats::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, VeristatsError>
    where
        Fut: core::future::Future<Output = Result<T, VeristatsError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(VeristatsError::provider_timeout(connector_name, capability)))
    }

    /// Start building a new `Veristats` instance.
    ///
    /// Typical usage chains provider registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use veristats_core::ChainId;
    ///
    /// let sourcify = Arc::new(veristats_sourcify::SourcifyConnector::new_default());
    ///
    /// let veristats = veristats::Veristats::builder()
    ///     .with_connector(sourcify)
    ///     .pin_chains(&[ChainId::new(10), ChainId::new(137)])
    ///     .top_chains(10)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> VeristatsBuilder {
        VeristatsBuilder::new()
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn StatsConnector>> {
        let mut out: Vec<(usize, Arc<dyn StatsConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if self.cfg.priority.is_empty() {
            return out.into_iter().map(|(_, c)| c).collect();
        }

        let pos: HashMap<_, _> = self
            .cfg
            .priority
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        out.sort_by_key(|(orig_i, c)| (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i));
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-document fetch helper.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies per-provider timeout in both modes
    /// - Aggregates errors and treats `NotFound` specially in fallback mode
    /// - In latency mode, returns the first success; if all attempted
    ///   providers fail, aggregates and returns `AllProvidersFailed`; if no
    ///   providers support the capability, returns a capability error
    ///
    /// On success, returns the serving connector's key alongside the payload
    /// so aggregate reports can attribute their inputs.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "veristats::core::fetch_single",
            skip(self, call),
            fields(capability = %capability_label, not_found = %not_found_label),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        capability_label: &'static str,
        not_found_label: &'static str,
        call: F,
    ) -> Result<(ConnectorKey, T), VeristatsError>
    where
        T: Send,
        F: Fn(Arc<dyn StatsConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, VeristatsError>> + Send,
    {
        match self.cfg.fetch_strategy {
            FetchStrategy::PriorityWithFallback => {
                self.fetch_single_priority_with_fallback(capability_label, not_found_label, call)
                    .await
            }
            FetchStrategy::Latency => {
                self.fetch_single_latency(capability_label, not_found_label, call)
                    .await
            }
            // `FetchStrategy` is `#[non_exhaustive]`, so a wildcard is required
            // across the crate boundary even though all current variants are
            // handled above.
            _ => unreachable!("unhandled FetchStrategy variant"),
        }
    }

    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        capability_label: &'static str,
        not_found_label: &'static str,
        call: F,
    ) -> Result<(ConnectorKey, T), VeristatsError>
    where
        T: Send,
        F: Fn(Arc<dyn StatsConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, VeristatsError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<VeristatsError> = Vec::new();

        for c in self.ordered() {
            let key = c.key();
            if let Some(fut) = call(c.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability_label,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok((key, v)),
                    Err(e @ (VeristatsError::NotFound { .. }
                    | VeristatsError::ProviderTimeout { .. })) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        if !attempted_any {
            return Err(VeristatsError::unsupported(capability_label));
        }

        Err(collapse_errors(errors, capability_label, not_found_label))
    }

    async fn fetch_single_latency<T, F, Fut>(
        &self,
        capability_label: &'static str,
        not_found_label: &'static str,
        call: F,
    ) -> Result<(ConnectorKey, T), VeristatsError>
    where
        T: Send,
        F: Fn(Arc<dyn StatsConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, VeristatsError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        let mut attempted_any = false;
        for c in self.ordered() {
            let key = c.key();
            if let Some(fut) = call(c.clone()) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        key,
                        Self::provider_call_with_timeout(name, capability_label, timeout, fut)
                            .await,
                    )
                });
                attempted_any = true;
            }
        }

        if !attempted_any {
            return Err(VeristatsError::unsupported(capability_label));
        }

        let mut errors: Vec<VeristatsError> = Vec::new();
        while let Some((name, key, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok((key, v)),
                Err(e @ (VeristatsError::ProviderTimeout { .. }
                | VeristatsError::NotFound { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(collapse_errors(errors, capability_label, not_found_label))
    }
}

/// Collapse per-provider failures into a single error: all-not-found and
/// all-timed-out become their dedicated variants, anything mixed aggregates.
fn collapse_errors(
    errors: Vec<VeristatsError>,
    capability_label: &'static str,
    not_found_label: &'static str,
) -> VeristatsError {
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, VeristatsError::NotFound { .. }))
    {
        return VeristatsError::not_found(not_found_label.to_string());
    }

    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, VeristatsError::ProviderTimeout { .. }))
    {
        VeristatsError::AllProvidersTimedOut {
            capability: capability_label,
        }
    } else {
        VeristatsError::AllProvidersFailed(errors)
    }
}
