//! Report envelopes produced by the orchestrator.

use serde::Serialize;

use crate::chart::ChartData;
use crate::connector::ConnectorKey;

/// Result of a full chart refresh: the engine output plus the provenance
/// of each input document.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    /// Ranked, bounded, chart-ready dataset.
    pub chart: ChartData,
    /// Connector that served the verification count snapshot.
    pub stats_source: ConnectorKey,
    /// Connector that served the chain metadata listing.
    pub chains_source: ConnectorKey,
}
