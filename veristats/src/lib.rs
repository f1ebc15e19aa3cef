//! Veristats orchestrates contract-verification stats across multiple data
//! providers and turns them into chart-ready output.
//!
//! Overview
//! - Routes requests to connectors that implement the `veristats_core`
//!   contracts.
//! - Applies an optional priority list to influence provider order.
//! - Supports fallback and latency fetch strategies with per-provider
//!   timeouts.
//! - Runs the pure ranking/aggregation engine over the fetched snapshot and
//!   chain metadata, producing ordered rows, totals, and axis input for any
//!   bar/stacked-bar renderer.
//!
//! Key behaviors and trade-offs
//! - Fetch strategy:
//!   - `PriorityWithFallback`: deterministic order, per-provider timeout,
//!     aggregates errors; fewer concurrent requests but potentially higher
//!     latency.
//!   - `Latency`: races eligible providers; lowest tail latency but higher
//!     request fanout.
//! - Selection: the "selected chain" is caller-owned state passed in per
//!   call and echoed back in the report; the orchestrator holds no
//!   selection state between calls.
//! - Ranking: the selected chain leads, pinned chains follow in pin order
//!   regardless of counts, the remainder sorts by descending verified
//!   total; only the configured top-N rows are kept while totals always
//!   cover the full snapshot.
//!
//! Examples
//! Building an orchestrator and fetching a chart:
//! ```rust,ignore
//! use std::sync::Arc;
//! use veristats::{ChainId, Veristats};
//!
//! let sourcify = Arc::new(veristats_sourcify::SourcifyConnector::new_default());
//!
//! let veristats = Veristats::builder()
//!     .with_connector(sourcify)
//!     .pin_chains(&[ChainId::new(10), ChainId::new(137)])
//!     .build()?;
//!
//! let report = veristats.chart(None).await?;
//! println!("{} contracts verified", report.chart.grand_total);
//! for row in &report.chart.rows {
//!     println!("{:>12}  {}", row.total, row.label.as_deref().unwrap_or("?"));
//! }
//! ```
//!
//! Fetching the raw documents directly:
//! ```rust,ignore
//! let snapshot = veristats.stats().await?;
//! let registry = veristats.chains().await?;
//! ```
//!
//! See `veristats/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Veristats, VeristatsBuilder};

// Re-export core types for convenience
pub use veristats_core::{
    // Engine entry points
    compute_chart,
    format_row,
    grand_total,
    rank_chains,
    rounded_ceiling,
    selected_total,

    // Foundational types
    Capability,
    Chain,
    ChainId,
    ChainRegistry,
    ChartConfig,
    ChartData,
    ChartReport,
    ChartRow,
    ConnectorKey,
    FetchStrategy,
    StatsConnector,
    StatsSnapshot,
    VeristatsConfig,
    VeristatsError,
    VerifiedCounts,

    DEFAULT_TOP_CHAINS,
};
