//! Re-export of foundational types from `veristats-types`.
// Consolidated re-exports so downstream crates can depend on `veristats-core` only

pub use veristats_types::{Capability, VeristatsError};

pub use veristats_types::ConnectorKey;
pub use veristats_types::{Chain, ChainId, ChainRegistry};
pub use veristats_types::{ChartConfig, DEFAULT_TOP_CHAINS, FetchStrategy, VeristatsConfig};
pub use veristats_types::{ChartData, ChartReport, ChartRow};
pub use veristats_types::{StatsSnapshot, VerifiedCounts};
