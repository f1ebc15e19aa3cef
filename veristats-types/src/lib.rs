//! Veristats-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod chain;
mod chart;
mod config;
mod connector;
mod error;
mod reports;
mod stats;

pub use capability::Capability;
pub use chain::{Chain, ChainId, ChainRegistry};
pub use chart::{ChartData, ChartRow};
pub use config::{ChartConfig, DEFAULT_TOP_CHAINS, FetchStrategy, VeristatsConfig};
pub use connector::ConnectorKey;
pub use error::VeristatsError;
pub use reports::ChartReport;
pub use stats::{StatsSnapshot, VerifiedCounts};
