//! Capability labels used for routing and error reporting.

use std::fmt;

/// The capabilities a connector can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Per-chain verification count snapshot.
    Stats,
    /// Chain metadata listing.
    Chains,
}

impl Capability {
    /// Static label used in error messages and tracing fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Chains => "chains",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
