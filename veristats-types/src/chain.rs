//! Chain identity and metadata types.

use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a network whose contracts are being tallied.
///
/// Stats documents key chains by string-encoded integers (`"1"`, `"137"`),
/// while chain listings carry plain numbers; both forms deserialize into
/// `ChainId`. Serialization emits the numeric form, which `serde_json`
/// renders as a string when the id is used as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

impl ChainId {
    /// Ethereum mainnet, the reference chain selected by default.
    pub const ETHEREUM: Self = Self(1);

    /// Construct a chain id from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ChainId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

struct ChainIdVisitor;

impl Visitor<'_> for ChainIdVisitor {
    type Value = ChainId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer chain id, numeric or string-encoded")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ChainId, E> {
        Ok(ChainId(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ChainId, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChainIdVisitor)
    }
}

/// Metadata describing a known chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    /// Numeric chain identifier.
    pub id: ChainId,
    /// Short display name; preferred for chart labels when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full descriptive title; label fallback when no short name exists.
    pub title: String,
}

impl Chain {
    /// Display label: the short `name` when present, otherwise the `title`.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.title)
    }
}

/// Chain metadata lookup plus the ordered list of known chains.
///
/// The ordered list is the selector's candidate domain and preserves the
/// order the metadata collaborator supplied; it is not the pin list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRegistry {
    by_id: BTreeMap<ChainId, Chain>,
    order: Vec<ChainId>,
}

impl ChainRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chain. The first registration of an id fixes its position
    /// in the known-chain order; a re-registration replaces the metadata.
    pub fn insert(&mut self, chain: Chain) {
        if self.by_id.insert(chain.id, chain.clone()).is_none() {
            self.order.push(chain.id);
        }
    }

    /// Look up the metadata entry for a chain, if known.
    #[must_use]
    pub fn get(&self, id: ChainId) -> Option<&Chain> {
        self.by_id.get(&id)
    }

    /// Resolve the display label for a chain, if known.
    #[must_use]
    pub fn label(&self, id: ChainId) -> Option<&str> {
        self.by_id.get(&id).map(Chain::label)
    }

    /// Whether the registry knows the given chain.
    #[must_use]
    pub fn contains(&self, id: ChainId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Known chain ids in the order they were supplied.
    #[must_use]
    pub fn known_ids(&self) -> &[ChainId] {
        &self.order
    }

    /// Number of known chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no chains are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<Chain> for ChainRegistry {
    fn from_iter<I: IntoIterator<Item = Chain>>(iter: I) -> Self {
        let mut registry = Self::new();
        for chain in iter {
            registry.insert(chain);
        }
        registry
    }
}
