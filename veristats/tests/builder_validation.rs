mod helpers;

use std::sync::Arc;

use helpers::*;
use veristats::{ConnectorKey, StatsConnector, Veristats, VeristatsError};

struct NamedOnly(&'static str);

impl StatsConnector for NamedOnly {
    fn name(&self) -> &'static str {
        self.0
    }
}

#[test]
fn connector_key_derives_from_name() {
    let c = NamedOnly("some-connector");
    assert_eq!(c.key(), ConnectorKey::new("some-connector"));
    assert_eq!(c.vendor(), "unknown");
    assert!(c.as_stats_provider().is_none());
    assert!(c.as_chains_provider().is_none());
}

#[tokio::test]
async fn unknown_priority_keys_are_dropped_at_build() {
    let a = m_stats("a", snapshot(&[(1, 1, 0)]));
    let ghost: Arc<dyn StatsConnector> = Arc::new(NamedOnly("ghost"));

    // "ghost" is listed in the priority but never registered; the build
    // succeeds and routing falls back to the registered connector.
    let veristats = Veristats::builder()
        .with_connector(a)
        .prefer(&[ghost])
        .build()
        .unwrap();

    let snap = veristats.stats().await.unwrap();
    assert_eq!(snap.counts(id(1)).total(), 1);
}

#[tokio::test]
async fn duplicate_priority_keys_are_deduplicated() {
    let a = m_stats("a", snapshot(&[(1, 1, 0)]));
    let b = m_stats("b", snapshot(&[(1, 2, 0)]));

    let veristats = Veristats::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .prefer(&[b.clone(), b, a])
        .build()
        .unwrap();

    let snap = veristats.stats().await.unwrap();
    assert_eq!(snap.counts(id(1)).total(), 2);
}

#[test]
fn empty_builder_is_rejected() {
    let err = Veristats::builder().build().unwrap_err();
    assert!(matches!(err, VeristatsError::InvalidArg(_)), "{err}");
}
