use veristats_types::{ChainId, StatsSnapshot, VerifiedCounts};

#[test]
fn snapshot_parses_string_keyed_document() {
    let doc = r#"{
        "1": { "full_match": 100, "partial_match": 50 },
        "137": { "full_match": 700, "partial_match": 10 },
        "10": { "full_match": 5, "partial_match": 0 }
    }"#;

    let snapshot: StatsSnapshot = serde_json::from_str(doc).unwrap();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(
        snapshot.get(ChainId::new(137)),
        Some(VerifiedCounts::new(700, 10))
    );
    // Iteration follows ascending chain id, not document order.
    let ids: Vec<u64> = snapshot.chain_ids().map(ChainId::get).collect();
    assert_eq!(ids, vec![1, 10, 137]);
}

#[test]
fn snapshot_roundtrips_with_string_keys() {
    let snapshot: StatsSnapshot = [
        (ChainId::new(1), VerifiedCounts::new(3, 4)),
        (ChainId::new(42161), VerifiedCounts::new(0, 9)),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: StatsSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn negative_counts_are_rejected() {
    let doc = r#"{ "1": { "full_match": -3, "partial_match": 0 } }"#;
    assert!(serde_json::from_str::<StatsSnapshot>(doc).is_err());
}

#[test]
fn fractional_counts_are_rejected() {
    let doc = r#"{ "1": { "full_match": 1.5, "partial_match": 0 } }"#;
    assert!(serde_json::from_str::<StatsSnapshot>(doc).is_err());
}

#[test]
fn non_numeric_chain_key_is_rejected() {
    let doc = r#"{ "mainnet": { "full_match": 1, "partial_match": 0 } }"#;
    assert!(serde_json::from_str::<StatsSnapshot>(doc).is_err());
}

#[test]
fn chain_id_accepts_numeric_and_string_forms() {
    let from_number: ChainId = serde_json::from_str("137").unwrap();
    let from_string: ChainId = serde_json::from_str("\"137\"").unwrap();
    assert_eq!(from_number, from_string);
    assert_eq!(from_number, ChainId::new(137));
}

#[test]
fn missing_count_field_is_rejected() {
    let doc = r#"{ "1": { "full_match": 1 } }"#;
    assert!(serde_json::from_str::<StatsSnapshot>(doc).is_err());
}
