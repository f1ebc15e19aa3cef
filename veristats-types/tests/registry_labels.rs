use veristats_types::{Chain, ChainId, ChainRegistry};

fn chain(id: u64, name: Option<&str>, title: &str) -> Chain {
    Chain {
        id: ChainId::new(id),
        name: name.map(str::to_owned),
        title: title.to_owned(),
    }
}

#[test]
fn short_name_takes_precedence_over_title() {
    let registry: ChainRegistry = [
        chain(1, Some("Ethereum"), "Ethereum Mainnet"),
        chain(10, None, "OP Mainnet"),
    ]
    .into_iter()
    .collect();

    assert_eq!(registry.label(ChainId::new(1)), Some("Ethereum"));
    assert_eq!(registry.label(ChainId::new(10)), Some("OP Mainnet"));
    assert_eq!(registry.label(ChainId::new(999)), None);
}

#[test]
fn known_ids_preserve_supplied_order() {
    let registry: ChainRegistry = [
        chain(137, Some("Polygon"), "Polygon Mainnet"),
        chain(1, Some("Ethereum"), "Ethereum Mainnet"),
        chain(10, None, "OP Mainnet"),
    ]
    .into_iter()
    .collect();

    let ids: Vec<u64> = registry.known_ids().iter().map(|id| id.get()).collect();
    assert_eq!(ids, vec![137, 1, 10]);
}

#[test]
fn reinsert_replaces_metadata_but_keeps_position() {
    let mut registry = ChainRegistry::new();
    registry.insert(chain(1, None, "Ethereum Mainnet"));
    registry.insert(chain(5, None, "Goerli"));
    registry.insert(chain(1, Some("Ethereum"), "Ethereum Mainnet"));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.label(ChainId::new(1)), Some("Ethereum"));
    let ids: Vec<u64> = registry.known_ids().iter().map(|id| id.get()).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn chain_listing_deserializes_with_optional_name() {
    let doc = r#"[
        { "id": 1, "name": "Ethereum", "title": "Ethereum Mainnet" },
        { "id": 10, "title": "OP Mainnet" }
    ]"#;
    let chains: Vec<Chain> = serde_json::from_str(doc).unwrap();
    let registry: ChainRegistry = chains.into_iter().collect();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(ChainId::new(10)).unwrap().name, None);
}
