use veristats_core::{Chain, ChainId, ChainRegistry};

fn chain(id: u64, name: Option<&str>, title: &str) -> Chain {
    Chain {
        id: ChainId::new(id),
        name: name.map(str::to_owned),
        title: title.to_owned(),
    }
}

/// Deterministic registry of well-known networks. Chain 31337 from the
/// stats fixture is intentionally absent.
#[must_use]
pub fn registry() -> ChainRegistry {
    [
        chain(1, Some("Ethereum"), "Ethereum Mainnet"),
        chain(10, Some("Optimism"), "OP Mainnet"),
        chain(100, None, "Gnosis Chain"),
        chain(137, Some("Polygon"), "Polygon Mainnet"),
        chain(8453, Some("Base"), "Base Mainnet"),
        chain(42161, Some("Arbitrum"), "Arbitrum One"),
    ]
    .into_iter()
    .collect()
}
