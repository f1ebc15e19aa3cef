use std::sync::Arc;
use veristats_core::StatsConnector;

#[must_use]
pub fn get_connector() -> Arc<dyn StatsConnector> {
    if std::env::var("VERISTATS_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(veristats_mock::MockConnector::new())
    } else {
        Arc::new(veristats_sourcify::SourcifyConnector::new_default())
    }
}
