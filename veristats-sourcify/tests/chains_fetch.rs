use httpmock::prelude::*;
use veristats_core::{ChainId, VeristatsError, connector::ChainsProvider};
use veristats_sourcify::{SourcifyClient, SourcifyConnector};

fn connector_for(server: &MockServer) -> SourcifyConnector {
    let client = SourcifyClient::builder()
        .repo_url(server.base_url())
        .server_url(server.base_url())
        .build()
        .unwrap();
    SourcifyConnector::new_with_client(client)
}

#[tokio::test]
async fn chain_listing_preserves_order_and_optional_names() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/chains");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"[
                        {"chainId":137,"name":"Polygon","title":"Polygon Mainnet","rpc":["https://polygon-rpc.com"]},
                        {"chainId":1,"name":"Ethereum","title":"Ethereum Mainnet"},
                        {"chainId":10,"title":"OP Mainnet"}
                    ]"#,
                );
        })
        .await;

    let registry = connector_for(&server).chains().await.unwrap();

    mock.assert_async().await;
    let order: Vec<u64> = registry.known_ids().iter().map(|id| id.get()).collect();
    assert_eq!(order, vec![137, 1, 10]);
    assert_eq!(registry.label(ChainId::new(137)), Some("Polygon"));
    assert_eq!(registry.label(ChainId::new(10)), Some("OP Mainnet"));
    assert_eq!(registry.get(ChainId::new(10)).unwrap().name, None);
}

#[tokio::test]
async fn listing_without_title_is_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/chains");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"chainId":1,"name":"Ethereum"}]"#);
        })
        .await;

    let err = connector_for(&server).chains().await.unwrap_err();
    assert!(matches!(err, VeristatsError::Data(_)), "{err}");
}

#[test]
fn invalid_override_url_is_rejected_at_build() {
    let err = SourcifyClient::builder()
        .repo_url("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(err, VeristatsError::InvalidArg(_)), "{err}");
}
