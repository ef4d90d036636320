//! Discovery and status endpoint tests.

use bundlesink_fixtures::fixtures::FIXTURES;
use serde_json::Value;

mod common;

#[tokio::test]
async fn status_reports_version_and_fixture_count() {
    let (addr, shutdown) = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/status"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let json: Value = res.json().await.unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["status"], "operational");
    assert_eq!(json["fixtures"], FIXTURES.len());

    shutdown.trigger();
}

#[tokio::test]
async fn fixtures_endpoint_lists_registry_in_order() {
    let (addr, shutdown) = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/fixtures"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let listed: Vec<String> = res.json().await.unwrap();
    assert_eq!(listed, FIXTURES);

    shutdown.trigger();
}

#[tokio::test]
async fn index_links_every_fixture() {
    let (addr, shutdown) = common::spawn_server().await;
    let client = common::client();

    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let body = res.text().await.unwrap();
    for name in FIXTURES {
        assert!(
            body.contains(&format!("href=\"/test/{name}\"")),
            "index should link {name}"
        );
    }

    shutdown.trigger();
}
