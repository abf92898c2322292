//! Integration tests for persistence across restarts and the HTTP seed source.
//!
//! The HTTP tests start a one-shot server on `127.0.0.1` with a plain
//! `TcpListener`, so no external network access is needed.

#![allow(clippy::unwrap_used)]

use landing_content::{
    ContentRepository, FileStore, HttpSeed, InitOutcome, NoSeed, SeedError, SeedSource, defaults,
};
use landing_core::NewProduct;
use landing_integration_tests::{StaticSeed, single_product_seed};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Serve a single HTTP response, then close.
async fn serve_once(status: &'static str, body: String) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0_u8; 4096];
        let mut request = Vec::new();
        // Read until the end of the request headers
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(buf.get(..n).unwrap());
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    Url::parse(&format!("http://{addr}/data.json")).unwrap()
}

/// Seed source for a local URL, ignoring any proxy set in the environment.
fn local_seed(url: Url) -> HttpSeed {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpSeed::with_client(client, url)
}

// =============================================================================
// Durability
// =============================================================================

#[tokio::test]
async fn test_edits_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let added = {
        let store = FileStore::open(dir.path()).await.unwrap();
        let repo = ContentRepository::new(store, StaticSeed::new(single_product_seed()));
        repo.init_data().await.unwrap();
        repo.add_product(NewProduct {
            name: "Kept".to_string(),
            description: "Survives restart".to_string(),
            price: "₪42".to_string(),
            features: vec!["a".to_string()],
        })
        .await
        .unwrap()
    };

    // New process, no seed available: stored content wins, nothing is defaulted
    let store = FileStore::open(dir.path()).await.unwrap();
    let repo = ContentRepository::new(store, NoSeed);
    assert_eq!(repo.init_data().await.unwrap(), InitOutcome::AlreadyPopulated);

    let products = repo.get_products().await;
    assert_eq!(products.len(), 2);
    assert_eq!(products.last().unwrap(), &added);
    assert_eq!(repo.get_user_data().await.brand_name, "Seed Studio");
}

#[tokio::test]
async fn test_stored_files_are_plain_json_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    let repo = ContentRepository::new(store, NoSeed);
    repo.init_data().await.unwrap();

    let raw = tokio::fs::read_to_string(dir.path().join("productsData.json"))
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), defaults::products().len());
    assert_eq!(array.first().unwrap()["id"], "p1");
    assert!(array.first().unwrap().get("createdAt").is_none());
}

// =============================================================================
// HTTP seed
// =============================================================================

#[tokio::test]
async fn test_http_seed_populates_store() {
    let body = serde_json::to_string(&single_product_seed()).unwrap();
    let url = serve_once("200 OK", body).await;

    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    let repo = ContentRepository::new(store, local_seed(url));

    assert!(matches!(
        repo.init_data().await.unwrap(),
        InitOutcome::Seeded { .. }
    ));
    assert_eq!(repo.get_products().await, single_product_seed().products);
}

#[tokio::test]
async fn test_http_error_status_is_seed_failure() {
    let url = serve_once("500 Internal Server Error", "{}".to_string()).await;
    let seed = local_seed(url);
    assert!(matches!(seed.fetch().await, Err(SeedError::Status(500))));
}

#[tokio::test]
async fn test_http_seed_unreachable_falls_back_to_defaults() {
    // Bind then drop to get a port with nothing listening
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let url = Url::parse(&format!("http://{addr}/data.json")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    let repo = ContentRepository::new(store, local_seed(url));

    assert_eq!(repo.init_data().await.unwrap(), InitOutcome::Defaulted);
    assert_eq!(repo.get_products().await, defaults::products());
}
