mod common;

use std::time::Duration;

use api::{error::FetchError, fetch::SnapshotCache};
use common::{serve, PLAYTEST_JSON};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn fetches_and_decodes_snapshot() {
    let endpoint = serve("200 OK", PLAYTEST_JSON, Duration::ZERO).await;
    let snapshot = endpoint.client(TIMEOUT).fetch().await.unwrap();

    assert_eq!(snapshot.len(), 3);
    let levels: Vec<_> = snapshot
        .records()
        .map(|(_, record)| record.unwrap().level().unwrap())
        .collect();
    assert_eq!(levels, vec![1, 1, 2]);
    assert_eq!(endpoint.hits(), 1);
}

#[tokio::test]
async fn null_payload_is_an_empty_snapshot() {
    let endpoint = serve("200 OK", "null", Duration::ZERO).await;
    let snapshot = endpoint.client(TIMEOUT).fetch().await.unwrap();
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let endpoint = serve("500 Internal Server Error", "{}", Duration::ZERO).await;
    let err = endpoint.client(TIMEOUT).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }), "{err:?}");
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let endpoint = serve("200 OK", "{\"p1\": {\"level\": ", Duration::ZERO).await;
    let err = endpoint.client(TIMEOUT).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn non_object_payload_is_rejected() {
    let endpoint = serve("200 OK", "[1, 2, 3]", Duration::ZERO).await;
    let err = endpoint.client(TIMEOUT).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Shape { .. }), "{err:?}");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let endpoint = serve("200 OK", PLAYTEST_JSON, Duration::from_secs(5)).await;
    let err = endpoint
        .client(Duration::from_millis(200))
        .fetch()
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "{err:?}");
}

#[tokio::test]
async fn cleared_cache_fetches_again() {
    let endpoint = serve("200 OK", PLAYTEST_JSON, Duration::ZERO).await;
    let client = endpoint.client(TIMEOUT);
    let cache = SnapshotCache::new();
    let ttl = Some(Duration::from_secs(60));

    let first = cache.get_or_fetch(&client, ttl).await.unwrap();
    let again = cache.get_or_fetch(&client, ttl).await.unwrap();
    assert_eq!(endpoint.hits(), 1);
    assert_eq!(first, again);

    cache.clear();
    let refreshed = cache.get_or_fetch(&client, ttl).await.unwrap();
    assert_eq!(endpoint.hits(), 2);
    assert_eq!(refreshed.len(), 3);
}
