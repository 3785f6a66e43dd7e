//! Behavior against a live server is covered by the wiremock suite in `tests/`.

use std::time::Duration;

use http::Method;

use super::*;
use crate::ClientConfig;

#[test]
fn builds_with_timeout() {
    assert!(ReqwestClient::with_timeout(Duration::from_secs(30)).is_ok());
}

#[test]
fn builds_from_config() {
    let config = ClientConfig::builder("biz_123", "sk_test_abc")
        .with_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert!(ReqwestClient::from_config(&config).is_ok());
}

#[test]
fn is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestClient>();
}

#[tokio::test]
async fn closed_port_is_a_transport_failure() {
    let client = ReqwestClient::from_client(reqwest::Client::new());
    // Port 9 (discard) on localhost is closed on virtually every host.
    let url = url::Url::parse("http://127.0.0.1:9/").unwrap();

    let result = client.request(HttpRequest::new(Method::GET, url)).await;

    // A configured proxy may answer with an error status instead.
    match result {
        Err(HttpError::Connection(_) | HttpError::Timeout) => {}
        Ok(resp) if !resp.is_success() => {}
        other => panic!("Expected a transport failure, got {other:?}"),
    }
}
