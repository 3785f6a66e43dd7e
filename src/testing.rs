//! Scripted HTTP client shared by unit tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use http::StatusCode;

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::{ClientConfig, SwervpayClient};

pub(crate) const BASE_URL: &str = "https://api.test/api/v1/";

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug, Default)]
pub(crate) struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub(crate) fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// A single 200 response with `body`.
    pub(crate) fn ok(body: &str) -> Self {
        Self::new(vec![Ok(json(StatusCode::OK, body))])
    }

    pub(crate) fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub(crate) fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        // Yield so concurrent callers interleave like real I/O would.
        tokio::task::yield_now().await;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockClient ran out of scripted responses")
    }
}

pub(crate) fn json(status: StatusCode, body: &str) -> HttpResponse {
    HttpResponse::json(status, body)
}

pub(crate) fn unauthorized() -> HttpResponse {
    json(StatusCode::UNAUTHORIZED, r#"{"message":"Unauthorized"}"#)
}

pub(crate) fn auth_ok(token: &str) -> HttpResponse {
    json(
        StatusCode::OK,
        &format!(
            r#"{{"access_token":"{token}","token":{{"type":"Bearer","expires_at":"2024-01-01T01:00:00Z","issued_at":"2024-01-01T00:00:00Z"}}}}"#
        ),
    )
}

pub(crate) fn config() -> ClientConfig {
    ClientConfig::builder("biz_123", "sk_test_abc")
        .with_base_url(BASE_URL)
        .build()
        .unwrap()
}

pub(crate) fn client(mock: MockClient) -> (SwervpayClient<Arc<MockClient>>, Arc<MockClient>) {
    let mock = Arc::new(mock);
    (
        SwervpayClient::with_http_client(config(), Arc::clone(&mock)),
        mock,
    )
}

pub(crate) fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
}

/// HTTP client that answers each request through a routing function.
///
/// Unlike [`MockClient`], responses do not depend on arrival order, which
/// makes it suitable for concurrent callers.
pub(crate) struct RoutedClient<F> {
    route: F,
    requests: Mutex<Vec<HttpRequest>>,
}

impl<F> RoutedClient<F>
where
    F: Fn(&HttpRequest) -> HttpResponse + Send + Sync,
{
    pub(crate) fn new(route: F) -> Self {
        Self {
            route,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls_to(&self, path_suffix: &str) -> usize {
        self.captured_requests()
            .iter()
            .filter(|r| r.url.path().ends_with(path_suffix))
            .count()
    }
}

impl<F> HttpClient for RoutedClient<F>
where
    F: Fn(&HttpRequest) -> HttpResponse + Send + Sync,
{
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req.clone());
        tokio::task::yield_now().await;
        Ok((self.route)(&req))
    }
}
