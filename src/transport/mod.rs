//! HTTP plumbing underneath the API client.
//!
//! The client never talks to `reqwest` directly. It hands a fully built
//! [`HttpRequest`] to an [`HttpClient`] and gets back a fully buffered
//! [`HttpResponse`], which keeps replays byte-identical and lets tests
//! swap in a scripted transport.

mod client;
mod error;
mod request;
mod response;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod transport_tests;

use std::future::Future;
use std::sync::Arc;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use request::HttpRequest;
pub use response::HttpResponse;

/// Sends one request and buffers the whole response.
///
/// Implementations report only transport failures as errors. Any status
/// the server returns, 4xx and 5xx included, is an `Ok` response.
pub trait HttpClient: Send + Sync {
    /// Dispatches `req`.
    ///
    /// # Errors
    ///
    /// [`HttpError`] when no response was received.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<T: HttpClient> HttpClient for Arc<T> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let inner: &T = self;
        inner.request(req).await
    }
}
