//! [`HttpClient`] over `reqwest`.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::ClientConfig;

/// Production transport. Pooling, DNS and TLS are reqwest's.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// A client with reqwest's defaults and no overall timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that abandons any request still running after `timeout`.
    ///
    /// # Errors
    ///
    /// [`HttpError::Connection`] if the TLS backend fails to initialize.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Connection(Box::new(e)))?;
        Ok(Self { inner })
    }

    /// A client honoring the transport settings in `config`.
    ///
    /// # Errors
    ///
    /// See [`ReqwestClient::with_timeout`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, HttpError> {
        Self::with_timeout(config.timeout())
    }

    /// Wraps a client configured elsewhere (proxies, custom roots).
    #[must_use]
    pub const fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = req;

        let mut builder = self.inner.request(method, url.as_str()).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}
