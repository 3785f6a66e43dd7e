//! The request pipeline shared by every resource.
//!
//! A call goes through three steps:
//!
//! 1. [`SwervpayClient::new_request`] resolves the path against the base URL,
//!    serializes the body and attaches headers. No I/O happens here.
//! 2. [`SwervpayClient::perform`] dispatches the request. A 401 triggers one
//!    token refresh and one replay of the same request with the new token.
//! 3. A 2xx body is decoded into the caller's type; any other status is
//!    classified into an [`Error`].
//!
//! The first call made by a fresh client carries no `Authorization` header
//! and is expected to be rejected with 401; the token it obtains is reused
//! by every later call until the server rejects it.

mod auth;
mod classify;
mod context;
mod session;

#[cfg(test)]
mod classify_tests;

use std::fmt;

use http::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use http::{HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub use context::RequestContext;
pub use session::Session;

use self::classify::classify;
use self::session::SessionStore;
use crate::config::ClientConfig;
use crate::resources::{
    Banks, Bills, BusinessApi, Cards, Collections, Customers, Fx, Payouts, Transactions, Wallets,
    Webhooks,
};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};
use crate::{BuildError, Error};

const JSON: &str = "application/json";
const DEFAULT_USER_AGENT: &str = concat!("swervpay-rust/", env!("CARGO_PKG_VERSION"));

/// Placeholder for requests without a body.
///
/// ```
/// # fn example(client: &swervpay::SwervpayClient) -> Result<(), swervpay::Error> {
/// let request = client.new_request(http::Method::GET, "banks", swervpay::NO_BODY)?;
/// assert!(request.body.is_none());
/// # Ok(())
/// # }
/// ```
pub const NO_BODY: Option<&'static ()> = None;

/// Client for the Swervpay API.
///
/// Cheap to share behind an `Arc`; every method takes `&self`. The bearer
/// token is the only mutable state and is refreshed single-flight, so
/// concurrent calls that all hit an expired token trigger one auth call.
///
/// # Example
///
/// ```no_run
/// use swervpay::{ClientConfig, PageQuery, RequestContext, SwervpayClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::builder("biz_123", "sk_test_abc")
///     .with_sandbox(true)
///     .build()?;
/// let client = SwervpayClient::new(config)?;
///
/// let ctx = RequestContext::new();
/// let customers = client.customers().list(&ctx, &PageQuery::new(1, 10)).await?;
/// println!("{} customers", customers.len());
/// # Ok(())
/// # }
/// ```
pub struct SwervpayClient<H = ReqwestClient> {
    http: H,
    config: ClientConfig,
    session: SessionStore,
    user_agent: HeaderValue,
}

impl SwervpayClient<ReqwestClient> {
    /// Creates a client over reqwest, applying the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = ReqwestClient::from_config(&config)?;
        Ok(Self::with_http_client(config, http))
    }
}

impl<H> SwervpayClient<H> {
    /// Creates a client over any [`HttpClient`].
    ///
    /// The configured timeout is not applied; configure it on `http`.
    #[must_use]
    pub fn with_http_client(config: ClientConfig, http: H) -> Self {
        Self {
            http,
            config,
            session: SessionStore::default(),
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
        }
    }

    /// Returns the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Returns a copy of the current session, if one has been obtained.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session.snapshot()
    }

    /// Returns the current bearer token, if one has been obtained.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.session.access_token()
    }

    /// Builds a request for `path`, resolved against the base URL.
    ///
    /// A leading `/` is ignored so the base URL's version segment is kept.
    /// `Content-Type` is only set when a body is given. `Authorization` is
    /// only set once a token has been obtained.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] if the path does not resolve, the body does
    /// not serialize, or the held token is not a valid header value.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, Error>
    where
        B: Serialize + ?Sized,
    {
        let path = path.trim_start_matches('/');
        let url = self
            .config
            .base_url()
            .join(path)
            .map_err(|source| BuildError::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        let mut request = HttpRequest::new(method, url)
            .with_header(ACCEPT, HeaderValue::from_static(JSON))
            .with_header(USER_AGENT, self.user_agent.clone());

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(BuildError::Serialize)?;
            request = request.with_json(bytes);
        }

        if let Some(token) = self.session.access_token().filter(|t| !t.is_empty()) {
            request.set_header(AUTHORIZATION, auth::bearer(&token)?);
        }

        Ok(request)
    }
}

impl<H: HttpClient> SwervpayClient<H> {
    /// Sends `request` and decodes the response body into `T`.
    ///
    /// A 204 or empty body decodes as JSON `null`, so `T` may be `()` or an
    /// `Option`.
    ///
    /// # Errors
    ///
    /// See [`Error`]. A 401 is only returned (as [`Error::Unauthorized`]) if
    /// the replay after a successful refresh is rejected again.
    pub async fn perform<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<T, Error> {
        let response = self.execute(ctx, request).await?;
        decode(&response)
    }

    /// Sends `request` and ignores the response body.
    ///
    /// # Errors
    ///
    /// Same as [`perform`](Self::perform), minus decoding.
    pub async fn perform_discard(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<(), Error> {
        self.execute(ctx, request).await.map(drop)
    }

    /// Obtains a fresh token now instead of waiting for the first 401.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] wrapping whatever made the exchange fail.
    pub async fn authenticate(&self, ctx: &RequestContext) -> Result<Session, Error> {
        let current = self.session.access_token();
        self.refresh_session(ctx, current.as_deref()).await
    }

    async fn execute(
        &self,
        ctx: &RequestContext,
        mut request: HttpRequest,
    ) -> Result<HttpResponse, Error> {
        let mut attempt = 1;

        loop {
            let response = self.dispatch(ctx, &request, attempt).await?;

            if response.status != StatusCode::UNAUTHORIZED {
                return if response.is_success() {
                    Ok(response)
                } else {
                    Err(classify(&response))
                };
            }

            if attempt > 1 {
                warn!(
                    method = %request.method,
                    url = %request.url,
                    "Request rejected again after re-authentication"
                );
                return Err(Error::Unauthorized);
            }

            let stale = request.header(&AUTHORIZATION).and_then(auth::bearer_token);
            let session = self.refresh_session(ctx, stale).await?;
            request.set_header(AUTHORIZATION, auth::bearer(&session.access_token)?);
            attempt += 1;
        }
    }

    async fn dispatch(
        &self,
        ctx: &RequestContext,
        request: &HttpRequest,
        attempt: u32,
    ) -> Result<HttpResponse, Error> {
        debug!(
            method = %request.method,
            url = %request.url,
            attempt,
            "Dispatching request"
        );

        let response = ctx.run(self.http.request(request.clone())).await??;

        debug!(status = %response.status, "Received response");
        Ok(response)
    }

    async fn refresh_session(
        &self,
        ctx: &RequestContext,
        stale: Option<&str>,
    ) -> Result<Session, Error> {
        let refreshed = ctx
            .run(self.session.refresh_with(stale, || self.fetch_session(ctx)))
            .await
            .and_then(|r| r);

        match refreshed {
            Ok(session) => {
                info!(expires_at = %session.expires_at, "Session refreshed");
                Ok(session)
            }
            Err(e) => {
                warn!(error = %e, "Session refresh failed");
                Err(Error::auth(e))
            }
        }
    }

    async fn fetch_session(&self, ctx: &RequestContext) -> Result<Session, Error> {
        let mut request = self.new_request(Method::POST, auth::AUTH_PATH, NO_BODY)?;
        request.set_header(
            AUTHORIZATION,
            auth::basic_credentials(self.config.business_id(), self.config.secret_key())?,
        );

        let response = self.dispatch(ctx, &request, 1).await?;
        if !response.is_success() {
            return Err(classify(&response));
        }

        auth::decode_session(&response)
    }

    /// Business profile endpoint.
    #[must_use]
    pub const fn business(&self) -> BusinessApi<'_, H> {
        BusinessApi::new(self)
    }

    /// Customer endpoints.
    #[must_use]
    pub const fn customers(&self) -> Customers<'_, H> {
        Customers::new(self)
    }

    /// Virtual card endpoints.
    #[must_use]
    pub const fn cards(&self) -> Cards<'_, H> {
        Cards::new(self)
    }

    /// Wallet endpoints.
    #[must_use]
    pub const fn wallets(&self) -> Wallets<'_, H> {
        Wallets::new(self)
    }

    /// Collection (virtual account) endpoints.
    #[must_use]
    pub const fn collections(&self) -> Collections<'_, H> {
        Collections::new(self)
    }

    /// Payout endpoints.
    #[must_use]
    pub const fn payouts(&self) -> Payouts<'_, H> {
        Payouts::new(self)
    }

    /// Transaction history endpoints.
    #[must_use]
    pub const fn transactions(&self) -> Transactions<'_, H> {
        Transactions::new(self)
    }

    /// Bill payment endpoints.
    #[must_use]
    pub const fn bills(&self) -> Bills<'_, H> {
        Bills::new(self)
    }

    /// Foreign exchange endpoints.
    #[must_use]
    pub const fn fx(&self) -> Fx<'_, H> {
        Fx::new(self)
    }

    /// Webhook delivery endpoints.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_, H> {
        Webhooks::new(self)
    }

    /// Bank lookup endpoints.
    #[must_use]
    pub const fn banks(&self) -> Banks<'_, H> {
        Banks::new(self)
    }
}

impl<H> fmt::Debug for SwervpayClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwervpayClient")
            .field("config", &self.config)
            .field("authenticated", &self.session.access_token().is_some())
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    let body: &[u8] = if response.has_no_body() {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(Error::Decode)
}
