//! The Basic-credentialed token exchange.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::HeaderValue;
use serde::Deserialize;

use super::session::Session;
use crate::transport::HttpResponse;
use crate::{BuildError, Error};

/// Path of the token endpoint, relative to the base URL.
pub(crate) const AUTH_PATH: &str = "auth";

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    token: TokenInfo,
}

#[derive(Debug, Default, Deserialize)]
struct TokenInfo {
    #[serde(rename = "type", default)]
    token_type: String,
    #[serde(default)]
    expires_at: String,
    #[serde(default)]
    issued_at: String,
}

/// Builds `Basic base64(business_id:secret_key)`.
pub(crate) fn basic_credentials(
    business_id: &str,
    secret_key: &str,
) -> Result<HeaderValue, BuildError> {
    let encoded = STANDARD.encode(format!("{business_id}:{secret_key}"));
    sensitive(&format!("Basic {encoded}"))
}

/// Builds `Bearer <token>`.
pub(crate) fn bearer(token: &str) -> Result<HeaderValue, BuildError> {
    sensitive(&format!("Bearer {token}"))
}

/// Extracts the token from a `Bearer <token>` header value.
pub(crate) fn bearer_token(value: &str) -> Option<&str> {
    value.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

fn sensitive(value: &str) -> Result<HeaderValue, BuildError> {
    let mut value = HeaderValue::from_str(value).map_err(|_| BuildError::InvalidHeader {
        name: "authorization",
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Decodes a successful auth response into a [`Session`].
///
/// A response without an access token is a decode failure, since storing
/// it would send every later request unauthenticated.
pub(crate) fn decode_session(response: &HttpResponse) -> Result<Session, Error> {
    let body: AuthResponse = serde_json::from_slice(&response.body).map_err(Error::Decode)?;

    if body.access_token.is_empty() {
        return Err(Error::decode_msg("auth response carried no access_token"));
    }

    Ok(Session {
        access_token: body.access_token,
        token_type: body.token.token_type,
        issued_at: body.token.issued_at,
        expires_at: body.token.expires_at,
    })
}
