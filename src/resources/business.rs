use http::Method;
use serde::{Deserialize, Serialize};

use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// The business the credentials belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Business {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// URL-friendly name
    pub slug: String,
    /// Contact email
    pub email: String,
    /// Registered address
    pub address: String,
    /// ISO country code
    pub country: String,
    /// Logo URL
    pub logo: String,
    /// Business tier (`type` on the wire)
    #[serde(rename = "type")]
    pub business_type: String,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

/// Business profile endpoint.
pub struct BusinessApi<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> BusinessApi<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> BusinessApi<'_, H> {
    /// `GET business`
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, ctx: &RequestContext) -> Result<Business, Error> {
        let request = self.client.new_request(Method::GET, "business", NO_BODY)?;
        self.client.perform(ctx, request).await
    }
}
