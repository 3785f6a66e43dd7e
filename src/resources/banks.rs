use http::Method;
use serde::{Deserialize, Serialize};

use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
    /// Bank code used in transfers (`bank_code` on the wire)
    #[serde(rename = "bank_code")]
    pub code: String,
    /// Bank name (`bank_name` on the wire)
    #[serde(rename = "bank_name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveAccountBody {
    /// Bank account number
    pub account_number: String,
    /// Bank code (NIP/sort code)
    pub bank_code: String,
}

/// Account holder details returned by a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvedAccount {
    /// Bank account number
    pub account_number: String,
    /// Name registered to the account
    pub account_name: String,
    /// Bank code (NIP/sort code)
    pub bank_code: String,
    /// Bank name
    pub bank_name: String,
}

/// Bank lookup endpoints.
pub struct Banks<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Banks<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Banks<'_, H> {
    /// Lists supported banks.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Bank>, Error> {
        let request = self.client.new_request(Method::GET, "banks", NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Looks up the holder of a bank account.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRequest`] if the account cannot be resolved.
    pub async fn resolve_account(
        &self,
        ctx: &RequestContext,
        body: &ResolveAccountBody,
    ) -> Result<ResolvedAccount, Error> {
        let request = self
            .client
            .new_request(Method::POST, "resolve-account-number", Some(body))?;
        self.client.perform(ctx, request).await
    }
}
