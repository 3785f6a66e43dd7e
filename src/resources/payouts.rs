use http::Method;
use serde::{Deserialize, Serialize};

use super::{Transaction, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// Transfer to an external bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePayoutBody {
    /// Recipient account number
    pub account_number: String,
    /// Recipient bank code
    pub bank_code: String,
    /// Amount to send
    pub amount: f64,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
    /// Narration shown to the recipient
    pub narration: String,
    /// Idempotency key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePayoutResponse {
    /// Server confirmation message
    pub message: String,
    /// Reference of the payout transaction
    pub reference: String,
}

/// Payout endpoints.
pub struct Payouts<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Payouts<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Payouts<'_, H> {
    /// Fetches the transaction behind a payout.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Transaction, Error> {
        let path = format!("payouts/{}", segment(id)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Starts a payout.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn create(
        &self,
        ctx: &RequestContext,
        body: &CreatePayoutBody,
    ) -> Result<CreatePayoutResponse, Error> {
        let request = self.client.new_request(Method::POST, "payouts", Some(body))?;
        self.client.perform(ctx, request).await
    }
}
