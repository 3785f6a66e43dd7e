use http::Method;
use serde::{Deserialize, Serialize};

use super::{PageQuery, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// A wallet, or a collection account backed by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    /// Unique identifier
    pub id: String,
    /// Caller-chosen label
    pub label: String,
    /// Name on the funding account
    pub account_name: String,
    /// Funding account number
    pub account_number: String,
    /// Bank code (NIP/sort code)
    pub bank_code: String,
    /// Bank name
    pub bank_name: String,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
    /// Available balance
    pub balance: f64,
    /// Funds received but not yet settled
    pub pending_balance: f64,
    /// Total amount ever received
    pub total_received: f64,
    /// Merchant or provider reference
    pub reference: String,
    /// Wallet or collection type (`type` on the wire)
    #[serde(rename = "type")]
    pub wallet_type: String,
    /// Whether the wallet is blocked
    pub is_blocked: bool,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

/// Credit applied to a wallet or collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditWalletBody {
    /// Amount to credit
    pub amount: f64,
    /// Account the funds came from
    pub sender: CreditWalletSender,
}

/// Originating account of a credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditWalletSender {
    /// Sender account name
    pub account_name: String,
    /// Sender account number
    pub account_number: String,
    /// Sender bank code
    pub bank_code: String,
    /// Sender bank name
    pub bank_name: String,
    /// Narration shown to the recipient
    pub narration: String,
    /// Merchant or provider reference
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditWalletResponse {
    /// Id of the resulting transaction
    pub id: String,
    /// Server confirmation message
    pub message: String,
    /// Reference of the credit transaction
    pub reference: String,
}

/// Wallet endpoints.
pub struct Wallets<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Wallets<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Wallets<'_, H> {
    /// Lists wallets, one page at a time.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<Vec<Wallet>, Error> {
        let request = self
            .client
            .new_request(Method::GET, &query.apply("wallets"), NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Fetches a single wallet.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Wallet, Error> {
        let path = format!("wallets/{}", segment(id)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Credits a wallet. Only available in sandbox.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn credit(
        &self,
        ctx: &RequestContext,
        id: &str,
        body: &CreditWalletBody,
    ) -> Result<CreditWalletResponse, Error> {
        let path = format!("wallets/{}/credit", segment(id)?);
        let request = self.client.new_request(Method::POST, &path, Some(body))?;
        self.client.perform(ctx, request).await
    }
}
