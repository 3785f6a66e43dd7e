use http::Method;
use serde::{Deserialize, Serialize};

use super::{PageQuery, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// A ledger entry: payout, collection, card movement or exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Unique identifier
    pub id: String,
    /// Merchant or provider reference
    pub reference: String,
    /// Amount in major units
    pub amount: f64,
    /// Fees deducted by Swervpay
    pub charges: f64,
    /// Exchange rate applied, if any
    pub fiat_rate: f64,
    /// Current status as reported by the server
    pub status: String,
    /// Transaction type (`type` on the wire)
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Transaction category
    pub category: String,
    /// Free-form description
    pub detail: String,
    /// Holder name on the bank account
    pub account_name: String,
    /// Bank account number
    pub account_number: String,
    /// Bank code (NIP/sort code)
    pub bank_code: String,
    /// Bank name
    pub bank_name: String,
    /// Interbank session id
    pub session_id: String,
    /// Whether the transaction has been reported
    pub report: bool,
    /// Reason given when it was reported
    pub report_message: String,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

/// Transaction history endpoints.
pub struct Transactions<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Transactions<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Transactions<'_, H> {
    /// Lists transactions, newest first, one page at a time.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<Vec<Transaction>, Error> {
        let request = self
            .client
            .new_request(Method::GET, &query.apply("transactions"), NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Fetches a single transaction.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Transaction, Error> {
        let path = format!("transactions/{}", segment(id)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }
}
