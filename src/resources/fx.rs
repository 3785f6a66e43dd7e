use http::Method;
use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::transport::HttpClient;
use crate::{Error, RequestContext, SwervpayClient};

/// A conversion between two currencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FxBody {
    /// Amount to convert, in the source currency
    pub amount: f64,
    /// Source currency code
    pub from: String,
    /// Target currency code
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxRateResponse {
    /// Units of the target currency per source unit
    pub rate: f64,
    /// Source side of the quote
    pub from: FxAmount,
    /// Target side of the quote
    pub to: FxAmount,
}

/// One side of a quote. The amount is a decimal string as sent by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxAmount {
    /// Amount as a decimal string
    pub amount: String,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
}

/// Foreign exchange endpoints.
pub struct Fx<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Fx<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Fx<'_, H> {
    /// Quotes a conversion without executing it.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn rate(&self, ctx: &RequestContext, body: &FxBody) -> Result<FxRateResponse, Error> {
        let request = self.client.new_request(Method::POST, "fx/rate", Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Executes a conversion between the business's wallets.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn exchange(
        &self,
        ctx: &RequestContext,
        body: &FxBody,
    ) -> Result<Transaction, Error> {
        let request = self
            .client
            .new_request(Method::POST, "fx/exchange", Some(body))?;
        self.client.perform(ctx, request).await
    }
}
