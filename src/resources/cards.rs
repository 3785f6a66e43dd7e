use http::Method;
use serde::{Deserialize, Serialize};

use super::{MessageResponse, PageQuery, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// A virtual card issued to a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    /// Unique identifier
    pub id: String,
    /// Owning customer
    pub customer_id: String,
    /// Full card number
    pub card_number: String,
    /// Card number with middle digits hidden
    pub masked_pan: String,
    /// Expiry as `MM/YY`
    pub expiry: String,
    /// Card verification value
    pub cvv: String,
    /// Name embossed on the card
    pub name_on_card: String,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
    /// Available balance
    pub balance: f64,
    /// Total amount ever funded
    pub total_funded: f64,
    /// Card network, e.g. `VISA`
    pub provider: String,
    /// Issuing program
    pub issuer: String,
    /// Card type, e.g. `VIRTUAL`
    #[serde(rename = "type")]
    pub card_type: String,
    /// Current status as reported by the server
    pub status: String,
    /// Whether the card is frozen
    pub freeze: bool,
    /// Whether the card has been terminated
    pub is_terminated: bool,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCardBody {
    /// Owning customer
    pub customer_id: String,
    /// Initial funding amount
    pub amount: f64,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
    /// Card network, e.g. `VISA`
    pub provider: String,
    /// Issuing program
    pub issuer: String,
    /// Card type, e.g. `VIRTUAL`
    #[serde(rename = "type")]
    pub card_type: String,
    /// Name embossed on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_on_card: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCardResponse {
    /// Id of the new card
    pub card_id: String,
    /// Server confirmation message
    pub message: String,
}

/// Amount to move onto or off a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CardAmountBody {
    /// Amount to move between the card and the wallet
    pub amount: f64,
}

/// Virtual card endpoints.
pub struct Cards<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Cards<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Cards<'_, H> {
    /// Lists cards, one page at a time.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn list(&self, ctx: &RequestContext, query: &PageQuery) -> Result<Vec<Card>, Error> {
        let request = self
            .client
            .new_request(Method::GET, &query.apply("cards"), NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Fetches a single card.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Card, Error> {
        let path = format!("cards/{}", segment(id)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Issues a new card.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn create(
        &self,
        ctx: &RequestContext,
        body: &CreateCardBody,
    ) -> Result<CreateCardResponse, Error> {
        let request = self.client.new_request(Method::POST, "cards", Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Moves funds onto a card.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn fund(
        &self,
        ctx: &RequestContext,
        id: &str,
        body: &CardAmountBody,
    ) -> Result<MessageResponse, Error> {
        self.action(ctx, id, "fund", Some(body)).await
    }

    /// Moves funds off a card.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn withdraw(
        &self,
        ctx: &RequestContext,
        id: &str,
        body: &CardAmountBody,
    ) -> Result<MessageResponse, Error> {
        self.action(ctx, id, "withdraw", Some(body)).await
    }

    /// Permanently terminates a card.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn terminate(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> Result<MessageResponse, Error> {
        self.action(ctx, id, "terminate", NO_BODY).await
    }

    /// Freezes a card.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn freeze(&self, ctx: &RequestContext, id: &str) -> Result<MessageResponse, Error> {
        self.action(ctx, id, "freeze", NO_BODY).await
    }

    async fn action<B: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        id: &str,
        action: &str,
        body: Option<&B>,
    ) -> Result<MessageResponse, Error> {
        let path = format!("cards/{}/{action}", segment(id)?);
        let request = self.client.new_request(Method::POST, &path, body)?;
        self.client.perform(ctx, request).await
    }
}
