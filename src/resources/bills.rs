use http::Method;
use serde::{Deserialize, Serialize};

use super::{PageQuery, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillCategory {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A biller within a category, e.g. an electricity distributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Biller {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A purchasable item offered by a biller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillerItem {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Item code used by the biller
    pub code: String,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
    /// Fixed price, or 0 when the customer chooses the amount
    pub amount: f64,
    /// Fee charged on top of the amount
    pub fee: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBillBody {
    /// Amount in major units
    pub amount: f64,
    /// Biller to pay
    pub biller_id: String,
    /// Bill category id
    pub category: String,
    /// Customer identifier at the biller (meter number, phone number, ...)
    pub customer_id: String,
    /// Biller item (plan or package)
    pub item_id: String,
    /// Idempotency key
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateBillBody {
    /// Biller to pay
    pub biller_id: String,
    /// Bill category id
    pub category: String,
    /// Meter number, smartcard or phone number being paid for
    pub customer_id: String,
    /// Biller item (plan or package)
    pub item_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillDetail {
    /// Biller code
    pub bill_code: String,
    /// Biller name
    pub bill_name: String,
    /// Item code
    pub item_code: String,
    /// Item name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Prepaid token, for billers that issue one
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
}

/// Transaction record of a bill payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillTransaction {
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
    /// Bill details, when the transaction paid a bill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill: Option<BillDetail>,
    /// Input message accountability data for wire transfers
    pub imad: String,
    /// How the payment arrived
    pub payment_method: String,
    /// Interbank session id
    pub session_id: String,
    /// Network trace number
    pub trace_number: String,
    /// Whether the transaction has been reported
    pub report: bool,
    /// Reason given when it was reported
    pub report_message: String,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateBillResponse {
    /// Server confirmation message
    pub message: String,
    /// The transaction that paid the bill
    pub transaction: BillTransaction,
}

/// Bill payment endpoints.
pub struct Bills<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Bills<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Bills<'_, H> {
    /// Pays a bill.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn create(
        &self,
        ctx: &RequestContext,
        body: &CreateBillBody,
    ) -> Result<CreateBillResponse, Error> {
        let request = self.client.new_request(Method::POST, "bills", Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Fetches a bill payment.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<BillTransaction, Error> {
        let path = format!("bills/{}", segment(id)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Lists bill categories.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn categories(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<Vec<BillCategory>, Error> {
        let request =
            self.client
                .new_request(Method::GET, &query.apply("bills/categories"), NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Lists the billers in a category.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn billers(
        &self,
        ctx: &RequestContext,
        category: &str,
    ) -> Result<Vec<Biller>, Error> {
        let path = format!("bills/categories/{}", segment(category)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Lists the items a biller sells.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn items(
        &self,
        ctx: &RequestContext,
        category: &str,
        biller: &str,
    ) -> Result<Vec<BillerItem>, Error> {
        let path = format!(
            "bills/categories/{}/items/{}",
            segment(category)?,
            segment(biller)?
        );
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Checks a customer identifier with the biller before paying.
    ///
    /// Succeeds with no value; the response body is not inspected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRequest`] if the biller rejects the identifier.
    pub async fn validate(
        &self,
        ctx: &RequestContext,
        body: &ValidateBillBody,
    ) -> Result<(), Error> {
        let request = self
            .client
            .new_request(Method::POST, "bills/validate", Some(body))?;
        self.client.perform_discard(ctx, request).await
    }
}
