use http::Method;
use serde::{Deserialize, Serialize};

use super::{CreditWalletBody, CreditWalletResponse, PageQuery, Wallet, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// A payment received into a collection account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionHistory {
    /// Unique identifier
    pub id: String,
    /// Amount received
    pub amount: f64,
    /// Fees deducted by Swervpay
    pub charges: f64,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
    /// How the payment arrived
    pub payment_method: String,
    /// Merchant or provider reference
    pub reference: String,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionBody {
    /// Owning customer
    pub customer_id: String,
    /// ISO currency code, e.g. `NGN`
    pub currency: String,
    /// Name shown to payers
    pub merchant_name: String,
    /// Expected amount, for single-use collections
    pub amount: f64,
    /// `"static"` or `"dynamic"`
    #[serde(rename = "type")]
    pub collection_type: String,
    /// Idempotency key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// KYC details required for some currencies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<AdditionalInformation>,
}

/// Extra KYC attached to a collection account, required for some currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInformation {
    /// Intended use of the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_designation: Option<String>,
    /// Personal or business
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Residential address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<KycAddress>,
    /// URL of a recent bank statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_statement: Option<String>,
    /// Date of birth (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Identity document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<KycDocument>,
    /// Employment status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    /// Annual income band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_band: Option<String>,
    /// National identification number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<String>,
    /// Source of income
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_of_income: Option<String>,
    /// Tax identification number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    /// URL of a recent utility bill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility_bill: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycAddress {
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// State or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Street and number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDocument {
    /// Expiry date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// Issue date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    /// Document number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Document type, e.g. `PASSPORT` (`type` on the wire)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    /// Scans of the document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

/// Collection (virtual account) endpoints.
pub struct Collections<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Collections<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Collections<'_, H> {
    /// Lists collection accounts, one page at a time.
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
            .new_request(Method::GET, &query.apply("collections"), NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Fetches a single collection account.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Wallet, Error> {
        let path = format!("collections/{}", segment(id)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Opens a collection account for a customer.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn create(
        &self,
        ctx: &RequestContext,
        body: &CreateCollectionBody,
    ) -> Result<Wallet, Error> {
        let request = self
            .client
            .new_request(Method::POST, "collections", Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Credits a collection account. Only available in sandbox.
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
        let path = format!("collections/{}/credit", segment(id)?);
        let request = self.client.new_request(Method::POST, &path, Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Lists payments received into a collection account.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn transactions(
        &self,
        ctx: &RequestContext,
        id: &str,
        query: &PageQuery,
    ) -> Result<Vec<CollectionHistory>, Error> {
        let path = query.apply(&format!("collections/{}/transactions", segment(id)?));
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }
}
