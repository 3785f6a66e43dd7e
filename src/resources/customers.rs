use http::Method;
use serde::{Deserialize, Serialize};

use super::{MessageResponse, PageQuery, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// A customer of the business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Unique identifier
    pub id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Middle name
    pub middle_name: String,
    /// Contact email
    pub email: String,
    /// Phone number in international format
    pub phone_number: String,
    /// ISO country code
    pub country: String,
    /// Current status as reported by the server
    pub status: String,
    /// Whether the customer has been blacklisted
    pub is_blacklisted: bool,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerBody {
    /// ISO country code
    pub country: String,
    /// Contact email
    pub email: String,
    /// First name
    pub firstname: String,
    /// Last name
    pub lastname: String,
    /// Middle name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
    /// Phone number in international format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Fields to change on a customer. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomerBody {
    /// New contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number in international format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// ISO country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Middle name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
}

/// KYC submission for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerKycBody {
    /// KYC tier being submitted, e.g. `"1"`
    pub tier: String,
    /// Tier 1 details; required when `tier` is `"1"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier1: Option<Tier1Kyc>,
}

/// Tier 1 KYC details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier1Kyc {
    /// Bank verification number
    pub bvn: String,
    /// State or region
    pub state: String,
    /// City
    pub city: String,
    /// ISO country code
    pub country: String,
    /// Street address
    pub address: String,
    /// Postal code
    pub postal_code: String,
    /// Phone number in international format
    pub phone_number: String,
}

/// Customer endpoints.
pub struct Customers<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Customers<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Customers<'_, H> {
    /// Lists customers, one page at a time.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<Vec<Customer>, Error> {
        let request = self
            .client
            .new_request(Method::GET, &query.apply("customers"), NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Fetches a single customer.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no customer has this id.
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Customer, Error> {
        let path = format!("customers/{}", segment(id)?);
        let request = self.client.new_request(Method::GET, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRequest`] if the server rejects the details.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        body: &CreateCustomerBody,
    ) -> Result<Customer, Error> {
        let request = self
            .client
            .new_request(Method::POST, "customers", Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Updates a customer and returns the stored result.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        body: &UpdateCustomerBody,
    ) -> Result<Customer, Error> {
        let path = format!("customers/{}/update", segment(id)?);
        let request = self.client.new_request(Method::POST, &path, Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Submits KYC details for a customer.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn kyc(
        &self,
        ctx: &RequestContext,
        id: &str,
        body: &CustomerKycBody,
    ) -> Result<MessageResponse, Error> {
        let path = format!("customers/{}/kyc", segment(id)?);
        let request = self.client.new_request(Method::POST, &path, Some(body))?;
        self.client.perform(ctx, request).await
    }

    /// Blacklists a customer.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn blacklist(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> Result<MessageResponse, Error> {
        let path = format!("customers/{}/blacklist", segment(id)?);
        let request = self.client.new_request(Method::POST, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }
}
