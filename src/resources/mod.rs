//! Typed endpoints of the Swervpay API.
//!
//! Each handle borrows a [`SwervpayClient`](crate::SwervpayClient) and only
//! supplies a path and a payload shape; requests go through the client's
//! shared pipeline. Handles are obtained from accessors such as
//! [`SwervpayClient::customers`](crate::SwervpayClient::customers).
//!
//! Response types default every field the server omits instead of
//! failing. Optional request fields are left out of the JSON when `None`.

mod banks;
mod bills;
mod business;
mod cards;
mod collections;
mod customers;
mod fx;
mod payouts;
mod query;
mod transactions;
mod wallets;
mod webhooks;

#[cfg(test)]
mod query_tests;

use serde::{Deserialize, Serialize};

pub use banks::{Bank, Banks, ResolveAccountBody, ResolvedAccount};
pub use bills::{
    BillCategory, BillDetail, BillTransaction, Biller, BillerItem, Bills, CreateBillBody,
    CreateBillResponse, ValidateBillBody,
};
pub use business::{Business, BusinessApi};
pub use cards::{Card, CardAmountBody, Cards, CreateCardBody, CreateCardResponse};
pub use collections::{
    AdditionalInformation, CollectionHistory, Collections, CreateCollectionBody, KycAddress,
    KycDocument,
};
pub use customers::{
    CreateCustomerBody, Customer, CustomerKycBody, Customers, Tier1Kyc, UpdateCustomerBody,
};
pub use fx::{Fx, FxAmount, FxBody, FxRateResponse};
pub use payouts::{CreatePayoutBody, CreatePayoutResponse, Payouts};
pub use query::PageQuery;
pub use transactions::{Transaction, Transactions};
pub use wallets::{CreditWalletBody, CreditWalletResponse, CreditWalletSender, Wallet, Wallets};
pub use webhooks::Webhooks;

pub(crate) use query::segment;

/// Acknowledgement returned by action endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}
