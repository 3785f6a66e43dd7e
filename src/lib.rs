//! Swervpay: async client for the Swervpay payments API
//!
//! Typed method calls are turned into authenticated HTTP requests, and
//! responses into typed values or a single [`Error`].
//!
//! Bearer tokens are handled transparently: the first request goes out
//! without one, and any 401 triggers one Basic-credentialed exchange
//! against `POST auth` followed by one replay of the original request.
//! Concurrent callers hitting an expired token share a single exchange.
//!
//! # Example
//!
//! ```no_run
//! use swervpay::{ClientConfig, RequestContext, SwervpayClient};
//! use swervpay::resources::ResolveAccountBody;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder("biz_123", "sk_test_abc")
//!     .with_sandbox(true)
//!     .build()?;
//! let client = SwervpayClient::new(config)?;
//! let ctx = RequestContext::new();
//!
//! let account = client
//!     .banks()
//!     .resolve_account(
//!         &ctx,
//!         &ResolveAccountBody {
//!             account_number: "0123456789".into(),
//!             bank_code: "058".into(),
//!         },
//!     )
//!     .await?;
//! println!("{}", account.account_name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
mod error;
pub mod resources;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{NO_BODY, RequestContext, Session, SwervpayClient};
pub use config::ClientConfig;
pub use error::{BuildError, Error};
pub use resources::PageQuery;
