//! Caller-controlled cancellation and deadlines.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::Error;

/// Per-call cancellation and deadline, threaded through every API call.
///
/// The context bounds everything a call does, including a token refresh
/// it triggers. An empty context (the default) never interrupts a call;
/// the transport timeout from [`ClientConfig`](crate::ClientConfig) still applies.
///
/// # Example
///
/// ```
/// use swervpay::RequestContext;
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = RequestContext::new()
///     .with_cancellation(token.clone())
///     .with_timeout(Duration::from_secs(5));
/// assert!(!ctx.is_cancelled());
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context that never interrupts a call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts the call when `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Aborts the call once `deadline` has passed.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Aborts the call once `timeout` has elapsed from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true if the cancellation token has fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Drives `fut` to completion unless the context interrupts it first.
    ///
    /// Cancellation is checked before the deadline, and both before the
    /// future is polled, so an already-cancelled context never starts I/O.
    ///
    /// # Errors
    ///
    /// - [`Error::Cancelled`] if the cancellation token fires
    /// - [`Error::DeadlineExceeded`] if the deadline passes
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Error> {
        let cancelled = async {
            match &self.cancellation {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(Error::Cancelled),
            () = expired => Err(Error::DeadlineExceeded),
            out = fut => Ok(out),
        }
    }
}
