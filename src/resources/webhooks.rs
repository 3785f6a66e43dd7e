use http::Method;

use super::{MessageResponse, segment};
use crate::transport::HttpClient;
use crate::{Error, NO_BODY, RequestContext, SwervpayClient};

/// Webhook delivery endpoints.
pub struct Webhooks<'a, H> {
    client: &'a SwervpayClient<H>,
}

impl<'a, H> Webhooks<'a, H> {
    pub(crate) const fn new(client: &'a SwervpayClient<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> Webhooks<'_, H> {
    /// Sends a test event to a configured webhook.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn test(&self, ctx: &RequestContext, id: &str) -> Result<MessageResponse, Error> {
        let path = format!("webhook/{}/test", segment(id)?);
        let request = self.client.new_request(Method::POST, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }

    /// Redelivers a logged webhook event.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn retry(
        &self,
        ctx: &RequestContext,
        log_id: &str,
    ) -> Result<MessageResponse, Error> {
        let path = format!("webhook/{}/retry", segment(log_id)?);
        let request = self.client.new_request(Method::POST, &path, NO_BODY)?;
        self.client.perform(ctx, request).await
    }
}
