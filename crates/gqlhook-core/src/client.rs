//! GraphQL-over-HTTP client bound to one configuration.

use tracing::{debug, warn};

use crate::config::GraphqlConfig;
use crate::error::Result;
use crate::request::GraphqlRequest;
use crate::response::ResponseEnvelope;
use crate::transport::{PostRequest, Transport};

/// Sends GraphQL requests to the configured endpoint over `T`.
#[derive(Clone, Debug)]
pub struct GraphqlClient<T> {
    config: GraphqlConfig,
    transport: T,
}

impl<T> GraphqlClient<T>
where
    T: Transport,
{
    /// Bind a transport to a configuration.
    pub const fn new(config: GraphqlConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Configuration requests are sent with.
    #[must_use]
    pub const fn config(&self) -> &GraphqlConfig {
        &self.config
    }

    /// Resolve the wire request for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphqlClientError::Encode`] if the body cannot be serialised.
    pub fn build_post(&self, request: &GraphqlRequest) -> Result<PostRequest> {
        Ok(PostRequest {
            url: self.config.endpoint.clone(),
            headers: self.config.request_headers(),
            body: request.to_body()?,
        })
    }

    /// Run one round trip and decode the envelope.
    ///
    /// GraphQL `errors` in the envelope are returned as data, not as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns an encode, transport or decode failure.
    pub async fn execute(&self, request: &GraphqlRequest) -> Result<ResponseEnvelope> {
        let post = self.build_post(request)?;
        debug!(
            endpoint = %post.url,
            has_variables = request.variables.is_some(),
            "dispatching graphql request"
        );
        let body = self.transport.post(post).await.inspect_err(|err| {
            warn!(endpoint = %self.config.endpoint, error = %err, "graphql request failed");
        })?;
        let envelope = ResponseEnvelope::from_body(&body).inspect_err(|err| {
            warn!(endpoint = %self.config.endpoint, error = %err, "graphql response rejected");
        })?;
        debug!(
            has_data = envelope.data.is_some(),
            error_count = envelope.error_count(),
            "graphql response decoded"
        );
        Ok(envelope)
    }
}
