//! HTTP capability used to carry GraphQL requests.
//!
//! # Design
//! - The transport only moves bytes; encoding and envelope parsing stay in the client.
//! - Futures are `?Send` because UI event loops are single-threaded.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::Result;

/// Fully resolved `POST` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostRequest {
    /// Target URI.
    pub url: String,
    /// Headers in wire order.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: String,
}

impl PostRequest {
    /// Value of the first header matching `name` (ASCII case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Black-box HTTP capability.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphqlClientError::Transport`] when the round trip fails.
    async fn post(&self, request: PostRequest) -> Result<String>;
}

#[async_trait(?Send)]
impl<T> Transport for Rc<T>
where
    T: Transport + ?Sized,
{
    async fn post(&self, request: PostRequest) -> Result<String> {
        (**self).post(request).await
    }
}
