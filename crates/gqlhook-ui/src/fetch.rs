//! Browser fetch transport.

use async_trait::async_trait;
use gloo::console;
use gloo_net::http::Request;
use gqlhook_core::{GraphqlClientError, PostRequest, Result, Transport};

/// Sends requests with `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post(&self, request: PostRequest) -> Result<String> {
        let mut req = Request::post(&request.url);
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        let response = req.body(request.body).send().await.map_err(|err| {
            console::error!("graphql fetch failed", request.url.clone(), err.to_string());
            GraphqlClientError::transport(err)
        })?;
        response.text().await.map_err(|err| {
            console::error!("graphql body read failed", request.url.clone(), err.to_string());
            GraphqlClientError::transport(err)
        })
    }
}
