//! Endpoint configuration broadcast to every accessor in a UI subtree.
//!
//! # Design
//! - Keep configuration as plain data; no validation happens here.
//! - An empty endpoint is a valid value and surfaces as a transport failure at request time.
//! - Caller headers are applied after the fixed JSON content type so they win on collision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header name for the request body media type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// Media type used for GraphQL-over-HTTP request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Endpoint and header settings shared by all accessors beneath one provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlConfig {
    /// GraphQL server endpoint URI.
    #[serde(default)]
    pub endpoint: String,
    /// Extra HTTP headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl GraphqlConfig {
    /// Create a configuration for `endpoint` with no extra headers.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Add or replace a single header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add or replace several headers.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Headers sent on the wire: the JSON content type, then the configured headers.
    ///
    /// Header names compare ASCII case-insensitively; a configured header replaces
    /// an earlier entry with the same name in place.
    #[must_use]
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut merged = vec![(
            CONTENT_TYPE_HEADER.to_string(),
            JSON_CONTENT_TYPE.to_string(),
        )];
        for (name, value) in &self.headers {
            if let Some(existing) = merged
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                *existing = (name.clone(), value.clone());
            } else {
                merged.push((name.clone(), value.clone()));
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_is_empty() {
        let config = GraphqlConfig::default();
        assert!(config.endpoint.is_empty());
        assert!(config.headers.is_empty());
        assert_eq!(
            config.request_headers(),
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn configured_headers_follow_content_type() {
        let config = GraphqlConfig::new("https://example.test/graphql")
            .with_header("Authorization", "Bearer token");
        assert_eq!(
            config.request_headers(),
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Bearer token".to_string()),
            ]
        );
    }

    #[test]
    fn configured_content_type_overrides_default() {
        let config = GraphqlConfig::new("https://example.test/graphql")
            .with_headers([("content-type", "application/graphql+json"), ("X-Trace", "1")]);
        let headers = config.request_headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers[0],
            (
                "content-type".to_string(),
                "application/graphql+json".to_string()
            )
        );
        assert_eq!(headers[1], ("X-Trace".to_string(), "1".to_string()));
    }

    #[test]
    fn deserializes_with_missing_fields() -> Result<(), serde_json::Error> {
        let config: GraphqlConfig = serde_json::from_value(json!({
            "endpoint": "https://example.test/graphql"
        }))?;
        assert_eq!(config, GraphqlConfig::new("https://example.test/graphql"));

        let empty: GraphqlConfig = serde_json::from_value(json!({}))?;
        assert_eq!(empty, GraphqlConfig::default());
        Ok(())
    }
}
