//! Configuration context shared by every accessor under one provider.
//!
//! # Design
//! - One shared configuration per provider; accessors only read it.
//! - Equality is by value so consumers re-render only when the settings change.
//! - Outside any provider, accessors fall back to the empty default.

use std::collections::BTreeMap;
use std::rc::Rc;

use gqlhook_core::GraphqlConfig;

/// Context value published by [`crate::GraphqlProvider`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphqlCtx {
    config: Rc<GraphqlConfig>,
}

impl GraphqlCtx {
    /// Wrap a configuration for broadcasting.
    #[must_use]
    pub fn new(config: GraphqlConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    /// Build the context from provider props.
    #[must_use]
    pub fn from_props(endpoint: &str, headers: Option<&BTreeMap<String, String>>) -> Self {
        let config = GraphqlConfig::new(endpoint);
        Self::new(match headers {
            Some(headers) => config.with_headers(headers.clone()),
            None => config,
        })
    }

    /// Broadcast configuration.
    #[must_use]
    pub fn config(&self) -> &GraphqlConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_has_empty_endpoint() {
        let ctx = GraphqlCtx::default();
        assert_eq!(ctx.config().endpoint, "");
        assert!(ctx.config().headers.is_empty());
    }

    #[test]
    fn props_become_configuration() {
        let headers = BTreeMap::from([("Authorization".to_string(), "token".to_string())]);
        let ctx = GraphqlCtx::from_props("https://example.test/graphql", Some(&headers));
        assert_eq!(ctx.config().endpoint, "https://example.test/graphql");
        assert_eq!(ctx.config().headers, headers);

        let bare = GraphqlCtx::from_props("https://example.test/graphql", None);
        assert!(bare.config().headers.is_empty());
    }

    #[test]
    fn equality_compares_configuration_values() {
        let left = GraphqlCtx::from_props("https://example.test/graphql", None);
        let right = GraphqlCtx::new(GraphqlConfig::new("https://example.test/graphql"));
        assert_eq!(left, right);
        assert_ne!(left, GraphqlCtx::default());
    }
}
