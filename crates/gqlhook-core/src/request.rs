//! Request descriptors and the fixed operation an accessor is built around.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{GraphqlClientError, Result};

/// GraphQL variables object.
pub type Variables = Map<String, Value>;

/// JSON body posted to the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphqlRequest {
    /// GraphQL document.
    pub query: String,
    /// Variables object; omitted from the body when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

impl GraphqlRequest {
    /// Build a request body from a document and optional variables.
    #[must_use]
    pub fn new(query: impl Into<String>, variables: Option<Variables>) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Serialise the request into its JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlClientError::Encode`] if the variables cannot be serialised.
    pub fn to_body(&self) -> Result<String> {
        serde_json::to_string(self).map_err(GraphqlClientError::encode)
    }
}

/// The fixed document (and optional fixed variables) an accessor executes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operation {
    /// GraphQL document shared by every call from this accessor.
    pub query: String,
    /// Variables used by `load_data` and to decide whether to load on mount.
    pub variables: Option<Variables>,
    /// Explicit auto-load override; `None` defers to the presence of `variables`.
    pub load_on_start: Option<bool>,
}

impl Operation {
    /// Create an operation with no fixed variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            load_on_start: None,
        }
    }

    /// Attach fixed variables.
    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Force or suppress the automatic load on mount.
    #[must_use]
    pub const fn with_load_on_start(mut self, load_on_start: bool) -> Self {
        self.load_on_start = Some(load_on_start);
        self
    }

    /// Whether the accessor fires `load_data` once when it is created.
    ///
    /// Presence is what counts: an empty variables object still triggers a load.
    #[must_use]
    pub fn should_load_on_start(&self) -> bool {
        self.load_on_start.unwrap_or(self.variables.is_some())
    }

    /// Request used by `load_data`: the fixed document with the fixed variables.
    #[must_use]
    pub fn load_request(&self) -> GraphqlRequest {
        GraphqlRequest::new(self.query.clone(), self.variables.clone())
    }

    /// Request used by `submit`: the fixed document with caller variables only.
    #[must_use]
    pub fn submit_request(&self, variables: Option<Variables>) -> GraphqlRequest {
        GraphqlRequest::new(self.query.clone(), variables)
    }
}
