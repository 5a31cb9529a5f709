//! GraphQL-over-HTTP response envelope.
//!
//! # Design
//! - `errors` entries stay raw JSON; a malformed entry never fails the decode.
//! - [`GraphqlError`] is an optional typed view built entry by entry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GraphqlClientError, Result};

/// `{data, errors}` body returned by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Execution result; `null` and a missing key both decode to `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// GraphQL errors exactly as sent; an empty array is still `Some`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Value>>,
}

impl ResponseEnvelope {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlClientError::Decode`] if the body is not a JSON envelope.
    pub fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(GraphqlClientError::decode)
    }

    /// Number of GraphQL errors carried by the envelope.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.as_ref().map_or(0, Vec::len)
    }

    /// Typed view of the object entries in `errors`; other entries are skipped.
    #[must_use]
    pub fn graphql_errors(&self) -> Vec<GraphqlError> {
        self.errors
            .iter()
            .flatten()
            .filter_map(GraphqlError::from_value)
            .collect()
    }
}

/// Typed view of a single `errors` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphqlError {
    /// Human-readable error message; empty when the server sent none.
    pub message: String,
    /// Document locations the error refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
    /// Response path of the failing field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    /// Server-specific extension data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
    /// Unknown keys, plus known keys whose value had an unexpected shape.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GraphqlError {
    /// Build the view from a raw entry. Returns `None` unless the entry is an object.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let mut extra = value.as_object()?.clone();
        let message = take(&mut extra, "message").unwrap_or_default();
        let locations = take(&mut extra, "locations");
        let path = take(&mut extra, "path");
        let extensions = take(&mut extra, "extensions");
        Some(Self {
            message,
            locations,
            path,
            extensions,
            extra,
        })
    }
}

// Moves `key` out of `fields` only when it decodes as `D`.
fn take<D: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str) -> Option<D> {
    let parsed = serde_json::from_value(fields.get(key)?.clone()).ok()?;
    fields.remove(key);
    Some(parsed)
}

/// Line/column position inside the GraphQL document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// 1-based line; 0 when missing.
    #[serde(default)]
    pub line: u32,
    /// 1-based column; 0 when missing.
    #[serde(default)]
    pub column: u32,
}
