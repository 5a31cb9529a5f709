//! Canned endpoints, documents and response bodies.

use gqlhook_core::Variables;
use serde_json::{Value, json};

/// Endpoint used by the scenario suites.
pub const EXAMPLE_ENDPOINT: &str = "https://example.test/graphql";

/// Minimal query document.
pub const PING_QUERY: &str = "{ ping }";

/// Login mutation with two variables.
pub const SIGNIN_MUTATION: &str = "mutation($login: String!, $password: String!) {
  login(login: $login, password: $password) {
    success
    error
  }
}";

/// Body of a `{data: ...}` response.
#[must_use]
pub fn data_body(data: &Value) -> String {
    json!({ "data": data }).to_string()
}

/// Body of an `{errors: [...]}` response with one entry per message.
#[must_use]
pub fn errors_body(messages: &[&str]) -> String {
    let errors: Vec<Value> = messages
        .iter()
        .map(|message| json!({ "message": message }))
        .collect();
    json!({ "errors": errors }).to_string()
}

/// Turn a JSON object literal into a variables map; anything else yields an empty map.
#[must_use]
pub fn variables(value: Value) -> Variables {
    match value {
        Value::Object(map) => map,
        _ => Variables::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_are_envelopes() -> Result<(), serde_json::Error> {
        let data: Value = serde_json::from_str(&data_body(&json!({ "ping": "pong" })))?;
        assert_eq!(data, json!({ "data": { "ping": "pong" } }));

        let errors: Value = serde_json::from_str(&errors_body(&["bad"]))?;
        assert_eq!(errors, json!({ "errors": [{ "message": "bad" }] }));
        Ok(())
    }

    #[test]
    fn variables_rejects_non_objects() {
        assert!(variables(json!([1, 2])).is_empty());
        assert_eq!(variables(json!({ "a": 1 })).len(), 1);
    }
}
