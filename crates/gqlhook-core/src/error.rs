//! Error types for GraphQL request operations.

use std::fmt::Display;

use thiserror::Error;

/// Result alias for GraphQL request operations.
pub type Result<T> = std::result::Result<T, GraphqlClientError>;

/// Failures caught at the accessor boundary.
///
/// GraphQL-level `errors` returned by the server are not represented here; they
/// travel in [`crate::ResponseEnvelope::errors`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphqlClientError {
    /// The HTTP round trip failed (unreachable host, rejected fetch, bad endpoint).
    #[error("graphql transport failed: {detail}")]
    Transport {
        /// Transport-supplied failure description.
        detail: String,
    },
    /// The response body was not a JSON GraphQL envelope.
    #[error("graphql response could not be decoded: {detail}")]
    Decode {
        /// Parser failure description.
        detail: String,
    },
    /// The request body could not be serialised.
    #[error("graphql request could not be encoded: {detail}")]
    Encode {
        /// Serialiser failure description.
        detail: String,
    },
}

impl GraphqlClientError {
    /// Build a transport failure from any displayable cause.
    #[must_use]
    pub fn transport(cause: impl Display) -> Self {
        Self::Transport {
            detail: cause.to_string(),
        }
    }

    /// Build a decode failure from any displayable cause.
    #[must_use]
    pub fn decode(cause: impl Display) -> Self {
        Self::Decode {
            detail: cause.to_string(),
        }
    }

    /// Build an encode failure from any displayable cause.
    #[must_use]
    pub fn encode(cause: impl Display) -> Self {
        Self::Encode {
            detail: cause.to_string(),
        }
    }

    /// Underlying failure description without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transport { detail } | Self::Decode { detail } | Self::Encode { detail } => {
                detail
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphqlClientError;

    #[test]
    fn display_includes_category_and_detail() {
        let cases = vec![
            (
                GraphqlClientError::transport("connection refused"),
                "graphql transport failed: connection refused",
            ),
            (
                GraphqlClientError::decode("expected value at line 1 column 1"),
                "graphql response could not be decoded: expected value at line 1 column 1",
            ),
            (
                GraphqlClientError::encode("key must be a string"),
                "graphql request could not be encoded: key must be a string",
            ),
        ];

        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn detail_strips_category() {
        assert_eq!(GraphqlClientError::transport("dns").detail(), "dns");
        assert_eq!(GraphqlClientError::decode("eof").detail(), "eof");
    }
}
