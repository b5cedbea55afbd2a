//! GraphQL client error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for GraphQL client operations.
pub type Result<T> = std::result::Result<T, GraphQLError>;

/// GraphQL client errors.
#[derive(Debug, Error)]
pub enum GraphQLError {
    /// HTTP request failed in the default transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom transport could not complete the request.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The call did not finish before its deadline.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// Variables did not serialize to a JSON object.
    #[error("Invalid variables: {0}")]
    InvalidVariables(String),

    /// The response body did not decode into the destination type.
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        /// HTTP status of the undecodable response.
        status: u16,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// GraphQL errors returned by the server.
    #[error("GraphQL errors: {0:?}")]
    GraphQL(Vec<crate::GraphQLResponseError>),

    /// A successful response carried neither data nor errors.
    #[error("Response contained no data")]
    NoData,

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid header name or value.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GraphQLError {
    /// Check if this is a network error.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport(_) | Self::Timeout(_))
    }

    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_)) || matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if the response body could not be decoded.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this is a GraphQL error (server-side).
    pub fn is_graphql_error(&self) -> bool {
        matches!(self, Self::GraphQL(_))
    }

    /// HTTP status attached to the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get GraphQL errors if this is a GraphQL error.
    pub fn graphql_errors(&self) -> Option<&[crate::GraphQLResponseError]> {
        match self {
            Self::GraphQL(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_network_error() {
        let err = GraphQLError::Timeout(Duration::from_millis(50));
        assert!(err.is_timeout());
        assert!(err.is_network_error());
        assert!(!err.is_decode_error());
        assert_eq!(err.to_string(), "Request timed out after 50ms");
    }

    #[test]
    fn test_decode_error_keeps_status() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = GraphQLError::Decode { status: 502, source };
        assert!(err.is_decode_error());
        assert_eq!(err.status_code(), Some(502));
        assert!(err.to_string().starts_with("Failed to decode response (HTTP 502)"));
    }

    #[test]
    fn test_graphql_errors_accessor() {
        let err = GraphQLError::Transport("connection reset".into());
        assert!(err.graphql_errors().is_none());
        assert!(!err.is_graphql_error());
    }
}
