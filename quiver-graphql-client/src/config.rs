//! GraphQL client configuration.

use std::env;
use std::time::Duration;

use crate::{GraphQLError, Result};

/// GraphQL client configuration.
#[derive(Debug, Clone)]
pub struct GraphQLClientConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Deadline applied to every call that does not set its own.
    /// `None` means calls are only bounded by the caller.
    pub timeout: Option<Duration>,
    /// Default headers for all requests. Repeated names are sent as
    /// multiple values.
    pub default_headers: Vec<(String, String)>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for GraphQLClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4000/graphql".to_string(),
            timeout: None,
            default_headers: Vec::new(),
            user_agent: format!("quiver-graphql-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GraphQLClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> GraphQLClientConfigBuilder {
        GraphQLClientConfigBuilder::default()
    }

    /// Create configuration for a specific endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Load configuration from `<PREFIX>_*` environment variables.
    ///
    /// Recognised keys: `ENDPOINT` (required), `TIMEOUT_SECS`, `USER_AGENT`
    /// and `BEARER_TOKEN`.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let var = |key: &str| env::var(format!("{}_{}", prefix, key)).ok();

        let endpoint = var("ENDPOINT").ok_or_else(|| {
            GraphQLError::Config(format!("{}_ENDPOINT is not set", prefix))
        })?;

        let mut builder = Self::builder().endpoint(endpoint);

        if let Some(secs) = var("TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                GraphQLError::Config(format!("{}_TIMEOUT_SECS is not a number: {}", prefix, secs))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = var("USER_AGENT") {
            builder = builder.user_agent(user_agent);
        }
        if let Some(token) = var("BEARER_TOKEN") {
            builder = builder.bearer_auth(token);
        }

        Ok(builder.build())
    }
}

/// Builder for GraphQL client configuration.
#[derive(Debug, Default)]
pub struct GraphQLClientConfigBuilder {
    config: GraphQLClientConfig,
}

impl GraphQLClientConfigBuilder {
    /// Set the GraphQL endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a default header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .default_headers
            .push((name.into(), value.into()));
        self
    }

    /// Set bearer authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.config.default_headers.push((
            "Authorization".to_string(),
            format!("Bearer {}", token.into()),
        ));
        self
    }

    /// Set user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GraphQLClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphQLClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:4000/graphql");
        assert!(config.timeout.is_none());
        assert!(config.default_headers.is_empty());
        assert!(config.user_agent.starts_with("quiver-graphql-client/"));
    }

    #[test]
    fn test_builder() {
        let config = GraphQLClientConfig::builder()
            .endpoint("https://api.example.com/graphql")
            .timeout(Duration::from_secs(10))
            .header("x-tenant", "acme")
            .header("x-tenant", "globex")
            .bearer_auth("token123")
            .build();

        assert_eq!(config.endpoint, "https://api.example.com/graphql");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert_eq!(
            config.default_headers,
            vec![
                ("x-tenant".to_string(), "acme".to_string()),
                ("x-tenant".to_string(), "globex".to_string()),
                ("Authorization".to_string(), "Bearer token123".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_env_requires_endpoint() {
        let err = GraphQLClientConfig::from_env("QUIVER_UNSET_PREFIX_31337").unwrap_err();
        assert!(matches!(err, GraphQLError::Config(_)));
    }
}
