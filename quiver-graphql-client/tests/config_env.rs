//! Environment-driven configuration for quiver-graphql-client.
//!
//! Kept in its own test binary with a single test: `env::set_var` is not
//! thread-safe, so nothing else may run alongside it.

use quiver_graphql_client::GraphQLClientConfig;
use std::env;
use std::time::Duration;

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("QUIVER_IT_ENDPOINT", "https://api.example.com/graphql");
        env::set_var("QUIVER_IT_TIMEOUT_SECS", "15");
        env::set_var("QUIVER_IT_BEARER_TOKEN", "abc");
    }

    let config = GraphQLClientConfig::from_env("QUIVER_IT").unwrap();
    assert_eq!(config.endpoint, "https://api.example.com/graphql");
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    assert_eq!(
        config.default_headers,
        vec![("Authorization".to_string(), "Bearer abc".to_string())]
    );

    unsafe {
        env::set_var("QUIVER_IT_TIMEOUT_SECS", "soon");
    }
    assert!(GraphQLClientConfig::from_env("QUIVER_IT").is_err());

    unsafe {
        env::remove_var("QUIVER_IT_ENDPOINT");
        env::remove_var("QUIVER_IT_TIMEOUT_SECS");
        env::remove_var("QUIVER_IT_BEARER_TOKEN");
    }
}
