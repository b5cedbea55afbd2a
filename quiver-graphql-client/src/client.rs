//! GraphQL client implementation.

use bytes::Bytes;
use graphql_client::GraphQLQuery;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

use crate::headers::{header_map_from_pairs, merge_headers};
use crate::request::{CallOptions, GraphQLRequest};
use crate::transport::{ReqwestTransport, Transport};
use crate::{GraphQLClientConfig, GraphQLError, GraphQLResponse, QueryBuilder, Result};

/// GraphQL client.
///
/// Holds no per-call state; clones share the transport and default headers.
#[derive(Clone)]
pub struct GraphQLClient {
    endpoint: Arc<str>,
    transport: Arc<dyn Transport>,
    default_headers: Arc<HeaderMap>,
    timeout: Option<Duration>,
}

impl GraphQLClient {
    /// Create a new GraphQL client.
    ///
    /// Falls back to [`ReqwestTransport`] when no transport is given.
    pub fn new(
        endpoint: impl Into<String>,
        transport: Option<Arc<dyn Transport>>,
        default_headers: HeaderMap,
    ) -> Self {
        let transport =
            transport.unwrap_or_else(|| Arc::new(ReqwestTransport::default()) as Arc<dyn Transport>);

        Self {
            endpoint: Arc::from(endpoint.into()),
            transport,
            default_headers: Arc::new(default_headers),
            timeout: None,
        }
    }

    /// Create a new GraphQL client with custom configuration.
    pub fn with_config(config: GraphQLClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::with_user_agent(&config.user_agent)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client from configuration with a caller-supplied transport.
    pub fn with_transport(
        config: GraphQLClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        url::Url::parse(&config.endpoint)
            .map_err(|e| GraphQLError::InvalidUrl(format!("{}: {}", config.endpoint, e)))?;
        let default_headers = header_map_from_pairs(
            config
                .default_headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )?;

        let mut client = Self::new(config.endpoint, Some(transport), default_headers);
        client.timeout = config.timeout;
        Ok(client)
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the default headers.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Get the default timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Create a query builder.
    pub fn query(&self, query: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder::new(self, query)
    }

    /// Create a mutation builder.
    pub fn mutation(&self, mutation: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder::new(self, mutation)
    }

    /// Execute a request and decode the whole response body into `T`.
    ///
    /// `errors` entries in the payload are not treated as failures; `T`
    /// receives them like any other field.
    pub async fn execute<T: DeserializeOwned>(&self, request: &GraphQLRequest) -> Result<T> {
        self.execute_with(request, &CallOptions::default()).await
    }

    /// Execute a request with per-call headers and deadline.
    pub async fn execute_with<T: DeserializeOwned>(
        &self,
        request: &GraphQLRequest,
        options: &CallOptions,
    ) -> Result<T> {
        debug!(
            endpoint = %self.endpoint,
            operation = request.operation_name.as_deref().unwrap_or(""),
            "Executing GraphQL request"
        );
        self.post(request.to_body()?, options).await
    }

    /// Execute a request and return the raw response envelope.
    pub async fn execute_raw(&self, request: &GraphQLRequest) -> Result<GraphQLResponse<Value>> {
        self.execute(request).await
    }

    /// Execute an operation generated by `graphql_client`.
    pub async fn execute_query<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<GraphQLResponse<Q::ResponseData>> {
        let body = Q::build_query(variables);
        debug!(
            endpoint = %self.endpoint,
            operation = body.operation_name,
            "Executing GraphQL request"
        );
        self.post(Bytes::from(serde_json::to_vec(&body)?), &CallOptions::default())
            .await
    }

    async fn post<T: DeserializeOwned>(&self, body: Bytes, options: &CallOptions) -> Result<T> {
        let mut http_request = http::Request::builder()
            .method(Method::POST)
            .uri(&*self.endpoint)
            .body(body)
            .map_err(|e| GraphQLError::InvalidUrl(format!("{}: {}", self.endpoint, e)))?;
        *http_request.headers_mut() = merge_headers(&self.default_headers, &options.headers);

        let send = self.transport.send(http_request);
        let response = match options.timeout.or(self.timeout) {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .map_err(|_| GraphQLError::Timeout(limit))??,
            None => send.await?,
        };

        let status = response.status();
        trace!(%status, bytes = response.body().len(), "Decoding GraphQL response");

        serde_json::from_slice(response.body()).map_err(|source| GraphQLError::Decode {
            status: status.as_u16(),
            source,
        })
    }
}

impl Default for GraphQLClient {
    fn default() -> Self {
        Self::new(GraphQLClientConfig::default().endpoint, None, HeaderMap::new())
    }
}

impl std::fmt::Debug for GraphQLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLClient")
            .field("endpoint", &self.endpoint)
            .field("default_headers", &self.default_headers)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
