//! GraphQL request payload and call-scoped builder.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::{GraphQLClient, GraphQLError, GraphQLResponse, Result};

/// GraphQL request payload.
///
/// Optional members are left out of the JSON body entirely when unset, so a
/// bare query encodes as `{"query":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    /// The GraphQL query or mutation.
    pub query: String,
    /// Operation name (for documents with multiple operations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Variables for the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,
    /// Extensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl GraphQLRequest {
    /// Create a new request.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
            extensions: None,
        }
    }

    /// Set the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Set variables. They must serialize to a JSON object.
    pub fn variables<T: Serialize>(mut self, variables: T) -> Result<Self> {
        self.variables = Some(to_object(variables)?);
        Ok(self)
    }

    /// Set extensions.
    pub fn extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Encode the request as a JSON body.
    pub fn to_body(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }
}

fn to_object<T: Serialize>(value: T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(GraphQLError::InvalidVariables(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Per-call settings layered over the client defaults.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Headers that replace same-named default headers for this call.
    pub headers: HeaderMap,
    /// Deadline for this call, overriding the client timeout.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    /// Create empty call options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header for this call.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Set a deadline for this call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Query builder for GraphQL queries and mutations.
///
/// Builder errors (bad variables, bad headers) are held until [`send`] so the
/// chain stays fluent.
///
/// [`send`]: QueryBuilder::send
pub struct QueryBuilder<'a> {
    client: &'a GraphQLClient,
    request: GraphQLRequest,
    options: CallOptions,
    error: Option<GraphQLError>,
}

impl<'a> QueryBuilder<'a> {
    /// Create a new query builder.
    pub(crate) fn new(client: &'a GraphQLClient, query: impl Into<String>) -> Self {
        Self {
            client,
            request: GraphQLRequest::new(query),
            options: CallOptions::default(),
            error: None,
        }
    }

    /// Set the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.request.operation_name = Some(name.into());
        self
    }

    /// Set variables.
    pub fn variables<T: Serialize>(mut self, variables: T) -> Self {
        match to_object(variables) {
            Ok(map) => self.request.variables = Some(map),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Set a single variable.
    pub fn variable(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.request
                    .variables
                    .get_or_insert_with(Map::new)
                    .insert(name.into(), value);
            }
            Err(e) => self.fail(e.into()),
        }
        self
    }

    /// Set extensions.
    pub fn extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.request.extensions = Some(extensions);
        self
    }

    /// Set a custom timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Add a header for this request.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        match crate::headers::header_map_from_pairs([(name, value)]) {
            Ok(headers) => {
                for (name, value) in headers {
                    if let Some(name) = name {
                        self.options.headers.append(name, value);
                    }
                }
            }
            Err(e) => self.fail(e),
        }
        self
    }

    /// The request as built so far.
    pub fn request(&self) -> &GraphQLRequest {
        &self.request
    }

    fn fail(&mut self, error: GraphQLError) {
        self.error.get_or_insert(error);
    }

    /// Execute and decode the whole response body into `T`.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.client.execute_with(&self.request, &self.options).await
    }

    /// Execute and decode into the generic response envelope.
    pub async fn send_response<D: DeserializeOwned>(self) -> Result<GraphQLResponse<D>> {
        self.send().await
    }

    /// Execute and return the raw response.
    pub async fn send_raw(self) -> Result<GraphQLResponse<Value>> {
        self.send().await
    }
}
