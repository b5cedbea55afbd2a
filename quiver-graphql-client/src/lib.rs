//! # Quiver GraphQL Client
//!
//! A small GraphQL-over-HTTP client: it POSTs a `query`/`variables` payload as
//! JSON, attaches default headers, and decodes the response body into any type
//! the caller chooses.
//!
//! ## Features
//!
//! - **Generic decoding**: decode into your own `data`/`errors` struct or the
//!   bundled [`GraphQLResponse`] envelope
//! - **Pluggable transport**: swap the reqwest-backed [`ReqwestTransport`] for
//!   anything implementing [`Transport`]
//! - **Per-call options**: extra headers and deadlines without touching the
//!   shared client
//! - **Typed operations**: run operations generated by `graphql_client`
//!
//! Payload `errors` are never turned into call failures; they are decoded like
//! any other field and left for the caller to inspect.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quiver_graphql_client::{GraphQLClient, GraphQLRequest, GraphQLResponse, HeaderMap};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Employee {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct Employees {
//!     employees: Vec<Employee>,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GraphQLClient::new("https://api.example.com/graphql", None, HeaderMap::new());
//!
//!     let response: GraphQLResponse<Employees> = client
//!         .execute(&GraphQLRequest::new("{ employees { id name } }"))
//!         .await?;
//!
//!     for error in response.errors() {
//!         eprintln!("GraphQL error: {}", error);
//!     }
//!     if let Some(data) = response.data {
//!         for employee in data.employees {
//!             println!("{} {}", employee.id, employee.name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Builder
//!
//! ```rust,no_run
//! use quiver_graphql_client::{GraphQLClient, GraphQLClientConfig, GraphQLResponse};
//! use std::time::Duration;
//!
//! # async fn run() -> quiver_graphql_client::Result<()> {
//! let client = GraphQLClient::with_config(
//!     GraphQLClientConfig::builder()
//!         .endpoint("https://api.example.com/graphql")
//!         .bearer_auth("token")
//!         .build(),
//! )?;
//!
//! let response: GraphQLResponse = client
//!     .query("query Employee($id: ID!) { employee(id: $id) { name } }")
//!     .variable("id", 15)
//!     .header("x-request-id", "42")
//!     .timeout(Duration::from_secs(5))
//!     .send()
//!     .await?;
//! # let _ = response;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod headers;
mod request;
mod response;
mod transport;

pub use client::GraphQLClient;
pub use config::{GraphQLClientConfig, GraphQLClientConfigBuilder};
pub use error::{GraphQLError, Result};
pub use headers::{header_map_from_pairs, merge_headers};
pub use request::{CallOptions, GraphQLRequest, QueryBuilder};
pub use response::{ErrorLocation, GraphQLResponse, GraphQLResponseError, PathSegment, format_path};
pub use transport::{ReqwestTransport, Transport};

// Re-export common types
pub use graphql_client::GraphQLQuery;
pub use http::{HeaderMap, HeaderName, HeaderValue};
pub use serde_json::Value as JsonValue;
