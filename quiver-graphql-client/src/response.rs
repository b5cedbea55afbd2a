//! GraphQL response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic GraphQL response envelope.
///
/// Usable as the destination of any call when the caller does not want to
/// declare its own `data`/`errors` struct. Payload errors are plain data here;
/// use [`GraphQLResponse::into_result`] to turn them into a client error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphQLResponse<T = Value> {
    /// The data returned by the query/mutation.
    pub data: Option<T>,
    /// Errors returned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLResponseError>>,
    /// Extensions (for tracing, caching info, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl<T> GraphQLResponse<T> {
    /// Check if the response has errors.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Get the data, returning an error if there are GraphQL errors.
    pub fn into_result(self) -> crate::Result<T> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            return Err(crate::GraphQLError::GraphQL(errors));
        }
        self.data.ok_or(crate::GraphQLError::NoData)
    }

    /// Get the data, ignoring any errors.
    pub fn data(self) -> Option<T> {
        self.data
    }

    /// Get the errors.
    pub fn errors(&self) -> &[GraphQLResponseError] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// A GraphQL error from the server.
///
/// Error entries vary between servers, so every member is kept as raw JSON
/// and decoding never fails on an unusual shape. [`locations`], [`path`] and
/// [`extensions`] give a typed view when the value has the standard form.
/// Keys beyond the standard ones are kept in `other`.
///
/// [`locations`]: GraphQLResponseError::locations
/// [`path`]: GraphQLResponseError::path
/// [`extensions`]: GraphQLResponseError::extensions
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphQLResponseError {
    /// Error message. Non-string messages are rendered as JSON text.
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: String,
    /// Raw `locations` member.
    #[serde(default, rename = "locations", skip_serializing_if = "Option::is_none")]
    pub raw_locations: Option<Value>,
    /// Raw `path` member.
    #[serde(default, rename = "path", skip_serializing_if = "Option::is_none")]
    pub raw_path: Option<Value>,
    /// Raw `extensions` member.
    #[serde(default, rename = "extensions", skip_serializing_if = "Option::is_none")]
    pub raw_extensions: Option<Value>,
    /// Non-standard keys.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl GraphQLResponseError {
    /// Locations in the query where the error occurred, if well formed.
    pub fn locations(&self) -> Option<Vec<ErrorLocation>> {
        self.raw_locations
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
    }

    /// Path to the field that caused the error, if well formed.
    pub fn path(&self) -> Option<Vec<PathSegment>> {
        self.raw_path
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
    }

    /// Additional error extensions, if they form an object.
    pub fn extensions(&self) -> Option<&Map<String, Value>> {
        self.raw_extensions.as_ref().and_then(Value::as_object)
    }
}

fn lenient_message<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(message) => message,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl std::fmt::Display for GraphQLResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(path) = self.path()
            && !path.is_empty()
        {
            write!(f, " (path: {})", format_path(&path))?;
        }
        if let Some(locations) = self.locations()
            && !locations.is_empty()
        {
            write!(f, " at ")?;
            for (i, loc) in locations.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}:{}", loc.line, loc.column)?;
            }
        }
        Ok(())
    }
}

/// Location in the GraphQL query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorLocation {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

/// Path segment in a GraphQL error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Field name.
    Field(String),
    /// Array index.
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{}", name),
            Self::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Format a path as a string, e.g. `employees[1].name`.
pub fn format_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        if let PathSegment::Field(_) = segment
            && !out.is_empty()
        {
            out.push('.');
        }
        out.push_str(&segment.to_string());
    }
    out
}
