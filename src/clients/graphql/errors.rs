//! GraphQL-specific error types for the monday.com API SDK.
//!
//! monday.com reports most failures with HTTP 200 and an `errors` array in
//! the body. Unlike the transport layer, the GraphQL client surfaces those
//! as [`GraphqlError::Remote`] so callers never have to inspect raw bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::clients::graphql::{GraphqlClient, GraphqlError};
//!
//! match client.query("me { id }").await {
//!     Ok(data) => println!("Data: {}", data),
//!     Err(GraphqlError::Remote { errors }) => {
//!         println!("GraphQL errors: {:?}", errors);
//!     }
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use crate::query::{OperationType, QueryError};
use serde_json::Value;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use monday_api::clients::graphql::GraphqlError;
/// use monday_api::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"error_message":"Not Authenticated"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Not Authenticated"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The document could not be built from the supplied values.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The response carried GraphQL errors and no data.
    #[error("monday.com returned GraphQL errors: {}", summarize(.errors))]
    Remote {
        /// The raw error objects from the response's `errors` array.
        errors: Vec<Value>,
    },

    /// The response carried neither data nor errors.
    #[error("The {operation} response contained neither data nor errors.")]
    MissingData {
        /// The operation that was sent.
        operation: OperationType,
    },
}

impl GraphqlError {
    /// Returns the `message` of each remote error, if this is a
    /// [`GraphqlError::Remote`].
    #[must_use]
    pub fn remote_messages(&self) -> Vec<&str> {
        match self {
            Self::Remote { errors } => errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn summarize(errors: &[Value]) -> String {
    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|e| e.get("message").and_then(Value::as_str))
        .collect();
    if messages.is_empty() {
        Value::from(errors.to_vec()).to_string()
    } else {
        messages.join("; ")
    }
}
