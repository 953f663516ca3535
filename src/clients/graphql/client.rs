//! GraphQL client implementation for the monday.com API.
//!
//! This module provides the [`GraphqlClient`] type for sending operation
//! bodies built by [`crate::query`] and unwrapping the response payload.

use serde_json::Value;

use crate::clients::graphql::GraphqlError;
use crate::clients::HttpClient;
use crate::config::{ApiVersion, MondayConfig};
use crate::query::{document, OperationType};

/// GraphQL API client for monday.com.
///
/// The client wraps an operation body in its keyword (`query { ... }` or
/// `mutation { ... }`), sends it as `{"query": ...}`, and returns the
/// response's `data` member.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use monday_api::{ApiToken, GraphqlClient, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config);
/// let data = client.query("boards(limit:1) { id name }").await?;
/// println!("First board: {}", data["boards"][0]["name"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client using the configured API version.
    #[must_use]
    pub fn new(config: &MondayConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            api_version: config.api_version().clone(),
        }
    }

    /// Creates a new GraphQL client with a specific API version override.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_api::{ApiToken, ApiVersion, GraphqlClient, MondayConfig};
    ///
    /// let config = MondayConfig::builder()
    ///     .api_token(ApiToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GraphqlClient::with_version(&config, ApiVersion::V2024_10);
    /// assert_eq!(client.api_version(), &ApiVersion::V2024_10);
    /// ```
    #[must_use]
    pub fn with_version(config: &MondayConfig, version: ApiVersion) -> Self {
        let cfg_version = config.api_version();
        if &version == cfg_version {
            tracing::debug!(
                "GraphQL client has a redundant API version override to the default {}",
                cfg_version
            );
        } else {
            tracing::debug!(
                "GraphQL client overriding default API version {} with {}",
                cfg_version,
                version
            );
        }

        Self {
            http_client: HttpClient::with_version(config, &version),
            api_version: version,
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Sends an operation body and returns the response's `data` member.
    ///
    /// The body is wrapped with [`document::wrap`], which removes line breaks
    /// and adds the operation keyword.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for network errors and non-2xx responses
    /// - [`GraphqlError::Remote`] when the response has an `errors` array and
    ///   no data
    /// - [`GraphqlError::MissingData`] when the response has neither
    pub async fn execute(
        &self,
        operation: OperationType,
        body: impl AsRef<str>,
    ) -> Result<Value, GraphqlError> {
        let query = document::wrap(operation, body.as_ref());
        tracing::debug!("Sending monday.com {}: {}", operation, query);

        let response = self
            .http_client
            .request(serde_json::json!({ "query": query }))
            .await?;

        Self::unwrap_response(operation, response.body)
    }

    /// Sends a read operation. See [`execute`](Self::execute).
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn query(&self, body: impl AsRef<str>) -> Result<Value, GraphqlError> {
        self.execute(OperationType::Query, body).await
    }

    /// Sends a write operation. See [`execute`](Self::execute).
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn mutation(&self, body: impl AsRef<str>) -> Result<Value, GraphqlError> {
        self.execute(OperationType::Mutation, body).await
    }

    /// Extracts `data` from a response body.
    ///
    /// Partial results (data alongside errors) are returned as data, with the
    /// errors logged at warn level.
    pub(crate) fn unwrap_response(
        operation: OperationType,
        mut body: Value,
    ) -> Result<Value, GraphqlError> {
        let errors = match body.get_mut("errors").map(Value::take) {
            Some(Value::Array(errors)) if !errors.is_empty() => Some(errors),
            _ => None,
        };

        match body.get_mut("data").map(Value::take) {
            Some(data) if !data.is_null() => {
                if let Some(errors) = errors {
                    let count = errors.len();
                    let errors = Value::Array(errors);
                    tracing::warn!(
                        "monday.com {} returned data with {} GraphQL error(s): {}",
                        operation,
                        count,
                        errors
                    );
                }
                Ok(data)
            }
            _ => match errors {
                Some(errors) => {
                    tracing::warn!(
                        "monday.com {} failed with {} GraphQL error(s)",
                        operation,
                        errors.len()
                    );
                    Err(GraphqlError::Remote { errors })
                }
                None => Err(GraphqlError::MissingData { operation }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;
    use serde_json::json;

    fn create_test_config() -> MondayConfig {
        MondayConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .api_version(ApiVersion::V2024_07)
            .build()
            .unwrap()
    }

    // === Construction Tests ===

    #[test]
    fn test_graphql_client_new_uses_config_version() {
        let client = GraphqlClient::new(&create_test_config());
        assert_eq!(client.api_version(), &ApiVersion::V2024_07);
    }

    #[test]
    fn test_graphql_client_with_version_overrides_config() {
        let client = GraphqlClient::with_version(&create_test_config(), ApiVersion::V2025_01);
        assert_eq!(client.api_version(), &ApiVersion::V2025_01);
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }

    // === Response Unwrapping Tests ===

    #[test]
    fn test_unwrap_returns_data() {
        let data = GraphqlClient::unwrap_response(
            OperationType::Query,
            json!({"data": {"boards": [{"id": "1"}]}, "account_id": 5}),
        )
        .unwrap();
        assert_eq!(data, json!({"boards": [{"id": "1"}]}));
    }

    #[test]
    fn test_unwrap_prefers_data_over_errors() {
        let data = GraphqlClient::unwrap_response(
            OperationType::Query,
            json!({"data": {"boards": []}, "errors": [{"message": "partial"}]}),
        )
        .unwrap();
        assert_eq!(data, json!({"boards": []}));
    }

    #[test]
    fn test_unwrap_returns_remote_errors() {
        let result = GraphqlClient::unwrap_response(
            OperationType::Mutation,
            json!({"data": null, "errors": [{"message": "Parse error on \"}\""}]}),
        );
        match result {
            Err(GraphqlError::Remote { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0]["message"], "Parse error on \"}\"");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_missing_data() {
        let result = GraphqlClient::unwrap_response(OperationType::Query, json!({}));
        assert!(matches!(
            result,
            Err(GraphqlError::MissingData {
                operation: OperationType::Query
            })
        ));

        let result = GraphqlClient::unwrap_response(OperationType::Query, json!({"errors": []}));
        assert!(matches!(result, Err(GraphqlError::MissingData { .. })));
    }
}
