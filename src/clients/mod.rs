//! HTTP and GraphQL client types for monday.com API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpResponse`]: A parsed response from the API
//! - [`graphql::GraphqlClient`]: Higher-level GraphQL client
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Retry Behavior
//!
//! Requests are attempted once. monday.com rate limits are reported as
//! [`HttpError::Response`] (status 429) or as a [`GraphqlError::Remote`]
//! complexity error, and are left to the caller to handle.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
