//! GraphQL API client for monday.com.
//!
//! This module provides a higher-level GraphQL client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that sends operation bodies
//! and unwraps the response payload.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: The GraphQL client with `execute()`, `query()` and `mutation()`
//! - [`GraphqlError`]: Error type for GraphQL API operations
//!
//! # Response Structure
//!
//! monday.com responses contain these fields in the body:
//!
//! - `data`: The operation result, returned by the client on success
//! - `errors`: GraphQL errors (often with HTTP 200), surfaced as
//!   [`GraphqlError::Remote`]
//! - `account_id`: The account that served the request, ignored

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
