//! Configuration types for the monday.com API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with monday.com.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MondayConfig`]: The main configuration struct holding all SDK settings
//! - [`MondayConfigBuilder`]: A builder for constructing [`MondayConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`ApiUrl`]: A validated GraphQL endpoint URL
//! - [`ApiVersion`]: The monday.com API version to use
//!
//! # Example
//!
//! ```rust
//! use monday_api::{ApiToken, ApiVersion, MondayConfig};
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, ApiUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the monday.com API SDK.
///
/// # Thread Safety
///
/// `MondayConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use monday_api::{ApiToken, ApiUrl, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("your-token").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_url(), &ApiUrl::default());
/// ```
#[derive(Clone, Debug)]
pub struct MondayConfig {
    api_token: ApiToken,
    api_version: ApiVersion,
    api_url: ApiUrl,
    user_agent_prefix: Option<String>,
}

impl MondayConfig {
    /// Creates a new builder for constructing a `MondayConfig`.
    #[must_use]
    pub fn builder() -> MondayConfigBuilder {
        MondayConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MondayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MondayConfig>();
};

/// Builder for constructing [`MondayConfig`] instances.
///
/// The only required field is `api_token`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_url`: `https://api.monday.com/v2/`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use monday_api::{ApiToken, ApiUrl, ApiVersion, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .api_version(ApiVersion::V2024_10)
///     .api_url(ApiUrl::new("https://eu.example.com/v2/").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MondayConfigBuilder {
    api_token: Option<ApiToken>,
    api_version: Option<ApiVersion>,
    api_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl MondayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MondayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set.
    pub fn build(self) -> Result<MondayConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(MondayConfig {
            api_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_url: self.api_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
