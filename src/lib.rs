//! # monday.com API Rust SDK
//!
//! A Rust SDK for the monday.com GraphQL API, providing type-safe
//! configuration, a declarative GraphQL document builder, and an async client.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MondayConfig`] and [`MondayConfigBuilder`]
//! - A registry of monday.com object kinds (boards, items, sub-items, groups,
//!   columns) with their fields and argument presets, in [`query::registry`]
//! - Argument, selection set and document rendering with escaping and type
//!   checks, in [`query`]
//! - Typed column value updates via [`query::ColumnValues`]
//! - An async GraphQL client that unwraps `data` and surfaces `errors`
//! - Board, group, column and item operations via [`MondayBoard`]
//!
//! ## Quick Start
//!
//! ```rust
//! use monday_api::{ApiToken, ApiVersion, MondayConfig};
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Building Documents
//!
//! Documents can be built without a network connection:
//!
//! ```rust
//! use monday_api::query::{document, registry, ArgumentMap, FieldSelection, OperationType};
//!
//! let board = registry::board();
//! let args = board
//!     .render_arguments(&ArgumentMap::new().with("limit", 5), None, None)
//!     .unwrap();
//! let fields = board.render_fields(
//!     &FieldSelection::from(["id", "name"]).nested("groups", FieldSelection::from(["id", "title"])),
//! );
//!
//! let body = document::build(board.scope, &args, &fields);
//! assert_eq!(
//!     document::wrap(OperationType::Query, body.as_str()),
//!     "query { boards(limit:5) { id name groups { id title } } }"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use monday_api::{BoardKind, MondayBoard};
//! use monday_api::query::{ArgumentMap, ColumnValue, ColumnValues};
//!
//! let board = MondayBoard::new(&config);
//! let board_id = board.create("Roadmap", BoardKind::Public, &ArgumentMap::new()).await?;
//!
//! let board = board.on(board_id.parse()?).group("topics");
//! let item_id = board
//!     .add_item(
//!         "Ship it",
//!         &ColumnValues::new().with("status", ColumnValue::label("Working on it")),
//!         true,
//!     )
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and documents are validated before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod board;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use board::{BoardKind, ColumnType, MondayBoard};
pub use config::{ApiToken, ApiUrl, ApiVersion, MondayConfig, MondayConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse, HttpResponseError,
};
