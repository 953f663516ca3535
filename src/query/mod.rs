//! GraphQL document construction for the monday.com API.
//!
//! This module turns declarative object metadata plus caller-supplied values
//! into GraphQL operation documents. Everything here is pure string building:
//! no I/O, no shared mutable state.
//!
//! # Overview
//!
//! - [`registry`]: static [`ObjectTypeDescriptor`]s for boards, items,
//!   sub-items, groups and columns
//! - [`ObjectTypeDescriptor::render_arguments`]: argument list fragments
//!   checked against an argument preset
//! - [`ObjectTypeDescriptor::render_fields`]: selection set fragments with
//!   arbitrary nesting
//! - [`document`]: composition of operation bodies and wire documents
//! - [`ColumnValues`]: typed column updates encoded for the `column_values`
//!   argument
//!
//! # Example
//!
//! ```rust
//! use monday_api::query::{
//!     document, registry, ArgumentMap, ColumnValue, ColumnValues, FieldSelection,
//! };
//!
//! let item = registry::item();
//! let columns = ColumnValues::new().with("status", ColumnValue::label("Done"));
//! let args = ArgumentMap::new()
//!     .with("board_id", 1)
//!     .with("item_name", "Ship it")
//!     .with("column_values", &columns);
//!
//! let body = document::build(
//!     "create_item",
//!     &item.render_arguments(&args, Some("create"), None).unwrap(),
//!     &item.render_fields(&FieldSelection::from(["id"])),
//! );
//! assert_eq!(
//!     body.as_str(),
//!     r#"create_item(board_id:1, item_name:"Ship it", column_values:"{\"status\":{\"label\":\"Done\"}}") { id }"#
//! );
//! ```
//!
//! # Errors
//!
//! Failures are reported as [`QueryError`], split into
//! [`ConfigurationError`] (registry misuse) and [`InputValidationError`]
//! (bad caller values). Both are raised before any request is sent.

mod arguments;
mod column_values;
pub mod document;
mod errors;
mod fields;
pub mod registry;
mod values;

pub use arguments::escape_string;
pub use column_values::{Assignee, AssigneeKind, ColumnValue, ColumnValues};
pub use document::{OperationType, QueryFragment};
pub use errors::{ConfigurationError, InputValidationError, QueryError};
pub use fields::{FieldEntry, FieldSelection};
pub use registry::{ObjectKind, ObjectTypeDescriptor};
pub use values::{ArgumentMap, ArgumentValue};
