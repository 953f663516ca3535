//! Fragments and operation documents.
//!
//! A [`QueryFragment`] is an immutable, syntactically self-contained piece of
//! GraphQL: an argument list `(a:1, b:"x")`, a selection set `{ id name }`, or
//! a complete operation body `boards(ids:1) { id }`. Fragments compose by
//! string concatenation only.
//!
//! [`build`] assembles an operation body from its parts, and [`wrap`] turns a
//! body into the single-line document sent over the wire.
//!
//! # Example
//!
//! ```rust
//! use monday_api::query::{document, registry, ArgumentMap, FieldSelection, OperationType};
//!
//! let board = registry::board();
//! let args = board.render_arguments(&ArgumentMap::new().with("ids", 42), None, None).unwrap();
//! let fields = board.render_fields(&FieldSelection::from(["id", "name"]));
//!
//! let body = document::build(board.scope, &args, &fields);
//! assert_eq!(body.as_str(), "boards(ids:42) { id name }");
//!
//! let wire = document::wrap(OperationType::Query, &body);
//! assert_eq!(wire, "query { boards(ids:42) { id name } }");
//! ```

use std::fmt;

/// An immutable, well-formed piece of GraphQL text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryFragment(String);

impl QueryFragment {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    /// Returns the empty fragment.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Wraps caller-written GraphQL as a fragment.
    ///
    /// The text is used verbatim; the caller is responsible for its syntax.
    #[must_use]
    pub fn from_raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the fragment text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the fragment holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the fragment, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for QueryFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The GraphQL operation keyword a document is sent with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// A read (`query`).
    Query,
    /// A write (`mutation`).
    Mutation,
}

impl OperationType {
    /// Returns the GraphQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds an operation body: `name(args) { fields }`.
///
/// The argument position is omitted entirely when `arguments` is empty, so
/// the output never contains `()`. The selection set is omitted when `fields`
/// is empty.
///
/// A body built here can be used as a field entry of another selection (see
/// [`FieldEntry::Document`](crate::query::FieldEntry::Document)) to nest a
/// scoped child query inside a parent query. Combined documents are not
/// deduplicated or validated.
#[must_use]
pub fn build(
    operation_name: &str,
    arguments: &QueryFragment,
    fields: &QueryFragment,
) -> QueryFragment {
    let mut body = String::with_capacity(operation_name.len() + arguments.0.len() + fields.0.len() + 1);
    body.push_str(operation_name);
    body.push_str(&arguments.0);
    if !fields.is_empty() {
        body.push(' ');
        body.push_str(&fields.0);
    }
    QueryFragment(body)
}

/// Wraps an operation body in its keyword: `query { body }`.
///
/// All carriage returns and line feeds are removed, since the document is
/// sent as a single-line JSON string.
#[must_use]
pub fn wrap(operation: OperationType, body: impl AsRef<str>) -> String {
    let body: String = body
        .as_ref()
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    format!("{} {{ {} }}", operation.as_str(), body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_arguments_and_fields() {
        let body = build(
            "create_board",
            &QueryFragment::from_raw("(board_name:\"Demo\")"),
            &QueryFragment::from_raw("{ id }"),
        );
        assert_eq!(body.as_str(), "create_board(board_name:\"Demo\") { id }");
    }

    #[test]
    fn test_build_never_emits_empty_parentheses() {
        let body = build("boards", &QueryFragment::empty(), &QueryFragment::from_raw("{ id }"));
        assert_eq!(body.as_str(), "boards { id }");
        assert!(!body.as_str().contains("()"));
    }

    #[test]
    fn test_build_without_fields() {
        let body = build("delete_item", &QueryFragment::from_raw("(item_id:1)"), &QueryFragment::empty());
        assert_eq!(body.as_str(), "delete_item(item_id:1)");
    }

    #[test]
    fn test_wrap_strips_line_breaks() {
        let wrapped = wrap(OperationType::Mutation, "create_item(\r\nitem_name:\"A\"\n) { id }\n");
        assert_eq!(wrapped, "mutation { create_item(item_name:\"A\") { id } }");
        assert!(!wrapped.contains('\n'));
        assert!(!wrapped.contains('\r'));
    }

    #[test]
    fn test_wrap_accepts_built_fragment() {
        let body = build("me", &QueryFragment::empty(), &QueryFragment::from_raw("{ id }"));
        assert_eq!(wrap(OperationType::Query, &body), "query { me { id } }");
    }

    #[test]
    fn test_operation_type_keywords() {
        assert_eq!(OperationType::Query.to_string(), "query");
        assert_eq!(OperationType::Mutation.as_str(), "mutation");
    }

    #[test]
    fn test_fragment_accessors() {
        let fragment = QueryFragment::from_raw("{ id }");
        assert_eq!(fragment.as_ref(), "{ id }");
        assert!(!fragment.is_empty());
        assert!(QueryFragment::default().is_empty());
        assert_eq!(fragment.into_string(), "{ id }");
    }
}
