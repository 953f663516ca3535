//! Board, group, column and item operations.
//!
//! [`MondayBoard`] is a thin layer over [`GraphqlClient`] that builds the
//! common monday.com operations from the registry in [`crate::query`]. Every
//! operation has two halves:
//!
//! - a pure `*_document` method returning the operation body, usable without
//!   a network connection
//! - an async method that sends that body and extracts the interesting part
//!   of the response
//!
//! Operations that address a board or group read it from the context set
//! with [`MondayBoard::on`] and [`MondayBoard::group`].
//!
//! # Example
//!
//! ```rust
//! use monday_api::{ApiToken, MondayBoard, MondayConfig};
//! use monday_api::query::{ColumnValue, ColumnValues};
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let board = MondayBoard::new(&config).on(1234).group("topics");
//! let values = ColumnValues::new().with("status", ColumnValue::label("Done"));
//!
//! let body = board.add_item_document("Ship it", &values, false).unwrap();
//! assert_eq!(
//!     body.as_str(),
//!     r#"create_item(board_id:1234, group_id:"topics", item_name:"Ship it", column_values:"{\"status\":{\"label\":\"Done\"}}") { id }"#
//! );
//! ```

use std::fmt;

use serde_json::Value;

use crate::clients::{GraphqlClient, GraphqlError};
use crate::config::MondayConfig;
use crate::query::{
    document, registry, ArgumentMap, ColumnValues, FieldSelection, InputValidationError,
    OperationType, QueryError, QueryFragment,
};

/// Visibility of a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoardKind {
    /// Visible to every member of the account.
    Public,
    /// Visible to invited members only.
    #[default]
    Private,
    /// Shareable with guests outside the account.
    Share,
}

impl BoardKind {
    /// Returns the GraphQL enum token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Share => "share",
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a board column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColumnType {
    /// Links to items on other boards.
    BoardRelation,
    /// A single checkbox.
    Checkbox,
    /// A calendar date, optionally with a time.
    Date,
    /// A dropdown with multiple selectable labels.
    Dropdown,
    /// An email address.
    Email,
    /// A URL with display text.
    Link,
    /// Multi-line text.
    LongText,
    /// A number.
    Numbers,
    /// People and teams.
    People,
    /// A phone number.
    Phone,
    /// A status label.
    Status,
    /// Free-form tags.
    Tags,
    /// Single-line text.
    #[default]
    Text,
    /// A date range.
    Timeline,
}

impl ColumnType {
    /// Returns the GraphQL enum token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BoardRelation => "board_relation",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Dropdown => "dropdown",
            Self::Email => "email",
            Self::Link => "link",
            Self::LongText => "long_text",
            Self::Numbers => "numbers",
            Self::People => "people",
            Self::Phone => "phone",
            Self::Status => "status",
            Self::Tags => "tags",
            Self::Text => "text",
            Self::Timeline => "timeline",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board-scoped operations against the monday.com API.
///
/// The board and group context is set with consuming builder methods and is
/// read by the operations that need it. Missing context is reported as
/// [`InputValidationError::MissingIdentifier`] before anything is sent.
#[derive(Debug)]
pub struct MondayBoard {
    client: GraphqlClient,
    board_id: Option<u64>,
    group_id: Option<String>,
}

// Verify MondayBoard is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MondayBoard>();
};

impl MondayBoard {
    /// Creates a board handle with a new [`GraphqlClient`].
    #[must_use]
    pub fn new(config: &MondayConfig) -> Self {
        Self::with_client(GraphqlClient::new(config))
    }

    /// Creates a board handle around an existing client.
    #[must_use]
    pub const fn with_client(client: GraphqlClient) -> Self {
        Self {
            client,
            board_id: None,
            group_id: None,
        }
    }

    /// Sets the board that subsequent operations address.
    #[must_use]
    pub const fn on(mut self, board_id: u64) -> Self {
        self.board_id = Some(board_id);
        self
    }

    /// Sets the group that new items are created in.
    #[must_use]
    pub fn group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Returns the board id, if set.
    #[must_use]
    pub const fn board_id(&self) -> Option<u64> {
        self.board_id
    }

    /// Returns the group id, if set.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn client(&self) -> &GraphqlClient {
        &self.client
    }

    fn require_board(&self) -> Result<u64, InputValidationError> {
        self.board_id.ok_or(InputValidationError::MissingIdentifier {
            identifier: "board_id",
        })
    }

    fn require_group(&self) -> Result<&str, InputValidationError> {
        self.group_id
            .as_deref()
            .ok_or(InputValidationError::MissingIdentifier {
                identifier: "group_id",
            })
    }

    // ==== Boards ====

    /// Builds the `create_board` mutation body.
    ///
    /// `optionals` may carry any other argument of the board `create` preset
    /// (`description`, `workspace_id`, ...). A `board_name` in `optionals`
    /// replaces the positional one.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::ArgumentNotPermitted`] if `optionals`
    /// contains `board_kind` or an argument the preset does not declare.
    pub fn create_document(
        &self,
        board_name: &str,
        board_kind: BoardKind,
        optionals: &ArgumentMap,
    ) -> Result<QueryFragment, QueryError> {
        let mut arguments = ArgumentMap::new().with("board_name", board_name);
        arguments.extend(optionals.iter().map(|(name, value)| (name, value.clone())));

        let board = registry::board();
        let raw = format!("board_kind:{board_kind}");
        Ok(document::build(
            "create_board",
            &board.render_arguments(&arguments, Some("create"), Some(&raw))?,
            &board.render_fields(&FieldSelection::from(["id"])),
        ))
    }

    /// Creates a board and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the document cannot be built, the request
    /// fails, or the response carries no id.
    pub async fn create(
        &self,
        board_name: &str,
        board_kind: BoardKind,
        optionals: &ArgumentMap,
    ) -> Result<String, GraphqlError> {
        let body = self.create_document(board_name, board_kind, optionals)?;
        let data = self.client.mutation(&body).await?;
        extract_id(&data, "create_board", OperationType::Mutation)
    }

    /// Builds the `archive_board` mutation body for the current board.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MissingIdentifier`] if no board is set.
    pub fn archive_board_document(
        &self,
        fields: &FieldSelection,
    ) -> Result<QueryFragment, QueryError> {
        let board_id = self.require_board()?;
        let board = registry::board();
        Ok(document::build(
            "archive_board",
            &board.render_arguments(
                &ArgumentMap::new().with("board_id", board_id),
                Some("archive"),
                None,
            )?,
            &board.render_fields(fields),
        ))
    }

    /// Archives the current board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if no board is set or the request fails.
    pub async fn archive_board(&self, fields: &FieldSelection) -> Result<Value, GraphqlError> {
        let body = self.archive_board_document(fields)?;
        self.client.mutation(&body).await
    }

    /// Builds the `boards` query body.
    ///
    /// When a board is set and `arguments` has no `ids`, the query is limited
    /// to the current board.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::InvalidArgumentValue`] if an argument
    /// does not fit its declared type.
    pub fn get_boards_document(
        &self,
        arguments: &ArgumentMap,
        fields: &FieldSelection,
    ) -> Result<QueryFragment, QueryError> {
        let mut arguments = arguments.clone();
        if let Some(board_id) = self.board_id {
            if !arguments.contains_key("ids") {
                arguments.insert("ids", board_id);
            }
        }

        let board = registry::board();
        Ok(document::build(
            board.scope,
            &board.render_arguments(&arguments, None, None)?,
            &board.render_fields(fields),
        ))
    }

    /// Fetches boards. A response without a `boards` list yields an empty
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the document cannot be built or the request
    /// fails.
    pub async fn get_boards(
        &self,
        arguments: &ArgumentMap,
        fields: &FieldSelection,
    ) -> Result<Vec<Value>, GraphqlError> {
        let body = self.get_boards_document(arguments, fields)?;
        let data = self.client.query(&body).await?;
        Ok(extract_list(data, "boards"))
    }

    /// Builds a `boards(ids:...) { columns { ... } }` query body for the
    /// current board.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MissingIdentifier`] if no board is set.
    pub fn get_columns_document(
        &self,
        fields: &FieldSelection,
    ) -> Result<QueryFragment, QueryError> {
        let board_id = self.require_board()?;
        let column = registry::column();
        let columns = document::build(
            column.scope,
            &QueryFragment::empty(),
            &column.render_fields(fields),
        );

        let board = registry::board();
        Ok(document::build(
            board.scope,
            &board.render_arguments(&ArgumentMap::new().with("ids", board_id), None, None)?,
            &board.render_fields(&FieldSelection::new().document(columns)),
        ))
    }

    /// Fetches the columns of the current board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if no board is set or the request fails.
    pub async fn get_columns(&self, fields: &FieldSelection) -> Result<Value, GraphqlError> {
        let body = self.get_columns_document(fields)?;
        self.client.query(&body).await
    }

    // ==== Groups and columns ====

    /// Builds the `create_group` mutation body for the current board.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MissingIdentifier`] if no board is set.
    pub fn create_group_document(&self, group_name: &str) -> Result<QueryFragment, QueryError> {
        let board_id = self.require_board()?;
        let group = registry::group();
        let arguments = ArgumentMap::new()
            .with("board_id", board_id)
            .with("group_name", group_name);
        Ok(document::build(
            "create_group",
            &group.render_arguments(&arguments, Some("create"), None)?,
            &group.render_fields(&FieldSelection::from(["id"])),
        ))
    }

    /// Creates a group on the current board and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if no board is set, the request fails, or the
    /// response carries no id.
    pub async fn create_group(&self, group_name: &str) -> Result<String, GraphqlError> {
        let body = self.create_group_document(group_name)?;
        let data = self.client.mutation(&body).await?;
        extract_id(&data, "create_group", OperationType::Mutation)
    }

    /// Builds the `create_column` mutation body for the current board.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MissingIdentifier`] if no board is set.
    pub fn create_column_document(
        &self,
        title: &str,
        column_type: ColumnType,
        description: Option<&str>,
    ) -> Result<QueryFragment, QueryError> {
        let board_id = self.require_board()?;
        let mut arguments = ArgumentMap::new()
            .with("board_id", board_id)
            .with("title", title);
        if let Some(description) = description {
            arguments.insert("description", description);
        }

        let column = registry::column();
        let raw = format!("column_type:{column_type}");
        Ok(document::build(
            "create_column",
            &column.render_arguments(&arguments, Some("create"), Some(&raw))?,
            &column.render_fields(&FieldSelection::from(["id"])),
        ))
    }

    /// Creates a column on the current board and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if no board is set, the request fails, or the
    /// response carries no id.
    pub async fn create_column(
        &self,
        title: &str,
        column_type: ColumnType,
        description: Option<&str>,
    ) -> Result<String, GraphqlError> {
        let body = self.create_column_document(title, column_type, description)?;
        let data = self.client.mutation(&body).await?;
        extract_id(&data, "create_column", OperationType::Mutation)
    }

    // ==== Items ====

    /// Builds the `items` query body.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::InvalidArgumentValue`] if an argument
    /// does not fit its declared type.
    pub fn get_items_document(
        &self,
        arguments: &ArgumentMap,
        fields: &FieldSelection,
    ) -> Result<QueryFragment, QueryError> {
        let item = registry::item();
        Ok(document::build(
            item.scope,
            &item.render_arguments(arguments, None, None)?,
            &item.render_fields(fields),
        ))
    }

    /// Fetches items. A response without an `items` list yields an empty
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the document cannot be built or the request
    /// fails.
    pub async fn get_items(
        &self,
        arguments: &ArgumentMap,
        fields: &FieldSelection,
    ) -> Result<Vec<Value>, GraphqlError> {
        let body = self.get_items_document(arguments, fields)?;
        let data = self.client.query(&body).await?;
        Ok(extract_list(data, "items"))
    }

    /// Builds the `create_item` mutation body for the current board and group.
    ///
    /// Empty `column_values` are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MissingIdentifier`] if no board or no
    /// group is set.
    pub fn add_item_document(
        &self,
        item_name: &str,
        column_values: &ColumnValues,
        create_labels_if_missing: bool,
    ) -> Result<QueryFragment, QueryError> {
        let board_id = self.require_board()?;
        let group_id = self.require_group()?;

        let mut arguments = ArgumentMap::new()
            .with("board_id", board_id)
            .with("group_id", group_id)
            .with("item_name", item_name);
        push_column_values(&mut arguments, column_values, create_labels_if_missing);

        let item = registry::item();
        Ok(document::build(
            "create_item",
            &item.render_arguments(&arguments, Some("create"), None)?,
            &item.render_fields(&FieldSelection::from(["id"])),
        ))
    }

    /// Creates an item in the current group and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if no board or group is set, the request fails,
    /// or the response carries no id.
    pub async fn add_item(
        &self,
        item_name: &str,
        column_values: &ColumnValues,
        create_labels_if_missing: bool,
    ) -> Result<String, GraphqlError> {
        let body = self.add_item_document(item_name, column_values, create_labels_if_missing)?;
        let data = self.client.mutation(&body).await?;
        extract_id(&data, "create_item", OperationType::Mutation)
    }

    /// Builds the `create_subitem` mutation body.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if a value does not fit its declared type.
    pub fn add_sub_item_document(
        &self,
        parent_item_id: u64,
        item_name: &str,
        column_values: &ColumnValues,
        create_labels_if_missing: bool,
    ) -> Result<QueryFragment, QueryError> {
        let mut arguments = ArgumentMap::new()
            .with("parent_item_id", parent_item_id)
            .with("item_name", item_name);
        push_column_values(&mut arguments, column_values, create_labels_if_missing);

        let sub_item = registry::sub_item();
        Ok(document::build(
            "create_subitem",
            &sub_item.render_arguments(&arguments, Some("create"), None)?,
            &sub_item.render_fields(&FieldSelection::from(["id"])),
        ))
    }

    /// Creates a sub-item under `parent_item_id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn add_sub_item(
        &self,
        parent_item_id: u64,
        item_name: &str,
        column_values: &ColumnValues,
        create_labels_if_missing: bool,
    ) -> Result<Value, GraphqlError> {
        let body = self.add_sub_item_document(
            parent_item_id,
            item_name,
            column_values,
            create_labels_if_missing,
        )?;
        self.client.mutation(&body).await
    }

    fn item_mutation_document(
        operation_name: &str,
        item_id: u64,
    ) -> Result<QueryFragment, QueryError> {
        let item = registry::item();
        Ok(document::build(
            operation_name,
            &item.render_arguments(
                &ArgumentMap::new().with("item_id", item_id),
                Some("archive_delete"),
                None,
            )?,
            &item.render_fields(&FieldSelection::from(["id"])),
        ))
    }

    /// Builds the `archive_item` mutation body.
    ///
    /// # Errors
    ///
    /// Infallible for well-formed registry data; the `Result` mirrors the
    /// other document constructors.
    pub fn archive_item_document(&self, item_id: u64) -> Result<QueryFragment, QueryError> {
        Self::item_mutation_document("archive_item", item_id)
    }

    /// Archives an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn archive_item(&self, item_id: u64) -> Result<Value, GraphqlError> {
        let body = self.archive_item_document(item_id)?;
        self.client.mutation(&body).await
    }

    /// Builds the `delete_item` mutation body.
    ///
    /// # Errors
    ///
    /// Infallible for well-formed registry data; the `Result` mirrors the
    /// other document constructors.
    pub fn delete_item_document(&self, item_id: u64) -> Result<QueryFragment, QueryError> {
        Self::item_mutation_document("delete_item", item_id)
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn delete_item(&self, item_id: u64) -> Result<Value, GraphqlError> {
        let body = self.delete_item_document(item_id)?;
        self.client.mutation(&body).await
    }

    /// Builds the `change_multiple_column_values` mutation body for an item on
    /// the current board.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MissingIdentifier`] if no board is set.
    pub fn change_multiple_column_values_document(
        &self,
        item_id: u64,
        column_values: &ColumnValues,
    ) -> Result<QueryFragment, QueryError> {
        let board_id = self.require_board()?;
        let arguments = ArgumentMap::new()
            .with("item_id", item_id)
            .with("board_id", board_id)
            .with("column_values", column_values);

        let item = registry::item();
        Ok(document::build(
            "change_multiple_column_values",
            &item.render_arguments(&arguments, Some("change_multiple_column_values"), None)?,
            &item.render_fields(&FieldSelection::from(["id"])),
        ))
    }

    /// Updates several columns of an item and returns the item id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if no board is set, the request fails, or the
    /// response carries no id.
    pub async fn change_multiple_column_values(
        &self,
        item_id: u64,
        column_values: &ColumnValues,
    ) -> Result<String, GraphqlError> {
        let body = self.change_multiple_column_values_document(item_id, column_values)?;
        let data = self.client.mutation(&body).await?;
        extract_id(&data, "change_multiple_column_values", OperationType::Mutation)
    }

    // ==== Raw operations ====

    /// Sends a caller-written query body verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn custom_query(&self, body: &str) -> Result<Value, GraphqlError> {
        self.client.query(body).await
    }

    /// Sends a caller-written mutation body verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails.
    pub async fn custom_mutation(&self, body: &str) -> Result<Value, GraphqlError> {
        self.client.mutation(body).await
    }
}

fn push_column_values(
    arguments: &mut ArgumentMap,
    column_values: &ColumnValues,
    create_labels_if_missing: bool,
) {
    if !column_values.is_empty() {
        arguments.insert("column_values", column_values);
    }
    if create_labels_if_missing {
        arguments.insert("create_labels_if_missing", true);
    }
}

/// Reads `data[operation].id`, accepting string or numeric ids.
fn extract_id(
    data: &Value,
    operation_name: &str,
    operation: OperationType,
) -> Result<String, GraphqlError> {
    match data.get(operation_name).and_then(|o| o.get("id")) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(GraphqlError::MissingData { operation }),
    }
}

fn extract_list(mut data: Value, key: &str) -> Vec<Value> {
    match data.get_mut(key).map(Value::take) {
        Some(Value::Array(list)) => list,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;
    use crate::query::ColumnValue;
    use serde_json::json;

    fn create_test_board() -> MondayBoard {
        let config = MondayConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap();
        MondayBoard::new(&config)
    }

    #[test]
    fn test_enum_tokens() {
        assert_eq!(BoardKind::default().as_str(), "private");
        assert_eq!(BoardKind::Share.to_string(), "share");
        assert_eq!(ColumnType::LongText.as_str(), "long_text");
        assert_eq!(ColumnType::default().to_string(), "text");
    }

    #[test]
    fn test_context_builders() {
        let board = create_test_board().on(42).group("topics");
        assert_eq!(board.board_id(), Some(42));
        assert_eq!(board.group_id(), Some("topics"));
    }

    #[test]
    fn test_create_document_splices_board_kind() {
        let board = create_test_board();
        let optionals = ArgumentMap::new().with("description", "Q3 plan");

        let body = board
            .create_document("Roadmap", BoardKind::Public, &optionals)
            .unwrap();
        assert_eq!(
            body.as_str(),
            r#"create_board(board_kind:public, board_name:"Roadmap", description:"Q3 plan") { id }"#
        );
    }

    #[test]
    fn test_create_document_rejects_board_kind_in_optionals() {
        let board = create_test_board();
        let optionals = ArgumentMap::new().with("board_kind", "share");

        let result = board.create_document("Roadmap", BoardKind::Public, &optionals);
        assert!(matches!(
            result,
            Err(QueryError::Input(InputValidationError::ArgumentNotPermitted { ref argument, .. }))
                if argument == "board_kind"
        ));
    }

    #[test]
    fn test_create_document_rejects_unknown_optional() {
        let board = create_test_board();
        let optionals = ArgumentMap::new().with("color", "red");

        assert!(board
            .create_document("Roadmap", BoardKind::Private, &optionals)
            .is_err());
    }

    #[test]
    fn test_board_operations_require_board_id() {
        let board = create_test_board();
        let missing_board = |result: Result<QueryFragment, QueryError>| {
            matches!(
                result,
                Err(QueryError::Input(InputValidationError::MissingIdentifier {
                    identifier: "board_id"
                }))
            )
        };

        assert!(missing_board(board.archive_board_document(&FieldSelection::new())));
        assert!(missing_board(board.get_columns_document(&FieldSelection::new())));
        assert!(missing_board(board.create_group_document("New")));
        assert!(missing_board(board.create_column_document(
            "Status",
            ColumnType::Status,
            None
        )));
        assert!(missing_board(board.add_item_document(
            "Item",
            &ColumnValues::new(),
            false
        )));
        assert!(missing_board(
            board.change_multiple_column_values_document(1, &ColumnValues::new())
        ));
    }

    #[test]
    fn test_add_item_requires_group_id() {
        let board = create_test_board().on(1);
        let result = board.add_item_document("Item", &ColumnValues::new(), false);
        assert!(matches!(
            result,
            Err(QueryError::Input(InputValidationError::MissingIdentifier {
                identifier: "group_id"
            }))
        ));
    }

    #[test]
    fn test_get_boards_defaults_ids_from_context() {
        let board = create_test_board().on(7);
        let fields = FieldSelection::from(["id", "name"]);

        let body = board.get_boards_document(&ArgumentMap::new(), &fields).unwrap();
        assert_eq!(body.as_str(), "boards(ids:7) { id name }");

        let explicit = ArgumentMap::new().with("ids", vec![1, 2]);
        let body = board.get_boards_document(&explicit, &fields).unwrap();
        assert_eq!(body.as_str(), "boards(ids:[1, 2]) { id name }");
    }

    #[test]
    fn test_get_boards_without_context_has_no_arguments() {
        let board = create_test_board();
        let body = board
            .get_boards_document(&ArgumentMap::new(), &FieldSelection::from(["id"]))
            .unwrap();
        assert_eq!(body.as_str(), "boards { id }");
    }

    #[test]
    fn test_get_columns_nests_columns_under_board() {
        let board = create_test_board().on(3);
        let body = board
            .get_columns_document(&FieldSelection::from(["id", "title", "type"]))
            .unwrap();
        assert_eq!(body.as_str(), "boards(ids:3) { columns { id title type } }");
    }

    #[test]
    fn test_create_group_document() {
        let board = create_test_board().on(3);
        let body = board.create_group_document("Backlog").unwrap();
        assert_eq!(
            body.as_str(),
            r#"create_group(board_id:3, group_name:"Backlog") { id }"#
        );
    }

    #[test]
    fn test_create_column_document() {
        let board = create_test_board().on(3);

        let body = board
            .create_column_document("Due", ColumnType::Date, Some("When it ships"))
            .unwrap();
        assert_eq!(
            body.as_str(),
            r#"create_column(column_type:date, board_id:3, title:"Due", description:"When it ships") { id }"#
        );

        let body = board
            .create_column_document("Notes", ColumnType::LongText, None)
            .unwrap();
        assert_eq!(
            body.as_str(),
            r#"create_column(column_type:long_text, board_id:3, title:"Notes") { id }"#
        );
    }

    #[test]
    fn test_get_items_with_nested_fields() {
        let board = create_test_board();
        let fields = FieldSelection::new()
            .field("id")
            .nested("column_values", FieldSelection::from(["id", "text"]));

        let body = board
            .get_items_document(&ArgumentMap::new().with("ids", 11), &fields)
            .unwrap();
        assert_eq!(body.as_str(), "items(ids:11) { id column_values { id text } }");
    }

    #[test]
    fn test_add_item_with_create_labels_if_missing() {
        let board = create_test_board().on(1).group("g1");
        let values = ColumnValues::new().with("status", ColumnValue::label("New label"));

        let body = board.add_item_document("Task", &values, true).unwrap();
        assert_eq!(
            body.as_str(),
            r#"create_item(board_id:1, group_id:"g1", item_name:"Task", column_values:"{\"status\":{\"label\":\"New label\"}}", create_labels_if_missing:true) { id }"#
        );
    }

    #[test]
    fn test_add_item_escapes_name() {
        let board = create_test_board().on(1).group("g1");
        let body = board
            .add_item_document("Say \"hi\"\n", &ColumnValues::new(), false)
            .unwrap();
        assert_eq!(
            body.as_str(),
            r#"create_item(board_id:1, group_id:"g1", item_name:"Say \"hi\"") { id }"#
        );
    }

    #[test]
    fn test_add_sub_item_document() {
        let board = create_test_board();
        let values = ColumnValues::new().with("text", ColumnValue::text("child"));

        let body = board.add_sub_item_document(99, "Sub", &values, false).unwrap();
        assert_eq!(
            body.as_str(),
            r#"create_subitem(parent_item_id:99, item_name:"Sub", column_values:"{\"text\":{\"text\":\"child\"}}") { id }"#
        );
    }

    #[test]
    fn test_archive_and_delete_item_documents() {
        let board = create_test_board();
        assert_eq!(
            board.archive_item_document(5).unwrap().as_str(),
            "archive_item(item_id:5) { id }"
        );
        assert_eq!(
            board.delete_item_document(5).unwrap().as_str(),
            "delete_item(item_id:5) { id }"
        );
    }

    #[test]
    fn test_change_multiple_column_values_document() {
        let board = create_test_board().on(8);
        let values = ColumnValues::new().with("numbers", ColumnValue::number(12));

        let body = board
            .change_multiple_column_values_document(77, &values)
            .unwrap();
        assert_eq!(
            body.as_str(),
            r#"change_multiple_column_values(item_id:77, board_id:8, column_values:"{\"numbers\":\"12\"}") { id }"#
        );
    }

    #[test]
    fn test_extract_id_accepts_strings_and_numbers() {
        let data = json!({"create_item": {"id": "123"}});
        assert_eq!(
            extract_id(&data, "create_item", OperationType::Mutation).unwrap(),
            "123"
        );

        let data = json!({"create_group": {"id": 45}});
        assert_eq!(
            extract_id(&data, "create_group", OperationType::Mutation).unwrap(),
            "45"
        );

        let data = json!({"create_group": null});
        assert!(matches!(
            extract_id(&data, "create_group", OperationType::Mutation),
            Err(GraphqlError::MissingData { .. })
        ));
    }

    #[test]
    fn test_extract_list_defaults_to_empty() {
        assert_eq!(extract_list(json!({"boards": [{"id": "1"}]}), "boards").len(), 1);
        assert!(extract_list(json!({}), "boards").is_empty());
        assert!(extract_list(json!({"boards": null}), "boards").is_empty());
    }
}
