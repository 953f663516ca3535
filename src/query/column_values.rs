//! Column value encoding.
//!
//! Mutations that write item columns (`create_item`, `create_subitem`,
//! `change_multiple_column_values`) take a single `column_values` argument
//! whose value is a JSON object serialized into a GraphQL string. Each column
//! type expects its own JSON shape; [`ColumnValue`] models the supported
//! shapes and [`ColumnValues`] collects them per column identifier.
//!
//! # Example
//!
//! ```rust
//! use monday_api::query::{ColumnValue, ColumnValues};
//!
//! let values = ColumnValues::new()
//!     .with("status", ColumnValue::label("Done"))
//!     .with("estimate", ColumnValue::number(3));
//!
//! assert_eq!(
//!     values.to_json(),
//!     r#"{"status":{"label":"Done"},"estimate":"3"}"#
//! );
//! assert_eq!(
//!     values.encode(),
//!     r#"{\"status\":{\"label\":\"Done\"},\"estimate\":\"3\"}"#
//! );
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Number, Value};

use crate::query::arguments::escape_string;
use crate::query::errors::InputValidationError;
use crate::query::values::ArgumentValue;

/// Whether a people-column entry refers to a person or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssigneeKind {
    /// A single user.
    Person,
    /// A team.
    Team,
}

/// One entry of a people column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// The user or team id.
    pub id: u64,
    /// Whether `id` is a person or a team.
    pub kind: AssigneeKind,
}

impl Assignee {
    /// A person assignment.
    #[must_use]
    pub const fn person(id: u64) -> Self {
        Self {
            id,
            kind: AssigneeKind::Person,
        }
    }

    /// A team assignment.
    #[must_use]
    pub const fn team(id: u64) -> Self {
        Self {
            id,
            kind: AssigneeKind::Team,
        }
    }
}

/// A typed update for one column.
///
/// Deserializes from the semi-structured form `{"kind": "...", "value": ...}`,
/// e.g. `{"kind": "label", "value": "Done"}` or
/// `{"kind": "date", "value": "2024-05-01"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ColumnValue {
    /// Text: `{"text": "..."}`.
    Text(String),
    /// Status label by text: `{"label": "..."}`.
    Label(String),
    /// Status label by index: `{"index": N}`.
    #[serde(rename = "index")]
    LabelIndex(u32),
    /// Number: rendered as a JSON string holding the number, `"42"`.
    Numeric(Number),
    /// Date: `{"date": "YYYY-MM-DD"}`.
    Date(NaiveDate),
    /// Date and time: `{"date": "YYYY-MM-DD", "time": "HH:MM:SS"}`.
    DateTime {
        /// The calendar date.
        date: NaiveDate,
        /// The time of day.
        time: NaiveTime,
    },
    /// Connected-board items: `{"item_ids": [...]}`.
    BoardRelation(Vec<u64>),
    /// People and teams: `{"personsAndTeams": [{"id": N, "kind": "person"}]}`.
    People(Vec<Assignee>),
}

impl ColumnValue {
    /// A text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A status label selected by its text.
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// A status label selected by its index.
    #[must_use]
    pub const fn label_index(index: u32) -> Self {
        Self::LabelIndex(index)
    }

    /// An integer number.
    #[must_use]
    pub fn number(value: impl Into<Number>) -> Self {
        Self::Numeric(value.into())
    }

    /// A floating point number.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::NonFiniteNumber`] for NaN and
    /// infinities, which JSON cannot represent.
    pub fn float(value: f64) -> Result<Self, InputValidationError> {
        Number::from_f64(value)
            .map(Self::Numeric)
            .ok_or_else(|| InputValidationError::NonFiniteNumber {
                value: value.to_string(),
            })
    }

    /// A date.
    #[must_use]
    pub const fn date(date: NaiveDate) -> Self {
        Self::Date(date)
    }

    /// A date with a time of day.
    #[must_use]
    pub const fn date_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self::DateTime { date, time }
    }

    /// Links to items on a connected board.
    #[must_use]
    pub fn board_relation(item_ids: impl IntoIterator<Item = u64>) -> Self {
        Self::BoardRelation(item_ids.into_iter().collect())
    }

    /// Person and team assignments.
    #[must_use]
    pub fn people(assignees: impl IntoIterator<Item = Assignee>) -> Self {
        Self::People(assignees.into_iter().collect())
    }

    /// Returns the JSON payload the service expects for this column type.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Text(text) => json!({ "text": text }),
            Self::Label(label) => json!({ "label": label }),
            Self::LabelIndex(index) => json!({ "index": index }),
            Self::Numeric(number) => Value::String(number.to_string()),
            Self::Date(date) => json!({ "date": date.format("%Y-%m-%d").to_string() }),
            Self::DateTime { date, time } => json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "time": time.format("%H:%M:%S").to_string(),
            }),
            Self::BoardRelation(item_ids) => json!({ "item_ids": item_ids }),
            Self::People(assignees) => json!({ "personsAndTeams": assignees }),
        }
    }
}

/// An insertion-ordered map of column identifier to [`ColumnValue`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnValues {
    entries: Vec<(String, ColumnValue)>,
}

impl ColumnValues {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a column update and returns the map, for chaining.
    #[must_use]
    pub fn with(mut self, column_id: impl Into<String>, value: ColumnValue) -> Self {
        self.insert(column_id, value);
        self
    }

    /// Sets the update for a column, replacing any earlier one in place.
    pub fn insert(&mut self, column_id: impl Into<String>, value: ColumnValue) {
        let column_id = column_id.into();
        match self.entries.iter_mut().find(|(id, _)| *id == column_id) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((column_id, value)),
        }
    }

    /// Parses semi-structured input of the form
    /// `{"column_id": {"kind": "...", "value": ...}, ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::MalformedColumnValues`] if the input is
    /// not an object, or [`InputValidationError::UnsupportedColumnValue`] if
    /// an entry has an unknown kind or a malformed value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_api::query::ColumnValues;
    /// use serde_json::json;
    ///
    /// let values = ColumnValues::from_tagged(&json!({
    ///     "status_col": { "kind": "label", "value": "Done" }
    /// })).unwrap();
    /// assert_eq!(values.to_json(), r#"{"status_col":{"label":"Done"}}"#);
    ///
    /// let unknown = ColumnValues::from_tagged(&json!({
    ///     "rating": { "kind": "stars", "value": 5 }
    /// }));
    /// assert!(unknown.is_err());
    /// ```
    pub fn from_tagged(input: &Value) -> Result<Self, InputValidationError> {
        let object = input
            .as_object()
            .ok_or(InputValidationError::MalformedColumnValues {
                found: json_type_name(input),
            })?;

        let mut values = Self::new();
        for (column_id, tagged) in object {
            let value = ColumnValue::deserialize(tagged).map_err(|e| {
                InputValidationError::UnsupportedColumnValue {
                    column: column_id.clone(),
                    reason: e.to_string(),
                }
            })?;
            values.insert(column_id.clone(), value);
        }
        Ok(values)
    }

    /// Returns the number of column updates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no column updates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the updates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnValue)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Serializes the updates into the inner JSON object.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serializing strings, numbers and maps of them into a String cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Returns the inner JSON escaped for use inside a GraphQL string literal.
    #[must_use]
    pub fn encode(&self) -> String {
        escape_string(&self.to_json())
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for ColumnValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column_id, value) in &self.entries {
            map.serialize_entry(column_id, &value.payload())?;
        }
        map.end()
    }
}

impl From<&ColumnValues> for ArgumentValue {
    /// The argument encoder quotes and escapes the JSON, producing the
    /// double-encoded form the service expects.
    fn from(values: &ColumnValues) -> Self {
        Self::String(values.to_json())
    }
}

impl From<ColumnValues> for ArgumentValue {
    fn from(values: ColumnValues) -> Self {
        Self::from(&values)
    }
}
