//! Selection set rendering.
//!
//! A [`FieldSelection`] is an ordered list of [`FieldEntry`] values: plain
//! field names, nested selections under a parent field, or complete operation
//! bodies spliced in as sub-queries. Rendering recurses to whatever depth the
//! selection describes.
//!
//! Field names are not checked against the registry. The remote service
//! validates them, and callers sometimes request fields the registry does not
//! list.

use crate::query::document::QueryFragment;
use crate::query::registry::{self, ObjectTypeDescriptor};

/// One entry in a selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEntry {
    /// A plain field: `name`.
    Field(String),
    /// A field with its own selection set: `name { ... }`.
    Nested {
        /// The parent field name.
        name: String,
        /// The selection under the parent field.
        selection: FieldSelection,
    },
    /// A pre-built operation body used as a field, e.g. `columns(ids:"x") { id }`.
    Document(QueryFragment),
}

/// An ordered selection of fields.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{registry, FieldSelection};
///
/// let selection = FieldSelection::from(["id", "name"])
///     .nested("column_values", FieldSelection::from(["id", "text"]));
///
/// let fragment = registry::item().render_fields(&selection);
/// assert_eq!(fragment.as_str(), "{ id name column_values { id text } }");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    entries: Vec<FieldEntry>,
}

impl FieldSelection {
    /// Creates an empty selection, which renders as the default field list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a plain field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.entries.push(FieldEntry::Field(name.into()));
        self
    }

    /// Appends a field with a nested selection.
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, selection: Self) -> Self {
        self.entries.push(FieldEntry::Nested {
            name: name.into(),
            selection,
        });
        self
    }

    /// Appends a pre-built operation body as a sub-query.
    #[must_use]
    pub fn document(mut self, body: QueryFragment) -> Self {
        self.entries.push(FieldEntry::Document(body));
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: FieldEntry) {
        self.entries.push(entry);
    }

    /// Returns `true` if no fields were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Returns the number of nested selection levels, counting this one.
    ///
    /// Spliced documents count as one level.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .entries
            .iter()
            .map(|entry| match entry {
                FieldEntry::Nested { selection, .. } => selection.depth(),
                FieldEntry::Field(_) | FieldEntry::Document(_) => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|name| FieldEntry::Field(name.into()))
                .collect(),
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for FieldSelection {
    fn from(names: Vec<S>) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for FieldSelection {
    fn from(names: [S; N]) -> Self {
        names.into_iter().collect()
    }
}

impl From<&[&str]> for FieldSelection {
    fn from(names: &[&str]) -> Self {
        names.iter().copied().collect()
    }
}

impl ObjectTypeDescriptor {
    /// Renders a selection set fragment: `{ a b c { d } }`.
    ///
    /// An empty selection expands to every declared field of this kind, in
    /// declaration order. An empty nested selection under a field that
    /// resolves to a registered object kind expands to that kind's declared
    /// fields; under any other field it renders as the bare field name.
    #[must_use]
    pub fn render_fields(&self, requested: &FieldSelection) -> QueryFragment {
        if requested.is_empty() {
            return QueryFragment::new(self.default_selection());
        }
        QueryFragment::new(self.selection_set(requested))
    }

    fn default_selection(&self) -> String {
        format!("{{ {} }}", self.field_names().collect::<Vec<_>>().join(" "))
    }

    fn selection_set(&self, selection: &FieldSelection) -> String {
        let parts: Vec<String> = selection
            .entries
            .iter()
            .map(|entry| match entry {
                FieldEntry::Field(name) => name.clone(),
                FieldEntry::Document(body) => body.as_str().to_string(),
                FieldEntry::Nested { name, selection } => self.nested_selection(name, selection),
            })
            .collect();
        format!("{{ {} }}", parts.join(" "))
    }

    fn nested_selection(&self, name: &str, selection: &FieldSelection) -> String {
        let nested_kind = self
            .field(name)
            .and_then(|field| field.object)
            .map(registry::describe);

        match (selection.is_empty(), nested_kind) {
            (true, Some(kind)) => format!("{name} {}", kind.default_selection()),
            (true, None) => name.to_string(),
            (false, Some(kind)) => format!("{name} {}", kind.selection_set(selection)),
            (false, None) => format!("{name} {}", self.selection_set(selection)),
        }
    }
}
