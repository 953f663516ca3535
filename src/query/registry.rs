//! Static metadata for the queryable object kinds.
//!
//! Each object kind (board, item, sub-item, group, column) is described by an
//! immutable [`ObjectTypeDescriptor`]: the root field used to query it, the
//! fields it exposes with their wire types, the arguments accepted by its
//! root query, and named argument presets for the mutations that operate on it.
//!
//! Descriptors are `'static` data built at compile time. They are never
//! mutated, so they can be shared across threads without synchronization.
//!
//! # Wire Type Notation
//!
//! Wire types follow GraphQL type notation with a leading `!` marking
//! required values, e.g. `!Int`, `[Item]`, `!String`. A trailing `!`
//! (`Int!`) is accepted as well.
//!
//! # Example
//!
//! ```rust
//! use monday_api::query::registry::{self, ObjectKind};
//!
//! let board = registry::describe(ObjectKind::Board);
//! assert_eq!(board.scope, "boards");
//! assert!(board.field("name").is_some());
//!
//! let create = board.preset("create").unwrap();
//! assert!(create.argument("board_name").unwrap().is_required());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::query::errors::ConfigurationError;

/// The object kinds known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A board.
    Board,
    /// An item on a board.
    Item,
    /// A sub-item nested under an item.
    SubItem,
    /// A group of items on a board.
    Group,
    /// A column on a board.
    Column,
}

impl ObjectKind {
    /// All registered kinds.
    pub const ALL: [Self; 5] = [
        Self::Board,
        Self::Item,
        Self::SubItem,
        Self::Group,
        Self::Column,
    ];

    /// Returns the registry name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Item => "item",
            Self::SubItem => "subitem",
            Self::Group => "group",
            Self::Column => "column",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigurationError::UnknownObjectKind {
                kind: s.to_string(),
            })
    }
}

/// Value category of a wire type, used to pick the rendering rule for arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// `Int`
    Int,
    /// `Float`
    Float,
    /// `Boolean`
    Boolean,
    /// `ID`, which accepts both integer and string literals.
    Id,
    /// `String`, `JSON` and the date/time string scalars.
    String,
    /// Any other named type; rendered as a bare enum token.
    Enum,
}

/// A parsed wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireType<'a> {
    /// Whether the outer value is non-null.
    pub required: bool,
    /// Whether the type is a list.
    pub list: bool,
    /// The named base type (e.g. `Int` for `[Int]`).
    pub base: &'a str,
}

impl<'a> WireType<'a> {
    /// Parses GraphQL type notation with leading or trailing `!` markers.
    ///
    /// Returns `None` if the string is not well-formed.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut rest = raw.trim();
        let mut required = false;

        if let Some(stripped) = rest.strip_prefix('!') {
            required = true;
            rest = stripped;
        }
        if let Some(stripped) = rest.strip_suffix('!') {
            required = true;
            rest = stripped;
        }

        let (list, base) = match rest.strip_prefix('[') {
            Some(inner) => {
                let inner = inner.strip_suffix(']')?;
                let inner = inner.strip_prefix('!').unwrap_or(inner);
                (true, inner.strip_suffix('!').unwrap_or(inner))
            }
            None => (false, rest),
        };

        is_graphql_name(base).then_some(Self {
            required,
            list,
            base,
        })
    }

    /// Returns the value category of the base type.
    #[must_use]
    pub fn scalar(&self) -> ScalarKind {
        match self.base {
            "Int" => ScalarKind::Int,
            "Float" => ScalarKind::Float,
            "Boolean" => ScalarKind::Boolean,
            "ID" => ScalarKind::Id,
            "String" | "JSON" | "Date" | "ISO8601DateTime" => ScalarKind::String,
            _ => ScalarKind::Enum,
        }
    }
}

/// Returns `true` if `name` matches `/[_A-Za-z][_0-9A-Za-z]*/`.
pub(crate) fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// A field exposed by an object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name.
    pub name: &'static str,
    /// The field's wire type.
    pub wire_type: &'static str,
    /// The object kind the field resolves to, for sub-object fields.
    pub object: Option<ObjectKind>,
}

/// An argument accepted by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// The argument name.
    pub name: &'static str,
    /// The argument's wire type.
    pub wire_type: &'static str,
}

impl ArgumentSpec {
    /// Returns `true` if the argument must be supplied.
    #[must_use]
    pub fn is_required(&self) -> bool {
        WireType::parse(self.wire_type).is_some_and(|wire| wire.required)
    }
}

/// A named set of permitted arguments for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentPreset {
    /// The preset name (e.g. `create`).
    pub name: &'static str,
    /// The permitted arguments.
    pub arguments: &'static [ArgumentSpec],
}

impl ArgumentPreset {
    /// Looks up an argument by name.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&'static ArgumentSpec> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

/// Static description of one queryable/mutable object kind.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectTypeDescriptor {
    /// The kind this descriptor describes.
    pub kind: ObjectKind,
    /// The root field name used to query this kind (e.g. `boards`).
    pub scope: &'static str,
    /// Declared fields, in default selection order.
    pub fields: &'static [FieldSpec],
    /// Arguments accepted by the root query when no preset is chosen.
    pub arguments: ArgumentPreset,
    /// Named argument presets for mutations on this kind.
    pub presets: &'static [ArgumentPreset],
}

impl ObjectTypeDescriptor {
    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Looks up an argument preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownPreset`] if the preset is not declared.
    pub fn preset(&self, name: &str) -> Result<&'static ArgumentPreset, ConfigurationError> {
        self.presets
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| ConfigurationError::UnknownPreset {
                kind: self.kind.as_str(),
                preset: name.to_string(),
            })
    }

    /// Checks the descriptor's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicatePresetArgument`] if a preset
    /// repeats an argument name, or [`ConfigurationError::InvalidWireType`]
    /// if any wire type is malformed.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let kind = self.kind.as_str();

        for field in self.fields {
            if WireType::parse(field.wire_type).is_none() {
                return Err(ConfigurationError::InvalidWireType {
                    kind,
                    name: field.name,
                    wire_type: field.wire_type,
                });
            }
        }

        for preset in std::iter::once(&self.arguments).chain(self.presets) {
            let mut seen = HashSet::new();
            for arg in preset.arguments {
                if !seen.insert(arg.name) {
                    return Err(ConfigurationError::DuplicatePresetArgument {
                        kind,
                        preset: preset.name,
                        argument: arg.name,
                    });
                }
                if WireType::parse(arg.wire_type).is_none() {
                    return Err(ConfigurationError::InvalidWireType {
                        kind,
                        name: arg.name,
                        wire_type: arg.wire_type,
                    });
                }
            }
        }

        Ok(())
    }
}

const fn field(name: &'static str, wire_type: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        wire_type,
        object: None,
    }
}

const fn object(name: &'static str, wire_type: &'static str, kind: ObjectKind) -> FieldSpec {
    FieldSpec {
        name,
        wire_type,
        object: Some(kind),
    }
}

const fn arg(name: &'static str, wire_type: &'static str) -> ArgumentSpec {
    ArgumentSpec { name, wire_type }
}

/// Name of the preset used for the root query arguments.
pub const QUERY_PRESET: &str = "query";

static BOARD: ObjectTypeDescriptor = ObjectTypeDescriptor {
    kind: ObjectKind::Board,
    scope: "boards",
    fields: &[
        field("board_folder_id", "Int"),
        field("board_kind", "!BoardKind"),
        object("columns", "[Column]", ObjectKind::Column),
        field("communication", "JSON"),
        field("description", "String"),
        object("groups", "[Group]", ObjectKind::Group),
        field("id", "!ID"),
        field("item_terminology", "String"),
        field("items_count", "Int"),
        field("name", "!String"),
        field("permissions", "!String"),
        field("state", "!State"),
        object("top_group", "!Group", ObjectKind::Group),
        field("type", "BoardObjectType"),
        field("updated_at", "ISO8601DateTime"),
        field("url", "!String"),
        field("workspace_id", "ID"),
    ],
    arguments: ArgumentPreset {
        name: QUERY_PRESET,
        arguments: &[
            arg("ids", "[ID]"),
            arg("board_kind", "BoardKind"),
            arg("limit", "Int"),
            arg("page", "Int"),
            arg("state", "State"),
            arg("order_by", "BoardsOrderBy"),
            arg("workspace_ids", "[ID]"),
        ],
    },
    presets: &[
        ArgumentPreset {
            name: "create",
            arguments: &[
                arg("board_name", "!String"),
                arg("board_kind", "!BoardKind"),
                arg("description", "String"),
                arg("folder_id", "ID"),
                arg("workspace_id", "ID"),
                arg("template_id", "ID"),
                arg("board_owner_ids", "[ID]"),
                arg("board_subscriber_ids", "[ID]"),
            ],
        },
        ArgumentPreset {
            name: "archive",
            arguments: &[arg("board_id", "!ID")],
        },
    ],
};

// Items and sub-items share their field list.
const ITEM_FIELDS: &[FieldSpec] = &[
    object("board", "Board", ObjectKind::Board),
    field("column_values", "[ColumnValue]"),
    field("created_at", "Date"),
    field("creator_id", "!String"),
    field("email", "!String"),
    object("group", "Group", ObjectKind::Group),
    field("id", "!ID"),
    field("name", "!String"),
    object("parent_item", "Item", ObjectKind::Item),
    field("relative_link", "String"),
    field("state", "State"),
    object("subitems", "[Item]", ObjectKind::SubItem),
    field("updated_at", "Date"),
    field("url", "!String"),
];

static ITEM: ObjectTypeDescriptor = ObjectTypeDescriptor {
    kind: ObjectKind::Item,
    scope: "items",
    fields: ITEM_FIELDS,
    arguments: ArgumentPreset {
        name: QUERY_PRESET,
        arguments: &[
            arg("ids", "[ID]"),
            arg("limit", "Int"),
            arg("page", "Int"),
            arg("newest_first", "Boolean"),
            arg("exclude_nonactive", "Boolean"),
        ],
    },
    presets: &[
        ArgumentPreset {
            name: "create",
            arguments: &[
                arg("board_id", "!ID"),
                arg("group_id", "String"),
                arg("item_name", "!String"),
                arg("column_values", "JSON"),
                arg("create_labels_if_missing", "Boolean"),
            ],
        },
        ArgumentPreset {
            name: "archive_delete",
            arguments: &[arg("item_id", "!ID")],
        },
        ArgumentPreset {
            name: "change_multiple_column_values",
            arguments: &[
                arg("item_id", "ID"),
                arg("board_id", "!ID"),
                arg("column_values", "!JSON"),
                arg("create_labels_if_missing", "Boolean"),
            ],
        },
    ],
};

static SUB_ITEM: ObjectTypeDescriptor = ObjectTypeDescriptor {
    kind: ObjectKind::SubItem,
    scope: "subitems",
    fields: ITEM_FIELDS,
    arguments: ArgumentPreset {
        name: QUERY_PRESET,
        arguments: &[],
    },
    presets: &[ArgumentPreset {
        name: "create",
        arguments: &[
            arg("parent_item_id", "!ID"),
            arg("item_name", "!String"),
            arg("column_values", "JSON"),
            arg("create_labels_if_missing", "Boolean"),
        ],
    }],
};

static GROUP: ObjectTypeDescriptor = ObjectTypeDescriptor {
    kind: ObjectKind::Group,
    scope: "groups",
    fields: &[
        field("archived", "Boolean"),
        field("color", "!String"),
        field("deleted", "Boolean"),
        field("id", "!ID"),
        field("position", "!String"),
        field("title", "!String"),
    ],
    arguments: ArgumentPreset {
        name: QUERY_PRESET,
        arguments: &[arg("ids", "[String]")],
    },
    presets: &[ArgumentPreset {
        name: "create",
        arguments: &[
            arg("board_id", "!ID"),
            arg("group_name", "!String"),
            arg("group_color", "String"),
            arg("relative_to", "String"),
            arg("position_relative_method", "PositionRelative"),
        ],
    }],
};

static COLUMN: ObjectTypeDescriptor = ObjectTypeDescriptor {
    kind: ObjectKind::Column,
    scope: "columns",
    fields: &[
        field("archived", "!Boolean"),
        field("description", "String"),
        field("id", "!ID"),
        field("settings_str", "!String"),
        field("title", "!String"),
        field("type", "!ColumnType"),
        field("width", "Int"),
    ],
    arguments: ArgumentPreset {
        name: QUERY_PRESET,
        arguments: &[arg("ids", "[String]"), arg("types", "[ColumnType]")],
    },
    presets: &[ArgumentPreset {
        name: "create",
        arguments: &[
            arg("board_id", "!ID"),
            arg("title", "!String"),
            arg("column_type", "!ColumnType"),
            arg("description", "String"),
            arg("defaults", "JSON"),
            arg("id", "String"),
            arg("after_column_id", "ID"),
        ],
    }],
};

/// Returns the descriptor for an object kind.
#[must_use]
pub fn describe(kind: ObjectKind) -> &'static ObjectTypeDescriptor {
    match kind {
        ObjectKind::Board => &BOARD,
        ObjectKind::Item => &ITEM,
        ObjectKind::SubItem => &SUB_ITEM,
        ObjectKind::Group => &GROUP,
        ObjectKind::Column => &COLUMN,
    }
}

/// Returns the descriptor for an object kind given by name.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownObjectKind`] if no kind has that name.
pub fn describe_by_name(kind: &str) -> Result<&'static ObjectTypeDescriptor, ConfigurationError> {
    kind.parse::<ObjectKind>().map(describe)
}

/// Returns the board descriptor.
#[must_use]
pub fn board() -> &'static ObjectTypeDescriptor {
    describe(ObjectKind::Board)
}

/// Returns the item descriptor.
#[must_use]
pub fn item() -> &'static ObjectTypeDescriptor {
    describe(ObjectKind::Item)
}

/// Returns the sub-item descriptor.
#[must_use]
pub fn sub_item() -> &'static ObjectTypeDescriptor {
    describe(ObjectKind::SubItem)
}

/// Returns the group descriptor.
#[must_use]
pub fn group() -> &'static ObjectTypeDescriptor {
    describe(ObjectKind::Group)
}

/// Returns the column descriptor.
#[must_use]
pub fn column() -> &'static ObjectTypeDescriptor {
    describe(ObjectKind::Column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_descriptor_is_consistent() {
        for kind in ObjectKind::ALL {
            let descriptor = describe(kind);
            assert_eq!(descriptor.kind, kind);
            assert!(descriptor.validate().is_ok(), "{kind} failed validation");
        }
    }

    #[test]
    fn test_describe_by_name_is_case_insensitive() {
        assert_eq!(describe_by_name("Board").unwrap().scope, "boards");
        assert_eq!(describe_by_name(" subitem ").unwrap().scope, "subitems");
    }

    #[test]
    fn test_describe_by_name_rejects_unknown_kind() {
        let result = describe_by_name("workspace");
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::UnknownObjectKind {
                kind: "workspace".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_preset_is_configuration_error() {
        let result = board().preset("delete");
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownPreset { kind: "board", .. })
        ));
    }

    #[test]
    fn test_wire_type_parse_prefix_and_suffix_markers() {
        assert_eq!(
            WireType::parse("!Int"),
            Some(WireType {
                required: true,
                list: false,
                base: "Int"
            })
        );
        assert_eq!(
            WireType::parse("Int!"),
            Some(WireType {
                required: true,
                list: false,
                base: "Int"
            })
        );
        assert_eq!(
            WireType::parse("[Item]"),
            Some(WireType {
                required: false,
                list: true,
                base: "Item"
            })
        );
        assert_eq!(
            WireType::parse("![User!]"),
            Some(WireType {
                required: true,
                list: true,
                base: "User"
            })
        );
    }

    #[test]
    fn test_wire_type_parse_rejects_malformed_notation() {
        assert!(WireType::parse("").is_none());
        assert!(WireType::parse("[Int").is_none());
        assert!(WireType::parse("In t").is_none());
        assert!(WireType::parse("1Int").is_none());
    }

    #[test]
    fn test_wire_type_scalar_classification() {
        let scalar = |raw| WireType::parse(raw).unwrap().scalar();
        assert_eq!(scalar("!Int"), ScalarKind::Int);
        assert_eq!(scalar("Float"), ScalarKind::Float);
        assert_eq!(scalar("Boolean"), ScalarKind::Boolean);
        assert_eq!(scalar("[ID]"), ScalarKind::Id);
        assert_eq!(scalar("JSON"), ScalarKind::String);
        assert_eq!(scalar("!BoardKind"), ScalarKind::Enum);
    }

    #[test]
    fn test_validate_detects_duplicate_preset_argument() {
        static BROKEN: ObjectTypeDescriptor = ObjectTypeDescriptor {
            kind: ObjectKind::Group,
            scope: "groups",
            fields: &[],
            arguments: ArgumentPreset {
                name: QUERY_PRESET,
                arguments: &[],
            },
            presets: &[ArgumentPreset {
                name: "create",
                arguments: &[arg("board_id", "!ID"), arg("board_id", "ID")],
            }],
        };

        assert_eq!(
            BROKEN.validate(),
            Err(ConfigurationError::DuplicatePresetArgument {
                kind: "group",
                preset: "create",
                argument: "board_id",
            })
        );
    }

    #[test]
    fn test_validate_detects_invalid_wire_type() {
        static BROKEN: ObjectTypeDescriptor = ObjectTypeDescriptor {
            kind: ObjectKind::Column,
            scope: "columns",
            fields: &[field("id", "[ID")],
            arguments: ArgumentPreset {
                name: QUERY_PRESET,
                arguments: &[],
            },
            presets: &[],
        };

        assert!(matches!(
            BROKEN.validate(),
            Err(ConfigurationError::InvalidWireType { name: "id", .. })
        ));
    }

    #[test]
    fn test_object_fields_reference_nested_kinds() {
        assert_eq!(
            board().field("columns").and_then(|f| f.object),
            Some(ObjectKind::Column)
        );
        assert_eq!(
            item().field("subitems").and_then(|f| f.object),
            Some(ObjectKind::SubItem)
        );
        assert!(board().field("name").unwrap().object.is_none());
    }

    #[test]
    fn test_required_markers_on_presets() {
        let create = item().preset("create").unwrap();
        assert!(create.argument("board_id").unwrap().is_required());
        assert!(!create.argument("group_id").unwrap().is_required());
        assert!(create.argument("missing").is_none());
    }

    #[test]
    fn test_descriptors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ObjectTypeDescriptor>();
    }
}
