//! Error types for document construction.
//!
//! Two families of failures can occur while building a document, and both are
//! raised before any request leaves the process:
//!
//! - [`ConfigurationError`]: the static type registry was asked for something
//!   it does not define. These are programming errors in the calling code and
//!   should be treated as fatal.
//! - [`InputValidationError`]: caller-supplied values do not satisfy the
//!   argument contract of the chosen operation. These are recoverable and
//!   should be reported back to the caller.
//!
//! [`QueryError`] unifies both for the builder APIs.
//!
//! # Example
//!
//! ```rust
//! use monday_api::query::{registry, ArgumentMap, QueryError};
//!
//! let board = registry::board();
//! let values = ArgumentMap::new().with("not_an_argument", 1);
//!
//! let result = board.render_arguments(&values, Some("archive"), None);
//! assert!(matches!(result, Err(QueryError::Input(_))));
//! ```

use thiserror::Error;

/// A registry lookup or registry definition is invalid.
///
/// These errors indicate a bug in the code requesting a document, never bad
/// user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The requested object kind is not registered.
    #[error("Unknown object kind '{kind}'. Expected one of: board, item, subitem, group, column.")]
    UnknownObjectKind {
        /// The kind name that was requested.
        kind: String,
    },

    /// The requested argument preset is not declared on the object kind.
    #[error("Object kind '{kind}' has no argument preset named '{preset}'.")]
    UnknownPreset {
        /// The object kind that was queried.
        kind: &'static str,
        /// The preset name that was requested.
        preset: String,
    },

    /// An argument name appears more than once in a preset.
    #[error("Argument '{argument}' is declared twice in preset '{preset}' of object kind '{kind}'.")]
    DuplicatePresetArgument {
        /// The object kind owning the preset.
        kind: &'static str,
        /// The preset containing the duplicate.
        preset: &'static str,
        /// The duplicated argument name.
        argument: &'static str,
    },

    /// A pre-rendered argument names an argument the preset does not declare.
    #[error("Preset '{preset}' of object kind '{kind}' does not declare argument '{argument}'.")]
    UndeclaredPresetArgument {
        /// The object kind owning the preset.
        kind: &'static str,
        /// The preset that was applied.
        preset: &'static str,
        /// The undeclared argument name.
        argument: String,
    },

    /// A field or argument carries a wire type that is not valid GraphQL type notation.
    #[error("Invalid wire type '{wire_type}' for '{name}' on object kind '{kind}'.")]
    InvalidWireType {
        /// The object kind owning the declaration.
        kind: &'static str,
        /// The field or argument name.
        name: &'static str,
        /// The rejected wire type string.
        wire_type: &'static str,
    },
}

/// Caller-supplied values cannot be turned into a valid document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    /// A required argument was not supplied.
    #[error("Missing required argument '{argument}' for preset '{preset}'.")]
    MissingRequiredArgument {
        /// The name of the missing argument.
        argument: String,
        /// The preset that requires it.
        preset: String,
    },

    /// An argument was supplied that the chosen preset does not permit.
    #[error("Argument '{argument}' is not permitted by preset '{preset}'.")]
    ArgumentNotPermitted {
        /// The rejected argument name.
        argument: String,
        /// The preset that was applied.
        preset: String,
    },

    /// A value does not match the declared wire type of its argument.
    #[error("Invalid value for argument '{argument}': expected {expected}, got {found}.")]
    InvalidArgumentValue {
        /// The argument name.
        argument: String,
        /// The declared wire type.
        expected: String,
        /// A short description of the supplied value.
        found: String,
    },

    /// A column update could not be encoded.
    #[error("Unsupported value for column '{column}': {reason}")]
    UnsupportedColumnValue {
        /// The column identifier.
        column: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A number cannot be represented in JSON.
    #[error("{value} is not a finite number and cannot be sent as a column value.")]
    NonFiniteNumber {
        /// The rejected value, formatted.
        value: String,
    },

    /// Column value input is not a JSON object keyed by column identifier.
    #[error("Column values must be a JSON object keyed by column id, got {found}.")]
    MalformedColumnValues {
        /// The JSON type that was supplied instead.
        found: &'static str,
    },

    /// An identifier needed to address the mutation target has not been set.
    #[error("Missing identifier '{identifier}'. Set it before building this operation.")]
    MissingIdentifier {
        /// The name of the missing identifier (e.g. `board_id`).
        identifier: &'static str,
    },
}

/// Unified error type for the document construction APIs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The registry was misused.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The supplied values were rejected.
    #[error(transparent)]
    Input(#[from] InputValidationError),
}

impl QueryError {
    /// Returns `true` if this error stems from a programming mistake rather
    /// than from caller input.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
