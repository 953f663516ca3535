//! Argument list rendering.
//!
//! Turns an [`ArgumentMap`] into a `(name:value, ...)` fragment, checking the
//! values against the wire types declared by an object kind's argument preset.
//!
//! # Rendering Rules
//!
//! | Wire type | Accepted values | Output |
//! |-----------|-----------------|--------|
//! | `String`, `JSON`, dates | string | `"escaped"` |
//! | `Int` | integer, integer string | `42` |
//! | `Float` | number, numeric string | `1.5` |
//! | `Boolean` | boolean | `true` |
//! | `ID` | integer or string | `42` / `"abc"` |
//! | enum types | name token | `private` |
//! | `[T]` | list or single `T` | `[1, 2]` |
//!
//! [`ArgumentValue::Raw`] bypasses every rule and is inserted verbatim.

use serde_json::Number;

use crate::query::document::QueryFragment;
use crate::query::errors::{ConfigurationError, InputValidationError, QueryError};
use crate::query::registry::{
    is_graphql_name, ArgumentPreset, ArgumentSpec, ObjectTypeDescriptor, ScalarKind, WireType,
};
use crate::query::values::{ArgumentMap, ArgumentValue};

/// Escapes text for use inside a GraphQL string literal.
///
/// Carriage returns and line feeds are stripped; backslashes and double
/// quotes are escaped.
///
/// # Example
///
/// ```rust
/// use monday_api::query::escape_string;
///
/// assert_eq!(escape_string("say \"hi\"\n"), r#"say \"hi\""#);
/// ```
#[must_use]
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\r' | '\n' => {}
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn quote(value: &str) -> String {
    format!("\"{}\"", escape_string(value))
}

/// Extracts the argument names from a raw `name:value, name:value` fragment.
fn raw_argument_names(raw: &str) -> Vec<&str> {
    raw.split(',')
        .filter_map(|part| part.split_once(':'))
        .map(|(name, _)| name.trim())
        .filter(|name| is_graphql_name(name))
        .collect()
}

impl ObjectTypeDescriptor {
    /// Renders an argument list fragment.
    ///
    /// When `preset` is given, only the arguments declared by that preset are
    /// permitted and its required arguments must be present. Without a preset
    /// the root query arguments supply the wire types; undeclared names are
    /// passed through with their natural rendering.
    ///
    /// `raw_prefix` is inserted verbatim as the first entry of the list. Names
    /// it assigns (e.g. `board_kind:private`) count as supplied for the
    /// required-argument check and may not be repeated in `values`. With a
    /// preset, they must be declared by it.
    ///
    /// Arguments appear in the iteration order of `values`. An empty result
    /// renders as the empty fragment, without parentheses.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::UnknownPreset`] if `preset` is not declared.
    /// - [`ConfigurationError::UndeclaredPresetArgument`] if `raw_prefix`
    ///   assigns an argument the preset does not declare.
    /// - [`InputValidationError::ArgumentNotPermitted`] if a value is not
    ///   allowed by the preset or is already assigned by `raw_prefix`.
    /// - [`InputValidationError::MissingRequiredArgument`] if a required
    ///   argument is absent.
    /// - [`InputValidationError::InvalidArgumentValue`] if a value does not
    ///   fit its declared wire type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_api::query::{registry, ArgumentMap};
    ///
    /// let board = registry::board();
    /// let values = ArgumentMap::new().with("board_name", "Demo");
    ///
    /// let fragment = board
    ///     .render_arguments(&values, Some("create"), Some("board_kind:private"))
    ///     .unwrap();
    /// assert_eq!(fragment.as_str(), r#"(board_kind:private, board_name:"Demo")"#);
    /// ```
    pub fn render_arguments(
        &self,
        values: &ArgumentMap,
        preset: Option<&str>,
        raw_prefix: Option<&str>,
    ) -> Result<QueryFragment, QueryError> {
        let (contract, strict) = match preset {
            Some(name) => (self.preset(name)?, true),
            None => (&self.arguments, false),
        };

        let raw_prefix = raw_prefix
            .map(|raw| raw.trim().trim_end_matches(',').trim_end())
            .filter(|raw| !raw.is_empty());

        let raw_names = raw_prefix.map(raw_argument_names).unwrap_or_default();
        let undeclared = raw_names
            .iter()
            .find(|name| strict && contract.argument(name).is_none());
        if let Some(undeclared) = undeclared {
            return Err(ConfigurationError::UndeclaredPresetArgument {
                kind: self.kind.as_str(),
                preset: contract.name,
                argument: (*undeclared).to_string(),
            }
            .into());
        }

        let mut parts = Vec::with_capacity(values.len() + 1);
        if let Some(raw) = raw_prefix {
            parts.push(raw.to_string());
        }

        for (name, value) in values.iter() {
            let spec = contract.argument(name);
            let permitted = is_graphql_name(name)
                && (spec.is_some() || !strict)
                && !raw_names.contains(&name);
            if !permitted {
                return Err(InputValidationError::ArgumentNotPermitted {
                    argument: name.to_string(),
                    preset: contract.name.to_string(),
                }
                .into());
            }

            let rendered = match spec {
                Some(spec) => self.render_typed(spec, value)?,
                None => render_untyped(value),
            };
            parts.push(format!("{name}:{rendered}"));
        }

        check_required(contract, values, &raw_names)?;

        if parts.is_empty() {
            return Ok(QueryFragment::empty());
        }
        Ok(QueryFragment::new(format!("({})", parts.join(", "))))
    }

    fn render_typed(
        &self,
        spec: &'static ArgumentSpec,
        value: &ArgumentValue,
    ) -> Result<String, QueryError> {
        let wire = WireType::parse(spec.wire_type).ok_or(ConfigurationError::InvalidWireType {
            kind: self.kind.as_str(),
            name: spec.name,
            wire_type: spec.wire_type,
        })?;

        let invalid = || InputValidationError::InvalidArgumentValue {
            argument: spec.name.to_string(),
            expected: spec.wire_type.to_string(),
            found: value.kind_name().to_string(),
        };

        let rendered = match value {
            ArgumentValue::Raw(raw) => Some(raw.clone()),
            ArgumentValue::List(items) if wire.list => items
                .iter()
                .map(|item| render_scalar(wire.scalar(), item))
                .collect::<Option<Vec<_>>>()
                .map(|items| format!("[{}]", items.join(", "))),
            ArgumentValue::List(_) => None,
            scalar => render_scalar(wire.scalar(), scalar),
        };

        rendered.ok_or_else(|| invalid().into())
    }
}

fn check_required(
    contract: &ArgumentPreset,
    values: &ArgumentMap,
    raw_names: &[&str],
) -> Result<(), InputValidationError> {
    match contract.arguments.iter().find(|spec| {
        spec.is_required() && !values.contains_key(spec.name) && !raw_names.contains(&spec.name)
    }) {
        Some(missing) => Err(InputValidationError::MissingRequiredArgument {
            argument: missing.name.to_string(),
            preset: contract.name.to_string(),
        }),
        None => Ok(()),
    }
}

/// Renders a single value for a slot of the given scalar kind.
fn render_scalar(kind: ScalarKind, value: &ArgumentValue) -> Option<String> {
    match (kind, value) {
        (_, ArgumentValue::Raw(raw)) => Some(raw.clone()),
        (ScalarKind::Int, ArgumentValue::Number(n)) if !n.is_f64() => Some(n.to_string()),
        (ScalarKind::Int, ArgumentValue::String(s)) => parse_int(s).map(|n| n.to_string()),
        (ScalarKind::Float, ArgumentValue::Number(n)) => Some(n.to_string()),
        (ScalarKind::Float, ArgumentValue::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(|n| n.to_string()),
        (ScalarKind::Boolean, ArgumentValue::Boolean(b)) => Some(b.to_string()),
        (ScalarKind::Id, ArgumentValue::Number(n)) if !n.is_f64() => Some(n.to_string()),
        (ScalarKind::Id | ScalarKind::String, ArgumentValue::String(s)) => Some(quote(s)),
        (ScalarKind::Enum, ArgumentValue::String(s)) => {
            let token = s.trim();
            (is_graphql_name(token) && !matches!(token, "true" | "false" | "null"))
                .then(|| token.to_string())
        }
        _ => None,
    }
}

/// Parses an integer string into its canonical form, so `+5` and `007`
/// render as `5` and `7`.
fn parse_int(s: &str) -> Option<Number> {
    let s = s.trim();
    s.parse::<i64>()
        .map(Number::from)
        .or_else(|_| s.parse::<u64>().map(Number::from))
        .ok()
}

/// Renders a value with no declared wire type.
fn render_untyped(value: &ArgumentValue) -> String {
    match value {
        ArgumentValue::String(s) => quote(s),
        ArgumentValue::List(items) => format!(
            "[{}]",
            items.iter().map(render_untyped).collect::<Vec<_>>().join(", ")
        ),
        ArgumentValue::Number(_) | ArgumentValue::Boolean(_) | ArgumentValue::Raw(_) => {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::registry;

    #[test]
    fn test_escape_string_strips_line_breaks_and_escapes_quotes() {
        assert_eq!(escape_string("a\r\nb"), "ab");
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string(r"C:\temp"), r"C:\\temp");
    }

    #[test]
    fn test_render_preserves_value_order() {
        let values = ArgumentMap::new()
            .with("limit", 10)
            .with("ids", vec![1, 2])
            .with("page", 2);

        let fragment = registry::board().render_arguments(&values, None, None).unwrap();
        assert_eq!(fragment.as_str(), "(limit:10, ids:[1, 2], page:2)");
    }

    #[test]
    fn test_render_empty_arguments_yields_empty_fragment() {
        let fragment = registry::board()
            .render_arguments(&ArgumentMap::new(), None, None)
            .unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_render_raw_prefix_without_values() {
        let fragment = registry::board()
            .render_arguments(&ArgumentMap::new(), None, Some(" board_kind:share, "))
            .unwrap();
        assert_eq!(fragment.as_str(), "(board_kind:share)");
    }

    #[test]
    fn test_preset_rejects_undeclared_argument() {
        let values = ArgumentMap::new().with("board_id", 1).with("color", "red");
        let result = registry::board().render_arguments(&values, Some("archive"), None);

        assert_eq!(
            result.unwrap_err(),
            QueryError::Input(InputValidationError::ArgumentNotPermitted {
                argument: "color".to_string(),
                preset: "archive".to_string(),
            })
        );
    }

    #[test]
    fn test_preset_requires_required_arguments() {
        let result = registry::item().render_arguments(
            &ArgumentMap::new().with("item_name", "Task"),
            Some("create"),
            None,
        );

        assert_eq!(
            result.unwrap_err(),
            QueryError::Input(InputValidationError::MissingRequiredArgument {
                argument: "board_id".to_string(),
                preset: "create".to_string(),
            })
        );
    }

    #[test]
    fn test_raw_prefix_satisfies_required_argument() {
        let values = ArgumentMap::new().with("board_name", "Demo");
        let without = registry::board().render_arguments(&values, Some("create"), None);
        assert!(matches!(
            without,
            Err(QueryError::Input(
                InputValidationError::MissingRequiredArgument { .. }
            ))
        ));

        let with = registry::board()
            .render_arguments(&values, Some("create"), Some("board_kind:private"))
            .unwrap();
        assert_eq!(with.as_str(), r#"(board_kind:private, board_name:"Demo")"#);
    }

    #[test]
    fn test_value_repeating_raw_prefix_is_rejected() {
        let values = ArgumentMap::new()
            .with("board_name", "Demo")
            .with("board_kind", "share");

        for preset in [Some("create"), None] {
            let result = registry::board().render_arguments(&values, preset, Some("board_kind:private"));
            assert!(matches!(
                result,
                Err(QueryError::Input(InputValidationError::ArgumentNotPermitted { ref argument, .. }))
                    if argument == "board_kind"
            ));
        }
    }

    #[test]
    fn test_raw_prefix_outside_preset_is_configuration_error() {
        let values = ArgumentMap::new().with("board_id", 1);
        let result = registry::board().render_arguments(&values, Some("archive"), Some("force:true"));

        assert_eq!(
            result.unwrap_err(),
            QueryError::Configuration(ConfigurationError::UndeclaredPresetArgument {
                kind: "board",
                preset: "archive",
                argument: "force".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_preset_is_configuration_error() {
        let result = registry::group().render_arguments(&ArgumentMap::new(), Some("archive"), None);
        assert!(result.unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_numeric_slot_rejects_non_numeric_string() {
        let values = ArgumentMap::new().with("limit", "ten");
        let result = registry::board().render_arguments(&values, None, None);

        assert_eq!(
            result.unwrap_err(),
            QueryError::Input(InputValidationError::InvalidArgumentValue {
                argument: "limit".to_string(),
                expected: "Int".to_string(),
                found: "string".to_string(),
            })
        );
    }

    #[test]
    fn test_numeric_slot_accepts_numeric_string() {
        let values = ArgumentMap::new().with("limit", " 25 ");
        let fragment = registry::board().render_arguments(&values, None, None).unwrap();
        assert_eq!(fragment.as_str(), "(limit:25)");
    }

    #[test]
    fn test_numeric_string_renders_canonical_literal() {
        let render = |value: &str| {
            registry::board()
                .render_arguments(&ArgumentMap::new().with("limit", value), None, None)
                .map(|fragment| fragment.as_str().to_string())
        };

        assert_eq!(render("+5").unwrap(), "(limit:5)");
        assert_eq!(render("007").unwrap(), "(limit:7)");
        assert_eq!(render("-3").unwrap(), "(limit:-3)");
        assert!(render(".5").is_err());
        assert!(render("5.").is_err());
    }

    #[test]
    fn test_float_string_renders_canonical_literal() {
        let float = |value: &str| render_scalar(ScalarKind::Float, &ArgumentValue::from(value));

        assert_eq!(float(".5").as_deref(), Some("0.5"));
        assert_eq!(float("5.").as_deref(), Some("5.0"));
        assert_eq!(float("+1.25").as_deref(), Some("1.25"));
        assert_eq!(float("inf"), None);
        assert_eq!(float("NaN"), None);
    }

    #[test]
    fn test_boolean_slot_renders_bare() {
        let values = ArgumentMap::new().with("newest_first", true);
        let fragment = registry::item().render_arguments(&values, None, None).unwrap();
        assert_eq!(fragment.as_str(), "(newest_first:true)");
    }

    #[test]
    fn test_boolean_slot_rejects_string() {
        let values = ArgumentMap::new().with("newest_first", "yes");
        assert!(registry::item().render_arguments(&values, None, None).is_err());
    }

    #[test]
    fn test_id_slot_quotes_strings_and_leaves_numbers_bare() {
        let create = |board_id: ArgumentValue| {
            let values = ArgumentMap::new()
                .with("board_id", board_id)
                .with("group_name", "Backlog");
            registry::group().render_arguments(&values, Some("create"), None)
        };

        assert_eq!(
            create(ArgumentValue::from(7)).unwrap().as_str(),
            r#"(board_id:7, group_name:"Backlog")"#
        );
        assert_eq!(
            create(ArgumentValue::from("7")).unwrap().as_str(),
            r#"(board_id:"7", group_name:"Backlog")"#
        );
    }

    #[test]
    fn test_enum_slot_renders_token_and_rejects_garbage() {
        let board = registry::board();
        let ok = board
            .render_arguments(&ArgumentMap::new().with("state", "active"), None, None)
            .unwrap();
        assert_eq!(ok.as_str(), "(state:active)");

        let bad = board.render_arguments(&ArgumentMap::new().with("state", "not active"), None, None);
        assert!(bad.is_err());
    }

    #[test]
    fn test_single_value_for_list_slot_renders_bare() {
        let values = ArgumentMap::new().with("ids", 123_u64);
        let fragment = registry::board().render_arguments(&values, None, None).unwrap();
        assert_eq!(fragment.as_str(), "(ids:123)");
    }

    #[test]
    fn test_list_for_scalar_slot_is_rejected() {
        let values = ArgumentMap::new().with("limit", vec![1, 2]);
        assert!(registry::board().render_arguments(&values, None, None).is_err());
    }

    #[test]
    fn test_string_values_are_escaped() {
        let values = ArgumentMap::new()
            .with("board_id", 1)
            .with("item_name", "Line \"one\"\nLine two");
        let fragment = registry::item()
            .render_arguments(&values, Some("create"), None)
            .unwrap();
        assert_eq!(
            fragment.as_str(),
            r#"(board_id:1, item_name:"Line \"one\"Line two")"#
        );
    }

    #[test]
    fn test_raw_value_bypasses_type_checks() {
        let values = ArgumentMap::new().with("limit", ArgumentValue::raw("$limit"));
        let fragment = registry::board().render_arguments(&values, None, None).unwrap();
        assert_eq!(fragment.as_str(), "(limit:$limit)");
    }

    #[test]
    fn test_undeclared_argument_passes_through_without_preset() {
        let values = ArgumentMap::new()
            .with("workspace_name", "Ops")
            .with("flags", vec![true, false]);
        let fragment = registry::board().render_arguments(&values, None, None).unwrap();
        assert_eq!(fragment.as_str(), r#"(workspace_name:"Ops", flags:[true, false])"#);
    }

    #[test]
    fn test_invalid_argument_name_is_rejected() {
        let values = ArgumentMap::new().with("bad name", 1);
        let result = registry::board().render_arguments(&values, None, None);
        assert!(matches!(
            result,
            Err(QueryError::Input(
                InputValidationError::ArgumentNotPermitted { .. }
            ))
        ));
    }
}
