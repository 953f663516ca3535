//! Caller-facing argument values.
//!
//! [`ArgumentMap`] is an insertion-ordered map from argument name to
//! [`ArgumentValue`]. Iteration order is the order in which arguments appear
//! in the rendered fragment.

use std::fmt;

use serde_json::Number;

/// A business-level argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    /// Text; quoted and escaped when rendered into a string-family slot.
    String(String),
    /// An integer or floating point number, rendered bare.
    Number(Number),
    /// A boolean, rendered bare.
    Boolean(bool),
    /// A list of values, rendered as `[a, b]`.
    List(Vec<ArgumentValue>),
    /// A pre-rendered fragment inserted verbatim (e.g. an enum literal).
    Raw(String),
}

impl ArgumentValue {
    /// Creates a raw value that bypasses quoting and type checks.
    #[must_use]
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self::Raw(fragment.into())
    }

    /// Creates a floating point value.
    ///
    /// Returns `None` for NaN and infinities, which have no GraphQL literal.
    #[must_use]
    pub fn float(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Number)
    }

    /// Short description of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::List(_) => "list",
            Self::Raw(_) => "raw fragment",
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ArgumentValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgumentValue {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl<T: Into<Self>> From<Vec<T>> for ArgumentValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Raw(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// An insertion-ordered map of argument name to value.
///
/// # Example
///
/// ```rust
/// use monday_api::query::{ArgumentMap, ArgumentValue};
///
/// let mut args = ArgumentMap::new().with("board_name", "Demo").with("limit", 5);
/// args.insert("board_name", "Renamed");
///
/// let names: Vec<&str> = args.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["board_name", "limit"]);
/// assert_eq!(args.get("board_name"), Some(&ArgumentValue::from("Renamed")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMap {
    entries: Vec<(String, ArgumentValue)>,
}

impl ArgumentMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an argument and returns the map, for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an argument.
    ///
    /// An existing argument with the same name keeps its position and has its
    /// value replaced; the previous value is returned.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ArgumentValue>,
    ) -> Option<ArgumentValue> {
        let name = name.into();
        let value = value.into();

        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Removes an argument, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<ArgumentValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the value of an argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the argument is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for ArgumentMap
where
    K: Into<String>,
    V: Into<ArgumentValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for ArgumentMap
where
    K: Into<String>,
    V: Into<ArgumentValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
