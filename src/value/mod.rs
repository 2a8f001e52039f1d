//! Dynamic values shared by every sequence representation.
//!
//! The sequence operations in [`crate::seq`] are polymorphic over the runtime
//! representation of their input. That polymorphism needs a common value
//! universe: an ordered list may hold numbers next to strings next to nested
//! mappings, exactly as in a dynamically typed host. This module provides
//! that universe.
//!
//! # Overview
//!
//! - [`Value`]: the closed set of runtime values — nil, booleans, numbers,
//!   strings, lists, and insertion-ordered mappings.
//! - [`ValueKind`]: the classification of a value, used for representation
//!   dispatch and for error reporting.
//!
//! Numbers are IEEE-754 doubles. Mappings preserve the insertion order of
//! their keys for iteration while comparing equal independently of order.
//!
//! # Examples
//!
//! ```
//! use polyseq::value::{Value, ValueKind};
//!
//! let value = Value::from(vec![
//!     Value::from(1),
//!     Value::from("two"),
//!     Value::Nil,
//! ]);
//!
//! assert_eq!(value.kind(), ValueKind::List);
//! assert_eq!(value.as_list().map(<[Value]>::len), Some(3));
//! ```

mod serde_support;

use std::fmt;

use indexmap::IndexMap;

/// The classification of a [`Value`], one tag per variant.
///
/// Operations that refuse an input report the offending kind through
/// [`UnsupportedError`](crate::seq::UnsupportedError), and the kind's
/// [`Display`](fmt::Display) rendering is the lowercase name used in those
/// messages.
///
/// # Examples
///
/// ```
/// use polyseq::value::{Value, ValueKind};
///
/// assert_eq!(Value::from(2.5).kind(), ValueKind::Number);
/// assert_eq!(ValueKind::Number.to_string(), "number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The absent value.
    Nil,
    /// A boolean.
    Bool,
    /// An IEEE-754 double.
    Number,
    /// A string.
    Str,
    /// An ordered list.
    List,
    /// A key-value mapping.
    Map,
}

impl ValueKind {
    /// Returns the lowercase name of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::value::ValueKind;
    ///
    /// assert_eq!(ValueKind::Map.name(), "mapping");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Str => "string",
            Self::List => "list",
            Self::Map => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A dynamically typed runtime value.
///
/// `Value` is the element type of ordered lists and the value type of
/// mappings, so arbitrarily nested data is representable. Equality is
/// structural; numbers follow IEEE-754, so `NaN` is not equal to itself, and
/// mappings compare equal regardless of key order.
///
/// The [`Display`](fmt::Display) rendering is the compact JSON text of the
/// value, with non-finite numbers rendered as `null`.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use polyseq::value::Value;
///
/// let mut entries = IndexMap::new();
/// entries.insert(String::from("name"), Value::from("ada"));
/// entries.insert(String::from("age"), Value::from(36));
///
/// let record = Value::from(entries);
/// assert_eq!(record.to_string(), r#"{"name":"ada","age":36.0}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// An IEEE-754 double.
    Number(f64),
    /// A string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// An insertion-ordered mapping from string keys to values.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Returns the classification of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Nil.kind(), ValueKind::Nil);
    /// assert_eq!(Value::from("abc").kind(), ValueKind::Str);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Returns `true` if this value is [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the boolean payload, or `None` for any other kind.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the numeric payload, or `None` for any other kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::value::Value;
    ///
    /// assert_eq!(Value::from(1.5).as_number(), Some(1.5));
    /// assert_eq!(Value::from("1.5").as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload, or `None` for any other kind.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the list payload as a slice, or `None` for any other kind.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the mapping payload, or `None` for any other kind.
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&serde_json::Value::from(self), formatter)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(String::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::List(items.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        Self::Map(entries.into_iter().collect())
    }
}
