//! A small catalog of reusable value transformers.
//!
//! Companions to the [`predicate`](crate::predicate) catalog: plain
//! functions intended for [`compose!`](crate::compose),
//! [`cond`](crate::compose::cond), and ordinary `map` positions. The string
//! transformers take a borrowed input and allocate their result; nothing
//! here mutates its argument.

use crate::value::Value;

/// Returns the value unchanged.
///
/// The unit of [`compose!`](crate::compose): composing any function with
/// `identity` on either side leaves it equivalent to the function alone.
///
/// # Examples
///
/// ```
/// use polyseq::transformer::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns the text with every letter in upper case.
///
/// Unicode-aware: case mapping may change the character count
/// (`"straße"` becomes `"STRASSE"`).
///
/// # Examples
///
/// ```
/// use polyseq::transformer::to_upper;
///
/// assert_eq!(to_upper("señor"), "SEÑOR");
/// ```
#[inline]
#[must_use]
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Returns the text with every letter in lower case.
///
/// # Examples
///
/// ```
/// use polyseq::transformer::to_lower;
///
/// assert_eq!(to_lower("LOUD Noises"), "loud noises");
/// ```
#[inline]
#[must_use]
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Returns the text without leading and trailing whitespace.
///
/// Interior whitespace is untouched.
///
/// # Examples
///
/// ```
/// use polyseq::transformer::trim;
///
/// assert_eq!(trim("  padded out \n"), "padded out");
/// assert_eq!(trim("a b"), "a b");
/// ```
#[inline]
#[must_use]
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// Renders any value as compact JSON text.
///
/// Total over the whole value universe: `nil` renders as `null`, mapping
/// entries keep insertion order, and non-finite numbers render as `null`
/// (JSON has no lexeme for them).
///
/// # Examples
///
/// ```
/// use polyseq::transformer::stringify;
/// use polyseq::value::Value;
///
/// assert_eq!(stringify(&Value::Nil), "null");
/// assert_eq!(stringify(&Value::from(true)), "true");
/// assert_eq!(
///     stringify(&Value::List(vec![Value::from(1), Value::from("two")])),
///     r#"[1.0,"two"]"#
/// );
/// ```
#[inline]
#[must_use]
pub fn stringify(value: &Value) -> String {
    serde_json::Value::from(value).to_string()
}
