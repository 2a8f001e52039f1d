//! The borrowed element view handed to traversal closures.

use crate::value::Value;

/// One element of a [`Sequence`](super::Sequence), as seen during traversal.
///
/// Every traversing operation ([`each`](super::Sequence::each),
/// [`filter`](super::Sequence::filter),
/// [`drop_while`](super::Sequence::drop_while),
/// [`take_while`](super::Sequence::take_while)) hands the caller's closure a
/// value of this type, so a single closure can be written against whichever
/// representations it expects and ignore the rest with a catch-all arm.
///
/// Ordered representations carry the zero-based position of the element;
/// mapping entries carry the key instead.
///
/// # Examples
///
/// ```
/// use polyseq::seq::{Element, Sequence};
///
/// let sequence = Sequence::from("ab");
/// let mut seen = Vec::new();
/// sequence.each(|element| {
///     if let Element::Character { value, index } = element {
///         seen.push((value, index));
///     }
/// });
/// assert_eq!(seen, vec![('a', 0), ('b', 1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element<'a> {
    /// An ordered-list element.
    Item {
        /// The element value.
        value: &'a Value,
        /// Zero-based position within the list.
        index: usize,
    },
    /// A character of a character sequence.
    Character {
        /// The character.
        value: char,
        /// Zero-based position within the sequence, counted in characters.
        index: usize,
    },
    /// A key bound to its value within a mapping.
    Binding {
        /// The mapping key.
        key: &'a str,
        /// The value bound to the key.
        value: &'a Value,
    },
}

impl Element<'_> {
    /// Returns the zero-based position for ordered representations, or
    /// `None` for a mapping entry.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Item { index, .. } | Self::Character { index, .. } => Some(*index),
            Self::Binding { .. } => None,
        }
    }

    /// Materializes the element as an owned [`Value`].
    ///
    /// List items and mapping values are cloned; a character becomes a
    /// one-character string value.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::seq::Element;
    /// use polyseq::value::Value;
    ///
    /// let element = Element::Character { value: 'x', index: 0 };
    /// assert_eq!(element.to_value(), Value::from("x"));
    /// ```
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Item { value, .. } | Self::Binding { value, .. } => (*value).clone(),
            Self::Character { value, .. } => Value::Str(String::from(*value)),
        }
    }
}
