//! The sequence sum type and its polymorphic operations.

use std::fmt;

use indexmap::IndexMap;

use super::{Element, UnsupportedError};
use crate::value::{Value, ValueKind};

/// A runtime value classified into one of the three sequence
/// representations, or `Unsupported` for everything else.
///
/// The operations on this type are polymorphic over the representation: each
/// one is a single `match` that dispatches to a per-representation algorithm
/// and produces its result in the *same* representation it consumed. A
/// caller can therefore thread a sequence through several operations without
/// ever checking which representation it started from.
///
/// Classification from the dynamic value universe is [`From<Value>`]; the
/// reverse embedding is [`to_value`](Self::to_value) /
/// [`into_value`](Self::into_value).
///
/// # Representations
///
/// - [`List`](Self::List): finite ordered sequence of arbitrary values,
///   indexable by position.
/// - [`Chars`](Self::Chars): finite ordered sequence of characters, held as
///   one immutable string. Positions count Unicode scalar values, not bytes.
/// - [`Mapping`](Self::Mapping): unique keys bound to values, iterated in
///   key insertion order. The order is a processing guarantee only; mapping
///   equality ignores it.
/// - [`Unsupported`](Self::Unsupported): any other value. Operations refuse
///   it with [`UnsupportedError`] (except [`each`](Self::each), which
///   silently visits nothing).
///
/// No operation mutates its input: every success allocates a fresh sequence,
/// so the original remains usable afterwards.
///
/// # Examples
///
/// ```
/// use polyseq::seq::Sequence;
/// use polyseq::value::Value;
///
/// let sequence: Sequence = (1..=5).map(Value::from).collect();
/// let prefix = sequence.take(2)?;
///
/// assert_eq!(prefix, (1..=2).map(Value::from).collect::<Sequence>());
/// assert_eq!(sequence.len(), 5);
/// # Ok::<(), polyseq::seq::UnsupportedError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    /// A finite ordered sequence of arbitrary values.
    List(Vec<Value>),
    /// A finite ordered sequence of characters.
    Chars(String),
    /// An insertion-ordered collection of unique keys bound to values.
    Mapping(IndexMap<String, Value>),
    /// Any input that is not one of the three sequence representations.
    Unsupported(Value),
}

impl Sequence {
    /// Returns the [`ValueKind`] describing this sequence's representation.
    ///
    /// An unsupported input reports the kind of the value it holds.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::List(_) => ValueKind::List,
            Self::Chars(_) => ValueKind::Str,
            Self::Mapping(_) => ValueKind::Map,
            Self::Unsupported(value) => value.kind(),
        }
    }

    /// Returns the number of elements: items for a list, characters for a
    /// character sequence, entries for a mapping, and `0` for an
    /// unsupported input (traversal visits nothing).
    ///
    /// # Complexity
    ///
    /// O(1), except O(n) for a character sequence (characters are counted,
    /// not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Chars(text) => text.chars().count(),
            Self::Mapping(entries) => entries.len(),
            Self::Unsupported(_) => 0,
        }
    }

    /// Returns `true` if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Chars(text) => text.is_empty(),
            Self::Mapping(entries) => entries.is_empty(),
            Self::Unsupported(_) => true,
        }
    }

    /// Returns `true` unless this is an [`Unsupported`](Self::Unsupported)
    /// input.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Returns the list items as a slice, or `None` for any other
    /// representation.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the character sequence as a string slice, or `None` for any
    /// other representation.
    #[must_use]
    pub fn as_chars(&self) -> Option<&str> {
        match self {
            Self::Chars(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the mapping entries, or `None` for any other representation.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Embeds the sequence back into the value universe, cloning the
    /// payload.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Embeds the sequence back into the value universe, consuming it.
    ///
    /// This is the inverse of classification: for every value `v`,
    /// `Sequence::from(v.clone()).into_value() == v`.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::List(items) => Value::List(items),
            Self::Chars(text) => Value::Str(text),
            Self::Mapping(entries) => Value::Map(entries),
            Self::Unsupported(value) => value,
        }
    }

    const fn unsupported(&self, operation: &'static str) -> UnsupportedError {
        UnsupportedError {
            operation,
            kind: self.kind(),
        }
    }

    /// Returns the sub-sequence obtained by removing the first `count`
    /// elements.
    ///
    /// A `count` of `0` returns the whole sequence as a new instance; a
    /// `count` past the end returns an empty sequence of the same
    /// representation.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedError`] if the representation is neither an
    /// ordered list nor a character sequence.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::seq::Sequence;
    /// use polyseq::value::Value;
    ///
    /// let sequence: Sequence = (1..=5).map(Value::from).collect();
    /// assert_eq!(
    ///     sequence.drop_first(2)?,
    ///     (3..=5).map(Value::from).collect::<Sequence>()
    /// );
    /// assert_eq!(sequence.drop_first(10)?, Sequence::List(Vec::new()));
    ///
    /// let text = Sequence::from("héllo");
    /// assert_eq!(text.drop_first(2)?, Sequence::from("llo"));
    ///
    /// assert!(Sequence::from(Value::from(4)).drop_first(1).is_err());
    /// # Ok::<(), polyseq::seq::UnsupportedError>(())
    /// ```
    pub fn drop_first(&self, count: usize) -> Result<Self, UnsupportedError> {
        match self {
            Self::List(items) => Ok(Self::List(items.iter().skip(count).cloned().collect())),
            Self::Chars(text) => Ok(Self::Chars(text.chars().skip(count).collect())),
            Self::Mapping(_) | Self::Unsupported(_) => Err(self.unsupported("drop_first")),
        }
    }

    /// Returns the sub-sequence consisting of the first `count` elements.
    ///
    /// A `count` of `0` returns an empty sequence of the same
    /// representation; a `count` past the end returns the whole sequence.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedError`] if the representation is neither an
    /// ordered list nor a character sequence.
    ///
    /// # Complexity
    ///
    /// O(min(n, count))
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::seq::Sequence;
    ///
    /// let text = Sequence::from("abcdef");
    /// assert_eq!(text.take(3)?, Sequence::from("abc"));
    /// assert_eq!(text.take(0)?, Sequence::from(""));
    /// assert_eq!(text.take(100)?, Sequence::from("abcdef"));
    /// # Ok::<(), polyseq::seq::UnsupportedError>(())
    /// ```
    pub fn take(&self, count: usize) -> Result<Self, UnsupportedError> {
        match self {
            Self::List(items) => Ok(Self::List(items.iter().take(count).cloned().collect())),
            Self::Chars(text) => Ok(Self::Chars(text.chars().take(count).collect())),
            Self::Mapping(_) | Self::Unsupported(_) => Err(self.unsupported("take")),
        }
    }

    /// Removes the maximal prefix of elements satisfying `predicate` and
    /// returns the rest.
    ///
    /// Elements are tested in ascending index order; scanning stops at the
    /// first element the predicate rejects, and that element begins the
    /// result. If the predicate holds for every element the result is empty;
    /// if it rejects the first element the whole sequence is returned.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedError`] if the representation is neither an
    /// ordered list nor a character sequence.
    ///
    /// # Complexity
    ///
    /// O(k) predicate calls for a dropped prefix of length k.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::predicate;
    /// use polyseq::seq::{Element, Sequence};
    ///
    /// let text = Sequence::from("42nd street");
    /// let rest = text.drop_while(|element| match element {
    ///     Element::Character { value, .. } => predicate::is_digit(value),
    ///     _ => false,
    /// })?;
    /// assert_eq!(rest, Sequence::from("nd street"));
    /// # Ok::<(), polyseq::seq::UnsupportedError>(())
    /// ```
    pub fn drop_while<P>(&self, mut predicate: P) -> Result<Self, UnsupportedError>
    where
        P: FnMut(Element<'_>) -> bool,
    {
        match self {
            Self::List(items) => {
                let split = items
                    .iter()
                    .enumerate()
                    .position(|(index, value)| !predicate(Element::Item { value, index }))
                    .unwrap_or(items.len());
                Ok(Self::List(items[split..].to_vec()))
            }
            Self::Chars(text) => {
                let mut split = text.len();
                for (index, (offset, character)) in text.char_indices().enumerate() {
                    if !predicate(Element::Character {
                        value: character,
                        index,
                    }) {
                        split = offset;
                        break;
                    }
                }
                Ok(Self::Chars(text[split..].to_string()))
            }
            Self::Mapping(_) | Self::Unsupported(_) => Err(self.unsupported("drop_while")),
        }
    }

    /// Returns the maximal prefix of elements satisfying `predicate`.
    ///
    /// The dual of [`drop_while`](Self::drop_while): for any predicate `p`,
    /// concatenating `take_while(p)` with `drop_while(p)` reassembles the
    /// original sequence. Scanning stops at the first rejected element.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedError`] if the representation is neither an
    /// ordered list nor a character sequence.
    ///
    /// # Complexity
    ///
    /// O(k) predicate calls for a kept prefix of length k.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::predicate;
    /// use polyseq::seq::{Element, Sequence};
    ///
    /// let text = Sequence::from("42nd street");
    /// let digits = text.take_while(|element| match element {
    ///     Element::Character { value, .. } => predicate::is_digit(value),
    ///     _ => false,
    /// })?;
    /// assert_eq!(digits, Sequence::from("42"));
    /// # Ok::<(), polyseq::seq::UnsupportedError>(())
    /// ```
    pub fn take_while<P>(&self, mut predicate: P) -> Result<Self, UnsupportedError>
    where
        P: FnMut(Element<'_>) -> bool,
    {
        match self {
            Self::List(items) => {
                let split = items
                    .iter()
                    .enumerate()
                    .position(|(index, value)| !predicate(Element::Item { value, index }))
                    .unwrap_or(items.len());
                Ok(Self::List(items[..split].to_vec()))
            }
            Self::Chars(text) => {
                let mut split = text.len();
                for (index, (offset, character)) in text.char_indices().enumerate() {
                    if !predicate(Element::Character {
                        value: character,
                        index,
                    }) {
                        split = offset;
                        break;
                    }
                }
                Ok(Self::Chars(text[..split].to_string()))
            }
            Self::Mapping(_) | Self::Unsupported(_) => Err(self.unsupported("take_while")),
        }
    }

    /// Performs a full ordered traversal, invoking `visit` once per element
    /// for its side effects.
    ///
    /// Lists and character sequences are visited in ascending index order;
    /// mappings are visited in key insertion order. Every element is visited
    /// exactly once and nothing is accumulated. An unsupported input is
    /// traversed as empty: `visit` is never invoked and no failure is
    /// signaled. A panic raised by `visit` propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::seq::{Element, Sequence};
    /// use polyseq::value::Value;
    ///
    /// let sequence: Sequence = (1..=3).map(Value::from).collect();
    /// let mut calls = Vec::new();
    /// sequence.each(|element| {
    ///     if let Element::Item { value, index } = element {
    ///         calls.push((value.clone(), index));
    ///     }
    /// });
    ///
    /// assert_eq!(
    ///     calls,
    ///     vec![
    ///         (Value::from(1), 0),
    ///         (Value::from(2), 1),
    ///         (Value::from(3), 2),
    ///     ]
    /// );
    /// ```
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(Element<'_>),
    {
        match self {
            Self::List(items) => {
                for (index, value) in items.iter().enumerate() {
                    visit(Element::Item { value, index });
                }
            }
            Self::Chars(text) => {
                for (index, character) in text.chars().enumerate() {
                    visit(Element::Character {
                        value: character,
                        index,
                    });
                }
            }
            Self::Mapping(entries) => {
                for (key, value) in entries {
                    visit(Element::Binding { key, value });
                }
            }
            Self::Unsupported(_) => {}
        }
    }

    /// Returns a new sequence keeping exactly the elements for which
    /// `exclude` returns `false`.
    ///
    /// This operation follows the **exclusion** convention: an element the
    /// predicate matches is *removed* from the result, the reverse of the
    /// usual keep-matches filtering. The argument is named `exclude` so call
    /// sites read accordingly; do not negate the predicate out of habit.
    ///
    /// For lists and character sequences the closure receives the element
    /// and its position; for mappings it receives the key-value binding, and
    /// excluding a binding removes that key from the result. Relative order
    /// of the kept elements is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedError`] if the input is not one of the three
    /// sequence representations.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::predicate;
    /// use polyseq::seq::{Element, Sequence};
    /// use polyseq::value::Value;
    ///
    /// let numbers: Sequence = (1..=6).map(Value::from).collect();
    /// let odds = numbers.filter(|element| match element {
    ///     Element::Item { value, .. } => value
    ///         .as_number()
    ///         .is_some_and(|number| predicate::is_even(number as i64)),
    ///     _ => false,
    /// })?;
    /// assert_eq!(odds, [1, 3, 5].into_iter().map(Value::from).collect::<Sequence>());
    ///
    /// let stock: Sequence = vec![
    ///     (String::from("apples"), Value::from(0)),
    ///     (String::from("pears"), Value::from(7)),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let in_stock = stock.filter(|element| match element {
    ///     Element::Binding { value, .. } => value.as_number() == Some(0.0),
    ///     _ => false,
    /// })?;
    /// assert_eq!(in_stock.len(), 1);
    /// assert!(in_stock.as_mapping().is_some_and(|entries| entries.contains_key("pears")));
    /// # Ok::<(), polyseq::seq::UnsupportedError>(())
    /// ```
    pub fn filter<P>(&self, mut exclude: P) -> Result<Self, UnsupportedError>
    where
        P: FnMut(Element<'_>) -> bool,
    {
        match self {
            Self::List(items) => Ok(Self::List(
                items
                    .iter()
                    .enumerate()
                    .filter(|&(index, value)| !exclude(Element::Item { value, index }))
                    .map(|(_, value)| value.clone())
                    .collect(),
            )),
            Self::Chars(text) => Ok(Self::Chars(
                text.chars()
                    .enumerate()
                    .filter(|&(index, value)| !exclude(Element::Character { value, index }))
                    .map(|(_, character)| character)
                    .collect(),
            )),
            Self::Mapping(entries) => Ok(Self::Mapping(
                entries
                    .iter()
                    .filter(|&(key, value)| {
                        !exclude(Element::Binding {
                            key: key.as_str(),
                            value,
                        })
                    })
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            )),
            Self::Unsupported(_) => Err(self.unsupported("filter")),
        }
    }

    /// Concatenates any number of sequences into one, dispatching on the
    /// representation of the *first* argument only.
    ///
    /// - **Lists**: elements of every list argument are concatenated in
    ///   argument order. A later argument of any other representation is
    ///   appended as a single value.
    /// - **Character sequences**: the texts are concatenated in argument
    ///   order. A later argument of any other representation appends its
    ///   compact JSON text.
    /// - **Mappings**: the entries are merged in argument order. When the
    ///   same key appears more than once, the value from the *rightmost*
    ///   argument wins, and the key keeps the position of its first
    ///   occurrence. A later argument of any other representation is
    ///   ignored.
    ///
    /// Later arguments are not verified against the first argument's
    /// representation; the per-representation rules above are the complete
    /// behavior for mixed input.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedError`] if there are no arguments (reported with
    /// kind `nil`) or if the first argument is an unsupported input.
    ///
    /// # Complexity
    ///
    /// O(total size of all arguments)
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::seq::Sequence;
    /// use polyseq::value::Value;
    ///
    /// let left: Sequence = (1..=2).map(Value::from).collect();
    /// let right: Sequence = (3..=4).map(Value::from).collect();
    /// assert_eq!(
    ///     Sequence::concat([&left, &right])?,
    ///     (1..=4).map(Value::from).collect::<Sequence>()
    /// );
    ///
    /// let greeting = Sequence::concat([&Sequence::from("ab"), &Sequence::from("cd")])?;
    /// assert_eq!(greeting, Sequence::from("abcd"));
    ///
    /// let base: Sequence = vec![(String::from("a"), Value::from(1))].into_iter().collect();
    /// let update: Sequence = vec![
    ///     (String::from("a"), Value::from(2)),
    ///     (String::from("b"), Value::from(3)),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let merged = Sequence::concat([&base, &update])?;
    /// assert_eq!(
    ///     merged.as_mapping().and_then(|entries| entries.get("a")),
    ///     Some(&Value::from(2))
    /// );
    /// # Ok::<(), polyseq::seq::UnsupportedError>(())
    /// ```
    pub fn concat<'a, I>(sequences: I) -> Result<Self, UnsupportedError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut rest = sequences.into_iter();
        let Some(first) = rest.next() else {
            return Err(UnsupportedError {
                operation: "concat",
                kind: ValueKind::Nil,
            });
        };
        match first {
            Self::List(items) => {
                let mut joined = items.clone();
                for sequence in rest {
                    match sequence {
                        Self::List(more) => joined.extend(more.iter().cloned()),
                        other => joined.push(other.to_value()),
                    }
                }
                Ok(Self::List(joined))
            }
            Self::Chars(text) => {
                let mut joined = text.clone();
                for sequence in rest {
                    match sequence {
                        Self::Chars(more) => joined.push_str(more),
                        other => joined.push_str(&other.to_value().to_string()),
                    }
                }
                Ok(Self::Chars(joined))
            }
            Self::Mapping(entries) => {
                let mut joined = entries.clone();
                for sequence in rest {
                    if let Self::Mapping(more) = sequence {
                        for (key, value) in more {
                            joined.insert(key.clone(), value.clone());
                        }
                    }
                }
                Ok(Self::Mapping(joined))
            }
            Self::Unsupported(_) => Err(first.unsupported("concat")),
        }
    }
}

impl From<Value> for Sequence {
    /// Classifies a value into its sequence representation.
    fn from(value: Value) -> Self {
        match value {
            Value::List(items) => Self::List(items),
            Value::Str(text) => Self::Chars(text),
            Value::Map(entries) => Self::Mapping(entries),
            other => Self::Unsupported(other),
        }
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        sequence.into_value()
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::Chars(String::from(text))
    }
}

impl From<String> for Sequence {
    fn from(text: String) -> Self {
        Self::Chars(text)
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<IndexMap<String, Value>> for Sequence {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Mapping(entries)
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::List(items.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Sequence {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        Self::Mapping(entries.into_iter().collect())
    }
}

impl From<&Sequence> for serde_json::Value {
    fn from(sequence: &Sequence) -> Self {
        match sequence {
            Sequence::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            Sequence::Chars(text) => Self::String(text.clone()),
            Sequence::Mapping(entries) => Self::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            ),
            Sequence::Unsupported(value) => Self::from(value),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&serde_json::Value::from(self), formatter)
    }
}
