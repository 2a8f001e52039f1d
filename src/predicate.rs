//! A small catalog of reusable predicates and the `not` combinator.
//!
//! These are the test functions most often handed to
//! [`Sequence::drop_while`](crate::seq::Sequence::drop_while),
//! [`take_while`](crate::seq::Sequence::take_while), and
//! [`filter`](crate::seq::Sequence::filter). Every predicate is a plain
//! function taking its subject by value, so it can be passed as a function
//! item, wrapped with [`not`], or fixed with
//! [`partial!`](crate::partial).

/// Negates a one-argument predicate.
///
/// # Laws
///
/// - **Involution**: `not(not(p))(x) == p(x)`
/// - **Definition**: `not(p)(x) == !p(x)`
///
/// # Examples
///
/// ```
/// use polyseq::predicate::{is_even, not};
///
/// let is_not_even = not(is_even);
/// assert!(is_not_even(3));
/// assert!(!is_not_even(4));
/// ```
#[inline]
pub fn not<T, P>(predicate: P) -> impl Fn(T) -> bool
where
    P: Fn(T) -> bool,
{
    move |input| !predicate(input)
}

/// Returns `true` if the number is divisible by two.
///
/// Zero and negative even numbers count as even.
///
/// # Examples
///
/// ```
/// use polyseq::predicate::is_even;
///
/// assert!(is_even(4));
/// assert!(is_even(0));
/// assert!(is_even(-2));
/// assert!(!is_even(7));
/// ```
#[inline]
#[must_use]
pub const fn is_even(number: i64) -> bool {
    number % 2 == 0
}

/// Returns `true` if the number is not divisible by two.
///
/// The complement of [`is_even`] over all integers, negative odd numbers
/// included.
///
/// # Examples
///
/// ```
/// use polyseq::predicate::is_odd;
///
/// assert!(is_odd(7));
/// assert!(is_odd(-3));
/// assert!(!is_odd(0));
/// ```
#[inline]
#[must_use]
pub const fn is_odd(number: i64) -> bool {
    number % 2 != 0
}

/// Returns `true` if the character is an ASCII decimal digit (`0-9`).
///
/// Non-ASCII digits such as `٣` are rejected.
///
/// # Examples
///
/// ```
/// use polyseq::predicate::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('x'));
/// assert!(!is_digit('٣'));
/// ```
#[inline]
#[must_use]
pub const fn is_digit(character: char) -> bool {
    character.is_ascii_digit()
}

/// Returns `true` if the character is an ASCII letter, either case
/// (`A-Z` or `a-z`).
///
/// Characters between the two ranges in the ASCII table, such as `_` and
/// `^`, are rejected, as are accented letters.
///
/// # Examples
///
/// ```
/// use polyseq::predicate::is_alphabetic;
///
/// assert!(is_alphabetic('k'));
/// assert!(is_alphabetic('Q'));
/// assert!(!is_alphabetic('_'));
/// assert!(!is_alphabetic('é'));
/// ```
#[inline]
#[must_use]
pub const fn is_alphabetic(character: char) -> bool {
    character.is_ascii_alphabetic()
}
