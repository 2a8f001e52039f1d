//! Helper items for function composition.
//!
//! This module provides the conditional-application combinator and the
//! placeholder machinery used by [`partial!`](crate::partial):
//!
//! - [`cond`]: Applies a transformation only to arguments a predicate accepts
//! - [`Placeholder`] / [`__`]: The marker behind the `partial!` placeholder syntax

/// Applies a transformation only when the predicate accepts the argument.
///
/// Returns a function that tests its argument with `predicate`: on
/// acceptance it returns `transform(argument)`, otherwise it returns the
/// argument unchanged. Because the rejected branch passes the argument
/// through, input and output share one type.
///
/// # Laws
///
/// - **Acceptance**: `cond(p, t)(x) == t(x)` whenever `p(&x)`
/// - **Rejection**: `cond(p, t)(x) == x` whenever `!p(&x)`
/// - **Always-false predicate**: `cond(|_| false, t)` is equivalent to
///   [`identity`](crate::transformer::identity)
///
/// # Type Parameters
///
/// * `T` - The argument type, passed through unchanged on rejection
/// * `P` - The predicate type (receives the argument by reference)
/// * `F` - The transformation type (must implement [`Fn`])
///
/// # Arguments
///
/// * `predicate` - Decides whether the transformation runs
/// * `transform` - The transformation applied to accepted arguments
///
/// # Returns
///
/// A function from `T` to `T` applying `transform` conditionally.
///
/// # Examples
///
/// ```
/// use polyseq::compose::cond;
///
/// let absolute = cond(|number: &f64| *number < 0.0, |number: f64| -number);
///
/// assert_eq!(absolute(-3.5), 3.5);
/// assert_eq!(absolute(4.0), 4.0);
/// ```
///
/// # Use with the catalogs
///
/// ```
/// use polyseq::compose::cond;
/// use polyseq::transformer::to_upper;
///
/// let shout_questions = cond(
///     |text: &String| text.ends_with('?'),
///     |text: String| to_upper(&text),
/// );
///
/// assert_eq!(shout_questions(String::from("ready?")), "READY?");
/// assert_eq!(shout_questions(String::from("ready.")), "ready.");
/// ```
#[inline]
pub fn cond<T, P, F>(predicate: P, transform: F) -> impl Fn(T) -> T
where
    P: Fn(&T) -> bool,
    F: Fn(T) -> T,
{
    move |argument| {
        if predicate(&argument) {
            transform(argument)
        } else {
            argument
        }
    }
}

/// Placeholder marker type for partial application.
///
/// This type is used internally by the [`partial!`](crate::partial) macro.
/// Users should use `__` (double underscore) directly in the macro invocation
/// as a literal token, without importing it.
///
/// # Examples
///
/// ```
/// use polyseq::partial;
/// use polyseq::reducer::add;
///
/// // Use __ directly as a placeholder - do NOT import it
/// let add_five = partial!(add, 5.0, __);
/// assert_eq!(add_five(3.0), 8.0);
///
/// // Fix the second argument, leave the first as a parameter
/// let add_to_ten = partial!(add, __, 10.0);
/// assert_eq!(add_to_ten(3.0), 13.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// **Important**: Do NOT import this constant when using [`partial!`](crate::partial).
/// The macro matches `__` as a literal identifier token. Importing this constant
/// would cause the macro pattern matching to fail.
///
/// This constant exists for potential programmatic use cases, but for the
/// `partial!` macro, simply write `__` directly without importing.
///
/// Note: This is named `__` (double underscore) because Rust's `macro_rules!`
/// cannot match a single underscore `_` as a literal token.
///
/// # Examples
///
/// ```
/// use polyseq::partial;
/// use polyseq::reducer::div;
///
/// // Use __ directly - do NOT import compose::__
/// let half = partial!(div, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
