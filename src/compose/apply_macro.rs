//! The `apply!` macro for explicit function invocation.
//!
//! This module provides the [`apply!`] macro which invokes a callable with
//! a spelled-out argument list.

/// Invokes a callable with the given arguments.
///
/// `apply!(f, a, b)` is equivalent to `f(a, b)`; with no arguments,
/// `apply!(f)` is equivalent to `f()`. The macro earns its keep when the
/// callable is itself an expression, such as the result of
/// [`compose!`](crate::compose) or [`partial!`](crate::partial): the
/// parenthesization is handled for you and the call site stays in the
/// combinator vocabulary.
///
/// # Syntax
///
/// - `apply!(f)` - Invokes `f` with no arguments
/// - `apply!(f, a)` - Invokes `f` with one argument
/// - `apply!(f, a, b, ...)` - Invokes `f` with any number of arguments
///
/// # Type Requirements
///
/// The first operand must be callable with exactly the arguments supplied;
/// this is checked at compile time like any ordinary call.
///
/// # Examples
///
/// ## Plain invocation
///
/// ```
/// use polyseq::apply;
/// use polyseq::reducer::add;
///
/// assert_eq!(apply!(add, 2.0, 3.0), 5.0);
/// ```
///
/// ## Invoking a composed pipeline
///
/// ```
/// use polyseq::{apply, compose};
/// use polyseq::transformer::{to_upper, trim};
///
/// let tidy = compose!(trim, |text: String| to_upper(&text));
/// assert_eq!(apply!(tidy, " quiet "), "QUIET");
/// ```
///
/// ## Invoking a thunk
///
/// ```
/// use polyseq::{apply, partial};
/// use polyseq::reducer::mul;
///
/// let six = partial!(mul, 2.0, 3.0);
/// assert_eq!(apply!(six), 6.0);
/// ```
#[macro_export]
macro_rules! apply {
    // No arguments: invoke as a thunk
    ($function:expr $(,)?) => {
        ($function)()
    };

    // One or more arguments
    ($function:expr, $($argument:expr),+ $(,)?) => {
        ($function)($($argument),+)
    };
}
