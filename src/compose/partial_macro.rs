//! The `partial!` macro for partial function application.
//!
//! This module provides the [`partial!`] macro which allows fixing some
//! arguments of a function while leaving others as parameters.

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that should
/// remain as parameters in the resulting function.
///
/// **Important**: Do NOT import `polyseq::compose::__`. The `__` is
/// matched as a literal token by the macro.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)` (identity)
///
/// Similar patterns apply for 1, 3, and 4 argument functions.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (since the partial function may be called multiple times)
/// - The original function must implement [`Fn`]
///
/// # Supported Argument Counts
///
/// This macro supports functions with 1 to 4 arguments.
///
/// # Examples
///
/// ## Basic partial application
///
/// ```
/// use polyseq::partial;
/// use polyseq::reducer::add;
///
/// let add_five = partial!(add, 5.0, __);
/// assert_eq!(add_five(3.0), 8.0);
/// assert_eq!(add_five(10.0), 15.0);
/// ```
///
/// ## Fixing the second argument
///
/// ```
/// use polyseq::partial;
/// use polyseq::reducer::div;
///
/// let half = partial!(div, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// ## Sequence operations as unary pipeline stages
///
/// ```
/// use polyseq::partial;
/// use polyseq::seq::Sequence;
///
/// let first_three = partial!(Sequence::take, __, 3);
/// assert_eq!(first_three(&Sequence::from("abcdef"))?, Sequence::from("abc"));
/// # Ok::<(), polyseq::seq::UnsupportedError>(())
/// ```
///
/// ## Three-argument function
///
/// ```
/// use polyseq::partial;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello_with_exclamation = partial!(format_greeting, "Hello", __, "!");
/// assert_eq!(hello_with_exclamation("Alice"), "Hello, Alice!");
/// ```
///
/// ## Creating a thunk (all arguments fixed)
///
/// ```
/// use polyseq::partial;
/// use polyseq::reducer::add;
///
/// let thunk = partial!(add, 3.0, 5.0);
/// assert_eq!(thunk(), 8.0);
/// ```
///
/// ## With compose!
///
/// ```
/// use polyseq::{compose, partial};
/// use polyseq::reducer::{add, mul};
///
/// let double = partial!(mul, 2.0, __);
/// let add_ten = partial!(add, 10.0, __);
///
/// let double_then_add_ten = compose!(double, add_ten);
/// assert_eq!(double_then_add_ten(5.0), 20.0);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 4-argument functions (most specific patterns first)
    // =========================================================================

    // (f, __, __, __, __) -> |a, b, c, d| f(a, b, c, d)
    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4| function(arg1, arg2, arg3, arg4)
    }};

    // (f, v1, __, __, __) -> |b, c, d| f(v1, b, c, d)
    ($function:expr, $arg1:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3, arg4| function(arg1.clone(), arg2, arg3, arg4)
    }};

    // (f, __, v2, __, __) -> |a, c, d| f(a, v2, c, d)
    ($function:expr, __, $arg2:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3, arg4| function(arg1, arg2.clone(), arg3, arg4)
    }};

    // (f, __, __, v3, __) -> |a, b, d| f(a, b, v3, d)
    ($function:expr, __, __, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2, arg4| function(arg1, arg2, arg3.clone(), arg4)
    }};

    // (f, __, __, __, v4) -> |a, b, c| f(a, b, c, v4)
    ($function:expr, __, __, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg4 = $arg4;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3, arg4.clone())
    }};

    // (f, v1, v2, __, __) -> |c, d| f(v1, v2, c, d)
    ($function:expr, $arg1:expr, $arg2:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3, arg4| function(arg1.clone(), arg2.clone(), arg3, arg4)
    }};

    // (f, v1, __, v3, __) -> |b, d| f(v1, b, v3, d)
    ($function:expr, $arg1:expr, __, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2, arg4| function(arg1.clone(), arg2, arg3.clone(), arg4)
    }};

    // (f, v1, __, __, v4) -> |b, c| f(v1, b, c, v4)
    ($function:expr, $arg1:expr, __, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg4 = $arg4;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3, arg4.clone())
    }};

    // (f, __, v2, v3, __) -> |a, d| f(a, v2, v3, d)
    ($function:expr, __, $arg2:expr, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1, arg4| function(arg1, arg2.clone(), arg3.clone(), arg4)
    }};

    // (f, __, v2, __, v4) -> |a, c| f(a, v2, c, v4)
    ($function:expr, __, $arg2:expr, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg4 = $arg4;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3, arg4.clone())
    }};

    // (f, __, __, v3, v4) -> |a, b| f(a, b, v3, v4)
    ($function:expr, __, __, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1, arg2| function(arg1, arg2, arg3.clone(), arg4.clone())
    }};

    // (f, v1, v2, v3, __) -> |d| f(v1, v2, v3, d)
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg4| function(arg1.clone(), arg2.clone(), arg3.clone(), arg4)
    }};

    // (f, v1, v2, __, v4) -> |c| f(v1, v2, c, v4)
    ($function:expr, $arg1:expr, $arg2:expr, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg4 = $arg4;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3, arg4.clone())
    }};

    // (f, v1, __, v3, v4) -> |b| f(v1, b, v3, v4)
    ($function:expr, $arg1:expr, __, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg2| function(arg1.clone(), arg2, arg3.clone(), arg4.clone())
    }};

    // (f, __, v2, v3, v4) -> |a| f(a, v2, v3, v4)
    ($function:expr, __, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1| function(arg1, arg2.clone(), arg3.clone(), arg4.clone())
    }};

    // (f, v1, v2, v3, v4) -> || f(v1, v2, v3, v4) (thunk - 4 args)
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move || function(arg1.clone(), arg2.clone(), arg3.clone(), arg4.clone())
    }};

    // =========================================================================
    // 3-argument functions
    // =========================================================================

    // (f, __, __, __) -> |a, b, c| f(a, b, c)
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    // (f, v1, __, __) -> |b, c| f(v1, b, c)
    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    // (f, __, v2, __) -> |a, c| f(a, v2, c)
    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    // (f, __, __, v3) -> |a, b| f(a, b, v3)
    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    // (f, v1, v2, __) -> |c| f(v1, v2, c)
    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    // (f, v1, __, v3) -> |b| f(v1, b, v3)
    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    // (f, __, v2, v3) -> |a| f(a, v2, v3)
    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    // (f, v1, v2, v3) -> || f(v1, v2, v3) (thunk - 3 args)
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    // (f, __, __) -> |a, b| f(a, b)
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    // (f, value, __) -> |b| f(value, b)
    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    // (f, __, value) -> |a| f(a, value)
    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};

    // (f, v1, v2) -> || f(v1, v2) (thunk - 2 args)
    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};

    // =========================================================================
    // 1-argument functions (must be last due to pattern matching order)
    // =========================================================================

    // (f, __) -> |a| f(a)
    ($function:expr, __ $(,)?) => {{
        let function = $function;
        move |arg1| function(arg1)
    }};

    // (f, v1) -> || f(v1) (thunk - 1 arg, must be last)
    ($function:expr, $arg1:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move || function(arg1.clone())
    }};
}
