//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which chains functions
//! from left to right, in the order the data flows through them.

/// Chains functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// The leftmost function is applied first: the argument list reads in the
/// same order the stages run, like a pipeline. Note that this is the
/// reverse of the mathematical `∘` notation, which would apply the
/// rightmost function first.
///
/// # Laws
///
/// The composition operation satisfies the following laws:
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged (identity composition)
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h)` - Returns `|x| h(g(f(x)))`
/// - `compose!(f, g, h, ...)` - Chains any number of functions
///
/// # Type Requirements
///
/// All functions must implement the [`Fn`] trait. The output type of each
/// function must match the input type of the next function in the chain
/// (reading left to right).
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use polyseq::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = g(f(x)) = double(add_one(5)) = double(6) = 12
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 12);
/// ```
///
/// ## Three-function composition
///
/// ```
/// use polyseq::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // compose!(f, g, h)(x) = h(g(f(x)))
/// // = square(double(add_one(3))) = square(double(4)) = square(8) = 64
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 64);
/// ```
///
/// ## Immediate application
///
/// ```
/// use polyseq::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // Can apply immediately without storing in a variable
/// let result = compose!(add_one, double)(5);
/// assert_eq!(result, 12);
/// ```
///
/// ## Type conversion
///
/// ```
/// use polyseq::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// // Types flow through the composition in argument order
/// let composed = compose!(to_string, get_length);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## With the transformer catalog
///
/// ```
/// use polyseq::compose;
/// use polyseq::transformer::{to_lower, trim};
///
/// let normalize = compose!(trim, |text: String| to_lower(&text));
/// assert_eq!(normalize("  MiXeD Case  "), "mixed case");
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use polyseq::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// // These are equivalent due to associativity
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    // Just returns the function as-is
    ($function:expr) => {
        $function
    };

    // Two functions: basic composition
    // compose!(f, g)(x) = g(f(x))
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more functions: recursive composition
    // compose!(f, g, h, ...) applies f first, then compose!(g, h, ...)
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_composed = $crate::compose!($($remaining_functions),+);
        move |input| remaining_composed(first(input))
    }};
}
