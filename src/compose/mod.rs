//! Function composition utilities.
//!
//! This module provides macros and functions for combining functions
//! in a functional programming style. It enables declarative, point-free
//! programming patterns that are common in functional languages.
//!
//! # Overview
//!
//! The module provides the following utilities:
//!
//! - [`apply!`]: Invoke a callable with a spelled-out argument list
//! - [`compose!`]: Chain functions left-to-right (data flow order)
//! - [`partial!`]: Partial function application with placeholder support
//! - [`cond`]: Apply a transformation only to arguments a predicate accepts
//!
//! # Examples
//!
//! ## Function Composition (left-to-right)
//!
//! ```
//! use polyseq::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = g(f(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 12); // double(add_one(5)) = double(6) = 12
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use polyseq::partial;
//! use polyseq::reducer::add;
//!
//! // Use __ as a placeholder for arguments that should remain as parameters.
//! // Note: Do NOT import __ - it is matched as a literal token by the macro.
//! let add_five = partial!(add, 5.0, __);
//! assert_eq!(add_five(3.0), 8.0);
//! ```
//!
//! ## Conditional Application
//!
//! ```
//! use polyseq::compose::cond;
//!
//! let absolute = cond(|number: &f64| *number < 0.0, |number: f64| -number);
//! assert_eq!(absolute(-3.0), 3.0);
//! assert_eq!(absolute(7.0), 7.0);
//! ```
//!
//! ## Invocation
//!
//! ```
//! use polyseq::{apply, compose};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(apply!(compose!(add_one, double), 5), 12);
//! ```
//!
//! # Mathematical Background
//!
//! ## Function Composition
//!
//! Function composition creates a new function by combining two functions.
//! Given `f: A -> B` and `g: B -> C`, the chain `(f ; g): A -> C` is defined as:
//!
//! ```text
//! (f ; g)(x) = g(f(x))
//! ```
//!
//! The [`compose!`] macro implements this left-to-right chaining, matching
//! the mental model of data flowing through transformations:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! Note that the mathematical `∘` operator reads the other way around;
//! here the first-listed function always runs first.
//!
//! ## Partial Application
//!
//! Partial application fixes some arguments of a function, producing a new
//! function with fewer arguments:
//!
//! ```text
//! partial(f, a, _)(b) = f(a, b)
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Conditional Application Laws
//!
//! - **Acceptance**: `cond(p, t)(x) == t(x)` whenever `p(&x)`
//! - **Rejection**: `cond(p, t)(x) == x` whenever `!p(&x)`

mod apply_macro;
mod compose_macro;
mod partial_macro;
mod utils;

// Re-export helper items
pub use utils::{__, Placeholder, cond};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::apply;
pub use crate::compose;
pub use crate::partial;
