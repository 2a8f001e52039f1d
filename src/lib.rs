//! # polyseq
//!
//! Polymorphic sequence operations for Rust over a dynamic value universe:
//! one set of operations that works the same way on ordered lists,
//! character sequences, and key-value mappings.
//!
//! ## Overview
//!
//! An input value is classified once into a closed sum of representations;
//! after that, every operation dispatches on that sum and answers in the
//! representation it was given. The library includes:
//!
//! - **Sequence Operations**: `drop_first`, `take`, `drop_while`,
//!   `take_while`, `each`, `filter`, and `concat` over the
//!   [`Sequence`](seq::Sequence) sum type
//! - **Value Universe**: the dynamic [`Value`](value::Value) type with
//!   hand-written serde support and JSON rendering
//! - **Catalogs**: ready-made [`predicate`]s, [`transformer`]s, and
//!   [`reducer`]s shaped for the operations' closure parameters
//! - **Function Composition**: `apply!`, `compose!`, `partial!` macros and
//!   the [`cond`](compose::cond) combinator
//!
//! ## Example
//!
//! ```rust
//! use polyseq::{compose, prelude::*};
//! use polyseq::transformer;
//!
//! // Classify once, then thread one value through several operations.
//! let line = Sequence::from("1729 bottles");
//! let count = line.take_while(|element| match element {
//!     Element::Character { value, .. } => predicate::is_digit(value),
//!     _ => false,
//! })?;
//! assert_eq!(count, Sequence::from("1729"));
//!
//! // Combinators build the small functions the operations consume.
//! let shout = compose!(transformer::trim, |text: String| {
//!     transformer::to_upper(&text)
//! });
//! assert_eq!(shout("  loud  "), "LOUD");
//! # Ok::<(), polyseq::seq::UnsupportedError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence types, the value universe, and the catalogs.
///
/// # Usage
///
/// ```rust
/// use polyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::{Placeholder, cond};
    pub use crate::seq::{Element, Sequence, UnsupportedError};
    pub use crate::value::{Value, ValueKind};
    pub use crate::{predicate, reducer, transformer};
}

pub mod compose;

pub mod predicate;

pub mod reducer;

pub mod seq;

pub mod transformer;

pub mod value;
