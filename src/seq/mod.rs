//! Polymorphic operations over ordered lists, character sequences, and
//! key-value mappings.
//!
//! The entry point is [`Sequence`], a closed sum of the three supported
//! representations plus an [`Unsupported`](Sequence::Unsupported) escape
//! hatch for everything else. Classification happens once, at
//! [`Sequence::from`]; after that every operation is total over the sum and
//! reports a representation it cannot serve through [`UnsupportedError`]
//! rather than a sentinel value.
//!
//! Traversal closures receive an [`Element`], the per-representation view of
//! one element: a positioned item, a positioned character, or a key-value
//! binding.
//!
//! # Examples
//!
//! ```
//! use polyseq::seq::{Element, Sequence};
//! use polyseq::value::Value;
//!
//! let sequence: Sequence = (1..=6).map(Value::from).collect();
//! let kept = sequence
//!     .drop_first(1)?
//!     .take_while(|element| match element {
//!         Element::Item { value, .. } => value.as_number() < Some(6.0),
//!         _ => false,
//!     })?;
//!
//! assert_eq!(kept, (2..=5).map(Value::from).collect::<Sequence>());
//! # Ok::<(), polyseq::seq::UnsupportedError>(())
//! ```

mod element;
mod error;
mod sequence;

pub use element::Element;
pub use error::UnsupportedError;
pub use sequence::Sequence;
