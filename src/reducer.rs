//! A small catalog of binary arithmetic reducers.
//!
//! Fold-ready companions to the other catalogs: each function combines two
//! numbers into one and is shaped for `fold` positions or for fixing one
//! side with [`partial!`](crate::partial). All arithmetic is IEEE-754
//! `f64`: there are no overflow or divide-by-zero guards, so `div(1.0,
//! 0.0)` is `+∞` and invalid operations produce `NaN`, exactly as the
//! hardware defines them.

/// Returns the sum of the two numbers.
///
/// # Examples
///
/// ```
/// use polyseq::reducer::add;
///
/// assert_eq!(add(2.0, 3.0), 5.0);
/// assert_eq!([1.0, 2.0, 3.0].into_iter().fold(0.0, add), 6.0);
/// ```
#[inline]
#[must_use]
pub const fn add(augend: f64, addend: f64) -> f64 {
    augend + addend
}

/// Returns the difference of the two numbers.
///
/// # Examples
///
/// ```
/// use polyseq::reducer::sub;
///
/// assert_eq!(sub(10.0, 4.0), 6.0);
/// ```
#[inline]
#[must_use]
pub const fn sub(minuend: f64, subtrahend: f64) -> f64 {
    minuend - subtrahend
}

/// Returns the product of the two numbers.
///
/// # Examples
///
/// ```
/// use polyseq::reducer::mul;
///
/// assert_eq!(mul(6.0, 7.0), 42.0);
/// ```
#[inline]
#[must_use]
pub const fn mul(multiplicand: f64, multiplier: f64) -> f64 {
    multiplicand * multiplier
}

/// Returns the quotient of the two numbers.
///
/// Division by zero follows IEEE-754: a non-zero numerator yields a signed
/// infinity and `0.0 / 0.0` yields `NaN`.
///
/// # Examples
///
/// ```
/// use polyseq::reducer::div;
///
/// assert_eq!(div(9.0, 2.0), 4.5);
/// assert_eq!(div(1.0, 0.0), f64::INFINITY);
/// assert!(div(0.0, 0.0).is_nan());
/// ```
#[inline]
#[must_use]
pub const fn div(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator
}

/// Returns the remainder of truncated division.
///
/// The result has the sign of the dividend: `rem(-7.0, 3.0)` is `-1.0`,
/// not `2.0`.
///
/// # Examples
///
/// ```
/// use polyseq::reducer::rem;
///
/// assert_eq!(rem(7.0, 3.0), 1.0);
/// assert_eq!(rem(-7.0, 3.0), -1.0);
/// assert_eq!(rem(7.5, 2.0), 1.5);
/// ```
#[inline]
#[must_use]
pub const fn rem(dividend: f64, divisor: f64) -> f64 {
    dividend % divisor
}
