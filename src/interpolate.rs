//! Exact Lagrange interpolation over the integers
//!
//! For points (x_i, y_i) the interpolating polynomial evaluated at `t` is
//!
//! ```text
//! P(t) = Σ_i y_i · Π_{j≠i} (t − x_j) / (x_i − x_j)
//! ```
//!
//! Each term is kept as an exact fraction. The terms are brought to a
//! common denominator, summed, and divided once at the end; a remainder
//! means the points do not lie on an integer-valued polynomial.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// A decoded share: the polynomial passes through (x, y)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    /// Creates a point from anything convertible to [`BigInt`]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Evaluates the polynomial through `points` at x = 0, recovering its
/// constant term
///
/// The degree of the polynomial is `points.len() - 1`; callers pass exactly
/// the threshold number of points.
///
/// # Errors
/// - [`Error::InsufficientPoints`] if `points` is empty
/// - [`Error::DegenerateInput`] if two points share an x coordinate
/// - [`Error::NonIntegralSecret`] if the constant term is not an integer
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use sharecrack::interpolate::{Point, interpolate_at_zero};
///
/// // x² + 3
/// let points = [Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
/// assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(3));
/// ```
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt> {
    interpolate_at(points, &BigInt::zero())
}

/// Evaluates the polynomial through `points` at `x`
///
/// # Errors
/// Same as [`interpolate_at_zero`].
pub fn interpolate_at(points: &[Point], x: &BigInt) -> Result<BigInt> {
    if points.is_empty() {
        return Err(Error::InsufficientPoints {
            needed: 1,
            available: 0,
        });
    }
    ensure_distinct(points)?;

    // (y_i · Π (x − x_j), Π (x_i − x_j)) for every i
    let terms: Vec<(BigInt, BigInt)> = points
        .iter()
        .enumerate()
        .map(|(i, pi)| {
            points
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold((pi.y.clone(), BigInt::one()), |(num, den), (_, pj)| {
                    (num * (x - &pj.x), den * (&pi.x - &pj.x))
                })
        })
        .collect();

    let denominator = terms
        .iter()
        .fold(BigInt::one(), |acc, (_, den)| acc * den);

    let numerator = terms
        .iter()
        .fold(BigInt::zero(), |acc, (num, den)| acc + num * (&denominator / den));

    if !(&numerator % &denominator).is_zero() {
        return Err(Error::NonIntegralSecret);
    }
    Ok(numerator / denominator)
}

/// Rejects point sets where two points share an x coordinate
fn ensure_distinct(points: &[Point]) -> Result<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(&point.x) {
            return Err(Error::DegenerateInput { x: point.x.clone() });
        }
    }
    Ok(())
}
