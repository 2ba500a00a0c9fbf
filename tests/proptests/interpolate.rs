//! Property tests for exact interpolation at zero

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use sharecrack::Error;
use sharecrack::interpolate::{Point, interpolate_at, interpolate_at_zero};

/// Integer polynomial of degree 0..=7 with coefficients of any width
#[derive(Clone, Debug)]
struct Polynomial(Vec<BigInt>);

impl Polynomial {
    fn eval(&self, x: &BigInt) -> BigInt {
        // Horner's rule, highest degree first
        self.0
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coefficient| acc * x + coefficient)
    }

    fn constant(&self) -> &BigInt {
        &self.0[0]
    }

    fn threshold(&self) -> usize {
        self.0.len()
    }
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = (usize::arbitrary(g) % 8) + 1;
        let coefficients = (0..len)
            .map(|_| {
                let small = BigInt::from(i64::arbitrary(g));
                // Occasionally shift far past 64 bits
                if bool::arbitrary(g) {
                    small << 256_u32
                } else {
                    small
                }
            })
            .collect();
        Polynomial(coefficients)
    }
}

/// Shares of a polynomial sampled at distinct x coordinates
#[derive(Clone, Debug)]
struct Sampled {
    polynomial: Polynomial,
    points: Vec<Point>,
}

impl Arbitrary for Sampled {
    fn arbitrary(g: &mut Gen) -> Self {
        let polynomial = Polynomial::arbitrary(g);

        let mut xs = HashSet::new();
        while xs.len() < polynomial.threshold() {
            xs.insert(i16::arbitrary(g));
        }

        let points = xs
            .into_iter()
            .map(|x| {
                let x = BigInt::from(x);
                let y = polynomial.eval(&x);
                Point { x, y }
            })
            .collect();

        Sampled { polynomial, points }
    }
}

/// k samples of a degree-(k-1) polynomial recover its constant term exactly
#[quickcheck]
fn prop_recovers_constant_term(sampled: Sampled) -> bool {
    interpolate_at_zero(&sampled.points).as_ref() == Ok(sampled.polynomial.constant())
}

/// Reordering the points never changes the result
#[quickcheck]
fn prop_order_invariant(sampled: Sampled, rotation: usize) -> bool {
    let expected = interpolate_at_zero(&sampled.points);

    let mut reversed = sampled.points.clone();
    reversed.reverse();

    let mut rotated = sampled.points.clone();
    let len = rotated.len();
    rotated.rotate_left(rotation % len);

    interpolate_at_zero(&reversed) == expected && interpolate_at_zero(&rotated) == expected
}

/// The interpolating polynomial agrees with the source polynomial everywhere
#[quickcheck]
fn prop_evaluates_anywhere(sampled: Sampled, x: i32) -> bool {
    let x = BigInt::from(x);
    interpolate_at(&sampled.points, &x) == Ok(sampled.polynomial.eval(&x))
}

/// Repeating an x coordinate is always rejected
#[quickcheck]
fn prop_duplicate_x_rejected(sampled: Sampled, y: i64) -> bool {
    let mut points = sampled.points.clone();
    let duplicate = Point {
        x: points[0].x.clone(),
        y: BigInt::from(y),
    };
    let expected_x = duplicate.x.clone();
    points.push(duplicate);

    interpolate_at_zero(&points) == Err(Error::DegenerateInput { x: expected_x })
}
