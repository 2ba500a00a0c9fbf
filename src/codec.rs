//! Arbitrary-base encoding of share values
//!
//! Share values arrive as digit strings in bases 2 through 36. Digits run
//! `0-9` then `a-z`, matched case-insensitively. Values routinely exceed
//! 64 bits, so everything is decoded into [`BigUint`].
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use sharecrack::codec::{decode, encode};
//! use sharecrack::domain::Base;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let y = decode("111", 2)?;
//! assert_eq!(y, BigUint::from(7u32));
//!
//! let y = decode("E1B5E05623D881F", 16)?;
//! assert_eq!(encode(&y, Base::new(16)?), "e1b5e05623d881f");
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;

use crate::domain::Base;
use crate::error::{Error, Result};

/// Decodes `value` as an unsigned integer written in `base`
///
/// Only bare digits are accepted: no sign, no separators, no whitespace.
///
/// # Errors
/// - [`Error::InvalidBase`] if `base` is outside 2..=36
/// - [`Error::EmptyValue`] if `value` has no digits
/// - [`Error::InvalidDigit`] for the first character that is not a digit of `base`
pub fn decode(value: &str, base: u32) -> Result<BigUint> {
    let base = Base::new(base)?;
    if value.is_empty() {
        return Err(Error::EmptyValue);
    }

    let digits = value
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            digit
                .to_digit(*base)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(Error::InvalidDigit {
                    digit,
                    position,
                    base: *base,
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    // `from_radix_be` only fails for radix > 256 or a digit >= radix, and
    // both were ruled out above, so the `None` arm is unreachable
    BigUint::from_radix_be(&digits, *base)
        .ok_or_else(|| unreachable!("digits were validated against base {}", *base))
}

/// Encodes `value` in `base` using lowercase digits
///
/// Inverse of [`decode`] up to letter case and leading zeros.
#[must_use]
pub fn encode(value: &BigUint, base: Base) -> String {
    value.to_str_radix(*base)
}
