//! Property tests for arbitrary-base decoding

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use sharecrack::Error;
use sharecrack::codec::{decode, encode};
use sharecrack::domain::Base;

/// Wrapper for supported bases (2..=36)
#[derive(Clone, Copy, Debug)]
struct ValidBase(Base);

impl Arbitrary for ValidBase {
    fn arbitrary(g: &mut Gen) -> Self {
        let value = (u32::arbitrary(g) % 35) + 2; // 2..=36
        ValidBase(Base::new(value).expect("Base in range"))
    }
}

/// Wrapper for unsigned integers of arbitrary width
#[derive(Clone, Debug)]
struct BigValue(BigUint);

impl Arbitrary for BigValue {
    fn arbitrary(g: &mut Gen) -> Self {
        // Little-endian 32-bit limbs
        BigValue(BigUint::new(Vec::arbitrary(g)))
    }
}

/// Encoding a value and decoding it again recovers the value
#[quickcheck]
fn prop_decode_inverts_encode(value: BigValue, base: ValidBase) -> bool {
    let BigValue(value) = value;
    let ValidBase(base) = base;

    let encoded = encode(&value, base);
    decode(&encoded, *base) == Ok(value)
}

/// Letter case never changes the decoded value
#[quickcheck]
fn prop_decode_ignores_case(value: BigValue, base: ValidBase) -> bool {
    let BigValue(value) = value;
    let ValidBase(base) = base;

    let encoded = encode(&value, base);
    decode(&encoded.to_uppercase(), *base) == decode(&encoded, *base)
}

/// Values that fit in 64 bits agree with the standard library parser
#[quickcheck]
fn prop_decode_matches_u64_reference(value: u64, base: ValidBase) -> bool {
    let ValidBase(base) = base;

    let encoded = encode(&BigUint::from(value), base);
    u64::from_str_radix(&encoded, *base) == Ok(value)
        && decode(&encoded, *base) == Ok(BigUint::from(value))
}

/// Leading zeros do not change the value
#[quickcheck]
fn prop_leading_zeros(value: u64, zeros: u8, base: ValidBase) -> bool {
    let ValidBase(base) = base;

    let padded = format!(
        "{}{}",
        "0".repeat(usize::from(zeros % 16)),
        encode(&BigUint::from(value), base)
    );
    decode(&padded, *base) == Ok(BigUint::from(value))
}

/// A digit at or above the base is rejected at its position
#[quickcheck]
fn prop_out_of_range_digit_rejected(value: u64, base: ValidBase, offset: u8) -> bool {
    let ValidBase(base) = base;
    if *base == Base::MAX {
        return true; // Every alphanumeric digit is valid in base 36
    }

    let digit_value = *base + u32::from(offset) % (Base::MAX - *base);
    let Some(digit) = char::from_digit(digit_value, Base::MAX) else {
        return false;
    };

    let prefix = encode(&BigUint::from(value), base);
    let position = prefix.chars().count();
    let input = format!("{prefix}{digit}");

    decode(&input, *base)
        == Err(Error::InvalidDigit {
            digit,
            position,
            base: *base,
        })
}
